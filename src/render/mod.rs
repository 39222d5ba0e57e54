//! Plain-text report rendering.

mod text;

pub use text::{
    format_dimensions, render_cutting_task, render_grouped_report, render_order_detail,
    render_totals,
};
