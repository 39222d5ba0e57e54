//! Numeric-aware ordering of line items by sequence number.

use crate::model::OrderItem;
use std::cmp::Ordering;

/// Sort key derived from a free-text sequence number.
///
/// Numbers come first, ordered by value and then by their original text, so
/// "02" sorts right before "2". Anything that is not a finite number follows in
/// byte-wise lexicographic order.
///
/// "Number" means the text, with surrounding whitespace trimmed, is accepted
/// whole by `f64::from_str`: a leading sign, a fraction and an exponent are all
/// allowed (`" 3 "`, `"+5"`, `"2.5"`, `"1e3"`), while `"inf"` and `"NaN"` are
/// treated as text.
#[derive(Debug, Clone)]
pub struct SequenceKey {
    numeric: Option<f64>,
    text: String,
}

impl SequenceKey {
    /// Build the key for a sequence number.
    pub fn new(sequence_number: &str) -> Self {
        let numeric = sequence_number
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite());
        Self {
            numeric,
            text: sequence_number.to_string(),
        }
    }

    /// Numeric value, if the whole string is a number.
    pub fn numeric(&self) -> Option<f64> {
        self.numeric
    }

    /// Original text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Ord for SequenceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric, other.numeric) {
            (Some(a), Some(b)) => a.total_cmp(&b).then_with(|| self.text.cmp(&other.text)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.text.cmp(&other.text),
        }
    }
}

impl PartialOrd for SequenceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SequenceKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SequenceKey {}

/// Line items ordered by sequence key; equal keys keep their input order.
pub fn sort_items(items: &[OrderItem]) -> Vec<&OrderItem> {
    let mut sorted: Vec<&OrderItem> = items.iter().collect();
    sorted.sort_by_cached_key(|item| SequenceKey::new(&item.sequence_number));
    sorted
}
