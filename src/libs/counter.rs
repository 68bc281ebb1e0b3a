//! Counter (sewa spot) labels and the suggestion list.
//!
//! The counter field is an unconstrained string with an autocomplete list
//! layered on top, not a closed enumeration. [`CounterLabel`] keeps the
//! distinction explicit for callers that care whether a label came from the
//! known list.

/// The counters known at the venue; seeds the config's suggestion list.
pub const DEFAULT_COUNTERS: [&str; 13] = [
    "Roti, Dal / Subzi",
    "Special Counter",
    "Dessert",
    "Chole Bhature",
    "Kadi / Rajma Chawal",
    "Bread Pakoda",
    "Tea",
    "Coffee / Cold Drink",
    "Chips Counter",
    "Sweets Counter",
    "Main office - Coupon Counters",
    "Main Office - Card Counter",
    "Main Office - Admin",
];

/// A counter label, tagged by whether it matches the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterLabel {
    /// Exactly one of the known counters (case-insensitive match).
    Known(String),
    /// Free text not present in the list. Stored as-is.
    Custom(String),
}

impl CounterLabel {
    /// Tags an input against the known list. A case-insensitive exact match
    /// is `Known` with the list's spelling; anything else is `Custom`.
    pub fn resolve(known: &[String], input: &str) -> Self {
        match known.iter().find(|c| c.eq_ignore_ascii_case(input.trim())) {
            Some(canonical) => CounterLabel::Known(canonical.clone()),
            None => CounterLabel::Custom(input.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CounterLabel::Known(s) | CounterLabel::Custom(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            CounterLabel::Known(s) | CounterLabel::Custom(s) => s,
        }
    }
}

/// Case-insensitive substring filter over the suggestion list, preserving
/// list order. An empty query returns every suggestion.
pub fn filter_counters(known: &[String], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    known.iter().filter(|c| c.to_lowercase().contains(&needle)).cloned().collect()
}
