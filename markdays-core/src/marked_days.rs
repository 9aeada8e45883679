//! The set of marked days and the toggle over it.

use std::collections::BTreeSet;

use crate::day_key::DayKey;

/// Set of marked day keys.
///
/// Treated as a value: `toggle` returns a new set and leaves the receiver
/// untouched, so a caller can keep the old set around for rollback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedDaySet {
    days: BTreeSet<DayKey>,
}

impl MarkedDaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a persisted sequence. Duplicates collapse.
    pub fn from_sequence(keys: Option<Vec<String>>) -> Self {
        keys.unwrap_or_default()
            .into_iter()
            .map(DayKey::from)
            .collect()
    }

    /// Members for persistence. Callers must not rely on the order.
    pub fn to_sequence(&self) -> Vec<String> {
        self.days.iter().map(|k| k.as_str().to_string()).collect()
    }

    /// New set with `key` removed if present, added otherwise.
    pub fn toggle(&self, key: &DayKey) -> MarkedDaySet {
        let mut days = self.days.clone();
        if !days.remove(key) {
            days.insert(key.clone());
        }
        MarkedDaySet { days }
    }

    pub fn is_marked(&self, key: &DayKey) -> bool {
        self.days.contains(key)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayKey> {
        self.days.iter()
    }
}

impl FromIterator<DayKey> for MarkedDaySet {
    fn from_iter<I: IntoIterator<Item = DayKey>>(iter: I) -> Self {
        MarkedDaySet {
            days: iter.into_iter().collect(),
        }
    }
}
