//! Participant counts per location label
//!
//! Groups by exact label equality. Normalisation and coordinate lookup
//! belong to the presentation layer.

use std::collections::HashMap;

use serde::Serialize;

/// Number of participants sharing a location label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub name: String,
    pub count: u64,
}

/// Count `items` per label, most populated first (ties by name).
/// Items without a label are skipped.
pub fn group_by_location<T, F>(items: impl IntoIterator<Item = T>, label_of: F) -> Vec<LocationCount>
where
    F: Fn(&T) -> Option<String>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for item in items {
        if let Some(label) = label_of(&item) {
            *counts.entry(label).or_default() += 1;
        }
    }

    let mut grouped: Vec<LocationCount> = counts
        .into_iter()
        .map(|(name, count)| LocationCount { name, count })
        .collect();
    grouped.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    grouped
}
