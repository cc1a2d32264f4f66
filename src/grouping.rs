use crate::models::{DayGroup, Exercise};
use std::collections::BTreeMap;

/// Partitions exercises into per-day buckets, most recent day first.
/// Within a bucket the source-sequence order is kept, so same-day entries
/// display in the order the log holds them (newest-first, since adds
/// prepend). The representative date for a bucket is its first entry.
pub fn group_by_day(exercises: &[Exercise]) -> Vec<DayGroup> {
    let mut buckets: BTreeMap<String, Vec<Exercise>> = BTreeMap::new();
    for exercise in exercises {
        buckets
            .entry(exercise.day_key())
            .or_default()
            .push(exercise.clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|(day, exercises)| DayGroup { day, exercises })
        .collect()
}
