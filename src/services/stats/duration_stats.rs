use crate::consts::UNKNOWN_BUCKET;
use crate::errors::EmptyDatasetError;
use crate::models::fields::OptionalField;
use crate::models::report::{DurationStats, GenderDuration};
use crate::table::TripTable;
use std::collections::BTreeMap;

/// Running min/max/sum/count of one gender group.
#[derive(Clone, Copy)]
struct GroupAcc {
    min: u64,
    max: u64,
    sum: u64,
    count: usize,
}

impl GroupAcc {
    fn push(&mut self, secs: u64) {
        self.min = self.min.min(secs);
        self.max = self.max.max(secs);
        self.sum += secs;
        self.count += 1;
    }
}

/// Mean and total trip duration, plus a per-gender min/mean/max
/// breakdown when the city provides a gender column. Missing gender
/// values form their own group rather than being dropped.
pub fn duration_stats(table: &TripTable) -> Result<DurationStats, EmptyDatasetError> {
    if table.is_empty() {
        return Err(EmptyDatasetError {
            operation: "trip duration mean",
        });
    }

    let total_secs: u64 = table.iter().map(|t| t.duration_secs).sum();
    let mean_secs = total_secs as f64 / table.len() as f64;

    let per_gender = table.has(OptionalField::Gender).then(|| {
        let mut groups: BTreeMap<&str, GroupAcc> = BTreeMap::new();
        for trip in table.iter() {
            let gender = trip.gender.as_deref().unwrap_or(UNKNOWN_BUCKET);
            groups
                .entry(gender)
                .or_insert(GroupAcc {
                    min: u64::MAX,
                    max: 0,
                    sum: 0,
                    count: 0,
                })
                .push(trip.duration_secs);
        }
        groups
            .into_iter()
            .map(|(gender, acc)| GenderDuration {
                gender: gender.to_string(),
                min_secs: acc.min,
                // rounded to one decimal place before formatting
                mean_secs: (acc.sum as f64 / acc.count as f64 * 10.0).round() / 10.0,
                max_secs: acc.max,
            })
            .collect()
    });

    Ok(DurationStats {
        mean_secs,
        total_secs,
        per_gender,
    })
}
