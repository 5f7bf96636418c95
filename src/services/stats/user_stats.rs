use crate::consts::UNKNOWN_BUCKET;
use crate::errors::EmptyDatasetError;
use crate::models::fields::OptionalField;
use crate::models::report::{BirthYearStats, Bucket, UserStats, YearAge};
use crate::table::TripTable;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// User demographics: counts by user type, counts by gender when the
/// city records it, and birth-year extremes and mode when recorded.
///
/// `current_year` comes from the caller so ages stay a pure function
/// of the inputs.
pub fn user_stats(table: &TripTable, current_year: i32) -> Result<UserStats, EmptyDatasetError> {
    if table.is_empty() {
        return Err(EmptyDatasetError {
            operation: "user counts",
        });
    }

    let by_user_type = bucket_counts(table.iter().map(|t| t.user_type.as_deref()));
    let by_gender = table
        .has(OptionalField::Gender)
        .then(|| bucket_counts(table.iter().map(|t| t.gender.as_deref())));
    let birth_years = if table.has(OptionalField::BirthYear) {
        birth_year_stats(table, current_year)
    } else {
        None
    };

    Ok(UserStats {
        by_user_type,
        by_gender,
        birth_years,
    })
}

/// Counts values into sorted buckets, with missing values under the
/// explicit unknown label. Dropping them would silently undercount.
fn bucket_counts<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<Bucket> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value.unwrap_or(UNKNOWN_BUCKET)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(label, trips)| Bucket {
            label: label.to_string(),
            trips,
        })
        .collect()
}

/// Earliest, most common, and most recent birth year with ages.
/// A present-but-entirely-missing column yields `None` rather than a
/// min/max over nothing. The mode resolves ties to the smallest year.
fn birth_year_stats(table: &TripTable, current_year: i32) -> Option<BirthYearStats> {
    let years: Vec<i32> = table.iter().filter_map(|t| t.birth_year).collect();

    let earliest = *years.iter().min()?;
    let most_recent = *years.iter().max()?;

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in &years {
        *counts.entry(*year).or_insert(0) += 1;
    }
    let (most_common, _) = counts
        .into_iter()
        .min_by_key(|&(year, count)| (Reverse(count), year))?;

    Some(BirthYearStats {
        earliest: YearAge::new(earliest, current_year),
        most_common: YearAge::new(most_common, current_year),
        most_recent: YearAge::new(most_recent, current_year),
    })
}
