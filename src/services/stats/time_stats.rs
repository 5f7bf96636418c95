use crate::errors::EmptyDatasetError;
use crate::models::report::{AxisSummary, TimeStats};
use crate::services::stats::util::most_frequent;
use crate::table::TripTable;
use std::collections::HashSet;

/// Busiest travel times of the filtered table.
///
/// The month and weekday axes report a most-frequent value only when
/// the table still spans more than one; after an exact filter they
/// collapse to a single value and are reported as such, without a
/// count. The start hour is never a filter axis, so its mode is
/// always computed.
pub fn time_stats(table: &TripTable) -> Result<TimeStats, EmptyDatasetError> {
    if table.is_empty() {
        return Err(EmptyDatasetError {
            operation: "travel time modes",
        });
    }

    let err = |operation| EmptyDatasetError { operation };

    let months: Vec<&str> = table.iter().map(|t| t.month()).collect();
    let weekdays: Vec<&str> = table.iter().map(|t| t.weekday()).collect();
    let (hour, hour_trips) =
        most_frequent(table.iter().map(|t| t.start_hour())).ok_or_else(|| err("start hour mode"))?;

    Ok(TimeStats {
        month: axis_summary(&months).ok_or_else(|| err("month mode"))?,
        weekday: axis_summary(&weekdays).ok_or_else(|| err("weekday mode"))?,
        hour,
        hour_trips,
    })
}

fn axis_summary(values: &[&str]) -> Option<AxisSummary> {
    let distinct: HashSet<&str> = values.iter().copied().collect();
    let (value, trips) = most_frequent(values.iter().copied())?;
    Some(if distinct.len() > 1 {
        AxisSummary::MostCommon {
            value: value.to_string(),
            trips,
        }
    } else {
        AxisSummary::Filtered(value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TIMESTAMP_FORMAT;
    use crate::models::fields::FieldSet;
    use crate::models::trip::TripRecord;
    use chrono::NaiveDateTime;

    fn trip(id: u64, ts: &str) -> TripRecord {
        TripRecord::new(
            id,
            NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).unwrap(),
            300,
            "A".to_string(),
            "B".to_string(),
            None,
            None,
            None,
        )
    }

    fn table(trips: Vec<TripRecord>) -> TripTable {
        TripTable::new(trips, FieldSet::default())
    }

    #[test]
    fn reports_the_most_common_start_hour_with_its_count() {
        let t = table(vec![
            trip(0, "2017-01-01 08:10:00"),
            trip(1, "2017-01-08 08:20:00"),
            trip(2, "2017-01-15 17:30:00"),
        ]);

        let stats = time_stats(&t).unwrap();

        assert_eq!(stats.hour, 8);
        assert_eq!(stats.hour_trips, 2);
    }

    #[test]
    fn multi_month_table_reports_the_busiest_month() {
        let t = table(vec![
            trip(0, "2017-01-01 08:00:00"),
            trip(1, "2017-06-01 09:00:00"),
            trip(2, "2017-06-02 10:00:00"),
        ]);

        let stats = time_stats(&t).unwrap();

        assert_eq!(
            stats.month,
            AxisSummary::MostCommon {
                value: "June".to_string(),
                trips: 2
            }
        );
    }

    #[test]
    fn single_month_table_reports_the_filter_instead_of_a_count() {
        let t = table(vec![
            trip(0, "2017-03-01 08:00:00"),
            trip(1, "2017-03-08 09:00:00"),
        ]);

        let stats = time_stats(&t).unwrap();

        assert_eq!(stats.month, AxisSummary::Filtered("March".to_string()));
    }

    #[test]
    fn hour_ties_resolve_to_the_first_seen_hour() {
        let t = table(vec![
            trip(0, "2017-01-01 17:00:00"),
            trip(1, "2017-01-02 08:00:00"),
            trip(2, "2017-01-03 17:30:00"),
            trip(3, "2017-01-04 08:30:00"),
        ]);

        let stats = time_stats(&t).unwrap();

        assert_eq!(stats.hour, 17);
        assert_eq!(stats.hour_trips, 2);
    }

    #[test]
    fn empty_table_is_an_error() {
        let t = table(vec![]);

        assert!(time_stats(&t).is_err());
    }
}
