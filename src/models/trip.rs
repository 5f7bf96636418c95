use crate::consts::ROUTE_SEPARATOR;
use chrono::{NaiveDateTime, Timelike};

/// A single trip, as loaded from a city file.
///
/// The month name, weekday name, and start hour are derived from the
/// start timestamp once, here, and never recomputed or mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub id: u64,
    pub start_time: NaiveDateTime,
    pub duration_secs: u64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    month: String,
    weekday: String,
    start_hour: u32,
}

impl TripRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        start_time: NaiveDateTime,
        duration_secs: u64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            id,
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month: start_time.format("%B").to_string(),
            weekday: start_time.format("%A").to_string(),
            start_hour: start_time.hour(),
            start_time,
        }
    }

    /// Full month name of the start timestamp, e.g. "January".
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Full weekday name of the start timestamp, e.g. "Monday".
    pub fn weekday(&self) -> &str {
        &self.weekday
    }

    /// Hour of day (0-23) the trip started.
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Route label: start and end station joined with the fixed separator.
    pub fn route(&self) -> String {
        format!(
            "{}{}{}",
            self.start_station, ROUTE_SEPARATOR, self.end_station
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TIMESTAMP_FORMAT;

    fn at(ts: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn derived_columns_follow_start_timestamp() {
        // 2017-03-06 was a Monday
        let trip = TripRecord::new(
            1,
            at("2017-03-06 17:42:01"),
            300,
            "A".to_string(),
            "B".to_string(),
            None,
            None,
            None,
        );

        assert_eq!(trip.month(), "March");
        assert_eq!(trip.weekday(), "Monday");
        assert_eq!(trip.start_hour(), 17);
    }

    #[test]
    fn route_joins_stations_with_separator() {
        let trip = TripRecord::new(
            1,
            at("2017-01-01 00:07:57"),
            300,
            "Canal St".to_string(),
            "Clark St".to_string(),
            None,
            None,
            None,
        );

        assert_eq!(trip.route(), "Canal St to Clark St");
    }
}
