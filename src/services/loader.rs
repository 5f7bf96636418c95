use crate::consts::TIMESTAMP_FORMAT;
use crate::errors::DataSourceError;
use crate::models::city::City;
use crate::models::csv_models::raw_trip::RawTrip;
use crate::models::fields::FieldSet;
use crate::models::filters::{DayFilter, MonthFilter};
use crate::models::trip::TripRecord;
use crate::services::filter::filter_trips;
use crate::table::TripTable;
use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Columns every city file must provide. Presence is checked against
/// the actual header record, never assumed.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
];

/// Loads a city's trip file, derives the calendar columns, and applies
/// the month/day filter before returning.
///
/// # Arguments
/// * `dir` - Directory holding the three city CSV files.
/// * `city` - Which city's file to read.
/// * `month`/`day` - Filter selection; `All` passes everything through.
///
/// # Returns
/// * The filtered `TripTable`, or a `DataSourceError` if the file is
///   missing or malformed.
pub fn load_data(
    dir: &Path,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> Result<TripTable, DataSourceError> {
    let path = dir.join(city.data_file());
    let file = File::open(&path).map_err(|source| DataSourceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let table = read_trips(BufReader::new(file))?;
    info!("loaded {} trips for {city}", table.len());

    let filtered = filter_trips(&table, month, day);
    info!(
        "{} trips left after filtering (month: {month}, day: {day})",
        filtered.len()
    );
    Ok(filtered)
}

/// Reads trip records from any CSV source. Split out from [`load_data`]
/// so ingestion is testable against in-memory input.
pub(crate) fn read_trips<R: Read>(input: R) -> Result<TripTable, DataSourceError> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataSourceError::MissingColumn(column));
        }
    }
    let fields = FieldSet::from_headers(headers.iter());

    let mut trips = Vec::new();
    for (position, record) in rdr.deserialize::<RawTrip>().enumerate() {
        let row = record?;
        trips.push(row_to_trip(row, position as u64)?);
    }
    Ok(TripTable::new(trips, fields))
}

/// Converts a raw CSV row into a `TripRecord`, parsing the start
/// timestamp and narrowing the float-formatted numeric columns.
fn row_to_trip(row: RawTrip, position: u64) -> Result<TripRecord, DataSourceError> {
    let start_time = NaiveDateTime::parse_from_str(&row.start_time, TIMESTAMP_FORMAT).map_err(
        |_| DataSourceError::BadTimestamp {
            row: position,
            value: row.start_time.clone(),
        },
    )?;

    if !row.duration_secs.is_finite() || row.duration_secs < 0.0 {
        return Err(DataSourceError::InvalidValue {
            row: position,
            column: "Trip Duration",
            value: row.duration_secs.to_string(),
        });
    }

    Ok(TripRecord::new(
        row.id.unwrap_or(position),
        start_time,
        row.duration_secs.round() as u64,
        row.start_station,
        row.end_station,
        row.user_type,
        row.gender,
        row.birth_year.map(|year| year as i32),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fields::OptionalField;

    fn table_from(csv: &str) -> Result<TripTable, DataSourceError> {
        read_trips(csv.as_bytes())
    }

    #[test]
    fn reads_rows_and_derives_calendar_columns() {
        // arrange: the full NYC/Chicago-style header, End Time ignored
        let csv = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-06-23 15:09:32,2017-06-23 15:14:53,321.0,Wood St,Damen Ave,Subscriber,Male,1992.0
1,2017-01-02 07:00:00,2017-01-02 07:10:00,600,Canal St,Clark St,Customer,,
";

        // act
        let table = table_from(csv).unwrap();

        // assert
        assert_eq!(table.len(), 2);
        assert!(table.has(OptionalField::UserType));
        assert!(table.has(OptionalField::Gender));
        assert!(table.has(OptionalField::BirthYear));

        let first = &table.trips()[0];
        assert_eq!(first.id, 0);
        assert_eq!(first.duration_secs, 321);
        assert_eq!(first.month(), "June");
        assert_eq!(first.weekday(), "Friday");
        assert_eq!(first.start_hour(), 15);
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));

        let second = &table.trips()[1];
        assert_eq!(second.month(), "January");
        assert_eq!(second.weekday(), "Monday");
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
    }

    #[test]
    fn optional_columns_absent_for_washington_style_files() {
        let csv = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-06 17:42:01,2017-03-06 17:49:26,445.0,14th St,17th St,Registered
";

        let table = table_from(csv).unwrap();

        assert!(table.has(OptionalField::UserType));
        assert!(!table.has(OptionalField::Gender));
        assert!(!table.has(OptionalField::BirthYear));
        assert_eq!(table.trips()[0].gender, None);
        assert_eq!(table.trips()[0].birth_year, None);
    }

    #[test]
    fn missing_required_column_fails_the_load() {
        let csv = "\
,Trip Duration,Start Station,End Station
0,300,A,B
";

        let err = table_from(csv).unwrap_err();

        assert!(matches!(
            err,
            DataSourceError::MissingColumn("Start Time")
        ));
    }

    #[test]
    fn unparsable_start_time_fails_the_load() {
        let csv = "\
,Start Time,Trip Duration,Start Station,End Station
0,2017-01-01 00:07:57,300,A,B
1,not-a-timestamp,300,A,B
";

        let err = table_from(csv).unwrap_err();

        assert!(matches!(
            err,
            DataSourceError::BadTimestamp { row: 1, .. }
        ));
    }

    #[test]
    fn negative_duration_fails_the_load() {
        let csv = "\
,Start Time,Trip Duration,Start Station,End Station
0,2017-01-01 00:07:57,-5,A,B
";

        let err = table_from(csv).unwrap_err();

        assert!(matches!(
            err,
            DataSourceError::InvalidValue {
                row: 0,
                column: "Trip Duration",
                ..
            }
        ));
    }

    #[test]
    fn row_position_stands_in_for_a_missing_id_column() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station
2017-01-01 00:07:57,300,A,B
2017-01-01 00:08:57,300,A,B
";

        let table = table_from(csv).unwrap();

        assert_eq!(table.trips()[0].id, 0);
        assert_eq!(table.trips()[1].id, 1);
    }

    #[test]
    fn zero_row_file_loads_as_an_empty_table() {
        let csv = ",Start Time,Trip Duration,Start Station,End Station\n";

        let table = table_from(csv).unwrap();

        assert!(table.is_empty());
    }
}
