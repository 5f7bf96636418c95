use crate::models::filters::{DayFilter, MonthFilter};
use crate::table::TripTable;

/// Narrows a table to the trips matching the month and day selection.
///
/// Both filters are independently optional (`All` passes everything)
/// and compose with AND semantics. The result is a new table carrying
/// the same field capabilities; the input is never mutated, and a
/// zero-row result is valid.
pub fn filter_trips(table: &TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    let kept = table
        .iter()
        .filter(|trip| month.matches(trip.month()) && day.matches(trip.weekday()))
        .cloned()
        .collect();
    TripTable::new(kept, table.fields())
}
