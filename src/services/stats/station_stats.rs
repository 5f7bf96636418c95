use crate::errors::EmptyDatasetError;
use crate::models::report::StationStats;
use crate::services::stats::util::most_frequent;
use crate::table::TripTable;

/// Most used start station, end station, and route of the filtered
/// table. Undefined on an empty table, which is reported rather than
/// defaulted.
pub fn station_stats(table: &TripTable) -> Result<StationStats, EmptyDatasetError> {
    let err = || EmptyDatasetError {
        operation: "station modes",
    };
    if table.is_empty() {
        return Err(err());
    }

    let (top_start, _) =
        most_frequent(table.iter().map(|t| t.start_station.as_str())).ok_or_else(err)?;
    let (top_end, _) =
        most_frequent(table.iter().map(|t| t.end_station.as_str())).ok_or_else(err)?;

    let routes: Vec<String> = table.iter().map(|t| t.route()).collect();
    let (top_route, top_route_trips) =
        most_frequent(routes.iter().map(String::as_str)).ok_or_else(err)?;

    Ok(StationStats {
        top_start: top_start.to_string(),
        top_end: top_end.to_string(),
        top_route: top_route.to_string(),
        top_route_trips,
    })
}
