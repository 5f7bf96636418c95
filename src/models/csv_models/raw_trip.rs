use serde::Deserialize;

/// As read from a city CSV.
///
/// The upstream exports write the row id in an unnamed leading column
/// and format numeric columns as floats ("1063.0"); values are kept
/// wide here and narrowed when converted to a `TripRecord`. Optional
/// columns deserialize to `None` both when the column is absent and
/// when a field is empty.
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "", alias = "Trip ID", default)]
    pub id: Option<u64>,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Trip Duration")]
    pub duration_secs: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}
