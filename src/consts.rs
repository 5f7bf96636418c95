/// Format of the `Start Time` column in all three city files.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator joining start and end station into a route label.
pub const ROUTE_SEPARATOR: &str = " to ";

/// Bucket label for rows whose user type or gender is missing.
/// Missing values are counted under this label, never dropped.
pub const UNKNOWN_BUCKET: &str = "Unknown";
