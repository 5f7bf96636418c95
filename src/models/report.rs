//! Aggregate results and their rendered form.
//!
//! Each analyzer returns one of these structs; the presentation layer
//! prints them through their `Display` impls.

use std::fmt::{Display, Formatter};

/// Most frequent value of a filterable axis, or a marker that the axis
/// was already narrowed to a single value by the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisSummary {
    Filtered(String),
    MostCommon { value: String, trips: usize },
}

impl Display for AxisSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisSummary::Filtered(value) => write!(f, "filtered to {value}"),
            AxisSummary::MostCommon { value, trips } => write!(f, "{value} ({trips} trips)"),
        }
    }
}

/// Busiest travel times of the filtered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: AxisSummary,
    pub weekday: AxisSummary,
    pub hour: u32,
    pub hour_trips: usize,
}

impl Display for TimeStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Most frequent times of travel")?;
        writeln!(f, "  month: {}", self.month)?;
        writeln!(f, "  day:   {}", self.weekday)?;
        write!(f, "  hour:  {} ({} trips)", self.hour, self.hour_trips)
    }
}

/// Duration aggregates, in whole seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub mean_secs: f64,
    pub total_secs: u64,
    /// Per-gender breakdown, present only when the city provides a
    /// gender column.
    pub per_gender: Option<Vec<GenderDuration>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderDuration {
    pub gender: String,
    pub min_secs: u64,
    /// Rounded to one decimal place.
    pub mean_secs: f64,
    pub max_secs: u64,
}

impl Display for DurationStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Trip duration")?;
        writeln!(f, "  average: {}", fmt_hms(self.mean_secs as u64))?;
        write!(f, "  total:   {}", fmt_hms(self.total_secs))?;
        if let Some(groups) = &self.per_gender {
            write!(f, "\n  per gender:")?;
            for g in groups {
                write!(
                    f,
                    "\n    {}: min {}, mean {}, max {}",
                    g.gender,
                    fmt_hms(g.min_secs),
                    fmt_hms(g.mean_secs as u64),
                    fmt_hms(g.max_secs)
                )?;
            }
        }
        Ok(())
    }
}

/// One category of a grouped count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub trips: usize,
}

/// User demographics of the filtered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub by_user_type: Vec<Bucket>,
    pub by_gender: Option<Vec<Bucket>>,
    pub birth_years: Option<BirthYearStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: YearAge,
    pub most_common: YearAge,
    pub most_recent: YearAge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearAge {
    pub year: i32,
    pub age: i32,
}

impl YearAge {
    pub fn new(year: i32, current_year: i32) -> Self {
        Self {
            year,
            age: current_year - year,
        }
    }
}

impl Display for UserStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "User stats")?;
        write!(f, "  by user type:")?;
        for b in &self.by_user_type {
            write!(f, "\n    {}: {} trips", b.label, b.trips)?;
        }
        match &self.by_gender {
            Some(buckets) => {
                write!(f, "\n  by gender:")?;
                for b in buckets {
                    write!(f, "\n    {}: {} trips", b.label, b.trips)?;
                }
            }
            None => write!(f, "\n  no gender data for this city")?,
        }
        match &self.birth_years {
            Some(y) => {
                write!(f, "\n  year of birth:")?;
                write!(
                    f,
                    "\n    earliest:    {} (age {})",
                    y.earliest.year, y.earliest.age
                )?;
                write!(
                    f,
                    "\n    most common: {} (age {})",
                    y.most_common.year, y.most_common.age
                )?;
                write!(
                    f,
                    "\n    most recent: {} (age {})",
                    y.most_recent.year, y.most_recent.age
                )?;
            }
            None => write!(f, "\n  no birth year data for this city")?,
        }
        Ok(())
    }
}

/// Most popular stations and route of the filtered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub top_start: String,
    pub top_end: String,
    pub top_route: String,
    pub top_route_trips: usize,
}

impl Display for StationStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Popular stations")?;
        writeln!(f, "  top start station: {}", self.top_start)?;
        writeln!(f, "  top end station:   {}", self.top_end)?;
        write!(
            f,
            "  top route: '{}' ({} trips)",
            self.top_route, self.top_route_trips
        )
    }
}

/// Renders whole seconds as `h:mm:ss`. Sub-second precision is
/// truncated by callers before the conversion.
fn fmt_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_hms_pads_minutes_and_seconds() {
        assert_eq!(fmt_hms(0), "0:00:00");
        assert_eq!(fmt_hms(61), "0:01:01");
        assert_eq!(fmt_hms(3600 * 41 + 22 * 60 + 10), "41:22:10");
    }

    #[test]
    fn axis_summary_renders_both_variants() {
        let filtered = AxisSummary::Filtered("March".to_string());
        let top = AxisSummary::MostCommon {
            value: "June".to_string(),
            trips: 1342,
        };

        assert_eq!(filtered.to_string(), "filtered to March");
        assert_eq!(top.to_string(), "June (1342 trips)");
    }
}
