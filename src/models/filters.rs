use clap::ValueEnum;
use std::fmt::{Display, Formatter};

/// Month selection. `All` is the explicit "no filter" state; the
/// datasets only cover January through June.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonthFilter {
    #[default]
    All,
    January,
    February,
    March,
    April,
    May,
    June,
}

impl MonthFilter {
    pub fn name(self) -> &'static str {
        match self {
            MonthFilter::All => "All",
            MonthFilter::January => "January",
            MonthFilter::February => "February",
            MonthFilter::March => "March",
            MonthFilter::April => "April",
            MonthFilter::May => "May",
            MonthFilter::June => "June",
        }
    }

    /// Whether a trip with the given derived month name passes.
    /// Comparison is case-insensitive.
    pub fn matches(self, month_name: &str) -> bool {
        match self {
            MonthFilter::All => true,
            _ => self.name().eq_ignore_ascii_case(month_name),
        }
    }
}

impl Display for MonthFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Weekday selection as a two-letter code. The code is matched as a
/// prefix of the derived weekday name ("Mo" keeps "Monday").
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DayFilter {
    #[default]
    All,
    Mo,
    Tu,
    We,
    Th,
    Fr,
    Sa,
    Su,
}

impl DayFilter {
    pub fn code(self) -> &'static str {
        match self {
            DayFilter::All => "All",
            DayFilter::Mo => "Mo",
            DayFilter::Tu => "Tu",
            DayFilter::We => "We",
            DayFilter::Th => "Th",
            DayFilter::Fr => "Fr",
            DayFilter::Sa => "Sa",
            DayFilter::Su => "Su",
        }
    }

    /// Whether a trip with the given derived weekday name passes.
    pub fn matches(self, weekday_name: &str) -> bool {
        match self {
            DayFilter::All => true,
            _ => weekday_name.starts_with(self.code()),
        }
    }
}

impl Display for DayFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_all_passes_everything() {
        assert!(MonthFilter::All.matches("January"));
        assert!(MonthFilter::All.matches("June"));
    }

    #[test]
    fn month_comparison_is_case_insensitive() {
        assert!(MonthFilter::March.matches("March"));
        assert!(MonthFilter::March.matches("march"));
        assert!(!MonthFilter::March.matches("May"));
    }

    #[test]
    fn day_code_is_a_prefix_of_the_weekday_name() {
        assert!(DayFilter::Mo.matches("Monday"));
        assert!(DayFilter::Tu.matches("Tuesday"));
        assert!(!DayFilter::Mo.matches("Friday"));
        assert!(DayFilter::All.matches("Sunday"));
    }
}
