use crate::models::city::City;
use crate::models::filters::{DayFilter, MonthFilter};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// City dataset to analyze
    #[arg(value_enum)]
    pub city: City,

    /// Keep only trips starting in this month
    #[arg(long, value_enum, default_value = "all")]
    pub month: MonthFilter,

    /// Keep only trips starting on this weekday (two-letter code)
    #[arg(long, value_enum, default_value = "all")]
    pub day: DayFilter,

    /// Directory containing the city CSV files
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,
}
