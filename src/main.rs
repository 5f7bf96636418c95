use crate::cli::Cli;
use crate::errors::AppResult;
use crate::services::loader::load_data;
use crate::services::stats::{duration_stats, station_stats, time_stats, user_stats};
use chrono::{Datelike, Local};
use clap::Parser;
use log::info;

mod cli;
mod consts;
mod errors;
mod models;
mod services;
mod table;

fn main() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Application started");

    let args = Cli::parse();

    let table = load_data(&args.data_dir, args.city, args.month, args.day)?;

    println!("{}\n", time_stats(&table)?);
    println!("{}\n", duration_stats(&table)?);
    println!("{}\n", user_stats(&table, Local::now().year())?);
    println!("{}", station_stats(&table)?);

    Ok(())
}
