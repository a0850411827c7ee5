use chrono::{Local, NaiveTime};
use eventlisting::config::env_loader::load_config;
use eventlisting::input::read_rows_from_path;
use eventlisting::listing::aggregate::aggregate_with;
use eventlisting::listing::path::SlugPathGenerator;
use eventlisting::output::{write_collection, write_collection_to_path};
use eventlisting::tracing::setup_tracing;
use std::error::Error;
use std::io;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = load_config()?;
    let now = match config.reference_date {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    };

    info!("Listing events from {} as of {now}", config.input_path.display());

    let rows = read_rows_from_path(&config.input_path, config.csv_delimiter)?;
    let paths = SlugPathGenerator::new(&config.details_path_prefix);
    let collection = aggregate_with(&rows, now, &config.aggregate, &paths)?;

    match &config.output_path {
        Some(path) => write_collection_to_path(path, &collection, config.pretty_json)?,
        None => write_collection(io::stdout().lock(), &collection, config.pretty_json)?,
    }

    Ok(())
}
