use crate::listing::aggregate::AggregateOptions;
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug)]
pub struct Config {
    pub input_path: PathBuf,
    /// Writes to stdout when unset.
    pub output_path: Option<PathBuf>,
    /// Uses today's local date when unset.
    pub reference_date: Option<NaiveDate>,
    pub csv_delimiter: u8,
    pub details_path_prefix: String,
    pub pretty_json: bool,
    pub aggregate: AggregateOptions,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set.")]
    Missing(&'static str),

    #[error("Invalid config '{name}'. Expected {expected}.")]
    Invalid {
        name: &'static str,
        expected: &'static str,
    },
}
