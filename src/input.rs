use crate::listing::dto::RawRecord;
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to open events table: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid events table: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads every row of a delimited table whose first line holds the column names.
pub fn read_rows<R: io::Read>(reader: R, delimiter: u8) -> Result<Vec<RawRecord>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let rows = reader
        .deserialize::<RawRecord>()
        .collect::<Result<Vec<RawRecord>, csv::Error>>()?;

    Ok(rows)
}

#[instrument]
pub fn read_rows_from_path(path: &Path, delimiter: u8) -> Result<Vec<RawRecord>, InputError> {
    let rows = read_rows(File::open(path)?, delimiter)?;

    info!("Read {} rows", rows.len());

    Ok(rows)
}
