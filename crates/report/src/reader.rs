use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use classifier::RawRecord;
use common::{AppError, Result};

/// Reads the whole export into memory. The input is one snapshot consumed in
/// a single pass; there is no streaming mode.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: RawRecord = row.map_err(AppError::input)?;
        records.push(record);
    }
    Ok(records)
}

pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("opening input export {}", path.display()))
        .map_err(AppError::Input)?;
    read_records(file)
}
