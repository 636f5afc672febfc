mod cache;
mod decode;
mod source;

pub use cache::DatasetCache;
pub use decode::{decode_csv, decode_parquet, Table};
pub use source::DatasetSource;

use crate::domain::listing::{get_f64, missing_required_columns, Listing};
use crate::domain::places::Office;
use crate::errors::AppError;
use log::{info, warn};
use std::str::FromStr;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Parquet,
    Csv,
}

impl FromStr for DatasetFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parquet" | "columnar" => Ok(DatasetFormat::Parquet),
            "csv" => Ok(DatasetFormat::Csv),
            other => Err(AppError::DataAccess(format!(
                "Invalid apartments data format '{other}'. Valid are 'parquet' or 'csv'."
            ))),
        }
    }
}

/// All listings of one dataset file, in file order.
#[derive(Debug)]
pub struct Dataset {
    pub uri: String,
    pub listings: Vec<Listing>,
    /// Rows dropped because they carry no coordinates or no price.
    pub skipped: usize,
}

/// Fetches, decodes and annotates the dataset at `uri`.
pub fn load_dataset(
    uri: &str,
    format: DatasetFormat,
    office: &Office,
    timeout: Duration,
) -> Result<Dataset, AppError> {
    let start = Instant::now();
    let data = DatasetSource::parse(uri)?.fetch(timeout)?;

    let table = match format {
        DatasetFormat::Csv => decode_csv(&data)?,
        DatasetFormat::Parquet => decode_parquet(data)?,
    };

    let missing = missing_required_columns(table.columns.iter().map(String::as_str));
    if !missing.is_empty() {
        return Err(AppError::Format(format!(
            "required columns missing: {}",
            missing.join(", ")
        )));
    }

    let dataset = build_dataset(uri, &table, office)?;
    info!(
        "Loaded {} apartments from {uri} in {:?} ({} rows skipped)",
        dataset.listings.len(),
        start.elapsed(),
        dataset.skipped
    );
    Ok(dataset)
}

fn build_dataset(uri: &str, table: &Table, office: &Office) -> Result<Dataset, AppError> {
    let mut listings = Vec::with_capacity(table.records.len());
    let mut skipped = 0;

    for (idx, record) in table.records.iter().enumerate() {
        match Listing::from_record(idx, record, office)? {
            Some(listing) => listings.push(listing),
            None => {
                let reason = if get_f64(record, "price").is_none() {
                    "no price"
                } else {
                    "no coordinates"
                };
                warn!(
                    "Apartment '{}' in idx {idx} has {reason}, skipping...",
                    record.get("title").and_then(|t| t.as_str()).unwrap_or("?")
                );
                skipped += 1;
            }
        }
    }

    Ok(Dataset {
        uri: uri.to_string(),
        listings,
        skipped,
    })
}
