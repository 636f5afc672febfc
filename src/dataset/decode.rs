// src/dataset/decode.rs
use crate::domain::listing::Record;
use crate::errors::AppError;
use csv::ReaderBuilder;
use parquet::file::reader::{FileReader, SerializedFileReader};
use serde_json::Value;

/// Decoded table: column names plus one record per row, in file order.
pub struct Table {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

/// Cells are kept as text; typed accessors on `Record` parse on demand so
/// ids like "007" keep their leading zeros.
pub fn decode_csv(data: &[u8]) -> Result<Table, AppError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(data);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::Format(format!("CSV header: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let row = result.map_err(|e| AppError::Format(format!("CSV row {line}: {e}")))?;
        let mut record = Record::new();
        for (column, cell) in columns.iter().zip(row.iter()) {
            let value = if cell.trim().is_empty() {
                Value::Null
            } else {
                Value::String(cell.to_string())
            };
            record.insert(column.clone(), value);
        }
        records.push(record);
    }

    Ok(Table { columns, records })
}

pub fn decode_parquet(data: Vec<u8>) -> Result<Table, AppError> {
    let reader = SerializedFileReader::new(bytes::Bytes::from(data))
        .map_err(|e| AppError::Format(format!("Parquet: {e}")))?;

    let columns: Vec<String> = reader
        .metadata()
        .file_metadata()
        .schema_descr()
        .root_schema()
        .get_fields()
        .iter()
        .map(|f| f.name().to_string())
        .collect();

    let rows = reader
        .get_row_iter(None)
        .map_err(|e| AppError::Format(format!("Parquet rows: {e}")))?;

    let mut records = Vec::new();
    for (idx, row) in rows.enumerate() {
        let row = row.map_err(|e| AppError::Format(format!("Parquet row {idx}: {e}")))?;
        match row.to_json_value() {
            Value::Object(record) => records.push(record),
            other => {
                return Err(AppError::Format(format!(
                    "Parquet row {idx} is not a record: {other}"
                )))
            }
        }
    }

    Ok(Table { columns, records })
}
