use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{FlatRow, CSV_HEADER};

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Could not create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Could not write output file: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not flush output file: {0}")]
    Flush(#[from] io::Error),
}

/// Write all rows to `path` as CSV, header first. Runs exactly once per run,
/// after every unit of work is terminal. Returns the number of data rows.
pub fn write_rows(path: &Path, rows: &[FlatRow]) -> Result<usize, WriterError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| WriterError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    // Header written explicitly so a run with zero rows still produces it.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_dir_for(name: &str) -> PathBuf {
        env::temp_dir().join(format!("poap_exporter_writer_{}_{}", std::process::id(), name))
    }

    fn temp_path(name: &str) -> PathBuf {
        temp_dir_for(name).join("rows.csv")
    }

    fn sample_row(token_id: &str) -> FlatRow {
        FlatRow {
            event_id: "100".to_string(),
            token_id: token_id.to_string(),
            mint_order: 0,
            transfer_count: 1,
            first_transfer_id: "tr1".to_string(),
            first_transfer_timestamp: "1700000000".to_string(),
            first_transfer_from: "0x0".to_string(),
            first_transfer_to: "0xabc".to_string(),
            current_owner: "0xabc".to_string(),
        }
    }

    #[test]
    fn writes_header_and_rows_that_round_trip() {
        let path = temp_path("round_trip");
        let rows = vec![sample_row("t1"), sample_row("t2")];
        let written = write_rows(&path, &rows).unwrap();
        assert_eq!(written, 2);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(CSV_HEADER.to_vec())
        );
        let read_back: Vec<FlatRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(read_back, rows);
    }

    #[test]
    fn zero_rows_still_writes_the_header() {
        let path = temp_path("header_only");
        let written = write_rows(&path, &[]).unwrap();
        assert_eq!(written, 0);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("event_id,token_id,mint_order"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let path = temp_dir_for("mkdir").join("nested").join("rows.csv");
        write_rows(&path, &[sample_row("t1")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn embedded_delimiters_survive_the_round_trip() {
        let path = temp_path("escaping");
        let mut row = sample_row("t1");
        row.current_owner = "owner,with \"quotes\"".to_string();
        write_rows(&path, &[row.clone()]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let read_back: Vec<FlatRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(read_back, vec![row]);
    }
}
