use crate::error::{Result, SiteError};
use crate::models::RawRow;
use crate::processors::RowRejection;
use crate::utils::constants::DEFAULT_DELIMITER;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Rows read from a delimited source, plus records the CSV layer could not decode.
#[derive(Debug, Default)]
pub struct RowBatch {
    pub rows: Vec<RawRow>,
    pub rejected: Vec<RowRejection>,
}

pub struct SiteReader {
    has_headers: bool,
    delimiter: u8,
}

impl SiteReader {
    pub fn new() -> Self {
        Self {
            has_headers: true,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_has_headers(has_headers: bool) -> Self {
        Self {
            has_headers,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read raw rows from a landing-sites file
    pub fn read_rows(&self, path: &Path) -> Result<RowBatch> {
        let file = File::open(path)?;
        self.read_rows_from(file)
    }

    /// Read raw rows from any byte source.
    ///
    /// Field counts are not checked here; that is the catalogue's job. A record
    /// that cannot be decoded is recorded and reading carries on, but an I/O
    /// failure ends the read.
    pub fn read_rows_from<R: Read>(&self, source: R) -> Result<RowBatch> {
        let mut reader = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(source);

        let mut batch = RowBatch::default();
        let mut record = StringRecord::new();

        loop {
            match reader.read_record(&mut record) {
                Ok(true) => {
                    let line = record.position().map_or(0, |p| p.line());
                    batch
                        .rows
                        .push(RawRow::new(line, record.iter().map(str::to_string).collect()));
                }
                Ok(false) => break,
                Err(err) if err.is_io_error() => return Err(SiteError::Csv(err)),
                Err(err) => {
                    let line = err
                        .position()
                        .map_or_else(|| reader.position().line(), |p| p.line());
                    batch.rejected.push(RowRejection {
                        line,
                        error: SiteError::Csv(err),
                    });
                }
            }
        }

        Ok(batch)
    }
}

impl Default for SiteReader {
    fn default() -> Self {
        Self::new()
    }
}
