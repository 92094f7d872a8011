//! Streaming CSV reader yielding header-keyed [`DataRow`]s.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::Result;
use crate::types::DataRow;

/// Reads one [`DataRow`] at a time; the first CSV record names the fields.
///
/// A leading UTF-8 byte-order mark is ignored. Every header name is present in
/// every row: missing trailing cells read as empty strings and extra cells
/// beyond the header are dropped.
pub struct RowReader<R: Read> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    record: StringRecord,
}

impl RowReader<File> {
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }
}

impl<R: Read> RowReader<R> {
    pub fn from_reader(input: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);
        let headers = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();
        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn next_row(&mut self) -> Result<Option<DataRow>> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }
        let row = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, k)| (k.clone(), self.record.get(i).unwrap_or("").to_string()))
            .collect();
        Ok(Some(row))
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<DataRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(input: &str) -> Vec<DataRow> {
        RowReader::from_reader(input.as_bytes())
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn keys_rows_by_header() {
        let rows = rows("name,role\nAlice,Speaker\nBob,Staff\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Alice");
        assert_eq!(rows[1]["role"], "Staff");
    }

    #[test]
    fn strips_byte_order_mark() {
        let reader = RowReader::from_reader("\u{feff}name,role\nAlice,Speaker\n".as_bytes()).unwrap();
        assert_eq!(reader.headers(), ["name", "role"]);
        let rows: Vec<DataRow> = reader.collect::<Result<_>>().unwrap();
        assert_eq!(rows[0]["name"], "Alice");
    }

    #[test]
    fn short_rows_fill_trailing_fields_with_empty_text() {
        let rows = rows("name,role,company\nAlice,Speaker\n");
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0]["role"], "Speaker");
        assert_eq!(rows[0]["company"], "");
    }

    #[test]
    fn long_rows_drop_cells_without_header() {
        let rows = rows("name\nAlice,extra\n");
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0]["name"], "Alice");
    }

    #[test]
    fn quoted_cells_keep_commas() {
        let rows = rows("name,title\n\"Doe, Jane\",\"CTO, Acme\"\n");
        assert_eq!(rows[0]["name"], "Doe, Jane");
        assert_eq!(rows[0]["title"], "CTO, Acme");
    }

    #[test]
    fn header_only_file_has_no_rows() {
        assert!(rows("name,role\n").is_empty());
    }
}
