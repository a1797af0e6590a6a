//! Delimited deck file reader
//!
//! Rows are `id, front, back, sound`. A row whose first field is literally
//! `id` is a header and is skipped wherever it appears.

use crate::{DeckRecord, ImportError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const HEADER_ID: &str = "id";
const FIELDS_PER_RECORD: usize = 4;

/// Validate a field separator and convert it for the csv reader
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    let valid = delimiter.is_ascii_punctuation() && delimiter != ',' && delimiter != '"';
    if valid {
        Ok(delimiter as u8)
    } else {
        Err(ImportError::InvalidDelimiter(delimiter))
    }
}

/// Parse every record from a reader
///
/// Records are numbered 1..N in file order. Any row with the wrong number
/// of fields fails the whole read.
pub fn read_records<R: Read>(source: R, delimiter: char) -> Result<Vec<DeckRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter_byte(delimiter)?)
        .from_reader(source);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;

        if row.get(0) == Some(HEADER_ID) {
            continue;
        }

        if row.len() != FIELDS_PER_RECORD {
            return Err(ImportError::Format {
                line: row.position().map_or(0, |p| p.line()),
                fields: row.len(),
            });
        }

        let id = records.len() as u32 + 1;
        records.push(DeckRecord::new(id, &row[1], &row[2], &row[3]));
    }

    tracing::debug!("Parsed {} deck records", records.len());
    Ok(records)
}

/// Open and parse a deck file
pub fn read_records_from_path(path: &Path, delimiter: char) -> Result<Vec<DeckRecord>> {
    let file = File::open(path)?;
    read_records(file, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_row() {
        let data = "id;front;back;sound\n1;dog;perro;perro.mp3\n2;cat;gato;\n";
        let records = read_records(data.as_bytes(), ';').unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], DeckRecord::new(1, "dog", "perro", "perro.mp3"));
        assert_eq!(records[1], DeckRecord::new(2, "cat", "gato", ""));
    }

    #[test]
    fn renumbers_in_file_order() {
        let data = "7;dog;perro;\n3;cat;gato;\n";
        let records = read_records(data.as_bytes(), ';').unwrap();

        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn wrong_field_count_fails() {
        let data = "1;dog;perro;\n2;cat;gato\n";
        let err = read_records(data.as_bytes(), ';').unwrap_err();

        match err {
            ImportError::Format { line, fields } => {
                assert_eq!(line, 2);
                assert_eq!(fields, 3);
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn commas_stay_inside_fields() {
        let data = "1;hello, friend;hola, amigo;\n";
        let records = read_records(data.as_bytes(), ';').unwrap();

        assert_eq!(records[0].front, "hello, friend");
        assert_eq!(records[0].back, "hola, amigo");
    }

    #[test]
    fn alternate_delimiter() {
        let data = "1|dog|perro|perro.mp3\n";
        let records = read_records(data.as_bytes(), '|').unwrap();
        assert_eq!(records[0].back, "perro");
    }

    #[test]
    fn empty_source_yields_no_records() {
        let records = read_records("".as_bytes(), ';').unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_comma_and_non_punctuation_delimiters() {
        assert!(matches!(delimiter_byte(','), Err(ImportError::InvalidDelimiter(','))));
        assert!(matches!(delimiter_byte('a'), Err(ImportError::InvalidDelimiter('a'))));
        assert!(matches!(delimiter_byte('\t'), Err(ImportError::InvalidDelimiter('\t'))));
        assert!(matches!(delimiter_byte('€'), Err(ImportError::InvalidDelimiter('€'))));
        assert_eq!(delimiter_byte(';').unwrap(), b';');
    }
}
