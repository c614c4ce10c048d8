//! Delimited text parsing into raw field-keyed records
//!
//! The source tables are plain comma-separated text with a header row. There
//! is no quoting or escaping: a comma inside a quoted value still splits the
//! field. Rows shorter than the header are padded with empty strings and rows
//! longer than the header are truncated.

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::app::models::RawRecord;

/// Field delimiter shared by every tabular source
pub const FIELD_DELIMITER: u8 = b',';

/// Parse delimited text into records keyed by the header row
///
/// Empty or whitespace-only input yields no records. Malformed rows never
/// abort the parse; they degrade to empty field values or are skipped.
pub fn parse_tabular(text: &str) -> Vec<RawRecord> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(FIELD_DELIMITER)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = reader.records();

    let headers = match rows.next() {
        Some(Ok(headers)) => headers,
        Some(Err(e)) => {
            debug!("Failed to read header row: {}", e);
            return Vec::new();
        }
        None => return Vec::new(),
    };

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        match row {
            Ok(row) => records.push(zip_row(&headers, &row)),
            Err(e) => debug!("Skipped row {}: {}", index + 1, e),
        }
    }

    debug!(
        "Parsed {} records across {} columns",
        records.len(),
        headers.len()
    );

    records
}

/// Pair each header with the value at the same position
fn zip_row(headers: &StringRecord, row: &StringRecord) -> RawRecord {
    let mut record = RawRecord::new();
    for (index, header) in headers.iter().enumerate() {
        record.insert(header, row.get(index).unwrap_or(""));
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_trailing_value_defaults_to_empty() {
        let records = parse_tabular("a,b,c\n1,2");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("a"), Some("1"));
        assert_eq!(records[0].get("b"), Some("2"));
        assert_eq!(records[0].get("c"), Some(""));
    }

    #[test]
    fn test_extra_values_are_dropped() {
        let records = parse_tabular("a,b\n1,2,3,4");

        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].get("b"), Some("2"));
    }

    #[test]
    fn test_headers_and_values_are_trimmed() {
        let records = parse_tabular("  name , mass (g)\r\n Aachen ,  21 \r\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("name"), Some("Aachen"));
        assert_eq!(records[0].get("mass (g)"), Some("21"));
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse_tabular("").is_empty());
        assert!(parse_tabular("   \n\t  ").is_empty());
    }

    #[test]
    fn test_header_only_yields_no_records() {
        assert!(parse_tabular("a,b,c\n").is_empty());
    }

    #[test]
    fn test_repeated_header_keeps_last_value() {
        let records = parse_tabular("id,name,id\n1,x,2");

        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].get("id"), Some("2"));
    }

    #[test]
    fn test_quotes_are_not_interpreted() {
        let records = parse_tabular("name,year\n\"Allende, Mexico\",1969");

        assert_eq!(records[0].get("name"), Some("\"Allende"));
        assert_eq!(records[0].get("year"), Some("Mexico\""));
    }

    #[test]
    fn test_values_stay_strings() {
        let records = parse_tabular("reclat,reclong\n-33.16667,-64.95");

        assert_eq!(records[0].get("reclat"), Some("-33.16667"));
        assert_eq!(records[0].get("reclong"), Some("-64.95"));
    }

    #[test]
    fn test_rows_keep_source_order() {
        let records = parse_tabular("n\nfirst\nsecond\nthird");
        let names: Vec<_> = records.iter().filter_map(|r| r.get("n")).collect();

        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
