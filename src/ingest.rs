use crate::models::{Observation, Series};
use chrono::NaiveDate;
use csv::StringRecord;
use thiserror::Error;

pub const DATE_COLUMN: &str = "delivery_date";
pub const COUNT_COLUMN: &str = "loaded_vehicles";

/// Accepted date formats, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("missing required column `{0}` (need `{DATE_COLUMN}` and `{COUNT_COLUMN}`)")]
    MissingColumn(&'static str),
    #[error("line {line}: unparsable date `{value}`")]
    BadDate { line: usize, value: String },
    #[error("line {line}: invalid count `{value}` (must be a non-negative number)")]
    BadCount { line: usize, value: String },
    #[error("duplicate date {0}")]
    DuplicateDate(NaiveDate),
    #[error("no data rows found")]
    Empty,
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Parses uploaded CSV bytes into a sorted, duplicate-free `Series`.
///
/// Extra columns are ignored. Any bad row aborts the parse with the line
/// number; nothing downstream runs on partial data.
pub fn parse_series(bytes: &[u8]) -> Result<Series, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let date_idx =
        find_column(&headers, DATE_COLUMN).ok_or(IngestError::MissingColumn(DATE_COLUMN))?;
    let count_idx =
        find_column(&headers, COUNT_COLUMN).ok_or(IngestError::MissingColumn(COUNT_COLUMN))?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // Header occupies line 1.
        let line = index + 2;

        let date_field = record.get(date_idx).unwrap_or_default();
        let date = parse_date(date_field).ok_or_else(|| IngestError::BadDate {
            line,
            value: date_field.to_string(),
        })?;

        let count_field = record.get(count_idx).unwrap_or_default();
        let count = count_field
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or_else(|| IngestError::BadCount {
                line,
                value: count_field.to_string(),
            })?;

        rows.push(Observation { date, count });
    }

    if rows.is_empty() {
        return Err(IngestError::Empty);
    }

    rows.sort_by_key(|obs| obs.date);
    for pair in rows.windows(2) {
        if pair[0].date == pair[1].date {
            return Err(IngestError::DuplicateDate(pair[0].date));
        }
    }

    Ok(Series::new(rows))
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_sorts_rows() {
        let csv = b"delivery_date,loaded_vehicles\n2026-01-03,30\n2026-01-01,10\n2026-01-02,20\n";
        let series = parse_series(csv).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.first_date(), Some(date("2026-01-01")));
        assert_eq!(series.last_date(), Some(date("2026-01-03")));
        assert_eq!(series.counts(), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn ignores_extra_columns_and_header_case() {
        let csv = b"Delivery_Date,depot,Loaded_Vehicles\n2026-01-01,north,10\n2026-01-02,south,12\n";
        let series = parse_series(csv).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.counts(), vec![10.0, 12.0]);
    }

    #[test]
    fn accepts_slash_date_formats() {
        let csv = b"delivery_date,loaded_vehicles\n2026/01/01,5\n02/01/2026,6\n";
        let series = parse_series(csv).unwrap();
        assert_eq!(series.first_date(), Some(date("2026-01-01")));
        assert_eq!(series.last_date(), Some(date("2026-01-02")));
    }

    #[test]
    fn missing_count_column_is_reported() {
        let csv = b"delivery_date,something_else\n2026-01-01,10\n";
        let err = parse_series(csv).unwrap_err();
        assert!(matches!(&err, IngestError::MissingColumn(name) if *name == COUNT_COLUMN));
        assert!(err.to_string().contains("loaded_vehicles"));
    }

    #[test]
    fn unparsable_date_names_the_line() {
        let csv = b"delivery_date,loaded_vehicles\n2026-01-01,10\nnot-a-date,11\n";
        let err = parse_series(csv).unwrap_err();
        match err {
            IngestError::BadDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_count_is_rejected() {
        let csv = b"delivery_date,loaded_vehicles\n2026-01-01,-4\n";
        assert!(matches!(
            parse_series(csv).unwrap_err(),
            IngestError::BadCount { line: 2, .. }
        ));
    }

    #[test]
    fn duplicate_dates_are_rejected() {
        let csv = b"delivery_date,loaded_vehicles\n2026-01-01,10\n2026-01-01,11\n";
        assert!(matches!(
            parse_series(csv).unwrap_err(),
            IngestError::DuplicateDate(_)
        ));
    }

    #[test]
    fn empty_file_is_rejected() {
        let csv = b"delivery_date,loaded_vehicles\n";
        assert!(matches!(parse_series(csv).unwrap_err(), IngestError::Empty));
    }
}
