//! CSV loading for the daily page-view series.
//!
//! Accepts exactly one schema: a `date,value` header followed by one record
//! per day, dates in `YYYY-MM-DD` and strictly increasing, values as
//! non-negative integers. Any deviation aborts the load. Only the header
//! names are trimmed; field values must match exactly.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use pageview_core::error::{ReportError, Result};
use pageview_core::models::Observation;
use tracing::debug;

/// Format every `date` field must match.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The only accepted header row.
pub const EXPECTED_HEADER: [&str; 2] = ["date", "value"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Read all observations from the CSV file at `path`.
pub fn read_observations(path: &Path) -> Result<Vec<Observation>> {
    let file = std::fs::File::open(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let observations = parse_observations(std::io::BufReader::new(file))?;

    debug!(
        "Read {} observations from {}",
        observations.len(),
        path.display()
    );
    Ok(observations)
}

/// Parse observations from any CSV source.
///
/// Fails on the first bad record; no partial result is returned.
pub fn parse_observations<R: Read>(source: R) -> Result<Vec<Observation>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(source);

    check_header(reader.headers()?)?;

    let mut observations: Vec<Observation> = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record
            .position()
            .map_or(observations.len() as u64 + 2, |p| p.line());
        let obs = parse_record(&record, line)?;

        if let Some(previous) = observations.last() {
            check_order(previous.date, obs.date, line)?;
        }
        observations.push(obs);
    }

    Ok(observations)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn check_header(header: &StringRecord) -> Result<()> {
    if header.is_empty() {
        return Err(ReportError::EmptyInput(
            "input has no header and no rows".to_string(),
        ));
    }
    if header.iter().ne(EXPECTED_HEADER.iter().copied()) {
        return Err(ReportError::SchemaMismatch {
            expected: EXPECTED_HEADER.join(","),
            found: header.iter().collect::<Vec<_>>().join(","),
        });
    }
    Ok(())
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Observation> {
    let date_str = field(record, 0, "date", line)?;
    let value_str = field(record, 1, "value", line)?;

    let date = parse_date(date_str).ok_or_else(|| ReportError::DateParse {
        line,
        value: date_str.to_string(),
    })?;
    let value = value_str
        .parse::<u64>()
        .map_err(|_| ReportError::ValueParse {
            line,
            value: value_str.to_string(),
        })?;

    Ok(Observation::new(date, value))
}

/// Parse a date that is exactly `YYYY-MM-DD`: ten characters, zero-padded,
/// no surrounding whitespace.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Fetch a non-empty field by position.
fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    name: &'static str,
    line: u64,
) -> Result<&'r str> {
    match record.get(index) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ReportError::MissingField { line, field: name }),
    }
}

/// Dates must be strictly increasing; the input is never re-sorted.
fn check_order(previous: NaiveDate, date: NaiveDate, line: u64) -> Result<()> {
    if date == previous {
        return Err(ReportError::DuplicateDate { line, date });
    }
    if date < previous {
        return Err(ReportError::OutOfOrder {
            line,
            date,
            previous,
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
