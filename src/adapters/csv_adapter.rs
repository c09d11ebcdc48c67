//! Per-sector CSV file data adapter.
//!
//! Each sector lives in `<base_path>/<sector>.csv`: a UTF-8 file with a header
//! row naming at least a date column and a value column. Other columns are
//! ignored.

use crate::domain::config_validation::{DEFAULT_DATE_COLUMN, DEFAULT_VALUE_COLUMN};
use crate::domain::error::{NotFoundReason, SectorScopeError};
use crate::domain::questionnaire::{self, Answers, QuestionId, Questionnaire};
use crate::domain::series::{RawObservation, RawSeries};
use crate::ports::data_port::DataPort;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub struct CsvAdapter {
    base_path: PathBuf,
    date_column: String,
    value_column: String,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self::with_columns(base_path, DEFAULT_DATE_COLUMN, DEFAULT_VALUE_COLUMN)
    }

    pub fn with_columns(base_path: PathBuf, date_column: &str, value_column: &str) -> Self {
        Self {
            base_path,
            date_column: date_column.to_string(),
            value_column: value_column.to_string(),
        }
    }

    fn csv_path(&self, sector: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", sector))
    }

    fn column_index(
        &self,
        headers: &csv::StringRecord,
        name: &str,
        sector: &str,
    ) -> Result<usize, SectorScopeError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| SectorScopeError::DataCorrupt {
                sector: sector.to_string(),
                reason: format!("missing column {}", name),
            })
    }
}

/// Parses the date formats seen in exported index files.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parses a value cell. `Ok(None)` for a blank cell, `Err` for anything that
/// is not a finite number. Thousands separators are accepted.
pub fn parse_value(value: &str) -> Result<Option<f64>, String> {
    let value = value.trim();
    if value.is_empty() || value == "-" || value.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    let cleaned = value.replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(format!("invalid value {:?}", value)),
    }
}

impl DataPort for CsvAdapter {
    fn fetch_raw(&self, sector: &str) -> Result<RawSeries, SectorScopeError> {
        let path = self.csv_path(sector);
        if !path.is_file() {
            return Err(SectorScopeError::not_found(sector, NotFoundReason::MissingSource));
        }
        let content = fs::read_to_string(&path).map_err(|e| SectorScopeError::DataCorrupt {
            sector: sector.to_string(),
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = rdr.headers().map_err(|e| SectorScopeError::DataCorrupt {
            sector: sector.to_string(),
            reason: format!("unreadable header: {}", e),
        })?;
        let date_idx = self.column_index(headers, &self.date_column, sector)?;
        let value_idx = self.column_index(headers, &self.value_column, sector)?;

        let mut raw = RawSeries::default();
        for result in rdr.records() {
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    let line = e.position().map_or(0, |p| p.line());
                    raw.record_corrupt(format!("line {}: {}", line, e));
                    continue;
                }
            };
            let line = record_line(&record);

            let date = match record.get(date_idx).and_then(parse_date) {
                Some(d) => d,
                None => {
                    raw.record_corrupt(format!(
                        "line {}: invalid date {:?}",
                        line,
                        record.get(date_idx).unwrap_or("")
                    ));
                    continue;
                }
            };

            match parse_value(record.get(value_idx).unwrap_or("")) {
                Ok(value) => raw.observations.push(RawObservation { date, value }),
                Err(reason) => raw.record_corrupt(format!("line {}: {}", line, reason)),
            }
        }

        Ok(raw)
    }

    fn list_sectors(&self) -> Result<Vec<String>, SectorScopeError> {
        let entries = fs::read_dir(&self.base_path)?;

        let mut sectors = Vec::new();
        for entry in entries {
            let name = entry?.file_name();
            let name_str = name.to_string_lossy();
            if let Some(sector) = name_str.strip_suffix(".csv") {
                sectors.push(sector.to_string());
            }
        }

        sectors.sort();
        Ok(sectors)
    }
}

/// Line on which the reader started a record. Quoted fields may span lines,
/// so this can differ from the record index.
fn record_line(record: &csv::StringRecord) -> usize {
    record.position().map_or(0, |p| p.line() as usize)
}

/// Reads an answers file with a `qid,answer` header. Every question id must
/// belong to `questionnaire`, appear once, and carry an answer that parses.
pub fn read_answers<R: Read>(
    reader: R,
    questionnaire: &Questionnaire,
) -> Result<Answers, SectorScopeError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers().map_err(|e| SectorScopeError::InvalidAnswer {
        line: 1,
        reason: e.to_string(),
    })?;
    let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    if names != ["qid", "answer"] {
        return Err(SectorScopeError::InvalidAnswer {
            line: 1,
            reason: format!("expected header qid,answer, found {:?}", headers.as_slice()),
        });
    }

    let mut answers = Answers::new();
    for result in rdr.records() {
        let record = result.map_err(|e| SectorScopeError::InvalidAnswer {
            line: e.position().map_or(0, |p| p.line() as usize),
            reason: e.to_string(),
        })?;
        let line = record_line(&record);

        let id: QuestionId = record
            .get(0)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| SectorScopeError::InvalidAnswer {
                line,
                reason: format!("invalid question id {:?}", record.get(0).unwrap_or("")),
            })?;
        if questionnaire.get(id).is_none() {
            return Err(SectorScopeError::InvalidAnswer {
                line,
                reason: format!("unknown question id {}", id),
            });
        }

        let answer = record
            .get(1)
            .and_then(questionnaire::parse_answer)
            .ok_or_else(|| SectorScopeError::InvalidAnswer {
                line,
                reason: format!("invalid answer {:?}", record.get(1).unwrap_or("")),
            })?;

        if answers.insert(id, answer).is_some() {
            return Err(SectorScopeError::InvalidAnswer {
                line,
                reason: format!("question {} answered twice", id),
            });
        }
    }

    Ok(answers)
}
