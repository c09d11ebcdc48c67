//! Configuration model and validation.
//!
//! Every key is optional; a missing key takes its default. Present keys must
//! be well-formed.

use crate::domain::error::SectorScopeError;
use crate::domain::series::DateRange;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_DATE_COLUMN: &str = "날짜";
pub const DEFAULT_VALUE_COLUMN: &str = "지수";

/// Earliest start date offered for analysis.
pub fn earliest_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid constant date")
}

pub fn default_period() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid constant date"),
        NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid constant date"),
    )
    .expect("default period is ordered")
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub date_column: String,
    pub value_column: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DATA_DIR),
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            shuffle: true,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data: DataConfig,
    pub period: DateRange,
    pub quiz: QuizConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            period: default_period(),
            quiz: QuizConfig::default(),
        }
    }
}

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), SectorScopeError> {
    validate_columns(config)?;
    validate_period(config)?;
    validate_seed(config)?;
    Ok(())
}

/// Validates `config` and builds the typed configuration from it.
pub fn build_config(config: &dyn ConfigPort) -> Result<AppConfig, SectorScopeError> {
    validate_config(config)?;
    let defaults = AppConfig::default();

    let data = DataConfig {
        dir: config
            .get_string("data", "dir")
            .map(PathBuf::from)
            .unwrap_or(defaults.data.dir),
        date_column: config
            .get_string("data", "date_column")
            .unwrap_or(defaults.data.date_column),
        value_column: config
            .get_string("data", "value_column")
            .unwrap_or(defaults.data.value_column),
    };

    Ok(AppConfig {
        data,
        period: read_period(config)?,
        quiz: QuizConfig {
            shuffle: config.get_bool("quiz", "shuffle", defaults.quiz.shuffle),
            seed: read_seed(config)?,
        },
    })
}

fn validate_columns(config: &dyn ConfigPort) -> Result<(), SectorScopeError> {
    for key in ["date_column", "value_column"] {
        if let Some(v) = config.get_string("data", key) {
            if v.trim().is_empty() {
                return Err(SectorScopeError::ConfigInvalid {
                    section: "data".to_string(),
                    key: key.to_string(),
                    reason: format!("{} must not be empty", key),
                });
            }
        }
    }
    Ok(())
}

fn validate_period(config: &dyn ConfigPort) -> Result<(), SectorScopeError> {
    let period = read_period(config)?;
    if period.start() < earliest_start() {
        return Err(SectorScopeError::ConfigInvalid {
            section: "analysis".to_string(),
            key: "start_date".to_string(),
            reason: format!("start_date must not be before {}", earliest_start()),
        });
    }
    Ok(())
}

fn validate_seed(config: &dyn ConfigPort) -> Result<(), SectorScopeError> {
    read_seed(config).map(|_| ())
}

fn read_period(config: &dyn ConfigPort) -> Result<DateRange, SectorScopeError> {
    let defaults = default_period();
    let start = match config.get_string("analysis", "start_date") {
        Some(s) => parse_date(&s, "start_date")?,
        None => defaults.start(),
    };
    let end = match config.get_string("analysis", "end_date") {
        Some(s) => parse_date(&s, "end_date")?,
        None => defaults.end(),
    };
    DateRange::new(start, end).map_err(|_| SectorScopeError::ConfigInvalid {
        section: "analysis".to_string(),
        key: "start_date".to_string(),
        reason: "start_date must not be after end_date".to_string(),
    })
}

fn read_seed(config: &dyn ConfigPort) -> Result<Option<u64>, SectorScopeError> {
    match config.get_string("quiz", "seed") {
        None => Ok(None),
        Some(s) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| SectorScopeError::ConfigInvalid {
                section: "quiz".to_string(),
                key: "seed".to_string(),
                reason: "seed must be a non-negative integer".to_string(),
            }),
    }
}

pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, SectorScopeError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        SectorScopeError::ConfigInvalid {
            section: "analysis".to_string(),
            key: field.to_string(),
            reason: format!("invalid {} format, expected YYYY-MM-DD", field),
        }
    })
}
