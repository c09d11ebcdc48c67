//! Domain error types.

use chrono::NaiveDate;
use std::fmt;

/// Why a sector produced no usable series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// No data source exists for the sector.
    MissingSource,
    /// The source exists but holds no usable records.
    EmptySource,
    /// The requested window does not overlap the available history.
    OutsideRange,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::MissingSource => write!(f, "no data source"),
            NotFoundReason::EmptySource => write!(f, "source holds no records"),
            NotFoundReason::OutsideRange => write!(f, "no records in the selected period"),
        }
    }
}

/// Top-level error type for sectorscope.
#[derive(Debug, thiserror::Error)]
pub enum SectorScopeError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("no data for {sector}: {reason}")]
    NotFound {
        sector: String,
        reason: NotFoundReason,
    },

    #[error("corrupt data for {sector}: {reason}")]
    DataCorrupt { sector: String, reason: String },

    #[error("invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid style code: {0:?}")]
    InvalidStyleCode(String),

    #[error("invalid answer on line {line}: {reason}")]
    InvalidAnswer { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SectorScopeError {
    pub fn not_found(sector: &str, reason: NotFoundReason) -> Self {
        SectorScopeError::NotFound {
            sector: sector.to_string(),
            reason,
        }
    }

    /// True for conditions the caller should show as "no data" rather than fail on.
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            SectorScopeError::NotFound { .. } | SectorScopeError::DataCorrupt { .. }
        )
    }
}

impl From<&SectorScopeError> for std::process::ExitCode {
    fn from(err: &SectorScopeError) -> Self {
        let code: u8 = match err {
            SectorScopeError::Io(_) => 1,
            SectorScopeError::ConfigParse { .. }
            | SectorScopeError::ConfigInvalid { .. } => 2,
            SectorScopeError::InvalidRange { .. }
            | SectorScopeError::InvalidStyleCode(_)
            | SectorScopeError::InvalidAnswer { .. } => 4,
            SectorScopeError::NotFound { .. } | SectorScopeError::DataCorrupt { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
