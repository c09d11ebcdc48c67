//! Core domain types and logic.

pub mod analysis;
pub mod config_validation;
pub mod error;
pub mod metrics;
pub mod profile;
pub mod questionnaire;
pub mod recommendation;
pub mod sector;
pub mod series;
pub mod style;
