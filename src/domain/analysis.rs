//! Ties the components together: style code → recommendation → per-sector
//! series and metrics.
//!
//! A sector without usable data never aborts the others; its entry carries the
//! error so the caller can show "no data" in its place.

use crate::domain::error::SectorScopeError;
use crate::domain::metrics::{self, MonthlyReturn, PerformanceMetrics};
use crate::domain::profile::{self, TypeProfile};
use crate::domain::recommendation;
use crate::domain::sector::SectorTraits;
use crate::domain::series::{self, DateRange, PriceSeries};
use crate::domain::style::StyleCode;
use crate::ports::data_port::DataPort;

#[derive(Debug, Clone)]
pub struct Recommendation {
    pub code: StyleCode,
    pub profile: Option<&'static TypeProfile>,
    pub sectors: &'static [&'static str],
    pub average_traits: Option<SectorTraits>,
}

pub fn recommend(code: StyleCode) -> Recommendation {
    let sectors = recommendation::sectors_for(code);
    Recommendation {
        code,
        profile: profile::profile_for(code),
        sectors,
        average_traits: recommendation::average_traits(sectors),
    }
}

#[derive(Debug, Clone)]
pub struct SectorData {
    pub series: PriceSeries,
    pub metrics: PerformanceMetrics,
    pub monthly: Vec<MonthlyReturn>,
}

#[derive(Debug)]
pub struct SectorReport {
    pub sector: String,
    pub result: Result<SectorData, SectorScopeError>,
}

pub fn analyze_sector<P: DataPort + ?Sized>(
    port: &P,
    sector: &str,
    range: Option<&DateRange>,
) -> Result<SectorData, SectorScopeError> {
    let series = series::load(port, sector, range)?;
    let metrics = PerformanceMetrics::compute(&series);
    let monthly = metrics::monthly_returns(&series);
    Ok(SectorData {
        series,
        metrics,
        monthly,
    })
}

pub fn analyze_sectors<P: DataPort + ?Sized>(
    port: &P,
    sectors: &[&str],
    range: Option<&DateRange>,
) -> Vec<SectorReport> {
    sectors
        .iter()
        .map(|&sector| {
            let result = analyze_sector(port, sector, range);
            if let Err(e) = &result {
                tracing::info!(sector, error = %e, "sector skipped");
            }
            SectorReport {
                sector: sector.to_string(),
                result,
            }
        })
        .collect()
}
