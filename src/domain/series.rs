//! Sector price series: raw records, cleaning, and date-window clipping.
//!
//! A data port hands back [`RawSeries`] exactly as read from the source. [`load`]
//! turns that into a [`PriceSeries`]: sorted by date, one value per date,
//! forward-filled, and clipped to an optional closed [`DateRange`].

use crate::domain::error::{NotFoundReason, SectorScopeError};
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;

/// One parsed row of a sector source. `value` is `None` when the row has a
/// date but a blank value cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawObservation {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// Everything a data port read for one sector, including how many rows it had
/// to discard as unparseable.
#[derive(Debug, Clone, Default)]
pub struct RawSeries {
    pub observations: Vec<RawObservation>,
    pub corrupt_rows: usize,
    /// Description of the first discarded row, for the log line.
    pub first_corrupt: Option<String>,
}

impl RawSeries {
    pub fn new(observations: Vec<RawObservation>) -> Self {
        Self {
            observations,
            corrupt_rows: 0,
            first_corrupt: None,
        }
    }

    pub fn record_corrupt(&mut self, detail: String) {
        self.corrupt_rows += 1;
        if self.first_corrupt.is_none() {
            self.first_corrupt = Some(detail);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Closed date interval `[start, end]` with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SectorScopeError> {
        if start > end {
            return Err(SectorScopeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Date-ordered closing values with no duplicate dates and no gaps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series from arbitrary points: sorts by date and keeps the last
    /// point given for any repeated date.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match deduped.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => deduped.push(point),
            }
        }
        Self { points: deduped }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Returns a copy holding only the points inside `range`.
    pub fn clip(&self, range: &DateRange) -> PriceSeries {
        PriceSeries {
            points: self
                .points
                .iter()
                .filter(|p| range.contains(p.date))
                .copied()
                .collect(),
        }
    }

    /// Simple daily returns, one per point after the first. A zero previous
    /// value yields a 0.0 return.
    pub fn daily_returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| {
                let prev = w[0].value;
                if prev != 0.0 {
                    (w[1].value - prev) / prev
                } else {
                    0.0
                }
            })
            .collect()
    }
}

/// Sorts, de-duplicates and forward-fills raw observations.
///
/// For a repeated date the last observed value wins. Rows before the first
/// observed value have nothing to fill from and are dropped.
pub fn clean(observations: &[RawObservation]) -> PriceSeries {
    let mut sorted = observations.to_vec();
    sorted.sort_by_key(|o| o.date);

    let mut merged: Vec<RawObservation> = Vec::with_capacity(sorted.len());
    for obs in sorted {
        match merged.last_mut() {
            Some(last) if last.date == obs.date => {
                if obs.value.is_some() {
                    last.value = obs.value;
                }
            }
            _ => merged.push(obs),
        }
    }

    let mut points = Vec::with_capacity(merged.len());
    let mut carried: Option<f64> = None;
    for obs in merged {
        if let Some(v) = obs.value {
            carried = Some(v);
        }
        if let Some(value) = carried {
            points.push(PricePoint {
                date: obs.date,
                value,
            });
        }
    }

    PriceSeries { points }
}

/// Loads a sector's cleaned series, clipped to `range` when given.
///
/// Fails with `NotFound` when the source is missing, empty, or has nothing
/// inside the window, and with `DataCorrupt` when every row was unparseable.
/// Partially corrupt sources are logged once and used.
pub fn load<P: DataPort + ?Sized>(
    port: &P,
    sector: &str,
    range: Option<&DateRange>,
) -> Result<PriceSeries, SectorScopeError> {
    let raw = port.fetch_raw(sector)?;

    if raw.corrupt_rows > 0 {
        tracing::warn!(
            sector,
            rows = raw.corrupt_rows,
            first = raw.first_corrupt.as_deref().unwrap_or(""),
            "skipped unparseable records"
        );
    }

    if raw.observations.is_empty() {
        if raw.corrupt_rows > 0 {
            return Err(SectorScopeError::DataCorrupt {
                sector: sector.to_string(),
                reason: format!("all {} records are unparseable", raw.corrupt_rows),
            });
        }
        return Err(SectorScopeError::not_found(sector, NotFoundReason::EmptySource));
    }

    let series = clean(&raw.observations);
    if series.is_empty() {
        return Err(SectorScopeError::not_found(sector, NotFoundReason::EmptySource));
    }

    let series = match range {
        Some(r) => series.clip(r),
        None => series,
    };
    if series.is_empty() {
        return Err(SectorScopeError::not_found(sector, NotFoundReason::OutsideRange));
    }

    tracing::debug!(sector, points = series.len(), "loaded series");
    Ok(series)
}
