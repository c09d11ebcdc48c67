//! Sector data access port trait.

use crate::domain::error::SectorScopeError;
use crate::domain::series::{self, RawSeries};
use chrono::NaiveDate;

pub trait DataPort {
    /// Reads every record of a sector source. A missing source is
    /// `SectorScopeError::NotFound`; unparseable rows are counted in the result.
    fn fetch_raw(&self, sector: &str) -> Result<RawSeries, SectorScopeError>;

    /// Names of all sectors the port has a source for.
    fn list_sectors(&self) -> Result<Vec<String>, SectorScopeError>;

    /// First date, last date and point count of a sector's cleaned series, or
    /// `None` when the sector has no usable data.
    fn data_range(
        &self,
        sector: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, SectorScopeError> {
        match series::load(self, sector, None) {
            Ok(s) => match (s.first(), s.last()) {
                (Some(first), Some(last)) => Ok(Some((first.date, last.date, s.len()))),
                _ => Ok(None),
            },
            Err(e) if e.is_no_data() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
