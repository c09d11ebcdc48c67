#![allow(dead_code)]

use chrono::NaiveDate;
use sectorscope::domain::error::{NotFoundReason, SectorScopeError};
use sectorscope::domain::questionnaire::{Answers, QUESTIONS};
use sectorscope::domain::series::{PricePoint, PriceSeries, RawObservation, RawSeries};
use sectorscope::domain::style::Letter;
use sectorscope::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, RawSeries>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn with_values(mut self, sector: &str, start: &str, values: &[f64]) -> Self {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
        let observations = values
            .iter()
            .enumerate()
            .map(|(i, &v)| RawObservation {
                date: start + chrono::Duration::days(i as i64),
                value: Some(v),
            })
            .collect();
        self.data.insert(sector.to_string(), RawSeries::new(observations));
        self
    }

    pub fn with_raw(mut self, sector: &str, raw: RawSeries) -> Self {
        self.data.insert(sector.to_string(), raw);
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_raw(&self, sector: &str) -> Result<RawSeries, SectorScopeError> {
        self.data
            .get(sector)
            .cloned()
            .ok_or_else(|| SectorScopeError::not_found(sector, NotFoundReason::MissingSource))
    }

    fn list_sectors(&self) -> Result<Vec<String>, SectorScopeError> {
        let mut names: Vec<String> = self.data.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_series(start: &str, values: &[f64]) -> PriceSeries {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    PriceSeries::from_points(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| PricePoint {
                date: start + chrono::Duration::days(i as i64),
                value: v,
            })
            .collect(),
    )
}

/// Answers every question "yes" when its polarity is in `yes_letters`, "no" otherwise.
pub fn answers_leaning(yes_letters: &[Letter]) -> Answers {
    QUESTIONS
        .iter()
        .map(|q| (q.id, yes_letters.contains(&q.polarity)))
        .collect()
}

pub fn sector_csv(rows: &[(&str, &str)]) -> String {
    let mut s = String::from("날짜,지수\n");
    for (d, v) in rows {
        s.push_str(&format!("{},{}\n", d, v));
    }
    s
}
