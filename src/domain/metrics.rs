//! Performance metrics over a sector price series.
//!
//! Every figure is a percentage except the Sharpe ratio, and every figure is
//! rounded to two decimals. Degenerate inputs (empty series, a single point,
//! zero variance) produce 0.0 rather than NaN or infinity.

use super::series::PriceSeries;
use chrono::Datelike;
use std::collections::BTreeMap;

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
pub const RISK_FREE_RATE: f64 = 0.02;

/// Standard deviations below this are rounding noise from a constant-return
/// series and count as zero variance.
const STDDEV_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerformanceMetrics {
    pub total_return: f64,
    pub annual_volatility: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    pub win_rate: f64,
}

impl PerformanceMetrics {
    /// The all-zero record used for missing or empty input.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn compute(series: &PriceSeries) -> Self {
        let (first, last) = match (series.first(), series.last()) {
            (Some(f), Some(l)) => (f.value, l.value),
            _ => return Self::zero(),
        };

        let returns = series.daily_returns();

        let total_return = if first != 0.0 {
            (last / first - 1.0) * 100.0
        } else {
            0.0
        };

        let stddev = sample_stddev(&returns);
        let annual_volatility = stddev * TRADING_DAYS_PER_YEAR.sqrt() * 100.0;
        let max_drawdown = compute_max_drawdown(series) * 100.0;
        let sharpe_ratio = compute_sharpe(&returns, stddev);

        let win_rate = if returns.is_empty() {
            0.0
        } else {
            let wins = returns.iter().filter(|&&r| r > 0.0).count();
            wins as f64 / returns.len() as f64 * 100.0
        };

        PerformanceMetrics {
            total_return: round2(total_return),
            annual_volatility: round2(annual_volatility),
            max_drawdown: round2(max_drawdown),
            sharpe_ratio: round2(sharpe_ratio),
            win_rate: round2(win_rate),
        }
    }
}

/// Metrics for an optional series; `None` yields the zero record.
pub fn compute(series: Option<&PriceSeries>) -> PerformanceMetrics {
    series
        .map(PerformanceMetrics::compute)
        .unwrap_or_else(PerformanceMetrics::zero)
}

/// Sum of daily returns within one calendar month, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyReturn {
    pub year: i32,
    pub month: u32,
    pub return_pct: f64,
}

impl MonthlyReturn {
    /// `YYYY-MM`
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Groups daily returns by the calendar month of the day they end on.
pub fn monthly_returns(series: &PriceSeries) -> Vec<MonthlyReturn> {
    let mut sums: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    let points = series.points();
    for (point, r) in points.iter().skip(1).zip(series.daily_returns()) {
        *sums.entry((point.date.year(), point.date.month())).or_default() += r;
    }
    sums.into_iter()
        .map(|((year, month), sum)| MonthlyReturn {
            year,
            month,
            return_pct: sum * 100.0,
        })
        .collect()
}

/// Largest fractional decline from a running peak, as a value <= 0.
fn compute_max_drawdown(series: &PriceSeries) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut max_dd = 0.0_f64;
    for point in series.points() {
        if point.value > peak {
            peak = point.value;
        }
        if peak > 0.0 {
            let dd = (point.value - peak) / peak;
            if dd < max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd
}

fn compute_sharpe(returns: &[f64], stddev: f64) -> f64 {
    if returns.is_empty() || stddev < STDDEV_EPSILON {
        return 0.0;
    }
    let daily_rf = RISK_FREE_RATE / TRADING_DAYS_PER_YEAR;
    let n = returns.len() as f64;
    let excess_mean = returns.iter().map(|r| r - daily_rf).sum::<f64>() / n;
    TRADING_DAYS_PER_YEAR.sqrt() * excess_mean / stddev
}

/// Sample standard deviation (n - 1 denominator); 0.0 below two samples.
fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let rounded = (value * 100.0).round() / 100.0;
    // avoid displaying -0.00
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::PricePoint;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_series(values: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
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

    #[test]
    fn metrics_empty_series_is_zero() {
        let metrics = PerformanceMetrics::compute(&PriceSeries::default());
        assert_eq!(metrics, PerformanceMetrics::zero());
    }

    #[test]
    fn metrics_none_is_zero() {
        assert_eq!(compute(None), PerformanceMetrics::zero());
    }

    #[test]
    fn metrics_single_point() {
        let metrics = PerformanceMetrics::compute(&make_series(&[100.0]));
        assert_eq!(metrics, PerformanceMetrics::zero());
    }

    #[test]
    fn metrics_total_return() {
        let metrics = PerformanceMetrics::compute(&make_series(&[100.0, 105.0, 110.0]));
        assert_relative_eq!(metrics.total_return, 10.0);
    }

    #[test]
    fn metrics_total_return_negative() {
        let metrics = PerformanceMetrics::compute(&make_series(&[200.0, 150.0]));
        assert_relative_eq!(metrics.total_return, -25.0);
    }

    #[test]
    fn metrics_max_drawdown() {
        // peak 110, trough 80 → -27.27%
        let metrics =
            PerformanceMetrics::compute(&make_series(&[100.0, 110.0, 90.0, 95.0, 80.0, 100.0]));
        assert_relative_eq!(metrics.max_drawdown, -27.27);
    }

    #[test]
    fn metrics_max_drawdown_monotonic_is_zero() {
        let metrics = PerformanceMetrics::compute(&make_series(&[1.0, 2.0, 2.0, 3.0]));
        assert_eq!(metrics.max_drawdown, 0.0);
        assert!(metrics.max_drawdown.is_sign_positive());
    }

    #[test]
    fn metrics_flat_series_has_zero_volatility_and_sharpe() {
        let metrics = PerformanceMetrics::compute(&make_series(&[50.0; 30]));
        assert_eq!(metrics.annual_volatility, 0.0);
        assert_eq!(metrics.sharpe_ratio, 0.0);
        assert_eq!(metrics.win_rate, 0.0);
        assert_eq!(metrics.total_return, 0.0);
    }

    #[test]
    fn metrics_constant_growth_has_zero_sharpe() {
        // 1% per day: every return equal up to rounding noise
        let values: Vec<f64> = (0..30).map(|i| 100.0 * 1.01_f64.powi(i)).collect();
        let metrics = PerformanceMetrics::compute(&make_series(&values));
        assert_eq!(metrics.annual_volatility, 0.0);
        assert_eq!(metrics.sharpe_ratio, 0.0);
        assert_eq!(metrics.win_rate, 100.0);
        assert_relative_eq!(metrics.total_return, 33.45);
    }

    #[test]
    fn metrics_win_rate() {
        // returns: +, -, +, 0 → 2 of 4
        let metrics = PerformanceMetrics::compute(&make_series(&[100.0, 101.0, 100.0, 102.0, 102.0]));
        assert_relative_eq!(metrics.win_rate, 50.0);
    }

    #[test]
    fn metrics_volatility_uses_sample_stddev() {
        // returns 0.1 and -0.1: mean 0, sample variance 0.02
        let metrics = PerformanceMetrics::compute(&make_series(&[100.0, 110.0, 99.0]));
        let expected = 0.02_f64.sqrt() * 252.0_f64.sqrt() * 100.0;
        assert_relative_eq!(metrics.annual_volatility, round2(expected));
    }

    #[test]
    fn metrics_sharpe_ratio() {
        let values = [100.0, 110.0, 99.0];
        let returns = [0.1, -0.1];
        let sd = sample_stddev(&returns);
        let excess = returns.iter().map(|r| r - 0.02 / 252.0).sum::<f64>() / 2.0;
        let expected = round2(252.0_f64.sqrt() * excess / sd);
        let metrics = PerformanceMetrics::compute(&make_series(&values));
        assert_relative_eq!(metrics.sharpe_ratio, expected);
    }

    #[test]
    fn metrics_sharpe_positive_for_steady_growth() {
        let values: Vec<f64> = (0..253).map(|i| 100.0 * (1.0 + 0.001 * i as f64)).collect();
        let metrics = PerformanceMetrics::compute(&make_series(&values));
        assert!(metrics.sharpe_ratio > 0.0);
    }

    #[test]
    fn metrics_are_rounded_to_two_decimals() {
        let metrics = PerformanceMetrics::compute(&make_series(&[3.0, 4.0]));
        // 33.333... → 33.33
        assert_relative_eq!(metrics.total_return, 33.33);
    }

    #[test]
    fn round2_normalizes_negative_zero() {
        let r = round2(-0.001);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
        assert_eq!(round2(f64::NAN), 0.0);
    }

    #[test]
    fn monthly_returns_sum_by_month() {
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        let series = PriceSeries::from_points(vec![
            PricePoint { date: d(1, 30), value: 100.0 },
            PricePoint { date: d(1, 31), value: 110.0 },
            PricePoint { date: d(2, 1), value: 99.0 },
            PricePoint { date: d(2, 2), value: 99.0 },
        ]);
        let months = monthly_returns(&series);
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].label(), "2024-01");
        assert_relative_eq!(months[0].return_pct, 10.0, epsilon = 1e-9);
        assert_eq!(months[1].label(), "2024-02");
        assert_relative_eq!(months[1].return_pct, -10.0, epsilon = 1e-9);
    }

    #[test]
    fn monthly_returns_empty_for_single_point() {
        assert!(monthly_returns(&make_series(&[1.0])).is_empty());
    }
}
