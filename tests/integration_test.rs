//! End-to-end flow: answers → style code → recommended sectors → series →
//! metrics, against both an in-memory port and real CSV files on disk.

mod common;

use approx::assert_relative_eq;
use common::*;
use sectorscope::adapters::csv_adapter::CsvAdapter;
use sectorscope::domain::analysis::{analyze_sector, analyze_sectors, recommend};
use sectorscope::domain::error::{NotFoundReason, SectorScopeError};
use sectorscope::domain::metrics::{self, PerformanceMetrics};
use sectorscope::domain::questionnaire::{Answers, Questionnaire, classify};
use sectorscope::domain::recommendation::{sectors_for, traits_for};
use sectorscope::domain::series::{self, DateRange, RawObservation, RawSeries};
use sectorscope::domain::style::{Axis, Letter, StyleCode};
use std::fs;
use tempfile::TempDir;

mod classification {
    use super::*;

    #[test]
    fn estp_fixture() {
        let answers = answers_leaning(&[Letter::E, Letter::S, Letter::T, Letter::P]);
        assert_eq!(classify(&answers).to_string(), "ESTP");
    }

    #[test]
    fn every_code_is_reachable() {
        for code in StyleCode::all() {
            let answers = answers_leaning(&code.letters());
            assert_eq!(classify(&answers), code);
        }
    }

    #[test]
    fn hand_computed_mixed_tally() {
        // IE: yes to E-questions 1,3,5 and no to 7,9 → E+3, I+2;
        //     no to all I-questions 2..10 → E+5.  E 8 vs I 2 → E
        // NS: yes to N-questions 11,13 → N+2; yes to S-question 12 → S+1  → N
        // TF: no to T-question 21 → F+1; yes to T-question 23 → T+1      → tie → T
        // JP: nothing answered                                           → tie → J
        let mut answers = Answers::new();
        for id in [1, 3, 5] {
            answers.insert(id, true);
        }
        for id in [7, 9, 2, 4, 6, 8, 10] {
            answers.insert(id, false);
        }
        answers.insert(11, true);
        answers.insert(13, true);
        answers.insert(12, true);
        answers.insert(21, false);
        answers.insert(23, true);

        let tally = Questionnaire::standard().tally(&answers);
        assert_eq!(tally.count(Letter::E), 8);
        assert_eq!(tally.count(Letter::I), 2);
        assert_eq!(tally.count(Letter::N), 2);
        assert_eq!(tally.count(Letter::S), 1);
        assert!(tally.is_tied(Axis::TF));
        assert_eq!(classify(&answers).to_string(), "ENTJ");
    }

    #[test]
    fn flipped_answers_give_complement_on_untied_axes() {
        let answers = answers_leaning(&[Letter::I, Letter::S, Letter::F, Letter::P]);
        let flipped: Answers = answers.iter().map(|(&id, &a)| (id, !a)).collect();
        assert_eq!(classify(&answers).to_string(), "ISFP");
        assert_eq!(classify(&flipped).to_string(), "ENTJ");
        assert_eq!(classify(&flipped), classify(&answers).complement());
    }

    #[test]
    fn classify_is_pure() {
        let answers = answers_leaning(&[Letter::E, Letter::N]);
        let first = classify(&answers);
        for _ in 0..5 {
            assert_eq!(classify(&answers), first);
        }
    }
}

mod recommendation_flow {
    use super::*;

    #[test]
    fn every_code_resolves_to_known_traits() {
        for code in StyleCode::all() {
            let sectors = sectors_for(code);
            assert!(!sectors.is_empty());
            for s in sectors {
                assert!(traits_for(s).is_some(), "{s}");
            }
        }
    }

    #[test]
    fn quiz_to_metrics_with_mock_port() {
        let answers = answers_leaning(&[Letter::E, Letter::S, Letter::T, Letter::P]);
        let rec = recommend(classify(&answers));
        assert_eq!(rec.code.to_string(), "ESTP");

        let port = MockDataPort::new()
            .with_values("증권", "2024-01-01", &[100.0, 102.0, 101.0, 105.0])
            .with_values("건설", "2024-01-01", &[50.0, 50.0, 50.0]);

        let reports = analyze_sectors(&port, rec.sectors, None);
        assert_eq!(reports.len(), rec.sectors.len());

        let securities = reports[0].result.as_ref().unwrap();
        assert_relative_eq!(securities.metrics.total_return, 5.0);

        let construction = reports[1].result.as_ref().unwrap();
        assert_eq!(construction.metrics.sharpe_ratio, 0.0);
        assert_eq!(construction.metrics.annual_volatility, 0.0);

        // third sector has no source
        let missing = reports[2].result.as_ref().unwrap_err();
        assert!(missing.is_no_data());
    }
}

mod loading {
    use super::*;

    #[test]
    fn range_outside_history_is_not_found() {
        let port = MockDataPort::new().with_values("금융", "2022-01-01", &[1.0, 2.0, 3.0]);
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        let err = series::load(&port, "금융", Some(&range)).unwrap_err();
        assert!(matches!(
            err,
            SectorScopeError::NotFound {
                reason: NotFoundReason::OutsideRange,
                ..
            }
        ));
        // the caller degrades to the zero record
        let metrics = metrics::compute(series::load(&port, "금융", Some(&range)).ok().as_ref());
        assert_eq!(metrics, PerformanceMetrics::zero());
    }

    #[test]
    fn unsorted_gappy_raw_data_is_cleaned() {
        let raw = RawSeries::new(vec![
            RawObservation { date: date(2024, 1, 5), value: Some(105.0) },
            RawObservation { date: date(2024, 1, 2), value: Some(100.0) },
            RawObservation { date: date(2024, 1, 3), value: None },
            RawObservation { date: date(2024, 1, 4), value: None },
            RawObservation { date: date(2024, 1, 4), value: None },
        ]);
        let port = MockDataPort::new().with_raw("유통", raw);
        let series = series::load(&port, "유통", None).unwrap();
        let values: Vec<_> = series.points().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![100.0, 100.0, 100.0, 105.0]);
        for pair in series.points().windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn csv_directory_end_to_end() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("통신.csv"),
            sector_csv(&[
                ("2023-12-29", "380.00"),
                ("2024-01-02", "400.00"),
                ("2024-01-03", ""),
                ("2024-01-04", "420.00"),
                ("2024-01-05", "399.00"),
                ("2024-01-08", "bad"),
                ("2024-01-09", "440.00"),
            ]),
        )
        .unwrap();
        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();

        let data = analyze_sector(&adapter, "통신", Some(&range)).unwrap();
        let values: Vec<_> = data.series.points().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![400.0, 400.0, 420.0, 399.0, 440.0]);
        assert_relative_eq!(data.metrics.total_return, 10.0);
        // peak 420 → 399: -5%
        assert_relative_eq!(data.metrics.max_drawdown, -5.0);
        // returns 0, +5%, -5%, +10.28% → 2 of 4 positive
        assert_relative_eq!(data.metrics.win_rate, 50.0);
    }

    #[test]
    fn repeated_loads_are_identical() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("보험.csv"),
            sector_csv(&[("2024-01-02", "10"), ("2024-01-03", "11")]),
        )
        .unwrap();
        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        let a = series::load(&adapter, "보험", None).unwrap();
        let b = series::load(&adapter, "보험", None).unwrap();
        assert_eq!(a, b);
    }
}

mod metrics_properties {
    use super::*;
    use proptest::prelude::*;

    fn series_strategy() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(1.0f64..10_000.0, 1..120)
    }

    proptest! {
        #[test]
        fn max_drawdown_never_positive(values in series_strategy()) {
            let m = PerformanceMetrics::compute(&make_series("2024-01-01", &values));
            prop_assert!(m.max_drawdown <= 0.0);
        }

        #[test]
        fn non_decreasing_has_zero_drawdown(mut values in series_strategy()) {
            values.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let m = PerformanceMetrics::compute(&make_series("2024-01-01", &values));
            prop_assert_eq!(m.max_drawdown, 0.0);
        }

        #[test]
        fn total_return_matches_endpoints(values in prop::collection::vec(1.0f64..10_000.0, 2..120)) {
            let m = PerformanceMetrics::compute(&make_series("2024-01-01", &values));
            let expected = (values[values.len() - 1] / values[0] - 1.0) * 100.0;
            prop_assert!((m.total_return - expected).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn all_fields_finite(values in series_strategy()) {
            let m = PerformanceMetrics::compute(&make_series("2024-01-01", &values));
            for v in [m.total_return, m.annual_volatility, m.max_drawdown, m.sharpe_ratio, m.win_rate] {
                prop_assert!(v.is_finite());
            }
            prop_assert!((0.0..=100.0).contains(&m.win_rate));
            prop_assert!(m.annual_volatility >= 0.0);
        }

        #[test]
        fn flat_series_is_degenerate_safe(value in 0.01f64..10_000.0, len in 1usize..60) {
            let m = PerformanceMetrics::compute(&make_series("2024-01-01", &vec![value; len]));
            prop_assert_eq!(m.sharpe_ratio, 0.0);
            prop_assert_eq!(m.annual_volatility, 0.0);
        }

        #[test]
        fn flipping_answers_complements_untied_axes(bits in prop::collection::vec(prop::option::of(any::<bool>()), 40)) {
            let answers: Answers = bits
                .iter()
                .enumerate()
                .filter_map(|(i, b)| b.map(|b| ((i + 1) as u16, b)))
                .collect();
            let flipped: Answers = answers.iter().map(|(&id, &a)| (id, !a)).collect();
            let questionnaire = Questionnaire::standard();
            let tally = questionnaire.tally(&answers);
            let original = questionnaire.classify(&answers);
            let other = questionnaire.classify(&flipped);
            for axis in Axis::ALL {
                if tally.is_tied(axis) {
                    prop_assert_eq!(other.letter(axis), axis.tie_break());
                } else {
                    prop_assert_eq!(other.letter(axis), original.letter(axis).opposite());
                }
            }
        }
    }
}
