use chrono::NaiveDate;
use endeks_core::{EndeksError, RawSeries, Timeframe, compute_window, window_start};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn series(dates: &[&str], index: &[f64], benchmark: &[f64]) -> RawSeries {
    RawSeries::new(
        dates.iter().map(|s| d(s)).collect(),
        index.iter().copied().map(Some).collect(),
        benchmark.iter().copied().map(Some).collect(),
    )
    .unwrap()
}

#[test]
fn ytd_threshold_selects_whole_year() {
    let s = series(
        &["2023-01-01", "2023-06-01", "2023-12-31"],
        &[100.0, 110.0, 120.0],
        &[50.0, 55.0, 60.0],
    );
    let today = d("2023-12-31");
    let win = compute_window(&s, Timeframe::Ytd, today).unwrap();
    assert_eq!(win.dates.len(), 3);
    assert_eq!(win.dates[0], d("2023-01-01"));
}

#[test]
fn rebase_scales_to_one_hundred() {
    let s = series(
        &["2023-10-01", "2023-11-01", "2023-12-01"],
        &[50.0, 100.0, 150.0],
        &[200.0, 300.0, 400.0],
    );
    let today = d("2023-12-01");
    let win = compute_window(&s, Timeframe::Y1, today).unwrap();
    assert_eq!(win.index, vec![100.0, 200.0, 300.0]);
    assert_eq!(win.benchmark, vec![100.0, 150.0, 200.0]);
    assert_eq!(win.summary.latest, 300.0);
    assert_eq!(win.summary.change, 200.0);
    assert_eq!(win.summary.pct_change, 200.0);
}

#[test]
fn each_series_rebases_against_its_own_base() {
    let s = series(
        &["2023-12-01", "2023-12-02"],
        &[10.0, 20.0],
        &[1000.0, 1100.0],
    );
    let win = compute_window(&s, Timeframe::W1, d("2023-12-02")).unwrap();
    assert_eq!(win.index[0], 100.0);
    assert_eq!(win.benchmark[0], 100.0);
    assert_eq!(win.index[1], 200.0);
    assert!((win.benchmark[1] - 110.0).abs() < 1e-9);
}

#[test]
fn window_trims_older_dates() {
    let s = series(
        &["2023-01-02", "2023-06-01", "2023-12-28", "2023-12-29"],
        &[100.0, 110.0, 120.0, 130.0],
        &[50.0, 55.0, 60.0, 65.0],
    );
    let win = compute_window(&s, Timeframe::W1, d("2023-12-31")).unwrap();
    assert_eq!(win.dates, vec![d("2023-12-28"), d("2023-12-29")]);
    assert_eq!(win.index[0], 100.0);
}

#[test]
fn threshold_beyond_last_date_falls_back_to_whole_series() {
    let s = series(
        &["2020-01-01", "2020-06-01"],
        &[100.0, 150.0],
        &[10.0, 12.0],
    );
    // Everything is far older than any 2023 threshold.
    let win = compute_window(&s, Timeframe::W1, d("2023-12-31")).unwrap();
    assert_eq!(win.dates.len(), 2);
    assert_eq!(win.summary.latest, 150.0);
}

#[test]
fn empty_series_is_refused() {
    let s = RawSeries::new(vec![], vec![], vec![]).unwrap();
    let err = compute_window(&s, Timeframe::Ytd, d("2023-12-31")).unwrap_err();
    assert!(matches!(err, EndeksError::EmptySeries));
}

#[test]
fn zero_base_is_an_explicit_error() {
    let s = series(&["2023-12-01", "2023-12-02"], &[0.0, 10.0], &[1.0, 2.0]);
    let err = compute_window(&s, Timeframe::W1, d("2023-12-02")).unwrap_err();
    assert!(matches!(err, EndeksError::InvalidBase { series: "index" }));
}

#[test]
fn absent_base_is_an_explicit_error() {
    // An all-absent benchmark survives gap-fill as all-absent.
    let s = RawSeries::new(
        vec![d("2023-12-01"), d("2023-12-02")],
        vec![Some(10.0), Some(20.0)],
        vec![None, None],
    )
    .unwrap();
    let err = compute_window(&s, Timeframe::W1, d("2023-12-02")).unwrap_err();
    assert!(matches!(err, EndeksError::InvalidBase { series: "benchmark" }));
}

#[test]
fn window_start_picks_first_date_meeting_threshold() {
    let dates = vec![d("2023-01-01"), d("2023-06-01"), d("2023-12-31")];
    assert_eq!(window_start(&dates, d("2023-01-01")), 0);
    assert_eq!(window_start(&dates, d("2023-03-01")), 1);
    assert_eq!(window_start(&dates, d("2024-06-01")), 0);
}
