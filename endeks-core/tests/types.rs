use chrono::NaiveDate;
use endeks_core::{
    CardDetails, ChartRequest, Constituent, EndeksError, IpoListing, RawSeries, Timeframe,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn raw_series_rejects_length_mismatch() {
    let err = RawSeries::new(
        vec![d("2023-01-01"), d("2023-01-02")],
        vec![Some(1.0)],
        vec![Some(2.0), Some(3.0)],
    )
    .unwrap_err();
    assert!(matches!(err, EndeksError::InvalidArg(_)));
}

#[test]
fn raw_series_rejects_unsorted_dates() {
    let err = RawSeries::new(
        vec![d("2023-01-02"), d("2023-01-01")],
        vec![Some(1.0), Some(2.0)],
        vec![Some(1.0), Some(2.0)],
    )
    .unwrap_err();
    assert!(matches!(err, EndeksError::InvalidArg(_)));
}

#[test]
fn raw_series_rejects_duplicate_dates() {
    let err = RawSeries::new(
        vec![d("2023-01-01"), d("2023-01-01")],
        vec![Some(1.0), Some(2.0)],
        vec![Some(1.0), Some(2.0)],
    )
    .unwrap_err();
    assert!(matches!(err, EndeksError::InvalidArg(_)));
}

#[test]
fn fill_gaps_touches_both_series_but_not_dates() {
    let mut s = RawSeries::new(
        vec![d("2023-01-01"), d("2023-01-02"), d("2023-01-03")],
        vec![None, Some(10.0), None],
        vec![Some(5.0), None, None],
    )
    .unwrap();
    s.fill_gaps();
    assert_eq!(s.index, vec![Some(10.0), Some(10.0), Some(10.0)]);
    assert_eq!(s.benchmark, vec![Some(5.0), Some(5.0), Some(5.0)]);
    assert_eq!(s.dates.len(), 3);
}

#[test]
fn timeframe_thresholds() {
    let today = d("2023-12-31");
    assert_eq!(Timeframe::W1.start_date(today), d("2023-12-24"));
    assert_eq!(Timeframe::M1.start_date(today), d("2023-11-30"));
    assert_eq!(Timeframe::M3.start_date(today), d("2023-09-30"));
    assert_eq!(Timeframe::Ytd.start_date(today), d("2023-01-01"));
    assert_eq!(Timeframe::Y1.start_date(today), d("2022-12-31"));
}

#[test]
fn timeframe_month_arithmetic_clamps_to_month_end() {
    assert_eq!(Timeframe::M1.start_date(d("2023-03-31")), d("2023-02-28"));
    assert_eq!(Timeframe::M1.start_date(d("2024-03-31")), d("2024-02-29"));
}

#[test]
fn timeframe_tags_round_trip() {
    for tf in [
        Timeframe::W1,
        Timeframe::M1,
        Timeframe::M3,
        Timeframe::Ytd,
        Timeframe::Y1,
    ] {
        assert_eq!(tf.as_str().parse::<Timeframe>().unwrap(), tf);
    }
    assert!("2W".parse::<Timeframe>().is_err());
}

#[test]
fn timeframe_serde_uses_ui_tags() {
    assert_eq!(serde_json::to_string(&Timeframe::Ytd).unwrap(), "\"YTD\"");
    let tf: Timeframe = serde_json::from_str("\"3M\"").unwrap();
    assert_eq!(tf, Timeframe::M3);
}

#[test]
fn chart_request_from_start_leaves_end_open() {
    let req = ChartRequest::from_start(d("2023-01-01"));
    assert_eq!(req.start, d("2023-01-01"));
    assert!(req.end.is_none());
}

fn sample_ipo() -> IpoListing {
    IpoListing {
        name: "Zepto".to_string(),
        sector: "Quick Commerce".to_string(),
        expected_date: d("2024-03-15"),
        price_band_low: 310.0,
        price_band_high: 360.0,
        issue_size: 4_500.0,
        est_valuation: 22_500.0,
        lead_manager: None,
    }
}

fn sample_constituent() -> Constituent {
    Constituent {
        ticker: "PAYTM".to_string(),
        name: "One 97 Communications".to_string(),
        sector: "Fintech".to_string(),
        price: 412.0,
        high_52w: 612.0,
        low_52w: 312.0,
        market_cap: 26_200.0,
        weight_pct: 9.4,
    }
}

#[test]
fn card_details_variants_carry_their_own_fields() {
    let ipo = CardDetails::Ipo(sample_ipo());
    assert_eq!(ipo.tag(), "DRHP Filed");
    assert_eq!(ipo.name(), "Zepto");
    let rows = ipo.rows();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].0, "Expected Date");
    assert_eq!(rows[5], ("Lead Manager", "TBA".to_string()));

    let stock = CardDetails::Constituent(sample_constituent());
    assert_eq!(stock.tag(), "Index Constituent");
    let rows = stock.rows();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].0, "Market Cap");
    assert_eq!(rows[5], ("Index Weight", "9.4%".to_string()));
}

#[test]
fn card_details_serializes_with_kind_tag() {
    let json = serde_json::to_value(CardDetails::Constituent(sample_constituent())).unwrap();
    assert_eq!(json["kind"], "constituent");
    assert_eq!(json["ticker"], "PAYTM");
}
