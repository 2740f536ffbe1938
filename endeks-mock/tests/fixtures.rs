use chrono::NaiveDate;
use endeks_core::connector::EndeksConnector;
use endeks_core::{ChartRequest, EndeksError};
use endeks_mock::MockConnector;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn chart_fixture_is_well_formed_and_sparse() {
    let mock = MockConnector::new();
    let provider = mock.as_chart_provider().unwrap();
    let series = provider
        .chart(ChartRequest::from_start(d("2023-01-01")))
        .await
        .unwrap();

    assert!(!series.is_empty());
    assert_eq!(series.dates.len(), series.index.len());
    assert_eq!(series.dates.len(), series.benchmark.len());
    // The fixture must exercise gap-fill, including a leading benchmark gap.
    assert!(series.benchmark[0].is_none());
    assert!(series.index.iter().any(Option::is_none));
}

#[tokio::test]
async fn chart_respects_range_start() {
    let mock = MockConnector::new();
    let provider = mock.as_chart_provider().unwrap();
    let series = provider
        .chart(ChartRequest::from_start(d("2023-12-01")))
        .await
        .unwrap();
    assert!(series.dates.iter().all(|date| *date >= d("2023-12-01")));
    assert!(!series.is_empty());
}

#[tokio::test]
async fn composition_and_ipo_calendar_are_nonempty() {
    let mock = MockConnector::new();
    let rows = mock.as_composition_provider().unwrap().composition().await.unwrap();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r.weight_pct > 0.0));

    let listings = mock
        .as_ipo_calendar_provider()
        .unwrap()
        .ipo_calendar()
        .await
        .unwrap();
    assert!(!listings.is_empty());
    assert!(listings.iter().all(|l| l.price_band_low < l.price_band_high));
}

#[tokio::test]
async fn failing_connector_fails_every_capability() {
    let mock = MockConnector::failing();
    let err = mock
        .as_chart_provider()
        .unwrap()
        .chart(ChartRequest::from_start(d("2023-01-01")))
        .await
        .unwrap_err();
    assert!(matches!(err, EndeksError::Connector { .. }));

    let err = mock
        .as_composition_provider()
        .unwrap()
        .composition()
        .await
        .unwrap_err();
    assert!(matches!(err, EndeksError::Connector { .. }));
}
