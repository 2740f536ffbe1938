use chrono::NaiveDate;
use endeks_core::{EndeksError, RawSeries};

// Semi-monthly fixture covering 2023. Gaps are deliberate: the benchmark
// opens with missing observations and both series have interior holes, so
// repository gap-fill behavior is visible end to end.
const ROWS: &[(&str, Option<f64>, Option<f64>)] = &[
    ("2023-01-02", Some(1000.0), None),
    ("2023-01-16", Some(1012.5), Some(18_150.0)),
    ("2023-02-01", None, Some(18_040.0)),
    ("2023-02-15", Some(987.0), Some(17_910.0)),
    ("2023-03-01", Some(1004.0), None),
    ("2023-03-15", Some(1021.0), Some(17_120.0)),
    ("2023-04-03", Some(1048.5), Some(17_360.0)),
    ("2023-05-02", None, Some(18_090.0)),
    ("2023-06-01", Some(1095.0), Some(18_560.0)),
    ("2023-07-03", Some(1132.0), Some(19_320.0)),
    ("2023-08-01", Some(1118.0), Some(19_730.0)),
    ("2023-09-01", Some(1164.5), Some(19_430.0)),
    ("2023-10-02", Some(1151.0), None),
    ("2023-11-01", Some(1187.0), Some(19_060.0)),
    ("2023-12-01", Some(1224.0), Some(20_270.0)),
    ("2023-12-29", Some(1261.5), Some(21_730.0)),
];

/// Fixture rows on or after `start`, as the backend would slice them.
pub fn series_from(start: NaiveDate) -> Result<RawSeries, EndeksError> {
    let mut dates = Vec::new();
    let mut index = Vec::new();
    let mut benchmark = Vec::new();
    for (date, idx, bench) in ROWS {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| EndeksError::data(format!("bad fixture date {date}: {e}")))?;
        if date >= start {
            dates.push(date);
            index.push(*idx);
            benchmark.push(*bench);
        }
    }
    RawSeries::new(dates, index, benchmark)
}
