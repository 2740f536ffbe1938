//! Timeframe-windowed rebasing: the normalizer behind the dashboard chart.

use chrono::NaiveDate;

use crate::EndeksError;
use crate::types::{RawSeries, Summary, Timeframe, WindowResult};

/// Index of the first date meeting `threshold`, or 0 when no date does.
///
/// The whole-series fallback means a threshold newer than all available data
/// yields the full series rather than an empty window; callers that need to
/// distinguish the case can compare the threshold against the last date.
#[must_use]
pub fn window_start(dates: &[NaiveDate], threshold: NaiveDate) -> usize {
    dates.iter().position(|d| *d >= threshold).unwrap_or(0)
}

/// Compute the windowed, rebased view of `series` for `timeframe`, with the
/// threshold evaluated against `today`.
///
/// The input is expected to be gap-filled (see [`RawSeries::fill_gaps`]);
/// both numeric series are rebased independently against their own first
/// windowed value so that unrelated absolute scales become comparable. The
/// first element of each rebased series is exactly 100.
///
/// # Errors
/// - `EmptySeries` if the series holds no data points.
/// - `InvalidArg` if the numeric series are not aligned with the dates.
/// - `InvalidBase` if a series' first windowed value is zero or missing.
/// - `Data` if an unfilled gap remains inside the window.
pub fn compute_window(
    series: &RawSeries,
    timeframe: Timeframe,
    today: NaiveDate,
) -> Result<WindowResult, EndeksError> {
    if series.is_empty() {
        return Err(EndeksError::EmptySeries);
    }
    if series.index.len() != series.dates.len() || series.benchmark.len() != series.dates.len() {
        return Err(EndeksError::invalid_arg(
            "series are not aligned with the date axis".to_string(),
        ));
    }

    let threshold = timeframe.start_date(today);
    let start = window_start(&series.dates, threshold);

    let dates = series.dates[start..].to_vec();
    let index = rebase(&series.index[start..], "index")?;
    let benchmark = rebase(&series.benchmark[start..], "benchmark")?;

    let first = index[0];
    let latest = index[index.len() - 1];
    let change = latest - first;
    let pct_change = change / first * 100.0;
    // Rebasing guarantees the window opens at 100; the summary relies on it.
    debug_assert!((first - 100.0).abs() < f64::EPSILON);

    Ok(WindowResult {
        dates,
        index,
        benchmark,
        summary: Summary {
            latest,
            change,
            pct_change,
        },
    })
}

/// Scale a non-empty windowed series so its first element equals 100.
fn rebase(values: &[Option<f64>], label: &'static str) -> Result<Vec<f64>, EndeksError> {
    let base = match values.first().copied().flatten() {
        Some(b) if b != 0.0 && b.is_finite() => b,
        _ => return Err(EndeksError::invalid_base(label)),
    };
    values
        .iter()
        .map(|v| {
            v.map(|x| x / base * 100.0)
                .ok_or_else(|| EndeksError::data(format!("unfilled gap in {label} series")))
        })
        .collect()
}
