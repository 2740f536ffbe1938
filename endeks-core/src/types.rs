//! Common data structures shared across the endeks workspace.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::EndeksError;

/// The raw dataset behind the dashboard: a date axis and two parallel numeric
/// series (the tracked index and its benchmark) aligned 1:1 with the dates.
///
/// `None` entries mark trading days where a series has no observation; they
/// are resolved by [`RawSeries::fill_gaps`] before windowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    /// Calendar dates, strictly ascending and unique.
    pub dates: Vec<NaiveDate>,
    /// Tracked index values, aligned with `dates`.
    pub index: Vec<Option<f64>>,
    /// Benchmark index values, aligned with `dates`.
    pub benchmark: Vec<Option<f64>>,
}

impl RawSeries {
    /// Build a validated series.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the three sequences differ in length or the
    /// dates are not strictly ascending.
    pub fn new(
        dates: Vec<NaiveDate>,
        index: Vec<Option<f64>>,
        benchmark: Vec<Option<f64>>,
    ) -> Result<Self, EndeksError> {
        if dates.len() != index.len() || dates.len() != benchmark.len() {
            return Err(EndeksError::invalid_arg(format!(
                "series length mismatch: {} dates, {} index, {} benchmark",
                dates.len(),
                index.len(),
                benchmark.len()
            )));
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(EndeksError::invalid_arg(
                "dates must be strictly ascending and unique".to_string(),
            ));
        }
        Ok(Self {
            dates,
            index,
            benchmark,
        })
    }

    /// Number of data points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series holds no data points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Resolve missing observations in both numeric series independently via
    /// forward fill then backward fill. The date axis is never touched.
    ///
    /// After this pass no `None` remains as long as the series contained at
    /// least one observation; an all-`None` series stays all-`None`.
    pub fn fill_gaps(&mut self) {
        crate::timeseries::fill::fill_gaps(&mut self.index);
        crate::timeseries::fill::fill_gaps(&mut self.benchmark);
    }
}

/// Symbolic window selector mapped to a concrete start-date threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    /// Trailing week: today minus 7 days.
    #[serde(rename = "1W")]
    W1,
    /// Trailing calendar month.
    #[serde(rename = "1M")]
    M1,
    /// Trailing three calendar months.
    #[serde(rename = "3M")]
    M3,
    /// Year to date: January 1 of the current year.
    #[serde(rename = "YTD")]
    Ytd,
    /// Trailing calendar year.
    #[serde(rename = "1Y")]
    Y1,
}

impl Timeframe {
    /// The UI tag for this timeframe.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::W1 => "1W",
            Self::M1 => "1M",
            Self::M3 => "3M",
            Self::Ytd => "YTD",
            Self::Y1 => "1Y",
        }
    }

    /// Start-date threshold for this timeframe, evaluated against `today`.
    ///
    /// Calendar arithmetic clamps to valid dates (e.g. Mar 31 minus one month
    /// is Feb 28/29); a threshold that underflows the calendar saturates to
    /// the earliest representable date.
    #[must_use]
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::W1 => today.checked_sub_days(Days::new(7)),
            Self::M1 => today.checked_sub_months(Months::new(1)),
            Self::M3 => today.checked_sub_months(Months::new(3)),
            Self::Ytd => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Self::Y1 => today.checked_sub_months(Months::new(12)),
        }
        .unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = EndeksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1W" => Ok(Self::W1),
            "1M" => Ok(Self::M1),
            "3M" => Ok(Self::M3),
            "YTD" => Ok(Self::Ytd),
            "1Y" => Ok(Self::Y1),
            other => Err(EndeksError::invalid_arg(format!(
                "unknown timeframe tag: {other}"
            ))),
        }
    }
}

/// Request parameters for a chart fetch covering `[start, end]`.
///
/// `end` defaults to the backend's notion of "now" when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Inclusive range start.
    pub start: NaiveDate,
    /// Optional inclusive range end.
    pub end: Option<NaiveDate>,
}

impl ChartRequest {
    /// Request the range `[start, now]`.
    #[must_use]
    pub const fn from_start(start: NaiveDate) -> Self {
        Self { start, end: None }
    }
}

/// Headline statistics derived from a rebased window's first and last values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Last rebased index value in the window.
    pub latest: f64,
    /// Absolute change over the window. Equals `latest - 100` because the
    /// window is rebased to 100 at its first element.
    pub change: f64,
    /// Percent change over the window.
    pub pct_change: f64,
}

/// A windowed, gap-filled, rebased view of the stored dataset: the outbound
/// contract to the rendering collaborator. The renderer must not repeat
/// gap-fill or rebase math on these values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowResult {
    /// Dates covered by the window.
    pub dates: Vec<NaiveDate>,
    /// Tracked index, rebased so its first element is 100.
    pub index: Vec<f64>,
    /// Benchmark, rebased against its own base so its first element is 100.
    pub benchmark: Vec<f64>,
    /// Headline statistics for the tracked index.
    pub summary: Summary,
}

/// One constituent row of the index composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constituent {
    /// Exchange ticker.
    pub ticker: String,
    /// Company name.
    pub name: String,
    /// Sector label.
    pub sector: String,
    /// Last traded price.
    pub price: f64,
    /// 52-week high.
    pub high_52w: f64,
    /// 52-week low.
    pub low_52w: f64,
    /// Market capitalization.
    pub market_cap: f64,
    /// Weight within the index, in percent.
    pub weight_pct: f64,
}

/// One upcoming listing from the IPO calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpoListing {
    /// Company name.
    pub name: String,
    /// Sector label.
    pub sector: String,
    /// Expected listing date.
    pub expected_date: NaiveDate,
    /// Lower bound of the price band.
    pub price_band_low: f64,
    /// Upper bound of the price band.
    pub price_band_high: f64,
    /// Total issue size.
    pub issue_size: f64,
    /// Estimated post-listing valuation.
    pub est_valuation: f64,
    /// Lead manager, when announced.
    pub lead_manager: Option<String>,
}

/// Typed payload behind a dashboard card's details view.
///
/// Each variant carries its own field set; consumers match exhaustively
/// instead of branching on a string tag with positional label/value slots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardDetails {
    /// An upcoming listing card.
    Ipo(IpoListing),
    /// An index constituent card.
    Constituent(Constituent),
}

impl CardDetails {
    /// Short status tag shown next to the card title.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Ipo(_) => "DRHP Filed",
            Self::Constituent(_) => "Index Constituent",
        }
    }

    /// Display name for the card title.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ipo(ipo) => &ipo.name,
            Self::Constituent(c) => &c.name,
        }
    }

    /// The labeled detail rows for this card, in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Ipo(ipo) => vec![
                ("Expected Date", ipo.expected_date.to_string()),
                (
                    "Price Band",
                    format!("{:.2} to {:.2}", ipo.price_band_low, ipo.price_band_high),
                ),
                ("Issue Size", format!("{:.0}", ipo.issue_size)),
                ("Est. Valuation", format!("{:.0}", ipo.est_valuation)),
                ("Sector", ipo.sector.clone()),
                (
                    "Lead Manager",
                    ipo.lead_manager.clone().unwrap_or_else(|| "TBA".to_string()),
                ),
            ],
            Self::Constituent(c) => vec![
                ("Market Cap", format!("{:.0}", c.market_cap)),
                ("Current Price", format!("{:.2}", c.price)),
                ("52W High", format!("{:.2}", c.high_52w)),
                ("52W Low", format!("{:.2}", c.low_52w)),
                ("Sector", c.sector.clone()),
                ("Index Weight", format!("{:.1}%", c.weight_pct)),
            ],
        }
    }
}
