use async_trait::async_trait;

use crate::EndeksError;
use crate::types::{ChartRequest, Constituent, IpoListing, RawSeries};

/// Focused role trait for connectors that provide chart time-series data.
#[async_trait]
pub trait ChartProvider: Send + Sync {
    /// Fetch the raw index/benchmark series for the requested date range.
    ///
    /// Implementations return the series exactly as the backend reports it,
    /// including `None` gaps; gap-filling happens in the repository.
    async fn chart(&self, req: ChartRequest) -> Result<RawSeries, EndeksError>;
}

/// Focused role trait for connectors that provide the index composition.
#[async_trait]
pub trait CompositionProvider: Send + Sync {
    /// Fetch the current constituent rows.
    async fn composition(&self) -> Result<Vec<Constituent>, EndeksError>;
}

/// Focused role trait for connectors that provide the upcoming-IPO calendar.
#[async_trait]
pub trait IpoCalendarProvider: Send + Sync {
    /// Fetch upcoming listings.
    async fn ipo_calendar(&self) -> Result<Vec<IpoListing>, EndeksError>;
}

/// Main connector trait implemented by provider crates. Exposes capability
/// discovery; a connector advertises a capability by returning a usable trait
/// object reference from the matching `as_*_provider` accessor.
pub trait EndeksConnector: Send + Sync {
    /// A stable identifier for diagnostics (e.g. "endeks-http").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise chart capability when supported.
    fn as_chart_provider(&self) -> Option<&dyn ChartProvider> {
        None
    }

    /// Advertise composition capability when supported.
    fn as_composition_provider(&self) -> Option<&dyn CompositionProvider> {
        None
    }

    /// Advertise IPO calendar capability when supported.
    fn as_ipo_calendar_provider(&self) -> Option<&dyn IpoCalendarProvider> {
        None
    }
}
