//! Mock connector for CI-safe examples and tests. Provides deterministic data
//! from static fixtures; no network access.

use async_trait::async_trait;
use endeks_core::connector::{
    ChartProvider, CompositionProvider, EndeksConnector, IpoCalendarProvider,
};
use endeks_core::{ChartRequest, Constituent, EndeksError, IpoListing, RawSeries};

mod fixtures;

/// Deterministic fixture-backed connector.
pub struct MockConnector {
    fail: bool,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector that serves the fixture dataset.
    #[must_use]
    pub const fn new() -> Self {
        Self { fail: false }
    }

    /// Connector whose every fetch fails, for exercising error paths.
    #[must_use]
    pub const fn failing() -> Self {
        Self { fail: true }
    }

    fn maybe_fail(&self, capability: &'static str) -> Result<(), EndeksError> {
        if self.fail {
            return Err(EndeksError::connector(
                "endeks-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl EndeksConnector for MockConnector {
    fn name(&self) -> &'static str {
        "endeks-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_chart_provider(&self) -> Option<&dyn ChartProvider> {
        Some(self as &dyn ChartProvider)
    }
    fn as_composition_provider(&self) -> Option<&dyn CompositionProvider> {
        Some(self as &dyn CompositionProvider)
    }
    fn as_ipo_calendar_provider(&self) -> Option<&dyn IpoCalendarProvider> {
        Some(self as &dyn IpoCalendarProvider)
    }
}

#[async_trait]
impl ChartProvider for MockConnector {
    async fn chart(&self, req: ChartRequest) -> Result<RawSeries, EndeksError> {
        self.maybe_fail("chart")?;
        fixtures::chart::series_from(req.start)
    }
}

#[async_trait]
impl CompositionProvider for MockConnector {
    async fn composition(&self) -> Result<Vec<Constituent>, EndeksError> {
        self.maybe_fail("composition")?;
        Ok(fixtures::composition::rows())
    }
}

#[async_trait]
impl IpoCalendarProvider for MockConnector {
    async fn ipo_calendar(&self) -> Result<Vec<IpoListing>, EndeksError> {
        self.maybe_fail("ipo-calendar")?;
        Ok(fixtures::ipo::listings())
    }
}
