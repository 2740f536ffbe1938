use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;

use endeks_core::{
    ChartRequest, EndeksConnector, EndeksError, RawSeries, Timeframe, WindowResult,
    compute_window,
};

/// Owner of the raw dataset.
///
/// Holds at most one gap-filled series behind a read/write lock. Readers get a
/// cheap `Arc` snapshot; [`refresh`](Self::refresh) replaces the whole dataset
/// atomically, so a reader never observes a half-updated series. A failed
/// refresh leaves the previous dataset in place.
pub struct SeriesRepository {
    connector: Arc<dyn EndeksConnector>,
    start: NaiveDate,
    current: RwLock<Option<Arc<RawSeries>>>,
}

impl SeriesRepository {
    /// Create an empty repository that fetches history from `start` onward.
    #[must_use]
    pub fn new(connector: Arc<dyn EndeksConnector>, start: NaiveDate) -> Self {
        Self {
            connector,
            start,
            current: RwLock::new(None),
        }
    }

    /// The currently stored dataset, if any refresh has succeeded yet.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<RawSeries>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fetch a fresh dataset, gap-fill it, and swap it in.
    ///
    /// # Errors
    /// Returns `Unsupported` if the connector cannot serve charts, or the
    /// connector's fetch error. The stored dataset is untouched on failure.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = "debug"))]
    pub async fn refresh(&self) -> Result<(), EndeksError> {
        let provider = self
            .connector
            .as_chart_provider()
            .ok_or(EndeksError::unsupported("chart"))?;

        let mut series = provider.chart(ChartRequest::from_start(self.start)).await?;
        series.fill_gaps();

        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(series));
        Ok(())
    }

    /// The stored dataset, refreshing first if the repository is still empty.
    ///
    /// # Errors
    /// Propagates the refresh error when the initial fetch fails.
    pub async fn load(&self) -> Result<Arc<RawSeries>, EndeksError> {
        if let Some(series) = self.snapshot() {
            return Ok(series);
        }
        self.refresh().await?;
        self.snapshot().ok_or(EndeksError::EmptySeries)
    }

    /// Windowed, rebased view of the stored dataset for `timeframe`,
    /// evaluated against `today`.
    ///
    /// # Errors
    /// Propagates refresh errors on a cold repository, plus the windowing
    /// errors of [`compute_window`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = "debug"))]
    pub async fn window(
        &self,
        timeframe: Timeframe,
        today: NaiveDate,
    ) -> Result<WindowResult, EndeksError> {
        let series = self.load().await?;
        compute_window(&series, timeframe, today)
    }
}
