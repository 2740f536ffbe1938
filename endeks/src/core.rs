use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};

use endeks_core::{
    CardDetails, Constituent, EndeksConnector, EndeksError, IpoListing, RawSeries, Timeframe,
    WindowResult,
};

use crate::poll::{self, PollHandle};
use crate::repository::SeriesRepository;

const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(60);
const DEFAULT_HISTORY_RANGE: Timeframe = Timeframe::Y1;

/// Dashboard engine over a single connector.
///
/// Owns a [`SeriesRepository`] for the chart dataset and passes composition
/// and IPO-calendar requests straight through to the connector.
pub struct Endeks {
    connector: Arc<dyn EndeksConnector>,
    repo: Arc<SeriesRepository>,
    poll_period: Duration,
}

impl std::fmt::Debug for Endeks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endeks")
            .field("connector", &self.connector.name())
            .field("poll_period", &self.poll_period)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing an [`Endeks`] engine.
pub struct EndeksBuilder {
    connector: Option<Arc<dyn EndeksConnector>>,
    poll_period: Duration,
    history_range: Timeframe,
    history_start: Option<NaiveDate>,
}

impl Default for EndeksBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EndeksBuilder {
    /// Create a builder with defaults: 60 s poll period, one year of history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connector: None,
            poll_period: DEFAULT_POLL_PERIOD,
            history_range: DEFAULT_HISTORY_RANGE,
            history_start: None,
        }
    }

    /// Register the data connector. Required.
    #[must_use]
    pub fn connector(mut self, c: Arc<dyn EndeksConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Interval between scheduled refreshes (default 60 s).
    #[must_use]
    pub const fn poll_period(mut self, period: Duration) -> Self {
        self.poll_period = period;
        self
    }

    /// How far back the repository fetches history (default one year).
    ///
    /// Every timeframe window is cut from this dataset, so it should be at
    /// least as wide as the widest timeframe you intend to serve.
    #[must_use]
    pub const fn history_range(mut self, range: Timeframe) -> Self {
        self.history_range = range;
        self
    }

    /// Pin the history fetch to an explicit start date, overriding
    /// [`history_range`](Self::history_range). Useful against backends with a
    /// fixed data window.
    #[must_use]
    pub const fn history_start(mut self, start: NaiveDate) -> Self {
        self.history_start = Some(start);
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no connector is registered or the poll
    /// period is zero.
    pub fn build(self) -> Result<Endeks, EndeksError> {
        let connector = self
            .connector
            .ok_or_else(|| EndeksError::invalid_arg("no connector registered".to_string()))?;
        if self.poll_period.is_zero() {
            return Err(EndeksError::invalid_arg(
                "poll period must be non-zero".to_string(),
            ));
        }

        let start = match self.history_start {
            Some(start) => start,
            None => self.history_range.start_date(Utc::now().date_naive()),
        };
        let repo = Arc::new(SeriesRepository::new(Arc::clone(&connector), start));
        Ok(Endeks {
            connector,
            repo,
            poll_period: self.poll_period,
        })
    }
}

impl Endeks {
    /// Start building an engine.
    #[must_use]
    pub const fn builder() -> EndeksBuilder {
        EndeksBuilder::new()
    }

    /// Force a refresh of the chart dataset.
    ///
    /// # Errors
    /// Propagates the connector's fetch error; the stored dataset is kept on
    /// failure.
    pub async fn refresh(&self) -> Result<(), EndeksError> {
        self.repo.refresh().await
    }

    /// Windowed, rebased chart view for `timeframe`, evaluated against the
    /// current UTC date.
    ///
    /// # Errors
    /// See [`window_at`](Self::window_at).
    pub async fn window(&self, timeframe: Timeframe) -> Result<WindowResult, EndeksError> {
        self.window_at(timeframe, Utc::now().date_naive()).await
    }

    /// Windowed, rebased chart view evaluated against an explicit `today`.
    ///
    /// # Errors
    /// Returns `EmptySeries` when the dataset holds no points, `InvalidBase`
    /// when a series cannot be rebased, and fetch errors when the repository
    /// is cold and the initial load fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = "debug"))]
    pub async fn window_at(
        &self,
        timeframe: Timeframe,
        today: NaiveDate,
    ) -> Result<WindowResult, EndeksError> {
        self.repo.window(timeframe, today).await
    }

    /// The full gap-filled dataset, loading it on first use.
    ///
    /// # Errors
    /// Propagates the initial fetch error on a cold repository.
    pub async fn full_series(&self) -> Result<Arc<RawSeries>, EndeksError> {
        self.repo.load().await
    }

    /// Current index composition.
    ///
    /// # Errors
    /// Returns `Unsupported` when the connector has no composition capability.
    pub async fn composition(&self) -> Result<Vec<Constituent>, EndeksError> {
        let provider = self
            .connector
            .as_composition_provider()
            .ok_or(EndeksError::unsupported("composition"))?;
        provider.composition().await
    }

    /// Upcoming listings.
    ///
    /// # Errors
    /// Returns `Unsupported` when the connector has no IPO-calendar
    /// capability.
    pub async fn ipo_calendar(&self) -> Result<Vec<IpoListing>, EndeksError> {
        let provider = self
            .connector
            .as_ipo_calendar_provider()
            .ok_or(EndeksError::unsupported("ipo-calendar"))?;
        provider.ipo_calendar().await
    }

    /// Detail cards for the dashboard: upcoming listings first, then
    /// constituents.
    ///
    /// # Errors
    /// Requires both the IPO-calendar and composition capabilities.
    pub async fn cards(&self) -> Result<Vec<CardDetails>, EndeksError> {
        let listings = self.ipo_calendar().await?;
        let rows = self.composition().await?;
        Ok(listings
            .into_iter()
            .map(CardDetails::Ipo)
            .chain(rows.into_iter().map(CardDetails::Constituent))
            .collect())
    }

    /// Spawn the background refresh loop at the configured poll period.
    ///
    /// The loop refreshes immediately, then on every tick; drop or
    /// [`stop`](PollHandle::stop) the returned handle to end it.
    #[must_use]
    pub fn spawn_poller(&self) -> PollHandle {
        poll::spawn_poller(Arc::clone(&self.repo), self.poll_period)
    }
}
