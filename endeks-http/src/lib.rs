//! HTTP connector for the endeks dashboard backend.
//!
//! Talks to three JSON endpoints relative to a base URL:
//! - `chart?start=YYYY-MM-DD[&end=YYYY-MM-DD]` — the raw index/benchmark
//!   series, with `null` marking missing observations;
//! - `composition` — current constituent rows;
//! - `ipo-calendar` — upcoming listings.
//!
//! One fetch attempt per call; retries are the caller's poll schedule, not
//! this crate's concern.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use endeks_core::connector::{
    ChartProvider, CompositionProvider, EndeksConnector, IpoCalendarProvider,
};
use endeks_core::{ChartRequest, Constituent, EndeksError, IpoListing, RawSeries};

mod wire;

const CONNECTOR_NAME: &str = "endeks-http";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connector backed by the dashboard backend's HTTP API.
#[derive(Debug)]
pub struct HttpConnector {
    client: reqwest::Client,
    base: Url,
}

/// Builder for [`HttpConnector`].
pub struct HttpConnectorBuilder {
    base_url: String,
    timeout: Duration,
}

impl HttpConnector {
    /// Start building a connector for the given base URL
    /// (e.g. `http://127.0.0.1:5000/api/`).
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> HttpConnectorBuilder {
        HttpConnectorBuilder {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, EndeksError> {
        self.base
            .join(path)
            .map_err(|e| EndeksError::invalid_arg(format!("bad endpoint path {path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        what: &'static str,
    ) -> Result<T, EndeksError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EndeksError::connector(CONNECTOR_NAME, format!("{what}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(EndeksError::connector(
                CONNECTOR_NAME,
                format!("{what}: HTTP {status}"),
            ));
        }

        resp.json::<T>()
            .await
            .map_err(|e| EndeksError::connector(CONNECTOR_NAME, format!("{what}: bad body: {e}")))
    }
}

impl HttpConnectorBuilder {
    /// Per-request timeout (default 10 s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL does not parse, or `Connector` if
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpConnector, EndeksError> {
        // Url::join drops the last path segment unless the base ends in '/'.
        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base = Url::parse(&base_url)
            .map_err(|e| EndeksError::invalid_arg(format!("bad base url {base_url}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| EndeksError::connector(CONNECTOR_NAME, format!("client build: {e}")))?;

        Ok(HttpConnector { client, base })
    }
}

impl EndeksConnector for HttpConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }
    fn vendor(&self) -> &'static str {
        "Dashboard backend"
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
impl ChartProvider for HttpConnector {
    async fn chart(&self, req: ChartRequest) -> Result<RawSeries, EndeksError> {
        let mut url = self.endpoint("chart")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("start", &req.start.to_string());
            if let Some(end) = req.end {
                pairs.append_pair("end", &end.to_string());
            }
        }
        let body: wire::ChartBody = self.get_json(url, "chart").await?;
        body.into_series()
    }
}

#[async_trait]
impl CompositionProvider for HttpConnector {
    async fn composition(&self) -> Result<Vec<Constituent>, EndeksError> {
        let url = self.endpoint("composition")?;
        self.get_json(url, "composition").await
    }
}

#[async_trait]
impl IpoCalendarProvider for HttpConnector {
    async fn ipo_calendar(&self) -> Result<Vec<IpoListing>, EndeksError> {
        let url = self.endpoint("ipo-calendar")?;
        self.get_json(url, "ipo-calendar").await
    }
}
