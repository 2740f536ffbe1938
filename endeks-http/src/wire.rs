//! Wire-format payloads for the dashboard backend's JSON API.

use chrono::NaiveDate;
use serde::Deserialize;

use endeks_core::{EndeksError, RawSeries};

/// Body of `GET chart`: three parallel arrays, with `null` marking a missing
/// observation in either numeric series.
#[derive(Debug, Deserialize)]
pub(crate) struct ChartBody {
    pub dates: Vec<NaiveDate>,
    pub index: Vec<Option<f64>>,
    pub benchmark: Vec<Option<f64>>,
}

impl ChartBody {
    /// Validate the decoded payload into a [`RawSeries`].
    pub(crate) fn into_series(self) -> Result<RawSeries, EndeksError> {
        RawSeries::new(self.dates, self.index, self.benchmark)
            .map_err(|e| EndeksError::connector("endeks-http", format!("chart: {e}")))
    }
}
