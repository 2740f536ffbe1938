use thiserror::Error;

/// Unified error type for the endeks workspace.
///
/// Wraps capability mismatches, argument validation errors, provider-tagged
/// fetch failures, and the normalizer's refusal conditions.
#[derive(Debug, Error)]
pub enum EndeksError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "chart").
        capability: &'static str,
    },

    /// A connector failed to fetch or decode backend data.
    #[error("{connector} fetch failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The normalizer was invoked with no data; the caller must not render.
    #[error("empty series: no data points to window")]
    EmptySeries,

    /// A rebase base value was zero or absent. Propagated explicitly rather
    /// than letting a non-finite quotient leave the normalizer.
    #[error("invalid rebase base for {series} series: first windowed value is zero or missing")]
    InvalidBase {
        /// Which of the two parallel series had the bad base.
        series: &'static str,
    },

    /// Issues with returned or expected data (length mismatch, unfilled gap).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl EndeksError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidBase` error for the named series.
    #[must_use]
    pub const fn invalid_base(series: &'static str) -> Self {
        Self::InvalidBase { series }
    }

    /// Helper: build a `Data` error from a message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
