//! Endeks turns a raw index feed into dashboard-ready chart windows.
//!
//! Overview
//! - A [`SeriesRepository`] owns the gap-filled dataset and refreshes it from
//!   a pluggable connector, atomically and on a cancellable schedule.
//! - [`Endeks::window`] cuts a timeframe window from that dataset and rebases
//!   both series to open at 100, so chart lines and headline stats come out
//!   ready to render.
//! - Composition and IPO-calendar requests pass through to the connector's
//!   optional capabilities.
//!
//! Key behaviors
//! - A failed refresh keeps the previous dataset; readers never lose data
//!   because the backend had a bad minute.
//! - Poll ticks that land mid-refresh are dropped, not queued.
//! - A timeframe older than the stored history falls back to the whole
//!   dataset rather than erroring.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use endeks::{Endeks, Timeframe};
//! use endeks_http::HttpConnector;
//!
//! let connector = Arc::new(HttpConnector::builder("http://127.0.0.1:5000/api/").build()?);
//! let engine = Endeks::builder().connector(connector).build()?;
//!
//! let _poller = engine.spawn_poller();
//! let view = engine.window(Timeframe::Ytd).await?;
//! println!("YTD: {:+.2}%", view.summary.pct_change);
//! ```
//!
//! See `endeks/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod poll;
mod repository;

pub use core::{Endeks, EndeksBuilder};
pub use poll::PollHandle;
pub use repository::SeriesRepository;

// Re-export core types for convenience
pub use endeks_core::{
    CardDetails,
    ChartRequest,
    Constituent,
    EndeksConnector,
    EndeksError,
    IpoListing,
    RawSeries,
    Summary,
    Timeframe,
    WindowResult,
};
