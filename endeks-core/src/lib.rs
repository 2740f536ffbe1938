//! endeks-core
//!
//! Core types, traits, and utilities shared across the endeks ecosystem.
//!
//! - `types`: common data structures (series, timeframes, composition rows).
//! - `connector`: the `EndeksConnector` trait and capability provider traits.
//! - `timeseries`: gap-filling and timeframe-windowed rebasing.
//!
//! This crate performs no I/O. Connector implementations live in provider
//! crates (`endeks-http`, `endeks-mock`); orchestration lives in `endeks`.
#![warn(missing_docs)]

/// Connector capability traits and the primary `EndeksConnector` interface.
pub mod connector;
/// The unified `EndeksError` type.
pub mod error;
/// Time-series utilities for gap-filling and windowing.
pub mod timeseries;
pub mod types;

pub use connector::EndeksConnector;
pub use error::EndeksError;
pub use timeseries::fill::fill_gaps;
pub use timeseries::window::{compute_window, window_start};
pub use types::*;
