//! Time-series utilities shared by the repository and the normalizer.
//!
//! Modules include:
//! - `fill`: resolve missing observations via forward then backward fill
//! - `window`: timeframe threshold selection, rebasing, and summary stats
/// Gap-filling helpers.
pub mod fill;
/// Windowing and rebasing helpers.
pub mod window;
