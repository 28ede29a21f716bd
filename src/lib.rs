//! Retention readiness (RRI) scoring.
//!
//! The engine in [`score`] is a pure function of its inputs: technical drill
//! readings, periodic behavioral ratings and achievement events go in, a
//! banded [`types::scoring::CompositeResult`] comes out. The remaining modules
//! load records and config and render reports for the `rri` binary.

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod score;
pub mod telemetry;
pub mod types;

pub use score::{compute_rri, compute_rri_now};
