//! Pure regime classification logic for Horizon.
//!
//! This crate contains all numeric logic that is independent of any I/O,
//! plotting, or runtime. Functions take plain data and an injected
//! [`config::Constants`] and return results, making them unit-testable and
//! safe to call from any number of threads.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Reference entities from subatomic to galactic scale |
//! | [`classifier`] | Newtonian / corrected / frozen regime classification |
//! | [`config`] | The immutable constant set and its validation |
//! | [`constants`] | Canonical physical constants, scales, thresholds |
//! | [`engine`] | Universal engine (drag, velocity) and quantum resolver |
//! | [`error`] | Error types |
//! | [`interference`] | Double-slit pattern with and without an observer |
//! | [`paradox`] | Paradox density over exoplanet orbits, fallback dataset |
//! | [`rotation`] | Galactic rotation curves and wide-binary boosts |

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod interference;
pub mod paradox;
pub mod rotation;

pub use classifier::{
    ClassificationInput, ClassificationResult, Regime, RegimeClassifier, RegimeDetail,
};
pub use config::Constants;
pub use error::ClassifyError;
