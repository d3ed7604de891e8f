//! The immutable constant set injected into every engine.
//!
//! A [`Constants`] value is built once at startup, either from the canonical
//! literals in [`crate::constants`] or from an override file, and is never
//! mutated afterwards. It is `Copy`, so engines hold their own copy and can
//! be shared across threads without coordination.
//!
//! ```
//! use horizon_logic::config::{validate_constants, Constants};
//!
//! let constants = Constants::default();
//! assert!(validate_constants(&constants).is_empty());
//! assert!((constants.s_eff() - 6.955e-11).abs() < 1e-13);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{masses, physical};

/// Physical constants used by the classifier and the supplementary engines.
///
/// Missing fields in a serialized form fall back to their canonical values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    /// Gravitational constant G (m³ kg⁻¹ s⁻²).
    pub g: f64,
    /// Speed of light C (m/s).
    pub c: f64,
    /// Baseline correction constant S (m/s²).
    pub s: f64,
    /// Planck length L_P (m).
    pub planck_length: f64,
    /// Total information capacity N_TOTAL (bits).
    pub n_total: f64,
    /// Reduced Planck constant ħ (J·s).
    pub h_bar: f64,
    /// Reference solar mass (kg).
    pub solar_mass: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            g: physical::G,
            c: physical::C,
            s: physical::S,
            planck_length: physical::PLANCK_LENGTH,
            n_total: physical::N_TOTAL,
            h_bar: physical::H_BAR,
            solar_mass: masses::SOLAR,
        }
    }
}

impl Constants {
    /// Effective correction S_EFF = S / (4π).
    pub fn s_eff(&self) -> f64 {
        self.s / (4.0 * PI)
    }

    fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("g", self.g),
            ("c", self.c),
            ("s", self.s),
            ("planck_length", self.planck_length),
            ("n_total", self.n_total),
            ("h_bar", self.h_bar),
            ("solar_mass", self.solar_mass),
        ]
    }
}

/// Constant-set validation error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstantsError {
    #[error("constant `{0}` is not finite")]
    NotFinite(&'static str),
    #[error("constant `{0}` must be positive, got {1}")]
    NotPositive(&'static str, f64),
}

/// Validate a constant set, returning all errors found.
pub fn validate_constants(constants: &Constants) -> Vec<ConstantsError> {
    let mut errors = Vec::new();

    for (field, value) in constants.fields() {
        if !value.is_finite() {
            errors.push(ConstantsError::NotFinite(field));
        } else if value <= 0.0 {
            errors.push(ConstantsError::NotPositive(field, value));
        }
    }

    errors
}
