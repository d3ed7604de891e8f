//! Universal engine and quantum resolver.
//!
//! The universal engine adds a mass- and distance-scaled correction on top
//! of Newtonian gravity and reports the resulting drag and orbital velocity.
//! It is calibrated so that one solar mass at 20 AU yields a drag of exactly
//! `S`.
//!
//! The quantum resolver decides whether an observation supplies enough work
//! to resolve a potential state.

use serde::{Deserialize, Serialize};

use crate::config::Constants;
use crate::constants::lengths::AU;
use crate::constants::thresholds::{
    CONVERGENCE_EXPONENT, PARADOX_FALLOFF, PARADOX_REFERENCE_AU, QUANTUM_SCALE,
    QUANTUM_WORK_THRESHOLD,
};
use crate::error::{ClassifyError, Result};

/// Two-valued logic state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicState {
    /// Resolved (1.0).
    Reality,
    /// Unresolved (0.5).
    Potential,
}

impl LogicState {
    pub fn value(self) -> f64 {
        match self {
            Self::Reality => 1.0,
            Self::Potential => 0.5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Reality => "REALITY (1.0)",
            Self::Potential => "POTENTIAL (0.5)",
        }
    }
}

/// Intermediate and final values of one universal engine run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineOutput {
    /// m/s²
    pub a_newton: f64,
    /// Mass-scaled correction (m/s²).
    pub sigma: f64,
    /// Distance falloff, dimensionless.
    pub psi: f64,
    /// m/s²
    pub a_synthetic: f64,
    /// `a_synthetic − a_newton` (m/s²).
    pub drag: f64,
    pub velocity_km_s: f64,
}

/// Run the universal engine for a mass at a distance.
///
/// `mass_kg` must exceed 1 kg: the scaling divides by `log10(mass)`.
pub fn universal_engine(
    constants: &Constants,
    distance_m: f64,
    mass_kg: f64,
) -> Result<EngineOutput> {
    if distance_m.is_nan() || distance_m <= 0.0 {
        return Err(ClassifyError::OutOfDomain {
            quantity: "distance_m",
            value: distance_m,
        });
    }
    if mass_kg.is_nan() || mass_kg <= 1.0 {
        return Err(ClassifyError::OutOfDomain {
            quantity: "mass_kg",
            value: mass_kg,
        });
    }

    let a_newton = constants.g * mass_kg / (distance_m * distance_m);

    let l_ref = constants.solar_mass.log10();
    let l_sys = mass_kg.log10();
    let sigma = constants.s * (l_ref / l_sys).powf(CONVERGENCE_EXPONENT);

    let d_ref = PARADOX_REFERENCE_AU * AU;
    let psi = (d_ref / distance_m).powf(PARADOX_FALLOFF);

    let a_synthetic = a_newton + sigma * psi;
    let drag = a_synthetic - a_newton;
    let velocity_km_s = (a_synthetic * distance_m).sqrt() / 1000.0;

    Ok(EngineOutput {
        a_newton,
        sigma,
        psi,
        a_synthetic,
        drag,
        velocity_km_s,
    })
}

/// Work supplied by observing `mass_kg` for `delta_time_s`.
pub fn observation_work(constants: &Constants, mass_kg: f64, delta_time_s: f64) -> f64 {
    let energy = mass_kg * constants.c * constants.c;
    (energy * delta_time_s) / (constants.h_bar * QUANTUM_SCALE)
}

/// Resolve the logic state of `mass_kg` observed for `delta_time_s`.
pub fn quantum_resolver(constants: &Constants, mass_kg: f64, delta_time_s: f64) -> LogicState {
    if observation_work(constants, mass_kg, delta_time_s) >= QUANTUM_WORK_THRESHOLD {
        LogicState::Reality
    } else {
        LogicState::Potential
    }
}
