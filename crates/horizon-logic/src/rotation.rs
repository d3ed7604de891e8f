//! Galactic rotation curves and wide-binary velocity boosts.
//!
//! Both combine the Newtonian term with the effective correction S_EFF:
//! rotation adds a flat velocity floor `(G·M·S_EFF)^¼` in quadrature, and
//! wide binaries interpolate the acceleration as `a_n·sqrt(1 + S_EFF/a_n)`.

use serde::{Deserialize, Serialize};

use crate::config::Constants;
use crate::error::{ClassifyError, Result};

/// Rotation velocities at one radius, in km/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationCurve {
    pub v_newton_km_s: f64,
    /// Velocity floor contributed by the correction term.
    pub v_flat_km_s: f64,
    pub v_total_km_s: f64,
}

/// Orbital velocities of a wide binary, in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryBoost {
    pub a_newton: f64,
    pub a_corrected: f64,
    pub v_newton_m_s: f64,
    pub v_corrected_m_s: f64,
    /// `(v_corrected / v_newton − 1) · 100`
    pub boost_percent: f64,
}

fn require_positive(quantity: &'static str, value: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(ClassifyError::OutOfDomain { quantity, value });
    }
    Ok(())
}

pub fn galactic_rotation(
    constants: &Constants,
    distance_m: f64,
    mass_kg: f64,
) -> Result<RotationCurve> {
    require_positive("distance_m", distance_m)?;
    require_positive("mass_kg", mass_kg)?;

    let gm = constants.g * mass_kg;
    let v_n = (gm / distance_m).sqrt();
    let v_flat = (gm * constants.s_eff()).powf(0.25);
    let v_total = (v_n * v_n + v_flat * v_flat).sqrt();

    Ok(RotationCurve {
        v_newton_km_s: v_n / 1000.0,
        v_flat_km_s: v_flat / 1000.0,
        v_total_km_s: v_total / 1000.0,
    })
}

pub fn wide_binary(
    constants: &Constants,
    separation_m: f64,
    total_mass_kg: f64,
) -> Result<BinaryBoost> {
    require_positive("separation_m", separation_m)?;
    require_positive("total_mass_kg", total_mass_kg)?;

    let a_newton = constants.g * total_mass_kg / (separation_m * separation_m);
    let a_corrected = a_newton * (1.0 + constants.s_eff() / a_newton).sqrt();

    let v_newton = (a_newton * separation_m).sqrt();
    let v_corrected = (a_corrected * separation_m).sqrt();

    Ok(BinaryBoost {
        a_newton,
        a_corrected,
        v_newton_m_s: v_newton,
        v_corrected_m_s: v_corrected,
        boost_percent: (v_corrected / v_newton - 1.0) * 100.0,
    })
}
