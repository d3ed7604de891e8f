//! Paradox density over exoplanet orbits.
//!
//! Takes archive rows (planet name, mass in Jupiter masses, semi-major axis
//! in AU), orders them by orbital distance, and compares the relative
//! Newtonian influence `1/r²` against the paradox-weighted influence
//! `(1/r²)·(1 + ln ψ)` with `ψ = exp(1/r)`.
//!
//! Fetching rows is a collaborator's job. When it fails, the collaborator
//! substitutes [`fallback_records`].

use serde::{Deserialize, Serialize};

/// One row as returned by the exoplanet archive. Any column may be null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExoplanetRecord {
    #[serde(default)]
    pub pl_name: Option<String>,
    /// Planet mass in Jupiter masses.
    #[serde(default)]
    pub pl_bmassj: Option<f64>,
    /// Orbital semi-major axis in AU.
    #[serde(default)]
    pub pl_orbsmax: Option<f64>,
}

/// The fixed four-point dataset used when no archive data is available.
pub fn fallback_records() -> Vec<ExoplanetRecord> {
    [(0.01, 0.003), (0.02, 0.004), (0.03, 0.003), (0.04, 0.002)]
        .into_iter()
        .map(|(orbsmax, bmassj)| ExoplanetRecord {
            pl_name: None,
            pl_bmassj: Some(bmassj),
            pl_orbsmax: Some(orbsmax),
        })
        .collect()
}

/// Relative influences at one orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParadoxPoint {
    pub name: Option<String>,
    pub distance_au: f64,
    pub mass_jupiter: Option<f64>,
    pub f_newton: f64,
    /// `exp(1/r)`; may be `inf` for very tight orbits.
    pub psi: f64,
    pub f_synthetic: f64,
}

impl ParadoxPoint {
    /// `f_synthetic / f_newton`
    pub fn amplification(&self) -> f64 {
        self.f_synthetic / self.f_newton
    }
}

/// Paradox density at a single orbital distance (AU). `None` when the
/// distance is not a positive finite number.
pub fn paradox_at(distance_au: f64) -> Option<(f64, f64, f64)> {
    if !distance_au.is_finite() || distance_au <= 0.0 {
        return None;
    }
    let f_newton = 1.0 / (distance_au * distance_au);
    let psi = (1.0 / distance_au).exp();
    // ln(exp(1/r)) taken as 1/r so f_synthetic stays finite when psi overflows
    let f_synthetic = f_newton * (1.0 + 1.0 / distance_au);
    Some((f_newton, psi, f_synthetic))
}

/// Build the paradox series for a set of archive rows, nearest orbit first.
///
/// Rows without a usable distance are skipped.
pub fn paradox_series(records: &[ExoplanetRecord]) -> Vec<ParadoxPoint> {
    let mut points: Vec<ParadoxPoint> = records
        .iter()
        .filter_map(|rec| {
            let Some(distance_au) = rec.pl_orbsmax else {
                log::warn!("skipping {:?}: no orbital distance", rec.pl_name);
                return None;
            };
            let Some((f_newton, psi, f_synthetic)) = paradox_at(distance_au) else {
                log::warn!("skipping {:?}: unusable orbital distance {distance_au}", rec.pl_name);
                return None;
            };
            Some(ParadoxPoint {
                name: rec.pl_name.clone(),
                distance_au,
                mass_jupiter: rec.pl_bmassj,
                f_newton,
                psi,
                f_synthetic,
            })
        })
        .collect();

    points.sort_by(|a, b| a.distance_au.total_cmp(&b.distance_au));
    points
}
