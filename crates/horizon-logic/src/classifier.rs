//! Multi-regime gravitational/informational classifier.
//!
//! Given an entity's mass and spatial scale, computes four independent
//! quantities and sorts the entity into exactly one [`Regime`]:
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | Newtonian acceleration | `a_n = G·M / r²` (0 when `r` is undefined) |
//! | Schwarzschild radius | `r_s = 2·G·M / C²` |
//! | Informational capacity | `n = 4π·r² / (4·L_P²·ln 2)` (0 when `r` is undefined) |
//! | Effective correction | `S_EFF = S / 4π` |
//!
//! The decision is ordered, first match wins:
//!
//! 1. **Frozen**: `r <= r_s · 1.01`
//! 2. **Corrected**: `a_n < S_EFF`
//! 3. **Newtonian**: everything else
//!
//! A radius of zero is the "undefined spatial scale" sentinel. It has no
//! collapse threshold to cross, so it always lands in [`Regime::Corrected`]
//! with a zero boost.
//!
//! Results never carry NaN or ∞ for a finite input. The formulas divide
//! before they square, so tiny radii do not underflow into a division by
//! zero. A quantity whose true value exceeds the `f64` range (the capacity
//! of a radius beyond ~1e119 m, say) is saturated at `f64::MAX` and logged.
//!
//! ```
//! use horizon_logic::classifier::{Regime, RegimeClassifier};
//!
//! let classifier = RegimeClassifier::default();
//! let earth = classifier.classify("Planet Earth", 5.97e24, 6.371e6).unwrap();
//! assert_eq!(earth.regime, Regime::Newtonian);
//! ```

use std::f64::consts::{LN_2, PI};

use serde::{Deserialize, Serialize};

use crate::config::Constants;
use crate::constants::thresholds::COLLAPSE_MARGIN;
use crate::error::{ClassifyError, Result};

/// Output category of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Regime {
    /// Gravitational collapse: the entity sits inside its collapse margin.
    Frozen,
    /// The correction term dominates Newtonian gravity.
    Corrected,
    /// Ordinary gravity dominates.
    Newtonian,
}

impl Regime {
    /// All regimes, in decision order.
    pub fn all() -> [Regime; 3] {
        [Self::Frozen, Self::Corrected, Self::Newtonian]
    }

    /// Analyst-facing domain name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Frozen => "LOGICAL FREEZE (Black Hole)",
            Self::Corrected => "LOGIC 0.5 (Deep Space / Quantum)",
            Self::Newtonian => "LOGIC 1.0 (Newtonian Reality)",
        }
    }

    /// One-line status shown under the label.
    pub fn status(self) -> &'static str {
        match self {
            Self::Frozen => "Saturation limit reached. Information is compressed.",
            Self::Corrected => "S_eff > a_g. Information/potential dominates physical form.",
            Self::Newtonian => "a_g >> S_eff. System is resolved into certainty.",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Frozen => "FROZEN",
            Self::Corrected => "CORRECTED",
            Self::Newtonian => "NEWTONIAN",
        };
        f.write_str(tag)
    }
}

/// Regime-specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegimeDetail {
    /// Fixed saturation marker. No magnitude is meaningful past collapse.
    MaximumDensity,
    /// Structural cohesion boost, in percent. Zero when `a_n == 0`.
    Boost { percent: f64 },
    /// No extra derived value.
    Stable,
}

impl RegimeDetail {
    /// The boost of a `Boost` payload, `None` for the other regimes.
    pub fn boost_percent(&self) -> Option<f64> {
        match self {
            Self::Boost { percent } => Some(*percent),
            _ => None,
        }
    }
}

/// One entity to classify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationInput {
    pub name: String,
    /// Must be positive.
    pub mass_kg: f64,
    /// Zero means "undefined spatial scale".
    pub radius_m: f64,
}

impl ClassificationInput {
    pub fn new(name: impl Into<String>, mass_kg: f64, radius_m: f64) -> Self {
        Self {
            name: name.into(),
            mass_kg,
            radius_m,
        }
    }
}

/// Derived quantities and regime for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub name: String,
    pub mass_kg: f64,
    pub radius_m: f64,
    /// m/s², ≥ 0.
    pub newtonian_acceleration: f64,
    /// m, ≥ 0.
    pub schwarzschild_radius: f64,
    /// bits, ≥ 0.
    pub informational_mass_bits: f64,
    /// Always S_EFF of the classifier that produced this result.
    pub effective_correction: f64,
    pub regime: Regime,
    pub regime_detail: RegimeDetail,
}

impl ClassificationResult {
    /// Share of the total information capacity held by this entity's surface.
    pub fn capacity_fraction(&self, n_total: f64) -> f64 {
        if n_total > 0.0 {
            self.informational_mass_bits / n_total
        } else {
            0.0
        }
    }
}

/// `G·M / r²`, or 0 when the radius is not positive.
pub fn newtonian_acceleration(g: f64, mass_kg: f64, radius_m: f64) -> f64 {
    if radius_m > 0.0 {
        g * mass_kg / radius_m / radius_m
    } else {
        0.0
    }
}

/// `2·G·M / C²`.
pub fn schwarzschild_radius(g: f64, c: f64, mass_kg: f64) -> f64 {
    2.0 * g * mass_kg / (c * c)
}

/// Holographic bound `4π·r² / (4·L_P²·ln 2)`, or 0 when the radius is not positive.
pub fn informational_capacity(planck_length: f64, radius_m: f64) -> f64 {
    if radius_m > 0.0 {
        let ratio = radius_m / planck_length;
        PI / LN_2 * ratio * ratio
    } else {
        0.0
    }
}

/// `(sqrt(a_n² + a_n·S_EFF) / a_n − 1) · 100`, or 0 without a Newtonian baseline.
///
/// Evaluated as `sqrt(a_n + S_EFF) / sqrt(a_n)`, which stays finite and
/// at least 1 down to subnormal `a_n`.
pub fn correction_boost(a_n: f64, s_eff: f64) -> f64 {
    if a_n > 0.0 {
        ((a_n + s_eff).sqrt() / a_n.sqrt() - 1.0) * 100.0
    } else {
        0.0
    }
}

/// Clamp an overflowed quantity to `f64::MAX`.
fn saturate(name: &str, quantity: &str, value: f64) -> f64 {
    if value.is_infinite() {
        log::warn!("{name}: {quantity} exceeds the f64 range, saturated");
        f64::MAX
    } else {
        value
    }
}

/// Stateless classifier over an injected constant set.
///
/// Holds only a copy of the constants and the precomputed S_EFF, so it is
/// `Send + Sync + Copy` and calls never interfere with each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeClassifier {
    constants: Constants,
    s_eff: f64,
}

impl Default for RegimeClassifier {
    fn default() -> Self {
        Self::new(Constants::default())
    }
}

impl RegimeClassifier {
    pub fn new(constants: Constants) -> Self {
        Self {
            s_eff: constants.s_eff(),
            constants,
        }
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn s_eff(&self) -> f64 {
        self.s_eff
    }

    /// Classify one entity.
    ///
    /// Fails only when `mass_kg` is not positive (NaN included). Every other
    /// input is total: a non-positive radius is treated as undefined.
    pub fn classify(
        &self,
        name: &str,
        mass_kg: f64,
        radius_m: f64,
    ) -> Result<ClassificationResult> {
        if mass_kg.is_nan() || mass_kg <= 0.0 {
            return Err(ClassifyError::InvalidInput {
                name: name.to_string(),
                mass_kg,
            });
        }

        let c = &self.constants;
        let a_n = saturate(
            name,
            "newtonian_acceleration",
            newtonian_acceleration(c.g, mass_kg, radius_m),
        );
        let r_s = saturate(
            name,
            "schwarzschild_radius",
            schwarzschild_radius(c.g, c.c, mass_kg),
        );
        let n_local = saturate(
            name,
            "informational_mass_bits",
            informational_capacity(c.planck_length, radius_m),
        );

        let scale_defined = radius_m > 0.0;
        let (regime, regime_detail) = if scale_defined && radius_m <= r_s * COLLAPSE_MARGIN {
            (Regime::Frozen, RegimeDetail::MaximumDensity)
        } else if a_n < self.s_eff {
            (
                Regime::Corrected,
                RegimeDetail::Boost {
                    percent: correction_boost(a_n, self.s_eff),
                },
            )
        } else {
            (Regime::Newtonian, RegimeDetail::Stable)
        };

        log::debug!("classified {name}: a_n={a_n:.4e} r_s={r_s:.4e} n={n_local:.2e} -> {regime}");

        Ok(ClassificationResult {
            name: name.to_string(),
            mass_kg,
            radius_m,
            newtonian_acceleration: a_n,
            schwarzschild_radius: r_s,
            informational_mass_bits: n_local,
            effective_correction: self.s_eff,
            regime,
            regime_detail,
        })
    }

    pub fn classify_input(&self, input: &ClassificationInput) -> Result<ClassificationResult> {
        self.classify(&input.name, input.mass_kg, input.radius_m)
    }

    /// Classify every entity independently. A rejected entity yields an
    /// `Err` in its slot and never stops the rest of the batch.
    pub fn classify_batch(
        &self,
        inputs: &[ClassificationInput],
    ) -> Vec<Result<ClassificationResult>> {
        inputs
            .iter()
            .map(|input| {
                let result = self.classify_input(input);
                if let Err(e) = &result {
                    log::warn!("skipping entity in batch: {e}");
                }
                result
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{lengths, masses};

    fn classifier() -> RegimeClassifier {
        RegimeClassifier::default()
    }

    #[test]
    fn test_solar_mass_black_hole_is_frozen() {
        let r = classifier().classify("bh", masses::SOLAR, 2953.0).unwrap();
        assert_eq!(r.regime, Regime::Frozen);
        assert_eq!(r.regime_detail, RegimeDetail::MaximumDensity);
        // r_s ≈ 2954 m, so 2953 m sits just inside the exact radius
        assert!((r.schwarzschild_radius - 2954.0).abs() < 1.0);
    }

    #[test]
    fn test_earth_is_newtonian() {
        let r = classifier()
            .classify("earth", masses::EARTH, lengths::EARTH_RADIUS)
            .unwrap();
        assert_eq!(r.regime, Regime::Newtonian);
        assert_eq!(r.regime_detail, RegimeDetail::Stable);
        assert!((r.newtonian_acceleration - 9.8).abs() < 0.1);
    }

    #[test]
    fn test_galactic_edge_is_corrected() {
        let r = classifier()
            .classify("m33", 1.2e10 * masses::SOLAR, 15.0 * lengths::KPC)
            .unwrap();
        assert_eq!(r.regime, Regime::Corrected);
        let boost = r.regime_detail.boost_percent().unwrap();
        assert!(boost > 0.0);
        // a_n ≈ 7.4e-12 against S_EFF ≈ 6.96e-11
        assert!(boost > 200.0 && boost < 240.0, "boost = {boost}");
    }

    #[test]
    fn test_zero_radius_is_corrected_with_zero_boost() {
        let r = classifier().classify("point", 1.0e30, 0.0).unwrap();
        assert_eq!(r.newtonian_acceleration, 0.0);
        assert_eq!(r.informational_mass_bits, 0.0);
        assert_eq!(r.regime, Regime::Corrected);
        assert_eq!(r.regime_detail, RegimeDetail::Boost { percent: 0.0 });
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        for mass in [0.0, -1.0, -1e30, f64::NAN] {
            let err = classifier().classify("bad", mass, 1.0).unwrap_err();
            assert!(matches!(err, ClassifyError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_error_names_entity() {
        let err = classifier().classify("ghost", 0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_collapse_margin_boundary() {
        let c = classifier();
        let mass = masses::SOLAR;
        let r_s = schwarzschild_radius(c.constants().g, c.constants().c, mass);
        let at_margin = c.classify("edge", mass, r_s * COLLAPSE_MARGIN).unwrap();
        assert_eq!(at_margin.regime, Regime::Frozen);
        let beyond = c.classify("edge", mass, r_s * 1.02).unwrap();
        assert_ne!(beyond.regime, Regime::Frozen);
    }

    #[test]
    fn test_correction_threshold_boundary() {
        // Pick a radius that makes a_n land exactly on either side of S_EFF.
        let c = classifier();
        let mass = masses::SOLAR;
        let r_eq = (c.constants().g * mass / c.s_eff()).sqrt();
        let inside = c.classify("near", mass, r_eq * 0.99).unwrap();
        let outside = c.classify("far", mass, r_eq * 1.01).unwrap();
        assert_eq!(inside.regime, Regime::Newtonian);
        assert_eq!(outside.regime, Regime::Corrected);
    }

    #[test]
    fn test_boost_formula() {
        // a_n == S_EFF → sqrt(2) - 1
        let boost = correction_boost(1.0, 1.0);
        assert!((boost - (2f64.sqrt() - 1.0) * 100.0).abs() < 1e-9);
        assert_eq!(correction_boost(0.0, 1.0), 0.0);
    }

    #[test]
    fn test_informational_capacity_scales_with_area() {
        let lp = Constants::default().planck_length;
        let n1 = informational_capacity(lp, 1.0);
        let n2 = informational_capacity(lp, 2.0);
        assert!((n2 / n1 - 4.0).abs() < 1e-9);
        assert_eq!(informational_capacity(lp, 0.0), 0.0);
    }

    #[test]
    fn test_subnormal_acceleration_keeps_positive_boost() {
        // a_n ≈ 6.7e-321 is subnormal; a_n² rounds to zero
        let r = classifier().classify("dust", 1e-300, 1e5).unwrap();
        assert!(r.newtonian_acceleration > 0.0);
        assert_eq!(r.regime, Regime::Corrected);
        let boost = r.regime_detail.boost_percent().unwrap();
        assert!(boost.is_finite() && boost > 0.0, "boost = {boost}");
    }

    #[test]
    fn test_tiny_radius_does_not_divide_by_zero() {
        // r² underflows to zero, but G·M / r / r ≈ 6.7e129 is representable
        let r = classifier().classify("mote", 1e-200, 1e-170).unwrap();
        assert!(r.newtonian_acceleration.is_finite());
        assert!((r.newtonian_acceleration / 6.6743e129 - 1.0).abs() < 1e-9);
        assert!(r.radius_m > r.schwarzschild_radius * COLLAPSE_MARGIN);
        assert_eq!(r.regime, Regime::Newtonian);
    }

    #[test]
    fn test_huge_radius_saturates_capacity() {
        let r = classifier().classify("cosmos", 1e50, 1e160).unwrap();
        assert_eq!(r.informational_mass_bits, f64::MAX);
        assert!(r.newtonian_acceleration > 0.0);
        assert_eq!(r.regime, Regime::Corrected);
        let boost = r.regime_detail.boost_percent().unwrap();
        assert!(boost.is_finite() && boost > 0.0);
    }

    #[test]
    fn test_effective_correction_is_constant() {
        let c = classifier();
        let a = c.classify("a", 1.0, 1.0).unwrap();
        let b = c.classify("b", 1e40, 1e20).unwrap();
        assert_eq!(a.effective_correction, c.s_eff());
        assert_eq!(b.effective_correction, c.s_eff());
    }

    #[test]
    fn test_batch_continues_past_failure() {
        let inputs = vec![
            ClassificationInput::new("earth", masses::EARTH, lengths::EARTH_RADIUS),
            ClassificationInput::new("bad", -5.0, 1.0),
            ClassificationInput::new("bh", masses::SOLAR, 2953.0),
        ];
        let results = classifier().classify_batch(&inputs);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().regime, Regime::Newtonian);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().regime, Regime::Frozen);
    }

    #[test]
    fn test_injected_constants_are_used() {
        // A huge correction constant drags Earth into the corrected regime.
        let constants = Constants {
            s: 1.0e3,
            ..Constants::default()
        };
        let r = RegimeClassifier::new(constants)
            .classify("earth", masses::EARTH, lengths::EARTH_RADIUS)
            .unwrap();
        assert_eq!(r.regime, Regime::Corrected);
    }

    #[test]
    fn test_capacity_fraction() {
        let r = classifier().classify("human", 75.0, 1.0).unwrap();
        let frac = r.capacity_fraction(Constants::default().n_total);
        assert!(frac > 0.0 && frac < 1.0);
        assert_eq!(r.capacity_fraction(0.0), 0.0);
    }

    #[test]
    fn test_regime_labels_distinct() {
        let labels: std::collections::HashSet<_> =
            Regime::all().iter().map(|r| r.label()).collect();
        assert_eq!(labels.len(), 3);
        assert_eq!(Regime::Frozen.to_string(), "FROZEN");
    }
}
