//! Reference entities spanning subatomic to galactic scale.

use crate::classifier::{ClassificationInput, Regime};
use crate::constants::{lengths, masses};

/// A reference entity with the regime it is expected to classify into
/// under the canonical constants.
#[derive(Debug, Clone)]
pub struct ReferenceEntity {
    pub name: &'static str,
    pub mass_kg: f64,
    pub radius_m: f64,
    pub expected: Regime,
}

impl ReferenceEntity {
    pub fn input(&self) -> ClassificationInput {
        ClassificationInput::new(self.name, self.mass_kg, self.radius_m)
    }
}

/// All reference entities, smallest scale first.
pub fn reference_entities() -> Vec<ReferenceEntity> {
    vec![
        ReferenceEntity {
            name: "Neutron",
            mass_kg: masses::NEUTRON,
            radius_m: 0.8e-15,
            expected: Regime::Newtonian,
        },
        ReferenceEntity {
            name: "Human Being",
            mass_kg: 75.0,
            radius_m: 1.0,
            expected: Regime::Newtonian,
        },
        ReferenceEntity {
            name: "Planet Earth",
            mass_kg: masses::EARTH,
            radius_m: lengths::EARTH_RADIUS,
            expected: Regime::Newtonian,
        },
        ReferenceEntity {
            // Star at 15 kpc, visible mass only
            name: "M33 Galactic Edge",
            mass_kg: 1.2e10 * masses::SOLAR,
            radius_m: 15.0 * lengths::KPC,
            expected: Regime::Corrected,
        },
        ReferenceEntity {
            name: "Black Hole (1 Solar Mass)",
            mass_kg: masses::SOLAR,
            radius_m: 2953.0,
            expected: Regime::Frozen,
        },
    ]
}

/// Batch inputs for every reference entity.
pub fn reference_inputs() -> Vec<ClassificationInput> {
    reference_entities().iter().map(|e| e.input()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::RegimeClassifier;

    #[test]
    fn catalog_covers_every_regime() {
        let entities = reference_entities();
        assert_eq!(entities.len(), 5);
        for regime in Regime::all() {
            assert!(entities.iter().any(|e| e.expected == regime));
        }
    }

    #[test]
    fn catalog_matches_expected_regimes() {
        let classifier = RegimeClassifier::default();
        for entity in reference_entities() {
            let result = classifier.classify_input(&entity.input()).unwrap();
            assert_eq!(
                result.regime, entity.expected,
                "{} classified as {}",
                entity.name, result.regime
            );
        }
    }

    #[test]
    fn catalog_ordered_by_scale() {
        let radii: Vec<f64> = reference_entities()
            .iter()
            .filter(|e| e.expected != Regime::Frozen)
            .map(|e| e.radius_m)
            .collect();
        assert!(radii.windows(2).all(|w| w[0] < w[1]));
    }
}
