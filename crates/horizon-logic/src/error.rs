//! Error types for classification and the supplementary engines.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// Gravity is undefined for a non-positive (or NaN) mass.
    #[error("invalid input for {name}: mass must be positive, got {mass_kg} kg")]
    InvalidInput { name: String, mass_kg: f64 },

    /// A supplementary engine was handed a value outside its formula's domain.
    #[error("{quantity} out of domain: {value}")]
    OutOfDomain { quantity: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
