//! Canonical physical constants, reference scales, and fixed thresholds.
//!
//! These are the literal values every engine is calibrated against. Engines
//! never read them directly; they receive a [`Constants`](crate::config::Constants)
//! built from them (or from an override file), so there is exactly one place
//! a value can come from at runtime.

pub mod physical {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
    pub const G: f64 = 6.67430e-11;
    /// Speed of light in vacuum (m/s).
    pub const C: f64 = 299_792_458.0;
    /// Baseline correction constant (m/s²).
    pub const S: f64 = 8.74e-10;
    /// Planck length (m).
    pub const PLANCK_LENGTH: f64 = 1.616e-35;
    /// Total information capacity (bits).
    pub const N_TOTAL: f64 = 1e122;
    /// Reduced Planck constant (J·s).
    pub const H_BAR: f64 = 1.054e-34;
}

pub mod masses {
    /// One solar mass (kg).
    pub const SOLAR: f64 = 1.989e30;
    pub const EARTH: f64 = 5.97e24;
    pub const ELECTRON: f64 = 9.109e-31;
    pub const NEUTRON: f64 = 1.67e-27;
}

pub mod lengths {
    /// Astronomical unit (m).
    pub const AU: f64 = 1.496e11;
    /// Kiloparsec (m).
    pub const KPC: f64 = 3.086e19;
    pub const EARTH_RADIUS: f64 = 6.371e6;
}

pub mod thresholds {
    /// Collapse margin beyond the exact Schwarzschild radius.
    pub const COLLAPSE_MARGIN: f64 = 1.01;

    /// Exponent of the logic-density mass scaling.
    pub const CONVERGENCE_EXPONENT: f64 = 12.1;

    /// Exponent of the paradox-density distance falloff.
    pub const PARADOX_FALLOFF: f64 = 0.02;

    /// Reference distance of the paradox-density falloff, in AU.
    pub const PARADOX_REFERENCE_AU: f64 = 20.0;

    /// Energy scale divisor applied on top of ħ by the quantum resolver.
    pub const QUANTUM_SCALE: f64 = 1e42;

    /// Work at or above which a potential state resolves.
    pub const QUANTUM_WORK_THRESHOLD: f64 = 0.5;
}
