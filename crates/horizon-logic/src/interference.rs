//! Double-slit resolver.
//!
//! An observer injects work into the experiment. Enough work collapses the
//! wave pattern into two particle bands; otherwise the screen shows the
//! `cos²` interference fringes. Rendering is left to the caller.

use serde::{Deserialize, Serialize};

use crate::engine::LogicState;

/// Work required to collapse a potential state.
pub const WORK_THRESHOLD: f64 = 1.0;
/// Work injected when an observer is present.
pub const OBSERVER_WORK: f64 = 2.0;
/// Work leaking in with no observer.
pub const IDLE_WORK: f64 = 0.1;

pub const SCREEN_MIN: f64 = -10.0;
pub const SCREEN_MAX: f64 = 10.0;
pub const SCREEN_SAMPLES: usize = 500;

/// Intensity sampled across the screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterferencePattern {
    pub state: LogicState,
    pub work_injected: f64,
    /// Screen positions, evenly spaced over `[SCREEN_MIN, SCREEN_MAX]`.
    pub positions: Vec<f64>,
    pub intensity: Vec<f64>,
}

impl InterferencePattern {
    /// Position of the brightest sample.
    pub fn peak_position(&self) -> Option<f64> {
        self.intensity
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| self.positions[i])
    }
}

/// `samples` evenly spaced points over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

fn wave_intensity(x: f64) -> f64 {
    x.cos().powi(2)
}

fn particle_intensity(x: f64) -> f64 {
    (-(x - 2.0).powi(2)).exp() + (-(x + 2.0).powi(2)).exp()
}

/// Run the experiment with or without an observer.
pub fn simulate(observer_present: bool) -> InterferencePattern {
    let work_injected = if observer_present {
        OBSERVER_WORK
    } else {
        IDLE_WORK
    };
    simulate_with_work(work_injected)
}

pub fn simulate_with_work(work_injected: f64) -> InterferencePattern {
    let positions = linspace(SCREEN_MIN, SCREEN_MAX, SCREEN_SAMPLES);
    let state = if work_injected >= WORK_THRESHOLD {
        LogicState::Reality
    } else {
        LogicState::Potential
    };
    let intensity = positions
        .iter()
        .map(|&x| match state {
            LogicState::Reality => particle_intensity(x),
            LogicState::Potential => wave_intensity(x),
        })
        .collect();

    InterferencePattern {
        state,
        work_injected,
        positions,
        intensity,
    }
}
