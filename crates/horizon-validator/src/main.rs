//! Horizon Validation Harness
//!
//! Runs every analysis in-process and checks the results against their
//! calibration targets. No networking, no rendering.
//!
//! Usage:
//!   cargo run -p horizon-validator
//!   cargo run -p horizon-validator -- --verbose
//!   cargo run -p horizon-validator -- --json
//!   cargo run -p horizon-validator -- --constants constants.json --exoplanets trappist.json

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use horizon_logic::catalog::{reference_entities, reference_inputs};
use horizon_logic::classifier::{
    ClassificationInput, ClassificationResult, Regime, RegimeClassifier, RegimeDetail,
};
use horizon_logic::config::{validate_constants, Constants};
use horizon_logic::constants::{lengths, masses, thresholds::COLLAPSE_MARGIN};
use horizon_logic::engine::{self, LogicState};
use horizon_logic::interference;
use horizon_logic::paradox::{self, ExoplanetRecord};
use horizon_logic::rotation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Options ─────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Options {
    verbose: bool,
    json: bool,
    constants_path: Option<PathBuf>,
    exoplanets_path: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" => options.verbose = true,
            "--json" => options.json = true,
            "--constants" => {
                let path = args.next().context("--constants needs a path")?;
                options.constants_path = Some(path.into());
            }
            "--exoplanets" => {
                let path = args.next().context("--exoplanets needs a path")?;
                options.exoplanets_path = Some(path.into());
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(options)
}

fn load_constants(path: Option<&Path>) -> anyhow::Result<Constants> {
    let constants = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading constants from {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing constants in {}", path.display()))?
        }
        None => Constants::default(),
    };

    let errors = validate_constants(&constants);
    if !errors.is_empty() {
        let list = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("invalid constant set: {list}");
    }
    Ok(constants)
}

fn read_exoplanets(path: &Path) -> anyhow::Result<Vec<ExoplanetRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading exoplanet rows from {}", path.display()))?;
    let records: Vec<ExoplanetRecord> = serde_json::from_str(&text)
        .with_context(|| format!("parsing exoplanet rows in {}", path.display()))?;
    if records.is_empty() {
        bail!("{} contains no rows", path.display());
    }
    Ok(records)
}

/// Archive rows from `path`, or the fallback dataset when they are unavailable.
fn load_exoplanets(path: Option<&Path>) -> (Vec<ExoplanetRecord>, bool) {
    let Some(path) = path else {
        log::info!("no exoplanet file given, using fallback dataset");
        return (paradox::fallback_records(), true);
    };
    match read_exoplanets(path) {
        Ok(records) => {
            log::info!("loaded {} exoplanet rows", records.len());
            (records, false)
        }
        Err(e) => {
            log::warn!("exoplanet data unavailable, using fallback: {e:#}");
            (paradox::fallback_records(), true)
        }
    }
}

// ── Console ─────────────────────────────────────────────────────────────

/// Destination for the human-readable report. With `--json` it moves to
/// stderr so stdout carries only the JSON document.
struct Console {
    verbose: bool,
    json: bool,
}

impl Console {
    fn line(&self, args: std::fmt::Arguments) {
        if self.json {
            eprintln!("{args}");
        } else {
            println!("{args}");
        }
    }
}

macro_rules! say {
    ($out:expr) => {
        $out.line(format_args!(""))
    };
    ($out:expr, $($arg:tt)*) => {
        $out.line(format_args!($($arg)*))
    };
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = parse_args()?;
    let constants = load_constants(options.constants_path.as_deref())?;
    let classifier = RegimeClassifier::new(constants);
    let out = Console {
        verbose: options.verbose,
        json: options.json,
    };

    say!(out, "===============================================================");
    say!(out, "   H O R I Z O N   U N I V E R S A L   V A L I D A T O R");
    say!(
        out,
        "   Integrated holographic bound (N = {:.0e})",
        constants.n_total
    );
    say!(out, "===============================================================");

    let mut results = Vec::new();

    // 1. Reference entity analysis
    let (entity_results, classified) = analyze_entities(&classifier, &out);
    results.extend(entity_results);
    if out.json {
        println!("{}", results_json(&classified)?);
    }

    // 2. Batch isolation
    results.extend(validate_batch(&classifier, &out));

    // 3. Universal engine calibration
    results.extend(validate_universal_engine(&constants, &out));

    // 4. Galactic rotation
    results.extend(validate_rotation(&constants, &out));

    // 5. Wide binaries
    results.extend(validate_wide_binary(&constants, &out));

    // 6. Quantum resolver
    results.extend(validate_quantum(&constants, &out));

    // 7. Double slit
    results.extend(validate_double_slit(&out));

    // 8. Paradox density
    let (records, fallback) = load_exoplanets(options.exoplanets_path.as_deref());
    results.extend(validate_paradox(&records, fallback, &out));

    // 9. Randomized regime sweep
    results.extend(validate_regime_sweep(&classifier, &out));

    // ── Summary ──
    say!(out);
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || out.verbose {
            say!(out, "  {} {}: {}", icon, r.name, r.detail);
        }
    }

    say!(
        out,
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

// ── 1. Reference Entities ───────────────────────────────────────────────

fn print_diagnostics(out: &Console, result: &ClassificationResult) {
    say!(out, "\n{}", "=".repeat(60));
    say!(out, " ANALYZING: {}", result.name);
    say!(out, "{}", "-".repeat(60));
    say!(
        out,
        "  Newtonian Gravity (a_g): {:.4e} m/s²",
        result.newtonian_acceleration
    );
    say!(
        out,
        "  Correction (S_eff):      {:.4e} m/s²",
        result.effective_correction
    );
    say!(
        out,
        "  Informational Mass (N):  {:.2e} bits",
        result.informational_mass_bits
    );
    say!(
        out,
        "  Schwarzschild Radius:    {:.4e} m",
        result.schwarzschild_radius
    );
    say!(out, "  >> DOMAIN: {}", result.regime.label());
    say!(out, "  >> STATUS: {}", result.regime.status());
    match result.regime_detail {
        RegimeDetail::MaximumDensity => say!(out, "  >> RATIO:  Maximum paradox density"),
        RegimeDetail::Boost { percent } => {
            say!(out, "  >> EFFECT: +{:.1}% structural cohesion", percent)
        }
        RegimeDetail::Stable => say!(out, "  >> EFFECT: Standard gravity applies"),
    }
}

/// `"Black Hole (1 Solar Mass)"` → `"black_hole_1_solar_mass"`
fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn analyze_entities(
    classifier: &RegimeClassifier,
    out: &Console,
) -> (Vec<TestResult>, Vec<ClassificationResult>) {
    say!(out, "--- Reference Entities ---");
    let mut results = Vec::new();
    let mut classified = Vec::new();

    for entity in reference_entities() {
        match classifier.classify_input(&entity.input()) {
            Ok(result) => {
                print_diagnostics(out, &result);
                results.push(TestResult {
                    name: format!("entity_{}", slug(entity.name)),
                    passed: result.regime == entity.expected,
                    detail: format!("{} (expected {})", result.regime, entity.expected),
                });
                classified.push(result);
            }
            Err(e) => results.push(TestResult {
                name: format!("entity_{}", slug(entity.name)),
                passed: false,
                detail: e.to_string(),
            }),
        }
    }

    if out.verbose {
        let n_total = classifier.constants().n_total;
        say!(out, "\n  Capacity share of N_TOTAL:");
        for r in &classified {
            say!(out, "    {:28}: {:.3e}", r.name, r.capacity_fraction(n_total));
        }
    }

    (results, classified)
}

/// Pretty-printed JSON array of classification results.
fn results_json(results: &[ClassificationResult]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(results).context("serializing classification results")
}

// ── 2. Batch Isolation ──────────────────────────────────────────────────

fn validate_batch(classifier: &RegimeClassifier, out: &Console) -> Vec<TestResult> {
    say!(out, "\n--- Batch Isolation ---");
    let mut inputs = reference_inputs();
    inputs.insert(2, ClassificationInput::new("Massless Probe", 0.0, 1.0));
    let outcomes = classifier.classify_batch(&inputs);

    let failures = outcomes.iter().filter(|o| o.is_err()).count();
    let successes = outcomes.len() - failures;
    vec![TestResult {
        name: "batch_failure_isolated".into(),
        passed: failures == 1 && successes == inputs.len() - 1,
        detail: format!("{} classified, {} rejected", successes, failures),
    }]
}

// ── 3. Universal Engine ─────────────────────────────────────────────────

fn validate_universal_engine(constants: &Constants, out: &Console) -> Vec<TestResult> {
    say!(out, "--- Universal Engine ---");
    let mut results = Vec::new();

    // Solar system at 20 AU
    let target_drag = constants.s;
    match engine::universal_engine(constants, 20.0 * lengths::AU, constants.solar_mass) {
        Ok(eng) => {
            if out.verbose {
                say!(out, "  SCALE: SOLAR SYSTEM (20 AU)");
                say!(out, "    Target:     {:.2e} m/s²", target_drag);
                say!(out, "    Engine:     {:.2e} m/s²", eng.drag);
            }
            results.push(TestResult {
                name: "engine_solar_drag".into(),
                passed: ((eng.drag - target_drag) / target_drag).abs() < 0.01,
                detail: format!("drag {:.3e} vs {:.3e}", eng.drag, target_drag),
            });
        }
        Err(e) => results.push(TestResult {
            name: "engine_solar_drag".into(),
            passed: false,
            detail: e.to_string(),
        }),
    }

    // M33 at 20 kpc, visible mass only
    let target_v = 120.0;
    match engine::universal_engine(constants, 20.0 * lengths::KPC, 1.5e10 * masses::SOLAR) {
        Ok(eng) => {
            if out.verbose {
                say!(out, "  SCALE: GALACTIC (20 kpc)");
                say!(out, "    Observed:   {:.1} km/s", target_v);
                say!(out, "    Engine:     {:.1} km/s", eng.velocity_km_s);
            }
            results.push(TestResult {
                name: "engine_m33_velocity".into(),
                passed: ((eng.velocity_km_s - target_v) / target_v).abs() < 0.05,
                detail: format!("{:.1} km/s vs {:.1} km/s", eng.velocity_km_s, target_v),
            });
        }
        Err(e) => results.push(TestResult {
            name: "engine_m33_velocity".into(),
            passed: false,
            detail: e.to_string(),
        }),
    }

    results
}

// ── 4. Galactic Rotation ────────────────────────────────────────────────

fn validate_rotation(constants: &Constants, out: &Console) -> Vec<TestResult> {
    say!(out, "--- Galactic Rotation ---");
    let mut results = Vec::new();

    let mass = 1.2e10 * masses::SOLAR;
    match rotation::galactic_rotation(constants, 15.0 * lengths::KPC, mass) {
        Ok(curve) => {
            results.push(TestResult {
                name: "rotation_m33_range".into(),
                passed: (100.0..=130.0).contains(&curve.v_total_km_s),
                detail: format!(
                    "newton {:.2} km/s, corrected {:.2} km/s",
                    curve.v_newton_km_s, curve.v_total_km_s
                ),
            });
        }
        Err(e) => results.push(TestResult {
            name: "rotation_m33_range".into(),
            passed: false,
            detail: e.to_string(),
        }),
    }

    // Curve never drops below its flat floor
    let mut floor_held = true;
    for kpc in [1.0, 5.0, 15.0, 50.0, 200.0] {
        if let Ok(curve) = rotation::galactic_rotation(constants, kpc * lengths::KPC, mass) {
            if out.verbose {
                say!(
                    out,
                    "    {:6.1} kpc: newton {:7.2} km/s, total {:7.2} km/s",
                    kpc, curve.v_newton_km_s, curve.v_total_km_s
                );
            }
            floor_held &= curve.v_total_km_s >= curve.v_flat_km_s;
        } else {
            floor_held = false;
        }
    }
    results.push(TestResult {
        name: "rotation_flat_floor".into(),
        passed: floor_held,
        detail: "corrected velocity never below flat floor".into(),
    });

    results
}

// ── 5. Wide Binaries ────────────────────────────────────────────────────

fn validate_wide_binary(constants: &Constants, out: &Console) -> Vec<TestResult> {
    say!(out, "--- Wide Binaries ---");

    match rotation::wide_binary(constants, 10_000.0 * lengths::AU, 2.0 * masses::SOLAR) {
        Ok(b) => {
            if out.verbose {
                say!(out, "  GAIA WIDE BINARY (10,000 AU)");
                say!(out, "    Newtonian velocity: {:.2} m/s", b.v_newton_m_s);
                say!(out, "    Corrected velocity: {:.2} m/s", b.v_corrected_m_s);
            }
            vec![TestResult {
                name: "binary_gaia_boost".into(),
                passed: b.boost_percent > 0.0 && b.boost_percent < 50.0,
                detail: format!("velocity boost {:.1}%", b.boost_percent),
            }]
        }
        Err(e) => vec![TestResult {
            name: "binary_gaia_boost".into(),
            passed: false,
            detail: e.to_string(),
        }],
    }
}

// ── 6. Quantum Resolver ─────────────────────────────────────────────────

fn validate_quantum(constants: &Constants, out: &Console) -> Vec<TestResult> {
    say!(out, "--- Quantum Resolver ---");

    let electron = engine::quantum_resolver(constants, masses::ELECTRON, 1e-6);
    let macroscopic = engine::quantum_resolver(constants, 1.0, 1.0);
    vec![
        TestResult {
            name: "quantum_electron_potential".into(),
            passed: electron == LogicState::Potential,
            detail: format!("electron observed 1 µs → {}", electron.label()),
        },
        TestResult {
            name: "quantum_macroscopic_reality".into(),
            passed: macroscopic == LogicState::Reality,
            detail: format!("1 kg observed 1 s → {}", macroscopic.label()),
        },
    ]
}

// ── 7. Double Slit ──────────────────────────────────────────────────────

fn validate_double_slit(out: &Console) -> Vec<TestResult> {
    say!(out, "--- Double Slit ---");

    let unobserved = interference::simulate(false);
    let observed = interference::simulate(true);
    if out.verbose {
        say!(
            out,
            "  No observer:   {} (work {:.1})",
            unobserved.state.label(),
            unobserved.work_injected
        );
        say!(
            out,
            "  With observer: {} (work {:.1})",
            observed.state.label(),
            observed.work_injected
        );
    }

    let peak = observed.peak_position().unwrap_or(0.0);
    vec![
        TestResult {
            name: "slit_unobserved_wave".into(),
            passed: unobserved.state == LogicState::Potential,
            detail: unobserved.state.label().into(),
        },
        TestResult {
            name: "slit_observed_particles".into(),
            passed: observed.state == LogicState::Reality && (peak.abs() - 2.0).abs() < 0.1,
            detail: format!("{} with peak at {:.2}", observed.state.label(), peak),
        },
    ]
}

// ── 8. Paradox Density ──────────────────────────────────────────────────

fn validate_paradox(
    records: &[ExoplanetRecord],
    fallback: bool,
    out: &Console,
) -> Vec<TestResult> {
    say!(out, "--- Paradox Density ---");
    if fallback {
        say!(out, "  Running with fallback high-density data");
    }
    let mut results = Vec::new();

    let series = paradox::paradox_series(records);
    results.push(TestResult {
        name: "paradox_series_not_empty".into(),
        passed: !series.is_empty(),
        detail: format!("{} of {} rows usable", series.len(), records.len()),
    });

    let sorted = series
        .windows(2)
        .all(|w| w[0].distance_au <= w[1].distance_au);
    results.push(TestResult {
        name: "paradox_sorted".into(),
        passed: sorted,
        detail: "points ordered by orbital distance".into(),
    });

    let amplified = series
        .iter()
        .all(|p| p.f_synthetic > p.f_newton && p.f_synthetic.is_finite());
    results.push(TestResult {
        name: "paradox_amplifies".into(),
        passed: amplified,
        detail: "paradox influence exceeds Newtonian at every orbit".into(),
    });

    if out.verbose {
        say!(out, "  {:>10}  {:>12}  {:>12}", "r (AU)", "Newton", "Paradox");
        for p in &series {
            say!(
                out,
                "  {:>10.4}  {:>12.4e}  {:>12.4e}",
                p.distance_au, p.f_newton, p.f_synthetic
            );
        }
    }

    results
}

// ── 9. Randomized Regime Sweep ──────────────────────────────────────────

const SWEEP_SEED: u64 = 0x5eed;
const SWEEP_SAMPLES: usize = 10_000;

fn validate_regime_sweep(classifier: &RegimeClassifier, out: &Console) -> Vec<TestResult> {
    say!(out, "--- Regime Sweep ---");
    let mut rng = StdRng::seed_from_u64(SWEEP_SEED);
    let s_eff = classifier.s_eff();

    let mut counts = [0usize; 3];
    let mut violations = Vec::new();
    for i in 0..SWEEP_SAMPLES {
        let mass = 10f64.powf(rng.gen_range(-30.0..45.0));
        let radius = 10f64.powf(rng.gen_range(-20.0..25.0));
        let name = format!("sample_{i}");
        let r = match classifier.classify(&name, mass, radius) {
            Ok(r) => r,
            Err(e) => {
                violations.push(e.to_string());
                continue;
            }
        };

        let expected = if radius <= r.schwarzschild_radius * COLLAPSE_MARGIN {
            Regime::Frozen
        } else if r.newtonian_acceleration < s_eff {
            Regime::Corrected
        } else {
            Regime::Newtonian
        };
        let boost_ok = r.regime_detail.boost_percent().map_or(true, |b| b >= 0.0);
        if r.regime != expected || !boost_ok {
            violations.push(format!("{name}: m={mass:.3e} r={radius:.3e} → {}", r.regime));
        }

        let slot = Regime::all().iter().position(|&g| g == r.regime).unwrap_or(0);
        counts[slot] += 1;
    }

    if out.verbose {
        say!(out, "  Regime distribution over {} samples:", SWEEP_SAMPLES);
        for (regime, count) in Regime::all().iter().zip(counts) {
            say!(out, "    {:10}: {}", regime.to_string(), count);
        }
        for v in violations.iter().take(5) {
            say!(out, "    violation: {v}");
        }
    }

    vec![
        TestResult {
            name: "sweep_thresholds_hold".into(),
            passed: violations.is_empty(),
            detail: format!("{} violations in {} samples", violations.len(), SWEEP_SAMPLES),
        },
        TestResult {
            name: "sweep_every_regime_reached".into(),
            passed: counts.iter().all(|&c| c > 0),
            detail: format!(
                "frozen={} corrected={} newtonian={}",
                counts[0], counts[1], counts[2]
            ),
        },
    ]
}
