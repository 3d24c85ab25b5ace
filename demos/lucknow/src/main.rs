//! lucknow: end-to-end demo of the emergency route planner.
//!
//! Plans an ambulance run across Lucknow against a sample OSRM response,
//! then blocks a junction on that route to force a simulated detour, adds
//! traffic, and finally lifts the block again.
//!
//! ```text
//! lucknow [--seed N | --live] [--priority high|medium|low] [--config FILE] [--osrm FILE]
//! ```
//!
//! `--live` seeds from OS entropy, so every run draws a different detour.
//! Set `RUST_LOG=debug` to see detector hits and detour shifts.

mod recorded;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use er_core::{DetourRng, PriorityClass};
use er_dispatch::{
    DispatchConfig, RoutePlan, SessionBuilder, SessionObserver, TRAFFIC_MARKER_TTL, TrafficReport,
};

use recorded::RecordedOsrm;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SEED: u64 = 42;

/// Charbagh railway station → Kapoorthala, roughly.
const START: (f64, f64) = (26.85, 80.95);
const END:   (f64, f64) = (26.90, 81.00);

/// A junction on the sample route.
const JUNCTION: (f64, f64) = (26.875, 80.975);

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    /// `None` means `--live`.
    seed:     Option<u64>,
    priority: PriorityClass,
    config:   Option<PathBuf>,
    osrm:     Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = Args {
            seed:     Some(DEFAULT_SEED),
            priority: PriorityClass::High,
            config:   None,
            osrm:     None,
        };

        let mut it = std::env::args().skip(1);
        while let Some(flag) = it.next() {
            let mut value = || it.next().with_context(|| format!("{flag} requires a value"));
            match flag.as_str() {
                "--seed"     => args.seed = Some(value()?.parse().context("--seed expects an integer")?),
                "--live"     => args.seed = None,
                "--priority" => args.priority = value()?.parse()?,
                "--config"   => args.config = Some(PathBuf::from(value()?)),
                "--osrm"     => args.osrm = Some(PathBuf::from(value()?)),
                other        => bail!("unknown argument `{other}`"),
            }
        }
        Ok(args)
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<DispatchConfig> {
    let Some(path) = path else {
        return Ok(DispatchConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Console observer ──────────────────────────────────────────────────────────

struct ConsoleObserver;

impl SessionObserver for ConsoleObserver {
    fn on_route_planned(&mut self, plan: &RoutePlan) {
        println!("{plan}");
        println!("{} ({} points)", plan.eta_label(), plan.path.len());
        println!();
    }

    fn on_traffic(&mut self, report: &TrafficReport) {
        println!(
            "Traffic: {} delayed segments (markers clear after {} s), ETA: {} Min (with traffic)",
            report.markers.len(),
            TRAFFIC_MARKER_TTL.as_secs(),
            report.eta_minutes
        );
        println!();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse()?;
    let config = load_config(args.config.as_ref())?;
    let provider = match &args.osrm {
        Some(path) => RecordedOsrm::from_body(
            std::fs::read_to_string(path)
                .with_context(|| format!("reading OSRM response {}", path.display()))?,
        ),
        None => RecordedOsrm::new(),
    };

    println!("=== lucknow: emergency route planner ===");
    let seed_label = args.seed.map_or_else(|| "live".to_owned(), |s| s.to_string());
    println!("Priority: {}  |  Seed: {seed_label}", args.priority);
    println!();

    let mut rng = match args.seed {
        Some(seed) => DetourRng::new(seed),
        None => DetourRng::from_entropy(),
    };
    let mut session = SessionBuilder::new(provider)
        .config(config)
        .priority(args.priority)
        .build()?;
    session.set_observer(ConsoleObserver);

    session.set_start(START.0, START.1)?;
    session.set_end(END.0, END.1)?;

    // 1. Clear roads.
    session.calculate_route(&mut rng)?;

    // 2. Block a junction on the route.
    let block = session.add_block(JUNCTION.0, JUNCTION.1)?;
    println!("Blocked roads:");
    for (i, b) in session.blocked().iter().enumerate() {
        println!("  Pt {}: {:.3}, {:.3}  [{}]", i + 1, b.pos.lat, b.pos.lng, b.id);
    }
    println!();
    session.calculate_route(&mut rng)?;

    // 3. Traffic on the detour.
    session.simulate_traffic(&mut rng)?;

    // 4. Lift the block.
    session.remove_block(block);
    session.calculate_route(&mut rng)?;

    Ok(())
}
