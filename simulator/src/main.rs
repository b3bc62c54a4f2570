use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::reward_wheel::{catalog_group, SpinPhysics};
use tracing::{info, warn};

use crate::config::{OutputFormat, SimulatorConfig};
use crate::report::{render_json, render_text, simulate, GroupReport};

mod config;
mod logging;
mod report;

// Deviation in percentage points above which a sector is flagged
const DEVIATION_WARNING: f64 = 5.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // loaded first so RUST_LOG from the file reaches the filter
    dotenvy::from_path(".env").ok();
    logging::setup()?;

    let config = SimulatorConfig::from_env()?;
    let physics = SpinPhysics::default();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "Auditing {} spins per group over groups {:?}",
        config.spins,
        config.groups()
    );

    let reports: Vec<GroupReport> = config
        .groups()
        .into_iter()
        .map(|group| {
            let catalog = catalog_group(group);
            let stats = simulate(config.spins, &physics, &mut rng);
            let report = GroupReport::new(catalog, &stats);
            if let Some(row) = report.worst_row().filter(|row| row.deviation().abs() > DEVIATION_WARNING) {
                warn!(
                    "Group {}: '{}' advertised at {:.1}% but lands {:.1}% of the time",
                    group, row.prize, row.advertised, row.measured
                );
            }
            report
        })
        .collect();

    let output = match config.format {
        OutputFormat::Text => render_text(&reports),
        OutputFormat::Json => render_json(&reports)?,
    };
    println!("{}", output);
    Ok(())
}
