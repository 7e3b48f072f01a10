//! Prints the ability registry as JSON.
//!
//! Usage: `dragon-core [config.ron|config.json]`

use anyhow::{Context, Result};

use dragon_core::config::ModConfig;
use dragon_core::creatures;
use dragon_core::logging::{self, TimingSpan};
use dragon_core::CreatureKind;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => ModConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => ModConfig::default(),
    };
    logging::init_tracing(&config.logging);

    let registry = {
        let _span = TimingSpan::new("build_registry");
        creatures::default_registry().context("building ability registry")?
    };

    for kind in CreatureKind::all() {
        tracing::debug!(creature = %kind, stats = ?config.stats_for(kind), "effective stats");
    }

    let listing = serde_json::to_string_pretty(&registry.listing())?;
    println!("{listing}");
    tracing::info!(
        abilities = registry.len(),
        overrides = config.creatures.len(),
        "dragon ability registry ready"
    );
    Ok(())
}
