use anyhow::{Context, Result};
use bugswarm_app::{
    SharedSwarm, TerminalRenderer,
    renderer::{Renderer, RendererContext},
};
use bugswarm_core::{SwarmConfig, SwarmState};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();
    let swarm = bootstrap_swarm()?;
    let renderer = TerminalRenderer::default();
    info!(renderer = renderer.name(), "Starting bugswarm shell");
    renderer.run(RendererContext { swarm })
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn bootstrap_swarm() -> Result<SharedSwarm> {
    let mut config = SwarmConfig::default();
    if let Some(seed) = env_parse::<u64>("BUGSWARM_SEED")? {
        config.rng_seed = Some(seed);
    }
    if let Some(start_bugs) = env_parse::<usize>("BUGSWARM_START_BUGS")? {
        config.start_bugs = start_bugs;
    }
    if let Some(tick_hz) = env_parse::<f32>("BUGSWARM_TICK_HZ")? {
        config.tick_hz = tick_hz;
    }

    let mut swarm = SwarmState::new(config).context("invalid swarm configuration")?;
    let spawned = swarm.ensure_population();
    info!(
        bugs = spawned,
        seed = ?swarm.config().rng_seed,
        tick_hz = swarm.config().tick_hz,
        "Seeded initial swarm",
    );
    Ok(Arc::new(Mutex::new(swarm)))
}

fn env_parse<T: FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("failed to parse {name}={raw}"))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}
