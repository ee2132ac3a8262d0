//! # podwatchd — podwatch daemon
//!
//! Composition root that wires the telemetry adapter into the presentation
//! service and polls it on an interval.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize the tracing subscriber
//! - Construct the telemetry source (adapter)
//! - Construct the presentation service, injecting the source via its port
//! - Poll on the configured interval, logging every derived reading
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::time::Duration;

use podwatch_adapter_virtual::VirtualPod;
use podwatch_app::services::PresentationService;
use tracing_subscriber::EnvFilter;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let source = VirtualPod::new(
        config.pod.id,
        config.pod.unit_id.clone(),
        config.pod.model.clone(),
    );
    let mut service = PresentationService::new(source, config.account.currency.clone());

    tracing::info!(
        source = service.source_name(),
        interval_secs = config.poll.interval_secs,
        currency = %config.account.currency,
        "podwatchd started"
    );

    let mut interval = tokio::time::interval(Duration::from_secs(config.poll.interval_secs));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                match service.refresh().await {
                    Ok(panel) => {
                        for reading in panel.readings() {
                            tracing::info!(
                                sensor = %reading.unique_id,
                                name = reading.name,
                                value = ?reading.value,
                                icon = reading.icon,
                                "sensor reading"
                            );
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%err, "refresh failed, retrying next interval");
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}
