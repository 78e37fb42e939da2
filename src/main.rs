//! Workout Metrics
//!
//! Processes the configured sensor packages and prints one summary line per
//! package.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workout_metrics::storage::config::{get_config_path, load_config, AppConfig};
use workout_metrics::workouts::batch::run_batch;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting workout-metrics v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to load config from {}: {}; using defaults",
            get_config_path().display(),
            e
        );
        AppConfig::default()
    });

    tracing::info!(
        packages = config.packages.len(),
        locale = %config.locale,
        "Processing workout packages"
    );

    for line in run_batch(&config.packages, config.locale) {
        println!("{}", line);
    }

    Ok(())
}
