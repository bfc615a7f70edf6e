use anyhow::Context as _;
use clap::Parser;
use tracing::{info, warn};

use arcade::cli::Cli;
use arcade::commands::{self, Context};
use arcade::core::settings::DEFAULT_LOG_LEVEL;
use arcade::core::{config_dir, ArcadeSettings};
use arcade::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_dir = cli.config_dir.clone().unwrap_or_else(config_dir);
    let settings_path = ArcadeSettings::path_in(&config_dir);

    // Read before tracing exists; the outcome is logged once it does
    let loaded = ArcadeSettings::read_from(&settings_path);
    let log_level = match &loaded {
        Ok(Some(settings)) => settings.log_level.clone(),
        _ => DEFAULT_LOG_LEVEL.to_string(),
    };
    logging::init_tracing(&logging::default_directive(&log_level, cli.verbose));

    let settings = match loaded {
        Ok(Some(settings)) => {
            info!("[SETTINGS] Loaded settings from {:?}", settings_path);
            settings
        }
        Ok(None) => {
            let settings = ArcadeSettings::default();
            match settings.save_to(&settings_path) {
                Ok(()) => info!("[SETTINGS] Wrote default settings to {:?}", settings_path),
                Err(e) => warn!("[SETTINGS] Failed to write {:?}: {}", settings_path, e),
            }
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load {:?}: {}. Using defaults.",
                settings_path, e
            );
            ArcadeSettings::default()
        }
    };

    let ctx = Context {
        settings,
        config_dir,
    };
    let output = commands::run(&cli.command, &ctx).context("command failed")?;
    print!("{}", output);
    Ok(())
}
