use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use rflink_to_mqtt::constants::{CONFIG_PATH_ENV, VERSION};
use rflink_to_mqtt::{Channel, Config, ConfigSource, ConfigStore, Embedded, Environment, Layered, RawConfig, TomlFile};

static STORE: ConfigStore = ConfigStore::new();

/// Load and validate the bridge configuration the way the device does at boot
#[derive(Parser, Debug)]
#[command(name = "rflink_to_mqtt", version = VERSION)]
struct Args {
    /// TOML file with the settings
    #[arg(long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Start from the values compiled in from cfg.toml
    #[arg(long)]
    embedded: bool,

    /// Ignore RFLINK_* environment variables
    #[arg(long)]
    no_env: bool,

    /// Log the loaded configuration (passwords redacted)
    #[arg(short, long)]
    verbose: bool,
}

/// Reads nothing; the bottom layer when a layer is switched off.
struct Nothing;

impl ConfigSource for Nothing {
    fn name(&self) -> &str {
        "nothing"
    }

    fn read(&self) -> Result<RawConfig, rflink_to_mqtt::LoadError> {
        Ok(RawConfig::default())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO })
        .with_target(false)
        .compact()
        .init();

    let base: Box<dyn ConfigSource> = if args.embedded {
        Box::new(Embedded::compiled())
    } else {
        Box::new(Nothing)
    };

    let file: Box<dyn ConfigSource> = match &args.config {
        Some(path) => Box::new(TomlFile::new(path)),
        None => Box::new(Nothing),
    };

    let env: Box<dyn ConfigSource> = if args.no_env {
        Box::new(Nothing)
    } else {
        Box::new(Environment::new())
    };

    let source = Layered::new(Layered::new(base, file), env);

    let config = STORE
        .install(&source)
        .context("configuration is invalid, refusing to start")?;

    report(config);
    Ok(())
}

fn report(config: &Config) {
    log::info!("Wi-Fi network: {}", config.wifi_ssid());
    log::info!(
        "Broker: {} as {} (client name {})",
        config.mqtt_server(),
        config.mqtt_user(),
        config.client_name()
    );
    log::info!("Reading RFLink from {}", config.input_source());
    log::info!(
        "Publishing data: {}, debug: {}",
        config.publishes(Channel::Data),
        config.publishes(Channel::Debug)
    );
    if !config.mqtt_enabled() {
        log::warn!("MQTT disabled, nothing will be sent to the broker");
    }
}
