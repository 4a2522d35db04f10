//! Configuration for an RFLink to MQTT bridge.
//!
//! The device needs Wi-Fi credentials, a broker address with credentials, a
//! client name and three switches. [`load`] reads them from a
//! [`ConfigSource`], validates them once, and returns an immutable
//! [`Config`] that the rest of the firmware borrows.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod config;
pub mod constants;
pub mod error;
pub mod flags;
pub mod secret;
pub mod sources;
pub mod store;

pub use address::BrokerAddress;
pub use config::Config;
pub use error::{Field, LoadError, Reason, ValidationError};
pub use flags::{Channel, InputSource};
pub use sources::{ConfigSource, Embedded, Layered, RawConfig};
#[cfg(feature = "std")]
pub use sources::{Environment, TomlFile};
pub use store::{ConfigStore, State};

/// Reads `source` and validates the result.
///
/// Fails with [`LoadError::Validation`] naming the first missing, empty or
/// malformed setting. There is no partial result: either every setting is
/// usable or startup has to stop.
pub fn load<S: ConfigSource + ?Sized>(source: &S) -> Result<Config, LoadError> {
    let raw = source.read()?;

    match Config::validate(raw) {
        Ok(config) => {
            log::info!("Configuration loaded from {}", source.name());
            log::debug!("{:?}", config);
            Ok(config)
        }
        Err(e) => {
            log::error!("Configuration from {} rejected: {}", source.name(), e);
            Err(e.into())
        }
    }
}
