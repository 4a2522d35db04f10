use alloc::string::ToString;

use super::{ConfigSource, RawConfig};
use crate::error::LoadError;

/// Values compiled into the binary.
///
/// `build.rs` fills [`EMBEDDED`] from `cfg.toml` (or the file named by
/// `RFLINK_CFG`); every field is `None` when no such file exists at build
/// time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedValues {
    pub ssid: Option<&'static str>,
    pub password: Option<&'static str>,
    pub mqtt_server: Option<&'static str>,
    pub mqtt_user: Option<&'static str>,
    pub mqtt_password: Option<&'static str>,
    pub client_name: Option<&'static str>,
    pub testmode: Option<bool>,
    pub enable_mqtt: Option<bool>,
    pub enable_debug: Option<bool>,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/embedded.rs"));

pub struct Embedded {
    values: EmbeddedValues,
}

impl Embedded {
    /// The values baked in by the build script.
    pub const fn compiled() -> Self {
        Self { values: EMBEDDED }
    }

    pub const fn new(values: EmbeddedValues) -> Self {
        Self { values }
    }
}

impl ConfigSource for Embedded {
    fn name(&self) -> &str {
        "embedded"
    }

    fn read(&self) -> Result<RawConfig, LoadError> {
        let v = &self.values;

        if v.password.is_some() || v.mqtt_password.is_some() {
            log::warn!("Credentials are compiled into the binary, prefer the environment for secrets");
        }

        Ok(RawConfig {
            ssid: v.ssid.map(|s| s.to_string()),
            password: v.password.map(|s| s.to_string()),
            mqtt_server: v.mqtt_server.map(|s| s.to_string()),
            mqtt_user: v.mqtt_user.map(|s| s.to_string()),
            mqtt_password: v.mqtt_password.map(|s| s.to_string()),
            client_name: v.client_name.map(|s| s.to_string()),
            testmode: v.testmode,
            enable_mqtt: v.enable_mqtt,
            enable_debug: v.enable_debug,
        })
    }
}
