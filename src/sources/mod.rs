use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

#[cfg(feature = "std")]
use serde::Deserialize;

use crate::error::LoadError;

pub mod embedded;
#[cfg(feature = "std")]
pub mod env;
#[cfg(feature = "std")]
pub mod file;

pub use embedded::{Embedded, EmbeddedValues};
#[cfg(feature = "std")]
pub use env::Environment;
#[cfg(feature = "std")]
pub use file::TomlFile;

/// Settings as a source provides them, before any validation.
///
/// Every field is optional so that sources can be partial and stacked with
/// [`Layered`]. Field names match the keys of `cfg.toml`.
#[derive(Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Deserialize))]
#[cfg_attr(feature = "std", serde(deny_unknown_fields))]
pub struct RawConfig {
    pub ssid: Option<String>,
    pub password: Option<String>,
    pub mqtt_server: Option<String>,
    pub mqtt_user: Option<String>,
    pub mqtt_password: Option<String>,
    pub client_name: Option<String>,
    pub testmode: Option<bool>,
    #[cfg_attr(feature = "std", serde(alias = "enableMQTT"))]
    pub enable_mqtt: Option<bool>,
    #[cfg_attr(feature = "std", serde(alias = "enableDebug"))]
    pub enable_debug: Option<bool>,
}

impl RawConfig {
    /// Returns `self` with every field that `top` provides replaced by
    /// `top`'s value.
    pub fn overlay(self, top: RawConfig) -> RawConfig {
        RawConfig {
            ssid: top.ssid.or(self.ssid),
            password: top.password.or(self.password),
            mqtt_server: top.mqtt_server.or(self.mqtt_server),
            mqtt_user: top.mqtt_user.or(self.mqtt_user),
            mqtt_password: top.mqtt_password.or(self.mqtt_password),
            client_name: top.client_name.or(self.client_name),
            testmode: top.testmode.or(self.testmode),
            enable_mqtt: top.enable_mqtt.or(self.enable_mqtt),
            enable_debug: top.enable_debug.or(self.enable_debug),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == RawConfig::default()
    }
}

impl fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "***");
        f.debug_struct("RawConfig")
            .field("ssid", &self.ssid)
            .field("password", &redact(&self.password))
            .field("mqtt_server", &self.mqtt_server)
            .field("mqtt_user", &self.mqtt_user)
            .field("mqtt_password", &redact(&self.mqtt_password))
            .field("client_name", &self.client_name)
            .field("testmode", &self.testmode)
            .field("enable_mqtt", &self.enable_mqtt)
            .field("enable_debug", &self.enable_debug)
            .finish()
    }
}

/// Somewhere settings can be read from.
pub trait ConfigSource {
    /// Short label used in log messages.
    fn name(&self) -> &str;

    fn read(&self) -> Result<RawConfig, LoadError>;
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&self) -> Result<RawConfig, LoadError> {
        (**self).read()
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&self) -> Result<RawConfig, LoadError> {
        (**self).read()
    }
}

/// Two sources stacked: values from `overlay` win over values from `base`.
pub struct Layered<B, O> {
    base: B,
    overlay: O,
}

impl<B: ConfigSource, O: ConfigSource> Layered<B, O> {
    pub fn new(base: B, overlay: O) -> Self {
        Self { base, overlay }
    }
}

impl<B: ConfigSource, O: ConfigSource> ConfigSource for Layered<B, O> {
    fn name(&self) -> &str {
        "layered"
    }

    fn read(&self) -> Result<RawConfig, LoadError> {
        let base = self.base.read()?;
        let top = self.overlay.read()?;
        log::debug!("Layering {} over {}", self.overlay.name(), self.base.name());
        Ok(base.overlay(top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    struct Fixed(RawConfig);

    impl ConfigSource for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn read(&self) -> Result<RawConfig, LoadError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn overlay_replaces_only_present_fields() {
        let base = RawConfig {
            ssid: Some("SSID".to_string()),
            mqtt_server: Some("192.168.1.140".to_string()),
            enable_debug: Some(true),
            ..Default::default()
        };
        let top = RawConfig {
            mqtt_server: Some("broker.lan".to_string()),
            enable_debug: Some(false),
            ..Default::default()
        };

        let merged = Layered::new(Fixed(base), Fixed(top)).read().unwrap();
        assert_eq!(merged.ssid.as_deref(), Some("SSID"));
        assert_eq!(merged.mqtt_server.as_deref(), Some("broker.lan"));
        assert_eq!(merged.enable_debug, Some(false));
        assert_eq!(merged.client_name, None);
    }

    #[test]
    fn empty_overlay_keeps_base() {
        let base = RawConfig {
            client_name: Some("espRF".to_string()),
            ..Default::default()
        };
        let merged = base.clone().overlay(RawConfig::default());
        assert_eq!(merged, base);
        assert!(RawConfig::default().is_empty());
        assert!(!merged.is_empty());
    }

    #[test]
    fn debug_hides_passwords() {
        let raw = RawConfig {
            password: Some("key".to_string()),
            mqtt_password: Some("raspberry".to_string()),
            ..Default::default()
        };
        let printed = format!("{:?}", raw);
        assert!(!printed.contains("raspberry"));
        assert!(!printed.contains("\"key\""));
    }
}
