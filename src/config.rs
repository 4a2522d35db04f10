use alloc::string::String;

use crate::address::BrokerAddress;
use crate::constants::{DEFAULT_ENABLE_DEBUG, DEFAULT_ENABLE_MQTT, DEFAULT_TEST_MODE};
use crate::error::{Field, Reason, ValidationError};
use crate::flags::{Channel, InputSource};
use crate::secret::Secret;
use crate::sources::RawConfig;

/// Validated device configuration.
///
/// Only [`crate::load`] (through [`Config::validate`]) builds one, so every
/// instance satisfies the field constraints. There are no setters: changing a
/// setting means restarting with new input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Wi-Fi SSID to connect to
    wifi_ssid: String,

    // Wi-Fi pre-shared key (password)
    wifi_password: Secret,

    // MQTT broker hostname or IP address
    mqtt_server: BrokerAddress,

    // MQTT username for authentication
    mqtt_user: String,

    // MQTT password for authentication
    mqtt_password: Secret,

    // Client identifier for the broker session, must be unique on the broker
    client_name: String,

    // Read RFLink from hardware serial instead of software serial
    test_mode: bool,

    // Publish anything at all
    enable_mqtt: bool,

    // Publish to the debug topic
    enable_debug: bool,
}

impl Config {
    /// Checks every field of `raw` in declaration order and reports the first
    /// one that fails.
    pub fn validate(raw: RawConfig) -> Result<Self, ValidationError> {
        let wifi_ssid = required(Field::NetworkName, raw.ssid)?;
        let wifi_password = required(Field::NetworkPassword, raw.password)?;
        let mqtt_server = BrokerAddress::parse(required(Field::BrokerAddress, raw.mqtt_server)?)?;
        let mqtt_user = required(Field::BrokerUsername, raw.mqtt_user)?;
        let mqtt_password = required(Field::BrokerPassword, raw.mqtt_password)?;
        let client_name = required(Field::ClientIdentifier, raw.client_name)?;

        Ok(Self {
            wifi_ssid,
            wifi_password: Secret::from(wifi_password),
            mqtt_server,
            mqtt_user,
            mqtt_password: Secret::from(mqtt_password),
            client_name,
            test_mode: raw.testmode.unwrap_or(DEFAULT_TEST_MODE),
            enable_mqtt: raw.enable_mqtt.unwrap_or(DEFAULT_ENABLE_MQTT),
            enable_debug: raw.enable_debug.unwrap_or(DEFAULT_ENABLE_DEBUG),
        })
    }

    pub fn wifi_ssid(&self) -> &str {
        &self.wifi_ssid
    }

    pub fn wifi_password(&self) -> &str {
        self.wifi_password.expose()
    }

    pub fn mqtt_server(&self) -> &BrokerAddress {
        &self.mqtt_server
    }

    pub fn mqtt_user(&self) -> &str {
        &self.mqtt_user
    }

    pub fn mqtt_password(&self) -> &str {
        self.mqtt_password.expose()
    }

    /// Identifier presented when opening the broker session.
    ///
    /// Must be unique among all clients connected to the same broker at once;
    /// a second session with the same name makes the broker drop one of them.
    /// Nothing here can check that.
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn mqtt_enabled(&self) -> bool {
        self.enable_mqtt
    }

    pub fn debug_enabled(&self) -> bool {
        self.enable_debug
    }

    pub fn input_source(&self) -> InputSource {
        InputSource::from_test_mode(self.test_mode)
    }

    /// Whether a message on `channel` should be sent to the broker.
    pub fn publishes(&self, channel: Channel) -> bool {
        match channel {
            Channel::Data => self.enable_mqtt,
            Channel::Debug => self.enable_mqtt && self.enable_debug,
        }
    }
}

fn required(field: Field, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::new(field, Reason::Missing)),
        Some(v) if v.is_empty() => Err(ValidationError::new(field, Reason::Empty)),
        Some(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    fn sample() -> RawConfig {
        RawConfig {
            ssid: Some("SSID".to_string()),
            password: Some("key".to_string()),
            mqtt_server: Some("192.168.1.140".to_string()),
            mqtt_user: Some("pi".to_string()),
            mqtt_password: Some("raspberry".to_string()),
            client_name: Some("espRF".to_string()),
            testmode: Some(false),
            enable_mqtt: Some(true),
            enable_debug: Some(true),
        }
    }

    #[test]
    fn sample_values_come_back_verbatim() {
        let config = Config::validate(sample()).unwrap();
        assert_eq!(config.wifi_ssid(), "SSID");
        assert_eq!(config.wifi_password(), "key");
        assert_eq!(config.mqtt_server().as_str(), "192.168.1.140");
        assert_eq!(config.mqtt_user(), "pi");
        assert_eq!(config.mqtt_password(), "raspberry");
        assert_eq!(config.client_name(), "espRF");
        assert!(!config.test_mode());
        assert!(config.mqtt_enabled());
        assert!(config.debug_enabled());
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let raw = RawConfig {
            ssid: Some(" Home WiFi ".to_string()),
            ..sample()
        };
        let config = Config::validate(raw).unwrap();
        assert_eq!(config.wifi_ssid(), " Home WiFi ");
    }

    #[test]
    fn every_text_field_is_required() {
        let cases: [(Field, fn(&mut RawConfig, Option<String>)); 6] = [
            (Field::NetworkName, |r, v| r.ssid = v),
            (Field::NetworkPassword, |r, v| r.password = v),
            (Field::BrokerAddress, |r, v| r.mqtt_server = v),
            (Field::BrokerUsername, |r, v| r.mqtt_user = v),
            (Field::BrokerPassword, |r, v| r.mqtt_password = v),
            (Field::ClientIdentifier, |r, v| r.client_name = v),
        ];

        for (field, set) in cases {
            let mut raw = sample();
            set(&mut raw, Some(String::new()));
            let err = Config::validate(raw).unwrap_err();
            assert_eq!(err, ValidationError::new(field, Reason::Empty));

            let mut raw = sample();
            set(&mut raw, None);
            let err = Config::validate(raw).unwrap_err();
            assert_eq!(err, ValidationError::new(field, Reason::Missing));
        }
    }

    #[test]
    fn switches_fall_back_to_defaults() {
        let raw = RawConfig {
            testmode: None,
            enable_mqtt: None,
            enable_debug: None,
            ..sample()
        };
        let config = Config::validate(raw).unwrap();
        assert!(!config.test_mode());
        assert!(config.mqtt_enabled());
        assert!(config.debug_enabled());
    }

    #[test]
    fn publish_gates() {
        let quiet = Config::validate(RawConfig {
            enable_mqtt: Some(false),
            ..sample()
        })
        .unwrap();
        assert!(!quiet.publishes(Channel::Data));
        assert!(!quiet.publishes(Channel::Debug));

        let no_debug = Config::validate(RawConfig {
            enable_debug: Some(false),
            ..sample()
        })
        .unwrap();
        assert!(no_debug.publishes(Channel::Data));
        assert!(!no_debug.publishes(Channel::Debug));
    }

    #[test]
    fn input_source_follows_test_mode() {
        let normal = Config::validate(sample()).unwrap();
        assert_eq!(normal.input_source(), InputSource::SoftwareSerial);

        let testing = Config::validate(RawConfig {
            testmode: Some(true),
            ..sample()
        })
        .unwrap();
        assert_eq!(testing.input_source(), InputSource::HardwareSerial);
    }

    #[test]
    fn debug_output_hides_passwords() {
        let config = Config::validate(sample()).unwrap();
        let printed = format!("{:?}", config);
        assert!(printed.contains("espRF"));
        assert!(!printed.contains("raspberry"));
        assert!(!printed.contains("\"key\""));
    }
}
