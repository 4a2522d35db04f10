use super::{ConfigSource, RawConfig};
use crate::error::{Field, LoadError, Reason, ValidationError};

pub const SSID: &str = "RFLINK_SSID";
pub const PASSWORD: &str = "RFLINK_PASSWORD";
pub const MQTT_SERVER: &str = "RFLINK_MQTT_SERVER";
pub const MQTT_USER: &str = "RFLINK_MQTT_USER";
pub const MQTT_PASSWORD: &str = "RFLINK_MQTT_PASSWORD";
pub const CLIENT_NAME: &str = "RFLINK_CLIENT_NAME";
pub const TESTMODE: &str = "RFLINK_TESTMODE";
pub const ENABLE_MQTT: &str = "RFLINK_ENABLE_MQTT";
pub const ENABLE_DEBUG: &str = "RFLINK_ENABLE_DEBUG";

/// Variable read for each setting.
pub const fn var_for(field: Field) -> &'static str {
    match field {
        Field::NetworkName => SSID,
        Field::NetworkPassword => PASSWORD,
        Field::BrokerAddress => MQTT_SERVER,
        Field::BrokerUsername => MQTT_USER,
        Field::BrokerPassword => MQTT_PASSWORD,
        Field::ClientIdentifier => CLIENT_NAME,
        Field::TestMode => TESTMODE,
        Field::MqttEnabled => ENABLE_MQTT,
        Field::DebugEnabled => ENABLE_DEBUG,
    }
}

/// Lookup used for the real process environment.
pub type Lookup = fn(&'static str) -> Result<Option<String>, LoadError>;

/// Settings from `RFLINK_*` environment variables.
///
/// A variable that is set to the empty string counts as provided, so it
/// fails validation instead of falling through to a lower layer.
pub struct Environment<F = Lookup> {
    lookup: F,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            lookup: process_var,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Environment<F>
where
    F: Fn(&'static str) -> Result<Option<String>, LoadError>,
{
    /// Reads variables through `lookup` instead of the process environment.
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    fn text(&self, field: Field) -> Result<Option<String>, LoadError> {
        (self.lookup)(var_for(field))
    }

    fn switch(&self, field: Field) -> Result<Option<bool>, LoadError> {
        match self.text(field)? {
            None => Ok(None),
            Some(value) => parse_bool(&value).map(Some).ok_or_else(|| {
                ValidationError::new(field, Reason::Malformed("expected true/false, 1/0, yes/no or on/off")).into()
            }),
        }
    }
}

impl<F> ConfigSource for Environment<F>
where
    F: Fn(&'static str) -> Result<Option<String>, LoadError>,
{
    fn name(&self) -> &str {
        "environment"
    }

    fn read(&self) -> Result<RawConfig, LoadError> {
        Ok(RawConfig {
            ssid: self.text(Field::NetworkName)?,
            password: self.text(Field::NetworkPassword)?,
            mqtt_server: self.text(Field::BrokerAddress)?,
            mqtt_user: self.text(Field::BrokerUsername)?,
            mqtt_password: self.text(Field::BrokerPassword)?,
            client_name: self.text(Field::ClientIdentifier)?,
            testmode: self.switch(Field::TestMode)?,
            enable_mqtt: self.switch(Field::MqttEnabled)?,
            enable_debug: self.switch(Field::DebugEnabled)?,
        })
    }
}

fn process_var(var: &'static str) -> Result<Option<String>, LoadError> {
    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(LoadError::NotUnicode { var }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
