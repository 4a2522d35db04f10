use core::fmt;

#[cfg(feature = "std")]
use std::path::PathBuf;

use thiserror::Error;

use crate::store::State;

/// One of the nine configuration settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    NetworkName,
    NetworkPassword,
    BrokerAddress,
    BrokerUsername,
    BrokerPassword,
    ClientIdentifier,
    TestMode,
    MqttEnabled,
    DebugEnabled,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::NetworkName,
        Field::NetworkPassword,
        Field::BrokerAddress,
        Field::BrokerUsername,
        Field::BrokerPassword,
        Field::ClientIdentifier,
        Field::TestMode,
        Field::MqttEnabled,
        Field::DebugEnabled,
    ];

    /// Key used in `cfg.toml` and in configuration files.
    pub const fn key(self) -> &'static str {
        match self {
            Field::NetworkName => "ssid",
            Field::NetworkPassword => "password",
            Field::BrokerAddress => "mqtt_server",
            Field::BrokerUsername => "mqtt_user",
            Field::BrokerPassword => "mqtt_password",
            Field::ClientIdentifier => "client_name",
            Field::TestMode => "testmode",
            Field::MqttEnabled => "enable_mqtt",
            Field::DebugEnabled => "enable_debug",
        }
    }

    pub const fn is_secret(self) -> bool {
        matches!(self, Field::NetworkPassword | Field::BrokerPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// No source provided a value
    Missing,
    /// A value was provided but is the empty string
    Empty,
    /// A value was provided but does not have the expected shape
    Malformed(&'static str),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Missing => f.write_str("no value provided"),
            Reason::Empty => f.write_str("must not be empty"),
            Reason::Malformed(why) => f.write_str(why),
        }
    }
}

/// A required setting is missing, empty or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    field: Field,
    reason: Reason,
}

impl ValidationError {
    pub const fn new(field: Field, reason: Reason) -> Self {
        Self { field, reason }
    }

    pub const fn field(&self) -> Field {
        self.field
    }

    pub const fn reason(&self) -> Reason {
        self.reason
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[cfg(feature = "std")]
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("failed to parse config TOML at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[cfg(feature = "std")]
    #[error("environment variable {var} is not valid unicode")]
    NotUnicode { var: &'static str },

    #[error("configuration store already {0}")]
    AlreadyInitialized(State),
}

impl LoadError {
    /// The offending setting, when the failure is a validation failure.
    pub fn field(&self) -> Option<Field> {
        match self {
            LoadError::Validation(e) => Some(e.field()),
            _ => None,
        }
    }
}
