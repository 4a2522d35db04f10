/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix shared by every environment variable the environment source reads
pub const ENV_PREFIX: &str = "RFLINK_";

/// Environment variable naming the TOML file for the startup check binary
pub const CONFIG_PATH_ENV: &str = "RFLINK_CONFIG";

/// Longest hostname accepted for the broker address (RFC 1035)
pub const HOSTNAME_MAX_LEN: usize = 253;
/// Longest single label inside a hostname
pub const HOSTNAME_LABEL_MAX_LEN: usize = 63;

/// Defaults for the switches when a source leaves them out
pub const DEFAULT_TEST_MODE: bool = false;
pub const DEFAULT_ENABLE_MQTT: bool = true;
pub const DEFAULT_ENABLE_DEBUG: bool = true;
