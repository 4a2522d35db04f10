use std::collections::HashMap;
use std::io::Write;

use rflink_to_mqtt::{Environment, LoadError};
use tempfile::NamedTempFile;

pub const SAMPLE_TOML: &str = r#"
ssid = "SSID"
password = "key"
mqtt_server = "192.168.1.140"
mqtt_user = "pi"
mqtt_password = "raspberry"
client_name = "espRF"
testmode = false
enable_mqtt = true
enable_debug = true
"#;

pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config file");
    file
}

pub fn fake_env(
    pairs: &[(&'static str, &str)],
) -> Environment<impl Fn(&'static str) -> Result<Option<String>, LoadError>> {
    let vars: HashMap<&'static str, String> =
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
    Environment::with_lookup(move |var| Ok(vars.get(var).cloned()))
}
