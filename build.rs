use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    ssid: Option<String>,
    password: Option<String>,
    mqtt_server: Option<String>,
    mqtt_user: Option<String>,
    mqtt_password: Option<String>,
    client_name: Option<String>,
    testmode: Option<bool>,
    #[serde(alias = "enableMQTT")]
    enable_mqtt: Option<bool>,
    #[serde(alias = "enableDebug")]
    enable_debug: Option<bool>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if the toml or its override changes
    println!("cargo:rerun-if-env-changed=RFLINK_CFG");
    let cfg_path = env::var("RFLINK_CFG").unwrap_or_else(|_| "cfg.toml".to_string());
    println!("cargo:rerun-if-changed={}", cfg_path);

    // Nothing is embedded when the file is absent
    let raw: RawConfig = match fs::read_to_string(&cfg_path) {
        Ok(toml_str) => toml::from_str(&toml_str)?,
        Err(_) => RawConfig::default(),
    };

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("embedded.rs");
    let code = format!(
        r#"
        pub const EMBEDDED: EmbeddedValues = EmbeddedValues {{
            ssid: {ssid:?},
            password: {psk:?},
            mqtt_server: {ms:?},
            mqtt_user: {mu:?},
            mqtt_password: {mpw:?},
            client_name: {cn:?},
            testmode: {tm:?},
            enable_mqtt: {em:?},
            enable_debug: {ed:?},
        }};
    "#,
        ssid = raw.ssid,
        psk = raw.password,
        ms = raw.mqtt_server,
        mu = raw.mqtt_user,
        mpw = raw.mqtt_password,
        cn = raw.client_name,
        tm = raw.testmode,
        em = raw.enable_mqtt,
        ed = raw.enable_debug,
    );

    fs::write(dest_path, code)?;
    Ok(())
}
