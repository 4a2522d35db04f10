use std::fs;
use std::path::{Path, PathBuf};

use super::{ConfigSource, RawConfig};
use crate::error::LoadError;

/// Settings from a TOML file using the `cfg.toml` keys.
pub struct TomlFile {
    path: PathBuf,
    name: String,
}

impl TomlFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = format!("file {}", path.display());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for TomlFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<RawConfig, LoadError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
