use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tleparse::AssemblerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}'. {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Failed to parse config file. {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub reader: Reader,
    pub output: Output,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Reader {
    /// Validate each record's data lines while reading
    pub validate: bool,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Output {
    pub format: OutputFormat,
    /// Print the resolved epoch of each record
    pub show_epoch: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Name, line 1 and line 2 as read
    #[default]
    Text,
    /// One JSON document per record
    Json,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_str_checked(&content)
    }

    pub fn from_str_checked(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn assembler_config(&self) -> AssemblerConfig {
        AssemblerConfig {
            validate: self.reader.validate,
        }
    }
}
