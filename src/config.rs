use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path, str::FromStr};
use thiserror::Error;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParseOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Fail on `$ORIGIN`/`$TTL` without a usable argument and on unknown
    /// directives instead of skipping them.
    pub strict_directives: bool,
    /// Class given to records when none was ever written.
    pub default_class: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strict_directives: false,
            default_class: "IN".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error in reading config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("error in parsing config: {}", .0.message())]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn parse<P: AsRef<Path>>(filename: P) -> Result<Config, ConfigError> {
        let mut f = File::open(filename)?;
        let mut contents = String::new();
        f.read_to_string(&mut contents)?;

        contents.parse()
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
