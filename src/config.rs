use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ampacity::Environment;

pub const DEFAULT_CONFIG_PATH: &str = "config/ampacity.toml";
pub const ENV_PREFIX: &str = "AMPACITY__";

/// Calculation defaults applied to newly built models
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub environment: Environment,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Defaults, then the TOML file at `path` if present, then `AMPACITY__*` variables
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let cfg: Self = Self::figment(path.as_ref()).extract()?;
        cfg.environment.validate()?;
        Ok(cfg)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
