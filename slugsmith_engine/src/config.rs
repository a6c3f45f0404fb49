//! Layered configuration for the `slugsmith` binary.
//!
//! Defaults are overlaid by a TOML file and then by command-line flags. The
//! file is looked up in order: an explicit path, `$SLUGSMITH_CONFIG`,
//! `./slugsmith.toml`, then `<config dir>/slugsmith/config.toml`.

use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::SlugOptions;

pub const CONFIG_ENV: &str = "SLUGSMITH_CONFIG";
pub const LOCAL_CONFIG: &str = "slugsmith.toml";

/// Partial options; unset fields fall through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlugConfig {
    pub separator: Option<char>,
    pub max_length: Option<usize>,
    pub preserve_case: Option<bool>,
}

impl SlugConfig {
    /// Parse a config document.
    ///
    /// ```
    /// use slugsmith_engine::config::SlugConfig;
    ///
    /// let cfg = SlugConfig::from_toml("separator = \"_\"\nmax_length = 40\n").unwrap();
    /// assert_eq!(cfg.separator, Some('_'));
    /// assert_eq!(cfg.max_length, Some(40));
    /// assert_eq!(cfg.preserve_case, None);
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parsing slugsmith config")
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config = Self::from_toml(&text).with_context(|| format!("in {}", path.display()))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Overlay `upper` on top of `self`; fields set in `upper` win.
    #[must_use]
    pub fn merge(self, upper: SlugConfig) -> SlugConfig {
        SlugConfig {
            separator: upper.separator.or(self.separator),
            max_length: upper.max_length.or(self.max_length),
            preserve_case: upper.preserve_case.or(self.preserve_case),
        }
    }

    /// Resolve into concrete options, filling gaps with the defaults.
    pub fn to_options(&self) -> Result<SlugOptions> {
        let defaults = SlugOptions::default();
        let separator = match self.separator {
            None => defaults.separator,
            Some(ch) => match u8::try_from(ch) {
                Ok(byte) if byte.is_ascii() => byte,
                _ => bail!("separator {ch:?} is not an ASCII character"),
            },
        };
        Ok(SlugOptions {
            separator,
            max_length: self.max_length.unwrap_or(defaults.max_length),
            preserve_case: self.preserve_case.unwrap_or(defaults.preserve_case),
        })
    }
}

/// Config files that are picked up without being named.
fn implicit_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("slugsmith").join("config.toml"));
    }
    candidates
}

/// Load the file layer. Named files (flag or env var) must exist; implicit
/// ones are skipped when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<SlugConfig> {
    if let Some(path) = explicit {
        return SlugConfig::load(path);
    }
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return SlugConfig::load(Path::new(&path)).with_context(|| format!("from ${CONFIG_ENV}"));
    }
    match implicit_candidates().into_iter().find(|candidate| candidate.is_file()) {
        Some(path) => SlugConfig::load(&path),
        None => {
            debug!("no config file found, using defaults");
            Ok(SlugConfig::default())
        },
    }
}
