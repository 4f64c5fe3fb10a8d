//! Configuration file support for sysconf.
//!
//! sysconf reads two configuration file locations:
//! - Global: `~/.sysconf/config.toml` - User-wide defaults
//! - Project: `.sysconf/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Command-line flags
//! take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::mode::BuildMode;
use crate::core::platform::PlatformId;
use crate::probe::DirProbe;
use crate::resolver::ConfigResolver;

/// Name of the configuration directory, both global and per project.
pub const CONFIG_DIR: &str = ".sysconf";

/// sysconf configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default selectors
    pub build: BuildConfig,

    /// Package-root probe settings
    pub probe: ProbeConfig,
}

/// Default platform and mode selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Platform to resolve when none is given (defaults to the host)
    pub platform: Option<String>,

    /// Build mode to resolve when none is given (defaults to normal)
    pub mode: Option<String>,
}

/// Package-root probe settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Run the probe at startup (defaults to true)
    pub enabled: Option<bool>,

    /// Replacement candidate roots, in priority order
    pub roots: Option<Vec<PathBuf>>,
}

impl ProbeConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.platform.is_some() {
            self.build.platform = other.build.platform;
        }
        if other.build.mode.is_some() {
            self.build.mode = other.build.mode;
        }

        if other.probe.enabled.is_some() {
            self.probe.enabled = other.probe.enabled;
        }
        if other.probe.roots.is_some() {
            self.probe.roots = other.probe.roots;
        }
    }

    /// The configured platform, or the host platform.
    pub fn platform(&self) -> Result<PlatformId> {
        match &self.build.platform {
            Some(name) => Ok(name.parse()?),
            None => PlatformId::host().ok_or_else(|| {
                anyhow::anyhow!(
                    "host `{}` has no build profile\n\
                     help: pass `--platform` or set `build.platform` in {}/config.toml",
                    std::env::consts::OS,
                    CONFIG_DIR
                )
            }),
        }
    }

    /// The configured build mode, or normal.
    pub fn mode(&self) -> Result<BuildMode> {
        match &self.build.mode {
            Some(name) => Ok(name.parse()?),
            None => Ok(BuildMode::default()),
        }
    }

    /// Build a resolver honoring the probe settings.
    pub fn resolver(&self, probe: &dyn DirProbe) -> ConfigResolver {
        if !self.probe.is_enabled() {
            return ConfigResolver::without_probe();
        }
        match &self.probe.roots {
            Some(roots) => ConfigResolver::with_package_roots(probe, roots),
            None => ConfigResolver::new(probe),
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.sysconf/config.toml)
/// 2. Global config (~/.sysconf/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            config.merge(Config::load_or_default(global_path));
        }
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global config path (~/.sysconf/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR).join("config.toml"))
}

/// Get the project config path (.sysconf/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join("config.toml")
}
