//! Command implementations

pub mod check;
pub mod command;
pub mod completions;
pub mod platforms;
pub mod show;

use anyhow::{Context, Result};

use crate::cli::SelectArgs;
use sysconf::util::config::{global_config_path, load_config, project_config_path};
use sysconf::{BuildMode, ConfigError, ConfigResolver, PlatformId, RealFs, ResolvedConfig};

/// Attach the error's hint as a `help:` line.
pub fn with_help(err: ConfigError) -> anyhow::Error {
    match err.help() {
        Some(help) => anyhow::anyhow!("{}\nhelp: {}", err, help),
        None => err.into(),
    }
}

/// Resolve the configuration selected by `args`, config files and host.
pub fn resolve(args: &SelectArgs) -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let mut config = load_config(
        global_config_path().as_deref(),
        &project_config_path(&cwd),
    );

    // CLI overrides config
    if args.platform.is_some() {
        config.build.platform = args.platform.clone();
    }
    if args.mode.is_some() {
        config.build.mode = args.mode.clone();
    }
    if args.no_probe {
        config.probe.enabled = Some(false);
    }

    let platform: PlatformId = match &config.build.platform {
        Some(name) => name.parse().map_err(with_help)?,
        None => config.platform()?,
    };
    let mode: BuildMode = match &config.build.mode {
        Some(name) => name.parse().map_err(with_help)?,
        None => BuildMode::default(),
    };

    let resolver: ConfigResolver = config.resolver(&RealFs);
    Ok(resolver.resolve(platform, mode))
}
