//! sysconf - platform build configuration for a native C++ project
//!
//! This crate provides the compiler, linker and resource-compiler command
//! templates for each supported platform, and resolves them for a build
//! mode. Running the commands is left to the build orchestrator.

pub mod core;
pub mod ops;
pub mod probe;
pub mod profile;
pub mod resolver;
pub mod util;

/// Test utilities for sysconf unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides an in-memory directory probe.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{BuildMode, CommandTemplate, FlagSet, Placeholder, PlatformId};
pub use probe::{DirProbe, RealFs};
pub use profile::PlatformProfile;
pub use resolver::{ConfigError, ConfigResolver, ResolvedConfig, TemplateKind};
