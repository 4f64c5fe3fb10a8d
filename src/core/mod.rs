//! Core data structures for sysconf.
//!
//! This module contains the selector vocabulary and template types used
//! throughout sysconf:
//! - Platform and build mode selectors
//! - Shared naming constants
//! - Command templates and flag sets

pub mod defaults;
pub mod mode;
pub mod platform;
pub mod template;

pub use mode::BuildMode;
pub use platform::PlatformId;
pub use template::{CommandTemplate, FlagSet, Placeholder, Token};
