//! High-level operations.
//!
//! This module contains the implementation of sysconf commands.

pub mod check;

pub use check::{check_tools, format_report, CheckReport, CheckResult};
