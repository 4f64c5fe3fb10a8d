//! Tool availability checks.
//!
//! The `check` command verifies that the programs a resolved configuration
//! invokes can be found on `PATH`:
//!
//! - Compiler driver (compile and link templates)
//! - Resource compiler (windows only)
//! - pkg-config (optional, only needed for the GUI)

use std::path::PathBuf;

use crate::resolver::ResolvedConfig;
use crate::util::process::find_executable;

/// Result of a single tool check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// What the tool is used for
    pub name: String,

    /// Program looked up on PATH
    pub program: String,

    /// Where it was found
    pub path: Option<PathBuf>,

    /// Whether the build cannot proceed without it
    pub required: bool,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.path.is_some()
    }
}

/// Summary of all tool checks for one platform.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub checks: Vec<CheckResult>,
}

impl CheckReport {
    /// Check if all required tools were found.
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed())
    }

    /// Get the count of required tools that are missing.
    pub fn required_failed_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed())
            .count()
    }
}

/// Check the tools used by `config` against `PATH`.
pub fn check_tools(config: &ResolvedConfig) -> CheckReport {
    check_tools_with(config, find_executable)
}

/// Check the tools used by `config` with a custom lookup.
pub fn check_tools_with(
    config: &ResolvedConfig,
    lookup: impl Fn(&str) -> Option<PathBuf>,
) -> CheckReport {
    let mut wanted: Vec<(&str, String, bool)> = Vec::new();

    for (name, template) in [
        ("compiler", &config.compile),
        ("linker", &config.link_exe),
        ("shared linker", &config.link_lib),
    ] {
        if let Some(program) = template.program() {
            wanted.push((name, program.to_string(), true));
        }
    }

    if let Ok(resource) = config.resource_compile() {
        if let Some(program) = resource.program() {
            wanted.push(("resource compiler", program.to_string(), true));
        }
    }

    if let Some(program) = config.pkg_config.command.first() {
        wanted.push(("pkg-config", program.clone(), false));
    }

    let mut report = CheckReport::default();
    for (name, program, required) in wanted {
        // Compile and link share a driver; look each program up once.
        if report.checks.iter().any(|c| c.program == program) {
            continue;
        }
        let path = lookup(&program);
        tracing::debug!("{} `{}`: {:?}", name, program, path);
        report.checks.push(CheckResult {
            name: name.to_string(),
            program,
            path,
            required,
        });
    }

    report
}

/// Format the check report for display.
pub fn format_report(config: &ResolvedConfig, report: &CheckReport) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    writeln!(output, "Tools for {}:", config.platform).unwrap();
    for check in &report.checks {
        let status = if check.passed() { "[OK]" } else { "[!!]" };
        let required = if check.required { "" } else { " (optional)" };
        match &check.path {
            Some(path) => writeln!(
                output,
                "  {} {} `{}`{}: {}",
                status,
                check.name,
                check.program,
                required,
                path.display()
            )
            .unwrap(),
            None => writeln!(
                output,
                "  {} {} `{}`{}: not found",
                status, check.name, check.program, required
            )
            .unwrap(),
        }
    }

    let failed = report.required_failed_count();
    if failed > 0 {
        writeln!(output, "\n{} required tool(s) missing.", failed).unwrap();
    }

    output
}
