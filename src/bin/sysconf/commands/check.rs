//! `sysconf check` command

use anyhow::{bail, Result};

use crate::cli::CheckArgs;
use sysconf::ops::{check_tools, format_report};

pub fn execute(args: CheckArgs) -> Result<()> {
    let config = super::resolve(&args.select)?;
    let report = check_tools(&config);

    print!("{}", format_report(&config, &report));

    if !report.all_required_passed() {
        bail!(
            "{} required tool(s) not found on PATH",
            report.required_failed_count()
        );
    }

    Ok(())
}
