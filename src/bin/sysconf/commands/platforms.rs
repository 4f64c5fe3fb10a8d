//! `sysconf platforms` command

use anyhow::Result;

use sysconf::profile::PlatformProfile;
use sysconf::{BuildMode, PlatformId};

pub fn execute() -> Result<()> {
    println!("Platforms:");
    for platform in PlatformId::ALL {
        let profile = PlatformProfile::for_platform(platform);
        let host = if PlatformId::host() == Some(platform) {
            " (host)"
        } else {
            ""
        };
        println!(
            "  {:<8} {}{}",
            platform,
            profile.suffixes.library_file_name(sysconf::core::defaults::LIB_NAME),
            host
        );
    }

    println!();
    println!("Build modes:");
    for mode in BuildMode::ALL {
        println!("  {}", mode);
    }

    Ok(())
}
