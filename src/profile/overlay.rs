//! Build mode overlays.
//!
//! - Normal: base compile flags plus the platform's optimization level.
//! - Debug: Normal with `-g` appended to every set.
//! - Profile: Debug with `-pg` at the front of the compile set and at the
//!   end of both link sets.
//! - Release: compile flags per [`ReleaseStrategy`]; link sets as Normal.
//!
//! Overlays read the profile and return fresh sets.

use serde::Serialize;

use crate::core::mode::BuildMode;
use crate::core::template::FlagSet;

use super::{PlatformProfile, ReleaseStrategy};

/// Flag to emit debugging symbols.
pub const DEBUG_FLAG: &str = "-g";
/// Flag to instrument for gprof.
pub const PROFILE_FLAG: &str = "-pg";

/// The flag sets active for one build mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeFlags {
    pub compile: FlagSet,
    pub link_exe: FlagSet,
    pub link_lib: FlagSet,
}

/// Select the flag sets for `mode`.
pub fn apply(profile: &PlatformProfile, mode: BuildMode) -> ModeFlags {
    match mode {
        BuildMode::Normal => normal(profile),
        BuildMode::Debug => debug(profile),
        BuildMode::Profile => profiling(profile),
        BuildMode::Release => release(profile),
    }
}

fn normal(profile: &PlatformProfile) -> ModeFlags {
    ModeFlags {
        compile: profile.compile_flags.chain(&profile.optimization),
        link_exe: profile.link_exe_flags.clone(),
        link_lib: profile.link_lib_flags.clone(),
    }
}

fn debug(profile: &PlatformProfile) -> ModeFlags {
    let base = normal(profile);
    ModeFlags {
        compile: base.compile.with(DEBUG_FLAG),
        link_exe: base.link_exe.with(DEBUG_FLAG),
        link_lib: base.link_lib.with(DEBUG_FLAG),
    }
}

fn profiling(profile: &PlatformProfile) -> ModeFlags {
    let base = debug(profile);
    ModeFlags {
        compile: base.compile.with_front(PROFILE_FLAG),
        link_exe: base.link_exe.with(PROFILE_FLAG),
        link_lib: base.link_lib.with(PROFILE_FLAG),
    }
}

fn release(profile: &PlatformProfile) -> ModeFlags {
    let base = normal(profile);
    let compile = match profile.release_strategy {
        ReleaseStrategy::ReplaceBase => profile.release_flags.clone(),
        ReleaseStrategy::ExtendBase => base.compile.chain(&profile.release_flags),
    };
    ModeFlags {
        compile,
        link_exe: base.link_exe,
        link_lib: base.link_lib,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::PlatformId;

    #[test]
    fn test_normal_appends_optimization() {
        let linux = PlatformProfile::for_platform(PlatformId::Linux);
        let flags = apply(&linux, BuildMode::Normal);
        assert_eq!(flags.compile.as_slice().last().unwrap(), "-O3");
        assert!(flags.link_exe.is_empty());
    }

    #[test]
    fn test_debug_appends_one_flag() {
        for platform in PlatformId::ALL {
            let profile = PlatformProfile::for_platform(platform);
            let normal = apply(&profile, BuildMode::Normal);
            let debug = apply(&profile, BuildMode::Debug);

            assert_eq!(debug.compile, normal.compile.with("-g"));
            assert_eq!(debug.link_exe, normal.link_exe.with("-g"));
            assert_eq!(debug.link_lib, normal.link_lib.with("-g"));
        }
    }

    #[test]
    fn test_profile_flag_placement() {
        let darwin = PlatformProfile::for_platform(PlatformId::Darwin);
        let debug = apply(&darwin, BuildMode::Debug);
        let profile = apply(&darwin, BuildMode::Profile);

        assert_eq!(profile.compile.as_slice()[0], "-pg");
        assert_eq!(&profile.compile.as_slice()[1..], debug.compile.as_slice());
        assert_eq!(profile.link_exe.as_slice(), ["-g", "-pg"]);
        assert_eq!(profile.link_lib.as_slice(), ["-g", "-pg"]);
    }

    #[test]
    fn test_release_replaces_on_unix() {
        for platform in [PlatformId::Darwin, PlatformId::Linux] {
            let profile = PlatformProfile::for_platform(platform);
            let release = apply(&profile, BuildMode::Release);
            assert_eq!(release.compile.as_slice(), ["-DNDEBUG"]);
        }
    }

    #[test]
    fn test_release_extends_on_windows() {
        let windows = PlatformProfile::for_platform(PlatformId::Windows);
        let normal = apply(&windows, BuildMode::Normal);
        let release = apply(&windows, BuildMode::Release);

        assert_eq!(release.compile, normal.compile.with("-DNDEBUG"));
        assert!(release.compile.contains("-O2"));
    }

    #[test]
    fn test_release_keeps_normal_link_flags() {
        let mut darwin = PlatformProfile::for_platform(PlatformId::Darwin);
        darwin.apply_package_root(std::path::Path::new("/sw"));
        let release = apply(&darwin, BuildMode::Release);
        assert_eq!(release.link_exe.as_slice(), ["-L/sw/lib"]);
        assert_eq!(release.compile.as_slice(), ["-DNDEBUG"]);
    }

    #[test]
    fn test_overlays_leave_profile_untouched() {
        let linux = PlatformProfile::for_platform(PlatformId::Linux);
        let copy = linux.clone();
        for mode in BuildMode::ALL {
            apply(&linux, mode);
        }
        assert_eq!(linux, copy);
    }
}
