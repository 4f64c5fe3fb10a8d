//! Optional package-manager detection.
//!
//! Some profiles list candidate roots of a package manager whose headers
//! and libraries live outside the default search paths (Fink on macOS).
//! The probe checks them once, in priority order, and applies the first
//! root that exists as a directory. Check errors count as "not found".

use std::io;
use std::path::{Path, PathBuf};

use crate::profile::PlatformProfile;

/// Directory-existence check used by the probe.
pub trait DirProbe {
    /// Whether `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> io::Result<bool>;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl DirProbe for RealFs {
    fn dir_exists(&self, path: &Path) -> io::Result<bool> {
        match std::fs::metadata(path) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Return the first candidate that exists as a directory.
pub fn find_package_root(probe: &dyn DirProbe, candidates: &[PathBuf]) -> Option<PathBuf> {
    for candidate in candidates {
        match probe.dir_exists(candidate) {
            Ok(true) => return Some(candidate.clone()),
            Ok(false) => {
                tracing::debug!("package root {} not present", candidate.display());
            }
            Err(e) => {
                tracing::debug!(
                    "could not check package root {}: {}",
                    candidate.display(),
                    e
                );
            }
        }
    }
    None
}

/// Probe `profile.package_roots` and apply the first match to the profile.
///
/// Returns the applied root. Profiles without candidates are left alone.
pub fn probe_profile(profile: &mut PlatformProfile, probe: &dyn DirProbe) -> Option<PathBuf> {
    if profile.package_roots.is_empty() {
        return None;
    }

    let root = find_package_root(probe, &profile.package_roots)?;
    tracing::info!(
        "using package root {} for {}",
        root.display(),
        profile.platform
    );
    profile.apply_package_root(&root);
    Some(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::PlatformId;
    use crate::test_support::MockDirs;
    use tempfile::TempDir;

    fn roots() -> Vec<PathBuf> {
        vec![PathBuf::from("/sw64"), PathBuf::from("/sw")]
    }

    #[test]
    fn test_first_candidate_wins() {
        let dirs = MockDirs::new().with_dir("/sw64").with_dir("/sw");
        assert_eq!(find_package_root(&dirs, &roots()), Some(PathBuf::from("/sw64")));
    }

    #[test]
    fn test_second_candidate_used_when_first_missing() {
        let dirs = MockDirs::new().with_dir("/sw");
        assert_eq!(find_package_root(&dirs, &roots()), Some(PathBuf::from("/sw")));
    }

    #[test]
    fn test_no_candidates_present() {
        let dirs = MockDirs::new();
        assert_eq!(find_package_root(&dirs, &roots()), None);
    }

    #[test]
    fn test_errors_treated_as_absent() {
        let dirs = MockDirs::new().with_error("/sw64").with_dir("/sw");
        assert_eq!(find_package_root(&dirs, &roots()), Some(PathBuf::from("/sw")));

        let dirs = MockDirs::new().with_error("/sw64").with_error("/sw");
        assert_eq!(find_package_root(&dirs, &roots()), None);
    }

    #[test]
    fn test_probe_applies_only_one_root() {
        let dirs = MockDirs::new().with_dir("/sw64").with_dir("/sw");
        let mut profile = PlatformProfile::for_platform(PlatformId::Darwin);
        let root = probe_profile(&mut profile, &dirs);

        assert_eq!(root, Some(PathBuf::from("/sw64")));
        assert_eq!(profile.link_exe_flags.as_slice(), ["-L/sw64/lib"]);
        assert_eq!(profile.link_lib_flags.as_slice(), ["-L/sw64/lib"]);
        assert!(profile.compile_flags.contains("-I/sw64/include"));
        assert!(!profile.compile_flags.contains("-I/sw/include"));
    }

    #[test]
    fn test_probe_skips_profiles_without_roots() {
        let dirs = MockDirs::new().with_dir("/sw");
        let mut profile = PlatformProfile::for_platform(PlatformId::Linux);
        let before = profile.clone();

        assert_eq!(probe_profile(&mut profile, &dirs), None);
        assert_eq!(profile, before);
    }

    #[test]
    fn test_real_fs_probe() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        assert!(RealFs.dir_exists(tmp.path()).unwrap());
        assert!(!RealFs.dir_exists(&file).unwrap());
        assert!(!RealFs.dir_exists(&tmp.path().join("missing")).unwrap());

        let candidates = vec![tmp.path().join("missing"), tmp.path().to_path_buf()];
        assert_eq!(
            find_package_root(&RealFs, &candidates),
            Some(tmp.path().to_path_buf())
        );
    }
}
