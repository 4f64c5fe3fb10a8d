//! Configuration resolution.
//!
//! [`ConfigResolver`] owns the three platform profiles. Construction runs the
//! package-root probe once, so the profiles are final before any mode
//! overlay is derived from them. After that the resolver is read-only:
//! [`ConfigResolver::resolve`] is deterministic and can be called from any
//! number of threads. Its result for darwin still depends on which package
//! root, if any, existed when the resolver was built.

pub mod errors;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::mode::BuildMode;
use crate::core::platform::PlatformId;
use crate::core::template::{CommandTemplate, FlagSet, Placeholder};
use crate::probe::{probe_profile, DirProbe, RealFs};
use crate::profile::{ModeFlags, OptionalLibs, PkgConfig, PlatformProfile, Suffixes};

pub use errors::ConfigError;

/// Which command template to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Compile,
    LinkExe,
    LinkLib,
    Resource,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Compile => "compile",
            TemplateKind::LinkExe => "link",
            TemplateKind::LinkLib => "link-lib",
            TemplateKind::Resource => "resource",
        }
    }
}

/// A profile after initialization, with the root the probe applied.
#[derive(Debug, Clone)]
struct Initialized {
    profile: PlatformProfile,
    package_root: Option<PathBuf>,
}

/// Resolves (platform, mode) pairs to complete build configurations.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    darwin: Initialized,
    linux: Initialized,
    windows: Initialized,
}

impl ConfigResolver {
    /// Build every profile and probe for package roots with `probe`.
    pub fn new(probe: &dyn DirProbe) -> Self {
        Self::initialize(Some(probe), None)
    }

    /// Like [`ConfigResolver::new`], replacing the candidate package roots
    /// of every profile that has any.
    pub fn with_package_roots(probe: &dyn DirProbe, roots: &[PathBuf]) -> Self {
        Self::initialize(Some(probe), Some(roots))
    }

    /// Build every profile without probing.
    pub fn without_probe() -> Self {
        Self::initialize(None, None)
    }

    /// Build every profile and probe the real filesystem.
    pub fn from_host() -> Self {
        Self::new(&RealFs)
    }

    fn initialize(probe: Option<&dyn DirProbe>, roots: Option<&[PathBuf]>) -> Self {
        let build = |platform: PlatformId| {
            let mut profile = PlatformProfile::for_platform(platform);
            if let Some(roots) = roots {
                if !profile.package_roots.is_empty() {
                    profile.package_roots = roots.to_vec();
                }
            }
            let package_root = probe.and_then(|probe| probe_profile(&mut profile, probe));
            Initialized {
                profile,
                package_root,
            }
        };

        ConfigResolver {
            darwin: build(PlatformId::Darwin),
            linux: build(PlatformId::Linux),
            windows: build(PlatformId::Windows),
        }
    }

    fn entry(&self, platform: PlatformId) -> &Initialized {
        match platform {
            PlatformId::Darwin => &self.darwin,
            PlatformId::Linux => &self.linux,
            PlatformId::Windows => &self.windows,
        }
    }

    /// The initialized profile for `platform`.
    pub fn profile(&self, platform: PlatformId) -> &PlatformProfile {
        &self.entry(platform).profile
    }

    /// The package root applied to `platform`'s profile, if one was found.
    pub fn package_root(&self, platform: PlatformId) -> Option<&Path> {
        self.entry(platform).package_root.as_deref()
    }

    /// Resolve the configuration for `platform` in `mode`.
    pub fn resolve(&self, platform: PlatformId, mode: BuildMode) -> ResolvedConfig {
        let entry = self.entry(platform);
        let profile = &entry.profile;
        let flags = profile.mode_flags(mode);

        tracing::debug!(
            "resolved {} {}: compile flags {:?}",
            platform,
            mode,
            flags.compile.as_slice()
        );

        ResolvedConfig {
            platform,
            mode,
            suffixes: profile.suffixes,
            compile: profile.compile.bind(Placeholder::Flags, flags.compile.as_slice()),
            link_exe: profile.link_exe.bind(Placeholder::Flags, flags.link_exe.as_slice()),
            link_lib: profile.link_lib.bind(Placeholder::Flags, flags.link_lib.as_slice()),
            // No flag set exists for the resource compiler.
            resource: profile.resource.clone(),
            flags,
            libs: profile.libs.clone(),
            link_library_prefix: profile.link_library_prefix,
            pkg_config: profile.pkg_config.clone(),
            package_root: entry.package_root.clone(),
        }
    }

    /// Resolve with a platform given by name.
    pub fn resolve_named(
        &self,
        platform: &str,
        mode: BuildMode,
    ) -> Result<ResolvedConfig, ConfigError> {
        let platform: PlatformId = platform.parse()?;
        Ok(self.resolve(platform, mode))
    }
}

/// Complete configuration for one (platform, mode) pair.
///
/// Templates already have `$flags$` bound to the mode's flag sets; every
/// other slot is filled by the caller at invocation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub platform: PlatformId,
    pub mode: BuildMode,
    pub suffixes: Suffixes,
    pub compile: CommandTemplate,
    pub link_exe: CommandTemplate,
    pub link_lib: CommandTemplate,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<CommandTemplate>,
    pub flags: ModeFlags,
    pub libs: OptionalLibs,
    pub link_library_prefix: &'static str,
    pub pkg_config: PkgConfig,
    pub package_root: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Look up a command template by kind.
    pub fn template(&self, kind: TemplateKind) -> Result<&CommandTemplate, ConfigError> {
        match kind {
            TemplateKind::Compile => Ok(&self.compile),
            TemplateKind::LinkExe => Ok(&self.link_exe),
            TemplateKind::LinkLib => Ok(&self.link_lib),
            TemplateKind::Resource => self.resource_compile(),
        }
    }

    /// The resource compiler template.
    ///
    /// Only the windows profile has one.
    pub fn resource_compile(&self) -> Result<&CommandTemplate, ConfigError> {
        self.resource
            .as_ref()
            .ok_or(ConfigError::TemplateUnavailable {
                template: TemplateKind::Resource.as_str(),
                platform: self.platform,
            })
    }

    pub fn compile_flags(&self) -> &FlagSet {
        &self.flags.compile
    }

    pub fn link_exe_flags(&self) -> &FlagSet {
        &self.flags.link_exe
    }

    pub fn link_lib_flags(&self) -> &FlagSet {
        &self.flags.link_lib
    }

    /// Link flag for a library by name, e.g. `-lmrtrix`.
    pub fn link_library_flag(&self, name: &str) -> String {
        format!("{}{}", self.link_library_prefix, name)
    }
}
