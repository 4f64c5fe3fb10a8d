//! Per-platform build profiles.
//!
//! Each supported platform has one [`PlatformProfile`] holding its file
//! naming conventions, command templates and base flag sets. The profiles
//! are separate data and differ in small ways: optimization level, release
//! overlay, resource compiler and compression library.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::platform::PlatformId;
use crate::core::template::{CommandTemplate, FlagSet};

pub mod darwin;
pub mod linux;
pub mod overlay;
pub mod windows;

pub use overlay::ModeFlags;

/// File naming conventions for build products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suffixes {
    /// Object file suffix (e.g., ".o")
    pub object: &'static str,
    /// Executable suffix (empty on Unix)
    pub executable: &'static str,
    /// Library file name prefix (e.g., "lib")
    pub library_prefix: &'static str,
    /// Shared library suffix (e.g., ".so")
    pub library: &'static str,
}

impl Suffixes {
    /// File name of the shared library built from `base`.
    pub fn library_file_name(&self, base: &str) -> String {
        format!("{}{}{}", self.library_prefix, base, self.library)
    }

    /// File name of the executable built from `stem`.
    pub fn executable_file_name(&self, stem: &str) -> String {
        format!("{}{}", stem, self.executable)
    }

    /// File name of the object compiled from `stem`.
    pub fn object_file_name(&self, stem: &str) -> String {
        format!("{}{}", stem, self.object)
    }
}

/// How the release compile flags relate to the normal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseStrategy {
    /// Release flags are used on their own, dropping the normal set.
    ReplaceBase,
    /// Release flags are appended to the normal set.
    ExtendBase,
}

/// Flags for optional libraries, spliced in by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionalLibs {
    /// Compile flags needed when using GSL
    pub gsl_compile: FlagSet,
    /// Link flags for GSL and its BLAS
    pub gsl_link: FlagSet,
    /// Link flags for OpenGL
    pub gl_link: FlagSet,
    /// Link flags for zlib, where the platform links it explicitly
    pub zlib_link: Option<FlagSet>,
}

/// How to invoke pkg-config on a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PkgConfig {
    /// Program and leading arguments
    pub command: Vec<String>,
}

impl PkgConfig {
    pub fn new(program: &str) -> Self {
        PkgConfig {
            command: vec![program.to_string()],
        }
    }

    /// Arguments for a query over comma-separated `packages`, e.g.
    /// `pkg-config --cflags gtkmm-2.4`.
    pub fn query(&self, packages: &str, args: &[&str]) -> Vec<String> {
        let mut cmd = self.command.clone();
        cmd.extend(args.iter().map(|a| a.to_string()));
        cmd.extend(
            crate::core::defaults::pkg_config_packages(packages)
                .into_iter()
                .map(str::to_string),
        );
        cmd
    }
}

/// Everything needed to build on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    pub platform: PlatformId,
    pub suffixes: Suffixes,

    /// `g++ -c $flags$ $gtk$ $path$ $src$ -o $obj$`
    pub compile: CommandTemplate,
    /// Executable link step
    pub link_exe: CommandTemplate,
    /// Shared library link step
    pub link_lib: CommandTemplate,
    /// Resource compiler, Windows only
    pub resource: Option<CommandTemplate>,

    /// Base compile flags shared by every mode
    pub compile_flags: FlagSet,
    /// Optimization flags added for the normal build only
    pub optimization: FlagSet,
    pub link_exe_flags: FlagSet,
    pub link_lib_flags: FlagSet,

    /// Compile flags for the release build
    pub release_flags: FlagSet,
    pub release_strategy: ReleaseStrategy,

    pub libs: OptionalLibs,

    /// Prefix turning a library name into a link flag (`-l`)
    pub link_library_prefix: &'static str,
    pub pkg_config: PkgConfig,

    /// Candidate package-manager roots probed at startup, in priority order
    pub package_roots: Vec<PathBuf>,
}

impl PlatformProfile {
    /// Build the static profile for `platform`, before any probing.
    pub fn for_platform(platform: PlatformId) -> Self {
        match platform {
            PlatformId::Darwin => darwin::profile(),
            PlatformId::Linux => linux::profile(),
            PlatformId::Windows => windows::profile(),
        }
    }

    /// Add a package-manager root's include and library directories.
    ///
    /// Appends `-I<root>/include` to the compile flags and `-L<root>/lib` to
    /// both link flag sets. Called once during initialization.
    pub fn apply_package_root(&mut self, root: &Path) {
        let root = root.display();
        self.compile_flags.push(format!("-I{}/include", root));
        self.link_exe_flags.push(format!("-L{}/lib", root));
        self.link_lib_flags.push(format!("-L{}/lib", root));
    }

    /// Link flag for a library by name, e.g. `-lmrtrix`.
    pub fn link_library_flag(&self, name: &str) -> String {
        format!("{}{}", self.link_library_prefix, name)
    }

    /// Flag sets for `mode`.
    pub fn mode_flags(&self, mode: crate::core::mode::BuildMode) -> ModeFlags {
        overlay::apply(self, mode)
    }
}
