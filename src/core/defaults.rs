//! Platform-independent naming constants shared by every profile.

/// Directory holding built executables.
pub const BIN_DIR: &str = "bin";
/// Directory holding one source file per command.
pub const CMD_DIR: &str = "cmd";
/// Directory holding the shared project library sources.
pub const LIB_DIR: &str = "lib";
/// Directory holding miscellaneous sources (GUI, etc.).
pub const MISC_DIR: &str = "src";
/// Documentation directory.
pub const DOC_DIR: &str = "doc";
/// Developer files directory.
pub const DEV_DIR: &str = "dev";

/// Header whose presence toggles OpenGL support.
pub const GL_HEADER: &str = "src/use_gl.h";

/// C++ source file extension.
pub const CPP_SUFFIX: &str = ".cpp";
/// Header file extension.
pub const H_SUFFIX: &str = ".h";

/// Base name of the produced library (`libmrtrix.so`, `mrtrix.dll`, ...).
pub const LIB_NAME: &str = "mrtrix";

/// pkg-config identifier for the GUI toolkit.
pub const PKGCONFIG_GTK: &str = "gtkmm-2.4";
/// pkg-config identifiers for the supporting base toolkit.
pub const PKGCONFIG_GLIB: &str = "glibmm-2.4,gthread-2.0";
/// pkg-config identifier for the OpenGL extension bindings.
pub const PKGCONFIG_GL: &str = "gtkglext-1.0";

/// Compiled icon resource linked into Windows executables.
pub const ICON: &str = "icons/icon.o";
/// Source of [`ICON`].
pub const ICON_DEP: &str = "icons/icon.rc";

/// Split a comma-separated pkg-config identifier into package names.
pub fn pkg_config_packages(ids: &str) -> Vec<&str> {
    ids.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
