//! Windows (MinGW) profile.

use crate::core::platform::PlatformId;
use crate::core::template::{CommandTemplate, FlagSet, Placeholder::*, Token};

use super::{OptionalLibs, PkgConfig, PlatformProfile, ReleaseStrategy, Suffixes};

pub fn profile() -> PlatformProfile {
    PlatformProfile {
        platform: PlatformId::Windows,
        suffixes: Suffixes {
            object: ".o",
            executable: ".exe",
            library_prefix: "",
            library: ".dll",
        },

        compile: CommandTemplate::new([
            Token::from("g++"),
            Token::from("-c"),
            Flags.into(),
            Gtk.into(),
            Path.into(),
            Src.into(),
            Token::from("-o"),
            Obj.into(),
        ]),
        link_exe: CommandTemplate::new([
            Token::from("g++"),
            Flags.into(),
            Path.into(),
            Obj.into(),
            Mrtrix.into(),
            Gsl.into(),
            Gtk.into(),
            Lz.into(),
            Token::from("-o"),
            Bin.into(),
        ]),
        link_lib: CommandTemplate::new([
            Token::from("g++"),
            Token::from("-shared"),
            Flags.into(),
            Obj.into(),
            Token::from("-o"),
            Lib.into(),
        ]),
        resource: Some(CommandTemplate::new([
            Token::from("windres"),
            Src.into(),
            Token::from("-o"),
            Obj.into(),
        ])),

        compile_flags: FlagSet::of(&[
            "-Wall",
            "-march=i686",
            "-fno-strict-aliasing",
            "-DGL_GLEXT_PROTOTYPES",
            "-DUSE_TR1",
        ]),
        optimization: FlagSet::of(&["-O2"]),
        link_exe_flags: FlagSet::new(),
        link_lib_flags: FlagSet::new(),

        release_flags: FlagSet::of(&["-DNDEBUG"]),
        release_strategy: ReleaseStrategy::ExtendBase,

        libs: OptionalLibs {
            gsl_compile: FlagSet::of(&["-IC:/MinGW/msys/1.0/local/include", "-DGSL_DLL"]),
            gsl_link: FlagSet::of(&["-lgsl", "-lgslcblas"]),
            gl_link: FlagSet::of(&["-lglu32", "-mwindows"]),
            zlib_link: Some(FlagSet::of(&["-lz"])),
        },

        link_library_prefix: "-l",
        pkg_config: PkgConfig::new("pkg-config"),

        package_roots: Vec::new(),
    }
}
