//! Linux profile.

use crate::core::platform::PlatformId;
use crate::core::template::{CommandTemplate, FlagSet, Placeholder::*, Token};

use super::{OptionalLibs, PkgConfig, PlatformProfile, ReleaseStrategy, Suffixes};

pub fn profile() -> PlatformProfile {
    PlatformProfile {
        platform: PlatformId::Linux,
        suffixes: Suffixes {
            object: ".o",
            executable: "",
            library_prefix: "lib",
            library: ".so",
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
        resource: None,

        compile_flags: FlagSet::of(&[
            "-Wall",
            "-march=i686",
            "-fPIC",
            "-fno-strict-aliasing",
            "-DGL_GLEXT_PROTOTYPES",
            "-DUSE_TR1",
        ]),
        optimization: FlagSet::of(&["-O3"]),
        link_exe_flags: FlagSet::new(),
        link_lib_flags: FlagSet::new(),

        release_flags: FlagSet::of(&["-DNDEBUG"]),
        release_strategy: ReleaseStrategy::ReplaceBase,

        // ATLAS alternative: -lgsl -lcblas -latlas -llapack -lf77blas
        libs: OptionalLibs {
            gsl_compile: FlagSet::new(),
            gsl_link: FlagSet::of(&["-lgsl", "-lgslcblas"]),
            gl_link: FlagSet::new(),
            zlib_link: None,
        },

        link_library_prefix: "-l",
        pkg_config: PkgConfig::new("pkg-config"),

        package_roots: Vec::new(),
    }
}
