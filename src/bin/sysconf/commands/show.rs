//! `sysconf show` command

use anyhow::{Context, Result};

use crate::cli::ShowArgs;
use sysconf::core::defaults::{LIB_NAME, PKGCONFIG_GL, PKGCONFIG_GLIB, PKGCONFIG_GTK};
use sysconf::FlagSet;

pub fn execute(args: ShowArgs) -> Result<()> {
    let config = super::resolve(&args.select)?;

    if args.json {
        let json = serde_json::to_string_pretty(&config)
            .context("failed to serialize configuration")?;
        println!("{}", json);
        return Ok(());
    }

    let suffixes = &config.suffixes;
    println!("# {} ({})", config.platform, config.mode);
    println!("  object suffix:     {:?}", suffixes.object);
    println!("  executable suffix: {:?}", suffixes.executable);
    println!("  library:           {}", suffixes.library_file_name(LIB_NAME));
    match &config.package_root {
        Some(root) => println!("  package root:      {}", root.display()),
        None => println!("  package root:      none"),
    }

    println!();
    println!("# Templates:");
    println!("  compile:  {}", config.compile);
    println!("  link:     {}", config.link_exe);
    println!("  link-lib: {}", config.link_lib);
    if let Ok(resource) = config.resource_compile() {
        println!("  resource: {}", resource);
    }

    println!();
    println!("# Optional libraries:");
    print_flags("gsl compile", &config.libs.gsl_compile);
    print_flags("gsl link", &config.libs.gsl_link);
    print_flags("gl link", &config.libs.gl_link);
    if let Some(zlib) = &config.libs.zlib_link {
        print_flags("zlib link", zlib);
    }
    println!(
        "  project library: {}",
        config.link_library_flag(LIB_NAME)
    );

    println!();
    println!("# pkg-config:");
    for (label, packages) in [
        ("gtk", PKGCONFIG_GTK),
        ("glib", PKGCONFIG_GLIB),
        ("gl", PKGCONFIG_GL),
    ] {
        println!(
            "  {}: {}",
            label,
            config.pkg_config.query(packages, &["--cflags", "--libs"]).join(" ")
        );
    }

    Ok(())
}

fn print_flags(label: &str, flags: &FlagSet) {
    if flags.is_empty() {
        println!("  {}: (none)", label);
    } else {
        println!("  {}: {}", label, flags.as_slice().join(" "));
    }
}
