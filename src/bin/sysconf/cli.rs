//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// sysconf - platform build configuration for a native C++ project
#[derive(Parser)]
#[command(name = "sysconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved configuration for a platform and build mode
    Show(ShowArgs),

    /// Print the argument list for one command template
    Command(CommandArgs),

    /// List supported platforms and build modes
    Platforms,

    /// Check that the tools a platform uses are on PATH
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Platform and mode selection, shared by several commands.
#[derive(Args, Clone, Default)]
pub struct SelectArgs {
    /// Target platform (darwin, linux, windows; defaults to config, then host)
    #[arg(short, long, env = "SYSCONF_PLATFORM")]
    pub platform: Option<String>,

    /// Build mode (normal, debug, profile, release; defaults to config, then normal)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Skip the package-root probe
    #[arg(long)]
    pub no_probe: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TemplateArg {
    /// Compile one source file
    Compile,
    /// Link an executable
    Link,
    /// Link the shared library
    LinkLib,
    /// Compile a resource script (windows only)
    Resource,
}

#[derive(Args)]
pub struct CommandArgs {
    /// Template to render
    #[arg(value_enum)]
    pub template: TemplateArg,

    #[command(flatten)]
    pub select: SelectArgs,

    /// Bind a placeholder, e.g. `--set src=main.cpp` (repeat to add values;
    /// an empty value binds nothing)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub bindings: Vec<String>,

    /// Emit the arguments as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub select: SelectArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
