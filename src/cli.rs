//! Command-line interface definition.
use std::path::PathBuf;

use clap::Parser;

/// Version string baked in by the build script, falling back to the crate version.
pub const VERSION: &str = match option_env!("SHELLRC_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Top-level CLI entry point for the shell init compiler.
#[derive(Parser, Debug)]
#[command(
    name = "shellrc",
    about = "Compile declarative TOML into a shell init script",
    version = VERSION
)]
pub struct Cli {
    /// Config files to merge, in order (later files extend earlier ones)
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Target shell (bash, zsh, fish)
    #[arg(short, long)]
    pub shell: String,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
