use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Documentation staging helper
///
/// Mirror source directories into a static-site docs tree and generate per-directory file indexes
#[derive(Parser, Debug)]
#[command(name = "docstage")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preview changes without executing (dry-run)
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore docstage.toml and use built-in defaults
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Override source root (default: .)
    #[arg(long, global = true, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Override docs root (default: ./docs)
    #[arg(long, global = true, value_name = "PATH")]
    pub docs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mirror source directories and Markdown files into the docs root
    Mirror,

    /// Write a file_list.md into every docs subdirectory
    Index {
        /// Directory git is run from
        #[arg(long, value_name = "PATH", default_value = ".")]
        git_dir: PathBuf,
    },

    /// Mirror, then generate indexes
    Build {
        /// Directory git is run from
        #[arg(long, value_name = "PATH", default_value = ".")]
        git_dir: PathBuf,
    },

    /// Show the effective configuration
    Config,
}
