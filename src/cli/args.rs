//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// xedcache - core extension descriptor cache
///
/// Inspects and fills the on-disk cache of resolved core extension
/// descriptors.
#[derive(Parser, Debug)]
#[command(name = "xedcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "XEDCACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the cache file used for a descriptor URL
    Path(PathArgs),

    /// Look up a cached descriptor
    Get(GetArgs),

    /// Store a descriptor in the cache
    Put(PutArgs),

    /// Show cache location and state
    Status,

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the path command
#[derive(Parser, Debug)]
pub struct PathArgs {
    /// Descriptor URL (plain paths are read as file: URLs)
    pub url: String,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Descriptor URL (plain paths are read as file: URLs)
    pub url: String,

    /// Repository to attach to the loaded extension
    #[arg(short, long, default_value = "core")]
    pub repository: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the put command
#[derive(Parser, Debug)]
pub struct PutArgs {
    /// JSON file containing the descriptor
    pub file: PathBuf,

    /// Descriptor URL to store it under
    #[arg(short, long)]
    pub url: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for descriptors
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Table,
    /// JSON descriptor
    Json,
    /// Only id and version
    Plain,
}
