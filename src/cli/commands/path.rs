//! Path command - show the cache file for a descriptor URL

use crate::cli::args::PathArgs;
use crate::cli::open_cache;
use crate::config::Config;
use crate::error::XedResult;
use crate::extension::parse_descriptor_url;
use console::style;

/// Execute the path command
pub fn execute(args: PathArgs, config: &Config) -> XedResult<()> {
    let url = parse_descriptor_url(&args.url)?;
    let cache = open_cache(config);

    match cache.file_for(&url) {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", style("Cache disabled (no permanent directory)").yellow()),
    }

    Ok(())
}
