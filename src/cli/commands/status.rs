//! Status command - show cache location and state

use crate::cli::open_cache;
use crate::config::Config;
use crate::error::XedResult;
use console::{style, Emoji};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[WARN] ");

/// Execute the status command
pub fn execute(config: &Config) -> XedResult<()> {
    let cache = open_cache(config);

    println!("{}", style("Core Extension Cache").bold().cyan());
    println!();

    let Some(folder) = cache.folder() else {
        println!(
            "  {} {} - no permanent directory configured",
            WARN,
            style("Disabled").yellow()
        );
        return Ok(());
    };

    println!("  {} {}", CHECK, style("Enabled").green());
    println!("  {:<12} {}", "Folder:", folder.display());
    println!("  {:<12} {}", "Key scheme:", cache.key_scheme());
    println!("  {:<12} {}", "Entries:", cache.entry_count()?);

    Ok(())
}
