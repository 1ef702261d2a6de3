//! Put command - store a descriptor in the cache

use crate::cli::args::PutArgs;
use crate::cli::open_cache;
use crate::config::Config;
use crate::error::{XedError, XedResult};
use crate::extension::{parse_descriptor_url, CoreExtension, ExtensionDescriptor, RepositoryRef};
use console::style;
use tracing::info;

/// Execute the put command
pub fn execute(args: PutArgs, config: &Config) -> XedResult<()> {
    let url = parse_descriptor_url(&args.url)?;
    let cache = open_cache(config);

    // store() is a silent no-op here
    if !cache.is_enabled() {
        return Err(XedError::CacheDisabled);
    }

    let descriptor = ExtensionDescriptor::from_file(&args.file)?;
    let extension = CoreExtension::resolved(RepositoryRef::default(), url.clone(), descriptor);
    cache.store(&extension)?;

    info!("Stored {} for {}", extension, url);
    if let Some(path) = cache.file_for(&url) {
        println!(
            "{} Stored {} in {}",
            style("✓").green(),
            style(&extension).bold(),
            path.display()
        );
    }

    Ok(())
}
