//! Command-line interface

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};

use crate::cache::CoreExtensionCache;
use crate::config::Config;
use crate::environment::ConfiguredEnvironment;
use crate::extension::JsonSerializer;

/// Build the cache described by `config`
pub fn open_cache(config: &Config) -> CoreExtensionCache {
    let environment = ConfiguredEnvironment::from_config(config);
    let serializer = if config.cache.pretty {
        JsonSerializer::pretty()
    } else {
        JsonSerializer::new()
    };

    CoreExtensionCache::with_key_scheme(&environment, serializer, config.cache.key_scheme)
}
