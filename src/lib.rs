//! xedcache - core extension descriptor cache
//!
//! Persists resolved core extension descriptors on disk so they do not
//! have to be resolved again at the next start.
//!
//! ```rust,ignore
//! use xedcache::{CoreExtensionCache, FixedEnvironment, JsonSerializer, RepositoryRef};
//!
//! let cache = CoreExtensionCache::new(&FixedEnvironment::new("/var/lib/app"), JsonSerializer::new());
//! if let Some(ext) = cache.get_extension(&RepositoryRef::default(), &url) {
//!     assert!(ext.is_cached());
//! }
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod extension;
pub mod resolve;

pub use cache::{CoreExtensionCache, KeyScheme};
pub use environment::{ConfiguredEnvironment, Environment, FixedEnvironment};
pub use error::{XedError, XedResult};
pub use extension::{
    CoreExtension, ExtensionDescriptor, ExtensionSerializer, JsonSerializer, Provenance,
    RepositoryRef,
};
pub use resolve::CoreExtensionResolver;
