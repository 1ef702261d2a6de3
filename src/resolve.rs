//! Cache-first resolution of core extensions
//!
//! Looks in the [`CoreExtensionCache`] before falling back to the caller's
//! resolution routine, and stores what that routine produces.

use crate::cache::CoreExtensionCache;
use crate::error::XedResult;
use crate::extension::{CoreExtension, ExtensionDescriptor, RepositoryRef};
use tracing::{debug, warn};
use url::Url;

/// Resolves core extensions for one repository through the cache
pub struct CoreExtensionResolver<'a> {
    cache: &'a CoreExtensionCache,
    repository: RepositoryRef,
}

impl<'a> CoreExtensionResolver<'a> {
    pub fn new(cache: &'a CoreExtensionCache, repository: RepositoryRef) -> Self {
        Self { cache, repository }
    }

    /// Return the extension described at `url`
    ///
    /// On a cache hit `resolve` is not called. On a miss its result is
    /// stored; failing to store is logged and does not fail resolution.
    pub fn resolve<F>(&self, url: &Url, resolve: F) -> XedResult<CoreExtension>
    where
        F: FnOnce(&Url) -> XedResult<ExtensionDescriptor>,
    {
        if let Some(extension) = self.cache.get_extension(&self.repository, url) {
            return Ok(extension);
        }

        debug!("Resolving core extension from {}", url);
        let descriptor = resolve(url)?;
        let extension = CoreExtension::resolved(self.repository.clone(), url.clone(), descriptor);

        if let Err(e) = self.cache.store(&extension) {
            warn!("Failed to cache core extension {}: {}", extension, e);
        }

        Ok(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FixedEnvironment;
    use crate::error::XedError;
    use crate::extension::JsonSerializer;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn url() -> Url {
        Url::parse("file:///opt/app/META-INF/extension.xed").unwrap()
    }

    #[test]
    fn miss_resolves_and_stores() {
        let temp = TempDir::new().unwrap();
        let cache = CoreExtensionCache::new(&FixedEnvironment::new(temp.path()), JsonSerializer::new());
        let resolver = CoreExtensionResolver::new(&cache, RepositoryRef::default());

        let ext = resolver
            .resolve(&url(), |_| Ok(ExtensionDescriptor::new("a", "1")))
            .unwrap();

        assert!(!ext.is_cached());
        assert!(cache.file_for(&url()).unwrap().exists());
    }

    #[test]
    fn hit_skips_resolution() {
        let temp = TempDir::new().unwrap();
        let cache = CoreExtensionCache::new(&FixedEnvironment::new(temp.path()), JsonSerializer::new());
        let resolver = CoreExtensionResolver::new(&cache, RepositoryRef::default());
        let calls = Cell::new(0);

        for _ in 0..2 {
            resolver
                .resolve(&url(), |_| {
                    calls.set(calls.get() + 1);
                    Ok(ExtensionDescriptor::new("a", "1"))
                })
                .unwrap();
        }

        let ext = resolver
            .resolve(&url(), |_| panic!("should be served from cache"))
            .unwrap();
        assert!(ext.is_cached());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn resolution_error_propagates() {
        let temp = TempDir::new().unwrap();
        let cache = CoreExtensionCache::new(&FixedEnvironment::new(temp.path()), JsonSerializer::new());
        let resolver = CoreExtensionResolver::new(&cache, RepositoryRef::default());

        let err = resolver
            .resolve(&url(), |_| Err(XedError::Internal("broken".to_string())))
            .unwrap_err();
        assert!(matches!(err, XedError::Internal(_)));
        assert!(!cache.file_for(&url()).unwrap().exists());
    }

    #[test]
    fn store_failure_does_not_fail_resolution() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let cache = CoreExtensionCache::new(&FixedEnvironment::new(&blocker), JsonSerializer::new());
        let resolver = CoreExtensionResolver::new(&cache, RepositoryRef::default());

        let ext = resolver
            .resolve(&url(), |_| Ok(ExtensionDescriptor::new("a", "1")))
            .unwrap();
        assert_eq!(ext.descriptor().id, "a");
    }

    #[test]
    fn disabled_cache_always_resolves() {
        let cache = CoreExtensionCache::new(&FixedEnvironment::none(), JsonSerializer::new());
        let resolver = CoreExtensionResolver::new(&cache, RepositoryRef::default());

        for _ in 0..2 {
            let ext = resolver
                .resolve(&url(), |_| Ok(ExtensionDescriptor::new("a", "1")))
                .unwrap();
            assert!(!ext.is_cached());
        }
    }
}
