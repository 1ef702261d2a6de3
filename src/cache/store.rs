//! On-disk store for resolved core extensions

use super::key::{KeyScheme, ENTRY_EXTENSION};
use crate::environment::Environment;
use crate::error::{XedError, XedResult};
use crate::extension::{CoreExtension, ExtensionSerializer, Provenance, RepositoryRef};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

/// Cache folder relative to the permanent directory
pub const CACHE_SUBDIR: &str = "cache/extension/core";

/// Stores resolved core extensions so they need not be resolved again at
/// the next restart
///
/// Without a permanent directory the cache is disabled for its whole
/// lifetime: stores do nothing and lookups always miss.
pub struct CoreExtensionCache {
    folder: Option<PathBuf>,
    key_scheme: KeyScheme,
    serializer: Box<dyn ExtensionSerializer + Send + Sync>,
}

impl CoreExtensionCache {
    /// Create a cache using the default key scheme
    pub fn new(
        environment: &dyn Environment,
        serializer: impl ExtensionSerializer + Send + Sync + 'static,
    ) -> Self {
        Self::with_key_scheme(environment, serializer, KeyScheme::default())
    }

    /// Create a cache with an explicit key scheme
    pub fn with_key_scheme(
        environment: &dyn Environment,
        serializer: impl ExtensionSerializer + Send + Sync + 'static,
        key_scheme: KeyScheme,
    ) -> Self {
        let folder = environment
            .permanent_directory()
            .map(|dir| dir.join(CACHE_SUBDIR));

        match &folder {
            Some(dir) => debug!("Core extension cache at {}", dir.display()),
            None => debug!("No permanent directory, core extension cache disabled"),
        }

        Self {
            folder,
            key_scheme,
            serializer: Box::new(serializer),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.folder.is_some()
    }

    /// Cache folder, `None` when disabled
    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn key_scheme(&self) -> KeyScheme {
        self.key_scheme
    }

    /// Path of the cache entry for `url`, `None` when disabled
    pub fn file_for(&self, url: &Url) -> Option<PathBuf> {
        self.folder
            .as_ref()
            .map(|folder| folder.join(self.key_scheme.file_name(url)))
    }

    /// Persist `extension` under its descriptor URL
    ///
    /// Overwrites any previous entry for the same key. Failures are
    /// returned, never swallowed.
    pub fn store(&self, extension: &CoreExtension) -> XedResult<()> {
        let Some(path) = self.file_for(extension.descriptor_url()) else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                XedError::io(format!("creating cache directory {}", parent.display()), e)
            })?;
        }

        let file = File::create(&path)
            .map_err(|e| XedError::io(format!("writing cache file {}", path.display()), e))?;
        let mut writer = BufWriter::new(file);
        self.serializer.save(extension, &mut writer)?;
        writer
            .flush()
            .map_err(|e| XedError::io(format!("writing cache file {}", path.display()), e))?;

        debug!(
            "Cached core extension {} from {} in {}",
            extension,
            extension.descriptor_url(),
            path.display()
        );
        Ok(())
    }

    /// Load the cached extension for `url`, owned by `repository`
    ///
    /// Unreadable or corrupt entries are logged and reported as a miss.
    pub fn get_extension(&self, repository: &RepositoryRef, url: &Url) -> Option<CoreExtension> {
        let path = self.file_for(url)?;

        if !path.exists() {
            return None;
        }

        match self.read_entry(&path, repository, url) {
            Ok(extension) => {
                debug!("Loaded core extension {} from cache", extension);
                Some(extension)
            }
            Err(e) => {
                warn!(
                    "Failed to parse cached core extension {}: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    /// Number of entries currently in the cache folder
    pub fn entry_count(&self) -> XedResult<usize> {
        let Some(folder) = self.folder() else {
            return Ok(0);
        };

        if !folder.exists() {
            return Ok(0);
        }

        let entries = fs::read_dir(folder)
            .map_err(|e| XedError::io(format!("reading cache directory {}", folder.display()), e))?;

        let mut count = 0;
        for entry in entries {
            let entry = entry.map_err(|e| XedError::io("reading cache entry", e))?;
            if entry
                .path()
                .extension()
                .is_some_and(|ext| ext == ENTRY_EXTENSION)
            {
                count += 1;
            }
        }
        Ok(count)
    }

    fn read_entry(
        &self,
        path: &Path,
        repository: &RepositoryRef,
        url: &Url,
    ) -> XedResult<CoreExtension> {
        let file = File::open(path)
            .map_err(|e| XedError::io(format!("reading cache file {}", path.display()), e))?;
        let mut reader = BufReader::new(file);

        self.serializer
            .load(repository, url, Provenance::Cached, &mut reader)
    }
}
