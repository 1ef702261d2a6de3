//! Core extension descriptors
//!
//! A core extension is metadata bundled with the running application.
//! Resolving it is expensive, so the resolved [`ExtensionDescriptor`] is
//! persisted and reloaded on the next start.

pub mod serializer;

pub use serializer::{ExtensionSerializer, JsonSerializer};

use crate::error::{XedError, XedResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use url::Url;

/// Where a [`CoreExtension`] value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Produced by a full resolution
    Resolved,
    /// Reconstructed from the on-disk cache
    Cached,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved => write!(f, "resolved"),
            Self::Cached => write!(f, "cached"),
        }
    }
}

/// Identifier of the in-memory repository owning an extension
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef(String);

impl RepositoryRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl Default for RepositoryRef {
    fn default() -> Self {
        Self::new("core")
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dependency on another extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionDependency {
    /// Extension id
    pub id: String,

    /// Version constraint, e.g. `[1.0,2.0)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

/// Serializable content of an extension descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionDescriptor {
    /// Extension id, e.g. `org.example:platform-core`
    pub id: String,

    /// Extension version
    pub version: String,

    /// Packaging type (jar, xar, ...)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,

    /// Other ids this extension also provides
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ExtensionDependency>,

    /// Free-form properties
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl ExtensionDescriptor {
    /// Minimal descriptor with only an id and a version
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            kind: None,
            name: None,
            summary: None,
            description: None,
            website: None,
            authors: Vec::new(),
            licenses: Vec::new(),
            features: Vec::new(),
            dependencies: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Read a descriptor from a JSON file on disk
    pub fn from_file(path: &Path) -> XedResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| XedError::io(format!("reading descriptor {}", path.display()), e))?;

        serde_json::from_str(&content).map_err(|e| XedError::DescriptorRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// A descriptor together with its source URL, owner and provenance
#[derive(Debug, Clone)]
pub struct CoreExtension {
    descriptor: ExtensionDescriptor,
    descriptor_url: Url,
    repository: RepositoryRef,
    provenance: Provenance,
}

impl CoreExtension {
    pub fn new(
        repository: RepositoryRef,
        descriptor_url: Url,
        descriptor: ExtensionDescriptor,
        provenance: Provenance,
    ) -> Self {
        Self {
            descriptor,
            descriptor_url,
            repository,
            provenance,
        }
    }

    /// Extension produced by a full resolution
    pub fn resolved(
        repository: RepositoryRef,
        descriptor_url: Url,
        descriptor: ExtensionDescriptor,
    ) -> Self {
        Self::new(repository, descriptor_url, descriptor, Provenance::Resolved)
    }

    pub fn descriptor(&self) -> &ExtensionDescriptor {
        &self.descriptor
    }

    pub fn descriptor_url(&self) -> &Url {
        &self.descriptor_url
    }

    pub fn repository(&self) -> &RepositoryRef {
        &self.repository
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Whether this value was loaded from the on-disk cache
    pub fn is_cached(&self) -> bool {
        self.provenance == Provenance::Cached
    }

    pub fn into_descriptor(self) -> ExtensionDescriptor {
        self.descriptor
    }
}

impl fmt::Display for CoreExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.descriptor.id, self.descriptor.version)
    }
}

/// Parse a descriptor URL, accepting plain filesystem paths as `file:` URLs
pub fn parse_descriptor_url(input: &str) -> XedResult<Url> {
    match Url::parse(input) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = std::path::absolute(input)
                .map_err(|e| XedError::io(format!("resolving path {}", input), e))?;
            Url::from_file_path(&path).map_err(|()| XedError::InvalidUrl {
                url: input.to_string(),
                reason: "not an absolute path".to_string(),
            })
        }
        Err(e) => Err(XedError::InvalidUrl {
            url: input.to_string(),
            reason: e.to_string(),
        }),
    }
}
