//! Descriptor serialization
//!
//! The cache treats the byte format as opaque and only talks to the
//! [`ExtensionSerializer`] trait.

use super::{CoreExtension, ExtensionDescriptor, Provenance, RepositoryRef};
use crate::error::XedResult;
use std::io::{Read, Write};
use url::Url;

/// Writes and reads extension descriptors
pub trait ExtensionSerializer {
    /// Write the descriptor of `extension` to `out`
    fn save(&self, extension: &CoreExtension, out: &mut dyn Write) -> XedResult<()>;

    /// Read a descriptor from `input` and build an extension owned by
    /// `repository`, located at `url`, tagged with `provenance`
    fn load(
        &self,
        repository: &RepositoryRef,
        url: &Url,
        provenance: Provenance,
        input: &mut dyn Read,
    ) -> XedResult<CoreExtension>;
}

/// JSON descriptor format
///
/// Only the descriptor content is written; URL and repository come from
/// the caller on load.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ExtensionSerializer for JsonSerializer {
    fn save(&self, extension: &CoreExtension, out: &mut dyn Write) -> XedResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(out, extension.descriptor())?;
        } else {
            serde_json::to_writer(out, extension.descriptor())?;
        }
        Ok(())
    }

    fn load(
        &self,
        repository: &RepositoryRef,
        url: &Url,
        provenance: Provenance,
        input: &mut dyn Read,
    ) -> XedResult<CoreExtension> {
        let descriptor: ExtensionDescriptor = serde_json::from_reader(input)?;
        Ok(CoreExtension::new(
            repository.clone(),
            url.clone(),
            descriptor,
            provenance,
        ))
    }
}
