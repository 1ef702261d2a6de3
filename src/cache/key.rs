//! Cache key derivation
//!
//! Maps a descriptor URL to the file name of its cache entry. The key is
//! computed over the canonical string form of the URL, so two spellings
//! that `url` normalizes to the same string share an entry.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use url::Url;

/// Extension of every cache entry file
pub const ENTRY_EXTENSION: &str = "xed";

/// How cache file names are derived from descriptor URLs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyScheme {
    /// Hex SHA-256 of the URL
    #[default]
    Sha256,
    /// Decimal 32-bit polynomial string hash of the URL
    ///
    /// Collides easily; two URLs with the same hash share one entry and
    /// lookups return whichever descriptor was stored last. Kept to read
    /// cache folders written with this naming.
    StringHash,
}

impl KeyScheme {
    /// Key for `url`, without the file extension
    pub fn key(&self, url: &Url) -> String {
        match self {
            Self::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(url.as_str().as_bytes());
                hex::encode(hasher.finalize())
            }
            Self::StringHash => string_hash(url.as_str()).to_string(),
        }
    }

    /// Cache entry file name for `url`
    pub fn file_name(&self, url: &Url) -> String {
        format!("{}.{}", self.key(url), ENTRY_EXTENSION)
    }
}

impl fmt::Display for KeyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sha256 => "sha256",
            Self::StringHash => "string-hash",
        };
        write!(f, "{}", name)
    }
}

/// `h = 31 * h + c` over UTF-16 code units, wrapping at 32 bits
fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
