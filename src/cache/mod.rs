//! Persistent cache of resolved core extension descriptors
//!
//! Resolving the descriptors bundled with the application is slow, so the
//! result is written to disk and read back on the next start.
//!
//! # Layout
//!
//! ```text
//! <permanent dir>/cache/extension/core/<key>.xed
//! ```
//!
//! One file per descriptor URL. Entries are overwritten in place and never
//! expire.
//!
//! # Failure Model
//!
//! | Situation | Store | Lookup |
//! |-----------|-------|--------|
//! | No permanent directory | no-op | miss |
//! | I/O or serialization error | returned to caller | logged, miss |
//! | Entry missing | - | miss |

pub mod key;
pub mod store;

pub use key::KeyScheme;
pub use store::{CoreExtensionCache, CACHE_SUBDIR};
