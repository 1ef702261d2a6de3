//! CLI command implementations

pub mod config;
pub mod get;
pub mod path;
pub mod put;
pub mod status;

pub use config::execute as config;
pub use get::execute as get;
pub use path::execute as path;
pub use put::execute as put;
pub use status::execute as status;
