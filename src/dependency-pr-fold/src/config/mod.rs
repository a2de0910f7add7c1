//! Configuration loading.
//!
//! Settings come from an optional `fold.toml`:
//! ```toml
//! pretty-json = true
//! report = false
//! ```
//! Every key is optional. Command-line flags override file values.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::FoldSettings;
