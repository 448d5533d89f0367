//! Core types shared by the ferry crates: file locators, resolved targets and
//! boxed future aliases.

/// Async future aliases.
pub mod future;
/// Resolved command targets.
pub mod target;
/// File locators.
pub mod uri;

#[cfg(test)]
mod tests;

pub use future::BoxFutureLocal;
pub use target::FileTarget;
pub use uri::{FileUri, UriError};
