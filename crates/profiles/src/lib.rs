//! Site/profile configuration and file handler context construction.
//!
//! A [`ContextResolver`] turns a file locator into the
//! [`FileHandlerContext`] a transfer needs: which site the file belongs to,
//! which profile applies, and where the file lives remotely.

pub mod config;
pub mod context;
pub mod error;


pub use config::{CONFIG_FILE_NAME, FerryConfig, ProfileOverride, ResolvedSite, SiteConfig};
pub use context::{ContextResolver, FileHandlerContext, remote_path_for};
pub use error::{ProfileError, Result};
