use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading sites or building handler contexts.
#[derive(Error, Debug)]
pub enum ProfileError {
	/// The config file could not be read.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		/// Config file path.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
	/// The config file is not valid TOML or has unexpected fields.
	#[error("failed to parse {}: {source}", .path.display())]
	Parse {
		/// Config file path.
		path: PathBuf,
		/// Underlying TOML error.
		#[source]
		source: toml::de::Error,
	},
	/// A site entry is structurally valid but unusable.
	#[error("invalid site {site:?}: {reason}")]
	InvalidSite {
		/// Site display name.
		site: String,
		/// What is wrong with it.
		reason: String,
	},
	/// No configured site contains the file.
	#[error("no site configured for {}", .0.display())]
	NoSite(PathBuf),
	/// A site refers to a profile it does not declare.
	#[error("site {site:?} has no profile {profile:?}")]
	UnknownProfile {
		/// Site display name.
		site: String,
		/// Missing profile name.
		profile: String,
	},
	/// No site declares the requested profile.
	#[error("no site declares profile {0:?}")]
	NoSuchProfile(String),
}

/// Result alias for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
