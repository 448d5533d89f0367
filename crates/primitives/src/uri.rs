//! Opaque file locators handed to commands by the host.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use url::Url;

/// Errors produced while building a [`FileUri`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
	/// The string is not a valid URL.
	#[error("invalid uri {0:?}")]
	Parse(String),
	/// The URL does not use the `file` scheme.
	#[error("unsupported uri scheme {scheme:?} in {uri}")]
	Scheme {
		/// Offending scheme.
		scheme: String,
		/// Full URI text.
		uri: String,
	},
	/// The path is relative and cannot be expressed as a `file:` URL.
	#[error("path is not absolute: {0}")]
	Relative(PathBuf),
}

/// Absolute `file:` locator for a local resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileUri(Url);

impl FileUri {
	/// Builds a locator from an absolute filesystem path.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UriError> {
		let path = path.as_ref();
		Url::from_file_path(path)
			.map(Self)
			.map_err(|()| UriError::Relative(path.to_path_buf()))
	}

	/// Returns the local filesystem path this locator points at.
	pub fn to_path(&self) -> PathBuf {
		// Scheme is checked on construction, so only a foreign host can fail here.
		self.0
			.to_file_path()
			.unwrap_or_else(|()| PathBuf::from(self.0.path()))
	}

	/// Returns the last path segment, if any.
	pub fn file_name(&self) -> Option<&str> {
		self.0.path_segments()?.next_back().filter(|s| !s.is_empty())
	}

	/// Returns the underlying URL.
	pub fn as_url(&self) -> &Url {
		&self.0
	}

	/// Returns the URI text.
	pub fn as_str(&self) -> &str {
		self.0.as_str()
	}
}

impl TryFrom<Url> for FileUri {
	type Error = UriError;

	fn try_from(url: Url) -> Result<Self, Self::Error> {
		if url.scheme() != "file" {
			return Err(UriError::Scheme {
				scheme: url.scheme().to_string(),
				uri: url.to_string(),
			});
		}
		Ok(Self(url))
	}
}

impl FromStr for FileUri {
	type Err = UriError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let url = Url::parse(s).map_err(|_| UriError::Parse(s.to_string()))?;
		Self::try_from(url)
	}
}

impl fmt::Display for FileUri {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0.as_str())
	}
}
