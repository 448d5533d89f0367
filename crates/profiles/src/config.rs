//! `ferry.toml` loading.
//!
//! A config file holds any number of `[[site]]` blocks. Each site maps a local
//! context directory to a remote host and path, and may declare named profiles
//! that override those connection fields.

use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{ProfileError, Result};

/// Default config file name looked up by hosts.
pub const CONFIG_FILE_NAME: &str = "ferry.toml";

const DEFAULT_PORT: u16 = 22;

/// Parsed contents of a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FerryConfig {
	/// Configured sites, in file order.
	#[serde(default, rename = "site")]
	pub sites: Vec<SiteConfig>,
}

/// One `[[site]]` block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
	/// Optional display name; the host is used when absent.
	#[serde(default)]
	pub name: Option<String>,
	/// Local root synced by this site. Relative paths are anchored at the config file.
	#[serde(default = "default_context")]
	pub context: PathBuf,
	/// Remote host.
	pub host: String,
	/// Remote port.
	#[serde(default = "default_port")]
	pub port: u16,
	/// Remote login.
	#[serde(default)]
	pub username: Option<String>,
	/// Absolute remote directory matching [`SiteConfig::context`].
	pub remote_path: String,
	/// Profile used when no active profile applies to this site.
	#[serde(default)]
	pub default_profile: Option<String>,
	/// Named overrides, in declaration order.
	#[serde(default)]
	pub profiles: IndexMap<String, ProfileOverride>,
}

/// Connection fields a profile may override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileOverride {
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub remote_path: Option<String>,
}

/// A site with one profile (or none) applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSite {
	/// Site display name.
	pub name: String,
	/// Applied profile, if any.
	pub profile: Option<String>,
	/// Absolute local root.
	pub context: PathBuf,
	pub host: String,
	pub port: u16,
	pub username: Option<String>,
	/// Absolute remote directory matching `context`.
	pub remote_path: String,
}

fn default_context() -> PathBuf {
	PathBuf::from(".")
}

fn default_port() -> u16 {
	DEFAULT_PORT
}

impl FerryConfig {
	/// Reads and parses a config file.
	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::parse(&text, path)
	}

	/// Parses config text as if it had been read from `path`.
	///
	/// Site contexts are anchored at `path`'s parent directory and validated.
	pub fn parse(text: &str, path: &Path) -> Result<Self> {
		let mut config: Self = toml::from_str(text).map_err(|source| ProfileError::Parse {
			path: path.to_path_buf(),
			source,
		})?;

		let base = path.parent().unwrap_or_else(|| Path::new(""));
		for site in &mut config.sites {
			site.context = normalize(&base.join(&site.context));
			site.validate()?;
		}

		tracing::debug!(path = %path.display(), sites = config.sites.len(), "profiles.config.loaded");
		Ok(config)
	}
}

impl SiteConfig {
	/// Returns the display name.
	pub fn display_name(&self) -> &str {
		self.name.as_deref().unwrap_or(&self.host)
	}

	/// Applies `profile`, or returns the base fields when `None`.
	pub fn resolve(&self, profile: Option<&str>) -> Result<ResolvedSite> {
		let mut resolved = ResolvedSite {
			name: self.display_name().to_string(),
			profile: None,
			context: self.context.clone(),
			host: self.host.clone(),
			port: self.port,
			username: self.username.clone(),
			remote_path: self.remote_path.clone(),
		};

		let Some(profile) = profile else {
			return Ok(resolved);
		};
		let overrides = self.profiles.get(profile).ok_or_else(|| ProfileError::UnknownProfile {
			site: resolved.name.clone(),
			profile: profile.to_string(),
		})?;

		if let Some(host) = &overrides.host {
			resolved.host = host.clone();
		}
		if let Some(port) = overrides.port {
			resolved.port = port;
		}
		if overrides.username.is_some() {
			resolved.username = overrides.username.clone();
		}
		if let Some(remote_path) = &overrides.remote_path {
			resolved.remote_path = remote_path.clone();
		}
		resolved.profile = Some(profile.to_string());
		Ok(resolved)
	}

	fn validate(&self) -> Result<()> {
		let invalid = |reason: String| ProfileError::InvalidSite {
			site: self.display_name().to_string(),
			reason,
		};

		if self.host.is_empty() {
			return Err(invalid("host is empty".to_string()));
		}
		if !self.context.is_absolute() {
			return Err(invalid(format!("context {} is not absolute", self.context.display())));
		}
		if !self.remote_path.starts_with('/') {
			return Err(invalid(format!("remote_path {:?} is not absolute", self.remote_path)));
		}
		for (name, profile) in &self.profiles {
			if let Some(remote_path) = &profile.remote_path
				&& !remote_path.starts_with('/')
			{
				return Err(invalid(format!("profile {name:?} remote_path {remote_path:?} is not absolute")));
			}
		}
		if let Some(default) = &self.default_profile
			&& !self.profiles.contains_key(default)
		{
			return Err(ProfileError::UnknownProfile {
				site: self.display_name().to_string(),
				profile: default.clone(),
			});
		}
		Ok(())
	}
}

/// Lexically removes `.` and resolves `..` components.
fn normalize(path: &Path) -> PathBuf {
	let mut out = PathBuf::new();
	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				out.pop();
			}
			other => out.push(other.as_os_str()),
		}
	}
	out
}
