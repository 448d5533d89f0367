use std::path::{Path, PathBuf};
use std::sync::Arc;

use ferry_primitives::FileUri;
use parking_lot::RwLock;

use crate::config::{FerryConfig, ResolvedSite, SiteConfig};
use crate::error::{ProfileError, Result};

/// Everything a file handler needs to act on one target for one site profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandlerContext {
	/// Locator the host supplied.
	pub target: FileUri,
	/// Local path of the target.
	pub local_path: PathBuf,
	/// Remote path the target maps to under `site`.
	pub remote_path: String,
	/// Site with the selected profile applied.
	pub site: Arc<ResolvedSite>,
}

/// Builds handler contexts from file locators using the configured sites.
///
/// Holds the globally active profile, which applies to every site declaring a
/// profile of that name.
#[derive(Debug, Default)]
pub struct ContextResolver {
	sites: Vec<SiteConfig>,
	active_profile: RwLock<Option<String>>,
}

impl ContextResolver {
	/// Creates a resolver over the sites of `config`.
	pub fn new(config: FerryConfig) -> Self {
		Self {
			sites: config.sites,
			active_profile: RwLock::new(None),
		}
	}

	/// Returns the configured sites.
	pub fn sites(&self) -> &[SiteConfig] {
		&self.sites
	}

	/// Returns the active profile name.
	pub fn active_profile(&self) -> Option<String> {
		self.active_profile.read().clone()
	}

	/// Switches the active profile; `None` clears it.
	///
	/// Fails when no site declares `profile`.
	pub fn set_active_profile(&self, profile: Option<&str>) -> Result<()> {
		if let Some(name) = profile
			&& !self.sites.iter().any(|site| site.profiles.contains_key(name))
		{
			return Err(ProfileError::NoSuchProfile(name.to_string()));
		}
		tracing::info!(profile = profile.unwrap_or("<none>"), "profiles.active.changed");
		*self.active_profile.write() = profile.map(str::to_string);
		Ok(())
	}

	/// Returns the site whose context is the deepest ancestor of `path`.
	pub fn site_for(&self, path: &Path) -> Result<&SiteConfig> {
		self.sites
			.iter()
			.filter(|site| path.starts_with(&site.context))
			.max_by_key(|site| site.context.components().count())
			.ok_or_else(|| ProfileError::NoSite(path.to_path_buf()))
	}

	/// Builds the single context for `uri`.
	///
	/// The active profile applies when the site declares it, then the site's
	/// default profile, then the base site fields.
	pub fn context_for(&self, uri: &FileUri) -> Result<FileHandlerContext> {
		let local_path = uri.to_path();
		let site = self.site_for(&local_path)?;
		let active = self.active_profile();
		let profile = active
			.as_deref()
			.filter(|name| site.profiles.contains_key(*name))
			.or(site.default_profile.as_deref());
		let resolved = site.resolve(profile)?;
		Ok(build(uri, local_path, resolved))
	}

	/// Builds one context per profile the site of `uri` declares, in
	/// declaration order. A site without profiles yields its base context.
	pub fn all_contexts_for(&self, uri: &FileUri) -> Result<Vec<FileHandlerContext>> {
		let local_path = uri.to_path();
		let site = self.site_for(&local_path)?;
		if site.profiles.is_empty() {
			return Ok(vec![build(uri, local_path, site.resolve(None)?)]);
		}
		site.profiles
			.keys()
			.map(|name| site.resolve(Some(name)).map(|resolved| build(uri, local_path.clone(), resolved)))
			.collect()
	}
}

fn build(uri: &FileUri, local_path: PathBuf, site: ResolvedSite) -> FileHandlerContext {
	let remote_path = remote_path_for(&local_path, &site.context, &site.remote_path);
	FileHandlerContext {
		target: uri.clone(),
		local_path,
		remote_path,
		site: Arc::new(site),
	}
}

/// Maps `local` under `context` onto `remote_root` using `/` separators.
pub fn remote_path_for(local: &Path, context: &Path, remote_root: &str) -> String {
	let relative = local.strip_prefix(context).unwrap_or(local);
	let segments: Vec<_> = relative
		.components()
		.map(|c| c.as_os_str().to_string_lossy())
		.collect();
	if segments.is_empty() {
		return remote_root.to_string();
	}
	format!("{}/{}", remote_root.trim_end_matches('/'), segments.join("/"))
}
