//! Standard sync commands.
//!
//! File commands delegate the transfer itself to a host-supplied [`FileOps`].

use std::sync::Arc;

use ferry_primitives::{BoxFutureLocal, FileTarget, FileUri};
use ferry_profiles::{ContextResolver, FileHandlerContext};

use crate::args::CommandArgs;
use crate::command::Command;
use crate::error::{CommandError, CommandResult};
use crate::meta::{CommandFlags, CommandMeta};
use crate::registry::CommandRegistry;


/// Builtin command identifiers.
pub mod ids {
	pub const UPLOAD_FILE: &str = "ferry.upload.file";
	pub const UPLOAD_FOLDER: &str = "ferry.upload.folder";
	pub const UPLOAD_ACTIVE_FILE: &str = "ferry.upload.activeFile";
	pub const UPLOAD_FILE_TO_ALL_PROFILES: &str = "ferry.upload.fileToAllProfiles";
	pub const UPLOAD_FOLDER_TO_ALL_PROFILES: &str = "ferry.upload.folderToAllProfiles";
	pub const DOWNLOAD_FILE: &str = "ferry.download.file";
	pub const DOWNLOAD_FOLDER: &str = "ferry.download.folder";
	pub const DOWNLOAD_ACTIVE_FILE: &str = "ferry.download.activeFile";
	pub const SET_PROFILE: &str = "ferry.setProfile";
	pub const LIST_PROFILES: &str = "ferry.listProfiles";
}

/// Transfer backend the builtin file commands delegate to.
pub trait FileOps: Send + Sync {
	/// Copies the context's local file to its remote path.
	fn upload(&self, ctx: FileHandlerContext) -> BoxFutureLocal<'static, CommandResult>;
	/// Copies the context's remote path to its local file.
	fn download(&self, ctx: FileHandlerContext) -> BoxFutureLocal<'static, CommandResult>;
}

/// Where a builtin file command takes its targets from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
	/// Explorer selection, then the explorer item, then the active file.
	Explorer,
	/// As [`TargetSource::Explorer`], but the active file falls back to its folder.
	ExplorerFolder,
	/// The active file only.
	ActiveFile,
}

impl TargetSource {
	/// Resolves targets from trigger arguments.
	pub fn resolve(self, args: &CommandArgs) -> FileTarget {
		if matches!(self, Self::Explorer | Self::ExplorerFolder) {
			if !args.selection.is_empty() {
				return FileTarget::Many(args.selection.clone());
			}
			if let Some(target) = &args.target {
				return FileTarget::One(target.clone());
			}
		}

		let Some(active) = &args.active_file else {
			return FileTarget::None;
		};
		if self == Self::ExplorerFolder {
			return active
				.to_path()
				.parent()
				.and_then(|dir| FileUri::from_path(dir).ok())
				.into();
		}
		FileTarget::One(active.clone())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
	Upload,
	Download,
}

struct FileCommandDef {
	meta: CommandMeta,
	source: TargetSource,
	transfer: Transfer,
	per_profile: bool,
}

const fn file_def(
	id: &'static str,
	name: &'static str,
	description: &'static str,
	source: TargetSource,
	transfer: Transfer,
) -> FileCommandDef {
	FileCommandDef {
		meta: CommandMeta::new(id, name, description),
		source,
		transfer,
		per_profile: false,
	}
}

const fn all_profiles_def(id: &'static str, name: &'static str, description: &'static str, source: TargetSource) -> FileCommandDef {
	FileCommandDef {
		meta: CommandMeta::new(id, name, description).with_flags(CommandFlags::CONFIRM_ALL_PROFILES),
		source,
		transfer: Transfer::Upload,
		per_profile: true,
	}
}

const FILE_COMMANDS: &[FileCommandDef] = &[
	file_def(ids::UPLOAD_FILE, "Upload File", "Upload the selected files", TargetSource::Explorer, Transfer::Upload),
	file_def(ids::UPLOAD_FOLDER, "Upload Folder", "Upload the selected folders", TargetSource::ExplorerFolder, Transfer::Upload),
	file_def(ids::UPLOAD_ACTIVE_FILE, "Upload Active File", "Upload the file in the focused editor", TargetSource::ActiveFile, Transfer::Upload),
	all_profiles_def(
		ids::UPLOAD_FILE_TO_ALL_PROFILES,
		"Upload File to All Profiles",
		"Upload the selected files to every profile of their site",
		TargetSource::Explorer,
	),
	all_profiles_def(
		ids::UPLOAD_FOLDER_TO_ALL_PROFILES,
		"Upload Folder to All Profiles",
		"Upload the selected folders to every profile of their site",
		TargetSource::ExplorerFolder,
	),
	file_def(ids::DOWNLOAD_FILE, "Download File", "Download the selected files", TargetSource::Explorer, Transfer::Download),
	file_def(ids::DOWNLOAD_FOLDER, "Download Folder", "Download the selected folders", TargetSource::ExplorerFolder, Transfer::Download),
	file_def(ids::DOWNLOAD_ACTIVE_FILE, "Download Active File", "Download the file in the focused editor", TargetSource::ActiveFile, Transfer::Download),
];

const SET_PROFILE: CommandMeta = CommandMeta::new(ids::SET_PROFILE, "Set Profile", "Switch the active profile; no argument clears it");
const LIST_PROFILES: CommandMeta = CommandMeta::new(ids::LIST_PROFILES, "List Profiles", "Log every site and its profiles");

/// Builds every builtin command.
pub fn builtin_commands(ops: Arc<dyn FileOps>, profiles: Arc<ContextResolver>) -> Vec<Command> {
	let mut commands: Vec<_> = FILE_COMMANDS.iter().map(|def| file_command(def, Arc::clone(&ops))).collect();
	commands.push(set_profile_command(Arc::clone(&profiles)));
	commands.push(list_profiles_command(profiles));
	commands
}

/// Registers every builtin command into `registry`.
pub fn register_builtins(registry: &CommandRegistry, ops: Arc<dyn FileOps>, profiles: Arc<ContextResolver>) -> Result<(), CommandError> {
	for command in builtin_commands(ops, profiles) {
		registry.register(command)?;
	}
	Ok(())
}

fn file_command(def: &FileCommandDef, ops: Arc<dyn FileOps>) -> Command {
	let source = def.source;
	let transfer = def.transfer;
	let resolve = move |args: CommandArgs| -> BoxFutureLocal<'static, Result<FileTarget, CommandError>> {
		let target = source.resolve(&args);
		Box::pin(async move { Ok(target) })
	};
	let handle = move |ctx: FileHandlerContext| match transfer {
		Transfer::Upload => ops.upload(ctx),
		Transfer::Download => ops.download(ctx),
	};

	if def.per_profile {
		Command::file_multi(def.meta, resolve, handle)
	} else {
		Command::file(def.meta, resolve, handle)
	}
}

fn set_profile_command(profiles: Arc<ContextResolver>) -> Command {
	Command::plain(SET_PROFILE, move |meta, args| {
		let result = match args.extra.as_slice() {
			[] => profiles.set_active_profile(None).map_err(CommandError::from),
			[name] => profiles
				.set_active_profile(Some(name.as_str()).filter(|name| !name.is_empty()))
				.map_err(CommandError::from),
			extra => Err(CommandError::InvalidArgument(format!(
				"{} takes at most one profile name, got {}",
				meta.id,
				extra.len()
			))),
		};
		Box::pin(async move { result })
	})
}

fn list_profiles_command(profiles: Arc<ContextResolver>) -> Command {
	Command::plain(LIST_PROFILES, move |meta, _args| {
		let active = profiles.active_profile();
		for site in profiles.sites() {
			let names: Vec<&str> = site.profiles.keys().map(String::as_str).collect();
			tracing::info!(
				command = meta.id,
				site = site.display_name(),
				context = %site.context.display(),
				profiles = ?names,
				active = active.as_deref().filter(|a| names.contains(a)),
				"site"
			);
		}
		Box::pin(async { Ok(()) })
	})
}
