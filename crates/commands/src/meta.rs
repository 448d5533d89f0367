use bitflags::bitflags;

bitflags! {
	/// Behavior switches fixed at registration time.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CommandFlags: u32 {
		/// Ask the user before fanning out to every profile.
		const CONFIRM_ALL_PROFILES = 1 << 0;
	}
}

/// Immutable identity of a registered command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandMeta {
	/// Stable identifier, unique within a registry (e.g. `ferry.upload.file`).
	pub id: &'static str,
	/// Human-readable label.
	pub name: &'static str,
	/// Help text.
	pub description: &'static str,
	/// Behavior switches.
	pub flags: CommandFlags,
}

impl CommandMeta {
	/// Creates metadata with no flags set.
	pub const fn new(id: &'static str, name: &'static str, description: &'static str) -> Self {
		Self {
			id,
			name,
			description,
			flags: CommandFlags::empty(),
		}
	}

	/// Returns a copy with `flags` set.
	pub const fn with_flags(self, flags: CommandFlags) -> Self {
		Self { flags, ..self }
	}

	/// Returns whether the command must confirm before touching every profile.
	pub const fn confirms_all_profiles(&self) -> bool {
		self.flags.contains(CommandFlags::CONFIRM_ALL_PROFILES)
	}
}
