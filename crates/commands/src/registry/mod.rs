//! Id-keyed command registry the host dispatches through.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::args::CommandArgs;
use crate::command::{Command, RunOutcome};
use crate::error::CommandError;
use crate::host::CommandEnv;


/// Registered commands keyed by id.
#[derive(Debug, Default)]
pub struct CommandRegistry {
	commands: RwLock<FxHashMap<&'static str, Arc<Command>>>,
}

impl CommandRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `command`.
	///
	/// Fails with [`CommandError::Duplicate`] if its id is already taken; the
	/// existing command is kept.
	pub fn register(&self, command: Command) -> Result<Arc<Command>, CommandError> {
		let mut commands = self.commands.write();
		let id = command.id();
		if commands.contains_key(id) {
			return Err(CommandError::Duplicate(id));
		}
		let command = Arc::new(command);
		commands.insert(id, Arc::clone(&command));
		tracing::debug!(command = id, kind = command.kind().label(), "registry.command.registered");
		Ok(command)
	}

	/// Removes a command. Returns `true` if it was registered.
	pub fn unregister(&self, id: &str) -> bool {
		self.commands.write().remove(id).is_some()
	}

	/// Looks up a command by id.
	pub fn get(&self, id: &str) -> Option<Arc<Command>> {
		self.commands.read().get(id).cloned()
	}

	/// Returns the number of registered commands.
	pub fn len(&self) -> usize {
		self.commands.read().len()
	}

	/// Returns `true` if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.commands.read().is_empty()
	}

	/// Returns all commands sorted by name, then id.
	pub fn all(&self) -> Vec<Arc<Command>> {
		let mut all: Vec<_> = self.commands.read().values().cloned().collect();
		all.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
		all
	}

	/// Looks up `id` and runs it.
	pub async fn invoke(&self, id: &str, args: CommandArgs, env: &CommandEnv<'_>) -> Result<RunOutcome, CommandError> {
		// Clone out so the lock is released before the run awaits.
		let command = self.get(id).ok_or_else(|| CommandError::NotFound(id.to_string()))?;
		command.run(args, env).await
	}
}
