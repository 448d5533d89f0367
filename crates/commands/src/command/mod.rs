//! Runnable commands.
//!
//! A [`Command`] pairs immutable [`CommandMeta`] with one of three behaviors:
//!
//! - [`CommandKind::Plain`] forwards the trigger arguments to a handler.
//! - [`CommandKind::File`] resolves file targets and runs the file handler once
//!   per target.
//! - [`CommandKind::FileMulti`] resolves file targets and runs the file handler
//!   once per profile context of each target.
//!
//! File commands isolate failures per target: every target is attempted, every
//! failure is reported, and the run settles only after all targets have.

use std::fmt;
use std::sync::Arc;

use ferry_primitives::{BoxFutureLocal, FileTarget, FileUri};
use ferry_profiles::FileHandlerContext;

use crate::args::CommandArgs;
use crate::error::{CommandError, CommandResult};
use crate::host::CommandEnv;
use crate::meta::{CommandFlags, CommandMeta};

mod fanout;

pub use fanout::{CONFIRM_ALL_PROFILES_MESSAGE, CONFIRM_NO, CONFIRM_YES};

/// Handler for plain commands. Receives the command's own metadata.
pub type PlainHandler = Arc<dyn Fn(CommandMeta, CommandArgs) -> BoxFutureLocal<'static, CommandResult> + Send + Sync>;

/// Resolves the files a command acts on from its trigger arguments.
pub type TargetResolver = Arc<dyn Fn(CommandArgs) -> BoxFutureLocal<'static, Result<FileTarget, CommandError>> + Send + Sync>;

/// Performs the file operation for one context.
pub type FileHandler = Arc<dyn Fn(FileHandlerContext) -> BoxFutureLocal<'static, CommandResult> + Send + Sync>;

/// Behavior of a command.
#[derive(Clone)]
pub enum CommandKind {
	/// Forwards arguments to the handler.
	Plain(PlainHandler),
	/// One context per target.
	File { resolve: TargetResolver, handle: FileHandler },
	/// One context per profile of each target.
	FileMulti { resolve: TargetResolver, handle: FileHandler },
}

impl CommandKind {
	/// Short label used in logs and listings.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Plain(_) => "plain",
			Self::File { .. } => "file",
			Self::FileMulti { .. } => "file-multi",
		}
	}
}

/// A registrable unit of host-triggered behavior.
#[derive(Clone)]
pub struct Command {
	meta: CommandMeta,
	kind: CommandKind,
}

impl fmt::Debug for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Command")
			.field("meta", &self.meta)
			.field("kind", &self.kind.label())
			.finish()
	}
}

impl Command {
	/// Builds a command that forwards its arguments to `handler`.
	pub fn plain<H>(meta: CommandMeta, handler: H) -> Self
	where
		H: Fn(CommandMeta, CommandArgs) -> BoxFutureLocal<'static, CommandResult> + Send + Sync + 'static,
	{
		Self {
			meta,
			kind: CommandKind::Plain(Arc::new(handler)),
		}
	}

	/// Builds a command running `handle` once per resolved target.
	pub fn file<R, H>(meta: CommandMeta, resolve: R, handle: H) -> Self
	where
		R: Fn(CommandArgs) -> BoxFutureLocal<'static, Result<FileTarget, CommandError>> + Send + Sync + 'static,
		H: Fn(FileHandlerContext) -> BoxFutureLocal<'static, CommandResult> + Send + Sync + 'static,
	{
		Self {
			meta,
			kind: CommandKind::File {
				resolve: Arc::new(resolve),
				handle: Arc::new(handle),
			},
		}
	}

	/// Builds a command running `handle` once per profile context of every
	/// resolved target.
	pub fn file_multi<R, H>(meta: CommandMeta, resolve: R, handle: H) -> Self
	where
		R: Fn(CommandArgs) -> BoxFutureLocal<'static, Result<FileTarget, CommandError>> + Send + Sync + 'static,
		H: Fn(FileHandlerContext) -> BoxFutureLocal<'static, CommandResult> + Send + Sync + 'static,
	{
		Self {
			meta,
			kind: CommandKind::FileMulti {
				resolve: Arc::new(resolve),
				handle: Arc::new(handle),
			},
		}
	}

	/// Returns the metadata.
	pub fn meta(&self) -> &CommandMeta {
		&self.meta
	}

	/// Returns the unique identifier.
	pub fn id(&self) -> &'static str {
		self.meta.id
	}

	/// Returns the human-readable name.
	pub fn name(&self) -> &'static str {
		self.meta.name
	}

	/// Returns behavior flags.
	pub fn flags(&self) -> CommandFlags {
		self.meta.flags
	}

	/// Returns the behavior.
	pub fn kind(&self) -> &CommandKind {
		&self.kind
	}

	/// Runs the command to a terminal state.
	///
	/// Errors from a plain handler or a target resolver are returned as-is.
	/// Per-target failures of file commands are reported through
	/// `env.diagnostics` and collected in [`RunOutcome::Settled`] instead.
	pub async fn run(&self, args: CommandArgs, env: &CommandEnv<'_>) -> Result<RunOutcome, CommandError> {
		tracing::debug!(command = self.meta.id, kind = self.kind.label(), "command.run");
		match &self.kind {
			CommandKind::Plain(handler) => {
				handler(self.meta, args).await?;
				Ok(RunOutcome::Completed)
			}
			CommandKind::File { resolve, handle } => fanout::run(&self.meta, args, env, resolve, handle, fanout::Expansion::Single).await,
			CommandKind::FileMulti { resolve, handle } => fanout::run(&self.meta, args, env, resolve, handle, fanout::Expansion::PerProfile).await,
		}
	}
}

/// Terminal state of a command run.
#[derive(Debug)]
pub enum RunOutcome {
	/// A plain command's handler finished.
	Completed,
	/// The user declined the confirmation prompt.
	Aborted,
	/// Target resolution produced nothing.
	Cancelled,
	/// Every target was attempted; outcomes are in target order.
	Settled(Vec<TargetOutcome>),
}

impl RunOutcome {
	/// Returns the per-target outcomes of a settled run.
	pub fn targets(&self) -> &[TargetOutcome] {
		match self {
			Self::Settled(targets) => targets,
			_ => &[],
		}
	}

	/// Counts failed handler invocations (or context builds) across targets.
	pub fn failure_count(&self) -> usize {
		self.targets().iter().map(|t| t.failures().count()).sum()
	}
}

/// What happened to one target of a file command.
#[derive(Debug)]
pub struct TargetOutcome {
	/// The target.
	pub target: FileUri,
	/// One result per context, or a single error when no context could be built.
	pub results: Vec<CommandResult>,
}

impl TargetOutcome {
	/// Returns the failures recorded for this target.
	pub fn failures(&self) -> impl Iterator<Item = &CommandError> {
		self.results.iter().filter_map(|r| r.as_ref().err())
	}

	/// Returns `true` when every context succeeded.
	pub fn is_ok(&self) -> bool {
		self.results.iter().all(Result::is_ok)
	}
}
