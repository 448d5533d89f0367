//! Collaborators a command run borrows from the host editor.

use ferry_primitives::{BoxFutureLocal, FileUri};
use ferry_profiles::{ContextResolver, FileHandlerContext};

use crate::error::CommandError;

/// Modal question with fixed answer buttons.
pub trait Prompt {
	/// Shows `message` with `buttons` and resolves to the chosen label, or
	/// `None` when the user dismissed the prompt.
	fn ask<'a>(&'a self, message: &'a str, buttons: &'a [&'a str]) -> BoxFutureLocal<'a, Option<String>>;
}

/// Shared sink for warnings and per-target failures.
///
/// Each call is one complete record; implementations must not fail.
pub trait Diagnostics {
	/// Records a warning line.
	fn warn(&self, message: &str);
	/// Records a failure for the user.
	fn report_error(&self, error: &CommandError);
}

/// Turns file locators into handler contexts.
pub trait ContextBuilder {
	/// Builds the one context used by single-context file commands.
	fn context_for(&self, uri: &FileUri) -> Result<FileHandlerContext, CommandError>;
	/// Builds every context a multi-context file command fans out to.
	fn all_contexts_for(&self, uri: &FileUri) -> Result<Vec<FileHandlerContext>, CommandError>;
}

impl ContextBuilder for ContextResolver {
	fn context_for(&self, uri: &FileUri) -> Result<FileHandlerContext, CommandError> {
		Ok(ContextResolver::context_for(self, uri)?)
	}

	fn all_contexts_for(&self, uri: &FileUri) -> Result<Vec<FileHandlerContext>, CommandError> {
		Ok(ContextResolver::all_contexts_for(self, uri)?)
	}
}

/// Borrowed collaborators for one command run.
#[derive(Clone, Copy)]
pub struct CommandEnv<'a> {
	pub prompt: &'a dyn Prompt,
	pub diagnostics: &'a dyn Diagnostics,
	pub contexts: &'a dyn ContextBuilder,
}

/// [`Diagnostics`] backed by `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
	fn warn(&self, message: &str) {
		tracing::warn!("{message}");
	}

	fn report_error(&self, error: &CommandError) {
		tracing::error!(error = %error, "command.target.failed");
	}
}
