use ferry_profiles::ProfileError;
use thiserror::Error;

/// Errors that can occur while registering or running commands.
#[derive(Error, Debug)]
pub enum CommandError {
	/// General command failure with message.
	#[error("{0}")]
	Failed(String),
	/// An argument was provided but invalid.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// Command id was not found in the registry.
	#[error("command not found: {0}")]
	NotFound(String),
	/// A command with the same id is already registered.
	#[error("duplicate command id: {0}")]
	Duplicate(&'static str),
	/// Site or profile lookup failed while building a handler context.
	#[error(transparent)]
	Profile(#[from] ProfileError),
	/// Catch-all for other errors.
	#[error("{0}")]
	Other(String),
}

/// Simplified result type for command handlers.
pub type CommandResult = Result<(), CommandError>;
