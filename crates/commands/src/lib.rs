//! Command registration for the ferry sync extension.
//!
//! The host editor triggers commands by id through a [`CommandRegistry`].
//! Plain commands forward their arguments to a handler; file commands resolve
//! file targets, build a [`FileHandlerContext`] per target (or per profile of
//! each target) and run the file handler with per-target error isolation.
//!
//! # Example
//!
//! ```ignore
//! let upload = Command::file(
//!     CommandMeta::new("ferry.upload.file", "Upload File", "Upload the selected files"),
//!     |args| Box::pin(async move { Ok(TargetSource::Explorer.resolve(&args)) }),
//!     move |ctx| ops.upload(ctx),
//! );
//! registry.register(upload)?;
//! registry.invoke("ferry.upload.file", args, &env).await?;
//! ```

pub mod args;
pub mod builtins;
pub mod command;
pub mod error;
pub mod host;
pub mod meta;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use args::CommandArgs;
pub use builtins::{FileOps, TargetSource, builtin_commands, register_builtins};
pub use command::{Command, CommandKind, FileHandler, PlainHandler, RunOutcome, TargetOutcome, TargetResolver};
pub use error::{CommandError, CommandResult};
pub use ferry_profiles::FileHandlerContext;
pub use host::{CommandEnv, ContextBuilder, Diagnostics, Prompt, TracingDiagnostics};
pub use meta::{CommandFlags, CommandMeta};
pub use registry::CommandRegistry;
