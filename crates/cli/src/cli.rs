use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use ferry_commands::CommandArgs;
use ferry_primitives::FileUri;

#[derive(Parser, Debug)]
#[command(name = "ferry")]
#[command(about = "Run file sync commands against configured sites")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to ./ferry.toml)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// List registered commands
	List,
	/// Trigger a command by id
	Run(RunArgs),
}

/// Arguments of `ferry run`.
#[derive(Args, Debug)]
pub struct RunArgs {
	/// Command id (e.g. ferry.upload.file)
	pub id: String,

	/// Files the command is invoked on; several become a selection
	pub paths: Vec<PathBuf>,

	/// File treated as open in the focused editor
	#[arg(long, value_name = "PATH")]
	pub active: Option<PathBuf>,

	/// Activate this profile before running
	#[arg(long, short = 'p')]
	pub profile: Option<String>,

	/// Answer "Yes" to confirmation prompts
	#[arg(long, short = 'y')]
	pub yes: bool,

	/// Extra string arguments passed to the command
	#[arg(last = true)]
	pub extra: Vec<String>,
}

impl RunArgs {
	/// Builds trigger arguments, anchoring relative paths at `cwd`.
	pub fn to_command_args(&self, cwd: &Path) -> anyhow::Result<CommandArgs> {
		let to_uri = |path: &PathBuf| -> anyhow::Result<FileUri> { Ok(FileUri::from_path(cwd.join(path))?) };

		let mut uris = self.paths.iter().map(to_uri).collect::<anyhow::Result<Vec<_>>>()?;
		let mut args = CommandArgs {
			active_file: self.active.as_ref().map(to_uri).transpose()?,
			extra: self.extra.clone(),
			..CommandArgs::default()
		};
		if uris.len() == 1 {
			args.target = uris.pop();
		} else {
			args.selection = uris;
		}
		Ok(args)
	}
}
