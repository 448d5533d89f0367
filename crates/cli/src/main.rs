//! `ferry` binary.
//!
//! Loads `ferry.toml`, registers the builtin sync commands and triggers one
//! of them the way an editor host would. Transfers are printed as a plan.

mod cli;
mod host;
#[cfg(test)]
mod tests;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use cli::{Cli, Command, RunArgs};
use ferry_commands::{CommandEnv, CommandRegistry, RunOutcome, TracingDiagnostics, register_builtins};
use ferry_profiles::{CONFIG_FILE_NAME, ContextResolver, FerryConfig};
use host::{PlanOps, StdinPrompt};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let cwd = std::env::current_dir().context("failed to read the working directory")?;
	let config = load_config(cli.config.as_deref(), &cwd)?;
	let profiles = Arc::new(ContextResolver::new(config));
	let ops = Arc::new(PlanOps::default());
	let registry = CommandRegistry::new();
	register_builtins(&registry, ops.clone(), Arc::clone(&profiles))?;

	match cli.command {
		Command::List => {
			for command in registry.all() {
				println!("{:<34} {:<10} {}", command.id(), command.kind().label(), command.name());
			}
			Ok(())
		}
		Command::Run(run) => run_command(&registry, &profiles, &ops, &run, &cwd).await,
	}
}

fn init_tracing(verbose: bool) {
	let default = if verbose { "debug" } else { "info" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn load_config(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<FerryConfig> {
	let path = explicit.map_or_else(|| cwd.join(CONFIG_FILE_NAME), |p| cwd.join(p));
	if explicit.is_none() && !path.exists() {
		tracing::warn!(path = %path.display(), "no config file, running without sites");
		return Ok(FerryConfig::default());
	}
	Ok(FerryConfig::load(&path)?)
}

async fn run_command(registry: &CommandRegistry, profiles: &ContextResolver, ops: &PlanOps, run: &RunArgs, cwd: &Path) -> anyhow::Result<()> {
	let args = run.to_command_args(cwd)?;
	if let Some(profile) = run.profile.as_deref() {
		profiles.set_active_profile(Some(profile))?;
	}

	let prompt = StdinPrompt { assume_yes: run.yes };
	let env = CommandEnv {
		prompt: &prompt,
		diagnostics: &TracingDiagnostics,
		contexts: profiles,
	};
	let outcome = registry.invoke(&run.id, args, &env).await?;

	for line in ops.plan() {
		println!("{line}");
	}

	match &outcome {
		RunOutcome::Completed | RunOutcome::Settled(_) if outcome.failure_count() == 0 => Ok(()),
		RunOutcome::Aborted => {
			eprintln!("{}: aborted", run.id);
			Ok(())
		}
		RunOutcome::Cancelled => {
			eprintln!("{}: nothing to do", run.id);
			Ok(())
		}
		_ => bail!("{}: {} of {} targets failed", run.id, failed_targets(&outcome), outcome.targets().len()),
	}
}

fn failed_targets(outcome: &RunOutcome) -> usize {
	outcome.targets().iter().filter(|t| !t.is_ok()).count()
}
