use ferry_primitives::FileUri;
use futures::future::join_all;

use super::{FileHandler, RunOutcome, TargetOutcome, TargetResolver};
use crate::args::CommandArgs;
use crate::error::CommandError;
use crate::host::{CommandEnv, Prompt};
use crate::meta::CommandMeta;

/// Question asked before a command fans out to every profile.
pub const CONFIRM_ALL_PROFILES_MESSAGE: &str = "Are you sure you want to upload to all profiles?";
/// Affirmative answer; anything else aborts.
pub const CONFIRM_YES: &str = "Yes";
/// Negative answer.
pub const CONFIRM_NO: &str = "No";

/// How many contexts a target expands into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Expansion {
	Single,
	PerProfile,
}

pub(super) async fn run(
	meta: &CommandMeta,
	args: CommandArgs,
	env: &CommandEnv<'_>,
	resolve: &TargetResolver,
	handle: &FileHandler,
	expansion: Expansion,
) -> Result<RunOutcome, CommandError> {
	if meta.confirms_all_profiles() && !confirm_all_profiles(env.prompt).await {
		tracing::debug!(command = meta.id, "command.aborted");
		return Ok(RunOutcome::Aborted);
	}

	let target = resolve(args).await?;
	if target.is_empty() {
		env.diagnostics
			.warn(&format!("The \"{}\" command was canceled because of missing targets.", meta.name));
		return Ok(RunOutcome::Cancelled);
	}

	let targets = target.into_vec();
	tracing::debug!(command = meta.id, targets = targets.len(), ?expansion, "command.fan_out");

	let pending = targets.into_iter().map(|uri| settle_target(uri, env, handle, expansion));
	let outcomes = join_all(pending).await;

	tracing::debug!(
		command = meta.id,
		failed = outcomes.iter().filter(|o| !o.is_ok()).count(),
		"command.settled"
	);
	Ok(RunOutcome::Settled(outcomes))
}

async fn confirm_all_profiles(prompt: &dyn Prompt) -> bool {
	let answer = prompt.ask(CONFIRM_ALL_PROFILES_MESSAGE, &[CONFIRM_YES, CONFIRM_NO]).await;
	answer.as_deref() == Some(CONFIRM_YES)
}

/// Runs every context of one target and reports each failure.
///
/// Never fails: the target's errors stay inside its [`TargetOutcome`].
async fn settle_target(uri: FileUri, env: &CommandEnv<'_>, handle: &FileHandler, expansion: Expansion) -> TargetOutcome {
	let contexts = match expansion {
		Expansion::Single => env.contexts.context_for(&uri).map(|ctx| vec![ctx]),
		Expansion::PerProfile => env.contexts.all_contexts_for(&uri),
	};

	let results = match contexts {
		Ok(contexts) => join_all(contexts.into_iter().map(|ctx| handle(ctx))).await,
		Err(error) => vec![Err(error)],
	};

	for error in results.iter().filter_map(|r| r.as_ref().err()) {
		env.diagnostics.report_error(error);
	}

	TargetOutcome { target: uri, results }
}
