//! Terminal implementations of the command collaborators.

use std::io::Write;

use ferry_commands::{CommandResult, FileHandlerContext, FileOps, Prompt};
use ferry_primitives::BoxFutureLocal;
use parking_lot::Mutex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Asks questions on stdin, or answers the first button when `assume_yes`.
pub struct StdinPrompt {
	pub assume_yes: bool,
}

impl Prompt for StdinPrompt {
	fn ask<'a>(&'a self, message: &'a str, buttons: &'a [&'a str]) -> BoxFutureLocal<'a, Option<String>> {
		Box::pin(async move {
			if self.assume_yes {
				return buttons.first().map(|b| b.to_string());
			}
			{
				let mut stderr = std::io::stderr().lock();
				let _ = write!(stderr, "{message} [{}] ", buttons.join("/"));
				let _ = stderr.flush();
			}

			read_answer(BufReader::new(tokio::io::stdin()), buttons).await
		})
	}
}

/// Reads one line from `reader` and matches it against `buttons`.
pub async fn read_answer<R: AsyncBufRead + Unpin>(mut reader: R, buttons: &[&str]) -> Option<String> {
	let mut line = String::new();
	reader.read_line(&mut line).await.ok()?;
	match_button(line.trim(), buttons)
}

/// Matches typed input against button labels, case-insensitively, accepting
/// an unambiguous prefix.
pub fn match_button(input: &str, buttons: &[&str]) -> Option<String> {
	if input.is_empty() {
		return None;
	}
	let input = input.to_lowercase();
	let mut matches = buttons.iter().filter(|b| b.to_lowercase().starts_with(&input));
	match (matches.next(), matches.next()) {
		(Some(button), None) => Some(button.to_string()),
		_ => buttons.iter().find(|b| b.to_lowercase() == input).map(|b| b.to_string()),
	}
}

/// Records the transfers that would happen instead of performing them.
#[derive(Debug, Default)]
pub struct PlanOps {
	plan: Mutex<Vec<String>>,
}

impl PlanOps {
	/// Returns the recorded transfer lines in call order.
	pub fn plan(&self) -> Vec<String> {
		self.plan.lock().clone()
	}

	fn record(&self, verb: &str, ctx: &FileHandlerContext) -> BoxFutureLocal<'static, CommandResult> {
		self.plan.lock().push(describe(verb, ctx));
		tracing::debug!(verb, local = %ctx.local_path.display(), remote = %ctx.remote_path, "plan.transfer");
		Box::pin(async { Ok(()) })
	}
}

impl FileOps for PlanOps {
	fn upload(&self, ctx: FileHandlerContext) -> BoxFutureLocal<'static, CommandResult> {
		self.record("upload", &ctx)
	}

	fn download(&self, ctx: FileHandlerContext) -> BoxFutureLocal<'static, CommandResult> {
		self.record("download", &ctx)
	}
}

/// One-line description of a transfer.
pub fn describe(verb: &str, ctx: &FileHandlerContext) -> String {
	let site = &ctx.site;
	let user = site.username.as_deref().map(|u| format!("{u}@")).unwrap_or_default();
	let profile = site.profile.as_deref().map(|p| format!(" [{p}]")).unwrap_or_default();
	format!(
		"{verb} {} {} {user}{}:{}:{}{profile}",
		ctx.local_path.display(),
		if verb == "download" { "<-" } else { "->" },
		site.host,
		site.port,
		ctx.remote_path,
	)
}
