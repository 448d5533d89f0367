//! Recording fakes for command tests.

use std::path::Path;
use std::sync::Arc;

use ferry_primitives::{BoxFutureLocal, FileUri};
use ferry_profiles::{ContextResolver, FerryConfig};
use parking_lot::Mutex;

use crate::error::CommandError;
use crate::host::{CommandEnv, Diagnostics, Prompt};

pub const SITE_CONFIG: &str = r#"
[[site]]
name = "web"
context = "site"
host = "example.com"
remote_path = "/srv/www"

[site.profiles.gamma]
host = "gamma.example.com"

[site.profiles.alpha]
host = "alpha.example.com"

[site.profiles.beta]
host = "beta.example.com"

[[site]]
name = "plain"
context = "plain"
host = "plain.example.com"
remote_path = "/srv/plain"
"#;

pub fn uri(path: &str) -> FileUri {
	FileUri::from_path(path).unwrap()
}

/// Shared ordered log of handler calls.
pub type CallLog = Arc<Mutex<Vec<String>>>;

#[derive(Default)]
pub struct RecordingDiagnostics {
	pub warnings: Mutex<Vec<String>>,
	pub errors: Mutex<Vec<String>>,
}

impl Diagnostics for RecordingDiagnostics {
	fn warn(&self, message: &str) {
		self.warnings.lock().push(message.to_string());
	}

	fn report_error(&self, error: &CommandError) {
		self.errors.lock().push(error.to_string());
	}
}

/// Answers every prompt with a fixed choice and records the questions.
pub struct ScriptedPrompt {
	answer: Option<&'static str>,
	pub asked: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedPrompt {
	pub fn answering(answer: Option<&'static str>) -> Self {
		Self {
			answer,
			asked: Mutex::new(Vec::new()),
		}
	}
}

impl Prompt for ScriptedPrompt {
	fn ask<'a>(&'a self, message: &'a str, buttons: &'a [&'a str]) -> BoxFutureLocal<'a, Option<String>> {
		self.asked
			.lock()
			.push((message.to_string(), buttons.iter().map(|b| b.to_string()).collect()));
		let answer = self.answer.map(str::to_string);
		Box::pin(async move { answer })
	}
}

/// Fakes plus a real resolver over [`SITE_CONFIG`] rooted at `/work`.
pub struct Harness {
	pub prompt: ScriptedPrompt,
	pub diagnostics: RecordingDiagnostics,
	pub contexts: Arc<ContextResolver>,
}

impl Harness {
	pub fn new() -> Self {
		Self::answering(Some("Yes"))
	}

	pub fn answering(answer: Option<&'static str>) -> Self {
		let config = FerryConfig::parse(SITE_CONFIG, Path::new("/work/ferry.toml")).unwrap();
		Self {
			prompt: ScriptedPrompt::answering(answer),
			diagnostics: RecordingDiagnostics::default(),
			contexts: Arc::new(ContextResolver::new(config)),
		}
	}

	pub fn env(&self) -> CommandEnv<'_> {
		CommandEnv {
			prompt: &self.prompt,
			diagnostics: &self.diagnostics,
			contexts: self.contexts.as_ref(),
		}
	}

	pub fn warnings(&self) -> Vec<String> {
		self.diagnostics.warnings.lock().clone()
	}

	pub fn errors(&self) -> Vec<String> {
		self.diagnostics.errors.lock().clone()
	}
}
