use ferry_primitives::FileUri;

/// Trigger-time arguments the host passes to a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
	/// Item the command was invoked on (e.g. the explorer entry under the cursor).
	pub target: Option<FileUri>,
	/// Multi-selection at trigger time, in host order.
	pub selection: Vec<FileUri>,
	/// File open in the focused editor.
	pub active_file: Option<FileUri>,
	/// Free-form string arguments.
	pub extra: Vec<String>,
}

impl CommandArgs {
	/// Arguments pointing at a single item.
	pub fn with_target(target: FileUri) -> Self {
		Self {
			target: Some(target),
			..Self::default()
		}
	}

	/// Arguments carrying a multi-selection.
	pub fn with_selection(selection: Vec<FileUri>) -> Self {
		Self {
			selection,
			..Self::default()
		}
	}

	/// Arguments carrying only string arguments.
	pub fn with_extra<I, S>(extra: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			extra: extra.into_iter().map(Into::into).collect(),
			..Self::default()
		}
	}
}
