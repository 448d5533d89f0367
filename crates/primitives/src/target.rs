use crate::FileUri;

/// Result of resolving the files a command should act on.
///
/// [`FileTarget::None`] and an empty [`FileTarget::Many`] both mean the user
/// backed out of picking anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FileTarget {
	/// Nothing to act on.
	#[default]
	None,
	/// A single locator.
	One(FileUri),
	/// Several locators, in the order the host supplied them.
	Many(Vec<FileUri>),
}

impl FileTarget {
	/// Returns `true` when there is nothing to act on.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::None => true,
			Self::One(_) => false,
			Self::Many(uris) => uris.is_empty(),
		}
	}

	/// Returns the number of locators.
	pub fn len(&self) -> usize {
		match self {
			Self::None => 0,
			Self::One(_) => 1,
			Self::Many(uris) => uris.len(),
		}
	}

	/// Normalizes into a list, wrapping a single locator.
	pub fn into_vec(self) -> Vec<FileUri> {
		match self {
			Self::None => Vec::new(),
			Self::One(uri) => vec![uri],
			Self::Many(uris) => uris,
		}
	}
}

impl From<FileUri> for FileTarget {
	fn from(uri: FileUri) -> Self {
		Self::One(uri)
	}
}

impl From<Option<FileUri>> for FileTarget {
	fn from(uri: Option<FileUri>) -> Self {
		uri.map_or(Self::None, Self::One)
	}
}

impl From<Vec<FileUri>> for FileTarget {
	fn from(uris: Vec<FileUri>) -> Self {
		Self::Many(uris)
	}
}
