use std::path::PathBuf;

use pretty_assertions::assert_eq;

use super::*;

fn uri(path: &str) -> FileUri {
	FileUri::from_path(path).unwrap()
}

#[test]
fn test_uri_from_absolute_path() {
	let u = uri("/srv/site/index.html");
	assert_eq!(u.as_str(), "file:///srv/site/index.html");
	assert_eq!(u.to_path(), PathBuf::from("/srv/site/index.html"));
	assert_eq!(u.file_name(), Some("index.html"));
}

#[test]
fn test_uri_rejects_relative_path() {
	assert_eq!(FileUri::from_path("site/index.html"), Err(UriError::Relative(PathBuf::from("site/index.html"))));
}

#[test]
fn test_uri_parse_requires_file_scheme() {
	let parsed: FileUri = "file:///tmp/a.txt".parse().unwrap();
	assert_eq!(parsed, uri("/tmp/a.txt"));

	let err = "sftp://host/tmp/a.txt".parse::<FileUri>().unwrap_err();
	assert!(matches!(err, UriError::Scheme { ref scheme, .. } if scheme == "sftp"));

	assert!(matches!("not a uri".parse::<FileUri>(), Err(UriError::Parse(_))));
}

#[test]
fn test_directory_uri_has_no_file_name() {
	let dir: FileUri = "file:///srv/site/".parse().unwrap();
	assert_eq!(dir.file_name(), None);
}

#[test]
fn test_target_normalization() {
	assert!(FileTarget::None.is_empty());
	assert!(FileTarget::Many(Vec::new()).is_empty());
	assert_eq!(FileTarget::None.into_vec(), Vec::<FileUri>::new());

	let one = FileTarget::from(uri("/a"));
	assert_eq!(one.len(), 1);
	assert_eq!(one.into_vec(), vec![uri("/a")]);

	let many = FileTarget::from(vec![uri("/a"), uri("/b")]);
	assert!(!many.is_empty());
	assert_eq!(many.into_vec(), vec![uri("/a"), uri("/b")]);

	assert_eq!(FileTarget::from(None), FileTarget::None);
}
