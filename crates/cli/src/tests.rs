use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use ferry_commands::{CommandArgs, FileHandlerContext};
use ferry_primitives::FileUri;
use ferry_profiles::ResolvedSite;
use pretty_assertions::assert_eq;

use crate::cli::{Cli, Command};
use crate::host::{describe, match_button, read_answer};
use crate::load_config;

fn uri(path: &str) -> FileUri {
	FileUri::from_path(path).unwrap()
}

fn run_args(argv: &[&str]) -> crate::cli::RunArgs {
	match Cli::try_parse_from(argv).unwrap().command {
		Command::Run(run) => run,
		Command::List => panic!("expected run"),
	}
}

#[test]
fn test_single_path_becomes_target() {
	let run = run_args(&["ferry", "run", "ferry.upload.file", "site/a.txt", "--active", "/abs/b.txt"]);
	let args = run.to_command_args(Path::new("/work")).unwrap();
	assert_eq!(
		args,
		CommandArgs {
			target: Some(uri("/work/site/a.txt")),
			selection: Vec::new(),
			active_file: Some(uri("/abs/b.txt")),
			extra: Vec::new(),
		}
	);
}

#[test]
fn test_several_paths_become_selection() {
	let run = run_args(&["ferry", "run", "-y", "ferry.upload.file", "a.txt", "b.txt", "--", "x", "y"]);
	assert!(run.yes);
	let args = run.to_command_args(Path::new("/work")).unwrap();
	assert_eq!(args.target, None);
	assert_eq!(args.selection, vec![uri("/work/a.txt"), uri("/work/b.txt")]);
	assert_eq!(args.extra, vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn test_list_parses() {
	let cli = Cli::try_parse_from(["ferry", "-v", "-c", "other.toml", "list"]).unwrap();
	assert!(cli.verbose);
	assert_eq!(cli.config.as_deref(), Some(Path::new("other.toml")));
	assert!(matches!(cli.command, Command::List));
}

#[test]
fn test_match_button() {
	let buttons = ["Yes", "No"];
	assert_eq!(match_button("y", &buttons).as_deref(), Some("Yes"));
	assert_eq!(match_button("YES", &buttons).as_deref(), Some("Yes"));
	assert_eq!(match_button("no", &buttons).as_deref(), Some("No"));
	assert_eq!(match_button("", &buttons), None);
	assert_eq!(match_button("maybe", &buttons), None);
	assert_eq!(match_button("n", &["No", "Never"]), None);
	assert_eq!(match_button("no", &["No", "Nope"]).as_deref(), Some("No"));
}

#[tokio::test]
async fn test_read_answer_from_async_reader() {
	let buttons = ["Yes", "No"];
	assert_eq!(read_answer(&b"y\n"[..], &buttons).await.as_deref(), Some("Yes"));
	assert_eq!(read_answer(&b"  No  \r\nignored\n"[..], &buttons).await.as_deref(), Some("No"));
	assert_eq!(read_answer(&b""[..], &buttons).await, None);
	assert_eq!(read_answer(&b"later\n"[..], &buttons).await, None);
}

#[test]
fn test_describe_transfer() {
	let ctx = FileHandlerContext {
		target: uri("/work/site/a.txt"),
		local_path: "/work/site/a.txt".into(),
		remote_path: "/srv/www/a.txt".to_string(),
		site: Arc::new(ResolvedSite {
			name: "web".to_string(),
			profile: Some("prod".to_string()),
			context: "/work/site".into(),
			host: "example.com".to_string(),
			port: 22,
			username: Some("deploy".to_string()),
			remote_path: "/srv/www".to_string(),
		}),
	};
	assert_eq!(describe("upload", &ctx), "upload /work/site/a.txt -> deploy@example.com:22:/srv/www/a.txt [prod]");
	assert_eq!(describe("download", &ctx), "download /work/site/a.txt <- deploy@example.com:22:/srv/www/a.txt [prod]");
}

#[test]
fn test_missing_default_config_is_empty() {
	let dir = tempfile::tempdir().unwrap();
	let config = load_config(None, dir.path()).unwrap();
	assert!(config.sites.is_empty());

	assert!(load_config(Some(Path::new("missing.toml")), dir.path()).is_err());
}
