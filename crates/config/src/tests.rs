use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_input_is_default() {
	assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn parses_every_field() {
	let config = Config::parse(
		r#"
share_base_url = "https://example.org/mapart/"
default_version = "1.16.5"
state_path = "/tmp/state.json"
colours_path = "colours.json"
"#,
	)
	.unwrap();

	assert_eq!(
		config,
		Config {
			share_base_url: Some("https://example.org/mapart/".into()),
			default_version: Some("1.16.5".into()),
			state_path: Some(PathBuf::from("/tmp/state.json")),
			colours_path: Some(PathBuf::from("colours.json")),
		}
	);
}

#[test]
fn unknown_keys_are_rejected() {
	assert!(matches!(Config::parse("theme = \"dark\""), Err(ConfigError::Toml(_))));
}

#[test]
fn share_base_must_be_http() {
	let err = Config::parse("share_base_url = \"ftp://example.org\"").unwrap_err();
	assert!(matches!(err, ConfigError::InvalidValue { field: "share_base_url", .. }));
}

#[test]
fn blank_version_is_rejected() {
	let err = Config::parse("default_version = \"  \"").unwrap_err();
	assert!(matches!(err, ConfigError::InvalidValue { field: "default_version", .. }));
}

#[test]
fn missing_file_yields_defaults() {
	let dir = tempfile::tempdir().unwrap();
	let config = Config::load(&dir.path().join(CONFIG_FILE)).unwrap();
	assert_eq!(config, Config::default());
}

#[test]
fn loads_from_disk() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join(CONFIG_FILE);
	std::fs::write(&path, "default_version = \"1.20\"\n").unwrap();

	let config = Config::load(&path).unwrap();
	assert_eq!(config.default_version.as_deref(), Some("1.20"));
}

#[test]
fn unreadable_path_reports_io_error() {
	let dir = tempfile::tempdir().unwrap();
	// A directory cannot be read as a file.
	let err = Config::load(dir.path()).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn configured_state_path_wins() {
	let config = Config {
		state_path: Some(PathBuf::from("/srv/mapart.json")),
		..Config::default()
	};
	assert_eq!(config.resolved_state_path(), Some(PathBuf::from("/srv/mapart.json")));
}
