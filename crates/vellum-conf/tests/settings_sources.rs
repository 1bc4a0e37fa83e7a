//! Integration tests for loading `HelperSettings` from files and the environment.

use rstest::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;
use vellum_conf::{HelperSettings, SettingsError};

#[fixture]
fn temp_dir() -> TempDir {
	TempDir::new().expect("Failed to create temporary directory")
}

#[rstest]
fn test_load_from_file(temp_dir: TempDir) {
	// Arrange
	let path = temp_dir.path().join("helpers.toml");
	fs::write(
		&path,
		r#"
blank_placeholder = "(blank)"
horizontal_list_class = "row"
"#,
	)
	.expect("Failed to write helpers.toml");

	// Act
	let settings = HelperSettings::from_file(&path).unwrap();

	// Assert
	assert_eq!(settings.blank_placeholder, "(blank)");
	assert_eq!(settings.horizontal_list_class, "row");
	assert_eq!(settings.close_label, "Close");
}

#[rstest]
fn test_missing_file_reports_path(temp_dir: TempDir) {
	let path = temp_dir.path().join("absent.toml");

	let err = HelperSettings::from_file(&path).unwrap_err();

	match err {
		SettingsError::Io { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("unexpected error: {other}"),
	}
}

#[rstest]
#[serial(vellum_env)]
fn test_env_overrides_win_over_file(temp_dir: TempDir) {
	// Arrange
	let path = temp_dir.path().join("helpers.toml");
	fs::write(&path, "dropdown_label = \"Actions\"\n").expect("Failed to write helpers.toml");
	// SAFETY: serialized with every other test touching VELLUM_* variables
	unsafe { std::env::set_var("VELLUM_DROPDOWN_LABEL", "More") };

	// Act
	let settings = HelperSettings::from_file(&path)
		.and_then(HelperSettings::with_env_overrides);
	unsafe { std::env::remove_var("VELLUM_DROPDOWN_LABEL") };

	// Assert
	assert_eq!(settings.unwrap().dropdown_label, "More");
}
