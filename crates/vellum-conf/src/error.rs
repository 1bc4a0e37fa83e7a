//! Error types for settings loading

use std::path::PathBuf;

/// Error raised while loading or validating [`HelperSettings`](crate::HelperSettings)
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// The settings file could not be read
	#[error("Failed to read settings file at {path}: {source}")]
	Io {
		/// File that was being read
		path: PathBuf,
		/// Underlying I/O failure
		source: std::io::Error,
	},

	/// The settings file is not valid TOML or has unknown keys
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A value parsed but breaks an invariant
	#[error("Invalid value for `{field}`: {reason}")]
	InvalidValue {
		/// Offending field
		field: &'static str,
		/// Why the value was rejected
		reason: String,
	},
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;
