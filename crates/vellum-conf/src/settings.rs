//! Helper settings and their sources
//!
//! Settings are resolved in priority order: environment variables (`VELLUM_*`)
//! over a TOML file over the built-in defaults. The defaults reproduce the
//! Bootstrap 3 markup the helpers were designed around.

use crate::error::{Result, SettingsError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "VELLUM_";

/// Text and class names emitted by the view helpers
///
/// # Examples
///
/// ```
/// use vellum_conf::HelperSettings;
///
/// let settings = HelperSettings::default().blank_placeholder("n/a");
/// assert_eq!(settings.blank_placeholder, "n/a");
/// assert_eq!(settings.horizontal_list_class, "dl-horizontal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelperSettings {
	/// Rendered in a `<dd>` whose definition is blank
	pub blank_placeholder: String,
	/// Class added to `<dl>` for the horizontal layout
	pub horizontal_list_class: String,
	/// `aria-label` of the modal dismiss button
	pub close_label: String,
	/// Text of the dropdown trigger link
	pub dropdown_label: String,
}

impl Default for HelperSettings {
	fn default() -> Self {
		Self {
			blank_placeholder: "-".into(),
			horizontal_list_class: "dl-horizontal".into(),
			close_label: "Close".into(),
			dropdown_label: "Dropdown Trigger".into(),
		}
	}
}

impl HelperSettings {
	/// Parse settings from a TOML document; missing keys keep their defaults
	///
	/// # Examples
	///
	/// ```
	/// use vellum_conf::HelperSettings;
	///
	/// let settings = HelperSettings::from_toml_str("close_label = \"Dismiss\"").unwrap();
	/// assert_eq!(settings.close_label, "Dismiss");
	/// assert_eq!(settings.blank_placeholder, "-");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "loading helper settings");
		Self::from_toml_str(&source)
	}

	/// Apply `VELLUM_*` overrides from the process environment
	pub fn with_env_overrides(self) -> Result<Self> {
		self.with_overrides(std::env::vars())
	}

	/// Apply `VELLUM_*` overrides from an explicit set of variables
	///
	/// Unprefixed and unknown keys are ignored.
	pub fn with_overrides<I, K, V>(mut self, vars: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		for (key, value) in vars {
			let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
				continue;
			};
			let slot = match name {
				"BLANK_PLACEHOLDER" => &mut self.blank_placeholder,
				"HORIZONTAL_LIST_CLASS" => &mut self.horizontal_list_class,
				"CLOSE_LABEL" => &mut self.close_label,
				"DROPDOWN_LABEL" => &mut self.dropdown_label,
				_ => continue,
			};
			*slot = value.into();
			tracing::trace!(key = name, "applied settings override");
		}
		self.validate()?;
		Ok(self)
	}

	/// Check invariants the helpers rely on
	pub fn validate(&self) -> Result<()> {
		if self.blank_placeholder.is_empty() {
			return Err(SettingsError::InvalidValue {
				field: "blank_placeholder",
				reason: "must not be empty".into(),
			});
		}
		if self.horizontal_list_class.trim().is_empty() {
			return Err(SettingsError::InvalidValue {
				field: "horizontal_list_class",
				reason: "must not be empty".into(),
			});
		}
		Ok(())
	}

	/// Builder method for the blank placeholder
	pub fn blank_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.blank_placeholder = placeholder.into();
		self
	}

	/// Builder method for the horizontal list class
	pub fn horizontal_list_class(mut self, class: impl Into<String>) -> Self {
		self.horizontal_list_class = class.into();
		self
	}

	/// Builder method for the dismiss button label
	pub fn close_label(mut self, label: impl Into<String>) -> Self {
		self.close_label = label.into();
		self
	}

	/// Builder method for the dropdown trigger text
	pub fn dropdown_label(mut self, label: impl Into<String>) -> Self {
		self.dropdown_label = label.into();
		self
	}
}
