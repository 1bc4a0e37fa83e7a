//! # Vellum Configuration
//!
//! Settings shared by the Vellum view helpers: the placeholder shown for blank
//! values, CSS class names, and the fixed labels the helpers emit.
//!
//! ## Sources
//!
//! - Built-in defaults ([`HelperSettings::default`])
//! - A TOML file ([`HelperSettings::from_file`])
//! - `VELLUM_*` environment variables ([`HelperSettings::with_env_overrides`])

#![warn(missing_docs)]

pub mod error;
pub mod settings;

pub use error::{Result, SettingsError};
pub use settings::{ENV_PREFIX, HelperSettings};
