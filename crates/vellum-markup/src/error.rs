//! Error types for vellum-markup

use thiserror::Error;

/// Error type for tag construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
	/// Tag name is empty, does not start with a letter, or has illegal characters
	#[error("Invalid tag name: {0:?}")]
	InvalidTagName(String),

	/// Attribute name is empty or has illegal characters
	#[error("Invalid attribute name: {0:?}")]
	InvalidAttributeName(String),
}

/// Result type for markup operations
pub type Result<T> = std::result::Result<T, MarkupError>;
