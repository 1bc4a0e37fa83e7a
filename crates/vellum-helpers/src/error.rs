//! Error types for vellum-helpers

use thiserror::Error;
use vellum_markup::MarkupError;

/// Error type for helper invocations
///
/// Any error aborts the helper; no partial fragment is returned.
#[derive(Debug, Error)]
pub enum HelperError {
	/// The record has no attribute with this name
	#[error("Undefined attribute `{attribute}` for {record}")]
	AttributeLookup {
		/// Requested attribute
		attribute: String,
		/// Name of the record it was looked up on
		record: String,
	},

	/// Tag construction failed
	#[error(transparent)]
	Markup(#[from] MarkupError),

	/// A value could not be turned into a record
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for helper invocations
pub type Result<T> = std::result::Result<T, HelperError>;
