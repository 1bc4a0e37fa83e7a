//! Escaped HTML fragments
//!
//! [`SafeString`] is the only currency the helpers trade in. Plain text enters
//! through [`Content`] and is escaped on the way in; a `SafeString` is inserted
//! verbatim, so fragments compose without being escaped twice.
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

use std::borrow::Cow;
use std::fmt;

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use vellum_markup::escape;
///
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
	html_escape::encode_quoted_attribute(text)
}

/// A piece of markup that is safe to emit without further escaping
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeString(String);

impl SafeString {
	/// Wrap markup that is already trusted
	///
	/// Nothing is escaped. Use [`SafeString::escape`] for untrusted text.
	///
	/// # Examples
	///
	/// ```
	/// use vellum_markup::SafeString;
	///
	/// let safe = SafeString::new("&times;");
	/// assert_eq!(safe.as_str(), "&times;");
	/// ```
	pub fn new(s: impl Into<String>) -> Self {
		Self(s.into())
	}

	/// The empty fragment
	pub fn empty() -> Self {
		Self(String::new())
	}

	/// Escape untrusted text into a fragment
	///
	/// # Examples
	///
	/// ```
	/// use vellum_markup::SafeString;
	///
	/// let safe = SafeString::escape("<b>");
	/// assert_eq!(safe.as_str(), "&lt;b&gt;");
	/// ```
	pub fn escape(text: &str) -> Self {
		Self(escape(text).into_owned())
	}

	/// Append another fragment
	pub fn push(&mut self, other: &SafeString) {
		self.0.push_str(&other.0);
	}

	/// Get the markup
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert to String
	pub fn into_string(self) -> String {
		self.0
	}

	/// Whether the fragment renders nothing
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl AsRef<str> for SafeString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SafeString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<SafeString> for String {
	fn from(safe: SafeString) -> Self {
		safe.0
	}
}

impl PartialEq<str> for SafeString {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for SafeString {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// Anything that can become the body of a tag
///
/// Text is escaped when converted; fragments pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
	/// Untrusted text, escaped on conversion
	Text(String),
	/// Trusted markup
	Safe(SafeString),
}

impl Content {
	/// Content that renders nothing
	pub fn empty() -> Self {
		Self::Safe(SafeString::empty())
	}

	/// Whether the content would render nothing visible
	///
	/// Text and fragments made only of whitespace count as blank.
	pub fn is_blank(&self) -> bool {
		match self {
			Self::Text(text) => text.trim().is_empty(),
			Self::Safe(safe) => safe.as_str().trim().is_empty(),
		}
	}

	/// Resolve to a fragment, escaping text
	pub fn into_safe(self) -> SafeString {
		match self {
			Self::Text(text) => SafeString::escape(&text),
			Self::Safe(safe) => safe,
		}
	}
}

impl Default for Content {
	fn default() -> Self {
		Self::empty()
	}
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&String> for Content {
	fn from(text: &String) -> Self {
		Self::Text(text.clone())
	}
}

impl From<SafeString> for Content {
	fn from(safe: SafeString) -> Self {
		Self::Safe(safe)
	}
}

impl From<&SafeString> for Content {
	fn from(safe: &SafeString) -> Self {
		Self::Safe(safe.clone())
	}
}

impl From<()> for Content {
	fn from(_: ()) -> Self {
		Self::empty()
	}
}

impl<T: Into<Content>> From<Option<T>> for Content {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or_default()
	}
}
