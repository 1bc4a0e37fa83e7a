//! Tag construction and joining

use crate::attributes::Attributes;
use crate::error::{MarkupError, Result};
use crate::safe_string::{Content, SafeString};

/// Elements rendered without a closing tag by [`tag`]
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
	"track", "wbr",
];

/// Whether `name` may be used as a tag name
pub fn is_valid_tag_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {
			chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
		}
		_ => false,
	}
}

fn opening(name: &str, attrs: &Attributes) -> Result<String> {
	if !is_valid_tag_name(name) {
		return Err(MarkupError::InvalidTagName(name.to_string()));
	}
	let mut out = String::with_capacity(name.len() + 2);
	out.push('<');
	out.push_str(name);
	out.push_str(&attrs.render()?);
	out.push('>');
	Ok(out)
}

/// Render `<name attrs>content</name>`
///
/// Text content is escaped, [`SafeString`] content is inserted as is.
///
/// # Examples
///
/// ```
/// use vellum_markup::{Attributes, content_tag};
///
/// let html = content_tag("h4", &Attributes::new().class("modal-title"), "A & B").unwrap();
/// assert_eq!(html.as_str(), r#"<h4 class="modal-title">A &amp; B</h4>"#);
/// ```
pub fn content_tag(
	name: &str,
	attrs: &Attributes,
	content: impl Into<Content>,
) -> Result<SafeString> {
	let mut out = opening(name, attrs)?;
	out.push_str(content.into().into_safe().as_str());
	out.push_str("</");
	out.push_str(name);
	out.push('>');
	tracing::trace!(tag = name, attributes = attrs.len(), "rendered content tag");
	Ok(SafeString::new(out))
}

/// Render an element with no content
///
/// Void elements (`br`, `img`, ...) get no closing tag; anything else is
/// rendered as an empty element.
pub fn tag(name: &str, attrs: &Attributes) -> Result<SafeString> {
	if VOID_ELEMENTS.contains(&name) {
		let out = opening(name, attrs)?;
		tracing::trace!(tag = name, attributes = attrs.len(), "rendered void tag");
		Ok(SafeString::new(out))
	} else {
		content_tag(name, attrs, SafeString::empty())
	}
}

/// Concatenate parts in order; text parts are escaped
///
/// # Examples
///
/// ```
/// use vellum_markup::{SafeString, safe_join};
///
/// let joined = safe_join([
///     vellum_markup::Content::from(SafeString::new("<dt>a</dt>")),
///     vellum_markup::Content::from("<b>"),
/// ]);
/// assert_eq!(joined.as_str(), "<dt>a</dt>&lt;b&gt;");
/// ```
pub fn safe_join<I>(parts: I) -> SafeString
where
	I: IntoIterator,
	I::Item: Into<Content>,
{
	let mut joined = SafeString::empty();
	for part in parts {
		joined.push(&part.into().into_safe());
	}
	joined
}

/// Concatenate parts in order with a separator between each pair
pub fn safe_join_with<I, S>(parts: I, separator: S) -> SafeString
where
	I: IntoIterator,
	I::Item: Into<Content>,
	S: Into<Content>,
{
	let separator = separator.into().into_safe();
	let mut joined = SafeString::empty();
	for (index, part) in parts.into_iter().enumerate() {
		if index > 0 {
			joined.push(&separator);
		}
		joined.push(&part.into().into_safe());
	}
	joined
}
