//! HTML attribute maps
//!
//! Attributes keep insertion order so rendered markup is stable. A nested map
//! expands into dash-joined names, which is how `data-*` and `aria-*`
//! attributes are written:
//!
//! ```
//! use vellum_markup::Attributes;
//!
//! let attrs = Attributes::new()
//!     .class("close")
//!     .data("dismiss", "modal")
//!     .aria("label", "Close");
//! assert_eq!(
//!     attrs.render().unwrap(),
//!     r#" class="close" data-dismiss="modal" aria-label="Close""#
//! );
//! ```

use crate::error::{MarkupError, Result};
use crate::safe_string::escape;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Attributes whose presence alone carries meaning
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"readonly",
	"required",
	"reversed",
	"selected",
];

/// Value of a single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// Escaped and quoted
	Text(String),
	/// Presence flag for boolean attributes, `"true"`/`"false"` elsewhere
	Bool(bool),
	/// Expanded to `<name>-<key>` for each entry
	Nested(Attributes),
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<Attributes> for AttrValue {
	fn from(value: Attributes) -> Self {
		Self::Nested(value)
	}
}

/// Ordered attribute map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
	/// Create an empty map
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Set an attribute, replacing any previous value in place
	pub fn set(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Set an attribute, returning the previous value
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		value: impl Into<AttrValue>,
	) -> Option<AttrValue> {
		self.0.insert(name.into(), value.into())
	}

	/// Set the class attribute
	pub fn class(self, class: impl Into<String>) -> Self {
		self.set("class", class.into())
	}

	/// Set the id attribute
	pub fn id(self, id: impl Into<String>) -> Self {
		self.set("id", id.into())
	}

	/// Add a `data-*` attribute
	pub fn data(self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.nested("data", key, value)
	}

	/// Add an `aria-*` attribute
	pub fn aria(self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.nested("aria", key, value)
	}

	/// Add an entry to the nested map stored under `prefix`
	///
	/// A non-map value already stored under `prefix` is replaced.
	pub fn nested(
		mut self,
		prefix: &str,
		key: impl Into<String>,
		value: impl Into<AttrValue>,
	) -> Self {
		match self.0.entry(prefix.to_string()) {
			Entry::Occupied(mut entry) => match entry.get_mut() {
				AttrValue::Nested(inner) => {
					inner.insert(key, value);
				}
				other => *other = AttrValue::Nested(Attributes::new().set(key, value)),
			},
			Entry::Vacant(entry) => {
				entry.insert(AttrValue::Nested(Attributes::new().set(key, value)));
			}
		}
		self
	}

	/// Append every entry of `other`; entries already present are overwritten
	pub fn merge(mut self, other: Attributes) -> Self {
		self.0.extend(other.0);
		self
	}

	/// Look up an attribute
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.0.get(name)
	}

	/// Iterate in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of top-level entries
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether no attribute is set
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Render as the attribute part of an opening tag, with a leading space per attribute
	pub fn render(&self) -> Result<String> {
		let mut out = String::new();
		for (name, value) in &self.0 {
			write_attribute(&mut out, name, value)?;
		}
		Ok(out)
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

/// Whether `name` may be used as an attribute name
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& name
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

fn write_attribute(out: &mut String, name: &str, value: &AttrValue) -> Result<()> {
	if !is_valid_attribute_name(name) {
		return Err(MarkupError::InvalidAttributeName(name.to_string()));
	}
	match value {
		AttrValue::Text(text) => push_pair(out, name, &escape(text)),
		AttrValue::Bool(flag) if BOOLEAN_ATTRIBUTES.contains(&name) => {
			if *flag {
				push_pair(out, name, name);
			}
		}
		AttrValue::Bool(flag) => push_pair(out, name, if *flag { "true" } else { "false" }),
		AttrValue::Nested(inner) => {
			for (key, inner_value) in &inner.0 {
				let full = format!("{}-{}", name, key.replace('_', "-"));
				write_attribute(out, &full, inner_value)?;
			}
		}
	}
	Ok(())
}

fn push_pair(out: &mut String, name: &str, value: &str) {
	out.push(' ');
	out.push_str(name);
	out.push_str("=\"");
	out.push_str(value);
	out.push('"');
}
