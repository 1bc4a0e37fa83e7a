//! Read-only attribute access for description lists
//!
//! A [`Record`] answers "what is the value of attribute `x`", distinguishing an
//! attribute that is absent (`None`) from one that is present but blank.
//! Values are [`serde_json::Value`]s so any `Serialize` type can be shown
//! through [`SerializedRecord`].

use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A record whose attributes can be read by name
pub trait Record {
	/// Value of `name`, or `None` when the record has no such attribute
	fn read_attribute(&self, name: &str) -> Option<Value>;

	/// Name used in lookup errors
	fn record_name(&self) -> &str {
		"record"
	}
}

impl<R: Record + ?Sized> Record for &R {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		(**self).read_attribute(name)
	}

	fn record_name(&self) -> &str {
		(**self).record_name()
	}
}

impl Record for Map<String, Value> {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		self.get(name).cloned()
	}
}

impl Record for Value {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		self.as_object().and_then(|fields| fields.get(name).cloned())
	}
}

impl<S: BuildHasher> Record for HashMap<String, String, S> {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		self.get(name).cloned().map(Value::String)
	}
}

impl Record for BTreeMap<String, String> {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		self.get(name).cloned().map(Value::String)
	}
}

/// Snapshot of a `Serialize` value's fields
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use vellum_helpers::record::{Record, SerializedRecord};
///
/// #[derive(Serialize)]
/// struct User {
///     name: String,
///     nickname: Option<String>,
/// }
///
/// let user = User { name: "Ada".into(), nickname: None };
/// let record = SerializedRecord::new(&user).unwrap();
/// assert_eq!(record.record_name(), "User");
/// assert_eq!(record.read_attribute("name"), Some("Ada".into()));
/// assert_eq!(record.read_attribute("nickname"), Some(serde_json::Value::Null));
/// assert_eq!(record.read_attribute("email"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SerializedRecord {
	name: String,
	fields: Map<String, Value>,
}

impl SerializedRecord {
	/// Serialize `value`; a value that is not a map has no attributes
	pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
		let path = std::any::type_name::<T>();
		let path = path.split('<').next().unwrap_or(path);
		let name = path.rsplit("::").next().unwrap_or(path);
		let fields = match serde_json::to_value(value)? {
			Value::Object(fields) => fields,
			_ => Map::new(),
		};
		Ok(Self {
			name: name.to_string(),
			fields,
		})
	}

	/// Override the name used in lookup errors
	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}
}

impl Record for SerializedRecord {
	fn read_attribute(&self, name: &str) -> Option<Value> {
		self.fields.get(name).cloned()
	}

	fn record_name(&self) -> &str {
		&self.name
	}
}

/// Whether a value counts as blank
///
/// `null`, `false`, whitespace-only strings and empty arrays or objects are
/// blank; numbers never are.
pub fn is_blank(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(flag) => !flag,
		Value::Number(_) => false,
		Value::String(text) => text.trim().is_empty(),
		Value::Array(items) => items.is_empty(),
		Value::Object(fields) => fields.is_empty(),
	}
}

/// Text shown for a value
///
/// Strings are used as is, arrays are joined with `", "`, objects are shown as
/// compact JSON.
pub fn display_value(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		Value::Array(items) => items
			.iter()
			.map(display_value)
			.collect::<Vec<_>>()
			.join(", "),
		other => other.to_string(),
	}
}
