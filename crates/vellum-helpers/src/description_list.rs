//! Description list helpers
//!
//! Domain helpers built on the generic tag primitives: a label/value pair, a
//! pair read off a record, and a `<dl>` of such pairs.
//!
//! ```
//! use serde_json::json;
//! use vellum_helpers::description_list::{ListLayout, description_list};
//! use vellum_markup::HtmlContext;
//!
//! let ctx = HtmlContext::new();
//! let user = json!({"name": "Ada", "nickname": null});
//! let html = description_list(&ctx, &user, ["name", "nickname"], ListLayout::Vertical).unwrap();
//! assert_eq!(
//!     html.as_str(),
//!     "<dl><dt>Name</dt><dd>Ada</dd><dt>Nickname</dt><dd>-</dd></dl>"
//! );
//! ```

use crate::error::{HelperError, Result};
use crate::inflector::titleize;
use crate::record::{Record, display_value, is_blank};
use vellum_markup::{Attributes, Content, SafeString, ViewContext};

/// Layout of a description list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListLayout {
	/// Terms above definitions
	#[default]
	Vertical,
	/// Terms beside definitions, marked with the configured horizontal class
	Horizontal,
}

impl From<bool> for ListLayout {
	fn from(horizontal: bool) -> Self {
		if horizontal {
			Self::Horizontal
		} else {
			Self::Vertical
		}
	}
}

/// Render `<dt>term</dt><dd>definition</dd>`
///
/// A blank definition (absent, empty or whitespace-only) is replaced by the
/// configured placeholder.
pub fn description_list_pair<C, D>(ctx: &C, term: &str, definition: D) -> Result<SafeString>
where
	C: ViewContext,
	D: Into<Content>,
{
	let definition = definition.into();
	let definition = if definition.is_blank() {
		Content::from(ctx.settings().blank_placeholder.as_str())
	} else {
		definition
	};
	let tags = [
		ctx.content_tag("dt", &Attributes::new(), term)?,
		ctx.content_tag("dd", &Attributes::new(), definition)?,
	];
	Ok(ctx.safe_join(tags))
}

/// Render the pair for one attribute of `record`
///
/// The term is the titleized attribute name.
pub fn description_list_pair_for<C, R>(ctx: &C, record: &R, attribute: &str) -> Result<SafeString>
where
	C: ViewContext,
	R: Record + ?Sized,
{
	let value = record
		.read_attribute(attribute)
		.ok_or_else(|| HelperError::AttributeLookup {
			attribute: attribute.to_string(),
			record: record.record_name().to_string(),
		})?;
	let definition = (!is_blank(&value)).then(|| display_value(&value));
	description_list_pair(ctx, &titleize(attribute), definition)
}

/// Render a `<dl>` with one pair per attribute, in the given order
///
/// Duplicated attributes are rendered each time they appear. The first
/// missing attribute aborts the whole list.
pub fn description_list<C, R, I>(
	ctx: &C,
	record: &R,
	attributes: I,
	layout: ListLayout,
) -> Result<SafeString>
where
	C: ViewContext,
	R: Record + ?Sized,
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let pairs = attributes
		.into_iter()
		.map(|attribute| description_list_pair_for(ctx, record, attribute.as_ref()))
		.collect::<Result<Vec<_>>>()?;
	tracing::debug!(
		record = record.record_name(),
		pairs = pairs.len(),
		?layout,
		"rendering description list"
	);
	let attrs = match layout {
		ListLayout::Vertical => Attributes::new(),
		ListLayout::Horizontal => Attributes::new().class(&ctx.settings().horizontal_list_class),
	};
	Ok(ctx.content_tag("dl", &attrs, ctx.safe_join(pairs))?)
}
