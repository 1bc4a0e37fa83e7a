//! The rendering context handed to helpers and builders
//!
//! Every helper receives a [`ViewContext`] explicitly and every builder keeps a
//! reference to the one it was created with. Builders implement their own
//! section methods and reach through [`ViewContext`] for everything else.

use crate::attributes::Attributes;
use crate::error::{MarkupError, Result};
use crate::safe_string::{Content, SafeString};
use crate::tag;
use vellum_conf::HelperSettings;

/// Tag construction, joining and capture
///
/// Implementors supply [`settings`](ViewContext::settings); every primitive has
/// a provided implementation.
pub trait ViewContext {
	/// Settings the helpers read their literals from
	fn settings(&self) -> &HelperSettings;

	/// See [`tag::content_tag`]
	fn content_tag<C>(&self, name: &str, attrs: &Attributes, content: C) -> Result<SafeString>
	where
		C: Into<Content>,
	{
		tag::content_tag(name, attrs, content)
	}

	/// Render a tag whose body is produced by `f`
	///
	/// `f` runs once, before the tag itself is built.
	///
	/// # Examples
	///
	/// ```
	/// use vellum_markup::{Attributes, HtmlContext, MarkupError, ViewContext};
	///
	/// let ctx = HtmlContext::new();
	/// let html = ctx
	///     .content_tag_with("div", &Attributes::new().class("modal-dialog"), |ctx| {
	///         ctx.content_tag("div", &Attributes::new().class("modal-content"), "hi")
	///     })
	///     .unwrap();
	/// assert_eq!(
	///     html.as_str(),
	///     r#"<div class="modal-dialog"><div class="modal-content">hi</div></div>"#
	/// );
	/// # Ok::<(), MarkupError>(())
	/// ```
	fn content_tag_with<F, R, E>(
		&self,
		name: &str,
		attrs: &Attributes,
		f: F,
	) -> std::result::Result<SafeString, E>
	where
		F: FnOnce(&Self) -> std::result::Result<R, E>,
		R: Into<Content>,
		E: From<MarkupError>,
	{
		let inner = self.capture(f)?;
		Ok(self.content_tag(name, attrs, inner)?)
	}

	/// See [`tag::tag`]
	fn tag(&self, name: &str, attrs: &Attributes) -> Result<SafeString> {
		tag::tag(name, attrs)
	}

	/// Render `<a href=href attrs>body</a>`
	fn link_to<C>(&self, body: C, href: &str, attrs: &Attributes) -> Result<SafeString>
	where
		C: Into<Content>,
	{
		let attrs = Attributes::new().set("href", href).merge(attrs.clone());
		self.content_tag("a", &attrs, body)
	}

	/// See [`tag::safe_join`]
	fn safe_join<I>(&self, parts: I) -> SafeString
	where
		I: IntoIterator,
		I::Item: Into<Content>,
	{
		tag::safe_join(parts)
	}

	/// Run `f` once and keep what it produced as a fragment
	///
	/// Text results are escaped. Errors from `f` are returned unchanged.
	fn capture<F, R, E>(&self, f: F) -> std::result::Result<SafeString, E>
	where
		F: FnOnce(&Self) -> std::result::Result<R, E>,
		R: Into<Content>,
	{
		Ok(f(self)?.into().into_safe())
	}
}

/// Default [`ViewContext`] backed by a [`HelperSettings`]
#[derive(Debug, Clone, Default)]
pub struct HtmlContext {
	settings: HelperSettings,
}

impl HtmlContext {
	/// Context with default settings
	pub fn new() -> Self {
		Self::default()
	}

	/// Context with the given settings
	pub fn with_settings(settings: HelperSettings) -> Self {
		Self { settings }
	}
}

impl ViewContext for HtmlContext {
	fn settings(&self) -> &HelperSettings {
		&self.settings
	}
}

impl<T: ViewContext + ?Sized> ViewContext for &T {
	fn settings(&self) -> &HelperSettings {
		(**self).settings()
	}
}
