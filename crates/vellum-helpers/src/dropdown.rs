//! Dropdown menu helper
//!
//! Same builder-in-a-callback shape as [`modal_v3`](crate::modal::modal_v3):
//! the callback adds items to a [`Dropdown`], which then renders a Bootstrap
//! dropdown with a trigger link and one list entry per item.

use crate::error::Result;
use vellum_markup::{Attributes, Content, SafeString, ViewContext};

/// Render a dropdown whose items are added by `build`
///
/// # Examples
///
/// ```
/// use vellum_helpers::dropdown::dropdown;
/// use vellum_markup::HtmlContext;
///
/// let ctx = HtmlContext::new();
/// let html = dropdown(&ctx, |menu| {
///     menu.add_item("Edit", "/posts/1/edit");
///     Ok(())
/// })
/// .unwrap();
/// assert!(html.as_str().ends_with(
///     r#"<ul class="dropdown-menu"><li><a href="/posts/1/edit">Edit</a></li></ul></div>"#
/// ));
/// ```
pub fn dropdown<C, F>(ctx: &C, build: F) -> Result<SafeString>
where
	C: ViewContext,
	F: FnOnce(&mut Dropdown<'_, C>) -> Result<()>,
{
	let mut menu = Dropdown::new(ctx);
	build(&mut menu)?;
	menu.render()
}

/// Dropdown builder collecting `(name, url)` items in order
pub struct Dropdown<'a, C> {
	ctx: &'a C,
	items: Vec<(String, String)>,
}

impl<'a, C: ViewContext> Dropdown<'a, C> {
	/// Create a dropdown with no items
	pub fn new(ctx: &'a C) -> Self {
		Self {
			ctx,
			items: Vec::new(),
		}
	}

	/// The context the dropdown renders with
	pub fn context(&self) -> &'a C {
		self.ctx
	}

	/// Append a link item
	pub fn add_item(&mut self, name: impl Into<String>, url: impl Into<String>) -> &mut Self {
		self.items.push((name.into(), url.into()));
		self
	}

	/// Items added so far
	pub fn items(&self) -> &[(String, String)] {
		&self.items
	}

	/// Render the trigger and the item list
	pub fn render(self) -> Result<SafeString> {
		tracing::debug!(items = self.items.len(), "rendering dropdown");
		let parts = [self.trigger()?, self.list()?];
		Ok(self.ctx.content_tag(
			"div",
			&Attributes::new().class("dropdown"),
			self.ctx.safe_join(parts),
		)?)
	}

	fn trigger(&self) -> Result<SafeString> {
		let caret = self
			.ctx
			.content_tag("span", &Attributes::new().class("caret"), ())?;
		let label = self.ctx.safe_join([
			Content::from(self.ctx.settings().dropdown_label.as_str()),
			Content::from(caret),
		]);
		Ok(self.ctx.link_to(
			label,
			"javascript:void(0)",
			&Attributes::new().data("toggle", "dropdown"),
		)?)
	}

	fn list(&self) -> Result<SafeString> {
		let items = self
			.items
			.iter()
			.map(|(name, url)| {
				let link = self.ctx.link_to(name, url, &Attributes::new())?;
				self.ctx.content_tag("li", &Attributes::new(), link)
			})
			.collect::<std::result::Result<Vec<_>, _>>()?;
		Ok(self.ctx.content_tag(
			"ul",
			&Attributes::new().class("dropdown-menu"),
			self.ctx.safe_join(items),
		)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use vellum_markup::{HelperSettings, HtmlContext};

	const TRIGGER: &str = concat!(
		r#"<a href="javascript:void(0)" data-toggle="dropdown">"#,
		r#"Dropdown Trigger<span class="caret"></span></a>"#
	);

	#[fixture]
	fn ctx() -> HtmlContext {
		HtmlContext::new()
	}

	#[rstest]
	fn test_empty_dropdown(ctx: HtmlContext) {
		let html = dropdown(&ctx, |_| Ok(())).unwrap();

		assert_eq!(
			html.as_str(),
			format!(r#"<div class="dropdown">{TRIGGER}<ul class="dropdown-menu"></ul></div>"#)
		);
	}

	#[rstest]
	fn test_items_keep_insertion_order(ctx: HtmlContext) {
		let html = dropdown(&ctx, |menu| {
			menu.add_item("Edit", "/edit").add_item("Delete", "/delete");
			Ok(())
		})
		.unwrap();

		assert!(html.as_str().contains(concat!(
			r#"<li><a href="/edit">Edit</a></li>"#,
			r#"<li><a href="/delete">Delete</a></li>"#
		)));
	}

	#[rstest]
	fn test_item_text_and_url_are_escaped(ctx: HtmlContext) {
		let html = dropdown(&ctx, |menu| {
			menu.add_item("<b>", r#"/x?a=1&b="2""#);
			Ok(())
		})
		.unwrap();

		assert!(html.as_str().contains(
			r#"<li><a href="/x?a=1&amp;b=&quot;2&quot;">&lt;b&gt;</a></li>"#
		));
	}

	#[rstest]
	fn test_label_from_settings() {
		let ctx = HtmlContext::with_settings(HelperSettings::default().dropdown_label("Actions"));

		let html = dropdown(&ctx, |_| Ok(())).unwrap();

		assert!(html.as_str().contains(r#"data-toggle="dropdown">Actions<span"#));
	}

	#[rstest]
	fn test_builder_exposes_items(ctx: HtmlContext) {
		let mut menu = Dropdown::new(&ctx);
		menu.add_item("A", "/a");

		assert_eq!(menu.items(), &[("A".to_string(), "/a".to_string())]);
		assert!(std::ptr::eq(menu.context(), &ctx));
	}
}
