//! Modal dialog helpers
//!
//! Three helpers that build the same Bootstrap modal skeleton, each taking its
//! content a different way:
//!
//! - [`modal_v1`]: content passed in directly
//! - [`modal_v2`]: content produced by a callback
//! - [`modal_v3`]: a callback that fills named sections on a [`Modal`] builder
//!
//! All three render
//!
//! ```text
//! div.modal#id
//! └── div.modal-dialog
//!     └── div.modal-content
//!         ├── div.modal-header (dismiss button, h4.modal-title)
//!         ├── div.modal-body
//!         └── div.modal-footer   (modal_v3 only)
//! ```

mod v1;
mod v2;
mod v3;

pub use v1::modal_v1;
pub use v2::modal_v2;
pub use v3::{Modal, modal_v3};

use crate::error::Result;
use vellum_markup::{Attributes, Content, SafeString, ViewContext};

/// Header, section and wrapper markup shared by every modal variant
struct Chrome<'a, C> {
	ctx: &'a C,
	id: &'a str,
	title: &'a str,
}

impl<'a, C: ViewContext> Chrome<'a, C> {
	fn new(ctx: &'a C, id: &'a str, title: &'a str) -> Self {
		Self { ctx, id, title }
	}

	/// Wrap `sections` (header first) in the three container layers
	fn html(&self, sections: impl IntoIterator<Item = SafeString>) -> Result<SafeString> {
		let parts = std::iter::once(self.header()?).chain(sections);
		let content = self.ctx.safe_join(parts);
		let outer = Attributes::new().class("modal").id(self.id);
		let html = self.ctx.content_tag_with("div", &outer, |ctx| {
			ctx.content_tag_with("div", &Attributes::new().class("modal-dialog"), |ctx| {
				ctx.content_tag("div", &Attributes::new().class("modal-content"), content)
			})
		})?;
		Ok(html)
	}

	fn section(&self, class: &str, content: impl Into<Content>) -> Result<SafeString> {
		Ok(self
			.ctx
			.content_tag("div", &Attributes::new().class(class), content)?)
	}

	fn header(&self) -> Result<SafeString> {
		let tags = [self.close_button()?, self.title()?];
		self.section("modal-header", self.ctx.safe_join(tags))
	}

	fn close_button(&self) -> Result<SafeString> {
		let options = Attributes::new()
			.set("type", "button")
			.class("close")
			.data("dismiss", "modal")
			.aria("label", self.ctx.settings().close_label.as_str());

		let button = self.ctx.content_tag_with("button", &options, |ctx| {
			ctx.content_tag(
				"span",
				&Attributes::new().aria("hidden", true),
				SafeString::new("&times;"),
			)
		})?;
		Ok(button)
	}

	fn title(&self) -> Result<SafeString> {
		Ok(self
			.ctx
			.content_tag("h4", &Attributes::new().class("modal-title"), self.title)?)
	}
}
