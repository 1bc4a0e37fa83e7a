use super::Chrome;
use crate::error::Result;
use vellum_markup::{Content, SafeString, ViewContext};

/// Render a modal whose body content is passed in directly
///
/// # Examples
///
/// ```
/// use vellum_helpers::modal::modal_v1;
/// use vellum_markup::HtmlContext;
///
/// let ctx = HtmlContext::new();
/// let html = modal_v1(&ctx, "confirm", "Confirm", "Are you sure?").unwrap();
/// assert!(html.as_str().starts_with(r#"<div class="modal" id="confirm">"#));
/// assert!(html.as_str().contains(r#"<div class="modal-body">Are you sure?</div>"#));
/// ```
pub fn modal_v1<C>(ctx: &C, id: &str, title: &str, content: impl Into<Content>) -> Result<SafeString>
where
	C: ViewContext,
{
	tracing::debug!(id, "rendering modal");
	EagerModal::new(ctx, id, title, content.into().into_safe()).html()
}

/// A modal whose body is known when it is created
pub(super) struct EagerModal<'a, C> {
	chrome: Chrome<'a, C>,
	content: SafeString,
}

impl<'a, C: ViewContext> EagerModal<'a, C> {
	pub(super) fn new(ctx: &'a C, id: &'a str, title: &'a str, content: SafeString) -> Self {
		Self {
			chrome: Chrome::new(ctx, id, title),
			content,
		}
	}

	pub(super) fn html(self) -> Result<SafeString> {
		let body = self.chrome.section("modal-body", self.content)?;
		self.chrome.html([body])
	}
}
