use super::Chrome;
use crate::error::Result;
use vellum_markup::{Content, SafeString, ViewContext};

/// Render a modal whose sections are filled in by `build`
///
/// `build` runs once with a fresh [`Modal`]. Inside it, call
/// [`Modal::body`] and [`Modal::footer`] in any order; the rendered order is
/// always header, body, footer. A section that is never filled renders as an
/// empty element.
///
/// # Examples
///
/// ```
/// use vellum_helpers::modal::modal_v3;
/// use vellum_markup::HtmlContext;
///
/// let ctx = HtmlContext::new();
/// let html = modal_v3(&ctx, "m1", "Confirm", |modal| {
///     modal.footer(|_| Ok("Cancel/OK buttons"))?;
///     modal.body(|_| Ok("Are you sure?"))?;
///     Ok(())
/// })
/// .unwrap();
/// let html = html.as_str();
/// assert!(html.find("Are you sure?").unwrap() < html.find("Cancel/OK buttons").unwrap());
/// ```
pub fn modal_v3<C, F>(ctx: &C, id: &str, title: &str, build: F) -> Result<SafeString>
where
	C: ViewContext,
	F: FnOnce(&mut Modal<'_, C>) -> Result<()>,
{
	let mut modal = Modal::new(ctx, id, title);
	build(&mut modal)?;
	modal.render()
}

/// Modal builder with a body and a footer section
///
/// Section callbacks receive the context the modal was created with, so they
/// can use every [`ViewContext`] primitive. A modal is rendered once:
/// [`render`](Modal::render) consumes it.
pub struct Modal<'a, C> {
	ctx: &'a C,
	id: String,
	title: String,
	body: Option<SafeString>,
	footer: Option<SafeString>,
}

impl<'a, C: ViewContext> Modal<'a, C> {
	/// Create a modal with empty sections
	pub fn new(ctx: &'a C, id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			ctx,
			id: id.into(),
			title: title.into(),
			body: None,
			footer: None,
		}
	}

	/// The context sections are rendered with
	pub fn context(&self) -> &'a C {
		self.ctx
	}

	/// The modal's element id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// The modal's title text
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Capture the body section
	///
	/// Calling this again replaces the previous body.
	pub fn body<F, R>(&mut self, content: F) -> Result<&mut Self>
	where
		F: FnOnce(&C) -> Result<R>,
		R: Into<Content>,
	{
		let captured = self.ctx.capture(content)?;
		store(&mut self.body, "body", &self.id, captured);
		Ok(self)
	}

	/// Capture the footer section
	///
	/// Calling this again replaces the previous footer.
	pub fn footer<F, R>(&mut self, content: F) -> Result<&mut Self>
	where
		F: FnOnce(&C) -> Result<R>,
		R: Into<Content>,
	{
		let captured = self.ctx.capture(content)?;
		store(&mut self.footer, "footer", &self.id, captured);
		Ok(self)
	}

	/// Assemble header, body and footer into the modal skeleton
	pub fn render(self) -> Result<SafeString> {
		tracing::debug!(
			id = %self.id,
			body = self.body.is_some(),
			footer = self.footer.is_some(),
			"rendering modal"
		);
		let chrome = Chrome::new(self.ctx, &self.id, &self.title);
		let body = chrome.section("modal-body", self.body)?;
		let footer = chrome.section("modal-footer", self.footer)?;
		chrome.html([body, footer])
	}
}

fn store(slot: &mut Option<SafeString>, name: &'static str, id: &str, captured: SafeString) {
	if slot.replace(captured).is_some() {
		tracing::warn!(id, slot = name, "modal section captured twice, keeping the last capture");
	}
}
