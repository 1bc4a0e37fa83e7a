use super::v1::EagerModal;
use crate::error::Result;
use vellum_markup::{Content, SafeString, ViewContext};

/// Render a modal whose body is produced by `content`
///
/// `content` runs once, before any modal markup is built. Its error aborts
/// the modal.
///
/// # Examples
///
/// ```
/// use vellum_helpers::modal::modal_v2;
/// use vellum_markup::{Attributes, HtmlContext, ViewContext};
///
/// let ctx = HtmlContext::new();
/// let html = modal_v2(&ctx, "confirm", "Confirm", |ctx| {
///     Ok(ctx.content_tag("p", &Attributes::new(), "Are you sure?")?)
/// })
/// .unwrap();
/// assert!(html.as_str().contains(r#"<div class="modal-body"><p>Are you sure?</p></div>"#));
/// ```
pub fn modal_v2<C, F, R>(ctx: &C, id: &str, title: &str, content: F) -> Result<SafeString>
where
	C: ViewContext,
	F: FnOnce(&C) -> Result<R>,
	R: Into<Content>,
{
	let content = ctx.capture(content)?;
	tracing::debug!(id, "rendering modal");
	EagerModal::new(ctx, id, title, content).html()
}
