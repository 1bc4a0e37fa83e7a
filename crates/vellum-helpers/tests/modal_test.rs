//! Integration tests for the three modal helpers.

use rstest::*;
use std::sync::{Arc, Mutex};
use vellum_helpers::{HelperError, Modal, modal_v1, modal_v2, modal_v3};
use vellum_markup::{Attributes, HelperSettings, HtmlContext, MarkupError, SafeString, ViewContext};

const HEADER: &str = concat!(
	r#"<div class="modal-header">"#,
	r#"<button type="button" class="close" data-dismiss="modal" aria-label="Close">"#,
	r#"<span aria-hidden="true">&times;</span>"#,
	"</button>",
	r#"<h4 class="modal-title">Confirm</h4>"#,
	"</div>"
);

fn wrap(id: &str, inner: &str) -> String {
	format!(
		r#"<div class="modal" id="{id}"><div class="modal-dialog"><div class="modal-content">{inner}</div></div></div>"#
	)
}

#[fixture]
fn ctx() -> HtmlContext {
	HtmlContext::new()
}

#[rstest]
fn test_v3_assembly_order_ignores_call_order(ctx: HtmlContext) {
	// Arrange
	let expected = wrap(
		"m1",
		&format!(
			r#"{HEADER}<div class="modal-body">Are you sure?</div><div class="modal-footer">Cancel/OK buttons</div>"#
		),
	);

	// Act
	let html = modal_v3(&ctx, "m1", "Confirm", |modal| {
		modal.footer(|_| Ok("Cancel/OK buttons"))?;
		modal.body(|_| Ok("Are you sure?"))?;
		Ok(())
	})
	.unwrap();

	// Assert
	assert_eq!(html.as_str(), expected);
}

#[rstest]
fn test_v3_unset_footer_renders_empty_section(ctx: HtmlContext) {
	let html = modal_v3(&ctx, "m1", "Confirm", |modal| {
		modal.body(|_| Ok("Are you sure?"))?;
		Ok(())
	})
	.unwrap();

	assert!(html.as_str().contains(
		r#"<div class="modal-body">Are you sure?</div><div class="modal-footer"></div>"#
	));
}

#[rstest]
fn test_v3_without_sections(ctx: HtmlContext) {
	let html = modal_v3(&ctx, "m1", "Confirm", |_| Ok(())).unwrap();

	assert_eq!(
		html.as_str(),
		wrap(
			"m1",
			&format!(r#"{HEADER}<div class="modal-body"></div><div class="modal-footer"></div>"#)
		)
	);
}

#[rstest]
fn test_variants_agree_on_equivalent_input(ctx: HtmlContext) {
	// Arrange
	let body = || SafeString::new("<p>Are you sure?</p>");

	// Act
	let v1 = modal_v1(&ctx, "m1", "Confirm", body()).unwrap();
	let v2 = modal_v2(&ctx, "m1", "Confirm", |_| Ok(body())).unwrap();
	let v3 = modal_v3(&ctx, "m1", "Confirm", |modal| {
		modal.body(|_| Ok(body()))?;
		Ok(())
	})
	.unwrap();

	// Assert - only the empty footer tells them apart
	assert_eq!(v1, v2);
	assert_eq!(
		v3.as_str().replace(r#"<div class="modal-footer"></div>"#, ""),
		v1.as_str()
	);
}

#[rstest]
fn test_v1_escapes_title_id_and_text_body(ctx: HtmlContext) {
	let html = modal_v1(&ctx, "a\"b", "<Confirm>", "1 < 2").unwrap();

	assert!(html.as_str().starts_with(r#"<div class="modal" id="a&quot;b">"#));
	assert!(html.as_str().contains(r#"<h4 class="modal-title">&lt;Confirm&gt;</h4>"#));
	assert!(html.as_str().contains(r#"<div class="modal-body">1 &lt; 2</div>"#));
}

#[rstest]
fn test_v2_callback_error_aborts(ctx: HtmlContext) {
	let result = modal_v2(&ctx, "m1", "Confirm", |ctx| {
		Ok(ctx.content_tag("not a tag", &Attributes::new(), "x")?)
	});

	assert!(matches!(
		result,
		Err(HelperError::Markup(MarkupError::InvalidTagName(_)))
	));
}

#[rstest]
fn test_v3_build_error_aborts(ctx: HtmlContext) {
	let result = modal_v3(&ctx, "m1", "Confirm", |modal| {
		modal.body(|_| Ok("fine"))?;
		Err(HelperError::AttributeLookup {
			attribute: "owner".into(),
			record: "Post".into(),
		})
	});

	assert!(matches!(result, Err(HelperError::AttributeLookup { .. })));
}

#[rstest]
fn test_v3_sections_can_use_context_primitives(ctx: HtmlContext) {
	let html = modal_v3(&ctx, "m1", "Confirm", |modal| {
		modal.footer(|ctx| {
			let buttons = [
				ctx.content_tag("button", &Attributes::new().class("btn"), "Cancel")?,
				ctx.content_tag("button", &Attributes::new().class("btn btn-primary"), "OK")?,
			];
			Ok(ctx.safe_join(buttons))
		})?;
		Ok(())
	})
	.unwrap();

	assert!(html.as_str().contains(concat!(
		r#"<div class="modal-footer">"#,
		r#"<button class="btn">Cancel</button>"#,
		r#"<button class="btn btn-primary">OK</button>"#,
		"</div>"
	)));
}

#[rstest]
fn test_close_label_from_settings() {
	let ctx = HtmlContext::with_settings(HelperSettings::default().close_label("Dismiss"));

	let html = modal_v1(&ctx, "m1", "Confirm", "").unwrap();

	assert!(html.as_str().contains(r#"aria-label="Dismiss""#));
}

#[rstest]
fn test_rendering_is_repeatable(ctx: HtmlContext) {
	let render = || {
		let mut modal = Modal::new(&ctx, "m1", "Confirm");
		modal.body(|_| Ok("b")).unwrap();
		modal.render().unwrap()
	};

	assert_eq!(render(), render());
}

#[rstest]
fn test_v3_overwrite_keeps_last_and_warns(ctx: HtmlContext) {
	use tracing_subscriber::layer::SubscriberExt as _;
	use tracing_subscriber::util::SubscriberInitExt as _;

	// Arrange
	/// A tracing layer that records the `slot` field of warning events
	struct WarnCapture {
		slots: Arc<Mutex<Vec<String>>>,
	}

	impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCapture {
		fn on_event(
			&self,
			event: &tracing::Event<'_>,
			_ctx: tracing_subscriber::layer::Context<'_, S>,
		) {
			struct SlotVisitor {
				slot: Option<String>,
			}

			impl tracing::field::Visit for SlotVisitor {
				fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
					if field.name() == "slot" {
						self.slot = Some(value.to_string());
					}
				}

				fn record_debug(
					&mut self,
					_field: &tracing::field::Field,
					_value: &dyn std::fmt::Debug,
				) {
				}
			}

			if *event.metadata().level() != tracing::Level::WARN {
				return;
			}
			let mut visitor = SlotVisitor { slot: None };
			event.record(&mut visitor);
			if let Some(slot) = visitor.slot {
				self.slots.lock().unwrap().push(slot);
			}
		}
	}

	let slots = Arc::new(Mutex::new(Vec::new()));
	let _guard = tracing_subscriber::registry()
		.with(WarnCapture {
			slots: slots.clone(),
		})
		.set_default();

	// Act
	let html = modal_v3(&ctx, "m1", "Confirm", |modal| {
		modal.body(|_| Ok("first"))?;
		modal.body(|_| Ok("second"))?;
		modal.footer(|_| Ok("only"))?;
		Ok(())
	})
	.unwrap();

	// Assert
	assert!(html.as_str().contains(r#"<div class="modal-body">second</div>"#));
	assert!(!html.as_str().contains("first"));
	assert_eq!(*slots.lock().unwrap(), vec!["body".to_string()]);
}
