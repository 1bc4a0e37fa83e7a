//! # Vellum
//!
//! View helpers for server-rendered HTML, in the style of Rails' helper modules.
//!
//! Vellum is split into three crates, re-exported here:
//!
//! - [`conf`] - `HelperSettings`, loaded from TOML and `VELLUM_*` variables
//! - [`markup`] - safe fragments, attribute maps, tags and the [`ViewContext`]
//! - [`helpers`] - description lists, modals and dropdowns
//!
//! Every helper takes its rendering context explicitly and returns one escaped
//! [`SafeString`] fragment. Text is escaped on the way in; fragments produced
//! by other helpers are embedded as is.
//!
//! ## Quick Example
//!
//! ```rust
//! use vellum::prelude::*;
//! use serde_json::json;
//!
//! let ctx = HtmlContext::new();
//!
//! let post = json!({"title": "Hello", "author_id": 7, "summary": ""});
//! let details = description_list(&ctx, &post, ["title", "author_id", "summary"], ListLayout::Horizontal)?;
//! assert_eq!(
//!     details.as_str(),
//!     r#"<dl class="dl-horizontal"><dt>Title</dt><dd>Hello</dd><dt>Author</dt><dd>7</dd><dt>Summary</dt><dd>-</dd></dl>"#
//! );
//!
//! let confirm = modal_v3(&ctx, "delete-post", "Delete post", |modal| {
//!     modal.footer(|ctx| Ok(ctx.content_tag("button", &Attributes::new().class("btn"), "Delete")?))?;
//!     modal.body(|ctx| Ok(ctx.safe_join([details.clone()])))?;
//!     Ok(())
//! })?;
//! assert!(confirm.as_str().find("modal-body") < confirm.as_str().find("modal-footer"));
//! # Ok::<(), HelperError>(())
//! ```

pub use vellum_conf as conf;
pub use vellum_helpers as helpers;
pub use vellum_markup as markup;

pub use vellum_conf::{HelperSettings, SettingsError};
pub use vellum_helpers::{
	Dropdown, HelperError, ListLayout, Modal, Record, SerializedRecord, description_list,
	description_list_pair, description_list_pair_for, dropdown, modal_v1, modal_v2, modal_v3,
};
pub use vellum_markup::{
	AttrValue, Attributes, Content, HtmlContext, MarkupError, SafeString, ViewContext,
};

/// Everything a template module usually needs
pub mod prelude {
	pub use crate::{
		Attributes, Content, Dropdown, HelperError, HelperSettings, HtmlContext, ListLayout,
		Modal, Record, SafeString, SerializedRecord, ViewContext, description_list,
		description_list_pair, description_list_pair_for, dropdown, modal_v1, modal_v2, modal_v3,
	};
}
