//! View helpers for server-rendered HTML
//!
//! Small helpers that wrap markup construction for templates:
//!
//! - **Description lists**: label/value pairs, optionally read off a [`Record`]
//! - **Modals**: three builders for the same Bootstrap modal skeleton
//! - **Dropdowns**: a trigger link plus a list of item links
//!
//! Every helper takes a [`ViewContext`](vellum_markup::ViewContext) and returns
//! a single [`SafeString`](vellum_markup::SafeString) ready to be embedded in a
//! larger page.
//!
//! # Example
//!
//! ```rust
//! use vellum_helpers::modal::modal_v3;
//! use vellum_markup::{Attributes, HtmlContext, ViewContext};
//!
//! let ctx = HtmlContext::new();
//! let html = modal_v3(&ctx, "delete-post", "Delete post", |modal| {
//!     modal.body(|_| Ok("This cannot be undone."))?;
//!     modal.footer(|ctx| {
//!         Ok(ctx.content_tag("button", &Attributes::new().class("btn btn-danger"), "Delete")?)
//!     })?;
//!     Ok(())
//! })
//! .unwrap();
//! assert!(html.as_str().contains(r#"<div class="modal-footer"><button class="btn btn-danger">Delete</button></div>"#));
//! ```

#![warn(missing_docs)]

pub mod description_list;
pub mod dropdown;
pub mod error;
pub mod inflector;
pub mod modal;
pub mod record;

pub use description_list::{
	ListLayout, description_list, description_list_pair, description_list_pair_for,
};
pub use dropdown::{Dropdown, dropdown};
pub use error::{HelperError, Result};
pub use modal::{Modal, modal_v1, modal_v2, modal_v3};
pub use record::{Record, SerializedRecord};
