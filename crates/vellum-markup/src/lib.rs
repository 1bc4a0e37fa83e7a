//! # Vellum Markup
//!
//! The primitives the Vellum view helpers are built from:
//!
//! - [`SafeString`]: an escaped, immutable HTML fragment
//! - [`Content`]: text (escaped on use) or an existing fragment
//! - [`Attributes`]: ordered attribute maps with nested `data-*`/`aria-*` support
//! - [`content_tag`], [`tag`], [`safe_join`]: fragment construction
//! - [`ViewContext`]: the same primitives plus [`capture`](ViewContext::capture),
//!   passed explicitly to every helper
//!
//! ## Example
//!
//! ```
//! use vellum_markup::{Attributes, HtmlContext, ViewContext};
//!
//! let ctx = HtmlContext::new();
//! let parts = [
//!     ctx.content_tag("dt", &Attributes::new(), "Name").unwrap(),
//!     ctx.content_tag("dd", &Attributes::new(), "<Ada>").unwrap(),
//! ];
//! let html = ctx.safe_join(parts);
//! assert_eq!(html.as_str(), "<dt>Name</dt><dd>&lt;Ada&gt;</dd>");
//! ```

#![warn(missing_docs)]

pub mod attributes;
pub mod context;
pub mod error;
pub mod safe_string;
pub mod tag;

pub use attributes::{AttrValue, Attributes};
pub use context::{HtmlContext, ViewContext};
pub use error::{MarkupError, Result};
pub use safe_string::{Content, SafeString, escape};
pub use tag::{content_tag, safe_join, safe_join_with, tag};
pub use vellum_conf::HelperSettings;
