//! HTML tag builder.
//!
//! # Scope
//!
//! This crate builds the textual representation of a single HTML element:
//! - **Attributes** with set-if-absent or forced-overwrite merge semantics,
//!   keyed case-insensitively and rendered in first-insertion order
//! - **CSS classes** accumulated into the `class` attribute
//! - **Inner content**, either raw markup or encoded plain text
//! - **Render modes**: start tag, end tag, self-closing tag, or the full element
//!
//! # Not Implemented
//!
//! - HTML parsing or a DOM tree
//! - Tag and attribute name validation
//! - Nested child elements (inner content is a pre-rendered string)
//! - Void element rules beyond the requested render mode
//!
//! # Example
//!
//! ```
//! use tagbuilder_html::{RenderMode, TagBuilder};
//!
//! let mut div = TagBuilder::new("div")?;
//! div.merge_attribute("class", "box", false)?;
//! div.set_inner_text("Hi & bye");
//! assert_eq!(div.to_string(), r#"<div class="box">Hi &amp; bye</div>"#);
//!
//! let mut img = TagBuilder::new("img")?;
//! img.merge_attribute("src", "a.png", false)?;
//! assert_eq!(img.render(RenderMode::SelfClosing), r#"<img src="a.png" />"#);
//! # Ok::<(), tagbuilder_html::TagBuilderError>(())
//! ```

/// Case-insensitive, insertion-ordered attribute storage.
pub mod attributes;
/// The tag builder itself.
pub mod builder;
/// HTML escaping for element content and attribute values.
pub mod encode;
/// Errors raised on invalid builder arguments.
pub mod error;
/// The four output shapes a builder can render.
pub mod render_mode;

pub use attributes::{Attribute, AttributeMap};
pub use builder::TagBuilder;
pub use error::{ErrorKind, Result, TagBuilderError};
pub use render_mode::RenderMode;
