use std::fmt::{self, Display, Formatter, Write};

use crate::attributes::{Attribute, AttributeMap, fold};
use crate::encode::{encode_attribute, encode_text};
use crate::error::{Result, TagBuilderError};
use crate::render_mode::RenderMode;

/// Name of the attribute that [`TagBuilder::add_css_class`] accumulates into.
const CLASS: &str = "class";

/// Folded name of the attribute that is stored but never rendered.
const ID: &str = "ID";

/// Builds the markup of one HTML element.
///
/// A builder owns a tag name fixed at construction, a set of attributes, an
/// inner content string and a flag deciding whether values are escaped. It is
/// mutated freely and can be rendered any number of times in any
/// [`RenderMode`]; rendering never changes it.
///
/// `Display` renders [`RenderMode::Normal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBuilder {
    tag_name: String,
    attributes: AttributeMap,
    encode_value: bool,
    inner_html: String,
}

impl TagBuilder {
    /// Create a builder for `tag_name` with no attributes, empty content and
    /// encoding switched on.
    ///
    /// # Errors
    ///
    /// Returns [`TagBuilderError::EmptyTagName`] if `tag_name` is empty.
    pub fn new(tag_name: impl Into<String>) -> Result<Self> {
        let tag_name = tag_name.into();
        if tag_name.is_empty() {
            return Err(TagBuilderError::EmptyTagName);
        }

        Ok(Self {
            tag_name,
            attributes: AttributeMap::new(),
            encode_value: true,
            inner_html: String::new(),
        })
    }

    /// The tag name given at construction.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// All stored attributes, including a suppressed `id`.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Look up one attribute by name, in any casing.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// The value of an attribute that exists and carries one.
    #[must_use]
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(|attr| attr.value.as_deref())
    }

    /// Whether attribute values and inner text are escaped.
    #[must_use]
    pub const fn encode_value(&self) -> bool {
        self.encode_value
    }

    /// Switch escaping on or off.
    ///
    /// Attribute values are escaped when rendered, so this affects every
    /// attribute on the next render. Inner text is escaped when it is set, so
    /// content stored earlier keeps the form it was stored in.
    pub const fn set_encode_value(&mut self, encode_value: bool) {
        self.encode_value = encode_value;
    }

    /// The inner content, exactly as it will be rendered.
    #[must_use]
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replace the inner content with already-safe markup. Never escaped.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    /// Replace the inner content with plain text, escaped if
    /// [`encode_value`](Self::encode_value) is on.
    pub fn set_inner_text(&mut self, text: &str) {
        self.inner_html = if self.encode_value {
            encode_text(text).into_owned()
        } else {
            text.to_owned()
        };
    }

    /// Put a class token in front of the existing `class` value.
    ///
    /// Tokens are not trimmed or deduplicated, so classes added one after
    /// another read in reverse order of the calls: adding `a` then `b` gives
    /// `class="b a"`.
    pub fn add_css_class(&mut self, value: &str) {
        if let Some(class) = self.attributes.get_mut(CLASS) {
            let existing = class.value.as_deref().unwrap_or_default();
            class.value = Some(format!("{value} {existing}"));
        } else {
            let _ = self.attributes.insert(CLASS, Some(value.to_owned()));
        }
    }

    /// Set `key` to `value` unless it already exists, or unconditionally when
    /// `replace_existing` is set.
    ///
    /// Keys compare case-insensitively. A replacement takes over the casing of
    /// `key`; a skipped merge leaves value and casing untouched. An empty
    /// `value` renders as a bare attribute.
    ///
    /// # Errors
    ///
    /// Returns [`TagBuilderError::EmptyAttributeKey`] if `key` is empty.
    pub fn merge_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        replace_existing: bool,
    ) -> Result<()> {
        self.merge(key.into(), Some(value.into()), replace_existing)
    }

    /// Like [`merge_attribute`](Self::merge_attribute) for an attribute without
    /// a value, such as `disabled`.
    ///
    /// # Errors
    ///
    /// Returns [`TagBuilderError::EmptyAttributeKey`] if `key` is empty.
    pub fn merge_bare_attribute(
        &mut self,
        key: impl Into<String>,
        replace_existing: bool,
    ) -> Result<()> {
        self.merge(key.into(), None, replace_existing)
    }

    /// Merge every pair from `source`, in iteration order.
    ///
    /// Keys and values are converted with their `Display` impls. Duplicate keys
    /// within `source` resolve as first-wins without `replace_existing` and
    /// last-wins with it. An absent source is expressed as an empty iterator,
    /// e.g. `maybe_map.into_iter().flatten()`.
    ///
    /// # Errors
    ///
    /// Returns [`TagBuilderError::EmptyAttributeKey`] at the first key that
    /// displays as an empty string. Pairs before it stay merged.
    pub fn merge_attributes<I, K, V>(&mut self, source: I, replace_existing: bool) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        for (key, value) in source {
            self.merge(key.to_string(), Some(value.to_string()), replace_existing)?;
        }
        Ok(())
    }

    fn merge(&mut self, key: String, value: Option<String>, replace_existing: bool) -> Result<()> {
        if key.is_empty() {
            return Err(TagBuilderError::EmptyAttributeKey);
        }

        if replace_existing || !self.attributes.contains(&key) {
            let _ = self.attributes.insert(key, value);
        }
        Ok(())
    }

    /// Render into a fresh string.
    #[must_use]
    pub fn render(&self, mode: RenderMode) -> String {
        let mut out = String::new();
        // Writing into a String never fails.
        let _ = self.render_to(&mut out, mode);
        out
    }

    /// Render into an existing writer.
    ///
    /// # Errors
    ///
    /// Only fails if `out` does.
    pub fn render_to<W: Write + ?Sized>(&self, out: &mut W, mode: RenderMode) -> fmt::Result {
        match mode {
            RenderMode::StartTag => {
                self.write_open(out)?;
                out.write_char('>')
            }
            RenderMode::EndTag => self.write_close(out),
            RenderMode::SelfClosing => {
                self.write_open(out)?;
                out.write_str(" />")
            }
            RenderMode::Normal => {
                self.write_open(out)?;
                out.write_char('>')?;
                out.write_str(&self.inner_html)?;
                self.write_close(out)
            }
        }
    }

    /// `<tag` followed by the rendered attributes, without the closing bracket.
    fn write_open<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_char('<')?;
        out.write_str(&self.tag_name)?;
        for attr in &self.attributes {
            self.write_attribute(out, attr)?;
        }
        Ok(())
    }

    fn write_close<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_str("</")?;
        out.write_str(&self.tag_name)?;
        out.write_char('>')
    }

    fn write_attribute<W: Write + ?Sized>(&self, out: &mut W, attr: &Attribute) -> fmt::Result {
        // `id` is kept in the map but never emitted.
        if fold(&attr.name) == ID {
            return Ok(());
        }

        out.write_char(' ')?;
        out.write_str(&attr.name)?;

        if let Some(value) = attr.rendered_value() {
            out.write_str("=\"")?;
            if self.encode_value {
                out.write_str(&encode_attribute(value))?;
            } else {
                out.write_str(value)?;
            }
            out.write_char('"')?;
        }
        Ok(())
    }
}

impl Display for TagBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render_to(f, RenderMode::Normal)
    }
}
