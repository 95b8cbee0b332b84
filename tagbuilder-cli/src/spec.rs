use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tagbuilder_html::TagBuilder;

/// A tag described in JSON.
///
/// ```json
/// {
///   "tag": "a",
///   "attributes": { "href": "/docs", "data-page": 3, "download": null },
///   "classes": ["nav", "active"],
///   "text": "Docs & more",
///   "encode": true,
///   "replace": false,
///   "mode": "normal"
/// }
/// ```
///
/// Every field is optional. Attribute values that are not strings are
/// converted to their JSON text; `null` makes a bare attribute.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagSpec {
    /// Tag name, unless given on the command line.
    pub tag: Option<String>,
    /// Attributes merged in document order.
    pub attributes: IndexMap<String, Value>,
    /// Classes added in order, so the last one renders first.
    pub classes: Vec<String>,
    /// Plain-text content.
    pub text: Option<String>,
    /// Raw markup content. Wins over `text` when both are present.
    pub html: Option<String>,
    /// Escaping switch; the builder default is on.
    pub encode: Option<bool>,
    /// Whether attribute merges overwrite existing entries.
    pub replace: bool,
    /// Render mode name.
    pub mode: Option<String>,
}

impl TagSpec {
    /// Parse a tag description from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid tag description.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid tag description")
    }

    /// Read and parse a tag description file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in '{}'", path.display()))
    }

    /// Apply encoding, attributes, classes and content to `builder`, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if an attribute key is empty.
    pub fn apply(&self, builder: &mut TagBuilder) -> tagbuilder_html::Result<()> {
        if let Some(encode) = self.encode {
            builder.set_encode_value(encode);
        }

        for (key, value) in &self.attributes {
            match attribute_value(value) {
                Some(value) => builder.merge_attribute(key.as_str(), value, self.replace)?,
                None => builder.merge_bare_attribute(key.as_str(), self.replace)?,
            }
        }

        for class in &self.classes {
            builder.add_css_class(class);
        }

        if let Some(text) = &self.text {
            builder.set_inner_text(text);
        }
        if let Some(html) = &self.html {
            builder.set_inner_html(html.as_str());
        }
        Ok(())
    }
}

fn attribute_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
