use strum_macros::{Display, EnumString};

/// The output shape produced by [`TagBuilder::render`](crate::TagBuilder::render).
///
/// Names parse and print in kebab-case (`start-tag`, `self-closing`, ...),
/// ignoring ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum RenderMode {
    /// `<tag attrs>`
    StartTag,
    /// `</tag>`
    EndTag,
    /// `<tag attrs />`
    SelfClosing,
    /// `<tag attrs>inner</tag>`
    #[default]
    Normal,
}

impl RenderMode {
    /// Parse a mode name, treating anything unrecognised as [`RenderMode::Normal`].
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }
}
