//! Both encoders borrow their input when nothing needs escaping.

use std::borrow::Cow;

/// Escape text for placement as element content.
///
/// `&`, `<`, `>`, `"` and `'` are replaced by character references. Slashes
/// are left alone, so dates and URLs read as written.
#[must_use]
pub fn encode_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Escape a value for placement inside a double-quoted attribute.
///
/// `&`, `<`, `>` and `"` are replaced by character references. Single quotes
/// are left alone since the value is always wrapped in double quotes.
#[must_use]
pub fn encode_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_text_markup() {
        assert_eq!(encode_text("<b>"), "&lt;b&gt;");
        assert_eq!(encode_text("Hi & bye"), "Hi &amp; bye");
        assert_eq!(encode_text("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_encode_text_leaves_slashes() {
        assert!(matches!(encode_text("1/2"), Cow::Borrowed("1/2")));
        assert_eq!(encode_text("1/2 see http://x"), "1/2 see http://x");
    }

    #[test]
    fn test_encode_text_borrows_clean_input() {
        assert!(matches!(encode_text("plain text"), Cow::Borrowed("plain text")));
    }

    #[test]
    fn test_encode_attribute_quotes_and_ampersands() {
        assert_eq!(encode_attribute("a\"b&c<d"), "a&quot;b&amp;c&lt;d");
    }

    #[test]
    fn test_encode_attribute_keeps_single_quote() {
        assert_eq!(encode_attribute("it's"), "it's");
    }

    #[test]
    fn test_encode_attribute_borrows_clean_input() {
        assert!(matches!(encode_attribute("a.png"), Cow::Borrowed("a.png")));
    }
}
