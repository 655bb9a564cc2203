use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Written in place of a title when the page has no `<title>` element.
pub const NO_TITLE: &str = "No title found";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern compiles")
});
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Normalized text of a page's `<title>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(String);

impl PageTitle {
    /// Normalizes raw element text into a title.
    pub fn from_raw(raw: &str) -> Self {
        Self(normalize_title(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// First `<title>` element in `html`, case-insensitive, spanning newlines.
pub fn extract_title(html: &str) -> Option<PageTitle> {
    TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|inner| PageTitle::from_raw(inner.as_str()))
}

/// Trims, collapses whitespace runs to one space, then decodes entities.
pub fn normalize_title(raw: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(raw.trim(), " ");
    decode_entities(&collapsed)
}

/// Decodes `&amp;`, then `&lt;`, then `&gt;`, each over the whole text.
///
/// `&amp;` goes first, so `&amp;lt;` ends up as `<`. Other entities are left as is.
pub fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_tag_with_padding() {
        let title = extract_title("<TITLE>  Hello   World  </TITLE>").unwrap();
        assert_eq!(title.as_str(), "Hello World");
    }

    #[test]
    fn attributes_and_newlines() {
        let html = "<head>\n<title lang=\"en\">\n  Herman\n\tMelville \n</title></head>";
        assert_eq!(extract_title(html).unwrap().as_str(), "Herman Melville");
    }

    #[test]
    fn first_title_wins() {
        let html = "<title>One</title><svg><title>Two</title></svg>";
        assert_eq!(extract_title(html).unwrap().as_str(), "One");
    }

    #[test]
    fn missing_title_is_none() {
        assert_eq!(extract_title("<html><body>nothing</body></html>"), None);
        assert_eq!(extract_title("<title>unterminated"), None);
    }

    #[test]
    fn entities_are_decoded_in_order() {
        assert_eq!(decode_entities("Tom &amp; Jerry &lt;3 &gt;"), "Tom & Jerry <3 >");
        assert_eq!(decode_entities("&amp;lt;"), "<");
        assert_eq!(decode_entities("&quot;kept&quot;"), "&quot;kept&quot;");
    }

    #[test]
    fn escaped_entities_in_title_collapse_to_tags() {
        let title = extract_title("<title>&amp;lt;b&amp;gt; Tags</title>").unwrap();
        assert_eq!(title.as_str(), "<b> Tags");
    }

    #[test]
    fn empty_title_element_is_empty_string() {
        assert_eq!(extract_title("<title>   </title>").unwrap().as_str(), "");
    }
}
