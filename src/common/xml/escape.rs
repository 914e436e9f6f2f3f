use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// Characters XML 1.0 forbids outright (C0 controls other than tab, LF and
/// CR, plus U+FFFE and U+FFFF) cannot be escaped and are dropped.
///
/// # Examples
///
/// ```
/// use deckwright::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    const REPLACEMENTS: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];
    if s.chars().all(is_xml_char) {
        return XML_ESCAPER.replace_all(s, &REPLACEMENTS);
    }
    let cleaned: String = s.chars().filter(|&c| is_xml_char(c)).collect();
    XML_ESCAPER.replace_all(&cleaned, &REPLACEMENTS)
}

/// The `Char` production of XML 1.0.
#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_glyphs_alone() {
        assert_eq!(escape_xml("• Affordable • Open Source"), "• Affordable • Open Source");
        assert_eq!(escape_xml("C++ / Arduino"), "C++ / Arduino");
    }

    #[test]
    fn test_escape_apostrophe() {
        assert_eq!(escape_xml("It's"), "It&apos;s");
    }

    #[test]
    fn test_escape_drops_forbidden_controls() {
        assert_eq!(escape_xml("bad\u{1}title"), "badtitle");
        assert_eq!(escape_xml("a\u{0}<\u{FFFF}b"), "a&lt;b");
        assert_eq!(escape_xml("tab\there\r\n"), "tab\there\r\n");
    }
}
