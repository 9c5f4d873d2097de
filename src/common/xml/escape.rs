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
/// # Examples
///
/// ```
/// use slidewright::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(
            escape_xml(r#"Y-mAbs & SERB <"acquired"> 'Sept'"#),
            "Y-mAbs &amp; SERB &lt;&quot;acquired&quot;&gt; &apos;Sept&apos;"
        );
    }

    #[test]
    fn test_escape_leaves_unicode_alone() {
        // En dashes, arrows and euro signs appear throughout the deck text
        assert_eq!(escape_xml("2015–2025 → €300"), "2015–2025 → €300");
    }
}
