/// Static strings used by the page chrome.
///
/// Strings are stored raw; the document model escapes them on serialization.
#[derive(Debug, Clone)]
pub struct PageStrings {
    /// Page heading in the host skeleton
    pub page_heading: &'static str,

    /// Label next to the language toggle checkbox
    pub toggle_label: &'static str,

    /// Placeholder shown in the feed before initialization runs
    pub loading: &'static str,

    /// Title used when an article has no headline
    pub untitled: &'static str,

    /// Text of the outbound link on every card
    pub read_original: &'static str,

    /// Prefix of the score badge
    pub score_prefix: &'static str,

    /// Score badge value when the article has no numeric score
    pub score_missing: &'static str,

    /// Separator between source name and date in the metadata line
    pub meta_separator: &'static str,

    /// Message shown in the feed when there is nothing to render
    pub no_articles: &'static str,
}

pub const PAGE_STRINGS: PageStrings = PageStrings {
    page_heading: "SDG16 News Monitor",
    toggle_label: "Show Hindi summaries",
    loading: "Loading articles...",
    untitled: "Untitled",
    read_original: "Read original",
    score_prefix: "SDG16",
    score_missing: "-",
    meta_separator: "·",
    no_articles: "No articles yet. Run the scraper to populate data.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_articles_message() {
        assert!(PAGE_STRINGS.no_articles.starts_with("No articles yet"));
    }

    #[test]
    fn test_separator_is_plain_middot() {
        assert_eq!(PAGE_STRINGS.meta_separator, "\u{00B7}");
    }

    #[test]
    fn test_strings_not_empty() {
        for s in [
            PAGE_STRINGS.page_heading,
            PAGE_STRINGS.toggle_label,
            PAGE_STRINGS.loading,
            PAGE_STRINGS.untitled,
            PAGE_STRINGS.read_original,
            PAGE_STRINGS.score_prefix,
            PAGE_STRINGS.score_missing,
        ] {
            assert!(!s.is_empty());
        }
    }
}
