/// Which screen owns input and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Reading,
    #[default]
    Browsing,
    Searching,
    VideoLink, // Selected entry is a video, shown as a link instead of read
    Login,
    Help,
}

/// What the search box matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    General,
    FeedTitle,
    Author,
    Category,
    Tag,
}

impl SearchMode {
    pub fn all() -> &'static [SearchMode] {
        &[
            SearchMode::General,
            SearchMode::FeedTitle,
            SearchMode::Author,
            SearchMode::Category,
            SearchMode::Tag,
        ]
    }

    pub fn next(&self) -> Self {
        match self {
            SearchMode::General => SearchMode::FeedTitle,
            SearchMode::FeedTitle => SearchMode::Author,
            SearchMode::Author => SearchMode::Category,
            SearchMode::Category => SearchMode::Tag,
            SearchMode::Tag => SearchMode::General,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchMode::General => "General",
            SearchMode::FeedTitle => "Blog Title",
            SearchMode::Author => "Author",
            SearchMode::Category => "Category",
            SearchMode::Tag => "Tags",
        }
    }

    /// Modes that pick an id from a locally filtered list instead of sending free text
    pub fn selects_id(&self) -> bool {
        matches!(self, SearchMode::FeedTitle | SearchMode::Category)
    }
}

/// Focused field on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Url,
    Token,
}

impl LoginField {
    pub fn toggle(&self) -> Self {
        match self {
            LoginField::Url => LoginField::Token,
            LoginField::Token => LoginField::Url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_mode_cycle_visits_all_in_order() {
        let mut mode = SearchMode::General;
        let mut seen = vec![mode];
        for _ in 0..4 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, SearchMode::all());
        assert_eq!(mode.next(), SearchMode::General);
    }

    #[test]
    fn test_id_selection_modes() {
        assert!(SearchMode::Category.selects_id());
        assert!(SearchMode::FeedTitle.selects_id());
        assert!(!SearchMode::General.selects_id());
        assert!(!SearchMode::Author.selects_id());
        assert!(!SearchMode::Tag.selects_id());
    }
}
