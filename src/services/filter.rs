use crate::models::{Category, CategoryCounts, RecommendationItem};

/// Items of `all` that belong to `category`, in their original order
pub fn filter_items(all: &[RecommendationItem], category: Category) -> Vec<&RecommendationItem> {
    all.iter().filter(|item| item.is_in(category)).collect()
}

/// The last fetched list plus the active category selector
///
/// The filtered subset is never stored; it is derived from `(all, active)` on demand
/// so it cannot drift from either.
#[derive(Debug, Clone, Default)]
pub struct RecommendationSet {
    all: Vec<RecommendationItem>,
    active: Category,
    fetched: bool,
}

impl RecommendationSet {
    /// Swaps in a freshly fetched list and resets the selector to `all`
    pub fn replace(&mut self, items: Vec<RecommendationItem>) {
        self.all = items;
        self.active = Category::All;
        self.fetched = true;
    }

    pub fn set_filter(&mut self, category: Category) {
        self.active = category;
    }

    pub fn all(&self) -> &[RecommendationItem] {
        &self.all
    }

    pub fn active(&self) -> Category {
        self.active
    }

    /// Whether any fetch has completed in this session
    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    pub fn filtered(&self) -> Vec<&RecommendationItem> {
        filter_items(&self.all, self.active)
    }

    /// Totals per category, independent of the active selector
    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts::tally(self.all.iter().map(|item| item.kind.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fallback::fallback_recommendations;

    fn item(title: &str, kind: &str) -> RecommendationItem {
        RecommendationItem {
            title: title.to_string(),
            kind: kind.to_string(),
            description: String::new(),
            rating: 7.0,
            year: 2020,
            poster: String::new(),
            reason: String::new(),
            platforms: vec![],
            genre: String::new(),
            language: String::new(),
        }
    }

    fn titles(items: &[&RecommendationItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_anime_filter_on_fallback_keeps_order() {
        let mut set = RecommendationSet::default();
        set.replace(fallback_recommendations());
        set.set_filter(Category::Anime);
        assert_eq!(
            titles(&set.filtered()),
            vec!["Spirited Away", "Your Name", "Attack on Titan"]
        );
    }

    #[test]
    fn test_filter_matches_predicate_case_insensitively() {
        let all = vec![
            item("a", "MOVIE"),
            item("b", "web series"),
            item("c", "Series"),
            item("d", "ANIME"),
            item("e", "Documentary"),
        ];

        for category in [Category::Movie, Category::Series, Category::Anime] {
            let expected: Vec<&RecommendationItem> =
                all.iter().filter(|i| category.matches(&i.kind)).collect();
            assert_eq!(filter_items(&all, category), expected);
        }
        assert_eq!(titles(&filter_items(&all, Category::Series)), vec!["b", "c"]);
        assert_eq!(filter_items(&all, Category::All).len(), 5);
    }

    #[test]
    fn test_set_filter_is_idempotent() {
        let mut set = RecommendationSet::default();
        set.replace(fallback_recommendations());

        set.set_filter(Category::Series);
        let once = titles(&set.filtered());
        set.set_filter(Category::Series);
        assert_eq!(titles(&set.filtered()), once);
    }

    #[test]
    fn test_counts_ignore_active_filter() {
        let mut set = RecommendationSet::default();
        set.replace(fallback_recommendations());
        let before = set.counts();

        for category in [Category::Movie, Category::Series, Category::Anime, Category::All] {
            set.set_filter(category);
            assert_eq!(set.counts(), before);
        }
        assert_eq!(before.all, 6);
        assert_eq!(before.movies, 1);
        assert_eq!(before.series, 2);
        assert_eq!(before.anime, 3);
    }

    #[test]
    fn test_replace_resets_filter() {
        let mut set = RecommendationSet::default();
        assert!(!set.is_fetched());

        set.replace(fallback_recommendations());
        set.set_filter(Category::Movie);
        set.replace(vec![item("only", "Anime")]);

        assert!(set.is_fetched());
        assert_eq!(set.active(), Category::All);
        assert_eq!(titles(&set.filtered()), vec!["only"]);
    }

    #[test]
    fn test_empty_filter_result() {
        let mut set = RecommendationSet::default();
        set.replace(vec![item("a", "Movie")]);
        set.set_filter(Category::Anime);
        assert!(set.filtered().is_empty());
        assert!(set.is_fetched());
    }
}
