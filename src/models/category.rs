use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Category selector over the fetched recommendations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    #[default]
    All,
    Movie,
    Series,
    Anime,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Movie => "movie",
            Category::Series => "series",
            Category::Anime => "anime",
        }
    }

    /// Lenient parse: anything unrecognized selects every item
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "movie" => Category::Movie,
            "series" => Category::Series,
            "anime" => Category::Anime,
            _ => Category::All,
        }
    }

    /// Whether an item whose `type` is `kind` belongs to this category
    pub fn matches(&self, kind: &str) -> bool {
        let kind = kind.to_lowercase();
        match self {
            Category::All => true,
            Category::Movie => kind == "movie",
            Category::Series => kind == "web series" || kind == "series",
            Category::Anime => kind == "anime",
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::parse(&value)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-category totals shown on the filter buttons
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCounts {
    pub all: usize,
    pub movies: usize,
    pub series: usize,
    pub anime: usize,
}

impl CategoryCounts {
    pub fn tally<'a>(kinds: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = CategoryCounts::default();
        for kind in kinds {
            counts.all += 1;
            if Category::Movie.matches(kind) {
                counts.movies += 1;
            } else if Category::Series.matches(kind) {
                counts.series += 1;
            } else if Category::Anime.matches(kind) {
                counts.anime += 1;
            }
        }
        counts
    }
}
