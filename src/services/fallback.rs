use crate::models::RecommendationItem;

struct FallbackEntry {
    title: &'static str,
    kind: &'static str,
    description: &'static str,
    rating: f64,
    year: i32,
    poster: &'static str,
    reason: &'static str,
    platforms: &'static [&'static str],
    genre: &'static str,
    language: &'static str,
}

/// Shown whenever the recommendation service cannot be used
const FALLBACK: [FallbackEntry; 6] = [
    FallbackEntry {
        title: "Spirited Away",
        kind: "Anime",
        description: "A young girl enters a world ruled by gods, witches, and spirits, where humans are changed into beasts.",
        rating: 9.3,
        year: 2001,
        poster: "https://m.media-amazon.com/images/M/MV5BMjlmZmI5MDctNDE2YS00YWE0LWE5ZWItZDBhYWQ0NTcxNWRhXkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_FMjpg_UX1000_.jpg",
        reason: "Perfect for your current mood with magical storytelling",
        platforms: &["Netflix", "Crunchyroll", "HBO Max"],
        genre: "Fantasy",
        language: "Japanese",
    },
    FallbackEntry {
        title: "The Grand Budapest Hotel",
        kind: "Movie",
        description: "A writer encounters the owner of an aging high-class hotel, who tells of his early years serving as a lobby boy.",
        rating: 8.1,
        year: 2014,
        poster: "https://m.media-amazon.com/images/M/MV5BMzM5NjUxOTEyMl5BMl5BanBnXkFtZTgwNjEyMDM0MDE@._V1_FMjpg_UX1000_.jpg",
        reason: "Whimsical and visually stunning, matches your mood perfectly",
        platforms: &["Disney+", "Amazon Prime", "Apple TV"],
        genre: "Comedy",
        language: "English",
    },
    FallbackEntry {
        title: "Stranger Things",
        kind: "Web Series",
        description: "When a young boy vanishes, a small town uncovers a mystery involving secret experiments and supernatural forces.",
        rating: 8.7,
        year: 2016,
        poster: "https://m.media-amazon.com/images/M/MV5BN2ZmYjg1YmItNWQ4OC00YWM0LWE0ZDktYThjOTZiZjhhN2Q2XkEyXkFqcGdeQXVyNjgxNTQ3Mjk@._V1_FMjpg_UX1000_.jpg",
        reason: "Nostalgic 80s vibe with mystery and adventure",
        platforms: &["Netflix"],
        genre: "Sci-Fi",
        language: "English",
    },
    FallbackEntry {
        title: "Your Name",
        kind: "Anime",
        description: "Two teenagers discover they are magically and intermittently swapping bodies.",
        rating: 8.4,
        year: 2016,
        poster: "https://m.media-amazon.com/images/M/MV5BODRmZDVmNzUtZDA4ZC00NjhkLWI2M2UtN2M0ZDIzNDcxYThjL5BMl5BanBnXkFtZTgwMzExMjE3OTE@._V1_FMjpg_UX1000_.jpg",
        reason: "Beautiful animation with romantic and mystical elements",
        platforms: &["Funimation", "Crunchyroll"],
        genre: "Romance",
        language: "Japanese",
    },
    FallbackEntry {
        title: "Breaking Bad",
        kind: "Web Series",
        description: "A high school chemistry teacher turned methamphetamine manufacturer partners with a former student.",
        rating: 9.5,
        year: 2008,
        poster: "https://m.media-amazon.com/images/M/MV5BYmQ4YWMxYjUtNjZmYi00MDQ1LWFjMjMtNjA5ZDdiYjdiODU5XkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_FMjpg_UX1000_.jpg",
        reason: "Intense drama perfect for deep emotional engagement",
        platforms: &["Netflix", "Amazon Prime"],
        genre: "Drama",
        language: "English",
    },
    FallbackEntry {
        title: "Attack on Titan",
        kind: "Anime",
        description: "Humanity fights for survival against giant humanoid titans.",
        rating: 9.0,
        year: 2013,
        poster: "https://m.media-amazon.com/images/M/MV5BNzc5MTczNDQtNDFjNi00ZDU0LTk4Y2EtZWMyZTBhZjBkYWQ0XkEyXkFqcGdeQXVyNTgyNTA4MjM@._V1_FMjpg_UX1000_.jpg",
        reason: "Action-packed with incredible storytelling",
        platforms: &["Crunchyroll", "Funimation", "Hulu"],
        genre: "Action",
        language: "Japanese",
    },
];

impl FallbackEntry {
    fn to_item(&self) -> RecommendationItem {
        RecommendationItem {
            title: self.title.to_string(),
            kind: self.kind.to_string(),
            description: self.description.to_string(),
            rating: self.rating,
            year: self.year,
            poster: self.poster.to_string(),
            reason: self.reason.to_string(),
            platforms: self.platforms.iter().map(|p| p.to_string()).collect(),
            genre: self.genre.to_string(),
            language: self.language.to_string(),
        }
    }
}

/// The fixed degraded-mode list, in display order
pub fn fallback_recommendations() -> Vec<RecommendationItem> {
    FALLBACK.iter().map(FallbackEntry::to_item).collect()
}
