pub mod genre_year;
pub mod sentiment_counts;
pub mod sentiment_rank;
pub mod similarity;
pub mod user_genre;

pub use sentiment_rank::{make_ranker, SentimentRanking};
