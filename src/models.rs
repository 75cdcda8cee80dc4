use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use uuid::Uuid;

pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 2100;

pub const RATINGS: [u8; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
    pub rating: u8,
    pub cover: Option<PathBuf>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub added: chrono::DateTime<chrono::Utc>,
}

impl Book {
    pub fn new(title: String, author: String, year: i32, genre: String, read: bool, rating: u8) -> Self {
        Book {
            id: Uuid::new_v4().to_string(),
            title,
            author,
            year,
            genre,
            read,
            rating,
            cover: None,
            added: chrono::Utc::now(),
        }
    }

    /// Case-insensitive substring match against title or author.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.author.to_lowercase().contains(&q)
    }

    pub fn stars(&self) -> String {
        "⭐".repeat(self.rating as usize)
    }
}

/// Editable fields of a record. The id, cover and added timestamp
/// are not touched by an update.
#[derive(Debug, Clone)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
    pub rating: u8,
}

pub fn valid_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}
