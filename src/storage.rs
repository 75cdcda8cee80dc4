use crate::models::Book;
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

pub const DB_FILE: &str = "library.json";

/// Load the catalog from disk. A missing file is an empty library,
/// not an error; a file that exists but cannot be read or parsed is.
pub fn load(path: &Path) -> Result<Vec<Book>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(path)
        .with_context(|| format!("reading library store {}", path.display()))?;
    let books = serde_json::from_str(&s)
        .with_context(|| format!("library store {} is malformed", path.display()))?;
    Ok(books)
}

/// Overwrite the store with the full catalog.
pub fn save(path: &Path, books: &[Book]) -> Result<()> {
    let s = serde_json::to_string_pretty(books)?;
    fs::write(path, s)
        .with_context(|| format!("writing library store {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Book> {
        vec![
            Book::new("Dune".into(), "Frank Herbert".into(), 1965, "Sci-Fi".into(), true, 5),
            Book::new("Emma".into(), "Jane Austen".into(), 1815, "Romance".into(), false, 3),
        ]
    }

    #[test]
    fn missing_file_is_empty_library() {
        let tmp = TempDir::new().expect("temp dir");
        let books = load(&tmp.path().join(DB_FILE)).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join(DB_FILE);
        let books = sample();
        save(&path, &books).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, books[0].id);
        assert_eq!(loaded[0].title, "Dune");
        assert_eq!(loaded[1].id, books[1].id);
        assert_eq!(loaded[1].rating, 3);
    }

    #[test]
    fn malformed_store_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join(DB_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(load(&path).is_err());
    }
}
