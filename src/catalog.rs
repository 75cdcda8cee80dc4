use crate::models::{Book, BookFields};
use crate::storage;
use std::collections::BTreeMap;
use std::path::PathBuf;
use anyhow::{bail, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    /// (genre, count), most common first, ties alphabetical.
    pub genres: Vec<(String, usize)>,
}

#[derive(Debug, Clone)]
pub struct Recommendations {
    /// Most frequent genre among read books, alphabetically smallest on a
    /// tie. None until at least one book is marked read.
    pub favorite_genre: Option<String>,
    pub in_favorite_genre: Vec<Book>,
    /// Up to three books rated 4 or higher, best first, original order on
    /// equal ratings.
    pub top_rated: Vec<Book>,
}

/// The ordered book collection plus its backing store. Every mutation
/// rewrites the store before returning.
pub struct Catalog {
    books: Vec<Book>,
    store_path: PathBuf,
}

impl Catalog {
    pub fn open(store_path: PathBuf) -> Result<Self> {
        let books = storage::load(&store_path)?;
        Ok(Catalog { books, store_path })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn add(&mut self, book: Book) -> Result<()> {
        self.books.push(book);
        storage::save(&self.store_path, &self.books)
    }

    pub fn update(&mut self, id: &str, fields: BookFields) -> Result<()> {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            bail!("no book with id {id}");
        };
        book.title = fields.title;
        book.author = fields.author;
        book.year = fields.year;
        book.genre = fields.genre;
        book.read = fields.read;
        book.rating = fields.rating;
        storage::save(&self.store_path, &self.books)
    }

    pub fn remove(&mut self, id: &str) -> Result<Book> {
        let Some(pos) = self.books.iter().position(|b| b.id == id) else {
            bail!("no book with id {id}");
        };
        let book = self.books.remove(pos);
        storage::save(&self.store_path, &self.books)?;
        Ok(book)
    }

    /// Case-insensitive substring search over title and author, in catalog
    /// order. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.books.iter().filter(|b| b.matches(query)).collect()
    }

    pub fn statistics(&self) -> Stats {
        let total = self.books.len();
        let read = self.books.iter().filter(|b| b.read).count();
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for b in &self.books {
            *counts.entry(b.genre.as_str()).or_insert(0) += 1;
        }
        let mut genres: Vec<(String, usize)> =
            counts.into_iter().map(|(g, n)| (g.to_string(), n)).collect();
        genres.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        Stats { total, read, unread: total - read, genres }
    }

    pub fn recommendations(&self) -> Recommendations {
        // max_by_key keeps the last maximum, so iterating the BTreeMap in
        // reverse leaves the alphabetically smallest genre on ties.
        let mut read_genres: BTreeMap<&str, usize> = BTreeMap::new();
        for b in self.books.iter().filter(|b| b.read) {
            *read_genres.entry(b.genre.as_str()).or_insert(0) += 1;
        }
        let favorite_genre = read_genres
            .iter()
            .rev()
            .max_by_key(|(_, n)| *n)
            .map(|(g, _)| g.to_string());

        let in_favorite_genre = match &favorite_genre {
            Some(g) => self.books.iter().filter(|b| &b.genre == g).cloned().collect(),
            None => Vec::new(),
        };

        let mut top_rated: Vec<Book> =
            self.books.iter().filter(|b| b.rating >= 4).cloned().collect();
        top_rated.sort_by(|a, b| b.rating.cmp(&a.rating));
        top_rated.truncate(3);

        Recommendations { favorite_genre, in_favorite_genre, top_rated }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn book(title: &str, author: &str, genre: &str, read: bool, rating: u8) -> Book {
        Book::new(title.into(), author.into(), 2000, genre.into(), read, rating)
    }

    fn open_empty(tmp: &TempDir) -> Catalog {
        Catalog::open(tmp.path().join("library.json")).expect("open")
    }

    #[test]
    fn add_then_search_finds_the_record() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        cat.add(book("Neuromancer", "William Gibson", "Sci-Fi", false, 4)).unwrap();
        let hits = cat.search("neuro");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Neuromancer");
    }

    #[test]
    fn empty_query_matches_nothing() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        cat.add(book("Dune", "Frank Herbert", "Sci-Fi", true, 5)).unwrap();
        assert!(cat.search("").is_empty());
        assert!(cat.search("   ").is_empty());
    }

    #[test]
    fn remove_takes_exactly_one_and_preserves_order() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        cat.add(book("A", "x", "g", false, 1)).unwrap();
        cat.add(book("B", "x", "g", false, 1)).unwrap();
        cat.add(book("C", "x", "g", false, 1)).unwrap();
        let id = cat.books()[1].id.clone();
        let removed = cat.remove(&id).unwrap();
        assert_eq!(removed.title, "B");
        let titles: Vec<_> = cat.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        assert!(cat.remove("nope").is_err());
        let fields = BookFields {
            title: "t".into(), author: "a".into(), year: 2000,
            genre: "g".into(), read: false, rating: 1,
        };
        assert!(cat.update("nope", fields).is_err());
    }

    #[test]
    fn update_edits_fields_but_keeps_identity() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        cat.add(book("Drft", "x", "g", false, 2)).unwrap();
        let id = cat.books()[0].id.clone();
        let fields = BookFields {
            title: "Draft".into(), author: "y".into(), year: 1999,
            genre: "h".into(), read: true, rating: 4,
        };
        cat.update(&id, fields).unwrap();
        let b = &cat.books()[0];
        assert_eq!(b.id, id);
        assert_eq!(b.title, "Draft");
        assert_eq!(b.year, 1999);
        assert!(b.read);
    }

    #[test]
    fn statistics_add_up_including_empty() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        let s = cat.statistics();
        assert_eq!((s.total, s.read, s.unread), (0, 0, 0));

        cat.add(book("Dune", "Frank Herbert", "Sci-Fi", true, 5)).unwrap();
        cat.add(book("Hamlet", "Shakespeare", "Drama", false, 3)).unwrap();
        let s = cat.statistics();
        assert_eq!((s.total, s.read, s.unread), (2, 1, 1));
        assert_eq!(s.read + s.unread, s.total);
        assert_eq!(s.genres.len(), 2);
    }

    #[test]
    fn genre_histogram_sorts_by_count_then_name() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        cat.add(book("A", "x", "Sci-Fi", false, 1)).unwrap();
        cat.add(book("B", "x", "Sci-Fi", false, 1)).unwrap();
        cat.add(book("C", "x", "Drama", false, 1)).unwrap();
        cat.add(book("D", "x", "Romance", false, 1)).unwrap();
        let s = cat.statistics();
        assert_eq!(s.genres[0], ("Sci-Fi".to_string(), 2));
        assert_eq!(s.genres[1], ("Drama".to_string(), 1));
        assert_eq!(s.genres[2], ("Romance".to_string(), 1));
    }

    #[test]
    fn favorite_genre_counts_only_read_books() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        cat.add(book("Dune", "Frank Herbert", "Sci-Fi", true, 5)).unwrap();
        cat.add(book("Hamlet", "Shakespeare", "Drama", false, 3)).unwrap();
        let rec = cat.recommendations();
        assert_eq!(rec.favorite_genre.as_deref(), Some("Sci-Fi"));
        assert_eq!(rec.in_favorite_genre.len(), 1);
    }

    #[test]
    fn favorite_genre_tie_breaks_alphabetically() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        cat.add(book("A", "x", "Western", true, 3)).unwrap();
        cat.add(book("B", "x", "Drama", true, 3)).unwrap();
        let rec = cat.recommendations();
        assert_eq!(rec.favorite_genre.as_deref(), Some("Drama"));
    }

    #[test]
    fn no_read_books_means_no_favorite_genre() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        cat.add(book("A", "x", "Drama", false, 5)).unwrap();
        let rec = cat.recommendations();
        assert!(rec.favorite_genre.is_none());
        assert!(rec.in_favorite_genre.is_empty());
    }

    #[test]
    fn top_rated_is_stable_and_capped_at_three() {
        let tmp = TempDir::new().expect("temp dir");
        let mut cat = open_empty(&tmp);
        cat.add(book("A", "x", "g", false, 4)).unwrap();
        cat.add(book("B", "x", "g", false, 5)).unwrap();
        cat.add(book("C", "x", "g", false, 4)).unwrap();
        cat.add(book("D", "x", "g", false, 4)).unwrap();
        cat.add(book("E", "x", "g", false, 3)).unwrap();
        let rec = cat.recommendations();
        let titles: Vec<_> = rec.top_rated.iter().map(|b| b.title.as_str()).collect();
        // 5-star first, then 4-star books in insertion order, capped at 3.
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[test]
    fn mutations_persist_to_the_store() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("library.json");
        let mut cat = Catalog::open(path.clone()).unwrap();
        cat.add(book("Dune", "Frank Herbert", "Sci-Fi", true, 5)).unwrap();
        drop(cat);
        let reopened = Catalog::open(path).unwrap();
        assert_eq!(reopened.books().len(), 1);
        assert_eq!(reopened.books()[0].title, "Dune");
    }
}
