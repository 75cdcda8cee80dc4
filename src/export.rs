use crate::models::Book;
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

const HEADER: &str = "title,author,year,genre,read,rating,cover";

/// Render the catalog as CSV, one row per book in catalog order.
pub fn to_csv(books: &[Book]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for b in books {
        let cover = b.cover.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
        let row = [
            field(&b.title),
            field(&b.author),
            b.year.to_string(),
            field(&b.genre),
            b.read.to_string(),
            b.rating.to_string(),
            field(&cover),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

pub fn write_csv(path: &Path, books: &[Book]) -> Result<()> {
    fs::write(path, to_csv(books))
        .with_context(|| format!("writing CSV export {}", path.display()))?;
    Ok(())
}

/// Quote a field when it contains a comma, quote or newline.
fn field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str) -> Book {
        Book::new(title.into(), author.into(), 1965, "Sci-Fi".into(), true, 5)
    }

    #[test]
    fn header_and_row_order() {
        let books = vec![book("Dune", "Frank Herbert"), book("Emma", "Jane Austen")];
        let csv = to_csv(&books);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "title,author,year,genre,read,rating,cover");
        assert_eq!(lines[1], "Dune,Frank Herbert,1965,Sci-Fi,true,5,");
        assert_eq!(lines[2], "Emma,Jane Austen,1965,Sci-Fi,true,5,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_catalog_is_just_the_header() {
        assert_eq!(to_csv(&[]), "title,author,year,genre,read,rating,cover\n");
    }

    #[test]
    fn commas_and_quotes_are_escaped() {
        let b = book("Me, Myself \"and\" I", "A, Writer");
        let csv = to_csv(&[b]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[1], "\"Me, Myself \"\"and\"\" I\",\"A, Writer\",1965,Sci-Fi,true,5,");
    }

    #[test]
    fn writes_to_disk() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("library.csv");
        write_csv(&path, &[book("Dune", "Frank Herbert")]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("title,author"));
        assert!(written.contains("Dune"));
    }
}
