//! Catalog management service
//!
//! Owns the in-memory, insertion-ordered book collection. Every operation
//! takes the collection lock for its whole duration, so each request either
//! fully succeeds or fully fails with no partial mutation.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookQuery},
};

/// Case-insensitive equality used for every field comparison in the catalog
fn fold_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// True when the filter is absent or empty, or matches the field
fn filter_matches(filter: Option<&str>, field: &str) -> bool {
    match filter {
        Some(f) if !f.is_empty() => fold_eq(f, field),
        _ => true,
    }
}

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<RwLock<Vec<Book>>>,
}

impl CatalogService {
    pub fn new(seed: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(seed)),
        }
    }

    /// List books matching every supplied filter, in insertion order
    pub async fn list(&self, query: &BookQuery) -> Vec<Book> {
        let books = self.books.read().await;
        books
            .iter()
            .filter(|b| filter_matches(query.category.as_deref(), &b.category))
            .filter(|b| filter_matches(query.author.as_deref(), &b.author))
            .filter(|b| filter_matches(query.title.as_deref(), &b.title))
            .cloned()
            .collect()
    }

    /// Append a new book to the catalog.
    /// Fails when another book already carries the same title.
    pub async fn add(&self, book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;

        if books.iter().any(|b| fold_eq(&b.title, &book.title)) {
            tracing::debug!(title = %book.title, "rejected duplicate title");
            return Err(AppError::DuplicateTitle(format!(
                "A book titled '{}' already exists",
                book.title
            )));
        }

        books.push(book.clone());
        tracing::info!(title = %book.title, "book added");
        Ok(book)
    }

    /// Replace author and category of the book whose title matches `title`.
    /// The stored record keeps its position and its original title casing.
    pub async fn replace(&self, title: &str, book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;

        let entry = books
            .iter_mut()
            .find(|b| fold_eq(&b.title, title))
            .ok_or_else(|| {
                AppError::NotFound(format!("Book with title '{}' not found", title))
            })?;

        entry.author = book.author;
        entry.category = book.category;
        tracing::info!(title = %entry.title, "book updated");
        Ok(entry.clone())
    }

    /// Remove the book whose title matches `title`.
    /// The order of the remaining books is preserved.
    pub async fn remove(&self, title: &str) -> AppResult<()> {
        let mut books = self.books.write().await;

        let pos = books
            .iter()
            .position(|b| fold_eq(&b.title, title))
            .ok_or_else(|| {
                AppError::NotFound(format!("Book with title '{}' not found", title))
            })?;

        books.remove(pos);
        tracing::info!(title, "book removed");
        Ok(())
    }
}

/// Fixed seed loaded at process start; the catalog resets on restart
pub fn seed_books() -> Vec<Book> {
    let entries = [
        ("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
        ("A Brief History of Time", "Stephen Hawking", "Science"),
        ("The Pragmatic Programmer", "Andrew Hunt", "Programming"),
        ("Clean Code", "Robert C. Martin", "Programming"),
        ("Pride and Prejudice", "Jane Austen", "Classic"),
        ("Murder on the Orient Express", "Agatha Christie", "Mystery"),
    ];

    entries
        .iter()
        .map(|(title, author, category)| Book {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str, category: &str) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
        }
    }

    fn catalog() -> CatalogService {
        CatalogService::new(vec![
            book("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
            book("Clean Code", "Robert C. Martin", "Programming"),
            book("The Pragmatic Programmer", "Andrew Hunt", "Programming"),
        ])
    }

    #[tokio::test]
    async fn test_list_no_filters_returns_all() {
        let catalog = catalog();
        let books = catalog.list(&BookQuery::default()).await;
        assert_eq!(books.len(), 3);
        assert_eq!(books[0].title, "The Hobbit");
        assert_eq!(books[2].title, "The Pragmatic Programmer");
    }

    #[tokio::test]
    async fn test_list_filter_category_case_insensitive() {
        let catalog = catalog();
        let query = BookQuery {
            category: Some("PROGRAMMING".to_string()),
            ..Default::default()
        };
        let books = catalog.list(&query).await;
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Clean Code");
        assert_eq!(books[1].title, "The Pragmatic Programmer");
    }

    #[tokio::test]
    async fn test_list_filters_combine() {
        let catalog = catalog();
        let query = BookQuery {
            category: Some("programming".to_string()),
            author: Some("andrew hunt".to_string()),
            title: None,
        };
        let books = catalog.list(&query).await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "The Pragmatic Programmer");
    }

    #[tokio::test]
    async fn test_list_filter_is_exact_match_not_substring() {
        let catalog = catalog();
        let query = BookQuery {
            title: Some("Hobbit".to_string()),
            ..Default::default()
        };
        assert!(catalog.list(&query).await.is_empty());
    }

    #[tokio::test]
    async fn test_list_empty_string_filter_imposes_no_constraint() {
        let catalog = catalog();
        let query = BookQuery {
            category: Some(String::new()),
            author: Some(String::new()),
            title: Some(String::new()),
        };
        assert_eq!(catalog.list(&query).await.len(), 3);
    }

    #[tokio::test]
    async fn test_list_no_match_returns_empty() {
        let catalog = catalog();
        let query = BookQuery {
            category: Some("Cooking".to_string()),
            ..Default::default()
        };
        assert!(catalog.list(&query).await.is_empty());
    }

    #[tokio::test]
    async fn test_add_appends_at_end() {
        let catalog = catalog();
        let added = catalog
            .add(book("Dune", "Frank Herbert", "SciFi"))
            .await
            .unwrap();
        assert_eq!(added.title, "Dune");

        let books = catalog.list(&BookQuery::default()).await;
        assert_eq!(books.len(), 4);
        assert_eq!(books[3].title, "Dune");
    }

    #[tokio::test]
    async fn test_add_then_list_by_title() {
        let catalog = CatalogService::new(vec![]);
        catalog
            .add(book("Dune", "Herbert", "SciFi"))
            .await
            .unwrap();

        let query = BookQuery {
            title: Some("dune".to_string()),
            ..Default::default()
        };
        let books = catalog.list(&query).await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author, "Herbert");
    }

    #[tokio::test]
    async fn test_add_duplicate_title_fails_and_leaves_catalog_unchanged() {
        let catalog = CatalogService::new(vec![]);
        catalog
            .add(book("Dune", "Herbert", "SciFi"))
            .await
            .unwrap();

        let err = catalog
            .add(book("DUNE", "Somebody Else", "Fantasy"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateTitle(_)));

        let books = catalog.list(&BookQuery::default()).await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author, "Herbert");
    }

    #[tokio::test]
    async fn test_replace_updates_author_keeps_title_and_position() {
        let catalog = CatalogService::new(vec![
            book("1984", "Orwell", "Dystopian"),
            book("Dune", "Herbert", "SciFi"),
        ]);

        let updated = catalog
            .replace("1984", book("1984", "G. Orwell", "Dystopian"))
            .await
            .unwrap();
        assert_eq!(updated.author, "G. Orwell");
        assert_eq!(updated.title, "1984");

        let books = catalog.list(&BookQuery::default()).await;
        assert_eq!(books[0].author, "G. Orwell");
        assert_eq!(books[1].title, "Dune");
    }

    #[tokio::test]
    async fn test_replace_preserves_stored_title_casing() {
        let catalog = CatalogService::new(vec![book("The Hobbit", "Tolkien", "Fantasy")]);

        let updated = catalog
            .replace(
                "THE HOBBIT",
                book("THE HOBBIT", "J.R.R. Tolkien", "Fantasy"),
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "The Hobbit");
        assert_eq!(updated.author, "J.R.R. Tolkien");
    }

    #[tokio::test]
    async fn test_replace_missing_title_fails_and_leaves_catalog_unchanged() {
        let catalog = catalog();
        let err = catalog
            .replace("Nonexistent", book("Nonexistent", "Nobody", "None"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(catalog.list(&BookQuery::default()).await.len(), 3);
    }

    #[tokio::test]
    async fn test_remove_closes_gap_preserving_order() {
        let catalog = catalog();
        catalog.remove("clean code").await.unwrap();

        let books = catalog.list(&BookQuery::default()).await;
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "The Hobbit");
        assert_eq!(books[1].title, "The Pragmatic Programmer");
    }

    #[tokio::test]
    async fn test_remove_then_list_by_title_is_empty() {
        let catalog = catalog();
        catalog.remove("The Hobbit").await.unwrap();

        let query = BookQuery {
            title: Some("The Hobbit".to_string()),
            ..Default::default()
        };
        assert!(catalog.list(&query).await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_twice_fails_second_time() {
        let catalog = CatalogService::new(vec![book("1984", "Orwell", "Dystopian")]);
        catalog.remove("1984").await.unwrap();

        let err = catalog.remove("1984").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_seed_books_have_unique_titles() {
        let seed = seed_books();
        for (i, a) in seed.iter().enumerate() {
            for b in &seed[i + 1..] {
                assert!(!fold_eq(&a.title, &b.title));
            }
        }
    }
}
