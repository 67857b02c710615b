use crate::{
    error::{Result, ShelfError},
    model::{Author, AuthorPatch, Book, BookPatch},
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Library handle shared between resolvers.
pub type SharedLibrary = Arc<RwLock<Library>>;

/// In-memory author and book records, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Library {
    authors: Vec<Author>,
    books: Vec<Book>,
}

impl Library {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// A library holding the sample authors and books.
    pub fn seeded() -> Self {
        let mut library = Self::new();
        library.reset();
        library
    }

    pub fn with_records(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self { authors, books }
    }

    pub fn into_shared(self) -> SharedLibrary {
        Arc::new(RwLock::new(self))
    }

    /// Drops every change and restores the sample records.
    pub fn reset(&mut self) {
        self.authors = vec![
            Author::new(1, "J. K. Rowling"),
            Author::new(2, "J. R. R. Tolkien"),
            Author::new(3, "Brent Weeks"),
        ];
        self.books = (1..=9)
            .map(|id| Book::new(id, format!("Book{}", id), (id - 1) / 3 + 1))
            .collect();
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn author(&self, id: i32) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    /// First book whose id equals `id` or whose name equals `name`.
    ///
    /// Either criterion matching is enough; when both are given they are not
    /// required to agree. Returns `None` when neither is supplied.
    pub fn find_book(&self, id: Option<i32>, name: Option<&str>) -> Option<&Book> {
        self.books
            .iter()
            .find(|b| id == Some(b.id) || name == Some(b.name.as_str()))
    }

    pub fn author_of(&self, book: &Book) -> Option<&Author> {
        self.author(book.author_id)
    }

    pub fn books_by(&self, author_id: i32) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.is_written_by(author_id))
            .collect()
    }

    pub fn add_author(&mut self, name: String) -> Author {
        let author = Author::new(next_id(self.authors.len()), name);
        self.authors.push(author.clone());
        tracing::debug!(id = author.id, name = %author.name, "added author");
        author
    }

    pub fn add_book(&mut self, name: String, author_id: i32) -> Book {
        if self.author(author_id).is_none() {
            tracing::warn!(author_id, "adding book for unknown author");
        }
        let book = Book::new(next_id(self.books.len()), name, author_id);
        self.books.push(book.clone());
        tracing::debug!(id = book.id, name = %book.name, author_id, "added book");
        book
    }

    pub fn update_author(&mut self, id: i32, patch: AuthorPatch) -> Result<Author> {
        let author = self
            .authors
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ShelfError::AuthorNotFound(id))?;
        patch.apply(author);
        tracing::debug!(id, name = %author.name, "updated author");
        Ok(author.clone())
    }

    pub fn update_book(&mut self, id: i32, patch: BookPatch) -> Result<Book> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(ShelfError::BookNotFound(id))?;
        patch.apply(book);
        if !self.authors.iter().any(|a| a.id == book.author_id) {
            tracing::warn!(id, author_id = book.author_id, "book now references unknown author");
        }
        tracing::debug!(id, name = %book.name, author_id = book.author_id, "updated book");
        Ok(book.clone())
    }
}

/// Ids are one past the current record count. Records are never removed, so
/// this stays unique.
fn next_id(len: usize) -> i32 {
    i32::try_from(len).map_or(i32::MAX, |n| n.saturating_add(1))
}
