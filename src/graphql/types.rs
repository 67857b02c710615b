use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model;
use crate::storage::SharedLibrary;

/// This represents a book written by an author
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author who wrote this book
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let library = ctx.data::<SharedLibrary>()?.read().await;
        Ok(library.author(self.author_id).cloned().map(Author::from))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}

/// This represents a author of a book
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author, in insertion order
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let library = ctx.data::<SharedLibrary>()?.read().await;
        Ok(library
            .books_by(self.id)
            .into_iter()
            .cloned()
            .map(Book::from)
            .collect())
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}
