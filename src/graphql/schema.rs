use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::model::{AuthorPatch, BookPatch};
use crate::storage::SharedLibrary;

use super::types::*;

pub type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_library_schema(library: SharedLibrary) -> LibrarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

fn get_library<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedLibrary> {
    ctx.data::<SharedLibrary>()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A Single Book
    ///
    /// Matches on `id` or on `name`; either one matching is enough.
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
        name: Option<String>,
    ) -> async_graphql::Result<Option<Book>> {
        let library = get_library(ctx)?.read().await;
        Ok(library
            .find_book(id, name.as_deref())
            .cloned()
            .map(Book::from))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let library = get_library(ctx)?.read().await;
        Ok(library.books().iter().cloned().map(Book::from).collect())
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let library = get_library(ctx)?.read().await;
        Ok(library.authors().iter().cloned().map(Author::from).collect())
    }

    /// A Single Author
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let library = get_library(ctx)?.read().await;
        Ok(library.author(id).cloned().map(Author::from))
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add Book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let mut library = get_library(ctx)?.write().await;
        Ok(library.add_book(name, author_id).into())
    }

    /// Add Author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        let mut library = get_library(ctx)?.write().await;
        Ok(library.add_author(name).into())
    }

    /// Update Book
    ///
    /// Omitted or empty fields keep their current value.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: Option<String>,
        author_id: Option<i32>,
    ) -> async_graphql::Result<Book> {
        let mut library = get_library(ctx)?.write().await;
        library
            .update_book(id, BookPatch { name, author_id })
            .map(Book::from)
            .map_err(|e| e.extend())
    }

    /// Update Author
    ///
    /// Omitted or empty fields keep their current value.
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: Option<String>,
    ) -> async_graphql::Result<Author> {
        let mut library = get_library(ctx)?.write().await;
        library
            .update_author(id, AuthorPatch { name })
            .map(Author::from)
            .map_err(|e| e.extend())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model;
    use crate::storage::Library;
    use async_graphql::{Request, Variables, value};

    fn seeded_schema() -> (LibrarySchema, SharedLibrary) {
        let library = Library::seeded().into_shared();
        (build_library_schema(library.clone()), library)
    }

    async fn run(schema: &LibrarySchema, query: &str) -> async_graphql::Value {
        let resp = schema.execute(query).await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
        resp.data
    }

    #[tokio::test]
    async fn test_book_by_id() {
        let (schema, _) = seeded_schema();
        let data = run(&schema, "{ book(id: 4) { id name authorId } }").await;
        assert_eq!(
            data,
            value!({ "book": { "id": 4, "name": "Book4", "authorId": 2 } })
        );
    }

    #[tokio::test]
    async fn test_book_matches_id_or_name() {
        let (schema, _) = seeded_schema();

        let data = run(&schema, r#"{ book(id: 2, name: "missing") { id } }"#).await;
        assert_eq!(data, value!({ "book": { "id": 2 } }));

        let data = run(&schema, r#"{ book(id: 404, name: "Book6") { id } }"#).await;
        assert_eq!(data, value!({ "book": { "id": 6 } }));

        let data = run(&schema, r#"{ book(id: 404, name: "missing") { id } }"#).await;
        assert_eq!(data, value!({ "book": null }));

        let data = run(&schema, "{ book { id } }").await;
        assert_eq!(data, value!({ "book": null }));
    }

    #[tokio::test]
    async fn test_book_and_books_agree() {
        let (schema, library) = seeded_schema();
        let ids: Vec<i32> = library.read().await.books().iter().map(|b| b.id).collect();

        for id in ids {
            let query = format!("{{ book(id: {id}) {{ id name authorId }} }}");
            let single = run(&schema, &query).await;
            let all = run(&schema, "{ books { id name authorId } }").await;

            let single = single.into_json().unwrap();
            let all = all.into_json().unwrap();
            let from_list = all["books"]
                .as_array()
                .unwrap()
                .iter()
                .find(|b| b["id"] == id)
                .cloned()
                .unwrap();
            assert_eq!(single["book"], from_list);
        }
    }

    #[tokio::test]
    async fn test_authors_with_books() {
        let (schema, _) = seeded_schema();
        let data = run(&schema, "{ authors { name books { name } } }").await;
        let json = data.into_json().unwrap();

        let authors = json["authors"].as_array().unwrap();
        assert_eq!(authors.len(), 3);
        assert_eq!(authors[0]["name"], "J. K. Rowling");
        assert_eq!(
            authors[0]["books"],
            serde_json::json!([{"name": "Book1"}, {"name": "Book2"}, {"name": "Book3"}])
        );
    }

    #[tokio::test]
    async fn test_author_lookup() {
        let (schema, _) = seeded_schema();

        let data = run(&schema, "{ author(id: 3) { name } }").await;
        assert_eq!(data, value!({ "author": { "name": "Brent Weeks" } }));

        let data = run(&schema, "{ author(id: 30) { name } }").await;
        assert_eq!(data, value!({ "author": null }));

        let data = run(&schema, "{ author { name } }").await;
        assert_eq!(data, value!({ "author": null }));
    }

    #[tokio::test]
    async fn test_book_author_resolves_live() {
        let (schema, _) = seeded_schema();

        run(&schema, r#"mutation { updateAuthor(id: 1, name: "Rowling") { id } }"#).await;

        let data = run(&schema, "{ book(id: 1) { author { id name } } }").await;
        assert_eq!(
            data,
            value!({ "book": { "author": { "id": 1, "name": "Rowling" } } })
        );
    }

    #[tokio::test]
    async fn test_dangling_author_is_null() {
        let (schema, _) = seeded_schema();
        let data = run(
            &schema,
            r#"mutation { addBook(name: "Orphan", authorId: 77) { id author { name } } }"#,
        )
        .await;
        assert_eq!(data, value!({ "addBook": { "id": 10, "author": null } }));
    }

    #[tokio::test]
    async fn test_add_author_appends() {
        let (schema, library) = seeded_schema();
        let before = library.read().await.authors().len();

        let expected_id = before as i32 + 1;

        let data = run(&schema, r#"mutation { addAuthor(name: "N") { id name } }"#).await;

        assert_eq!(
            data,
            value!({ "addAuthor": { "id": expected_id, "name": "N" } })
        );
        assert_eq!(library.read().await.authors().len(), before + 1);
    }

    #[tokio::test]
    async fn test_add_book_shows_up_under_author() {
        let library = Library::with_records(vec![model::Author::new(1, "A")], Vec::new())
            .into_shared();
        let schema = build_library_schema(library);

        let data = run(
            &schema,
            r#"mutation { addBook(name: "B1", authorId: 1) { id name authorId } }"#,
        )
        .await;
        assert_eq!(
            data,
            value!({ "addBook": { "id": 1, "name": "B1", "authorId": 1 } })
        );

        let data = run(&schema, "{ author(id: 1) { books { id name authorId } } }").await;
        assert_eq!(
            data,
            value!({ "author": { "books": [{ "id": 1, "name": "B1", "authorId": 1 }] } })
        );
    }

    #[tokio::test]
    async fn test_add_book_with_variables() {
        let (schema, library) = seeded_schema();
        let request = Request::new(
            "mutation Add($name: String!, $authorId: Int!) { addBook(name: $name, authorId: $authorId) { id } }",
        )
        .variables(Variables::from_json(serde_json::json!({
            "name": "Book10",
            "authorId": 3,
        })));

        let resp = schema.execute(request).await;

        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        assert_eq!(resp.data, value!({ "addBook": { "id": 10 } }));
        assert_eq!(library.read().await.books_by(3).len(), 4);
    }

    #[tokio::test]
    async fn test_add_book_requires_arguments() {
        let (schema, library) = seeded_schema();

        let resp = schema
            .execute(r#"mutation { addBook(name: "No author") { id } }"#)
            .await;

        assert_eq!(resp.errors.len(), 1);
        assert_eq!(library.read().await.books().len(), 9);
    }

    #[tokio::test]
    async fn test_update_author_only_touches_target() {
        let (schema, library) = seeded_schema();

        let data = run(
            &schema,
            r#"mutation { updateAuthor(id: 2, name: "X") { id name } }"#,
        )
        .await;
        assert_eq!(data, value!({ "updateAuthor": { "id": 2, "name": "X" } }));

        let library = library.read().await;
        let names: Vec<_> = library.authors().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["J. K. Rowling", "X", "Brent Weeks"]);
    }

    #[tokio::test]
    async fn test_update_book_partial() {
        let (schema, _) = seeded_schema();

        let data = run(
            &schema,
            "mutation { updateBook(id: 5, authorId: 3) { id name authorId } }",
        )
        .await;
        assert_eq!(
            data,
            value!({ "updateBook": { "id": 5, "name": "Book5", "authorId": 3 } })
        );

        let data = run(
            &schema,
            r#"mutation { updateBook(id: 5, name: "") { name } }"#,
        )
        .await;
        assert_eq!(data, value!({ "updateBook": { "name": "Book5" } }));
    }

    #[tokio::test]
    async fn test_update_book_unknown_id_returns_not_found() {
        let (schema, library) = seeded_schema();

        let resp = schema
            .execute(r#"mutation { updateBook(id: 99, name: "X", authorId: 1) { id } }"#)
            .await;

        assert_eq!(resp.errors.len(), 1);
        let err = &resp.errors[0];
        assert_eq!(err.message, "Book not found: 99");
        let ext = err.extensions.as_ref().unwrap();
        assert_eq!(ext.get("code"), Some(&value!("NOT_FOUND")));
        assert_eq!(library.read().await.books(), Library::seeded().books());
    }

    #[tokio::test]
    async fn test_update_author_unknown_id_returns_not_found() {
        let (schema, _) = seeded_schema();

        let resp = schema
            .execute(r#"mutation { updateAuthor(id: 12, name: "X") { id } }"#)
            .await;

        assert_eq!(resp.errors.len(), 1);
        assert_eq!(resp.errors[0].message, "Author not found: 12");
    }

    #[tokio::test]
    async fn test_schema_shape() {
        let (schema, _) = seeded_schema();
        let sdl = schema.sdl();

        assert!(sdl.contains("type Query"));
        assert!(sdl.contains("type Mutation"));
        assert!(sdl.contains("This represents a book written by an author"));
        assert!(sdl.contains("addBook(name: String!, authorId: Int!)"));
        assert!(sdl.contains("updateBook(id: Int!, name: String, authorId: Int)"));
    }
}
