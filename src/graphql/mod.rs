//! GraphQL schemas and resolvers.
//!
//! Two independent schemas are exposed, each mounted on its own HTTP path:
//!
//! ## Hello schema
//!
//! Query type `HelloWorld` with `message`, `message1`, `message2` and
//! `message3`. Every field waits for the configured delay before answering
//! `"Message Delivered"`; sibling fields wait concurrently.
//!
//! ```graphql
//! { message message1 message2 message3 }
//! ```
//!
//! ## Library schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`, `updateBook`, `updateAuthor`
//!
//! ```graphql
//! mutation { addBook(name: "Book10", authorId: 3) { id author { name } } }
//! ```

mod hello;
mod schema;
mod types;

pub use hello::{HelloRoot, HelloSchema, MESSAGE, MessageDelay, build_hello_schema};
pub use schema::{LibrarySchema, MutationRoot, QueryRoot, build_library_schema};
pub use types::*;
