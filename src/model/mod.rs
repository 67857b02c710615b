//! Data models for the library.
//!
//! This module defines the core records:
//!
//! - [`Author`]: A writer, identified by a positive integer id
//! - [`Book`]: A title written by an author, linked through `author_id`
//! - [`AuthorPatch`] / [`BookPatch`]: Partial updates applied by the update mutations

mod author;
mod book;

pub use author::{Author, AuthorPatch};
pub use book::{Book, BookPatch};
