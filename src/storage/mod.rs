//! In-memory storage layer for the library schema.
//!
//! Authors and books live in two ordered vectors for the lifetime of the
//! process. Nothing is persisted.
//!
//! ## Components
//!
//! - [`Library`]: The record store with lookup, insert and update operations
//! - [`SharedLibrary`]: `Arc<RwLock<Library>>` handle placed in schema data

mod library;

pub use library::{Library, SharedLibrary};
