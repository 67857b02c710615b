use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Author not found: {0}")]
    AuthorNotFound(i32),

    #[error("Book not found: {0}")]
    BookNotFound(i32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShelfError {
    /// Stable machine-readable code exposed in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            ShelfError::AuthorNotFound(_) | ShelfError::BookNotFound(_) => "NOT_FOUND",
            ShelfError::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        }
    }
}

impl ErrorExtensions for ShelfError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            match self {
                ShelfError::AuthorNotFound(id) | ShelfError::BookNotFound(id) => {
                    e.set("id", *id);
                }
                _ => {}
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
