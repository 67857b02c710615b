mod query;
mod schema;
mod serve;

pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::ShelfConfig;
use crate::storage::{Library, SharedLibrary};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: ShelfConfig,
    pub library: SharedLibrary,
}

impl CommandContext {
    pub fn new(config: ShelfConfig) -> Self {
        Self {
            config,
            library: Library::seeded().into_shared(),
        }
    }
}
