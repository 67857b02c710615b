mod commands;
pub mod handlers;

pub use commands::{Cli, Commands, SchemaArg};
