use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelfql")]
#[command(
    author,
    version,
    about = "A GraphQL demo server with a hello-world schema and an in-memory book library"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for shelfql.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "SHELFQL_PORT")]
        port: Option<u16>,
    },

    /// Execute a GraphQL document against a freshly seeded schema
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query or mutation document
        query: String,

        /// Schema to run against
        #[arg(short, long, value_enum, default_value = "library")]
        schema: SchemaArg,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print a schema in SDL form
    Schema {
        /// Schema to print
        #[arg(short, long, value_enum, default_value = "library")]
        schema: SchemaArg,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaArg {
    /// Delayed hello-world fields
    Hello,
    /// Authors and books
    Library,
}
