use anyhow::{Context, Result};
use clap::Parser;

use shelfql::cli::handlers::{CommandContext, handle_query, handle_schema, handle_serve};
use shelfql::cli::{Cli, Commands};
use shelfql::config::ShelfConfig;
use shelfql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.clone()).context("Failed to initialise logging")?;

    let cwd = std::env::current_dir()?;
    let config = ShelfConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load shelfql configuration")?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query {
            query,
            schema,
            variables,
        } => handle_query(ctx, query, schema, variables),
        Commands::Schema { schema } => handle_schema(ctx, schema),
    }
}
