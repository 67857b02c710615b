use crate::cli::SchemaArg;
use crate::graphql::{build_hello_schema, build_library_schema};
use anyhow::Result;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext, schema: SchemaArg) -> Result<()> {
    let sdl = match schema {
        SchemaArg::Hello => build_hello_schema(ctx.config.demo.message_delay()).sdl(),
        SchemaArg::Library => build_library_schema(ctx.library).sdl(),
    };
    print!("{}", sdl);
    Ok(())
}
