use crate::cli::SchemaArg;
use crate::graphql::{build_hello_schema, build_library_schema};
use anyhow::{Context, Result};
use async_graphql::{Request, Variables};

use super::CommandContext;

pub fn handle_query(
    ctx: CommandContext,
    query: String,
    schema: SchemaArg,
    variables: Option<String>,
) -> Result<()> {
    let mut request = Request::new(query);
    if let Some(vars) = variables {
        let json: serde_json::Value =
            serde_json::from_str(&vars).context("Invalid JSON in --variables")?;
        request = request.variables(Variables::from_json(json));
    }

    let response = tokio::runtime::Runtime::new()?.block_on(async {
        match schema {
            SchemaArg::Hello => {
                build_hello_schema(ctx.config.demo.message_delay())
                    .execute(request)
                    .await
            }
            SchemaArg::Library => build_library_schema(ctx.library).execute(request).await,
        }
    });

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        anyhow::bail!("Query returned {} error(s)", response.errors.len());
    }
    Ok(())
}
