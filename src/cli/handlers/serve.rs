use crate::config::ServerSettings;
use crate::server;
use anyhow::Result;
use colored::Colorize;
use std::net::SocketAddr;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = ctx.config;
    config.server = config.server.with_overrides(host, port);

    tokio::runtime::Runtime::new()?.block_on(async {
        let listener = server::bind(&config.server).await?;
        announce(&config.server, listener.local_addr()?);
        server::serve(listener, &config, ctx.library).await
    })?;
    Ok(())
}

fn announce(settings: &ServerSettings, addr: SocketAddr) {
    let base = format!("http://localhost:{}", addr.port());
    println!(
        "{} on port {}",
        "Server running".green(),
        addr.port().to_string().cyan()
    );
    println!("  Hello:   {}{}", base, settings.hello_path);
    println!("  Library: {}{}", base, settings.library_path);
}
