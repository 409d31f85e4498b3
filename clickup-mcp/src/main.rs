//! ClickUp MCP Server
//!
//! Model Context Protocol server exposing ClickUp views, tasks and the
//! workspace hierarchy to LLM agents over stdio.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use clickup_client::{ClickUpApiClient, ClientConfig};
use clickup_mcp::server::ClickUpMcpServer;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "clickup-mcp", version, about)]
struct Cli {
    /// TOML config file (token, base_url, timeout_ms)
    #[arg(long, env = "CLICKUP_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("clickup_mcp=info".parse()?);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json)?;

    let config = ClientConfig::load(cli.config.as_deref())?;
    let client = ClickUpApiClient::new(&config)?;
    tracing::info!(base_url = %client.base_url(), "clickup-mcp starting (stdio transport)");

    let server = ClickUpMcpServer::new(Arc::new(client));
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
