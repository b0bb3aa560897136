//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use mqlint_core::config::Config;

use crate::server::DiagnosticsServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve diagnostics over MCP until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let server = DiagnosticsServer::new(config).context("invalid configuration")?;
    info!("starting MCP server on stdio");

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server failed")?;

    info!("MCP server stopped");
    Ok(())
}
