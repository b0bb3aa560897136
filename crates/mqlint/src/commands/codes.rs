//! Codes command: list the diagnostic taxonomy.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use mqlint_core::{Category, DiagnosticCode, Severity};

/// Arguments for the `codes` subcommand.
#[derive(Args, Debug, Default)]
pub struct CodesArgs {}

#[derive(Debug, Serialize)]
struct CodeInfo {
    code: DiagnosticCode,
    category: Category,
    severity: Severity,
}

fn code_table() -> Vec<CodeInfo> {
    DiagnosticCode::ALL
        .iter()
        .map(|&code| CodeInfo {
            code,
            category: code.category(),
            severity: code.default_severity(),
        })
        .collect()
}

/// Print every diagnostic code with its family and default severity.
#[instrument(name = "cmd_codes", skip_all)]
pub fn cmd_codes(_args: CodesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing codes command");
    let table = code_table();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    for info in &table {
        println!(
            "{:<24} {:<9} {}",
            info.code.as_str().bold(),
            info.category.as_str(),
            info.severity.as_str().dimmed()
        );
    }
    Ok(())
}
