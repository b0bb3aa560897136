//! Check command: run every checker over one or more files.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream, Style};
use tracing::{debug, instrument};

use mqlint_core::config::Config;
use mqlint_core::engine::{self, CheckReport, RunConfiguration};
use mqlint_core::{Diagnostic, DiagnosticCode, Dialect, Severity};

use super::read_input_file;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check (.mq4, .mq5, .mqh).
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Check every file as this dialect, whatever its extension.
    #[arg(long, value_enum)]
    pub dialect: Option<Dialect>,

    /// Most diagnostics reported per file.
    #[arg(long)]
    pub max_problems: Option<usize>,

    /// Diagnostic code to skip (repeatable).
    #[arg(long, value_name = "CODE")]
    pub disable: Vec<String>,
}

/// Merge the command-line overrides into the configured run settings.
fn run_configuration(args: &CheckArgs, config: &Config) -> anyhow::Result<RunConfiguration> {
    let mut run = config
        .run_configuration()
        .context("invalid disabled_codes in configuration")?;
    if let Some(max_problems) = args.max_problems {
        run = run.with_max_problems(max_problems);
    }
    let disabled = args
        .disable
        .iter()
        .map(|tag| tag.parse::<DiagnosticCode>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(run.with_disabled(disabled))
}

/// Check one file with an already-resolved configuration.
pub fn check_file(
    path: &Utf8Path,
    dialect: Dialect,
    run: &RunConfiguration,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<CheckReport> {
    let content = read_input_file(path, max_input_bytes)?;
    Ok(engine::check_document(&content, dialect, run).with_file(path.as_str()))
}

fn severity_label(severity: Severity) -> String {
    let (label, style) = match severity {
        Severity::Error => ("error", Style::new().red().bold()),
        Severity::Warning => ("warning", Style::new().yellow().bold()),
        Severity::Information => ("info", Style::new().cyan()),
    };
    label
        .if_supports_color(Stream::Stdout, |text| text.style(style))
        .to_string()
}

/// One diagnostic as `path:line:col: severity[code] message`, 1-based.
fn format_diagnostic(file: &str, diagnostic: &Diagnostic) -> String {
    let start = diagnostic.range.start;
    format!(
        "{}:{}:{}: {}[{}] {}",
        file.if_supports_color(Stream::Stdout, |text| text.bold()),
        start.line + 1,
        start.character + 1,
        severity_label(diagnostic.severity),
        diagnostic
            .code
            .as_str()
            .if_supports_color(Stream::Stdout, |text| text.dimmed()),
        diagnostic.message
    )
}

/// Check files and print their diagnostics.
///
/// Fails when any file has an error-severity diagnostic.
#[instrument(name = "cmd_check", skip_all, fields(files = args.files.len()))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, dialect = ?args.dialect, "executing check command");

    if !config.validation_enabled {
        tracing::info!("validation disabled by configuration");
        if global_json {
            println!("[]");
        } else if !quiet {
            println!("{} validation disabled", "SKIP:".dimmed());
        }
        return Ok(());
    }

    let run = run_configuration(&args, config)?;
    let max_input = config.input_limit();

    let progress = if !global_json && !quiet && args.files.len() > 1 {
        let bar = ProgressBar::new(args.files.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("█▓░"),
        );
        Some(bar)
    } else {
        None
    };

    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        if let Some(ref bar) = progress {
            bar.set_message(path.to_string());
        }
        let dialect = args
            .dialect
            .unwrap_or_else(|| config.resolve_dialect(Some(path.as_path())));
        let report = check_file(path, dialect, &run, max_input)
            .with_context(|| format!("failed to check {path}"))?;

        if !global_json {
            let file = path.as_str();
            let print = || {
                for diagnostic in &report.diagnostics {
                    if quiet && diagnostic.severity != Severity::Error {
                        continue;
                    }
                    println!("{}", format_diagnostic(file, diagnostic));
                }
                if report.truncated && !quiet {
                    println!(
                        "{} showing {} of {} diagnostics for {file}",
                        "note:".dimmed(),
                        report.diagnostics.len(),
                        report.total_found
                    );
                }
            };
            match progress {
                Some(ref bar) => bar.suspend(print),
                None => print(),
            }
        }

        if let Some(ref bar) = progress {
            bar.inc(1);
        }
        reports.push(report);
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    let errors: usize = reports.iter().map(|r| r.errors).sum();
    let warnings: usize = reports.iter().map(|r| r.warnings).sum();
    let information: usize = reports.iter().map(|r| r.information).sum();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if !quiet {
        let summary = format!(
            "{errors} errors, {warnings} warnings, {information} information in {} files",
            reports.len()
        );
        if errors > 0 {
            println!("{}", summary.red());
        } else {
            println!("{}", summary.green());
        }
    }

    if errors > 0 {
        bail!("{errors} error(s) found");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mqlint_core::Range;

    fn args(disable: &[&str]) -> CheckArgs {
        CheckArgs {
            files: vec![Utf8PathBuf::from("a.mq5")],
            dialect: None,
            max_problems: Some(3),
            disable: disable.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn flags_override_configuration() {
        let config = Config {
            max_problems: Some(50),
            disabled_codes: Some(vec!["deep-nesting".into()]),
            ..Config::default()
        };
        let run = run_configuration(&args(&["magic-number"]), &config).unwrap();
        assert_eq!(run.max_problems, 3);
        assert_eq!(
            run.disabled_codes,
            [DiagnosticCode::DeepNesting, DiagnosticCode::MagicNumber]
        );
    }

    #[test]
    fn unknown_flag_code_fails() {
        let err = run_configuration(&args(&["nope"]), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("unknown diagnostic code"));
    }

    #[test]
    fn diagnostics_print_one_based() {
        owo_colors::set_override(false);
        let diagnostic = Diagnostic::new(
            DiagnosticCode::MissingSemicolon,
            Range::point(0, 9),
            "Missing semicolon",
        );
        assert_eq!(
            format_diagnostic("a.mq5", &diagnostic),
            "a.mq5:1:10: error[missing-semicolon] Missing semicolon"
        );
    }
}
