//! CLI entry point for esgaudit.
//!
//! This module is thin: it handles argument parsing, logging, and exit codes.
//! All business logic lives in the `esgaudit-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use esgaudit_app::{
    AuditInput, ExplainOutput, GenerateInput, parse_report_json, render_annotations,
    render_markdown, run_audit, run_explain, run_generate, to_renderable, verdict_exit_code,
    write_exceptions, write_report, write_text,
};
use esgaudit_settings::Overrides;
use time::Date;
use time::macros::format_description;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "esgaudit.toml";

#[derive(Parser, Debug)]
#[command(
    name = "esgaudit",
    version,
    about = "Rule-based ESG audit of supplier datasets"
)]
struct Cli {
    /// Path to esgaudit config TOML [default: esgaudit.toml, skipped when absent].
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Override profile (standard|strict).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log debug details to stderr.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the audit rules over a supplier table and write the exception table.
    Audit {
        /// Supplier table to audit.
        #[arg(long, default_value = "data/suppliers_raw.csv")]
        input: Utf8PathBuf,

        /// Where to write the exception table.
        #[arg(long, default_value = "data/audit_exceptions.csv")]
        output: Utf8PathBuf,

        /// Lowest risk level that fails the run with exit code 2.
        #[arg(long, value_parser = ["never", "low", "medium", "high"])]
        fail_on: Option<String>,

        /// Also write the full JSON report here.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Write a Markdown summary alongside the exception table.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/esgaudit/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Generate a synthetic supplier table with injected anomalies.
    Generate {
        /// Where to write the supplier table.
        #[arg(long, default_value = "data/suppliers_raw.csv")]
        output: Utf8PathBuf,

        /// Number of suppliers.
        #[arg(long, default_value_t = 1000)]
        count: usize,

        /// Random seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Reference date (YYYY-MM-DD) audit dates count back from [default: today, UTC].
        #[arg(long, value_parser = parse_date)]
        as_of: Option<Date>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/esgaudit/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/esgaudit/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "carbon.outlier") or code (e.g., "zero_water_usage") to explain.
        identifier: String,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.cmd {
        Commands::Audit {
            input,
            output,
            fail_on,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_audit(
            &cli,
            input,
            output,
            fail_on.clone(),
            report_out.as_deref(),
            (*write_markdown).then_some(markdown_out.as_path()),
        ),
        Commands::Generate {
            output,
            count,
            seed,
            as_of,
        } => cmd_generate(output, *count, *seed, *as_of),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Explain { identifier } => cmd_explain(identifier),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("esgaudit error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// `RUST_LOG` wins; otherwise `-q`/`-v` pick the level.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn parse_date(s: &str) -> Result<Date, String> {
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// Read the config file. The default path may be absent; an explicit one may not.
fn load_config_text(explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    let path = explicit.unwrap_or(Utf8Path::new(DEFAULT_CONFIG));
    match std::fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(path = %path, "loaded config");
            Ok(text)
        }
        Err(err) if explicit.is_none() && err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "no config file; using profile defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_audit(
    cli: &Cli,
    input: &Utf8Path,
    output: &Utf8Path,
    fail_on: Option<String>,
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let cfg_text = load_config_text(cli.config.as_deref())?;

    let audit = run_audit(AuditInput {
        input,
        config_text: &cfg_text,
        overrides: Overrides {
            profile: cli.profile.clone(),
            fail_on,
        },
    })?;
    let report = &audit.report;

    write_exceptions(output, report)?;
    if let Some(path) = report_out {
        write_report(path, report).context("write report json")?;
    }
    if let Some(path) = markdown_out {
        let md = render_markdown(&to_renderable(report));
        write_text(path, &md).context("write markdown")?;
    }

    println!(
        "Audit complete. Found {} exceptions.",
        report.exceptions.len()
    );
    println!("Exceptions written to {}", output);

    Ok(verdict_exit_code(report.verdict))
}

fn cmd_generate(
    output: &Utf8Path,
    count: usize,
    seed: u64,
    as_of: Option<Date>,
) -> anyhow::Result<i32> {
    let generated = run_generate(GenerateInput {
        output,
        count: Some(count),
        seed: Some(seed),
        as_of,
    })?;

    println!("Generated {} suppliers.", generated.rows);
    println!("Supplier table written to {}", output);
    Ok(0)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(0)
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }

    Ok(0)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", esgaudit_app::format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                esgaudit_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            Ok(1)
        }
    }
}
