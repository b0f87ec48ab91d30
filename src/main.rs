use anyhow::Result;
use clap::{Parser, ValueEnum};
use hyoki::discovery;
use hyoki::reader::{self, InputReader, InputSource, ReadOutcome, ReaderConfig};
use hyoki::report::{render_text, JsonReport, Marker, RenderOptions};
use hyoki::{RuleSet, StyleChecker};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit status when `--strict` is set and something was flagged
const EXIT_FINDINGS: u8 = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "hyoki")]
#[command(about = "Orthography and numeral-notation consistency checker for Japanese documents")]
#[command(version)]
struct Args {
    /// Files or glob patterns to check; reads standard input when omitted
    inputs: Vec<String>,

    /// Extra rule table (TOML) merged over the built-in one
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Use only the --rules table, ignoring the built-in one
    #[arg(long, requires = "rules")]
    replace_rules: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Marker inserted before each highlighted variant
    #[arg(long, default_value = "<mark>")]
    marker_open: String,

    /// Marker inserted after each highlighted variant
    #[arg(long, default_value = "</mark>")]
    marker_close: String,

    /// Omit the highlighted text from text output
    #[arg(long)]
    no_highlight: bool,

    /// Abort on first unreadable input
    #[arg(long)]
    fail_fast: bool,

    /// Exit with status 2 when anything is flagged
    #[arg(long)]
    strict: bool,
}

fn load_rules(args: &Args) -> Result<RuleSet> {
    let Some(path) = &args.rules else {
        return Ok(RuleSet::builtin().clone());
    };

    let user = RuleSet::load(path)?;
    if args.replace_rules {
        Ok(user)
    } else {
        let merged = RuleSet::builtin().merged_with(&user);
        merged.validate()?;
        Ok(merged)
    }
}

async fn read_inputs(args: &Args) -> Result<Vec<ReadOutcome>> {
    if args.inputs.is_empty() {
        let text = reader::read_stdin().await?;
        return Ok(vec![ReadOutcome {
            source: InputSource::Stdin,
            bytes_read: text.len() as u64,
            text: Some(text),
            error: None,
        }]);
    }

    let files = discovery::expand_inputs(args.inputs.as_slice())?;
    let input_reader = InputReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
    });
    input_reader.read_files(&files).await
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // WHY: stdout carries the report, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let rules = load_rules(&args)?;
    let checker = StyleChecker::new(&rules)?;
    let outcomes = read_inputs(&args).await?;

    let marker = Marker {
        open: args.marker_open.clone(),
        close: args.marker_close.clone(),
    };
    let options = RenderOptions {
        marker: marker.clone(),
        show_highlight: !args.no_highlight,
    };

    let show_headers = outcomes.len() > 1;
    let mut json_reports = Vec::new();
    let mut total_findings = 0;
    let mut failed_inputs = 0;

    for outcome in &outcomes {
        let label = outcome.source.label();
        let Some(text) = &outcome.text else {
            if let Some(error) = &outcome.error {
                eprintln!("{label}: {error}");
            }
            failed_inputs += 1;
            continue;
        };

        let report = checker.run(text);
        total_findings += report.findings.len();

        match args.format {
            OutputFormat::Text => {
                if show_headers {
                    println!("== {label} ==");
                }
                print!("{}", render_text(text, &report, &options));
            }
            OutputFormat::Json => json_reports.push(JsonReport::new(label, text, &report, &marker)),
        }
    }

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&json_reports)?);
    }

    info!(
        inputs = outcomes.len(),
        failed = failed_inputs,
        findings = total_findings,
        "Check complete"
    );

    // Unreadable inputs outrank findings: the check was incomplete
    if failed_inputs > 0 {
        Ok(ExitCode::FAILURE)
    } else if args.strict && total_findings > 0 {
        Ok(ExitCode::from(EXIT_FINDINGS))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
