//! cotoha-score: emotional scores for text from the command line

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;
use cotoha_score::config::{load_config, CONFIG_FILENAME};
use cotoha_score::reporter::{ConsoleReporter, JsonReporter};
use cotoha_score::{Credentials, EmotionScorer, Endpoints};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// Score the emotional tone of text with the COTOHA sentiment API
#[derive(Parser, Debug)]
#[command(name = "cotoha-score")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to score (each argument is scored separately)
    #[arg(required = true)]
    text: Vec<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// With --json: pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Disable colored console output
    #[arg(long)]
    no_color: bool,

    /// Path to config file (default: search .cotoharc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Client id (overrides COTOHA_CLIENT_ID and the config file)
    #[arg(long)]
    client_id: Option<String>,

    /// Client secret (overrides COTOHA_CLIENT_SECRET and the config file)
    #[arg(long)]
    client_secret: Option<String>,

    /// Serve both endpoints from this host instead of api.ce-cotoha.com
    #[arg(long, value_name = "URL")]
    host: Option<String>,

    /// Developer API root, e.g. https://api.ce-cotoha.com/api/dev/
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// OAuth token endpoint
    #[arg(long, value_name = "URL")]
    token_url: Option<String>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?;

    // Variables already set in the environment win over .env
    dotenvy::dotenv().ok();
    let mut credentials = Credentials::resolve(&config, |key| std::env::var(key).ok());
    if let Some(id) = args.client_id {
        credentials.client_id = id;
    }
    if let Some(secret) = args.client_secret {
        credentials.client_secret = secret;
    }

    let mut endpoints = match args.host {
        Some(ref host) => Endpoints::for_host(host),
        None => config.endpoints(),
    };
    if let Some(url) = args.api_url {
        endpoints.api_base_url = url;
    }
    if let Some(url) = args.token_url {
        endpoints.token_url = url;
    }

    let scorer = EmotionScorer::with_endpoints(&credentials, endpoints);
    if !scorer.is_active() {
        eprintln!(
            "{}: Could not obtain a COTOHA access token. Check COTOHA_CLIENT_ID / COTOHA_CLIENT_SECRET or {}",
            "Warning".yellow(),
            CONFIG_FILENAME
        );
        return Ok(ExitCode::from(2));
    }

    let mut results = Vec::with_capacity(args.text.len());
    for text in &args.text {
        let result = scorer
            .predict(text)
            .with_context(|| format!("Failed to score {:?}", text))?;
        results.push(result);
    }

    if args.json {
        let mut reporter = JsonReporter::new();
        if args.pretty {
            reporter = reporter.pretty();
        }
        println!("{}", reporter.report_many(&results));
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        reporter.report_many(&results);
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
