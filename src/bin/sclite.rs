use std::path::PathBuf;

use chrono::Utc;
use clap::{ArgAction, Parser};
use sclite_rs::{load_trn, ScoringConfig, ScoringError, ScoringSessionBuilder};

#[path = "sclite/json_report_formatter.rs"]
mod json_report_formatter;

const SUPPORTED_INPUT: &str = "rm";
const SUPPORTED_OUTPUT: [&str; 2] = ["all", "stdout"];
const SUPPORTED_TRANSCRIPT: &str = "trn";

#[derive(Debug, Parser)]
#[command(name = "sclite")]
#[command(about = "Score hypothesis transcripts against references (word error rate by speaker)")]
#[command(disable_help_flag = true)]
struct Args {
    /// Reference transcript, optionally followed by its format (trn).
    #[arg(short = 'r', long = "ref", env = "SCLITE_REF", num_args = 1..=2, required = true)]
    reference: Vec<String>,
    /// Hypothesis transcript, optionally followed by its format (trn).
    #[arg(short = 'h', long = "hyp", env = "SCLITE_HYP", num_args = 1..=2, required = true)]
    hypothesis: Vec<String>,
    /// Report selection and destination.
    #[arg(short, long, num_args = 2, default_values = ["all", "stdout"])]
    output: Vec<String>,
    /// Input word representation.
    #[arg(short, long, default_value = SUPPORTED_INPUT)]
    input: String,
    /// JSON file with scoring options.
    #[arg(long, env = "SCLITE_CONFIG")]
    config: Option<PathBuf>,
    /// Score all utterances as a single speaker.
    #[arg(long, env = "SCLITE_NO_SPEAKER_GROUPING")]
    no_speaker_grouping: bool,
    /// Also write a machine-readable summary to this path.
    #[arg(long, env = "SCLITE_JSON_OUT")]
    json_out: Option<PathBuf>,
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("sclite: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    validate(&args).map_err(|err| err.to_string())?;

    let mut config = match &args.config {
        Some(path) => ScoringConfig::load(path).map_err(|err| err.to_string())?,
        None => ScoringConfig::default(),
    };
    if args.no_speaker_grouping {
        config.no_speaker_grouping = true;
    }

    let ref_path = PathBuf::from(&args.reference[0]);
    let hyp_path = PathBuf::from(&args.hypothesis[0]);
    let reference = load_trn(&ref_path).map_err(|err| err.to_string())?;
    let hypothesis = load_trn(&hyp_path).map_err(|err| err.to_string())?;
    tracing::info!(
        reference = %ref_path.display(),
        hypothesis = %hyp_path.display(),
        "loaded transcripts"
    );

    let session = ScoringSessionBuilder::new(config)
        .with_system_name(hyp_path.display().to_string())
        .build(&reference, &hypothesis)
        .map_err(|err| err.to_string())?;

    print!("{}", session.render_report());

    if let Some(path) = &args.json_out {
        let report = session.to_report(Utc::now().to_rfc3339());
        json_report_formatter::write_report(path, &report)?;
        tracing::info!(path = %path.display(), "wrote JSON summary");
    }
    Ok(())
}

fn validate(args: &Args) -> Result<(), ScoringError> {
    if args.input != SUPPORTED_INPUT {
        return Err(ScoringError::unsupported("input format", &args.input));
    }
    if args.output != SUPPORTED_OUTPUT {
        return Err(ScoringError::unsupported("output", args.output.join(" ")));
    }
    let transcripts = [
        ("reference format", &args.reference),
        ("hypothesis format", &args.hypothesis),
    ];
    for (option, values) in transcripts {
        if let Some(format) = values.get(1) {
            if format != SUPPORTED_TRANSCRIPT {
                return Err(ScoringError::unsupported(option, format));
            }
        }
    }
    Ok(())
}
