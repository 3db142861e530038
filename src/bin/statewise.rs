use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use statewise::app::App;
use statewise::config::ConfigLoader;
use statewise::domain::CaseType;
use statewise::error::StatewiseError;
use statewise::export::CsvExporter;
use statewise::feed::FeedHttpClient;
use statewise::output::JsonOutput;

#[derive(Parser)]
#[command(name = "statewise")]
#[command(about = "Export state-wise daily case-count time series from the covid19india feed to CSV")]
#[command(version, author)]
struct Cli {
    #[arg(long, global = true)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Fetch the feed and export one CSV per case type")]
    Export(ExportArgs),
}

#[derive(Args, Default)]
struct ExportArgs {
    case_type: Option<CaseType>,

    #[arg(long, conflicts_with = "case_type")]
    all: bool,

    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    out: Option<String>,

    #[arg(long)]
    url: Option<String>,

    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<StatewiseError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &StatewiseError) -> u8 {
    match error {
        StatewiseError::FeedHttp(_) | StatewiseError::FeedStatus { .. } => 3,
        StatewiseError::InvalidCaseType(_)
        | StatewiseError::CaseTypeNotFound { .. }
        | StatewiseError::UnknownStateColumn(_)
        | StatewiseError::MissingStatesDaily
        | StatewiseError::ConfigRead(_)
        | StatewiseError::ConfigParse(_) => 2,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref()).into_diagnostic()?;

    let args = match cli.command {
        Some(Commands::Export(args)) => args,
        None => ExportArgs::default(),
    };
    run_export(args)
}

fn init_tracing(log_file: Option<&str>) -> Result<(), StatewiseError> {
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .map_err(|err| StatewiseError::Filesystem(err.to_string()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
                )
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn run_export(args: ExportArgs) -> miette::Result<()> {
    let resolved = ConfigLoader::resolve(args.config.as_deref()).into_diagnostic()?;

    let case_types: Vec<CaseType> = if args.all {
        CaseType::ALL.to_vec()
    } else if let Some(case_type) = args.case_type {
        vec![case_type]
    } else {
        resolved.case_types.clone()
    };

    let url = args.url.unwrap_or(resolved.source_url);
    let timeout = args
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or(resolved.timeout);
    let out_dir = args
        .out
        .map(Utf8PathBuf::from)
        .unwrap_or(resolved.output_dir);

    let feed = FeedHttpClient::new(url, timeout).into_diagnostic()?;
    let app = App::new(feed, CsvExporter::new(out_dir));

    let result = app.export(&case_types).into_diagnostic()?;

    if args.json {
        JsonOutput::print_export(&result).into_diagnostic()?;
    } else {
        for item in &result.items {
            println!(
                "{} -> {} ({} states x {} dates)",
                item.case_type, item.output_path, item.states, item.dates
            );
        }
    }
    Ok(())
}
