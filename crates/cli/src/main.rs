use arp_inspect_application::services::ArpClassifier;
use arp_inspect_application::use_cases::FindIncompleteMacsUseCase;
use arp_inspect_domain::config::ReportFormat;
use arp_inspect_domain::CliOverrides;
use arp_inspect_infrastructure::report::report_writer_for;
use arp_inspect_infrastructure::system::{list_files, resolve_input_path, FileArpSource};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{debug, info};

mod bootstrap;
mod display;
mod prompt;

#[derive(Parser)]
#[command(name = "arp-inspect")]
#[command(version)]
#[command(about = "Find incomplete MAC addresses in Cisco switch ARP table output")]
#[command(after_help = "Examples:
  arp-inspect arp_output.txt
  arp-inspect /path/to/arp_output.txt
  arp-inspect ~/Documents/switch_arp.txt
  arp-inspect ../data/arp.txt

If no file is provided, the program will prompt you interactively.")]
struct Cli {
    /// Path to the ARP table output file (prompts if omitted)
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<String>,

    /// Report file path
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Report file format
    #[arg(short = 'f', long, value_enum)]
    format: Option<FormatArg>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Token the switch prints for unresolved entries
    #[arg(long, value_name = "TOKEN")]
    marker: Option<String>,

    /// Do not print the banner
    #[arg(long)]
    no_banner: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        unresolved_marker: cli.marker.clone(),
        output_path: cli.output.clone(),
        report_format: cli.format.map(ReportFormat::from),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(version = env!("CARGO_PKG_VERSION"), "Starting arp-inspect");

    let output_path = PathBuf::from(&config.report.output_path);

    if !cli.no_banner {
        println!("{}", display::Banner::new(&output_path));
    }

    let mut stdin = BufReader::new(tokio::io::stdin());
    let interactive = cli.input_file.is_none();

    let raw_input = match cli.input_file {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir()?;
            let files = list_files(&cwd).await.unwrap_or_default();
            prompt::prompt_for_input(&mut stdin, &mut std::io::stdout(), &files).await?
        }
    };

    let input_path = resolve_input_path(&raw_input).await?;
    println!("Processing file: {}\n", input_path.display());

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        format = %config.report.format,
        "Scanning ARP capture"
    );

    let use_case = FindIncompleteMacsUseCase::new(
        Arc::new(FileArpSource::new(input_path)),
        report_writer_for(config.report.format, &output_path),
        ArpClassifier::new(&config.classifier),
    );
    let report = use_case.execute().await?;

    print!("{}", display::Results::new(&report, &output_path));

    if interactive {
        prompt::wait_for_enter(&mut stdin, &mut std::io::stdout()).await?;
    }

    Ok(())
}
