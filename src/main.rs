use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use notedoc::{Config, Report};

#[derive(Parser)]
#[command(name = "notedoc")]
#[command(about = "Convert meeting notes markdown into a structured document")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to emit
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// TOML config file with styling overrides
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Document-service paragraphs as JSON
    Json,
    /// The parsed block model as JSON
    Blocks,
    /// Summary of the parsed document with basic checks
    Report,
}

/// Number of blocks shown in the report preview
const PREVIEW_LEN: usize = 5;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::compiled_default(),
    };

    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut passed = true;
    let rendered = match cli.format {
        Format::Json => notedoc::markdown_to_json(&markdown, &config),
        Format::Blocks => {
            serde_json::to_string_pretty(&notedoc::parse(&markdown)).map_err(notedoc::Error::from)
        }
        Format::Report => {
            let report = Report::from_blocks(&notedoc::parse(&markdown), PREVIEW_LEN);
            passed = report.all_passed();
            Ok(report.to_string())
        }
    };
    let rendered = match rendered {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match &cli.output {
        Some(output) => {
            if let Err(e) = fs::write(output, format!("{rendered}\n")) {
                eprintln!("Error writing {}: {}", output.display(), e);
                return ExitCode::FAILURE;
            }
            log::info!("wrote {}", output.display());
        }
        None => println!("{rendered}"),
    }

    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
