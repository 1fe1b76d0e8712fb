use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

use uidetect::{DebugConfig, Detector, DetectorConfig};

#[derive(Parser)]
#[command(name = "uidetect")]
#[command(about = "Detect UI regions in a screenshot and print them as JSON")]
struct Cli {
    /// Path to input image file, or `-` to read from stdin
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// JSON file overriding detector parameters
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Enable verbose output (on stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Save intermediate stage images to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// The detection result as JSON
    Json,
    /// One line per element: type, confidence, x, y, w, h
    Text,
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).context("Failed to read image from stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("Failed to read image {:?}", path))
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => DetectorConfig::from_json_file(path)?,
        None => DetectorConfig::default(),
    };

    // Check the debug directory before doing any work
    let debug = args
        .debug_out
        .as_ref()
        .map(|dir| DebugConfig::new(dir).map(|d| d.with_verbose(args.verbose)))
        .transpose()?;

    if args.verbose {
        eprintln!("Loading image: {:?}", args.image_path);
    }
    let bytes = read_input(&args.image_path)?;

    let detector = Detector::new(config)?.with_verbose(args.verbose);
    let analysis = detector.analyze(&bytes)?;

    if let Some(debug) = &debug {
        debug.save(&analysis)?;
    }

    let result = &analysis.result;
    match args.format {
        OutputFormat::Json => {
            let json = if args.compact {
                serde_json::to_string(result)?
            } else {
                serde_json::to_string_pretty(result)?
            };
            println!("{}", json);
        }
        OutputFormat::Text => {
            for elem in &result.elements {
                let b = elem.bounds();
                println!(
                    "{}\t{:.2}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
                    elem.ui_type(),
                    elem.confidence(),
                    b.x,
                    b.y,
                    b.w,
                    b.h
                );
            }
        }
    }

    Ok(())
}
