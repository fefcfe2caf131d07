//! Kanji Stroke CLI
//!
//! Usage:
//!   kanji-stroke [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>   Stroke configuration (TOML format)
//!   --size <W> <H>        Map strokes onto a W x H box
//!   -d, --debug           Log parsing details to stderr
//!   -h, --help            Print help
//!
//! Prints one line per stroke: index, length, and absolute path data.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;

use kanji_stroke::{extract, load_strokes_with_config, StrokeConfig};

#[derive(Parser)]
#[command(name = "kanji-stroke")]
#[command(about = "Resolve and measure the strokes of a KanjiVG character")]
struct Cli {
    /// Input SVG file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Stroke configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target box size, overriding the config file
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    size: Option<Vec<f64>>,

    /// Debug mode: log parsing details to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    // Load config
    let mut config = match &cli.config {
        Some(path) => match StrokeConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => StrokeConfig::default(),
    };

    if let Some([width, height]) = cli.size.as_deref() {
        config = config.with_target_size(*width, *height);
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match load_strokes_with_config(&source, &config) {
        Ok(strokes) => {
            for stroke in strokes {
                println!(
                    "{}\t{:.2}\t{}",
                    stroke.index,
                    stroke.length,
                    stroke.path.to_svg_d()
                );
            }
        }
        Err(e) => {
            let report = match extract(&source).iter().position(|d| d == e.input()) {
                Some(index) => e.format_stroke(&filename, index),
                None => e.format(&filename),
            };
            eprint!("{}", report);
            std::process::exit(1);
        }
    }
}
