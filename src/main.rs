//! Command-line front end for the `lz77` codec.
//!
//! Reads the whole input (a file or a literal string), runs the engine in one
//! shot, and writes the result to a file or stdout. Every failure, usage
//! errors included, exits with status 1.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use lz77::config::{DEFAULT_MAX_MATCH, DEFAULT_MIN_MATCH, DEFAULT_WINDOW_SIZE};
use lz77::{Config, compress, decompress};

#[derive(Debug, Parser)]
#[command(name = "lz77", version, about = "LZ77 sliding-window compressor")]
#[command(group(ArgGroup::new("source").required(true).args(["input", "string"])))]
struct Cli {
    /// Compress (default)
    #[arg(short, long, conflicts_with = "decompress")]
    compress: bool,

    /// Decompress
    #[arg(short, long)]
    decompress: bool,

    /// Read input from FILE
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Use STRING as input
    #[arg(short, long, value_name = "STRING")]
    string: Option<String>,

    /// Write output to FILE (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Sliding window size in bytes
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_WINDOW_SIZE as u16)]
    window: u16,

    /// Shortest run encoded as a reference
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_MIN_MATCH as u16)]
    min_match: u16,

    /// Longest run a single reference may cover
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_MAX_MATCH as u16)]
    max_match: u16,

    /// Print a size summary to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config::new()
            .with_window_size(usize::from(self.window))
            .with_min_match(usize::from(self.min_match))
            .with_max_match(usize::from(self.max_match))
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // `--help` and `--version` are reported through the error path too.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(cli)?;

    let output = if cli.decompress {
        decompress(&input).context("decompression failed")?
    } else {
        compress(&input, &cli.config()).context("compression failed")?
    };

    match &cli.output {
        Some(path) => write_file(path, &output)?,
        None => write_stdout(&output)?,
    }

    if cli.verbose {
        eprintln!("{}", summary(cli.decompress, input.len(), output.len()));
    }

    Ok(())
}

fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    match (&cli.input, &cli.string) {
        (Some(path), _) => {
            fs::read(path).with_context(|| format!("cannot read '{}'", path.display()))
        }
        (None, Some(s)) => Ok(s.as_bytes().to_vec()),
        // clap enforces exactly one source.
        (None, None) => anyhow::bail!("must specify -i or -s"),
    }
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("cannot write '{}'", path.display()))
}

fn write_stdout(data: &[u8]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(data).context("cannot write to stdout")?;
    stdout.flush().context("cannot flush stdout")
}

fn summary(decompressing: bool, input_len: usize, output_len: usize) -> String {
    if decompressing {
        format!("decompressed {input_len} bytes -> {output_len} bytes")
    } else {
        let ratio = if input_len > 0 {
            output_len as f64 / input_len as f64 * 100.0
        } else {
            0.0
        };
        format!("compressed {input_len} bytes -> {output_len} bytes ({ratio:.1}%)")
    }
}
