use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::{info, Level};

use word_index::{ReaderConfig, RunConfig, DEFAULT_OUTPUT, MAX_LINE_LENGTH};

#[derive(Parser, Debug)]
#[command(name = "word-index")]
#[command(about = "Alphabetical word index with the line numbers each word appears on")]
#[command(version)]
struct Args {
    /// Text file to index
    input: PathBuf,

    /// Where to write the index
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Log every line read and every word inserted
    #[arg(long)]
    debug: bool,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Bytes consumed per line read, terminator included; the rest of a longer line is dropped
    #[arg(long, default_value_t = MAX_LINE_LENGTH, value_parser = parse_line_length)]
    max_line_length: usize,

    /// Print run statistics as JSON on stdout
    #[arg(long)]
    stats: bool,
}

fn parse_line_length(value: &str) -> Result<usize, String> {
    let n: usize = value.parse().map_err(|e| format!("{e}"))?;
    if n < 2 {
        return Err("must leave room for at least one byte besides the terminator".to_string());
    }
    Ok(n)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let config = RunConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        reader: ReaderConfig {
            use_mmap: args.use_mmap,
            ..Default::default()
        },
        max_line_length: args.max_line_length,
    };

    let stats = match word_index::run(&config).await {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("{}", Args::command().render_usage());
            return Err(e).context("Indexing failed");
        }
    };

    if args.stats {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("Failed to encode run statistics")?
        );
    }

    Ok(())
}
