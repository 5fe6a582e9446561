use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use csv2json::{convert, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert a Latin-1 CSV file into a pretty-printed JSON document under a top-level \"data\" key"
)]
struct Args {
    /// CSV file to read (decoded as ISO-8859-1)
    #[arg(short, long)]
    input: PathBuf,
    /// JSON file to write (UTF-8)
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env).init();

    let args = Args::parse();
    let config = Config {
        csv_file_path: args.input,
        json_file_path: args.output,
    };

    info!(input = %config.csv_file_path.display(), "starting conversion");
    let summary = convert(&config)
        .with_context(|| format!("converting {}", config.csv_file_path.display()))?;
    info!(rows = summary.rows, columns = summary.columns, "done");

    println!("JSON file saved at: {}", config.json_file_path.display());
    Ok(())
}
