use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hwr_lookup::ReferenceDatabase;

#[derive(Parser, Debug)]
#[command(name = "db_convert")]
#[command(about = "Decode the JSON stroke database once and store it in binary form")]
struct Args {
    #[arg(long, default_value = "./data/mmah.json")]
    input: PathBuf,

    #[arg(long, default_value = "./data/mmah.bin")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let file = File::open(&args.input).with_context(|| format!("failed to open {}", args.input.display()))?;
    let db = ReferenceDatabase::from_json_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let out = File::create(&args.output).with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(out);
    db.write_binary(&mut writer)?;
    writer.flush()?;
    info!(
        entries = db.len(),
        bytes = db.substroke_data().len(),
        output = %args.output.display(),
        "wrote binary database"
    );
    Ok(())
}
