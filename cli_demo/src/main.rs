use anyhow::{Context, Result};
use clap::Parser;
use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use hwr_lookup::{Matcher, MatcherConfig, ReferenceDatabase, ScoreTables, Stroke};

// Each recorded line starts with a timestamp prefix of this width, then JSON
const LINE_PREFIX_LEN: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "cli_demo")]
#[command(about = "Replay recorded handwriting against a stroke database and time the lookups")]
struct Args {
    /// Stroke database: JSON resource, or binary form if the extension is .bin
    #[arg(long, default_value = "data/mmah.json")]
    db: PathBuf,

    /// Recorded inputs, one timestamped JSON record per line
    #[arg(long, default_value = "debug/inputs.txt")]
    inputs: PathBuf,

    /// Matcher configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    looseness: Option<f64>,

    #[arg(long)]
    limit: Option<usize>,

    /// Evaluation passes over the whole input file
    #[arg(long, default_value_t = 1)]
    iters: usize,
}

#[allow(dead_code)]
#[derive(Serialize, Deserialize)]
struct Action {
    action: String,
    points: Vec<Vec<f32>>,
}

#[allow(dead_code)]
#[derive(Serialize, Deserialize)]
struct Input {
    char: String,
    ix: i64,
    duration: i64,
    actions: Vec<Action>,
}

fn read_inputs(path: &Path) -> Result<Vec<Input>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut res: Vec<Input> = Vec::new();
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let Some(json) = line.get(LINE_PREFIX_LEN..) else {
            warn!(line = line_no + 1, "skipping short line");
            continue;
        };
        let input: Input =
            serde_json::from_str(json).with_context(|| format!("bad record on line {}", line_no + 1))?;
        res.push(input);
    }
    Ok(res)
}

fn load_database(path: &Path) -> Result<ReferenceDatabase> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let db = if path.extension().is_some_and(|ext| ext == "bin") {
        ReferenceDatabase::read_binary(reader)
    } else {
        ReferenceDatabase::from_json_reader(reader)
    };
    db.with_context(|| format!("failed to load database {}", path.display()))
}

fn load_config(args: &Args) -> Result<MatcherConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
            MatcherConfig::from_json_str(&json)?
        }
        None => MatcherConfig::default(),
    };
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    if let Some(looseness) = args.looseness {
        config.looseness = looseness;
    }
    config.validate()?;
    Ok(config)
}

fn get_strokes(actions: &[Action]) -> Vec<Stroke> {
    actions
        .iter()
        .map(|action| Stroke::from_points(action.points.iter().filter(|pt| pt.len() >= 2).map(|pt| (pt[0], pt[1]))))
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let db = load_database(&args.db)?;
    let tables = ScoreTables::new();
    let matcher = Matcher::new(&db, &tables, config)?;

    info!(path = %args.inputs.display(), "loading evaluation data");
    let inputs = read_inputs(&args.inputs)?;
    let strokes: Vec<Vec<Stroke>> = inputs.iter().map(|input| get_strokes(&input.actions)).collect();
    info!(inputs = inputs.len(), iters = args.iters, "starting evaluation");

    let start = Instant::now();
    let mut guessed = 0;
    for _ in 0..args.iters {
        for (input, strokes) in inputs.iter().zip(&strokes) {
            let matches = matcher.recognize(strokes);
            debug!(ix = input.ix, expected = %input.char, top = ?matches.first(), "looked up");
            if matches.first().is_some_and(|m| m.hanzi == input.char) {
                guessed += 1;
            }
        }
    }
    let duration = start.elapsed();
    println!("Finished in {:?}. Correct guesses: {}.", duration, guessed);
    Ok(())
}
