use std::io::{BufWriter, Write};

use eyre::{WrapErr, bail};
use sparse_life::{SparseLife, SparseLifeConfig, read_coordinates, write_coordinates};
use tracing::info;

const DEFAULT_GENERATIONS: u64 = 10;
const GENERATIONS_ENV: &str = "SPARSE_LIFE_GENERATIONS";
const USAGE: &str = "usage: sparse-life [--generations N] [--threads N] [--max-threads N] [--sorted]\n\
reads `(x, y)` lines from stdin until a blank line, writes `x y` lines to stdout";

struct MainArgs {
    config: SparseLifeConfig,
    generations: u64,
    sorted: bool,
}

fn parse_count(flag: &str, value: Option<&String>) -> eyre::Result<u64> {
    let Some(value) = value else {
        bail!("{flag} requires a value\n{USAGE}");
    };
    value
        .parse()
        .wrap_err_with(|| format!("{flag} requires a non-negative integer, got {value:?}"))
}

fn default_generations() -> eyre::Result<u64> {
    match std::env::var(GENERATIONS_ENV) {
        Ok(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("{GENERATIONS_ENV} must be a non-negative integer")),
        Err(_) => Ok(DEFAULT_GENERATIONS),
    }
}

/// `None` means `--help` was requested.
fn parse_args(args: &[String]) -> eyre::Result<Option<MainArgs>> {
    let mut config = SparseLifeConfig::default();
    let mut generations = None;
    let mut sorted = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--generations" | "-g" => {
                i += 1;
                generations = Some(parse_count("--generations", args.get(i))?);
            }
            "--threads" => {
                i += 1;
                let n = parse_count("--threads", args.get(i))?;
                config = config.thread_count(n as usize);
            }
            "--max-threads" => {
                i += 1;
                let n = parse_count("--max-threads", args.get(i))?;
                config = config.max_threads(n as usize);
            }
            "--sorted" => {
                sorted = true;
            }
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument: {other}\n{USAGE}"),
        }
        i += 1;
    }
    let generations = match generations {
        Some(n) => n,
        None => default_generations()?,
    };
    Ok(Some(MainArgs {
        config,
        generations,
        sorted,
    }))
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sparse_life=warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(args) = parse_args(&args)? else {
        println!("{USAGE}");
        return Ok(());
    };

    let coords = read_coordinates(std::io::stdin().lock()).wrap_err("failed to read input")?;
    info!(cells = coords.len(), generations = args.generations, "input read");

    let mut engine = SparseLife::with_config(coords, args.config)?;
    engine.advance_n(args.generations);
    info!(
        generation = engine.generation(),
        population = engine.population(),
        "simulation finished"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.sorted {
        write_coordinates(&mut out, engine.sorted_cells())?;
    } else {
        write_coordinates(&mut out, engine.live_cells())?;
    }
    out.flush()?;
    Ok(())
}
