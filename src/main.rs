use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use percolation::{Grid, GridStats, QuickFind, UnionFind, WeightedQuickUnion};
use tracing::*;
use tracing_subscriber::EnvFilter;

/// Replays site openings on an N×N grid and reports whether it percolates.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid size N
    #[arg(short, long, allow_hyphen_values = true)]
    size: i64,

    /// Site to open, as ROW,COL (1-based). May be repeated.
    #[arg(short, long = "open", value_parser = parse_site)]
    open: Vec<(i64, i64)>,

    /// Connectivity backend
    #[arg(long, value_enum, default_value_t = Strategy::Weighted)]
    union_find: Strategy,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Weighted,
    QuickFind,
}

fn parse_site(s: &str) -> Result<(i64, i64)> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().context("invalid row")?;
    let col = col.trim().parse().context("invalid column")?;
    Ok((row, col))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn replay<U: UnionFind>(size: i64, sites: &[(i64, i64)]) -> Result<GridStats> {
    let mut grid = Grid::<U>::with_union_find(size).context("Failed to create grid")?;
    for &(i, j) in sites {
        grid.open(i, j)
            .with_context(|| format!("Failed to open site ({i}, {j})"))?;
    }
    Ok(grid.stats())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("Arguments: {:?}", args);

    let stats = match args.union_find {
        Strategy::Weighted => replay::<WeightedQuickUnion>(args.size, &args.open)?,
        Strategy::QuickFind => replay::<QuickFind>(args.size, &args.open)?,
    };
    println!("{stats}");

    Ok(())
}
