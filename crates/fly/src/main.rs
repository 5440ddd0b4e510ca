//! Flyweight demo - draws circles from a color-keyed pool

mod demo;

use anyhow::{Context, Result};
use clap::Parser;
use shapes::{Color, ShapeFactory};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::demo::{DemoReport, DemoSettings};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of circles to draw
    #[arg(short = 'n', long, default_value_t = 20)]
    iterations: usize,

    /// Comma-separated colors to pick from
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "Red,Green,Blue,White,Black"
    )]
    colors: Vec<String>,

    /// Radius applied to every circle
    #[arg(short, long, default_value_t = 100)]
    radius: u32,

    /// Largest x/y coordinate
    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(i32).range(0..)
    )]
    max_coord: i32,

    /// RNG seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let colors = args
        .colors
        .iter()
        .map(|name| name.parse::<Color>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid --colors")?;

    let settings = DemoSettings {
        iterations: args.iterations,
        colors,
        radius: args.radius,
        max_coord: args.max_coord,
        seed: args.seed,
    };

    info!("Starting flyweight demo v{}", env!("CARGO_PKG_VERSION"));
    info!("Iterations: {}", settings.iterations);
    info!("Colors: {:?}", settings.colors);

    let factory = ShapeFactory::new();
    let report = demo::run(&factory, &settings)?;

    info!(
        "Built {} circles for {} draws",
        factory.circles_created(),
        report.draws.len()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Filter from `RUST_LOG` directives, falling back to `info` when unset or invalid
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn print_report(report: &DemoReport) {
    for line in &report.draws {
        println!("{}", line);
    }

    println!();
    println!("Instance reuse ({} instances):", report.instances);
    for (color, count) in &report.reuse {
        println!("  {:<6} {}", color.as_str(), count);
    }
    println!(
        "Pool: {} hits, {} misses, hit ratio {:.2}",
        report.stats.hits, report.stats.misses, report.stats.hit_ratio
    );
}
