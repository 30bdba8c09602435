#![forbid(unsafe_code)]

use clap::Parser;
use match_schedule::{Schedule, DEFAULT_MATCHES_PER_TEAM};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate and anneal a three-vs-three match schedule",
    long_about = None
)]
struct Cli {
    /// Number of teams.
    #[arg(short, long)]
    teams: usize,

    /// Minimum matches each team plays.
    #[arg(short, long, default_value_t = DEFAULT_MATCHES_PER_TEAM)]
    matches_per_team: usize,

    /// Initial annealing temperature.
    #[arg(long, default_value_t = 1000.0)]
    temperature: f64,

    /// Number of annealing steps.
    #[arg(long, default_value_t = 100_000)]
    steps: usize,

    /// Seed for reproducible schedules.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the schedule as a JSON array of matches.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "match_schedule=debug,schedule=debug"
        } else {
            "match_schedule=info,schedule=info"
        })
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut schedule = match cli.seed {
        Some(seed) => Schedule::with_seed(cli.teams, cli.matches_per_team, seed)?,
        None => Schedule::new(cli.teams, cli.matches_per_team)?,
    };
    schedule.shuffle();

    let baseline = schedule.cost_breakdown()?;
    info!("shuffled baseline: {baseline}");

    let result = schedule.optimize(cli.temperature, cli.steps)?;
    let optimized = schedule.cost_breakdown()?;
    info!(
        accepted = result.accepted_moves,
        improving = result.improving_moves,
        "optimized: {optimized}"
    );

    if cli.json {
        println!("{}", serde_json::to_string(&schedule)?);
    } else {
        for row in schedule.matches() {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
        }
    }

    Ok(())
}
