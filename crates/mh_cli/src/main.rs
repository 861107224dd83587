//! Monty Hall CLI
//!
//! Drives the engine the way a UI host would: plays scripted rounds and runs
//! bulk simulations, rendering the status line, the "what if" narrative and
//! the win-rate table. All display text is derived here from engine
//! snapshots; the engine itself stores none of it.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use mh_core::{GameSession, RoundOutcome, SessionStats, Strategy, DOOR_COUNT};

/// What the winner takes home. Display only.
const PRIZE_LABEL: &str = "$10,000";

#[derive(Parser)]
#[command(name = "mh_cli")]
#[command(about = "Play and simulate the Monty Hall game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one round with a scripted pick and decision
    Play {
        /// Initial door selection (1-3)
        #[arg(long)]
        pick: u8,

        /// Switch to the remaining closed door instead of staying
        #[arg(long, default_value = "false")]
        switch: bool,

        /// RNG seed for a reproducible round; omit for OS entropy
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the raw JSON API response instead of prose (needs --seed)
        #[arg(long, default_value = "false", requires = "seed")]
        json: bool,
    },

    /// Run a bulk simulation and print the win-rate table
    Simulate {
        /// Number of hypothetical rounds
        #[arg(long, default_value = "1000")]
        count: u64,

        /// RNG seed for a reproducible run; omit for OS entropy
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the raw JSON API response instead of prose (needs --seed)
        #[arg(long, default_value = "false", requires = "seed")]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { pick, switch, seed, json } => play(pick, switch, seed, json),
        Commands::Simulate { count, seed, json } => run_simulation(count, seed, json),
    }
}

fn session_from(seed: Option<u64>) -> GameSession {
    match seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::new(),
    }
}

fn play(pick: u8, switch: bool, seed: Option<u64>, json: bool) -> Result<()> {
    if pick < 1 || pick > DOOR_COUNT {
        bail!("pick must be between 1 and {}", DOOR_COUNT);
    }
    if json {
        let seed = seed.context("--json needs --seed")?;
        let request = serde_json::json!({
            "schema_version": mh_core::SCHEMA_VERSION,
            "seed": seed,
            "picked_door": pick - 1,
            "switch": switch,
        });
        let response = mh_core::play_round_json(&request.to_string()).map_err(anyhow::Error::msg)?;
        println!("{}", response);
        return Ok(());
    }
    let mut session = session_from(seed);

    let door = pick - 1;
    if !session.pick(door) {
        bail!("engine rejected the pick");
    }
    let host_door =
        session.round().host_opened_door().context("host door missing after pick")?;
    println!("You picked Door {}.", pick);
    println!("Host opened Door {} (empty).", host_door + 1);

    if !session.finalize(switch) {
        bail!("engine rejected the decision");
    }
    let round = session.round();
    let final_choice = round.final_choice().context("final choice missing")?;
    let outcome = round.outcome().context("outcome missing")?;
    let counterfactual = round.counterfactual_outcome().context("counterfactual missing")?;
    let strategy = round.strategy().context("strategy missing")?;

    println!(
        "You {} and ended on Door {}.",
        if switch { "switched" } else { "stayed" },
        final_choice + 1
    );
    match outcome {
        RoundOutcome::Win => println!("🎉 You WON the {}!", PRIZE_LABEL),
        RoundOutcome::Loss => println!("❌ You went bust."),
    }
    println!("{}", impact_line(strategy, counterfactual));
    println!("(The prize was behind Door {}.)", round.prize_door() + 1);

    println!();
    print_stats(session.stats());
    Ok(())
}

/// The "what if" narrative: what the opposite decision would have done.
fn impact_line(strategy: Strategy, counterfactual: RoundOutcome) -> String {
    let opposite = match strategy.opposite() {
        Strategy::Stay => "stayed",
        Strategy::Switch => "switched",
    };
    match counterfactual {
        RoundOutcome::Win => {
            format!("If you had {}, you would have WON the {}.", opposite, PRIZE_LABEL)
        }
        RoundOutcome::Loss => format!("If you had {}, you would have LOST.", opposite),
    }
}

fn run_simulation(count: u64, seed: Option<u64>, json: bool) -> Result<()> {
    if count == 0 {
        bail!("count must be at least 1");
    }
    if json {
        let seed = seed.context("--json needs --seed")?;
        let request = serde_json::json!({
            "schema_version": mh_core::SCHEMA_VERSION,
            "seed": seed,
            "count": count,
        });
        let response = mh_core::simulate_json(&request.to_string()).map_err(anyhow::Error::msg)?;
        println!("{}", response);
        return Ok(());
    }
    let mut session = session_from(seed);

    log::info!("running {} simulated rounds", count);
    let report = session.run_simulation(count);

    println!("Simulated {} rounds (both strategies evaluated per round):", report.trials);
    println!();
    print_stats(session.stats());
    Ok(())
}

fn print_stats(stats: &SessionStats) {
    println!("Strategy  Wins     Losses   Win rate");
    for strategy in [Strategy::Stay, Strategy::Switch] {
        let tally = stats.tally(strategy);
        println!(
            "{:<9} {:<8} {:<8} {:>5.1}%",
            strategy.label(),
            tally.wins,
            tally.losses,
            tally.win_rate()
        );
    }
    println!("Total rounds resolved: {}", stats.total);
}
