use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use poke_search::{decide, search_state, DamageRollMode, DecisionStrategy, PayoffMatrix, State};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::models::SearchReport;
use crate::utils::{load_config, load_state};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Believed battle states, one JSON file each
    #[arg(required = true)]
    pub states: Vec<PathBuf>,

    /// JSON search config; flags below override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Turns searched after the first
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// maximin (safest) or equilibrium (nash)
    #[arg(short, long)]
    pub strategy: Option<DecisionStrategy>,

    /// Damage roll fidelity: average, min, max, min_max, min_max_average, all
    #[arg(long)]
    pub rolls: Option<DamageRollMode>,

    /// Score every cell even under maximin
    #[arg(long)]
    pub no_prune: bool,

    /// Seed for sampling a mixed strategy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the full report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(rolls) = args.rolls {
        config.damage_rolls = rolls;
    }
    if args.no_prune {
        config.prune = false;
    }

    let states = args
        .states
        .iter()
        .map(|path| load_state(path))
        .collect::<Result<Vec<State>>>()?;

    // Pruned cells differ between states; averaged matrices need every cell
    if states.len() > 1 && config.prune {
        debug!(states = states.len(), "pruning disabled to average believed states");
        config.prune = false;
    }

    let start = Instant::now();

    // Each search owns its state, so they can run side by side
    let matrices = states
        .into_par_iter()
        .map(|mut state| search_state(&mut state, &config))
        .collect::<poke_search::Result<Vec<PayoffMatrix>>>()
        .context("searching believed states")?;
    let matrix = PayoffMatrix::mean(&matrices).context("averaging payoff matrices")?;

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let decision = decide(&matrix, &config, &mut rng)?;

    let duration = start.elapsed();
    info!(states = matrices.len(), seconds = duration.as_secs_f64(), "search complete");

    let report = SearchReport {
        decision,
        strategy: config.strategy,
        depth: config.depth,
        states: matrices.len(),
        duration_seconds: duration.as_secs_f64(),
        matrix,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report.matrix);
        println!();
        println!("{}", report.decision);
    }
    Ok(())
}

fn print_table(matrix: &PayoffMatrix) {
    let width = matrix
        .user_options
        .iter()
        .map(|a| a.to_string().len())
        .max()
        .unwrap_or(0);

    print!("{:width$}", "");
    for opponent in &matrix.opponent_options {
        print!("  {:>14}", opponent.to_string());
    }
    println!();

    for (row, user) in matrix.user_options.iter().enumerate() {
        print!("{:width$}", user.to_string());
        for value in matrix.row(row) {
            match value {
                Some(v) => print!("  {:>14.2}", v),
                None => print!("  {:>14}", "-"),
            }
        }
        println!();
    }
}
