//! Cribbage Binary
//!
//! With no subcommand, scores every hand against every draw and checks the
//! resulting histogram against the known distribution.
//!
//! Subcommands: verify, score, random

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use cribbage::cards::Deck;
use cribbage::cards::Hand;
use cribbage::enumeration::Enumerator;
use cribbage::enumeration::Histogram;
use cribbage::enumeration::Verifier;
use cribbage::scoring::ScoreReport;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Suppress per-draw progress and timing
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Score every hand and draw, then check the histogram", alias = "v")]
    Verify(Verify),
    #[command(
        about = "Score one hand, e.g. \"5s 5c 5d Jh 5h\" (last card is the draw)",
        alias = "s"
    )]
    Score {
        #[arg(required = true)]
        hand: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Deal and score random hands", alias = "r")]
    Random {
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
}

#[derive(Args, Default)]
struct Verify {
    /// Reference histogram: 30 lines, the count of hands scoring 0 through 29
    #[arg(long)]
    reference: Option<PathBuf>,
    /// Score draw cards one at a time on the main thread
    #[arg(long)]
    serial: bool,
    /// Worker threads for the parallel pass (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cribbage::log()?;
    match cli.command.unwrap_or(Command::Verify(Verify::default())) {
        Command::Verify(args) => verify(args, !cli.quiet),
        Command::Score { hand, json } => score(&hand, json),
        Command::Random { count } => random(count),
    }
}

fn verify(args: Verify, verbose: bool) -> anyhow::Result<()> {
    let reference = match args.reference {
        Some(ref path) => Histogram::load(path)?,
        None => Histogram::reference()?,
    };
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }
    let histogram = Enumerator::default()
        .verbose(verbose)
        .serial(args.serial)
        .enumerate();
    println!("{}", "histogram".bold());
    for (score, count) in histogram.iter() {
        println!("{:>2} {:>10}", score, count);
    }
    let verification = Verifier::from(reference).verify(&histogram);
    for mismatch in verification.mismatches() {
        println!("{}", mismatch.to_string().red());
    }
    if verification.is_match() {
        println!("{}", verification.to_string().green());
    } else {
        log::warn!("{} mismatched buckets", verification.mismatches().len());
    }
    Ok(())
}

fn score(hand: &str, json: bool) -> anyhow::Result<()> {
    let hand = Hand::try_from(hand).map_err(|e| anyhow::anyhow!(e))?;
    let report = ScoreReport::from(hand);
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}\n{}", hand, report);
    }
    Ok(())
}

fn random(count: usize) -> anyhow::Result<()> {
    for _ in 0..count {
        let hand = Deck::new().hand();
        let report = ScoreReport::from(hand);
        println!("{}", hand);
        println!("{}", format!("score {}", report.total()).bold());
    }
    Ok(())
}
