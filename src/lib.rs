//! Cribbage hand scoring and exhaustive verification.
//!
//! A [`cards::Hand`] is four held cards plus the shared draw card. The
//! [`scoring::Evaluator`] computes the five point categories (nobs, flush,
//! fifteens, pairs, runs) and [`enumeration::Enumerator`] scores every
//! possible hand and draw from a 52-card deck, accumulating a
//! [`enumeration::Histogram`] that [`enumeration::Verifier`] checks against
//! the known distribution.
pub mod cards;
pub mod enumeration;
pub mod scoring;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Points scored by one category or by a whole hand.
pub type Points = u8;
/// Number of hands landing in a histogram bucket.
pub type Count = u64;

// ============================================================================
// DECK AND HAND SHAPE
// ============================================================================
/// Cards in a fresh deck.
pub const N_CARDS: usize = 52;
/// Ranks per suit.
pub const N_RANKS: usize = 13;
/// Suits per deck.
pub const N_SUITS: usize = 4;
/// Cards held in a hand, excluding the draw.
pub const N_HAND: usize = 4;
/// Cards scored together: the hand plus the draw.
pub const N_SCORED: usize = N_HAND + 1;

// ============================================================================
// ENUMERATION
// ============================================================================
/// Possible hand totals, 0 through 29.
pub const N_SCORES: usize = 30;
/// Highest attainable total (5-5-5-J with the matching 5 drawn).
pub const MAX_SCORE: Points = 29;
/// 4-card hands per draw card: C(51, 4).
pub const N_HANDS_PER_DRAW: usize = 249_900;
/// Every (draw, hand) pair: 52 x C(51, 4). Each 5-card set appears five times.
pub const N_ENUMERATED: usize = N_CARDS * N_HANDS_PER_DRAW;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
