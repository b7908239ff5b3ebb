use super::histogram::Histogram;
use crate::N_CARDS;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::HandSets;
use crate::scoring::Evaluator;
use rayon::prelude::*;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Scores every (draw, hand) pair a fresh deck can produce.
///
/// Each of the 52 cards takes a turn as the draw while every 4-card subset
/// of the other 51 is scored against it, so each 5-card set is counted five
/// times, once per choice of draw. The 52 draws are independent shards with
/// their own [`Histogram`]; shards run on the rayon pool unless `serial` is
/// set, and are folded together once all of them finish. A panic inside any
/// shard propagates and aborts the whole pass.
#[derive(Debug, Clone, Copy)]
pub struct Enumerator {
    verbose: bool,
    serial: bool,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self {
            verbose: true,
            serial: false,
        }
    }
}

impl Enumerator {
    /// log progress per draw card and elapsed time
    pub fn verbose(self, verbose: bool) -> Self {
        Self { verbose, ..self }
    }
    /// score shards one after another on the calling thread
    pub fn serial(self, serial: bool) -> Self {
        Self { serial, ..self }
    }

    /// every hand against every draw
    pub fn enumerate(&self) -> Histogram {
        let begin = Instant::now();
        let ref done = AtomicUsize::new(0);
        let draws = (0..N_CARDS as u8).map(Card::from);
        let histogram = if self.serial {
            draws
                .map(|draw| self.explore(draw, done))
                .fold(Histogram::default(), Histogram::merge)
        } else {
            draws
                .collect::<Vec<Card>>()
                .into_par_iter()
                .map(|draw| self.explore(draw, done))
                .reduce(Histogram::default, Histogram::merge)
        };
        if self.verbose {
            log::info!(
                "took {:.2?} to score {} hands",
                begin.elapsed(),
                histogram.total()
            );
        }
        histogram
    }

    /// every hand of the other 51 cards against one draw
    pub fn shard(draw: Card) -> Histogram {
        let mut histogram = Histogram::default();
        for cards in HandSets::from(draw) {
            let hand = Hand::from((cards, draw));
            histogram.increment(Evaluator::from(hand).score());
        }
        histogram
    }

    fn explore(&self, draw: Card, done: &AtomicUsize) -> Histogram {
        let histogram = Self::shard(draw);
        let n = done.fetch_add(1, Ordering::Relaxed) + 1;
        if self.verbose {
            log::info!("done with {} {:>2}/{}", draw, n, N_CARDS);
        } else {
            log::debug!("done with {} {:>2}/{}", draw, n, N_CARDS);
        }
        histogram
    }
}
