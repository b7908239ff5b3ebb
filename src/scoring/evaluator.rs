use crate::Points;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::N_RANKS;
use crate::N_SCORED;

/// Sum that scores a fifteen.
const FIFTEEN: Points = 15;
/// Shortest sequence of consecutive ranks that scores as a run.
const MIN_RUN: usize = 3;

/// Computes each scoring category of a Hand.
///
/// Every method is a pure function of the five cards. Only nobs and flush
/// care which card is the draw; fifteens, pairs and runs treat the five
/// cards as an unordered set.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    /// One point for holding the jack of the draw's suit.
    pub fn nobs(&self) -> Points {
        let suit = self.0.draw().suit();
        self.0
            .cards()
            .iter()
            .any(|c| c.rank() == Rank::Jack && c.suit() == suit)
            .into()
    }

    /// Four points when the held cards share a suit, five if the draw does too.
    /// A suited draw alone never makes a flush.
    pub fn flush(&self) -> Points {
        let [first, rest @ ..] = self.0.cards();
        let suit = first.suit();
        if rest.iter().any(|c| c.suit() != suit) {
            0
        } else if self.0.draw().suit() == suit {
            5
        } else {
            4
        }
    }

    /// Two points for every subset of two or more cards counting to 15.
    ///
    /// Each u8 in 0..32 selects a subset of the five cards; the 26 masks
    /// with at least two bits set are the candidates.
    pub fn fifteen(&self) -> Points {
        let values = self.0.all().map(|c| c.value());
        let fifteens = (0u8..1 << N_SCORED)
            .filter(|mask| mask.count_ones() >= 2)
            .map(|mask| {
                values
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, v)| v)
                    .sum::<Points>()
            })
            .filter(|&sum| sum == FIFTEEN)
            .count();
        2 * fifteens as Points
    }

    /// Two points for every pair of equal rank among the ten pairs of cards.
    pub fn pair(&self) -> Points {
        let cards = self.0.all();
        let pairs = (0..N_SCORED)
            .flat_map(|i| (i + 1..N_SCORED).map(move |j| (i, j)))
            .filter(|&(i, j)| cards[i].rank() == cards[j].rank())
            .count();
        2 * pairs as Points
    }

    /// Run length times the multiplicity of every rank inside the run.
    ///
    /// Ranks are scanned A..K, collapsing duplicates. The first stretch of
    /// three or more consecutive ranks is accepted without looking further:
    /// a run of at least three distinct ranks leaves at most two distinct
    /// ranks among five cards, too few for a second run. Kings and aces are
    /// not consecutive.
    pub fn run(&self) -> Points {
        let counts = self.counts();
        let mut start = 0;
        let mut len = 0;
        for (index, &n) in counts.iter().enumerate() {
            if n > 0 {
                if len == 0 {
                    start = index;
                }
                len += 1;
            } else if len >= MIN_RUN {
                break;
            } else {
                len = 0;
            }
        }
        if len < MIN_RUN {
            return 0;
        }
        let distinct = counts.iter().filter(|&&n| n > 0).count();
        debug_assert!(distinct - len < MIN_RUN, "second run beside {}", self.0);
        let ways = counts[start..start + len].iter().product::<Points>();
        len as Points * ways
    }

    /// cards held per rank index
    fn counts(&self) -> [Points; N_RANKS] {
        let mut counts = [0; N_RANKS];
        for card in self.0.all() {
            counts[card.index()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator(s: &str) -> Evaluator {
        Evaluator::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn nobs_matches_draw_suit() {
        assert_eq!(evaluator("Jh 2c 3d 4s 9h").nobs(), 1);
        assert_eq!(evaluator("Jc 2c 3d 4s 9h").nobs(), 0);
    }

    #[test]
    fn nobs_ignores_jack_drawn() {
        assert_eq!(evaluator("2h 3h 4h 5c Jh").nobs(), 0);
    }

    #[test]
    fn nobs_with_two_jacks() {
        assert_eq!(evaluator("Jc Jh 3d 4s 9h").nobs(), 1);
        assert_eq!(evaluator("Jc Jd 3d 4s 9h").nobs(), 0);
    }

    #[test]
    fn flush_of_four() {
        assert_eq!(evaluator("2h 4h 6h 8h Tc").flush(), 4);
    }

    #[test]
    fn flush_of_five() {
        assert_eq!(evaluator("2h 4h 6h 8h Th").flush(), 5);
    }

    #[test]
    fn flush_needs_all_held_cards() {
        assert_eq!(evaluator("2h 4h 6h 8d Th").flush(), 0);
        assert_eq!(evaluator("2d 4h 6h 8h Th").flush(), 0);
    }

    #[test]
    fn fifteen_counts_every_subset() {
        assert_eq!(evaluator("5s 5c 5d Jh 5h").fifteen(), 16);
        assert_eq!(evaluator("2c 5c 8c Kc 3d").fifteen(), 6);
        assert_eq!(evaluator("3s 3c 4d 4h 5c").fifteen(), 4);
    }

    #[test]
    fn fifteen_with_all_five_cards() {
        assert_eq!(evaluator("Ac 2d 3h 4s 5c").fifteen(), 2);
    }

    #[test]
    fn no_fifteens_from_even_values() {
        assert_eq!(evaluator("2s 4c 6d 8h Kc").fifteen(), 0);
    }

    #[test]
    fn pairs() {
        assert_eq!(evaluator("2s 4c 6d 8h Kc").pair(), 0);
        assert_eq!(evaluator("2s 2c 6d 8h Kc").pair(), 2);
        assert_eq!(evaluator("2s 2c 6d 6h Kc").pair(), 4);
        assert_eq!(evaluator("2s 2c 2d 6h Kc").pair(), 6);
        assert_eq!(evaluator("2s 2c 2d 6h 6c").pair(), 8);
        assert_eq!(evaluator("5s 5c 5d Jh 5h").pair(), 12);
    }

    #[test]
    fn run_of_three_four_five() {
        assert_eq!(evaluator("3s 4c 5d 9h Kc").run(), 3);
        assert_eq!(evaluator("3s 4c 5d 6h Kc").run(), 4);
        assert_eq!(evaluator("3s 4c 5d 6h 7c").run(), 5);
    }

    #[test]
    fn run_multiplied_by_duplicates() {
        assert_eq!(evaluator("5s 5c 6d 7h 8c").run(), 8);
        assert_eq!(evaluator("3s 3c 4d 4h 5c").run(), 12);
        assert_eq!(evaluator("3s 3c 3d 4h 5c").run(), 9);
        assert_eq!(evaluator("3s 3c 4d 5h 6c").run(), 8);
    }

    #[test]
    fn run_at_top_of_ranks() {
        assert_eq!(evaluator("As 3c Jd Qh Ks").run(), 3);
        assert_eq!(evaluator("2s 4c Jd Qh Ks").run(), 3);
    }

    #[test]
    fn run_at_bottom_of_ranks() {
        assert_eq!(evaluator("As 2c 3d 9h Js").run(), 3);
    }

    #[test]
    fn run_does_not_wrap() {
        assert_eq!(evaluator("Qs Kc Ad 2h 7s").run(), 0);
    }

    #[test]
    fn two_card_sequences_are_not_runs() {
        assert_eq!(evaluator("2s 3c 5d 6h 9s").run(), 0);
    }
}
