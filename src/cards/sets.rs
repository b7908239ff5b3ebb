use super::card::Card;
use super::set::CardSet;
use crate::N_CARDS;
use crate::N_HAND;

/// Every 4-card hand that can be held against one draw card.
///
/// Combinations are walked over the 51 positions left once the draw is taken
/// out of the deck, then each one is spread back into deck positions by
/// opening a gap at the draw's bit. The draw therefore never appears and no
/// combination is ever generated only to be thrown away.
///
/// Order is ascending as integers in both position spaces.
pub struct HandSets {
    draw: Card,
    next: u64,
}

impl HandSets {
    /// positions left once the draw is removed
    const SLOTS: usize = N_CARDS - 1;

    /// next larger word with the same number of ones
    fn successor(bits: u64) -> u64 {
        let lowest = bits & bits.wrapping_neg();
        let carried = bits + lowest;
        let refill = ((bits ^ carried) >> 2) / lowest;
        carried | refill
    }

    /// a hand over 51 slots mapped onto the 52-card deck
    fn spread(&self, bits: u64) -> CardSet {
        let below = u64::from(self.draw) - 1;
        CardSet::from((bits & below) | ((bits & !below) << 1))
    }

    fn exhausted(&self) -> bool {
        self.next >> Self::SLOTS != 0
    }
}

impl Iterator for HandSets {
    type Item = CardSet;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = self.spread(self.next);
            self.next = Self::successor(self.next);
            Some(hand)
        }
    }
}

impl From<Card> for HandSets {
    fn from(draw: Card) -> Self {
        Self {
            draw,
            next: (1 << N_HAND) - 1,
        }
    }
}
