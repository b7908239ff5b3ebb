use super::rank::Rank;
use super::suit::Suit;
use crate::Points;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank, which is also the order a
/// fresh deck is enumerated in.
///
/// # Representations
///
/// - `u8`: Compact index `0..52` for array indexing
/// - `u64`: Single-bit representation for set membership in [`CardSet`]
///
/// # Parsing
///
/// Cards parse from two-character tokens like `"Jh"` (jack of hearts) or
/// `"TS"` (ten of spades). Rank comes first, suit second, case-insensitive.
///
/// [`CardSet`]: super::set::CardSet
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Counting value toward fifteens.
    pub fn value(&self) -> Points {
        self.rank().value()
    }
    /// Ordinal of the rank in A..K, used for runs.
    pub fn index(&self) -> usize {
        self.rank().index()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Th
/// 38
/// 0b00100110
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < crate::N_CARDS, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Th
/// xxxxxxxxxxxx 0000000000000100000000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = Rank::try_from(r.to_string().as_str())?;
                let suit = Suit::try_from(u.to_string().as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("card must be 2 characters: {:?}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
