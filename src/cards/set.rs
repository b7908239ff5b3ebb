use super::card::Card;

/// An unordered set of Cards stored as a single word.
///
/// Each of the 52 least significant bits marks one card in deck order
/// (`rank * 4 + suit`), so union, difference and membership are single
/// bitwise operations and no heap allocation is ever needed.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardSet(u64);

impl CardSet {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn full() -> Self {
        Self(Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// the n-th lowest card still in the set
    pub fn pick(&self, n: usize) -> Option<Card> {
        let mut bits = self.0;
        for _ in 0..n {
            bits &= bits.wrapping_sub(1);
        }
        match bits {
            0 => None,
            _ => Some(Card::from(bits.trailing_zeros() as u8)),
        }
    }

    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a set from low to high
/// by removing the lowest card until the set is empty
impl Iterator for CardSet {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            bits => {
                let card = Card::from(bits.trailing_zeros() as u8);
                self.remove(card);
                Some(card)
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// u64 isomorphism
/// we OR the cards to get the bitstring
/// [Ac, 2c, Th]
/// xxxxxxxxxxxx 0000000000000100000000000000000000000000000000010001
impl From<u64> for CardSet {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<CardSet> for u64 {
    fn from(s: CardSet) -> Self {
        s.0
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

impl std::fmt::Display for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = (*self).map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn bijective_u64() {
        let set = CardSet::from(0xDEADBEEF_u64);
        assert_eq!(set, CardSet::from(u64::from(set)));
    }

    #[test]
    fn card_iteration_is_low_to_high() {
        let mut iter = ["Jc", "Ts", "2c", "Js"]
            .into_iter()
            .map(card)
            .collect::<CardSet>();
        assert_eq!(iter.next(), Some(card("2c")));
        assert_eq!(iter.next(), Some(card("Ts")));
        assert_eq!(iter.next(), Some(card("Jc")));
        assert_eq!(iter.next(), Some(card("Js")));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn full_deck() {
        assert_eq!(CardSet::full().size(), 52);
        assert_eq!(CardSet::full().pick(51), Some(card("Ks")));
    }

    #[test]
    fn insert_remove_contains() {
        let mut set = CardSet::empty();
        set.insert(card("5h"));
        assert!(set.contains(&card("5h")));
        assert!(!set.contains(&card("5d")));
        set.remove(card("5h"));
        assert_eq!(set, CardSet::empty());
    }

    #[test]
    fn pick_nth_lowest() {
        let set = ["Kd", "Ac", "7s"]
            .into_iter()
            .map(card)
            .collect::<CardSet>();
        assert_eq!(set.pick(0), Some(card("Ac")));
        assert_eq!(set.pick(1), Some(card("7s")));
        assert_eq!(set.pick(2), Some(card("Kd")));
        assert_eq!(set.pick(3), None);
    }
}
