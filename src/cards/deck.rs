use super::card::Card;
use super::hand::Hand;
use super::set::CardSet;

/// A mutable deck of cards supporting uniform random draws.
///
/// Wraps a [`CardSet`] of the cards remaining. Used to deal random hands;
/// the exhaustive enumeration walks a fresh deck in order instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(CardSet);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(CardSet::full())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self) -> Card {
        assert!(self.0.size() > 0, "draw from empty deck");
        let i = rand::random_range(0..self.0.size());
        let card = self.0.pick(i).expect("index below deck size");
        self.0.remove(card);
        card
    }
    /// Deals four hand cards and then the draw card.
    pub fn hand(&mut self) -> Hand {
        let cards = [self.draw(), self.draw(), self.draw(), self.draw()];
        let draw = self.draw();
        Hand::from((cards, draw))
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0.size() {
            0 => None,
            _ => Some(self.draw()),
        }
    }
}
