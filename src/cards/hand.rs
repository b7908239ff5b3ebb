use super::card::Card;
use super::set::CardSet;
use crate::N_HAND;
use crate::N_SCORED;

/// Four held cards plus the shared draw card.
///
/// The four-card count is carried by the type, so a Hand is well formed by
/// construction and scoring never has to check it. Conversions from
/// unsized sources assert the count and panic on violation; parsing returns
/// an error instead. Hands are immutable: built, scored, dropped.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; N_HAND],
    draw: Card,
}

impl Hand {
    /// The four held cards, in the order given.
    pub fn cards(&self) -> &[Card; N_HAND] {
        &self.cards
    }
    /// The shared draw card.
    pub fn draw(&self) -> Card {
        self.draw
    }
    /// Held cards followed by the draw.
    pub fn all(&self) -> [Card; N_SCORED] {
        let [a, b, c, d] = self.cards;
        [a, b, c, d, self.draw]
    }
}

impl From<([Card; N_HAND], Card)> for Hand {
    fn from((cards, draw): ([Card; N_HAND], Card)) -> Self {
        Self { cards, draw }
    }
}

/// panics unless exactly four hand cards are given
impl From<(Vec<Card>, Card)> for Hand {
    fn from((cards, draw): (Vec<Card>, Card)) -> Self {
        let n = cards.len();
        match <[Card; N_HAND]>::try_from(cards) {
            Ok(cards) => Self::from((cards, draw)),
            Err(_) => panic!("hand must hold {} cards, was {}", N_HAND, n),
        }
    }
}

/// panics unless the set holds exactly four cards.
/// cards come out sorted in deck order.
impl From<(CardSet, Card)> for Hand {
    fn from((set, draw): (CardSet, Card)) -> Self {
        assert_eq!(set.size(), N_HAND, "hand must hold {} cards", N_HAND);
        let mut set = set;
        let cards: [Card; N_HAND] =
            std::array::from_fn(|_| set.next().expect("four cards in set"));
        Self::from((cards, draw))
    }
}

impl From<Hand> for CardSet {
    fn from(hand: Hand) -> Self {
        hand.all().into_iter().collect()
    }
}

/// str isomorphism
/// five whitespace-separated cards, the last one is the draw
/// "5s 5c 5d Jh 5h"
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        if cards.len() != N_SCORED {
            return Err(format!("hand needs {} cards, got {}", N_SCORED, cards.len()));
        }
        if cards.iter().copied().collect::<CardSet>().size() != N_SCORED {
            return Err(format!("duplicate card in hand: {}", s.trim()));
        }
        let draw = cards[N_HAND];
        let cards = [cards[0], cards[1], cards[2], cards[3]];
        Ok(Self::from((cards, draw)))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards.map(|c| c.to_string());
        write!(f, "Cards: {}\nDraw: {}", cards.join(" "), self.draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn parse_keeps_order_and_draw_last() {
        let hand = Hand::try_from("Jh 5s 5c 5d 5h").unwrap();
        assert_eq!(hand.cards(), &[card("Jh"), card("5s"), card("5c"), card("5d")]);
        assert_eq!(hand.draw(), card("5h"));
        assert_eq!(hand.all()[4], card("5h"));
    }

    #[test]
    fn parse_rejects_wrong_count() {
        assert!(Hand::try_from("5s 5c 5d 5h").is_err());
        assert!(Hand::try_from("5s 5c 5d Jh 5h 6h").is_err());
        assert!(Hand::try_from("").is_err());
    }

    #[test]
    fn parse_rejects_bad_symbols() {
        assert!(Hand::try_from("5s 5c 5d Jh 5x").is_err());
        assert!(Hand::try_from("5s 5c 1d Jh 5h").is_err());
    }

    #[test]
    fn parse_rejects_duplicates() {
        assert!(Hand::try_from("5s 5s 5d Jh 5h").is_err());
        assert!(Hand::try_from("5s 5c 5d Jh 5s").is_err());
    }

    #[test]
    #[should_panic(expected = "hand must hold 4 cards, was 3")]
    fn three_cards_is_fatal() {
        let _ = Hand::from((vec![card("2c"), card("3c"), card("4c")], card("5c")));
    }

    #[test]
    #[should_panic(expected = "hand must hold 4 cards, was 5")]
    fn five_cards_is_fatal() {
        let cards = vec![card("2c"), card("3c"), card("4c"), card("6c"), card("7c")];
        let _ = Hand::from((cards, card("5c")));
    }

    #[test]
    fn from_card_set_sorts_in_deck_order() {
        let set = ["Kd", "Ac", "7s", "7c"]
            .into_iter()
            .map(card)
            .collect::<CardSet>();
        let hand = Hand::from((set, card("2h")));
        assert_eq!(hand.cards(), &[card("Ac"), card("7c"), card("7s"), card("Kd")]);
    }

    #[test]
    fn display() {
        let hand = Hand::try_from("AD 3C TS 6S 8C").unwrap();
        assert_eq!(hand.to_string(), "Cards: Ad 3c Ts 6s\nDraw: 8c");
    }
}
