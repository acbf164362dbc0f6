use crate::core::{
    catalog::Catalog,
    models::{
        Card,
        CardId,
    },
};

/// The visible card deck: always exactly [`Deck::VISIBLE`] cards, the front
/// one interactive, the second pre-rendered beneath it. A monotonically
/// increasing cursor tracks how far into the catalog the deck has advanced;
/// the catalog wraps it modulo its size.
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
    catalog: Catalog,
}

impl Deck {
    /// How many cards are on screen at once.
    pub const VISIBLE: usize = 2;

    pub fn new(catalog: Catalog) -> Self {
        let cards =
            (0..Self::VISIBLE).map(|i| Card::new(catalog.cycle(i).clone())).collect::<Vec<_>>();

        // The cursor points at the catalog index of the last dealt card.
        Self { cards, cursor: Self::VISIBLE - 1, catalog }
    }

    /// Removes the front card and deals the next destination from the catalog
    /// to the back, under a fresh identity. The previously-second card becomes
    /// the new top card; deck length never changes.
    pub fn advance(&mut self) {
        self.cards.remove(0);
        self.cursor += 1;

        let destination = self.catalog.cycle(self.cursor).clone();
        self.cards.push(Card::new(destination));
    }

    /// True iff `id` is the identity of the card at position 0. A card not in
    /// the deck at all (mid-removal-animation) is simply not the top card.
    pub fn is_top_card(&self, id: CardId) -> bool {
        self.cards.first().map(|card| card.id) == Some(id)
    }

    pub fn top_card(&self) -> &Card {
        &self.cards[0]
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Destination;

    fn catalog(places: &[&str]) -> Catalog {
        let destinations = places
            .iter()
            .map(|place| Destination {
                place: place.to_string(),
                country: "Testland".to_string(),
                image: place.to_lowercase(),
            })
            .collect();
        Catalog::from_destinations(destinations).unwrap()
    }

    fn places(deck: &Deck) -> Vec<&str> {
        deck.cards().iter().map(|c| c.destination.place.as_str()).collect()
    }

    #[test]
    fn new_deck_shows_first_two_destinations() {
        let deck = Deck::new(catalog(&["A", "B", "C"]));

        assert_eq!(places(&deck), ["A", "B"]);
        assert_eq!(deck.cursor(), 1);
    }

    #[test]
    fn advance_replaces_front_with_next_catalog_entry() {
        let mut deck = Deck::new(catalog(&["A", "B", "C"]));

        deck.advance();
        assert_eq!(places(&deck), ["B", "C"]);
        assert_eq!(deck.cursor(), 2);

        deck.advance();
        assert_eq!(places(&deck), ["C", "A"]);
        assert_eq!(deck.cursor(), 3);
    }

    #[test]
    fn deck_length_is_invariant() {
        let mut deck = Deck::new(catalog(&["A", "B", "C"]));

        for _ in 0..10 {
            deck.advance();
            assert_eq!(deck.cards().len(), Deck::VISIBLE);
        }
    }

    #[test]
    fn top_destination_cycles_with_catalog_period() {
        let mut deck = Deck::new(catalog(&["A", "B", "C"]));

        let first_cycle: Vec<String> = (0..3)
            .map(|_| {
                let place = deck.top_card().destination.place.clone();
                deck.advance();
                place
            })
            .collect();

        let second_cycle: Vec<String> = (0..3)
            .map(|_| {
                let place = deck.top_card().destination.place.clone();
                deck.advance();
                place
            })
            .collect();

        assert_eq!(first_cycle, second_cycle);
    }

    #[test]
    fn is_top_card_matches_identity_not_value() {
        let mut deck = Deck::new(catalog(&["A"]));

        // Single-entry catalog: both cards wrap the same destination data but
        // carry distinct identities.
        let top = deck.cards()[0].id;
        let under = deck.cards()[1].id;
        assert_eq!(deck.cards()[0].destination, deck.cards()[1].destination);

        assert!(deck.is_top_card(top));
        assert!(!deck.is_top_card(under));

        deck.advance();
        assert!(!deck.is_top_card(top));
        assert!(deck.is_top_card(under));
    }

    #[test]
    fn dismissal_flow_advances_exactly_once() {
        use std::time::Instant;

        use crate::core::drag::{
            DragGesture,
            DragOutcome,
            MIN_PRESS_DURATION,
        };
        use crate::core::models::SwipeDirection;

        let mut deck = Deck::new(catalog(&["A", "B", "C"]));
        let mut gesture = DragGesture::new();

        let t0 = Instant::now();
        gesture.press_started(t0);
        gesture.press_held(t0 + MIN_PRESS_DURATION);
        gesture.drag_by(-70.0, 0.0);

        // The release drives one advance and one sound, as the app does.
        let mut advances = 0;
        let mut sounds = 0;
        for _ in 0..2 {
            if let DragOutcome::Dismiss(direction) = gesture.release() {
                assert_eq!(direction, SwipeDirection::Left);
                deck.advance();
                advances += 1;
                sounds += 1;
            }
        }

        assert_eq!(advances, 1);
        assert_eq!(sounds, 1);
        assert_eq!(places(&deck), ["B", "C"]);
    }

    #[test]
    fn is_top_card_is_idempotent_and_safe_for_unknown_ids() {
        let deck = Deck::new(catalog(&["A", "B"]));

        let top = deck.top_card().id;
        assert_eq!(deck.is_top_card(top), deck.is_top_card(top));

        // A card already dismissed (or never dealt) is just not the top card.
        assert!(!deck.is_top_card(CardId::new()));
    }
}
