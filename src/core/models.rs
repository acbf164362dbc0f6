use uuid::Uuid;

/// A place the deck can suggest. Created at catalog load, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Destination {
    pub place: String,   // Display name, e.g. "Santorini"
    pub country: String, // Country line shown under the place
    pub image: String,   // File stem resolved under assets/images/
}

/// Identity of a single on-screen card. Two cards can wrap the same
/// destination once the catalog has cycled, so identity is generated per
/// card, never derived from the destination data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        CardId(Uuid::new_v4())
    }
}

/// One visible card: a fresh identity bound to a destination drawn from the
/// catalog. Created when the card enters the deck, dropped when dismissed.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: CardId,
    pub destination: Destination,
}

impl Card {
    pub fn new(destination: Destination) -> Self {
        Self { id: CardId::new(), destination }
    }
}

/// Which side a dismissed card leaves toward. Updated while a drag sits past
/// the threshold and consumed by the removal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl Default for SwipeDirection {
    fn default() -> Self {
        // The first removal trails off to the right if no drag decided otherwise.
        SwipeDirection::Right
    }
}
