pub mod catalog;
pub mod deck;
pub mod drag;
pub mod errors;
pub mod models;

pub use catalog::Catalog;
pub use deck::Deck;
pub use drag::{
    DragGesture,
    DragOutcome,
    DragState,
};
pub use errors::HoneymoonError;
pub use models::{
    Card,
    CardId,
    Destination,
    SwipeDirection,
};
