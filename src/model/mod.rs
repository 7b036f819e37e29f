pub mod draft;
pub mod hand;
pub mod player;
pub mod scoring;
pub mod seat;

pub use draft::{Count, DraftHand, DraftPlayer};
pub use hand::Hand;
pub use player::{PlayerEntry, TRICKS_PER_HAND};
pub use scoring::{BagCarry, Contract, HandResult, HandScorer, SpadesOutcome, TeamResult};
pub use seat::{Seat, Team};
