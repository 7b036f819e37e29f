use super::seat::Seat;
use crate::error::{Result, SpartsError};
use serde::Serialize;

/// Tricks in a hand, and the upper bound for every per-player count
pub const TRICKS_PER_HAND: u8 = 13;

/// One seat's raw input for one hand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerEntry {
    pub name: String,
    /// Contracted tricks; 0 is a nil bid
    pub bid: u8,
    pub took: u8,
    pub hearts_taken: u8,
    /// Captured the single high-value penalty card this hand
    pub took_penalty_card: bool,
}

impl PlayerEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_bid(mut self, bid: u8) -> Self {
        self.bid = bid;
        self
    }

    pub fn with_took(mut self, took: u8) -> Self {
        self.took = took;
        self
    }

    pub fn with_hearts(mut self, hearts_taken: u8) -> Self {
        self.hearts_taken = hearts_taken;
        self
    }

    pub fn with_penalty_card(mut self, took_penalty_card: bool) -> Self {
        self.took_penalty_card = took_penalty_card;
        self
    }

    pub fn is_nil(&self) -> bool {
        self.bid == 0
    }

    /// A fresh entry for the next hand: same name, zeroed counts
    pub fn carried(&self) -> Self {
        Self::new(self.name.clone())
    }

    pub fn validate(&self, seat: Seat) -> Result<()> {
        let fields = [
            ("bid", self.bid),
            ("took", self.took),
            ("hearts taken", self.hearts_taken),
        ];
        for (field, value) in fields {
            if value > TRICKS_PER_HAND {
                return Err(SpartsError::InvalidHandInput(format!(
                    "{} {} is {}, expected 0..={}",
                    seat, field, value, TRICKS_PER_HAND
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carried_keeps_name_only() {
        let entry = PlayerEntry::new("Lecia")
            .with_bid(4)
            .with_took(5)
            .with_hearts(2)
            .with_penalty_card(true);
        let next = entry.carried();
        assert_eq!(next.name, "Lecia");
        assert_eq!(next.bid, 0);
        assert_eq!(next.took, 0);
        assert_eq!(next.hearts_taken, 0);
        assert!(!next.took_penalty_card);
    }

    #[test]
    fn test_nil_is_zero_bid() {
        assert!(PlayerEntry::new("Jesse").is_nil());
        assert!(!PlayerEntry::new("Jesse").with_bid(1).is_nil());
    }

    #[test]
    fn test_validate_bounds() {
        let ok = PlayerEntry::new("Elena").with_bid(13).with_took(13).with_hearts(13);
        assert!(ok.validate(Seat::Third).is_ok());

        let err = PlayerEntry::new("Elena").with_took(14).validate(Seat::Third);
        match err {
            Err(SpartsError::InvalidHandInput(msg)) => {
                assert!(msg.contains("seat 2"), "unexpected message: {}", msg);
                assert!(msg.contains("took"), "unexpected message: {}", msg);
            }
            other => panic!("expected InvalidHandInput, got {:?}", other),
        }

        assert!(PlayerEntry::new("Arthur").with_hearts(20).validate(Seat::Second).is_err());
        assert!(PlayerEntry::new("Arthur").with_bid(14).validate(Seat::Second).is_err());
    }
}
