//! Score-sheet entries before they are complete.
//!
//! A stepper cell starts out blank, which is not the same as a nil bid. The
//! types here keep "not entered yet" apart from zero and resolve to concrete
//! [`PlayerEntry`] / [`Hand`] values before anything is scored.

use super::hand::Hand;
use super::player::{PlayerEntry, TRICKS_PER_HAND};
use super::seat::Team;

/// A count cell: blank, or a value in `0..=13`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Count {
    #[default]
    Unset,
    Entered(u8),
}

impl Count {
    /// Move one step up or down. From blank, the first step lands on the
    /// bound in that direction; stepping past either bound goes blank again.
    pub fn step(self, up: bool) -> Count {
        match (self, up) {
            (Count::Unset, true) => Count::Entered(0),
            (Count::Unset, false) => Count::Entered(TRICKS_PER_HAND),
            (Count::Entered(v), true) if v >= TRICKS_PER_HAND => Count::Unset,
            (Count::Entered(v), true) => Count::Entered(v + 1),
            (Count::Entered(0), false) => Count::Unset,
            (Count::Entered(v), false) => Count::Entered(v - 1),
        }
    }

    /// Apply a signed number of steps, as from a drag gesture
    pub fn step_by(self, steps: i32) -> Count {
        let up = steps > 0;
        (0..steps.unsigned_abs()).fold(self, |count, _| count.step(up))
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Count::Entered(_))
    }

    pub fn value(&self) -> Option<u8> {
        match self {
            Count::Unset => None,
            Count::Entered(v) => Some(*v),
        }
    }

    /// Concrete value for scoring; blank counts as zero
    pub fn resolve(&self) -> u8 {
        self.value().unwrap_or(0)
    }
}

impl From<u8> for Count {
    fn from(v: u8) -> Self {
        Count::Entered(v)
    }
}

/// One seat as it sits on the sheet while being filled in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPlayer {
    pub name: String,
    pub bid: Count,
    pub took: Count,
    pub hearts_taken: Count,
    pub took_penalty_card: bool,
}

impl DraftPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Bid and tricks are required; a blank hearts cell reads as none taken
    pub fn is_complete(&self) -> bool {
        self.bid.is_set() && self.took.is_set()
    }

    pub fn resolve(&self) -> PlayerEntry {
        PlayerEntry {
            name: self.name.clone(),
            bid: self.bid.resolve(),
            took: self.took.resolve(),
            hearts_taken: self.hearts_taken.resolve(),
            took_penalty_card: self.took_penalty_card,
        }
    }
}

impl From<&PlayerEntry> for DraftPlayer {
    fn from(entry: &PlayerEntry) -> Self {
        Self {
            name: entry.name.clone(),
            bid: entry.bid.into(),
            took: entry.took.into(),
            hearts_taken: entry.hearts_taken.into(),
            took_penalty_card: entry.took_penalty_card,
        }
    }
}

/// A hand as it sits on the sheet while being filled in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftHand {
    pub players: [DraftPlayer; 4],
    pub moon: Option<Team>,
}

impl DraftHand {
    pub fn with_names<S: Into<String>>(names: [S; 4]) -> Self {
        Self {
            players: names.map(DraftPlayer::new),
            moon: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.players.iter().all(DraftPlayer::is_complete)
    }

    pub fn resolve(&self) -> Hand {
        let mut hand = Hand::from_players(self.players.each_ref().map(DraftPlayer::resolve));
        hand.moon = self.moon;
        hand
    }
}

impl From<&Hand> for DraftHand {
    fn from(hand: &Hand) -> Self {
        Self {
            players: hand.players.each_ref().map(DraftPlayer::from),
            moon: hand.moon,
        }
    }
}
