use serde::Serialize;
use std::fmt;

/// One of the two fixed partnerships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn other(&self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    /// Seats belonging to this team, in seating order
    pub fn seats(&self) -> [Seat; 2] {
        match self {
            Team::A => [Seat::First, Seat::Second],
            Team::B => [Seat::Third, Seat::Fourth],
        }
    }

    pub fn all() -> [Team; 2] {
        [Team::A, Team::B]
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => write!(f, "Team A"),
            Team::B => write!(f, "Team B"),
        }
    }
}

/// A fixed seat at the table. Seats 0 and 1 play for Team A, seats 2 and 3
/// for Team B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Seat {
    First,
    Second,
    Third,
    Fourth,
}

impl Seat {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::First),
            1 => Some(Seat::Second),
            2 => Some(Seat::Third),
            3 => Some(Seat::Fourth),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
            Seat::Third => 2,
            Seat::Fourth => 3,
        }
    }

    pub fn team(&self) -> Team {
        match self {
            Seat::First | Seat::Second => Team::A,
            Seat::Third | Seat::Fourth => Team::B,
        }
    }

    pub fn partner(&self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
            Seat::Third => Seat::Fourth,
            Seat::Fourth => Seat::Third,
        }
    }

    pub fn all() -> [Seat; 4] {
        [Seat::First, Seat::Second, Seat::Third, Seat::Fourth]
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.index())
    }
}
