use super::player::PlayerEntry;
use super::scoring::HandResult;
use super::seat::{Seat, Team};
use crate::error::{Result, SpartsError};
use serde::Serialize;

/// One dealt and played round: four seats plus the moon flag.
///
/// `moon` holds the team that shot the moon, if any, so both teams can never
/// be flagged at once. `result` is derived by the ledger on every recompute
/// and cannot be edited from outside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hand {
    pub players: [PlayerEntry; 4],
    pub moon: Option<Team>,
    result: HandResult,
}

impl Hand {
    pub fn from_players(players: [PlayerEntry; 4]) -> Self {
        Self {
            players,
            moon: None,
            result: HandResult::default(),
        }
    }

    /// A hand with default entries for the given seat names
    pub fn with_names<S: Into<String>>(names: [S; 4]) -> Self {
        Self::from_players(names.map(PlayerEntry::new))
    }

    /// Build from a dynamically sized list, rejecting anything but four seats
    pub fn from_entries(entries: Vec<PlayerEntry>) -> Result<Self> {
        let count = entries.len();
        let players: [PlayerEntry; 4] = entries.try_into().map_err(|_| {
            SpartsError::InvalidHandInput(format!("expected 4 seats, got {}", count))
        })?;
        Ok(Self::from_players(players))
    }

    pub fn with_moon(mut self, team: Team) -> Self {
        self.moon = Some(team);
        self
    }

    /// Apply a pair of moon toggles as the UI holds them
    pub fn with_moon_flags(mut self, team_a: bool, team_b: bool) -> Result<Self> {
        self.moon = moon_from_flags(team_a, team_b)?;
        Ok(self)
    }

    pub fn player(&self, seat: Seat) -> &PlayerEntry {
        &self.players[seat.index()]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut PlayerEntry {
        &mut self.players[seat.index()]
    }

    pub fn team_players(&self, team: Team) -> [&PlayerEntry; 2] {
        team.seats().map(|seat| self.player(seat))
    }

    pub fn shot_moon(&self, team: Team) -> bool {
        self.moon == Some(team)
    }

    pub fn team_a_shot_moon(&self) -> bool {
        self.shot_moon(Team::A)
    }

    pub fn team_b_shot_moon(&self) -> bool {
        self.shot_moon(Team::B)
    }

    /// Toggle one team's moon flag. Turning a team on clears the other team;
    /// turning a team off leaves the other team alone.
    pub fn set_shot_moon(&mut self, team: Team, shot: bool) {
        if shot {
            self.moon = Some(team);
        } else if self.moon == Some(team) {
            self.moon = None;
        }
    }

    /// The next hand: seat names carried over, everything else reset
    pub fn carried(&self) -> Self {
        Self::from_players(self.players.each_ref().map(PlayerEntry::carried))
    }

    pub fn names(&self) -> [&str; 4] {
        self.players.each_ref().map(|p| p.name.as_str())
    }

    pub fn validate(&self) -> Result<()> {
        for seat in Seat::all() {
            self.player(seat).validate(seat)?;
        }
        Ok(())
    }

    /// Result of the most recent recompute
    pub fn result(&self) -> &HandResult {
        &self.result
    }

    pub(crate) fn set_result(&mut self, result: HandResult) {
        self.result = result;
    }
}

pub(crate) fn moon_from_flags(team_a: bool, team_b: bool) -> Result<Option<Team>> {
    match (team_a, team_b) {
        (true, true) => Err(SpartsError::InvariantViolation(
            "both teams cannot shoot the moon in the same hand".to_string(),
        )),
        (true, false) => Ok(Some(Team::A)),
        (false, true) => Ok(Some(Team::B)),
        (false, false) => Ok(None),
    }
}
