//! The ordered list of hands in a game and the running totals derived from it.
//!
//! Totals are never patched in place: every mutation re-folds the scorer over
//! the whole list from an empty state.

use crate::error::{Result, SpartsError};
use crate::model::{BagCarry, DraftHand, Hand, HandResult, HandScorer, Team, TeamResult};
use crate::rules::ScoringRules;
use serde::Serialize;

const DEFAULT_NAMES: [&str; 4] = ["P1", "P2", "P3", "P4"];

/// Cumulative score state for one team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TeamTotals {
    pub spades_points: i32,
    pub hearts_points: i32,
    /// Current bag remainder after rollovers
    pub all_bags: u32,
    /// Spades or hearts total is at or past the game ceiling
    pub reached_ceiling: bool,
}

impl TeamTotals {
    pub fn game_score(&self) -> i32 {
        self.spades_points - self.hearts_points
    }

    fn absorb(&mut self, result: &TeamResult, bags: u32, rules: &ScoringRules) -> Result<()> {
        let overflow = || SpartsError::InvalidHandInput("running total out of range".to_string());
        self.spades_points = self
            .spades_points
            .checked_add(result.spades_points)
            .ok_or_else(overflow)?;
        self.hearts_points = self
            .hearts_points
            .checked_add(result.hearts_points)
            .ok_or_else(overflow)?;
        self.all_bags = bags;
        self.reached_ceiling =
            rules.reaches_ceiling(self.spades_points) || rules.reaches_ceiling(self.hearts_points);
        Ok(())
    }
}

/// Game-level totals folded over every hand so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunningTotals {
    pub team_a: TeamTotals,
    pub team_b: TeamTotals,
    pub ends_game: bool,
}

impl RunningTotals {
    pub fn team(&self, team: Team) -> &TeamTotals {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    pub fn game_score(&self, team: Team) -> i32 {
        self.team(team).game_score()
    }

    /// Teams whose totals reached the ceiling, in seating order
    pub fn ending_teams(&self) -> Vec<Team> {
        Team::all()
            .into_iter()
            .filter(|team| self.team(*team).reached_ceiling)
            .collect()
    }

    fn carry(&self) -> BagCarry {
        BagCarry::new(self.team_a.all_bags, self.team_b.all_bags)
    }

    fn absorb(&mut self, result: &HandResult, carry: BagCarry, rules: &ScoringRules) -> Result<()> {
        self.team_a.absorb(&result.team_a, carry.team_a, rules)?;
        self.team_b.absorb(&result.team_b, carry.team_b, rules)?;
        self.ends_game = self.team_a.reached_ceiling || self.team_b.reached_ceiling;
        Ok(())
    }
}

/// Fold the scorer over `hands` from zeroed totals.
///
/// Returns each hand's result paired with the running totals after it. Fails
/// on the first hand that does not validate.
pub fn fold_hands(scorer: &HandScorer, hands: &[Hand]) -> Result<Vec<(HandResult, RunningTotals)>> {
    let mut running = RunningTotals::default();
    let mut folded = Vec::with_capacity(hands.len());

    for (idx, hand) in hands.iter().enumerate() {
        let (result, carry) = scorer
            .score(hand, running.carry())
            .and_then(|(result, carry)| {
                running.absorb(&result, carry, scorer.rules())?;
                Ok((result, carry))
            })
            .map_err(|e| {
                log::warn!("Hand {}: {}", idx + 1, e);
                e
            })?;
        log::trace!(
            "Hand {}: net {}/{}, bags {}/{}",
            idx + 1,
            result.net_a(),
            result.net_b(),
            carry.team_a,
            carry.team_b
        );
        folded.push((result, running));
    }

    Ok(folded)
}

/// Owns the hands of one game and keeps their results and totals current
#[derive(Debug, Clone)]
pub struct GameLedger {
    hands: Vec<Hand>,
    scorer: HandScorer,
    snapshots: Vec<RunningTotals>,
    totals: RunningTotals,
}

impl GameLedger {
    /// A ledger with reference rules and one empty hand
    pub fn new<S: Into<String>>(names: [S; 4]) -> Result<Self> {
        Self::with_rules(names, ScoringRules::default())
    }

    /// A ledger with seat names P1..P4
    pub fn with_default_names() -> Result<Self> {
        Self::new(DEFAULT_NAMES)
    }

    pub fn with_rules<S: Into<String>>(names: [S; 4], rules: ScoringRules) -> Result<Self> {
        let mut ledger = Self {
            hands: vec![Hand::with_names(names)],
            scorer: HandScorer::new(rules)?,
            snapshots: Vec::new(),
            totals: RunningTotals::default(),
        };
        ledger.recompute()?;
        Ok(ledger)
    }

    pub fn rules(&self) -> &ScoringRules {
        self.scorer.rules()
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, at: usize) -> Option<&Hand> {
        self.hands.get(at)
    }

    /// Always at least one
    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    pub fn totals(&self) -> &RunningTotals {
        &self.totals
    }

    /// Running totals as they stood after hand `at`
    pub fn totals_after(&self, at: usize) -> Option<&RunningTotals> {
        self.snapshots.get(at)
    }

    /// Re-fold every hand from the start. Nothing is written unless every
    /// hand scores.
    pub fn recompute(&mut self) -> Result<&RunningTotals> {
        let folded = fold_hands(&self.scorer, &self.hands)?;

        let mut snapshots = Vec::with_capacity(folded.len());
        for (hand, (result, running)) in self.hands.iter_mut().zip(folded) {
            hand.set_result(result);
            snapshots.push(running);
        }
        self.totals = snapshots.last().copied().unwrap_or_default();
        self.snapshots = snapshots;

        log::debug!(
            "Recomputed {} hands: A {}/{} ({} bags), B {}/{} ({} bags){}",
            self.hands.len(),
            self.totals.team_a.spades_points,
            self.totals.team_a.hearts_points,
            self.totals.team_a.all_bags,
            self.totals.team_b.spades_points,
            self.totals.team_b.hearts_points,
            self.totals.team_b.all_bags,
            if self.totals.ends_game { ", game over" } else { "" }
        );
        Ok(&self.totals)
    }

    /// Append a hand carrying the last hand's seat names. Returns its index.
    pub fn add_hand(&mut self) -> Result<usize> {
        self.transact(|hands| {
            let next = match hands.last() {
                Some(last) => last.carried(),
                None => Hand::with_names(DEFAULT_NAMES),
            };
            hands.push(next);
            hands.len() - 1
        })
    }

    /// Remove the hand at `at`. Removing the only hand leaves a fresh one
    /// with the same seat names.
    pub fn remove_hand(&mut self, at: usize) -> Result<Hand> {
        self.check_index(at)?;
        self.transact(|hands| {
            let removed = hands.remove(at);
            if hands.is_empty() {
                hands.push(removed.carried());
            }
            removed
        })
    }

    /// Edit one hand in place. If the edited hand no longer scores, the edit
    /// is rolled back and the error returned.
    pub fn mutate_hand<F>(&mut self, at: usize, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Hand),
    {
        self.check_index(at)?;
        self.transact(|hands| edit(&mut hands[at]))
    }

    /// Toggle one team's moon flag; turning it on clears the other team
    pub fn set_moon(&mut self, at: usize, team: Team, shot: bool) -> Result<()> {
        self.mutate_hand(at, |hand| hand.set_shot_moon(team, shot))
    }

    /// Set both moon flags at once, rejecting the impossible pair
    pub fn set_moon_flags(&mut self, at: usize, team_a: bool, team_b: bool) -> Result<()> {
        let moon = crate::model::hand::moon_from_flags(team_a, team_b).map_err(|e| {
            log::warn!("Hand {}: {}", at + 1, e);
            e
        })?;
        self.mutate_hand(at, |hand| hand.moon = moon)
    }

    /// Replace a hand's inputs with a resolved score-sheet draft
    pub fn apply_draft(&mut self, at: usize, draft: &DraftHand) -> Result<()> {
        let resolved = draft.resolve();
        self.mutate_hand(at, |hand| {
            hand.players = resolved.players;
            hand.moon = resolved.moon;
        })
    }

    /// Start over with one fresh hand, keeping the first hand's seat names
    pub fn reset(&mut self) -> Result<()> {
        self.transact(|hands| {
            let fresh = match hands.first() {
                Some(first) => first.carried(),
                None => Hand::with_names(DEFAULT_NAMES),
            };
            *hands = vec![fresh];
        })
    }

    fn check_index(&self, at: usize) -> Result<()> {
        if at >= self.hands.len() {
            return Err(SpartsError::HandIndexOutOfRange {
                index: at,
                len: self.hands.len(),
            });
        }
        Ok(())
    }

    /// Apply `change` to the hand list and recompute, restoring the previous
    /// list if the recompute fails
    fn transact<T, F>(&mut self, change: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Hand>) -> T,
    {
        let previous = self.hands.clone();
        let value = change(&mut self.hands);
        let outcome = self.recompute().map(|_| ());
        if let Err(e) = outcome {
            log::debug!("Rolled back change to hand list: {}", e);
            self.hands = previous;
            return Err(e);
        }
        Ok(value)
    }
}
