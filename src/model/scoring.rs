//! Sparts hand scoring: a Spades-style bid/made/set side and a Hearts-style
//! penalty side, combined per team.

use super::hand::Hand;
use super::player::PlayerEntry;
use super::seat::Team;
use crate::error::{Result, SpartsError};
use crate::rules::ScoringRules;
use serde::Serialize;

/// Whether a team met its combined non-nil bid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Contract {
    #[default]
    Made,
    Set,
}

/// One team's score for one hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TeamResult {
    pub spades_points: i32,
    pub hearts_points: i32,
    /// Bags generated this hand, before threshold rollover
    pub hand_bags: u32,
    pub contract: Contract,
    /// How many times the bag threshold was crossed this hand
    pub bag_penalties: u32,
}

impl TeamResult {
    pub fn net(&self) -> i32 {
        self.spades_points - self.hearts_points
    }
}

/// Both teams' scores for one hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HandResult {
    pub team_a: TeamResult,
    pub team_b: TeamResult,
}

impl HandResult {
    pub fn team(&self, team: Team) -> &TeamResult {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    pub fn net_a(&self) -> i32 {
        self.team_a.net()
    }

    pub fn net_b(&self) -> i32 {
        self.team_b.net()
    }
}

/// Bag remainders carried between hands, one per team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BagCarry {
    pub team_a: u32,
    pub team_b: u32,
}

impl BagCarry {
    pub fn new(team_a: u32, team_b: u32) -> Self {
        Self { team_a, team_b }
    }

    pub fn team(&self, team: Team) -> u32 {
        match team {
            Team::A => self.team_a,
            Team::B => self.team_b,
        }
    }
}

/// Spades-side outcome for one team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpadesOutcome {
    pub points: i32,
    pub hand_bags: u32,
    pub contract: Contract,
    pub bag_penalties: u32,
    /// Bag remainder to carry into the next hand
    pub outgoing_bags: u32,
}

/// Scores single hands under a fixed set of rules
#[derive(Debug, Clone, Default)]
pub struct HandScorer {
    rules: ScoringRules,
}

impl HandScorer {
    pub fn new(rules: ScoringRules) -> Result<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Score one hand given each team's incoming bag remainder.
    ///
    /// Returns the hand's result and the bag remainders to carry forward.
    /// Out-of-range counts are rejected, never clamped.
    pub fn score(&self, hand: &Hand, incoming: BagCarry) -> Result<(HandResult, BagCarry)> {
        hand.validate()?;

        let spades_a = self.score_spades(hand.team_players(Team::A), incoming.team_a)?;
        let spades_b = self.score_spades(hand.team_players(Team::B), incoming.team_b)?;

        let mut hearts_a = self.score_hearts(hand.team_players(Team::A), hand.shot_moon(Team::A));
        let mut hearts_b = self.score_hearts(hand.team_players(Team::B), hand.shot_moon(Team::B));

        // Moon redistribution happens after both base values are known
        match hand.moon {
            Some(Team::A) => hearts_b += self.rules.moon_points(),
            Some(Team::B) => hearts_a += self.rules.moon_points(),
            None => {}
        }

        let result = HandResult {
            team_a: team_result(&spades_a, hearts_a),
            team_b: team_result(&spades_b, hearts_b),
        };
        let outgoing = BagCarry::new(spades_a.outgoing_bags, spades_b.outgoing_bags);
        Ok((result, outgoing))
    }

    /// Spades side for one team's two players.
    ///
    /// Fails when the incoming bag remainder is large enough to overflow the
    /// bag count or the bag penalty.
    pub fn score_spades(&self, players: [&PlayerEntry; 2], incoming_bags: u32) -> Result<SpadesOutcome> {
        let rules = &self.rules;

        // Only non-nil tricks count toward the contract
        let (nil, non_nil): (Vec<&PlayerEntry>, Vec<&PlayerEntry>) =
            players.iter().copied().partition(|p| p.is_nil());
        let non_nil_took: u32 = non_nil.iter().map(|p| p.took as u32).sum();
        let nil_tricks: u32 = nil.iter().map(|p| p.took as u32).sum();
        let team_bid: u32 = non_nil.iter().map(|p| p.bid as u32).sum();

        let (mut points, hand_bags, contract) = if non_nil_took >= team_bid {
            (
                rules.points_per_bid * team_bid as i32,
                nil_tricks + (non_nil_took - team_bid),
                Contract::Made,
            )
        } else {
            // Overtricks do not exist when set, but nil tricks still bag
            (-rules.points_per_bid * team_bid as i32, nil_tricks, Contract::Set)
        };

        let bags = incoming_bags
            .checked_add(hand_bags)
            .ok_or_else(|| bag_overflow(incoming_bags))?;
        let bag_penalties = bags / rules.bag_threshold;
        let outgoing_bags = bags % rules.bag_threshold;
        points = i32::try_from(bag_penalties)
            .ok()
            .and_then(|count| rules.bag_penalty.checked_mul(count))
            .and_then(|penalty| points.checked_add(penalty))
            .ok_or_else(|| bag_overflow(incoming_bags))?;

        for player in &nil {
            let settlement = if player.took == 0 {
                rules.nil_success
            } else {
                rules.nil_failure
            };
            points = points
                .checked_add(settlement)
                .ok_or_else(|| bag_overflow(incoming_bags))?;
        }

        Ok(SpadesOutcome {
            points,
            hand_bags,
            contract,
            bag_penalties,
            outgoing_bags,
        })
    }

    /// Hearts side for one team, before any moon redistribution
    pub fn score_hearts(&self, players: [&PlayerEntry; 2], shot_moon: bool) -> i32 {
        if shot_moon {
            return 0;
        }
        let hearts_count: u32 = players.iter().map(|p| p.hearts_taken as u32).sum();
        let took_penalty_card = players.iter().any(|p| p.took_penalty_card);
        self.rules.hearts_penalty(hearts_count, took_penalty_card)
    }
}

fn bag_overflow(incoming_bags: u32) -> SpartsError {
    SpartsError::InvalidHandInput(format!(
        "incoming bag remainder {} is out of range",
        incoming_bags
    ))
}

fn team_result(spades: &SpadesOutcome, hearts_points: i32) -> TeamResult {
    TeamResult {
        spades_points: spades.points,
        hearts_points,
        hand_bags: spades.hand_bags,
        contract: spades.contract,
        bag_penalties: spades.bag_penalties,
    }
}
