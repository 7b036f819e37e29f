//! Scoring constants for Sparts.
//!
//! Every number the scorer uses lives here so a table playing house rules can
//! override it. `Default` gives the reference values.

use crate::error::{Result, SpartsError};
use crate::model::TRICKS_PER_HAND;
use serde::{Deserialize, Serialize};

/// Named, overridable scoring constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Points per bid trick when a contract is made (lost per trick when set)
    pub points_per_bid: i32,
    /// Penalty per heart taken
    pub heart_value: i32,
    /// Penalty for capturing the single high-value penalty card. Unset means
    /// thirteen hearts' worth.
    pub penalty_card_value: Option<i32>,
    /// Number of accumulated bags that triggers one bag penalty
    pub bag_threshold: u32,
    /// Applied to spades points each time the bag threshold is crossed
    pub bag_penalty: i32,
    /// Bonus for a nil bidder who took no tricks
    pub nil_success: i32,
    /// Applied when a nil bidder took at least one trick
    pub nil_failure: i32,
    /// Added to the opponents' hearts points when a team shoots the moon.
    /// Unset means every heart plus the penalty card.
    pub moon_penalty: Option<i32>,
    /// Spades or hearts total at which the game ends
    pub game_ceiling: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_per_bid: 10,
            heart_value: 4,
            penalty_card_value: None,
            bag_threshold: 10,
            bag_penalty: -100,
            nil_success: 100,
            nil_failure: -100,
            moon_penalty: None,
            game_ceiling: 600,
        }
    }
}

/// Largest magnitude accepted for any point constant
pub const MAX_RULE_POINTS: i32 = 100_000;

impl ScoringRules {
    /// Reject values the scorer cannot fold with
    pub fn validate(&self) -> Result<()> {
        if self.bag_threshold == 0 {
            return Err(SpartsError::InvalidRules(
                "bag threshold must be at least 1".to_string(),
            ));
        }

        let points = [
            ("points per bid", Some(self.points_per_bid)),
            ("heart value", Some(self.heart_value)),
            ("penalty card value", self.penalty_card_value),
            ("bag penalty", Some(self.bag_penalty)),
            ("nil success", Some(self.nil_success)),
            ("nil failure", Some(self.nil_failure)),
            ("moon penalty", self.moon_penalty),
            ("game ceiling", Some(self.game_ceiling)),
        ];
        let set = points
            .into_iter()
            .filter_map(|(field, value)| value.map(|value| (field, value)));
        for (field, value) in set {
            if value.unsigned_abs() > MAX_RULE_POINTS as u32 {
                return Err(SpartsError::InvalidRules(format!(
                    "{} {} is outside -{}..={}",
                    field, value, MAX_RULE_POINTS, MAX_RULE_POINTS
                )));
            }
        }
        Ok(())
    }

    /// Value of the penalty card, derived from the heart value when not set
    pub fn penalty_card_points(&self) -> i32 {
        self.penalty_card_value
            .unwrap_or(TRICKS_PER_HAND as i32 * self.heart_value)
    }

    /// Points handed to the opponents on a moon shot, derived from the
    /// current heart and penalty card values when not set
    pub fn moon_points(&self) -> i32 {
        self.moon_penalty
            .unwrap_or_else(|| self.hearts_penalty(TRICKS_PER_HAND as u32, true))
    }

    /// Hearts penalty for a team that did not shoot the moon
    pub fn hearts_penalty(&self, hearts_count: u32, took_penalty_card: bool) -> i32 {
        let card = if took_penalty_card {
            self.penalty_card_points()
        } else {
            0
        };
        hearts_count as i32 * self.heart_value + card
    }

    /// Whether a running total has reached the game-ending ceiling
    pub fn reaches_ceiling(&self, total: i32) -> bool {
        total >= self.game_ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        let rules = ScoringRules::default();
        assert_eq!(rules.points_per_bid, 10);
        assert_eq!(rules.heart_value, 4);
        assert_eq!(rules.penalty_card_points(), 52);
        assert_eq!(rules.bag_threshold, 10);
        assert_eq!(rules.bag_penalty, -100);
        assert_eq!(rules.nil_success, 100);
        assert_eq!(rules.nil_failure, -100);
        assert_eq!(rules.moon_points(), 104);
        assert_eq!(rules.game_ceiling, 600);
    }

    #[test]
    fn test_full_hand_equals_moon_penalty() {
        let rules = ScoringRules::default();
        assert_eq!(rules.hearts_penalty(13, true), rules.moon_points());
        assert_eq!(rules.hearts_penalty(0, false), 0);
        assert_eq!(rules.hearts_penalty(3, false), 12);
    }

    #[test]
    fn test_zero_bag_threshold_rejected() {
        let rules = ScoringRules {
            bag_threshold: 0,
            ..ScoringRules::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(SpartsError::InvalidRules(_))
        ));
        assert!(ScoringRules::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let rules: ScoringRules =
            serde_json::from_str(r#"{ "game_ceiling": 500, "bag_penalty": -50 }"#).unwrap();
        assert_eq!(rules.game_ceiling, 500);
        assert_eq!(rules.bag_penalty, -50);
        assert_eq!(rules.points_per_bid, 10);
        assert_eq!(rules.moon_points(), 104);
    }

    #[test]
    fn test_moon_follows_heart_value_override() {
        let rules: ScoringRules = serde_json::from_str(r#"{ "heart_value": 5 }"#).unwrap();
        assert_eq!(rules.penalty_card_points(), 65);
        assert_eq!(rules.moon_points(), 130);
        assert_eq!(rules.hearts_penalty(13, true), rules.moon_points());

        let rules: ScoringRules =
            serde_json::from_str(r#"{ "penalty_card_value": 13 }"#).unwrap();
        assert_eq!(rules.moon_points(), 65);

        let rules: ScoringRules =
            serde_json::from_str(r#"{ "heart_value": 5, "moon_penalty": 100 }"#).unwrap();
        assert_eq!(rules.moon_points(), 100);
    }

    #[test]
    fn test_out_of_range_points_rejected() {
        let rules = ScoringRules {
            points_per_bid: i32::MAX,
            ..ScoringRules::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(SpartsError::InvalidRules(_))
        ));

        let rules = ScoringRules {
            bag_penalty: i32::MIN,
            ..ScoringRules::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(SpartsError::InvalidRules(_))
        ));

        let rules = ScoringRules {
            moon_penalty: Some(MAX_RULE_POINTS + 1),
            ..ScoringRules::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(SpartsError::InvalidRules(_))
        ));

        let rules = ScoringRules {
            nil_failure: -MAX_RULE_POINTS,
            ..ScoringRules::default()
        };
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_ceiling() {
        let rules = ScoringRules::default();
        assert!(!rules.reaches_ceiling(599));
        assert!(rules.reaches_ceiling(600));
        assert!(rules.reaches_ceiling(640));
    }
}
