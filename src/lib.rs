pub mod error;
pub mod ledger;
pub mod model;
pub mod rules;

pub use error::{Result, SpartsError};
pub use ledger::{fold_hands, GameLedger, RunningTotals, TeamTotals};
pub use model::*;
pub use rules::{ScoringRules, MAX_RULE_POINTS};
