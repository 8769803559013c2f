//! Reward parameters and crediting.
//!
//! Coins and XP per correct answer resolve through three layers, highest
//! priority first: the game file's own values, a caller-supplied
//! override, and the static defaults. The merge is explicit and
//! per-field, so a game may pin coins while leaving XP to the caller.

use log::info;
use serde::Deserialize;

const DEFAULT_COINS_PER_CORRECT: u32 = 5;
const DEFAULT_XP_PER_CORRECT: u32 = 10;

/// Fully resolved reward parameters for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardPlan {
    pub coins_per_correct: u32,
    pub xp_per_correct: u32,
}

impl Default for RewardPlan {
    fn default() -> Self {
        Self {
            coins_per_correct: DEFAULT_COINS_PER_CORRECT,
            xp_per_correct: DEFAULT_XP_PER_CORRECT,
        }
    }
}

/// Partial reward parameters from one configuration layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RewardOverrides {
    #[serde(default)]
    pub coins_per_correct: Option<u32>,
    #[serde(default)]
    pub xp_per_correct: Option<u32>,
}

impl RewardPlan {
    /// Merge `{game value, caller override, default}` in priority order.
    pub fn resolve(game: Option<&RewardOverrides>, caller: Option<&RewardOverrides>) -> Self {
        let defaults = Self::default();
        let pick = |field: fn(&RewardOverrides) -> Option<u32>, fallback: u32| {
            game.and_then(field)
                .or_else(|| caller.and_then(field))
                .unwrap_or(fallback)
        };

        Self {
            coins_per_correct: pick(|o| o.coins_per_correct, defaults.coins_per_correct),
            xp_per_correct: pick(|o| o.xp_per_correct, defaults.xp_per_correct),
        }
    }

    /// What a finished run with `score` correct answers earns.
    pub fn payout(&self, score: usize) -> RewardGrant {
        let score = score as u32;
        RewardGrant {
            coins: score * self.coins_per_correct,
            xp: score * self.xp_per_correct,
        }
    }
}

/// The coins and XP earned by one finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardGrant {
    pub coins: u32,
    pub xp: u32,
}

/// External crediting facility. Called once per finished run, with the
/// grant computed from the final score.
pub trait RewardLedger {
    fn credit(&mut self, game_id: &str, grant: RewardGrant);
}

/// In-process ledger: running totals for the current player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LearnerProfile {
    pub coins: u32,
    pub xp: u32,
}

impl RewardLedger for LearnerProfile {
    fn credit(&mut self, game_id: &str, grant: RewardGrant) {
        self.coins += grant.coins;
        self.xp += grant.xp;
        info!(
            "credited {} coins / {} xp for game {}",
            grant.coins, grant.xp, game_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_no_layer_sets_anything() {
        let plan = RewardPlan::resolve(None, None);
        assert_eq!(plan, RewardPlan::default());
    }

    #[test]
    fn game_values_beat_caller_overrides() {
        let game = RewardOverrides {
            coins_per_correct: Some(20),
            xp_per_correct: None,
        };
        let caller = RewardOverrides {
            coins_per_correct: Some(3),
            xp_per_correct: Some(7),
        };

        let plan = RewardPlan::resolve(Some(&game), Some(&caller));
        assert_eq!(plan.coins_per_correct, 20);
        // Unset in the game file, so the caller layer wins.
        assert_eq!(plan.xp_per_correct, 7);
    }

    #[test]
    fn caller_overrides_beat_defaults() {
        let caller = RewardOverrides {
            coins_per_correct: Some(1),
            xp_per_correct: None,
        };
        let plan = RewardPlan::resolve(None, Some(&caller));
        assert_eq!(plan.coins_per_correct, 1);
        assert_eq!(plan.xp_per_correct, RewardPlan::default().xp_per_correct);
    }

    #[test]
    fn payout_scales_with_score() {
        let plan = RewardPlan {
            coins_per_correct: 5,
            xp_per_correct: 10,
        };
        assert_eq!(plan.payout(0), RewardGrant { coins: 0, xp: 0 });
        assert_eq!(plan.payout(4), RewardGrant { coins: 20, xp: 40 });
    }

    #[test]
    fn profile_accumulates_across_runs() {
        let mut profile = LearnerProfile::default();
        profile.credit("inbox-1", RewardGrant { coins: 10, xp: 20 });
        profile.credit("dm-check", RewardGrant { coins: 5, xp: 10 });
        assert_eq!(profile.coins, 15);
        assert_eq!(profile.xp, 30);
    }
}
