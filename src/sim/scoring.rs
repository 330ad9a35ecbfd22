//! Score-driven level progression

use serde::{Deserialize, Serialize};

use crate::consts::LEVEL_SCORE_STEP;

/// When a score change counts as reaching a new level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LevelUpRule {
    /// Level up only when the score lands exactly on a multiple of the step.
    /// Kill bonuses can jump over a multiple and skip the level-up.
    ExactMultiple,
    /// Level up once for every multiple of the step passed during the frame
    #[default]
    CrossedMultiple,
}

impl LevelUpRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelUpRule::ExactMultiple => "exact_multiple",
            LevelUpRule::CrossedMultiple => "crossed_multiple",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "exact_multiple" | "exact" => Some(LevelUpRule::ExactMultiple),
            "crossed_multiple" | "crossed" => Some(LevelUpRule::CrossedMultiple),
            _ => None,
        }
    }

    /// Number of levels gained when the score moves from `before` to `after`
    pub fn levels_gained(&self, before: u64, after: u64) -> u32 {
        if after <= before {
            return 0;
        }
        match self {
            LevelUpRule::ExactMultiple => u32::from(after % LEVEL_SCORE_STEP == 0),
            LevelUpRule::CrossedMultiple => {
                (after / LEVEL_SCORE_STEP - before / LEVEL_SCORE_STEP) as u32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passive_step_onto_multiple() {
        for rule in [LevelUpRule::ExactMultiple, LevelUpRule::CrossedMultiple] {
            assert_eq!(rule.levels_gained(4999, 5000), 1);
            assert_eq!(rule.levels_gained(5000, 5001), 0);
            assert_eq!(rule.levels_gained(1, 2), 0);
        }
    }

    #[test]
    fn test_kill_jump_over_multiple() {
        // 4995 + 10 (kill) + 1 (passive) lands on 5006
        assert_eq!(LevelUpRule::ExactMultiple.levels_gained(4995, 5006), 0);
        assert_eq!(LevelUpRule::CrossedMultiple.levels_gained(4995, 5006), 1);
    }

    #[test]
    fn test_score_reset_gains_nothing() {
        assert_eq!(LevelUpRule::CrossedMultiple.levels_gained(12000, 1), 0);
        assert_eq!(LevelUpRule::ExactMultiple.levels_gained(12000, 0), 0);
    }

    #[test]
    fn test_rule_names_round_trip() {
        for rule in [LevelUpRule::ExactMultiple, LevelUpRule::CrossedMultiple] {
            assert_eq!(LevelUpRule::from_str(rule.as_str()), Some(rule));
        }
        assert_eq!(LevelUpRule::from_str("Crossed-Multiple"), Some(LevelUpRule::CrossedMultiple));
        assert_eq!(LevelUpRule::from_str("sometimes"), None);
    }
}
