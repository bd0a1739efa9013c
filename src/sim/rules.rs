//! Win-condition evaluation

use super::score::ScoreBoard;
use super::state::Side;
use crate::tuning::{GameMode, MatchConfig};

/// Outcome of checking the score after a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    InPlay,
    Won(Side),
}

impl Verdict {
    pub fn is_over(&self) -> bool {
        matches!(self, Verdict::Won(_))
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Verdict::InPlay => None,
            Verdict::Won(side) => Some(*side),
        }
    }
}

/// Decide the match for `score` under `mode`.
///
/// FixedScore: first to `win_score` (left is checked first).
/// LeadByThree: a lead of at least `lead_threshold`, and never at 0-0.
pub fn evaluate(score: &ScoreBoard, mode: GameMode, win_score: u32, lead_threshold: u32) -> Verdict {
    match mode {
        GameMode::FixedScore => {
            if score.left >= win_score {
                Verdict::Won(Side::Left)
            } else if score.right >= win_score {
                Verdict::Won(Side::Right)
            } else {
                Verdict::InPlay
            }
        }
        GameMode::LeadByThree => {
            let lead = score.left.abs_diff(score.right);
            let anyone_scored = score.left > 0 || score.right > 0;
            if anyone_scored && lead >= lead_threshold {
                if score.left > score.right {
                    Verdict::Won(Side::Left)
                } else {
                    Verdict::Won(Side::Right)
                }
            } else {
                Verdict::InPlay
            }
        }
    }
}

/// `evaluate` with the rules from `config`
pub fn evaluate_with(score: &ScoreBoard, config: &MatchConfig) -> Verdict {
    evaluate(score, config.game_mode, config.win_score, config.lead_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(left: u32, right: u32) -> Verdict {
        evaluate(&ScoreBoard { left, right }, GameMode::FixedScore, 5, 3)
    }

    fn lead(left: u32, right: u32, threshold: u32) -> Verdict {
        evaluate(&ScoreBoard { left, right }, GameMode::LeadByThree, 5, threshold)
    }

    #[test]
    fn test_fixed_score() {
        assert_eq!(fixed(5, 3), Verdict::Won(Side::Left));
        assert_eq!(fixed(2, 5), Verdict::Won(Side::Right));
        assert_eq!(fixed(4, 4), Verdict::InPlay);
        assert!(!fixed(0, 0).is_over());
    }

    #[test]
    fn test_fixed_score_checks_left_first() {
        assert_eq!(fixed(6, 5), Verdict::Won(Side::Left));
    }

    #[test]
    fn test_lead_by_three() {
        assert_eq!(lead(3, 0, 3), Verdict::Won(Side::Left));
        assert_eq!(lead(4, 7, 3), Verdict::Won(Side::Right));
        assert_eq!(lead(2, 0, 3), Verdict::InPlay);
        // Plenty of points but no margin
        assert_eq!(lead(9, 8, 3), Verdict::InPlay);
    }

    #[test]
    fn test_lead_never_ends_at_nil_nil() {
        assert_eq!(lead(0, 0, 3), Verdict::InPlay);
        assert_eq!(lead(0, 0, 0), Verdict::InPlay);
    }

    #[test]
    fn test_lead_ignores_win_score() {
        // 6-4 would end a FixedScore match, not a lead match
        assert_eq!(lead(6, 4, 3), Verdict::InPlay);
    }

    #[test]
    fn test_verdict_accessors() {
        assert_eq!(Verdict::Won(Side::Right).winner(), Some(Side::Right));
        assert_eq!(Verdict::InPlay.winner(), None);
    }

    #[test]
    fn test_evaluate_with_config() {
        let cfg = MatchConfig::with_mode(GameMode::LeadByThree);
        assert!(evaluate_with(&ScoreBoard { left: 0, right: 3 }, &cfg).is_over());
    }
}
