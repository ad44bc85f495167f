//! Score, coins, streak and the adaptive difficulty level.

use serde::{Deserialize, Serialize};

use crate::config::RewardRules;
use crate::error::{EngineError, EngineResult};
use crate::quiz_engine::models::Difficulty;
use crate::session::challenge::ChallengeSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    Practice,
    Challenge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub difficulty: Difficulty,
    pub streak: u32,
    pub score: u32,
    pub coins: u32,
}

/// What one answer changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points: u32,
    pub coins: u32,
    pub streak: u32,
    pub difficulty_before: Difficulty,
    pub difficulty_after: Difficulty,
}

impl AnswerOutcome {
    pub fn difficulty_changed(&self) -> bool {
        self.difficulty_before != self.difficulty_after
    }
}

impl Progress {
    pub fn new(difficulty: Difficulty) -> Self {
        Progress { difficulty, ..Progress::default() }
    }

    /// Apply one answer. Points use the streak *before* this answer, so the
    /// first correct answer of a run earns exactly `base_points`. Difficulty
    /// only moves in practice.
    pub fn on_answer(&mut self, correct: bool, mode: PlayMode, rules: &RewardRules) -> AnswerOutcome {
        let before = self.difficulty;
        let (points, coins) = if correct {
            let points = rules.base_points.saturating_add(rules.streak_bonus.saturating_mul(self.streak));
            self.score = self.score.saturating_add(points);
            self.coins = self.coins.saturating_add(rules.coins_per_correct);
            self.streak = self.streak.saturating_add(1);
            if mode == PlayMode::Practice && self.streak % rules.streak_step.max(1) == 0 {
                self.difficulty = self.difficulty.raised();
            }
            (points, rules.coins_per_correct)
        } else {
            self.streak = 0;
            if mode == PlayMode::Practice {
                self.difficulty = self.difficulty.lowered();
            }
            (0, 0)
        };
        AnswerOutcome {
            correct,
            points,
            coins,
            streak: self.streak,
            difficulty_before: before,
            difficulty_after: self.difficulty,
        }
    }

    /// The only path by which a challenge feeds back into persistent state.
    pub fn apply_challenge(&mut self, summary: &ChallengeSummary) {
        self.coins = self.coins.saturating_add(summary.coin_bonus);
        if summary.difficulty_raised {
            self.difficulty = self.difficulty.raised();
        }
    }

    pub fn spend(&mut self, amount: u32) -> EngineResult<()> {
        if amount > self.coins {
            return Err(EngineError::InsufficientCoins { needed: amount, available: self.coins });
        }
        self.coins -= amount;
        Ok(())
    }
}
