//! Fixed-length, mixed-topic run at an elevated difficulty.
//!
//! `Running { progress }` counts answered items; after `length` of them the
//! run is `Complete` and produces a [`ChallengeSummary`].

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

use crate::config::ChallengeRules;
use crate::quiz_engine::{
    curriculum,
    models::{Difficulty, Grade, Topic},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChallengeSummary {
    /// Correct answers, `0..=length`.
    pub score: u32,
    pub length: u32,
    pub passed: bool,
    pub coin_bonus: u32,
    pub difficulty_raised: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeState {
    Running { progress: u32 },
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeStep {
    Continue { progress: u32 },
    Complete(ChallengeSummary),
}

#[derive(Debug, Clone)]
pub struct ChallengeRun {
    rules: ChallengeRules,
    base: Difficulty,
    score: u32,
    state: ChallengeState,
}

impl ChallengeRun {
    /// `base` is the practice difficulty at the moment the run starts; it is
    /// not updated while the run is in progress.
    pub fn new(rules: ChallengeRules, base: Difficulty) -> Self {
        ChallengeRun { rules, base, score: 0, state: ChallengeState::Running { progress: 0 } }
    }

    pub fn state(&self) -> ChallengeState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn length(&self) -> u32 {
        self.rules.length
    }

    /// Uniform over the topics offered in `grade`.
    pub fn draw_topic<R: Rng>(&self, rng: &mut R, grade: Grade) -> Topic {
        curriculum::eligible_topics(grade)
            .choose(rng)
            .copied()
            .unwrap_or(Topic::Number)
    }

    pub fn item_difficulty(&self) -> Difficulty {
        self.base.offset(self.rules.difficulty_offset)
    }

    pub fn record(&mut self, correct: bool) {
        if correct && matches!(self.state, ChallengeState::Running { .. }) {
            self.score += 1;
        }
    }

    /// Count the answered item and either continue or finish the run.
    pub fn advance(&mut self) -> ChallengeStep {
        match self.state {
            ChallengeState::Running { progress } => {
                let progress = progress + 1;
                if progress >= self.rules.length {
                    self.state = ChallengeState::Complete;
                    ChallengeStep::Complete(self.summary())
                } else {
                    self.state = ChallengeState::Running { progress };
                    ChallengeStep::Continue { progress }
                }
            }
            ChallengeState::Complete => ChallengeStep::Complete(self.summary()),
        }
    }

    pub fn summary(&self) -> ChallengeSummary {
        let passed = self.score >= self.rules.pass_threshold;
        ChallengeSummary {
            score: self.score,
            length: self.rules.length,
            passed,
            coin_bonus: self.score * self.rules.coin_bonus_per_point,
            difficulty_raised: passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run_with(answers: &[bool]) -> (ChallengeSummary, usize) {
        let mut run = ChallengeRun::new(ChallengeRules::default(), Difficulty::new(3));
        let mut items = 0;
        for correct in answers {
            items += 1;
            run.record(*correct);
            if let ChallengeStep::Complete(summary) = run.advance() {
                return (summary, items);
            }
        }
        panic!("run did not complete after {items} items");
    }

    #[test]
    fn four_of_five_passes() {
        let (summary, items) = run_with(&[true, true, false, true, true]);
        assert_eq!(items, 5);
        assert_eq!(summary.score, 4);
        assert_eq!(summary.coin_bonus, 80);
        assert!(summary.passed && summary.difficulty_raised);
    }

    #[test]
    fn three_of_five_pays_but_does_not_promote() {
        let (summary, _) = run_with(&[true, false, true, false, true]);
        assert_eq!(summary.coin_bonus, 60);
        assert!(!summary.difficulty_raised);
    }

    #[test]
    fn run_always_has_exactly_five_items() {
        let (summary, items) = run_with(&[false; 8]);
        assert_eq!(items, 5);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.coin_bonus, 0);
    }

    #[test]
    fn answers_after_completion_are_ignored() {
        let mut run = ChallengeRun::new(ChallengeRules { length: 1, pass_threshold: 1, ..ChallengeRules::default() }, Difficulty::new(1));
        run.record(true);
        assert!(matches!(run.advance(), ChallengeStep::Complete(_)));
        run.record(true);
        assert_eq!(run.score(), 1);
        assert_eq!(run.state(), ChallengeState::Complete);
    }

    #[test]
    fn items_are_harder_and_topics_eligible() {
        let run = ChallengeRun::new(ChallengeRules::default(), Difficulty::new(9));
        assert_eq!(run.item_difficulty().level(), 10);
        let mut rng = StdRng::seed_from_u64(1);
        let grade = Grade::new(2).unwrap();
        for _ in 0..100 {
            let topic = run.draw_topic(&mut rng, grade);
            assert!(curriculum::is_offered(topic, grade), "{topic} drawn for {grade}");
        }
    }
}
