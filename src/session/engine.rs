//! The session: one learner, one active item, one profile.
//!
//! Flow: `start_practice(topic)` or `start_challenge()` loads an item,
//! `submit_answer(index)` scores it, `advance()` loads the next one (or ends
//! the challenge). Every state change is saved to the [`ProfileStore`] once a
//! user name is set.

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::quiz_engine::{
    curriculum,
    generator::generate_with,
    models::{Difficulty, Grade, Item, Topic},
};
use crate::session::{
    challenge::{ChallengeRun, ChallengeState, ChallengeStep, ChallengeSummary},
    progress::{AnswerOutcome, PlayMode, Progress},
    store::{ProfileSnapshot, ProfileStore},
};

#[derive(Debug, Clone)]
enum Mode {
    Idle,
    Practice { topic: Topic },
    Challenge(ChallengeRun),
}

enum Next {
    Practice(Topic),
    Challenge(ChallengeStep),
}

#[derive(Debug, Clone)]
struct ActiveItem {
    item: Item,
    answered: bool,
}

/// Returned by [`Session::submit_answer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub selected_index: usize,
    pub correct_index: usize,
    pub explanation: String,
    pub outcome: AnswerOutcome,
}

/// Returned by [`Session::advance`].
#[derive(Debug)]
pub enum Step<'a> {
    Question(&'a Item),
    ChallengeComplete(ChallengeSummary),
}

pub struct Session<S: ProfileStore> {
    config: EngineConfig,
    store: S,
    rng: StdRng,
    user: String,
    grade: Grade,
    progress: Progress,
    unlocked_avatars: Vec<String>,
    mode: Mode,
    active: Option<ActiveItem>,
}

impl<S: ProfileStore> Session<S> {
    /// Build a session and restore the profile saved under `config.save_slot`.
    pub fn new(config: EngineConfig, store: S) -> EngineResult<Self> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let restored = store.load(&config.save_slot)?;
        let snapshot = restored.clone().unwrap_or_else(|| ProfileSnapshot {
            grade: config.default_grade(),
            difficulty: Difficulty::new(config.starting_difficulty),
            ..ProfileSnapshot::default()
        });
        if restored.is_some() {
            info!(slot = %config.save_slot, user = %snapshot.user, "profile restored");
        }

        Ok(Session {
            rng,
            user: snapshot.user,
            grade: snapshot.grade,
            progress: Progress {
                difficulty: snapshot.difficulty,
                streak: 0,
                score: snapshot.score,
                coins: snapshot.coins,
            },
            unlocked_avatars: snapshot.unlocked_avatars,
            mode: Mode::Idle,
            active: None,
            config,
            store,
        })
    }

    // ── accessors ────────────────────────────────────────────────────────────

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn unlocked_avatars(&self) -> &[String] {
        &self.unlocked_avatars
    }

    pub fn eligible_topics(&self) -> Vec<Topic> {
        curriculum::eligible_topics(self.grade)
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.active.as_ref().map(|a| &a.item)
    }

    pub fn play_mode(&self) -> Option<PlayMode> {
        match self.mode {
            Mode::Idle             => None,
            Mode::Practice { .. }  => Some(PlayMode::Practice),
            Mode::Challenge(_)     => Some(PlayMode::Challenge),
        }
    }

    /// `(answered so far, correct so far)` while a challenge is running.
    pub fn challenge_status(&self) -> Option<(u32, u32)> {
        match &self.mode {
            Mode::Challenge(run) => match run.state() {
                ChallengeState::Running { progress } => Some((progress, run.score())),
                ChallengeState::Complete             => Some((run.length(), run.score())),
            },
            _ => None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            user: self.user.clone(),
            score: self.progress.score,
            coins: self.progress.coins,
            unlocked_avatars: self.unlocked_avatars.clone(),
            grade: self.grade,
            difficulty: self.progress.difficulty,
        }
    }

    // ── navigation ───────────────────────────────────────────────────────────

    pub fn set_user(&mut self, name: &str) {
        self.user = name.trim().to_string();
        self.autosave();
    }

    /// Switching grade abandons whatever is in progress.
    pub fn set_grade(&mut self, grade: u8) -> EngineResult<()> {
        self.grade = Grade::new(grade).map_err(|e| {
            warn!(grade, "rejected grade");
            e
        })?;
        self.mode = Mode::Idle;
        self.active = None;
        self.autosave();
        Ok(())
    }

    pub fn start_practice(&mut self, topic: Topic) -> EngineResult<&Item> {
        if let Err(e) = curriculum::ensure_offered(topic, self.grade) {
            warn!(%topic, grade = self.grade.value(), "topic not offered");
            return Err(e);
        }
        self.mode = Mode::Practice { topic };
        let difficulty = self.progress.difficulty;
        Ok(self.load_item(topic, difficulty))
    }

    pub fn start_challenge(&mut self) -> EngineResult<&Item> {
        let run = ChallengeRun::new(self.config.challenge, self.progress.difficulty);
        let topic = run.draw_topic(&mut self.rng, self.grade);
        let difficulty = run.item_difficulty();
        info!(grade = self.grade.value(), difficulty = difficulty.level(), "challenge started");
        self.mode = Mode::Challenge(run);
        Ok(self.load_item(topic, difficulty))
    }

    // ── answering ────────────────────────────────────────────────────────────

    pub fn submit_answer(&mut self, index: usize) -> EngineResult<AnswerFeedback> {
        let active = self.active.as_mut().ok_or(EngineError::NoActiveItem)?;
        if active.answered {
            return Err(EngineError::AlreadyAnswered);
        }
        let len = active.item.options.len();
        if index >= len {
            return Err(EngineError::OptionOutOfRange { index, len });
        }
        active.answered = true;
        let correct = active.item.is_correct(index);
        let correct_index = active.item.correct_index;
        let explanation = active.item.explanation.clone();

        let mode = match &mut self.mode {
            Mode::Challenge(run) => {
                run.record(correct);
                PlayMode::Challenge
            }
            _ => PlayMode::Practice,
        };
        let outcome = self.progress.on_answer(correct, mode, &self.config.rewards);
        debug!(correct, streak = outcome.streak, score = self.progress.score, "answer recorded");
        if outcome.difficulty_changed() {
            info!(
                from = outcome.difficulty_before.level(),
                to = outcome.difficulty_after.level(),
                "difficulty changed"
            );
        }
        self.autosave();

        Ok(AnswerFeedback { correct, selected_index: index, correct_index, explanation, outcome })
    }

    /// Move past an answered item.
    pub fn advance(&mut self) -> EngineResult<Step<'_>> {
        match &self.active {
            None => return Err(EngineError::NoActiveItem),
            Some(active) if !active.answered => return Err(EngineError::NotAnswered),
            Some(_) => {}
        }

        let next = match &mut self.mode {
            Mode::Practice { topic } => Next::Practice(*topic),
            Mode::Challenge(run) => Next::Challenge(run.advance()),
            Mode::Idle => return Err(EngineError::NoActiveItem),
        };

        match next {
            Next::Practice(topic) => {
                let difficulty = self.progress.difficulty;
                Ok(Step::Question(self.load_item(topic, difficulty)))
            }
            Next::Challenge(ChallengeStep::Continue { .. }) => {
                let (topic, difficulty) = match &self.mode {
                    Mode::Challenge(run) => (run.draw_topic(&mut self.rng, self.grade), run.item_difficulty()),
                    _ => return Err(EngineError::NoActiveItem),
                };
                Ok(Step::Question(self.load_item(topic, difficulty)))
            }
            Next::Challenge(ChallengeStep::Complete(summary)) => {
                self.progress.apply_challenge(&summary);
                self.mode = Mode::Idle;
                self.active = None;
                info!(
                    score = summary.score,
                    length = summary.length,
                    coin_bonus = summary.coin_bonus,
                    difficulty_raised = summary.difficulty_raised,
                    "challenge complete"
                );
                self.autosave();
                Ok(Step::ChallengeComplete(summary))
            }
        }
    }

    // ── economy ──────────────────────────────────────────────────────────────

    /// Deduct `cost` and record the avatar, only if affordable and not owned.
    pub fn unlock_avatar(&mut self, id: &str, cost: u32) -> EngineResult<()> {
        if self.unlocked_avatars.iter().any(|a| a == id) {
            return Err(EngineError::AlreadyOwned(id.to_string()));
        }
        self.progress.spend(cost).map_err(|e| {
            warn!(avatar = id, cost, coins = self.progress.coins, "purchase rejected");
            e
        })?;
        self.unlocked_avatars.push(id.to_string());
        info!(avatar = id, cost, coins = self.progress.coins, "avatar unlocked");
        self.autosave();
        Ok(())
    }

    // ── persistence ──────────────────────────────────────────────────────────

    /// Write the snapshot now, surfacing any storage error.
    pub fn persist(&mut self) -> EngineResult<()> {
        let snapshot = self.snapshot();
        self.store.save(&self.config.save_slot, &snapshot)
    }

    /// Save after a state change. Nothing is written until the learner has a
    /// name; failures are logged, never fatal to play.
    fn autosave(&mut self) {
        if self.user.is_empty() {
            return;
        }
        if let Err(e) = self.persist() {
            warn!(slot = %self.config.save_slot, error = %e, "failed to save profile");
        }
    }

    fn load_item(&mut self, topic: Topic, difficulty: Difficulty) -> &Item {
        let item = generate_with(&mut self.rng, topic, self.grade, difficulty);
        &self.active.insert(ActiveItem { item, answered: false }).item
    }
}
