//! # math_drill_gen
//!
//! An offline, deterministic math quiz engine for grades 1-12.
//!
//! The library generates multiple-choice math items across 12 curriculum
//! topics (Number, Algebra, Geometry, Mensuration, Coordinate Geometry,
//! Trigonometry, Vectors, Probability, Data, Fractions, Patterns, Mental Math).
//! Each item has a prompt, four unique options (two for true/false), the index
//! of the correct one, an explanation built from the same numbers as the
//! prompt, and an optional diagram description for the client to draw.
//!
//! ## How it works
//!
//! 1. Create an [`ItemRequest`] with a topic, grade, difficulty (1-10) and an
//!    optional RNG seed.
//! 2. Call [`generate_item`]: the engine checks the topic is taught in that
//!    grade, picks a family of questions for the difficulty, builds the facts,
//!    then surrounds the answer with plausible distractors.
//! 3. Or drive a whole [`Session`]: practice on one topic with difficulty that
//!    adapts to the learner's streak, or a five-item challenge across topics,
//!    with score, coins and the profile persisted through a [`ProfileStore`].
//!
//! ## Key features
//!
//! - **Deterministic**: the same seed reproduces the same item or session.
//! - **Exact by construction**: every answer is computed from the expression
//!   shown in the prompt (a remainder question uses `a*b + 1` as dividend).
//! - **Variant keys**: each item names the family it came from (e.g.
//!   `"Number:Remainder"`), stable across seeds.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{
//!     generate_item, Difficulty, EngineConfig, Grade, ItemRequest, MemoryStore, Session, Step, Topic,
//! };
//!
//! // One item:
//! let grade = Grade::new(8).unwrap();
//! let item = generate_item(
//!     ItemRequest::new(Topic::Probability, grade).with_difficulty(Difficulty::new(5)).with_seed(42),
//! ).unwrap();
//! println!("Q: {}", item.prompt);
//! for (i, option) in item.options.iter().enumerate() {
//!     let mark = if i == item.correct_index { "+" } else { " " };
//!     println!("[{mark}] {option}");
//! }
//!
//! // A practice session:
//! let mut session = Session::new(EngineConfig::default(), MemoryStore::new()).unwrap();
//! session.set_user("Ada");
//! let first = session.start_practice(Topic::Number).unwrap().correct_index;
//! let feedback = session.submit_answer(first).unwrap();
//! assert!(feedback.correct);
//! if let Step::Question(next) = session.advance().unwrap() {
//!     println!("Next: {}", next.prompt);
//! }
//! ```

pub mod config;
pub mod error;
pub mod presentation;
pub mod quiz_engine;
pub mod session;
pub mod telemetry;

// Convenience re-exports so callers can use `math_drill_gen::generate_item`
// directly without reaching into `quiz_engine::`.
pub use config::{ChallengeRules, EngineConfig, RewardRules};
pub use error::{EngineError, EngineResult};
pub use presentation::to_view_json;
pub use quiz_engine::{
    eligible_topics, generate_item, generate_with, AnswerValue, Difficulty, Fraction, Grade, Item,
    ItemRequest, Side, Topic, TopicInfo, TrigSide, Visual,
};
pub use session::{
    AnswerFeedback, ChallengeSummary, JsonFileStore, MemoryStore, PlayMode, ProfileSnapshot,
    ProfileStore, Progress, Session, Step,
};

#[cfg(test)]
mod tests;
