//! Stateful play on top of the generators.
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `progress`  | Score, coins, streak and the adaptive difficulty rule |
//! | `challenge` | Five-item mixed-topic run and its completion reward |
//! | `store`     | Profile snapshot and the `ProfileStore` backends |
//! | `engine`    | `Session`: start, answer, advance, unlock, persist |

pub mod challenge;
pub mod engine;
pub mod progress;
pub mod store;

pub use challenge::{ChallengeRun, ChallengeState, ChallengeStep, ChallengeSummary};
pub use engine::{AnswerFeedback, Session, Step};
pub use progress::{AnswerOutcome, PlayMode, Progress};
pub use store::{JsonFileStore, MemoryStore, ProfileSnapshot, ProfileStore};
