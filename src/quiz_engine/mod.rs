//! Item generation: numbers, distractors, topic generators and the curriculum.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: grade, difficulty, topics, answer values, visuals, items |
//! | `numeric`     | Bounded random integers, gcd, fractions, half-unit formatting |
//! | `distractors` | Four unique options around a correct value, with bounded retries |
//! | `helpers`     | Shared builder functions that eliminate boilerplate across topics |
//! | `curriculum`  | Topic → grade range and tile metadata |
//! | `generator`   | `generate_item()` and the per-topic dispatch |
//! | `topics`      | 12 topic generators |

pub mod curriculum;
pub mod distractors;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod numeric;
pub mod topics;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_item` without reaching into sub-modules.
pub use curriculum::{eligible_topics, TopicInfo};
pub use generator::{generate_item, generate_with};
pub use models::{
    AnswerValue, Difficulty, Grade, Item, ItemRequest, Side, Topic, TrigSide, Visual,
};
pub use numeric::Fraction;
