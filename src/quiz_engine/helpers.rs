//! Shared builder functions that eliminate boilerplate across topic generators.
//!
//! Every topic generator assembles the same pieces: pick a variant family,
//! draw numbers, build the option set and wrap everything into an
//! [`ItemDraft`]. These helpers centralise that work so topic files focus on
//! the maths only.

use rand::Rng;

use crate::quiz_engine::models::{AnswerValue, Choice, ItemDraft, Visual};

/// Uniformly pick one element. `items` must be non-empty; every call site
/// passes a literal table.
pub fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Integer answers from plain numbers.
pub fn ints(values: &[i64]) -> Vec<AnswerValue> {
    values.iter().map(|v| AnswerValue::Int(*v)).collect()
}

/// Text answers from string slices.
pub fn texts(values: &[&str]) -> Vec<AnswerValue> {
    values.iter().map(|v| AnswerValue::text(*v)).collect()
}

/// Assemble the draft returned by every topic generator.
pub fn draft(
    variant: &str, prompt: String, choice: Choice,
    explanation: String, visual: Option<Visual>,
) -> ItemDraft {
    ItemDraft {
        variant: variant.to_string(),
        prompt,
        choice,
        explanation,
        visual,
    }
}
