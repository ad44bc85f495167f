//! Distractor synthesis: turns one correct value into a shuffled set of four
//! unique options.
//!
//! Candidates are drawn under a fixed attempt budget, so synthesis always
//! terminates. When the budget runs out before four unique values exist (tiny
//! vocabularies, answers near zero) the set is padded deterministically:
//! remaining vocabulary words for symbolic answers, small non-negative numbers
//! for numeric ones, neighbouring numerators for fractions.
//!
//! Uniqueness is by *value*: two fractions that reduce to the same number
//! (`1/3`, `2/6`) never appear together.

use rand::{seq::SliceRandom, Rng};
use tracing::trace;

use crate::quiz_engine::models::{AnswerValue, Choice};
use crate::quiz_engine::numeric::Fraction;

/// Size of every synthesized option set.
pub const OPTION_COUNT: usize = 4;
/// Random draws allowed before falling back to padding.
pub const MAX_ATTEMPTS: usize = 50;
/// Vocabulary used for symbolic answers when the caller supplies none.
pub const PLACEHOLDERS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseMode {
    /// correct ± noise, magnitude up to 20% of |correct|.
    Integer,
    /// correct + uniform [-1.0, 1.0] at one decimal place.
    Decimal,
    /// Like `Integer`, with negatives reflected to their absolute value.
    NonNegative,
    /// Uniform draw from a vocabulary of tokens.
    Symbolic,
}

/// Build four unique options around `correct` using only the noise model.
pub fn synthesize<R: Rng>(
    rng: &mut R,
    correct: AnswerValue,
    mode: NoiseMode,
    vocabulary: Option<&[&str]>,
) -> Choice {
    with_candidates(rng, correct, Vec::new(), mode, vocabulary)
}

/// Like [`synthesize`], but hand-picked distractors (typical mistakes) are
/// tried first, in order. Duplicates and values equivalent to the answer are
/// dropped, as are negative candidates under [`NoiseMode::NonNegative`]; any
/// shortfall is filled by the noise model.
pub fn with_candidates<R: Rng>(
    rng: &mut R,
    correct: AnswerValue,
    candidates: Vec<AnswerValue>,
    mode: NoiseMode,
    vocabulary: Option<&[&str]>,
) -> Choice {
    let vocabulary = vocabulary.unwrap_or(&PLACEHOLDERS);
    let mut pool = vec![correct.clone()];

    for candidate in candidates {
        if pool.len() == OPTION_COUNT {
            break;
        }
        if mode == NoiseMode::NonNegative && is_negative(&candidate) {
            continue;
        }
        push_unique(&mut pool, candidate);
    }

    let mut attempts = 0;
    while pool.len() < OPTION_COUNT && attempts < MAX_ATTEMPTS {
        attempts += 1;
        if let Some(candidate) = draw(rng, &correct, mode, vocabulary) {
            push_unique(&mut pool, candidate);
        }
    }

    if pool.len() < OPTION_COUNT {
        trace!(?mode, found = pool.len(), "distractor budget exhausted, padding");
        pad(rng, &mut pool, mode, vocabulary);
    }

    let distractors = pool.split_off(1);
    place(rng, correct, distractors)
}

/// Two-option item with a fixed `["True", "False"]` order.
pub fn true_false(statement_holds: bool) -> Choice {
    Choice {
        options: vec![AnswerValue::text("True"), AnswerValue::text("False")],
        correct_index: if statement_holds { 0 } else { 1 },
    }
}

/// Insert `correct` at a uniform position among the shuffled distractors.
fn place<R: Rng>(rng: &mut R, correct: AnswerValue, mut distractors: Vec<AnswerValue>) -> Choice {
    distractors.shuffle(rng);
    let correct_index = rng.gen_range(0..=distractors.len());
    distractors.insert(correct_index, correct);
    Choice { options: distractors, correct_index }
}

fn push_unique(pool: &mut Vec<AnswerValue>, candidate: AnswerValue) {
    if !pool.iter().any(|existing| existing.equivalent(&candidate)) {
        pool.push(candidate);
    }
}

fn is_negative(value: &AnswerValue) -> bool {
    match value {
        AnswerValue::Int(n) | AnswerValue::Decimal(n) => *n < 0,
        _ => false,
    }
}

/// Noise span for an integer answer: `max(1, round(0.2 * |c|))`, or 5 at zero.
pub fn noise_range(correct: i64) -> i64 {
    if correct == 0 {
        5
    } else {
        ((correct.abs() as f64 * 0.2).round() as i64).max(1)
    }
}

fn integer_noise<R: Rng>(rng: &mut R, correct: i64) -> i64 {
    let magnitude = rng.gen_range(1..=noise_range(correct));
    if rng.gen_bool(0.5) { magnitude } else { -magnitude }
}

fn draw<R: Rng>(
    rng: &mut R,
    correct: &AnswerValue,
    mode: NoiseMode,
    vocabulary: &[&str],
) -> Option<AnswerValue> {
    match (mode, correct) {
        (NoiseMode::Integer, AnswerValue::Int(c)) => {
            Some(AnswerValue::Int(c + integer_noise(rng, *c)))
        }
        (NoiseMode::NonNegative, AnswerValue::Int(c)) => {
            Some(AnswerValue::Int((c + integer_noise(rng, *c)).abs()))
        }
        (NoiseMode::Decimal, AnswerValue::Decimal(tenths)) => {
            Some(AnswerValue::Decimal(tenths + rng.gen_range(-10..=10)))
        }
        (NoiseMode::Symbolic, AnswerValue::Text(_)) => {
            vocabulary.choose(rng).map(|word| AnswerValue::text(*word))
        }
        _ => None,
    }
}

fn pad<R: Rng>(rng: &mut R, pool: &mut Vec<AnswerValue>, mode: NoiseMode, vocabulary: &[&str]) {
    let correct = pool[0].clone();
    match (&correct, mode) {
        (AnswerValue::Fraction(frac), _) => {
            let mut k = 1;
            while pool.len() < OPTION_COUNT {
                push_unique(pool, AnswerValue::Fraction(Fraction::new(frac.num + k, frac.den)));
                k += 1;
            }
        }
        (AnswerValue::Text(_), _) | (_, NoiseMode::Symbolic) => {
            for word in vocabulary.iter().chain(PLACEHOLDERS.iter()) {
                if pool.len() == OPTION_COUNT {
                    break;
                }
                push_unique(pool, AnswerValue::text(*word));
            }
            let mut n = 1;
            while pool.len() < OPTION_COUNT {
                push_unique(pool, AnswerValue::Text(format!("Option {}", n)));
                n += 1;
            }
        }
        _ => {
            let as_value = |n: i64| match correct {
                AnswerValue::Decimal(_) => AnswerValue::Decimal(n * 10),
                _ => AnswerValue::Int(n),
            };
            let mut attempts = 0;
            while pool.len() < OPTION_COUNT && attempts < MAX_ATTEMPTS {
                attempts += 1;
                push_unique(pool, as_value(rng.gen_range(0..=100)));
            }
            let mut n = 0;
            while pool.len() < OPTION_COUNT {
                push_unique(pool, as_value(n));
                n += 1;
            }
        }
    }
}
