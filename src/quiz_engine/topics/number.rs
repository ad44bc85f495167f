use rand::Rng;

use crate::quiz_engine::{
    distractors::{synthesize, true_false, with_candidates, NoiseMode},
    helpers::{draft, ints, pick},
    models::{AnswerValue, Difficulty, Grade, ItemDraft},
};

const SIGNS: [&str; 4] = ["+", "-", "×", "="];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Addition,
    UndoAddition,
    TrueFalse,
    MissingOperator,
    Chain,
    Multiple,
    Remainder,
    Power,
}

fn families(grade: Grade, difficulty: Difficulty) -> &'static [Family] {
    match grade.value() {
        1..=2 => &[Family::Addition, Family::UndoAddition],
        3 if difficulty.level() <= 3 => &[Family::TrueFalse, Family::Chain],
        3 => &[Family::TrueFalse, Family::MissingOperator, Family::Chain],
        4..=5 if difficulty.level() > 5 => &[Family::Remainder],
        4..=5 => &[Family::Multiple],
        _ => &[Family::Power],
    }
}

pub fn generate<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    match *pick(rng, families(grade, difficulty)) {
        Family::Addition        => addition(rng, difficulty),
        Family::UndoAddition    => undo_addition(rng, difficulty),
        Family::TrueFalse       => true_or_false(rng),
        Family::MissingOperator => missing_operator(rng),
        Family::Chain           => chain(rng),
        Family::Multiple        => multiple(rng),
        Family::Remainder       => remainder(rng),
        Family::Power           => power(rng, difficulty),
    }
}

fn addition<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ItemDraft {
    let a = rng.gen_range(1..=10 + 5 * difficulty.level() as i64);
    let b = rng.gen_range(1..=10);
    let sum = a + b;
    draft(
        "Number:Addition",
        format!("{a} + {b} = ?"),
        synthesize(rng, AnswerValue::Int(sum), NoiseMode::NonNegative, None),
        format!("Start at {a} and count on {b} more: {a} + {b} = {sum}."),
        None,
    )
}

fn undo_addition<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ItemDraft {
    let a = rng.gen_range(1..=10 + 5 * difficulty.level() as i64);
    let b = rng.gen_range(1..=10);
    let total = a + b;
    draft(
        "Number:UndoAddition",
        format!("{total} - {b} = ?"),
        synthesize(rng, AnswerValue::Int(a), NoiseMode::NonNegative, None),
        format!("{total} is {a} + {b}. Taking the {b} away again undoes the addition: {total} - {b} = {a}."),
        None,
    )
}

fn true_or_false<R: Rng>(rng: &mut R) -> ItemDraft {
    let a = rng.gen_range(10..=30i64);
    let b = rng.gen_range(1..=9i64);
    let c = rng.gen_range(10..=40i64);
    let total = a + b;
    let (symbol, holds) = if rng.gen_bool(0.5) { (">", total > c) } else { ("<", total < c) };
    let verdict = if holds { "True" } else { "False" };
    draft(
        "Number:TrueFalse",
        format!("True or False: {a} + {b} {symbol} {c}?"),
        true_false(holds),
        format!(
            "{a} + {b} is {total}. Is {total} {symbol} {c}? {}, so the statement is {verdict}.",
            if holds { "Yes" } else { "No" }
        ),
        None,
    )
}

fn missing_operator<R: Rng>(rng: &mut R) -> ItemDraft {
    let a = rng.gen_range(2..=9i64);
    let mut b = rng.gen_range(2..=9i64);
    // 2 + 2 == 2 × 2 would make two signs correct.
    if a == 2 && b == 2 {
        b = 3;
    }
    let (sign, result) = match rng.gen_range(0..3) {
        0 => ("+", a + b),
        1 => ("-", a - b),
        _ => ("×", a * b),
    };
    draft(
        "Number:MissingOperator",
        format!("Choose the missing sign: {a} ? {b} = {result}"),
        synthesize(rng, AnswerValue::text(sign), NoiseMode::Symbolic, Some(&SIGNS[..])),
        format!("{a} {sign} {b} equals {result}, so the missing sign is {sign}."),
        None,
    )
}

fn chain<R: Rng>(rng: &mut R) -> ItemDraft {
    let a = rng.gen_range(10..=20i64);
    let b = rng.gen_range(1..=9i64);
    let c = rng.gen_range(1..=9i64);
    let partial = a + b;
    let answer = partial - c;
    draft(
        "Number:Chain",
        format!("Solve: {a} + {b} - {c} = ?"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[a + b + c, partial]), NoiseMode::Integer, None),
        format!("First: {a} + {b} = {partial}. Then: {partial} - {c} = {answer}."),
        None,
    )
}

fn multiple<R: Rng>(rng: &mut R) -> ItemDraft {
    let a = rng.gen_range(3..=12i64);
    let k = rng.gen_range(2..=5i64);
    let answer = a * k;
    draft(
        "Number:Multiple",
        format!("Which number is a multiple of {a}?"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[answer + 1, answer - 1, answer + 2]), NoiseMode::NonNegative, None),
        format!("{answer} = {a} × {k}, so {answer} is a multiple of {a}."),
        None,
    )
}

fn remainder<R: Rng>(rng: &mut R) -> ItemDraft {
    let a = rng.gen_range(4..=12i64);
    let b = rng.gen_range(2..=6i64);
    let dividend = a * b + 1;
    let product = a * b;
    let rem = dividend % a;
    draft(
        "Number:Remainder",
        format!("What is the remainder of {dividend} ÷ {a}?"),
        with_candidates(rng, AnswerValue::Int(rem), ints(&[0, 2, b, a - 1]), NoiseMode::NonNegative, None),
        format!("{a} × {b} = {product} and {dividend} - {product} = {rem}, so {dividend} ÷ {a} is {b} remainder {rem}."),
        None,
    )
}

fn power<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ItemDraft {
    let (base, exp) = if difficulty.level() >= 7 {
        (rng.gen_range(2..=9i64), rng.gen_range(2..=3u32))
    } else {
        (rng.gen_range(2..=5i64), rng.gen_range(2..=4u32))
    };
    let answer = base.pow(exp);
    let product = vec![base.to_string(); exp as usize].join(" × ");
    draft(
        "Number:Power",
        format!("Evaluate: {base}^{exp}"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[base * exp as i64]), NoiseMode::Integer, None),
        format!("{base}^{exp} means {base} multiplied by itself {exp} times: {product} = {answer}."),
        None,
    )
}
