use rand::Rng;

use crate::quiz_engine::{
    distractors::{synthesize, with_candidates, NoiseMode},
    helpers::{draft, ints, pick},
    models::{AnswerValue, Difficulty, Grade, ItemDraft, TrigSide, Visual},
};

/// All items use the 30° angle, where sin = 0.5 exactly.
const ANGLE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Opposite,
    Hypotenuse,
}

fn families(difficulty: Difficulty) -> &'static [Family] {
    if difficulty.level() <= 5 {
        &[Family::Opposite]
    } else {
        &[Family::Opposite, Family::Hypotenuse]
    }
}

pub fn generate<R: Rng>(rng: &mut R, _grade: Grade, difficulty: Difficulty) -> ItemDraft {
    match *pick(rng, families(difficulty)) {
        Family::Opposite   => opposite(rng),
        Family::Hypotenuse => hypotenuse(rng),
    }
}

fn opposite<R: Rng>(rng: &mut R) -> ItemDraft {
    let hyp = rng.gen_range(10..=20i64);
    // hyp × 0.5, in tenths
    let answer = AnswerValue::Decimal(hyp * 5);
    draft(
        "Trigonometry:Opposite",
        format!("The hypotenuse is {hyp}. Find the opposite side x. (sin {ANGLE}° = 0.5)"),
        synthesize(rng, answer.clone(), NoiseMode::Decimal, None),
        format!("Opposite = hypotenuse × sin {ANGLE}° = {hyp} × 0.5 = {answer}."),
        Some(Visual::TrigTriangle { angle: ANGLE, hyp: Some(hyp), opp: None, adj: None, target: TrigSide::Opp }),
    )
}

fn hypotenuse<R: Rng>(rng: &mut R) -> ItemDraft {
    let opp = rng.gen_range(4..=15i64);
    let answer = opp * 2;
    draft(
        "Trigonometry:Hypotenuse",
        format!("The side opposite the {ANGLE}° angle is {opp}. Find the hypotenuse x. (sin {ANGLE}° = 0.5)"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[opp, opp + 2]), NoiseMode::Integer, None),
        format!("Hypotenuse = opposite ÷ sin {ANGLE}° = {opp} ÷ 0.5 = {answer}."),
        Some(Visual::TrigTriangle { angle: ANGLE, hyp: None, opp: Some(opp), adj: None, target: TrigSide::Hyp }),
    )
}
