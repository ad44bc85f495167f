use rand::{seq::SliceRandom, Rng};

use crate::quiz_engine::{
    distractors::{with_candidates, NoiseMode},
    helpers::{draft, pick},
    models::{AnswerValue, Difficulty, Grade, ItemDraft, Visual},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Identify,
    Compare,
    Add,
}

fn families(difficulty: Difficulty) -> &'static [Family] {
    match difficulty.level() {
        1..=3 => &[Family::Identify],
        4..=6 => &[Family::Identify, Family::Compare],
        _ => &[Family::Compare, Family::Add],
    }
}

pub fn generate<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    match *pick(rng, families(difficulty)) {
        Family::Identify => identify(rng, grade, difficulty),
        Family::Compare  => compare(rng),
        Family::Add      => add(rng),
    }
}

fn identify<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    let max_den = if difficulty.level() <= 3 { 6 } else { 10 };
    let den = rng.gen_range(2..=max_den);
    let num = rng.gen_range(1..den);
    let answer = AnswerValue::fraction(num, den);
    let candidates = vec![
        AnswerValue::fraction(den - num, den),
        AnswerValue::fraction(num, den + 1),
        AnswerValue::fraction(den, num),
    ];
    let visual = if grade.value() <= 4 {
        Visual::FractionBar { num: num as u32, den: den as u32 }
    } else {
        Visual::PieChart { num: num as u32, den: den as u32 }
    };
    draft(
        "Fractions:Identify",
        "What fraction of the shape is shaded?".to_string(),
        with_candidates(rng, answer.clone(), candidates, NoiseMode::Symbolic, None),
        format!("The shape has {den} equal parts and {num} are shaded, so the fraction is {answer}."),
        Some(visual),
    )
}

fn compare<R: Rng>(rng: &mut R) -> ItemDraft {
    let den = rng.gen_range(5..=12i64);
    let numerators: Vec<i64> = (1..den).collect();
    let picked: Vec<i64> = numerators.choose_multiple(rng, 4).copied().collect();
    let largest = rng.gen_bool(0.5);
    let target = if largest { picked.iter().max() } else { picked.iter().min() };
    let target = target.copied().unwrap_or(1);
    let answer = AnswerValue::fraction(target, den);
    let candidates = picked
        .iter()
        .filter(|n| **n != target)
        .map(|n| AnswerValue::fraction(*n, den))
        .collect();
    let (word, side) = if largest { ("largest", "biggest") } else { ("smallest", "smallest") };
    draft(
        "Fractions:Compare",
        format!("Which fraction is the {word}?"),
        with_candidates(rng, answer.clone(), candidates, NoiseMode::Symbolic, None),
        format!("All four have denominator {den}, so compare numerators: {answer} has the {side} numerator."),
        None,
    )
}

fn add<R: Rng>(rng: &mut R) -> ItemDraft {
    let den = rng.gen_range(4..=12i64);
    let a = rng.gen_range(1..=den - 2);
    // a + b stays below the denominator, so the sum is a proper fraction.
    let b = rng.gen_range(1..=den - 1 - a);
    let sum = a + b;
    let answer = AnswerValue::fraction(sum, den);
    let candidates = vec![
        AnswerValue::fraction(sum, 2 * den),
        AnswerValue::fraction(sum + 1, den),
        AnswerValue::fraction(a * b, den),
    ];
    draft(
        "Fractions:Add",
        format!("Work out: {a}/{den} + {b}/{den}"),
        with_candidates(rng, answer.clone(), candidates, NoiseMode::Symbolic, None),
        format!("The denominators match, so add the numerators: {a} + {b} = {sum}, giving {answer}."),
        None,
    )
}
