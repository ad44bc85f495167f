use rand::Rng;

use crate::quiz_engine::{
    distractors::{synthesize, with_candidates, NoiseMode},
    helpers::{draft, ints, pick, texts},
    models::{AnswerValue, Difficulty, Grade, ItemDraft, Visual},
};

const LABELS: [&str; 4] = ["Red", "Blue", "Green", "Yellow"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    MostVotes,
    ReadValue,
    SumTwo,
    Difference,
    Total,
}

fn families(grade: Grade, difficulty: Difficulty) -> &'static [Family] {
    let level = difficulty.level();
    if grade.value() <= 3 {
        if level >= 4 {
            &[Family::MostVotes, Family::ReadValue, Family::SumTwo]
        } else {
            &[Family::MostVotes, Family::ReadValue]
        }
    } else if level >= 6 {
        &[Family::Difference, Family::Total]
    } else {
        &[Family::Difference]
    }
}

/// One survey: a bar per label, each between 2 and 10 votes.
struct Survey {
    values: [i64; 4],
}

impl Survey {
    fn draw<R: Rng>(rng: &mut R) -> Self {
        let mut values = [0; 4];
        for v in values.iter_mut() {
            *v = rng.gen_range(2..=10);
        }
        Survey { values }
    }

    fn visual(&self) -> Visual {
        Visual::BarGraph {
            labels: LABELS.iter().map(|l| l.to_string()).collect(),
            values: self.values.iter().map(|v| *v as u32).collect(),
        }
    }
}

pub fn generate<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    let survey = Survey::draw(rng);
    match *pick(rng, families(grade, difficulty)) {
        Family::MostVotes  => most_votes(rng, survey),
        Family::ReadValue  => read_value(rng, survey),
        Family::SumTwo     => sum_two(rng, survey),
        Family::Difference => difference(rng, survey),
        Family::Total      => total(rng, survey),
    }
}

/// Two distinct bar indices.
fn two_bars<R: Rng>(rng: &mut R) -> (usize, usize) {
    let first = rng.gen_range(0..LABELS.len());
    let second = (first + rng.gen_range(1..LABELS.len())) % LABELS.len();
    (first, second)
}

fn most_votes<R: Rng>(rng: &mut R, mut survey: Survey) -> ItemDraft {
    let max = survey.values.iter().copied().max().unwrap_or(0);
    let top = survey.values.iter().position(|v| *v == max).unwrap_or(0);
    // A tie would give two correct colours.
    if survey.values.iter().filter(|v| **v == max).count() > 1 {
        survey.values[top] += 1;
    }
    let votes = survey.values[top];
    let winner = LABELS[top];
    let others: Vec<&str> = LABELS.iter().copied().filter(|l| *l != winner).collect();
    draft(
        "Data:MostVotes",
        "Which colour has the most votes?".to_string(),
        with_candidates(rng, AnswerValue::text(winner), texts(&others), NoiseMode::Symbolic, Some(&LABELS[..])),
        format!("Look for the tallest bar: {winner} has {votes} votes, more than any other colour."),
        Some(survey.visual()),
    )
}

fn read_value<R: Rng>(rng: &mut R, survey: Survey) -> ItemDraft {
    let idx = rng.gen_range(0..LABELS.len());
    let (label, answer) = (LABELS[idx], survey.values[idx]);
    draft(
        "Data:ReadValue",
        format!("How many votes did {label} get?"),
        synthesize(rng, AnswerValue::Int(answer), NoiseMode::NonNegative, None),
        format!("The top of the {label} bar lines up with {answer}."),
        Some(survey.visual()),
    )
}

fn sum_two<R: Rng>(rng: &mut R, survey: Survey) -> ItemDraft {
    let (i, j) = two_bars(rng);
    let (a, b) = (survey.values[i], survey.values[j]);
    let answer = a + b;
    draft(
        "Data:SumTwo",
        format!("How many people chose {} and {} combined?", LABELS[i], LABELS[j]),
        synthesize(rng, AnswerValue::Int(answer), NoiseMode::NonNegative, None),
        format!("Add the two bars: {a} + {b} = {answer}."),
        Some(survey.visual()),
    )
}

fn difference<R: Rng>(rng: &mut R, survey: Survey) -> ItemDraft {
    let i = rng.gen_range(0..LABELS.len());
    let j = (i + 1) % LABELS.len();
    let (a, b) = (survey.values[i], survey.values[j]);
    let signed = a - b;
    let answer = signed.abs();
    let (word, larger, smaller) = if signed < 0 { ("fewer", b, a) } else { ("more", a, b) };
    draft(
        "Data:Difference",
        format!("How many {word} votes did {} get than {}?", LABELS[i], LABELS[j]),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[a + b]), NoiseMode::NonNegative, None),
        format!(
            "Compare the heights: {} has {a} and {} has {b}. {larger} - {smaller} = {answer}.",
            LABELS[i], LABELS[j]
        ),
        Some(survey.visual()),
    )
}

fn total<R: Rng>(rng: &mut R, survey: Survey) -> ItemDraft {
    let answer: i64 = survey.values.iter().sum();
    let working = survey.values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" + ");
    let largest = survey.values.iter().copied().max().unwrap_or(0);
    draft(
        "Data:Total",
        "How many votes were cast altogether?".to_string(),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[largest * 4]), NoiseMode::NonNegative, None),
        format!("Add every bar: {working} = {answer}."),
        Some(survey.visual()),
    )
}
