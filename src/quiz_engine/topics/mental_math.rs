use rand::Rng;

use crate::quiz_engine::{
    distractors::{synthesize, with_candidates, NoiseMode},
    helpers::{draft, ints, pick},
    models::{AnswerValue, Difficulty, Grade, ItemDraft},
};

const PERCENTS: [i64; 4] = [10, 20, 25, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    AddSubtract,
    TimesTable,
    Percentage,
    MixedOps,
}

fn families(difficulty: Difficulty) -> &'static [Family] {
    match difficulty.level() {
        1..=3 => &[Family::AddSubtract],
        4..=6 => &[Family::AddSubtract, Family::TimesTable],
        _ => &[Family::TimesTable, Family::Percentage, Family::MixedOps],
    }
}

pub fn generate<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    match *pick(rng, families(difficulty)) {
        Family::AddSubtract => add_subtract(rng, grade),
        Family::TimesTable  => times_table(rng),
        Family::Percentage  => percentage(rng),
        Family::MixedOps    => mixed_ops(rng),
    }
}

fn add_subtract<R: Rng>(rng: &mut R, grade: Grade) -> ItemDraft {
    let max = if grade.value() <= 4 { 50 } else { 99 };
    let a = rng.gen_range(11..=max);
    let b = rng.gen_range(5..=a.min(49));
    let (sign, answer) = if rng.gen_bool(0.5) { ("+", a + b) } else { ("-", a - b) };
    draft(
        "MentalMath:AddSubtract",
        format!("Quick! {a} {sign} {b} = ?"),
        synthesize(rng, AnswerValue::Int(answer), NoiseMode::NonNegative, None),
        format!("Split {b} into tens and ones and work from {a}: {a} {sign} {b} = {answer}."),
        None,
    )
}

fn times_table<R: Rng>(rng: &mut R) -> ItemDraft {
    let a = rng.gen_range(2..=12i64);
    let b = rng.gen_range(2..=12i64);
    let answer = a * b;
    draft(
        "MentalMath:TimesTable",
        format!("Quick! {a} × {b} = ?"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[a * (b + 1), a + b, (a - 1) * b]), NoiseMode::NonNegative, None),
        format!("{a} groups of {b}: {a} × {b} = {answer}."),
        None,
    )
}

fn percentage<R: Rng>(rng: &mut R) -> ItemDraft {
    let pct = *pick(rng, &PERCENTS);
    // Multiples of 20 keep every listed percentage whole.
    let base = 20 * rng.gen_range(1..=20i64);
    let answer = base * pct / 100;
    let parts = 100 / pct;
    draft(
        "MentalMath:Percentage",
        format!("What is {pct}% of {base}?"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[base * pct / 10, base - answer, pct]), NoiseMode::NonNegative, None),
        format!("{pct}% is 1/{parts} of the whole, and {base} ÷ {parts} = {answer}."),
        None,
    )
}

fn mixed_ops<R: Rng>(rng: &mut R) -> ItemDraft {
    let a = rng.gen_range(2..=9i64);
    let b = rng.gen_range(2..=9i64);
    let c = rng.gen_range(1..=20i64);
    let product = a * b;
    let answer = product + c;
    draft(
        "MentalMath:MixedOps",
        format!("Work out: {a} × {b} + {c}"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[a * (b + c), a + b + c]), NoiseMode::Integer, None),
        format!("Multiply before adding: {a} × {b} = {product}, then {product} + {c} = {answer}."),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn percentages_are_whole_numbers() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let d = percentage(&mut rng);
            let nums: Vec<i64> = d
                .prompt
                .split(|c: char| !c.is_ascii_digit())
                .filter(|s| !s.is_empty())
                .map(|s| s.parse().unwrap())
                .collect();
            let (pct, base) = (nums[0], nums[1]);
            assert_eq!(base * pct % 100, 0);
            assert_eq!(d.choice.correct(), &AnswerValue::Int(base * pct / 100));
        }
    }

    #[test]
    fn mixed_ops_respects_precedence() {
        let mut rng = StdRng::seed_from_u64(14);
        let d = mixed_ops(&mut rng);
        let nums: Vec<i64> = d
            .prompt
            .split(|c: char| !c.is_ascii_digit())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(d.choice.correct(), &AnswerValue::Int(nums[0] * nums[1] + nums[2]));
    }

    #[test]
    fn low_difficulty_stays_with_add_and_subtract() {
        let mut rng = StdRng::seed_from_u64(15);
        for _ in 0..30 {
            let d = generate(&mut rng, Grade::new(3).unwrap(), Difficulty::new(2));
            assert_eq!(d.variant, "MentalMath:AddSubtract");
        }
    }
}
