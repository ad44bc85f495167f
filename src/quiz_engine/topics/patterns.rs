use rand::{seq::SliceRandom, Rng};

use crate::quiz_engine::{
    distractors::{with_candidates, NoiseMode},
    helpers::{draft, ints, pick},
    models::{AnswerValue, Difficulty, Grade, ItemDraft, Visual},
};

const SHAPES: [&str; 4] = ["Circle", "Square", "Triangle", "Star"];
const SHOWN_TERMS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    ShapeRepeat,
    Arithmetic,
    NthTerm,
}

fn families(grade: Grade, difficulty: Difficulty) -> &'static [Family] {
    let level = difficulty.level();
    if grade.value() <= 2 && level <= 3 {
        &[Family::ShapeRepeat, Family::Arithmetic]
    } else if level >= 7 {
        &[Family::Arithmetic, Family::NthTerm]
    } else {
        &[Family::Arithmetic]
    }
}

pub fn generate<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    match *pick(rng, families(grade, difficulty)) {
        Family::ShapeRepeat => shape_repeat(rng),
        Family::Arithmetic  => arithmetic(rng, difficulty),
        Family::NthTerm     => nth_term(rng),
    }
}

fn shape_repeat<R: Rng>(rng: &mut R) -> ItemDraft {
    let unit_len = rng.gen_range(2..=3);
    let unit: Vec<&str> = SHAPES.choose_multiple(rng, unit_len).copied().collect();
    let shown = 2 * unit_len + rng.gen_range(0..unit_len);
    let sequence: Vec<String> = (0..shown).map(|i| unit[i % unit_len].to_string()).collect();
    let next = unit[shown % unit_len];
    let repeating = unit.join(", ");
    draft(
        "Patterns:ShapeRepeat",
        "What shape comes next in the pattern?".to_string(),
        with_candidates(rng, AnswerValue::text(next), Vec::new(), NoiseMode::Symbolic, Some(&SHAPES[..])),
        format!("The pattern repeats {repeating}, so the next shape is {next}."),
        Some(Visual::ShapePattern { sequence }),
    )
}

fn step_for<R: Rng>(rng: &mut R, difficulty: Difficulty) -> i64 {
    match difficulty.level() {
        1..=3 => rng.gen_range(1..=5),
        4..=6 => rng.gen_range(2..=10),
        // Descending sequences from here on.
        _ => {
            let step = rng.gen_range(3..=12);
            if rng.gen_bool(0.5) { step } else { -step }
        }
    }
}

fn arithmetic<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ItemDraft {
    let step = step_for(rng, difficulty);
    let start = rng.gen_range(1..=20) + if step < 0 { 60 } else { 0 };
    let terms: Vec<i64> = (0..SHOWN_TERMS).map(|k| start + k * step).collect();
    let last = start + (SHOWN_TERMS - 1) * step;
    let answer = last + step;
    let listed = terms.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ");
    draft(
        "Patterns:Arithmetic",
        format!("What comes next: {listed}, ...?"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[answer + 1, last + 2 * step, last - step]), NoiseMode::Integer, None),
        format!("Each term changes by {step}, so the next term is {last} + ({step}) = {answer}."),
        None,
    )
}

fn nth_term<R: Rng>(rng: &mut R) -> ItemDraft {
    let start = rng.gen_range(1..=10i64);
    let step = rng.gen_range(2..=9i64);
    let n = rng.gen_range(8..=15i64);
    let answer = start + (n - 1) * step;
    let listed = (0..3).map(|k| (start + k * step).to_string()).collect::<Vec<_>>().join(", ");
    draft(
        "Patterns:NthTerm",
        format!("The sequence starts {listed}, ... What is term number {n}?"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[start + n * step, n * step]), NoiseMode::Integer, None),
        format!("Term n = first + (n - 1) × step = {start} + {} × {step} = {answer}.", n - 1),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shape_pattern_continues_the_unit() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..50 {
            let d = shape_repeat(&mut rng);
            let sequence = match &d.visual {
                Some(Visual::ShapePattern { sequence }) => sequence.clone(),
                other => panic!("unexpected visual {other:?}"),
            };
            // Find the smallest period of the shown sequence and extend it.
            let period = (2..=3)
                .find(|p| sequence.iter().enumerate().all(|(i, s)| *s == sequence[i % p]))
                .unwrap();
            let expected = &sequence[sequence.len() % period];
            assert_eq!(d.choice.correct(), &AnswerValue::text(expected.as_str()));
        }
    }

    #[test]
    fn arithmetic_next_term_follows_the_step() {
        let mut rng = StdRng::seed_from_u64(11);
        for level in [1, 5, 9] {
            for _ in 0..30 {
                let d = arithmetic(&mut rng, Difficulty::new(level));
                let body = d.prompt.trim_start_matches("What comes next: ").trim_end_matches(", ...?");
                let terms: Vec<i64> = body.split(", ").map(|t| t.parse().unwrap()).collect();
                let step = terms[1] - terms[0];
                assert_eq!(d.choice.correct(), &AnswerValue::Int(terms[3] + step));
            }
        }
    }

    #[test]
    fn nth_term_only_at_high_difficulty() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..30 {
            let d = generate(&mut rng, Grade::new(5).unwrap(), Difficulty::new(4));
            assert_eq!(d.variant, "Patterns:Arithmetic");
        }
    }
}
