use rand::Rng;

use crate::quiz_engine::{
    distractors::{with_candidates, NoiseMode},
    helpers::{draft, ints},
    models::{AnswerValue, Difficulty, Grade, ItemDraft},
    numeric::rand_int,
};

pub fn generate<R: Rng>(rng: &mut R, _grade: Grade, difficulty: Difficulty) -> ItemDraft {
    let (x, y) = if difficulty.level() > 5 {
        loop {
            let x = rand_int(rng, -6, 6);
            let y = rand_int(rng, -6, 6);
            if x != 0 || y != 0 {
                break (x, y);
            }
        }
    } else {
        (rand_int(rng, 1, 5), rand_int(rng, 1, 5))
    };
    magnitude(rng, x, y)
}

/// Euclidean norm rounded to the nearest whole number.
pub fn magnitude<R: Rng>(rng: &mut R, x: i64, y: i64) -> ItemDraft {
    let (xx, yy) = (x * x, y * y);
    let sum = xx + yy;
    let answer = (sum as f64).sqrt().round() as i64;
    draft(
        "Vectors:Magnitude",
        format!("Find the magnitude of vector ({x}, {y}), to the nearest whole number."),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[x.abs() + y.abs()]), NoiseMode::NonNegative, None),
        format!("Magnitude = √(x² + y²) = √({xx} + {yy}) = √{sum} ≈ {answer}."),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn three_four_five() {
        let mut rng = StdRng::seed_from_u64(1);
        let d = magnitude(&mut rng, 3, 4);
        assert_eq!(d.choice.correct(), &AnswerValue::Int(5));
        assert!(d.choice.options.contains(&AnswerValue::Int(7)));
    }

    #[test]
    fn rounding_and_negative_components() {
        let mut rng = StdRng::seed_from_u64(2);
        // √8 ≈ 2.83
        assert_eq!(magnitude(&mut rng, -2, 2).choice.correct(), &AnswerValue::Int(3));
        // √5 ≈ 2.24
        assert_eq!(magnitude(&mut rng, 1, -2).choice.correct(), &AnswerValue::Int(2));
    }

    #[test]
    fn hard_vectors_are_never_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let d = generate(&mut rng, Grade::new(10).unwrap(), Difficulty::new(9));
            assert!(!d.prompt.contains("(0, 0)"));
        }
    }
}
