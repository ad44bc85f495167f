use rand::Rng;

use crate::quiz_engine::{
    distractors::{with_candidates, NoiseMode},
    helpers::{draft, ints, pick},
    models::{AnswerValue, Difficulty, Grade, ItemDraft},
    numeric::signed_term,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Simplify,
    Expand,
    Factor,
    TwoSided,
    Substitute,
}

fn families(grade: Grade, difficulty: Difficulty) -> &'static [Family] {
    let g = grade.value();
    let d = difficulty.level();
    if g <= 7 && d < 5 {
        &[Family::Simplify]
    } else if d < 7 {
        &[Family::Expand, Family::Factor]
    } else if g <= 6 {
        &[Family::Expand, Family::Factor, Family::Substitute]
    } else {
        &[Family::Expand, Family::Factor, Family::TwoSided, Family::Substitute]
    }
}

pub fn generate<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    match *pick(rng, families(grade, difficulty)) {
        Family::Simplify   => simplify(rng),
        Family::Expand     => expand(rng, difficulty),
        Family::Factor     => factor(rng),
        Family::TwoSided   => {
            let c = rng.gen_range(2..=5i64);
            let a = c + rng.gen_range(1..=3i64);
            let x = rng.gen_range(2..=8i64);
            let d = rng.gen_range(10..=30i64);
            two_sided_equation(rng, a, c, d, x)
        }
        Family::Substitute => substitute(rng, difficulty),
    }
}

/// `3x`, `x`, `-x`, `-2x`.
fn x_term(coefficient: i64) -> String {
    match coefficient {
        1 => "x".to_string(),
        -1 => "-x".to_string(),
        c => format!("{c}x"),
    }
}

fn simplify<R: Rng>(rng: &mut R) -> ItemDraft {
    let c = rng.gen_range(2..=9i64);
    let d = rng.gen_range(2..=5i64);
    let sum = c + d;
    let answer = format!("{sum}x");
    let candidates = vec![
        AnswerValue::Text(format!("{}x", c * d)),
        AnswerValue::Text(format!("{sum}x²")),
        AnswerValue::Text(format!("{sum}")),
        AnswerValue::Text(format!("{c}x²")),
    ];
    draft(
        "Algebra:Simplify",
        format!("Simplify: {c}x + {d}x"),
        with_candidates(rng, AnswerValue::Text(answer.clone()), candidates, NoiseMode::Symbolic, None),
        format!("{c}x and {d}x are like terms, so add the coefficients: {c} + {d} = {sum}, giving {answer}."),
        None,
    )
}

fn expand<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ItemDraft {
    let a = rng.gen_range(2..=5i64);
    let mut b = rng.gen_range(1..=10i64);
    if difficulty.level() >= 8 && rng.gen_bool(0.5) {
        b = -b;
    }
    let ab = a * b;
    let answer = format!("{a}x{}", signed_term(ab));
    let candidates = vec![
        AnswerValue::Text(format!("{a}x{}", signed_term(b))),
        AnswerValue::Text(format!("{a}x{}", signed_term(-ab))),
        AnswerValue::Text(format!("x{}", signed_term(ab))),
        AnswerValue::Text(format!("{}x", a + b)),
    ];
    draft(
        "Algebra:Expand",
        format!("Expand: {a}(x{})", signed_term(b)),
        with_candidates(rng, AnswerValue::Text(answer.clone()), candidates, NoiseMode::Symbolic, None),
        format!("Multiply the term outside by each term inside: {a} · x = {a}x and {a} · {b} = {ab}, so the result is {answer}."),
        None,
    )
}

fn factor<R: Rng>(rng: &mut R) -> ItemDraft {
    let a = rng.gen_range(2..=6i64);
    let b = rng.gen_range(2..=6i64);
    let term = a * b;
    let answer = format!("{a}(x + {b})");
    let candidates = vec![
        AnswerValue::Text(format!("{b}(x + {a})")),
        AnswerValue::Text(format!("{a}(x - {b})")),
        AnswerValue::Text(format!("{a}x(1 + {b})")),
        AnswerValue::Text(format!("{term}(x + 1)")),
    ];
    draft(
        "Algebra:Factor",
        format!("Factorise: {a}x + {term}"),
        with_candidates(rng, AnswerValue::Text(answer.clone()), candidates, NoiseMode::Symbolic, None),
        format!("The highest common factor of {a}x and {term} is {a}. Taking it out: {a}x + {term} = {answer}."),
        None,
    )
}

/// `ax + b = cx + d` with the solution `x` chosen first; `b` is derived so the
/// equation holds exactly. Requires `a != c`.
pub fn two_sided_equation<R: Rng>(rng: &mut R, a: i64, c: i64, d: i64, x: i64) -> ItemDraft {
    let b = c * x + d - a * x;
    let lhs = format!("{}{}", x_term(a), signed_term(b));
    let rhs = format!("{}{}", x_term(c), signed_term(d));
    let diff = a - c;
    let moved = d - b;
    draft(
        "Algebra:TwoSided",
        format!("Solve: {lhs} = {rhs}"),
        with_candidates(rng, AnswerValue::Int(x), ints(&[moved, -x]), NoiseMode::Integer, None),
        format!(
            "Subtract {} from both sides: {}{} = {d}. Then {} = {moved}, so x = {x}.",
            x_term(c), x_term(diff), signed_term(b), x_term(diff)
        ),
        None,
    )
}

fn substitute<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ItemDraft {
    let x = rng.gen_range(2..=5i64);
    let p = if difficulty.level() >= 9 { rng.gen_range(2..=4i64) } else { 2 };
    let q = rng.gen_range(1..=9i64);
    let square = x * x;
    let scaled = p * square;
    let answer = scaled + q;
    draft(
        "Algebra:Substitute",
        format!("If x = {x}, evaluate {p}x² + {q}"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[p * x * 2 + q, (p * x) * (p * x) + q]), NoiseMode::Integer, None),
        format!("Square x first ({x}² = {square}), multiply by {p} ({scaled}), then add {q}: {answer}."),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn two_sided_equation_derives_consistent_constant() {
        let mut rng = StdRng::seed_from_u64(5);
        let d = two_sided_equation(&mut rng, 4, 2, 20, 5);
        assert_eq!(d.prompt, "Solve: 4x + 10 = 2x + 20");
        assert_eq!(d.choice.correct(), &AnswerValue::Int(5));
        assert_eq!(d.choice.options.len(), 4);
        let ints: Vec<i64> = d
            .choice
            .options
            .iter()
            .map(|o| match o {
                AnswerValue::Int(n) => *n,
                other => panic!("non-numeric option {other:?}"),
            })
            .collect();
        let mut unique = ints.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 4);
        assert!(d.explanation.contains("x = 5"));
    }

    #[test]
    fn two_sided_equation_handles_negative_and_zero_constants() {
        let mut rng = StdRng::seed_from_u64(6);
        // b = 2*3 + 10 - 7*3 = -5
        let d = two_sided_equation(&mut rng, 7, 2, 10, 3);
        assert_eq!(d.prompt, "Solve: 7x - 5 = 2x + 10");
        // b = 3*2 + 2 - 4*2 = 0
        let d = two_sided_equation(&mut rng, 4, 3, 2, 2);
        assert_eq!(d.prompt, "Solve: 4x = 3x + 2");
        assert_eq!(d.choice.correct(), &AnswerValue::Int(2));
    }

    #[test]
    fn generated_equations_always_balance() {
        let mut rng = StdRng::seed_from_u64(44);
        let grade = Grade::new(9).unwrap();
        let mut seen = 0;
        for _ in 0..300 {
            let d = generate(&mut rng, grade, Difficulty::new(9));
            if d.variant != "Algebra:TwoSided" {
                continue;
            }
            seen += 1;
            let x = match d.choice.correct() {
                AnswerValue::Int(n) => *n,
                other => panic!("unexpected answer {other:?}"),
            };
            let body = d.prompt.trim_start_matches("Solve: ");
            let (lhs, rhs) = body.split_once(" = ").unwrap();
            assert_eq!(eval_linear(lhs, x), eval_linear(rhs, x), "{}", d.prompt);
        }
        assert!(seen > 0);
    }

    /// Evaluate `ax + b` / `ax - b` / `ax` at `x`.
    fn eval_linear(side: &str, x: i64) -> i64 {
        let (coef, rest) = side.split_once('x').unwrap();
        let coef: i64 = match coef {
            "" => 1,
            "-" => -1,
            c => c.parse().unwrap(),
        };
        let rest = rest.trim();
        let constant = if rest.is_empty() {
            0
        } else {
            let (sign, n) = rest.split_once(' ').unwrap();
            let n: i64 = n.parse().unwrap();
            if sign == "-" { -n } else { n }
        };
        coef * x + constant
    }

    #[test]
    fn low_difficulty_in_lower_grades_simplifies() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let d = generate(&mut rng, Grade::new(6).unwrap(), Difficulty::new(2));
            assert_eq!(d.variant, "Algebra:Simplify");
            assert!(d.explanation.contains(&d.choice.correct().to_string()));
        }
    }

    #[test]
    fn options_stay_distinct_when_coefficients_collide() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..300 {
            for d in [simplify(&mut rng), factor(&mut rng), expand(&mut rng, Difficulty::new(10))] {
                let labels: Vec<String> = d.choice.options.iter().map(|o| o.to_string()).collect();
                let mut unique = labels.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), 4, "{labels:?}");
            }
        }
    }
}
