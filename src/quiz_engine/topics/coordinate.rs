use rand::Rng;

use crate::quiz_engine::{
    distractors::{with_candidates, NoiseMode},
    helpers::draft,
    models::{AnswerValue, Difficulty, Grade, ItemDraft, Visual},
    numeric::{format_half, rand_int},
};

/// `(a, b)` from doubled coordinates, so half-units print exactly.
fn point(doubled_x: i64, doubled_y: i64) -> AnswerValue {
    AnswerValue::Text(format!("({}, {})", format_half(doubled_x), format_half(doubled_y)))
}

pub fn generate<R: Rng>(rng: &mut R, _grade: Grade, difficulty: Difficulty) -> ItemDraft {
    // Harder items leave the first quadrant; the grid spans -10..=10.
    let (lo, hi) = if difficulty.level() >= 6 { (-5, 5) } else { (1, 5) };
    let x1 = rand_int(rng, lo, hi);
    let y1 = rand_int(rng, lo, hi);
    let x2 = x1 + rand_int(rng, 2, 4);
    let y2 = y1 + rand_int(rng, 2, 4);
    midpoint(rng, x1, y1, x2, y2)
}

pub fn midpoint<R: Rng>(rng: &mut R, x1: i64, y1: i64, x2: i64, y2: i64) -> ItemDraft {
    let (sx, sy) = (x1 + x2, y1 + y2);
    let answer = point(sx, sy);
    let candidates = vec![
        point(2 * sx, 2 * sy),
        point(2 * (x2 - x1), 2 * (y2 - y1)),
        point(sx, 2 * sy),
        point(sy, sx),
        // Off-by-one neighbours; always distinct from the answer and each other.
        point(sx + 2, sy),
        point(sx, sy - 2),
        point(sx - 2, sy + 2),
    ];
    draft(
        "CoordGeometry:Midpoint",
        format!("Find the midpoint of A({x1}, {y1}) and B({x2}, {y2})."),
        with_candidates(rng, answer.clone(), candidates, NoiseMode::Symbolic, None),
        format!("Average the x-values and the y-values: (({x1} + {x2}) ÷ 2, ({y1} + {y2}) ÷ 2) = {answer}."),
        Some(Visual::CoordGrid { x1, y1, x2: Some(x2), y2: Some(y2) }),
    )
}
