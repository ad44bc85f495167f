//! Area and volume. Curved shapes use π ≈ 3 so every answer is a whole number.

use rand::Rng;

use crate::quiz_engine::{
    distractors::{with_candidates, NoiseMode},
    helpers::{draft, ints, pick},
    models::{AnswerValue, Difficulty, Grade, ItemDraft, Visual},
};

const PI_APPROX: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    RectangleArea,
    CircleArea,
    CylinderVolume,
    ConeVolume,
}

fn families(grade: Grade, difficulty: Difficulty) -> &'static [Family] {
    let hard = difficulty.level() > 5;
    match (grade.value() <= 6, hard) {
        (true, false)  => &[Family::RectangleArea],
        (true, true)   => &[Family::RectangleArea, Family::CircleArea],
        (false, false) => &[Family::CylinderVolume],
        (false, true)  => &[Family::CylinderVolume, Family::ConeVolume],
    }
}

pub fn generate<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    match *pick(rng, families(grade, difficulty)) {
        Family::RectangleArea  => rectangle_area(rng, difficulty),
        Family::CircleArea     => circle_area(rng),
        Family::CylinderVolume => cylinder_volume(rng, difficulty),
        Family::ConeVolume     => cone_volume(rng),
    }
}

fn rectangle_area<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ItemDraft {
    let max = if difficulty.level() >= 4 { 12 } else { 8 };
    let w = rng.gen_range(3..=max);
    let h = rng.gen_range(3..=max);
    let answer = w * h;
    draft(
        "Mensuration:RectangleArea",
        format!("What is the area of a rectangle {w} cm by {h} cm?"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[2 * (w + h), w + h]), NoiseMode::Integer, None),
        format!("Area = width × height = {w} × {h} = {answer} cm²."),
        Some(Visual::Rect { w: w as u32, h: h as u32, missing: None, show_area: true }),
    )
}

fn circle_area<R: Rng>(rng: &mut R) -> ItemDraft {
    let r = rng.gen_range(2..=6i64);
    let square = r * r;
    let answer = PI_APPROX * square;
    draft(
        "Mensuration:CircleArea",
        format!("What is the area of a circle with radius {r} cm? (Use π ≈ 3)"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[2 * PI_APPROX * r, PI_APPROX * r]), NoiseMode::Integer, None),
        format!("Area = πr² ≈ 3 × {r}² = 3 × {square} = {answer} cm²."),
        Some(Visual::Circle { r: r as u32 }),
    )
}

fn cylinder_volume<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ItemDraft {
    let r = rng.gen_range(2..=5i64);
    let h = if difficulty.level() > 5 { rng.gen_range(4..=12i64) } else { 10 };
    let answer = PI_APPROX * r * r * h;
    draft(
        "Mensuration:CylinderVolume",
        format!("What is the volume of a cylinder with radius {r} and height {h}? (Use π ≈ 3)"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[PI_APPROX * r * h, 2 * PI_APPROX * r * h]), NoiseMode::Integer, None),
        format!("Volume = area of base × height = (πr²)h ≈ 3 × {r}² × {h} = {answer}."),
        Some(Visual::Cylinder),
    )
}

fn cone_volume<R: Rng>(rng: &mut R) -> ItemDraft {
    let r = rng.gen_range(2..=5i64);
    let h = rng.gen_range(3..=12i64);
    let square = r * r;
    // ⅓ × 3 cancels exactly.
    let answer = square * h;
    draft(
        "Mensuration:ConeVolume",
        format!("What is the volume of a cone with radius {r} and height {h}? (Use π ≈ 3)"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[PI_APPROX * square * h, r * h]), NoiseMode::Integer, None),
        format!("Volume = ⅓ × πr² × h ≈ ⅓ × 3 × {r}² × {h} = {square} × {h} = {answer}."),
        Some(Visual::Cone),
    )
}
