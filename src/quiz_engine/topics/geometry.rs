use rand::Rng;

use crate::quiz_engine::{
    distractors::{synthesize, with_candidates, NoiseMode},
    helpers::{draft, ints, pick, texts},
    models::{AnswerValue, Difficulty, Grade, ItemDraft, Side, Visual},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Solid,
    Riddle,
    Perimeter,
    ShapeRules,
    MissingSide,
    AreaCount,
    LineFact,
    AnglesOnLine,
    AngleSum,
}

fn families(grade: Grade, difficulty: Difficulty) -> &'static [Family] {
    let d = difficulty.level();
    if grade.value() <= 4 {
        match d {
            1..=3 => &[Family::Solid, Family::Riddle],
            4..=6 => &[Family::Perimeter, Family::ShapeRules],
            _ => &[Family::MissingSide, Family::AreaCount],
        }
    } else if d <= 4 {
        &[Family::LineFact, Family::AngleSum]
    } else {
        &[Family::AnglesOnLine, Family::AngleSum]
    }
}

pub fn generate<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    match *pick(rng, families(grade, difficulty)) {
        Family::Solid        => solid(rng),
        Family::Riddle       => riddle(rng),
        Family::Perimeter    => perimeter(rng),
        Family::ShapeRules   => shape_rules(rng),
        Family::MissingSide  => missing_side(rng),
        Family::AreaCount    => area_count(rng),
        Family::LineFact     => line_fact(rng),
        Family::AnglesOnLine => angles_on_line(rng),
        Family::AngleSum     => angle_sum(rng, difficulty),
    }
}

struct Solid {
    name: &'static str,
    faces: i64,
    edges: i64,
    vertices: i64,
}

/// Curved surfaces count as faces, curved rims as edges.
static SOLIDS: [Solid; 4] = [
    Solid { name: "Cube",     faces: 6, edges: 12, vertices: 8 },
    Solid { name: "Cylinder", faces: 3, edges: 2,  vertices: 0 },
    Solid { name: "Cone",     faces: 2, edges: 1,  vertices: 1 },
    Solid { name: "Sphere",   faces: 1, edges: 0,  vertices: 0 },
];

const SOLID_NAMES: [&str; 5] = ["Cube", "Sphere", "Cylinder", "Cone", "Prism"];

fn solid_visual(name: &str) -> Visual {
    match name {
        "Cube"     => Visual::Cube,
        "Cylinder" => Visual::Cylinder,
        "Cone"     => Visual::Cone,
        _          => Visual::Sphere,
    }
}

fn solid<R: Rng>(rng: &mut R) -> ItemDraft {
    let shape = pick(rng, &SOLIDS);
    if rng.gen_bool(0.5) {
        return draft(
            "Geometry:SolidName",
            "What is the name of this 3D shape?".to_string(),
            synthesize(rng, AnswerValue::text(shape.name), NoiseMode::Symbolic, Some(&SOLID_NAMES[..])),
            format!("This object is a {}.", shape.name),
            Some(solid_visual(shape.name)),
        );
    }
    let (property, count) = match rng.gen_range(0..3) {
        0 => ("faces", shape.faces),
        1 => ("edges", shape.edges),
        _ => ("vertices", shape.vertices),
    };
    draft(
        "Geometry:SolidCount",
        format!("How many {property} does a {} have?", shape.name),
        with_candidates(rng, AnswerValue::Int(count), ints(&[count + 1, count + 2, (count - 1).max(0)]), NoiseMode::NonNegative, None),
        format!("A {} has {count} {property}.", shape.name),
        Some(solid_visual(shape.name)),
    )
}

static RIDDLES: [(&str, &str); 7] = [
    ("Triangle",  "I have 3 sides."),
    ("Square",    "I have 4 equal sides and 4 right angles."),
    ("Rectangle", "I have 4 sides, opposite sides are equal, and 4 right angles."),
    ("Pentagon",  "I have 5 sides."),
    ("Hexagon",   "I have 6 sides."),
    ("Octagon",   "I have 8 sides."),
    ("Circle",    "I have no corners and 1 curved side."),
];

fn riddle<R: Rng>(rng: &mut R) -> ItemDraft {
    let (name, clue) = *pick(rng, &RIDDLES);
    let names: Vec<&str> = RIDDLES.iter().map(|(n, _)| *n).collect();
    draft(
        "Geometry:Riddle",
        format!("Riddle: {clue} What am I?"),
        synthesize(rng, AnswerValue::text(name), NoiseMode::Symbolic, Some(names.as_slice())),
        format!("A {name} fits the clue: \"{clue}\""),
        None,
    )
}

struct ShapeRule {
    question: &'static str,
    answer: &'static str,
    others: [&'static str; 3],
    reason: &'static str,
}

static SHAPE_RULES: [ShapeRule; 4] = [
    ShapeRule {
        question: "Which shape has 4 right angles?",
        answer: "Rectangle",
        others: ["Triangle", "Pentagon", "Circle"],
        reason: "A Rectangle has 4 right angles; none of the others do.",
    },
    ShapeRule {
        question: "Which shape is NOT a quadrilateral?",
        answer: "Triangle",
        others: ["Square", "Rectangle", "Rhombus"],
        reason: "A Triangle has 3 sides, while a quadrilateral has 4.",
    },
    ShapeRule {
        question: "Which shape has exactly 3 vertices?",
        answer: "Triangle",
        others: ["Square", "Circle", "Cube"],
        reason: "A Triangle has 3 corners (vertices).",
    },
    ShapeRule {
        question: "Which shape has parallel lines?",
        answer: "Rectangle",
        others: ["Triangle (Isosceles)", "Circle", "Semicircle"],
        reason: "A Rectangle's opposite sides are parallel.",
    },
];

fn shape_rules<R: Rng>(rng: &mut R) -> ItemDraft {
    let rule = pick(rng, &SHAPE_RULES);
    draft(
        "Geometry:ShapeRules",
        rule.question.to_string(),
        with_candidates(rng, AnswerValue::text(rule.answer), texts(&rule.others), NoiseMode::Symbolic, Some(&rule.others[..])),
        rule.reason.to_string(),
        None,
    )
}

fn perimeter<R: Rng>(rng: &mut R) -> ItemDraft {
    let w = rng.gen_range(2..=9i64);
    let h = rng.gen_range(2..=9i64);
    let answer = 2 * (w + h);
    draft(
        "Geometry:Perimeter",
        "What is the perimeter of this rectangle?".to_string(),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[w * h, answer + 2, answer - 2, w + h]), NoiseMode::NonNegative, None),
        format!("Perimeter is the distance around: {w} + {h} + {w} + {h} = {answer}."),
        Some(Visual::Rect { w: w as u32, h: h as u32, missing: None, show_area: false }),
    )
}

fn missing_side<R: Rng>(rng: &mut R) -> ItemDraft {
    let w = rng.gen_range(3..=9i64);
    let h = rng.gen_range(3..=9i64);
    let p = 2 * (w + h);
    let half = w + h;
    draft(
        "Geometry:MissingSide",
        format!("The perimeter is {p}. What is the missing side length?"),
        with_candidates(rng, AnswerValue::Int(h), ints(&[w, h + 2, p - w, half]), NoiseMode::NonNegative, None),
        format!("Perimeter = 2 × (width + height). {p} ÷ 2 = {half}. {half} - {w} = {h}."),
        Some(Visual::Rect { w: w as u32, h: h as u32, missing: Some(Side::Height), show_area: false }),
    )
}

fn area_count<R: Rng>(rng: &mut R) -> ItemDraft {
    let w = rng.gen_range(3..=6i64);
    let h = rng.gen_range(2..=5i64);
    let answer = w * h;
    draft(
        "Geometry:AreaCount",
        "What is the area (total squares)?".to_string(),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[2 * (w + h), answer + 1, answer - 1]), NoiseMode::NonNegative, None),
        format!("Count the squares: {h} rows of {w}, or {w} × {h} = {answer}."),
        Some(Visual::GridShape { w: w as u32, h: h as u32 }),
    )
}

fn line_fact<R: Rng>(rng: &mut R) -> ItemDraft {
    draft(
        "Geometry:LineFact",
        "Angles on a straight line add up to?".to_string(),
        with_candidates(rng, AnswerValue::Int(180), ints(&[90, 360, 270]), NoiseMode::Integer, None),
        "A straight line is half a full turn, so the angles add up to 180°.".to_string(),
        None,
    )
}

fn angles_on_line<R: Rng>(rng: &mut R) -> ItemDraft {
    let known = rng.gen_range(20..=160i64);
    let answer = 180 - known;
    draft(
        "Geometry:AnglesOnLine",
        format!("Two angles sit on a straight line. One is {known}°. What is the other?"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[360 - known, known, (90 - known).abs()]), NoiseMode::Integer, None),
        format!("Angles on a straight line add to 180°: 180 - {known} = {answer}°."),
        None,
    )
}

fn polygon_name(sides: i64) -> &'static str {
    match sides {
        3 => "Triangle",
        4 => "Quadrilateral",
        5 => "Pentagon",
        6 => "Hexagon",
        _ => "Octagon",
    }
}

fn angle_sum<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ItemDraft {
    let n = if difficulty.level() >= 7 {
        *pick(rng, &[3i64, 4, 5, 6, 8])
    } else {
        *pick(rng, &[3i64, 4, 5, 6])
    };
    let name = polygon_name(n);
    let answer = (n - 2) * 180;
    draft(
        "Geometry:AngleSum",
        format!("What is the sum of the interior angles in a {name}?"),
        with_candidates(rng, AnswerValue::Int(answer), ints(&[n * 180, (n - 1) * 180]), NoiseMode::Integer, None),
        format!("Interior angles sum to (n - 2) × 180°: ({n} - 2) × 180 = {answer}°."),
        Some(Visual::Polygon { shape: name.to_string() }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn perimeter_options_stay_unique_for_square_like_rectangles() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..300 {
            let d = perimeter(&mut rng);
            let mut labels: Vec<String> = d.choice.options.iter().map(|o| o.to_string()).collect();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), 4);
        }
    }

    #[test]
    fn missing_side_payload_hides_height() {
        let mut rng = StdRng::seed_from_u64(9);
        let d = missing_side(&mut rng);
        match d.visual {
            Some(Visual::Rect { h, missing: Some(Side::Height), .. }) => {
                assert_eq!(d.choice.correct(), &AnswerValue::Int(h as i64));
            }
            other => panic!("unexpected visual {other:?}"),
        }
    }

    #[test]
    fn angle_sum_matches_polygon_in_payload() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..50 {
            let d = angle_sum(&mut rng, Difficulty::new(10));
            let shape = match &d.visual {
                Some(Visual::Polygon { shape }) => shape.clone(),
                other => panic!("unexpected visual {other:?}"),
            };
            let n = match shape.as_str() {
                "Triangle" => 3,
                "Quadrilateral" => 4,
                "Pentagon" => 5,
                "Hexagon" => 6,
                "Octagon" => 8,
                s => panic!("unknown polygon {s}"),
            };
            assert_eq!(d.choice.correct(), &AnswerValue::Int((n - 2) * 180));
        }
    }

    #[test]
    fn solid_items_carry_a_solid_visual() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..40 {
            let d = solid(&mut rng);
            let kind = d.visual.as_ref().map(|v| v.kind()).unwrap();
            assert!(["cube", "cylinder", "cone", "sphere"].contains(&kind));
        }
    }

    #[test]
    fn solid_counts_are_never_negative() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..500 {
            let d = solid(&mut rng);
            for opt in &d.choice.options {
                if let AnswerValue::Int(n) = opt {
                    assert!(*n >= 0, "{}: {:?}", d.prompt, d.choice.options);
                }
            }
        }
    }

    #[test]
    fn low_grade_difficulty_bands() {
        let mut rng = StdRng::seed_from_u64(2);
        let grade = Grade::new(2).unwrap();
        for _ in 0..30 {
            let easy = generate(&mut rng, grade, Difficulty::new(1));
            assert!(["Geometry:SolidName", "Geometry:SolidCount", "Geometry:Riddle"].contains(&easy.variant.as_str()));
            let hard = generate(&mut rng, grade, Difficulty::new(9));
            assert!(["Geometry:MissingSide", "Geometry:AreaCount"].contains(&hard.variant.as_str()));
        }
    }
}
