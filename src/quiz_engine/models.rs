use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::quiz_engine::numeric::Fraction;

// ---------------------------------------------------------------------------
// Grade / difficulty primitives
// ---------------------------------------------------------------------------

/// School grade, always within 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    pub fn new(value: u8) -> EngineResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Grade(value))
        } else {
            Err(EngineError::InvalidGrade(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every supported grade, lowest first.
    pub fn all() -> impl Iterator<Item = Grade> {
        (Self::MIN..=Self::MAX).map(Grade)
    }
}

/// Grade 3, where a fresh profile starts.
impl Default for Grade {
    fn default() -> Self {
        Grade(3)
    }
}

impl TryFrom<u8> for Grade {
    type Error = EngineError;

    fn try_from(value: u8) -> EngineResult<Self> {
        Grade::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grade {}", self.0)
    }
}

/// Item hardness 1..=10. Construction clamps, so out-of-range input is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(level: i32) -> Self {
        Difficulty(level.clamp(Self::MIN as i32, Self::MAX as i32) as u8)
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Shift by `by` steps, clamped to the valid band.
    pub fn offset(self, by: i32) -> Self {
        Self::new(self.0 as i32 + by)
    }

    pub fn raised(self) -> Self {
        self.offset(1)
    }

    pub fn lowered(self) -> Self {
        self.offset(-1)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(Self::MIN)
    }
}

impl From<i32> for Difficulty {
    fn from(level: i32) -> Self {
        Difficulty::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> u8 {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Number,
    Algebra,
    Geometry,
    Mensuration,
    CoordGeometry,
    Trigonometry,
    Vectors,
    Probability,
    Data,
    Fractions,
    Patterns,
    MentalMath,
}

impl Topic {
    /// All topics in curriculum order.
    pub const ALL: [Topic; 12] = [
        Topic::Number,
        Topic::Algebra,
        Topic::Geometry,
        Topic::Mensuration,
        Topic::CoordGeometry,
        Topic::Trigonometry,
        Topic::Vectors,
        Topic::Probability,
        Topic::Data,
        Topic::Fractions,
        Topic::Patterns,
        Topic::MentalMath,
    ];
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::Number        => "Number",
            Topic::Algebra       => "Algebra",
            Topic::Geometry      => "Geometry",
            Topic::Mensuration   => "Mensuration",
            Topic::CoordGeometry => "Coord Geometry",
            Topic::Trigonometry  => "Trigonometry",
            Topic::Vectors       => "Vectors",
            Topic::Probability   => "Probability",
            Topic::Data          => "Data",
            Topic::Fractions     => "Fractions",
            Topic::Patterns      => "Patterns",
            Topic::MentalMath    => "Mental Math",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Answer values
// ---------------------------------------------------------------------------

/// One candidate answer as shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    Int(i64),
    /// Fixed-point decimal with one fractional digit, stored in tenths.
    Decimal(i64),
    Fraction(Fraction),
    Text(String),
}

impl AnswerValue {
    pub fn text(s: impl Into<String>) -> Self {
        AnswerValue::Text(s.into())
    }

    pub fn fraction(num: i64, den: i64) -> Self {
        AnswerValue::Fraction(Fraction::new(num, den))
    }

    /// Value equality, except fractions compare by rational value (1/3 ~ 2/6).
    pub fn equivalent(&self, other: &AnswerValue) -> bool {
        match (self, other) {
            (AnswerValue::Fraction(a), AnswerValue::Fraction(b)) => a.equivalent(*b),
            _ => self == other,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Int(n) => write!(f, "{}", n),
            AnswerValue::Decimal(tenths) => {
                let sign = if *tenths < 0 { "-" } else { "" };
                let abs = tenths.abs();
                write!(f, "{}{}.{}", sign, abs / 10, abs % 10)
            }
            AnswerValue::Fraction(frac) => write!(f, "{}", frac),
            AnswerValue::Text(s) => write!(f, "{}", s),
        }
    }
}

// ---------------------------------------------------------------------------
// Visual aids
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "w")]
    Width,
    #[serde(rename = "h")]
    Height,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrigSide {
    Hyp,
    Opp,
    Adj,
}

/// Structured description of a diagram. The engine never draws these; each
/// variant carries every field its renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visual {
    Cube,
    Cylinder,
    Cone,
    Sphere,
    Rect {
        w: u32,
        h: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        missing: Option<Side>,
        #[serde(default, rename = "showArea")]
        show_area: bool,
    },
    GridShape { w: u32, h: u32 },
    /// Side labels are `None` when the side is unknown or unlabelled.
    TrigTriangle {
        angle: u32,
        hyp: Option<i64>,
        opp: Option<i64>,
        adj: Option<i64>,
        target: TrigSide,
    },
    CoordGrid {
        x1: i64,
        y1: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        x2: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y2: Option<i64>,
    },
    BarGraph { labels: Vec<String>, values: Vec<u32> },
    Marbles { red: u32, blue: u32, green: u32 },
    Coins { count: u32 },
    Spinner { sectors: Vec<String> },
    Polygon { shape: String },
    PieChart { num: u32, den: u32 },
    FractionBar { num: u32, den: u32 },
    Circle { r: u32 },
    ShapePattern { sequence: Vec<String> },
}

impl Visual {
    /// Renderer tag, identical to the serialized `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Visual::Cube                 => "cube",
            Visual::Cylinder             => "cylinder",
            Visual::Cone                 => "cone",
            Visual::Sphere               => "sphere",
            Visual::Rect { .. }          => "rect",
            Visual::GridShape { .. }     => "grid_shape",
            Visual::TrigTriangle { .. }  => "trig_triangle",
            Visual::CoordGrid { .. }     => "coord_grid",
            Visual::BarGraph { .. }      => "bar_graph",
            Visual::Marbles { .. }       => "marbles",
            Visual::Coins { .. }         => "coins",
            Visual::Spinner { .. }       => "spinner",
            Visual::Polygon { .. }       => "polygon",
            Visual::PieChart { .. }      => "pie_chart",
            Visual::FractionBar { .. }   => "fraction_bar",
            Visual::Circle { .. }        => "circle",
            Visual::ShapePattern { .. }  => "shape_pattern",
        }
    }
}

// ---------------------------------------------------------------------------
// Request / item types
// ---------------------------------------------------------------------------

/// Options in presentation order plus the position of the correct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub options: Vec<AnswerValue>,
    pub correct_index: usize,
}

impl Choice {
    pub fn correct(&self) -> &AnswerValue {
        &self.options[self.correct_index]
    }
}

/// What a topic generator produces before the engine stamps identity onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub variant: String,
    pub prompt: String,
    pub choice: Choice,
    pub explanation: String,
    pub visual: Option<Visual>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    pub topic: Topic,
    pub grade: Grade,
    pub difficulty: Difficulty,
    pub rng_seed: Option<u64>,
}

impl ItemRequest {
    /// Difficulty 1, fresh entropy.
    pub fn new(topic: Topic, grade: Grade) -> Self {
        ItemRequest { topic, grade, difficulty: Difficulty::default(), rng_seed: None }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// One generated question. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub topic: Topic,
    /// Sub-family this item was drawn from, e.g. `"Number:Remainder"`.
    /// Stable across seeds.
    pub variant: String,
    pub grade: Grade,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub options: Vec<AnswerValue>,
    pub correct_index: usize,
    pub explanation: String,
    pub visual: Option<Visual>,
}

impl Item {
    pub fn from_draft(
        item_id: String, topic: Topic, grade: Grade, difficulty: Difficulty, draft: ItemDraft,
    ) -> Self {
        Item {
            item_id,
            topic,
            variant: draft.variant,
            grade,
            difficulty,
            prompt: draft.prompt,
            options: draft.choice.options,
            correct_index: draft.choice.correct_index,
            explanation: draft.explanation,
            visual: draft.visual,
        }
    }

    pub fn correct_answer(&self) -> &AnswerValue {
        &self.options[self.correct_index]
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}
