//! Topic generators, one module per curriculum topic.
//!
//! Every module exposes the same entry point:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft
//! ```
//!
//! Inside a module, grade and difficulty select a family of items (e.g.
//! single-digit addition vs. exponents). Raising the difficulty never swaps a
//! family for an easier one. The generator dispatches to these via
//! `generator.rs`.

/// Number (1-12): addition, comparisons, operator gaps, remainders, powers
pub mod number;
/// Algebra (6-12): like terms, expansion, factoring, equations, substitution
pub mod algebra;
/// Geometry (1-12): solids, riddles, perimeter, area, angle facts
pub mod geometry;
/// Mensuration (5-12): areas and volumes with π ≈ 3
pub mod mensuration;
/// Coordinate geometry (7-12): midpoints
pub mod coordinate;
/// Trigonometry (9-12): sides from sin 30°
pub mod trigonometry;
/// Vectors (9-12): magnitudes
pub mod vectors;
/// Probability (7-12): coins, spinners, dice, marbles
pub mod probability;
/// Data (2-12): bar charts
pub mod data;
/// Fractions (3-8): shaded parts, comparison, addition
pub mod fractions;
/// Patterns (1-6): repeating shapes and arithmetic sequences
pub mod patterns;
/// Mental math (3-12): quick-fire arithmetic
pub mod mental_math;
