use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::error::EngineResult;
use crate::quiz_engine::{
    curriculum,
    models::{Difficulty, Grade, Item, ItemRequest, Topic},
    topics,
};

/// Generate a unique item ID from topic + seed.
fn make_item_id(topic: Topic, rng: &mut impl RngCore) -> String {
    let prefix = match topic {
        Topic::Number        => "NU",
        Topic::Algebra       => "AL",
        Topic::Geometry      => "GE",
        Topic::Mensuration   => "ME",
        Topic::CoordGeometry => "CG",
        Topic::Trigonometry  => "TR",
        Topic::Vectors       => "VE",
        Topic::Probability   => "PR",
        Topic::Data          => "DA",
        Topic::Fractions     => "FR",
        Topic::Patterns      => "PA",
        Topic::MentalMath    => "MM",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Checked entry point: rejects topics outside the grade's curriculum, then
/// generates from the request's seed (or fresh entropy).
pub fn generate_item(request: ItemRequest) -> EngineResult<Item> {
    curriculum::ensure_offered(request.topic, request.grade)?;

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    Ok(generate_with(&mut rng, request.topic, request.grade, request.difficulty))
}

/// Core dispatch: routes to the correct topic module using the caller's RNG.
/// Does not check the curriculum; callers go through [`generate_item`] or
/// check eligibility themselves.
pub fn generate_with<R: Rng>(rng: &mut R, topic: Topic, grade: Grade, difficulty: Difficulty) -> Item {
    let item_id = make_item_id(topic, rng);

    let draft = match topic {
        Topic::Number        => topics::number::generate(rng, grade, difficulty),
        Topic::Algebra       => topics::algebra::generate(rng, grade, difficulty),
        Topic::Geometry      => topics::geometry::generate(rng, grade, difficulty),
        Topic::Mensuration   => topics::mensuration::generate(rng, grade, difficulty),
        Topic::CoordGeometry => topics::coordinate::generate(rng, grade, difficulty),
        Topic::Trigonometry  => topics::trigonometry::generate(rng, grade, difficulty),
        Topic::Vectors       => topics::vectors::generate(rng, grade, difficulty),
        Topic::Probability   => topics::probability::generate(rng, grade, difficulty),
        Topic::Data          => topics::data::generate(rng, grade, difficulty),
        Topic::Fractions     => topics::fractions::generate(rng, grade, difficulty),
        Topic::Patterns      => topics::patterns::generate(rng, grade, difficulty),
        Topic::MentalMath    => topics::mental_math::generate(rng, grade, difficulty),
    };

    debug!(%item_id, %topic, grade = grade.value(), difficulty = difficulty.level(), variant = %draft.variant, "item generated");
    Item::from_draft(item_id, topic, grade, difficulty, draft)
}
