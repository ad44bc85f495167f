//! End-to-end tour of `math_drill_gen`.
//!
//! Run with: `cargo run --example demo`
//! (set `LOG_LEVEL=debug` to see every generated item logged, or
//! `MATHQUEST_CONFIG=path/to/engine.toml` to override the reward rules).
//!
//! 1. **One item per topic**: every topic taught in grade 9, with fixed seeds so
//!    the output is reproducible.
//! 2. **Practice**: ten Number items, answering all but two correctly, showing
//!    difficulty rising with the streak and falling on a miss.
//! 3. **Challenge**: a five-item mixed run, then the completion reward.
//! 4. **Client view**: the JSON a quiz front end renders for one item.

use math_drill_gen::{
    eligible_topics, generate_item, telemetry::init_tracing, to_view_json, Difficulty,
    EngineConfig, EngineError, Grade, Item, ItemRequest, MemoryStore, Session, Step, Topic,
};

fn print_item(item: &Item) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  {}  ID: {}  {}", item.topic, item.difficulty, item.item_id, item.variant);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", item.prompt);
    if let Some(visual) = &item.visual {
        println!("  (diagram: {})", visual.kind());
    }
    for (i, option) in item.options.iter().enumerate() {
        let marker = if item.is_correct(i) { "✓" } else { " " };
        println!("  [{i}] {marker} {option}");
    }
    println!("       {}", item.explanation);
    println!();
}

fn main() -> Result<(), EngineError> {
    init_tracing();
    let config = EngineConfig::load_from_env()?;

    // ── One item per topic ─────────────────────────────────────────────────
    println!();
    println!("══ Grade 9 topics ══");
    println!();
    let grade = Grade::new(9)?;
    for (seed, topic) in eligible_topics(grade).into_iter().enumerate() {
        let item = generate_item(
            ItemRequest::new(topic, grade)
                .with_difficulty(Difficulty::new(5))
                .with_seed(seed as u64 + 1),
        )?;
        print_item(&item);
    }

    // Topics outside the grade are refused before any generator runs.
    match generate_item(ItemRequest::new(Topic::Trigonometry, Grade::new(4)?)) {
        Err(e) => println!("  Grade 4 trigonometry: {e}"),
        Ok(item) => println!("  Unexpected item {}", item.item_id),
    }
    println!();

    // ── Practice ───────────────────────────────────────────────────────────
    println!("══ Practice: Number ══");
    println!();
    let mut session = Session::new(EngineConfig { rng_seed: Some(2024), ..config.clone() }, MemoryStore::new())?;
    session.set_user("Ada");
    session.set_grade(6)?;
    let mut item = session.start_practice(Topic::Number)?.clone();
    for round in 1..=10 {
        // Miss rounds 4 and 8 on purpose.
        let pick = if round % 4 == 0 { (item.correct_index + 1) % item.options.len() } else { item.correct_index };
        let feedback = session.submit_answer(pick)?;
        println!(
            "  {:>2}. {:<45} {}  +{} pts  streak {}  {} → {}",
            round,
            item.prompt,
            if feedback.correct { "✓" } else { "✗" },
            feedback.outcome.points,
            feedback.outcome.streak,
            feedback.outcome.difficulty_before,
            feedback.outcome.difficulty_after,
        );
        match session.advance()? {
            Step::Question(next) => item = next.clone(),
            Step::ChallengeComplete(_) => break,
        }
    }
    let progress = session.progress();
    println!();
    println!("  Score {}  Coins {}  {}", progress.score, progress.coins, progress.difficulty);
    println!();

    // ── Challenge ──────────────────────────────────────────────────────────
    println!("══ Challenge ══");
    println!();
    let mut item = session.start_challenge()?.clone();
    let mut answered = 0;
    loop {
        answered += 1;
        // Get the third item wrong.
        let pick = if answered == 3 { (item.correct_index + 1) % item.options.len() } else { item.correct_index };
        let feedback = session.submit_answer(pick)?;
        println!("  {answered}. [{}] {}  {}", item.topic, item.prompt, if feedback.correct { "✓" } else { "✗" });
        match session.advance()? {
            Step::Question(next) => item = next.clone(),
            Step::ChallengeComplete(summary) => {
                println!();
                println!(
                    "  {}/{} correct, {}: +{} coins{}",
                    summary.score,
                    summary.length,
                    if summary.passed { "passed" } else { "not passed" },
                    summary.coin_bonus,
                    if summary.difficulty_raised { ", difficulty raised" } else { "" },
                );
                break;
            }
        }
    }
    let progress = session.progress();
    println!("  Score {}  Coins {}  {}", progress.score, progress.coins, progress.difficulty);
    println!();

    // ── Avatars and the saved profile ──────────────────────────────────────
    match session.unlock_avatar("robot", 50) {
        Ok(()) => println!("  Unlocked avatars: {:?}", session.unlocked_avatars()),
        Err(e) => println!("  Could not unlock robot: {e}"),
    }
    if let Some(raw) = session.store().raw(&config.save_slot) {
        println!("  Saved profile: {raw}");
    }
    println!();

    // ── Client view ────────────────────────────────────────────────────────
    println!("══ Client JSON ══");
    println!();
    let item = generate_item(
        ItemRequest::new(Topic::Probability, grade).with_difficulty(Difficulty::new(3)).with_seed(7),
    )?;
    match serde_json::to_string_pretty(&to_view_json(&item)) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("  could not render: {e}"),
    }
    Ok(())
}
