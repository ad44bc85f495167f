//! Coins, spinners, dice and marble bags. Answers are fractions; options are
//! unique by value so `1/3` and `2/6` never appear side by side.

use rand::Rng;

use crate::quiz_engine::{
    distractors::{with_candidates, NoiseMode},
    helpers::{draft, pick},
    models::{AnswerValue, Difficulty, Grade, ItemDraft, Visual},
    numeric::Fraction,
};

const SPINNER_COLORS: [&str; 8] = ["Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Teal"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Coin,
    Spinner,
    Dice,
    Marbles,
}

fn families(difficulty: Difficulty) -> &'static [Family] {
    match difficulty.level() {
        1..=3 => &[Family::Coin, Family::Spinner, Family::Marbles],
        4..=6 => &[Family::Coin, Family::Spinner, Family::Dice, Family::Marbles],
        _ => &[Family::Coin, Family::Dice, Family::Marbles],
    }
}

pub fn generate<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    match *pick(rng, families(difficulty)) {
        Family::Coin    => coins(rng, grade, difficulty),
        Family::Spinner => spinner(rng, difficulty),
        Family::Dice    => dice(rng),
        Family::Marbles => {
            let red = rng.gen_range(1..=4);
            let blue = rng.gen_range(1..=4);
            let green = rng.gen_range(1..=4);
            marble_draw(rng, red, blue, green)
        }
    }
}

fn fractions(pairs: &[(i64, i64)]) -> Vec<AnswerValue> {
    pairs.iter().map(|&(n, d)| AnswerValue::fraction(n, d)).collect()
}

struct CoinEvent {
    prompt: &'static str,
    answer: (i64, i64),
    others: [(i64, i64); 3],
    reasoning: &'static str,
}

static TWO_COIN_EVENTS: [CoinEvent; 3] = [
    CoinEvent {
        prompt: "Two coins are flipped. What is the probability of getting 2 Heads (HH)?",
        answer: (1, 4),
        others: [(1, 2), (3, 4), (1, 8)],
        reasoning: "The outcomes are HH, HT, TH, TT. Only 1 of the 4 is HH",
    },
    CoinEvent {
        prompt: "Two coins are flipped. What is the probability of getting at least one Head?",
        answer: (3, 4),
        others: [(1, 2), (1, 4), (1, 1)],
        reasoning: "The outcomes are HH, HT, TH, TT. HH, HT and TH all contain a Head, 3 out of 4",
    },
    CoinEvent {
        prompt: "Two coins are flipped. What is the probability of getting exactly one Tail?",
        answer: (1, 2),
        others: [(1, 4), (3, 4), (1, 3)],
        reasoning: "The outcomes are HH, HT, TH, TT. HT and TH have one Tail, 2/4",
    },
];

fn coins<R: Rng>(rng: &mut R, grade: Grade, difficulty: Difficulty) -> ItemDraft {
    if grade.value() >= 7 && difficulty.level() > 3 {
        let event = pick(rng, &TWO_COIN_EVENTS);
        let answer = AnswerValue::fraction(event.answer.0, event.answer.1);
        return draft(
            "Probability:TwoCoins",
            event.prompt.to_string(),
            with_candidates(rng, answer.clone(), fractions(&event.others), NoiseMode::Symbolic, None),
            format!("{}, so the probability is {answer}.", event.reasoning),
            Some(Visual::Coins { count: 2 }),
        );
    }
    let answer = AnswerValue::fraction(1, 2);
    draft(
        "Probability:OneCoin",
        "A coin is flipped. What is the probability of getting Heads?".to_string(),
        with_candidates(rng, answer.clone(), fractions(&[(1, 4), (1, 3), (1, 1)]), NoiseMode::Symbolic, None),
        format!("A coin has 2 equally likely sides and Heads is 1 of them: {answer}."),
        Some(Visual::Coins { count: 1 }),
    )
}

fn spinner<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ItemDraft {
    let sectors = if difficulty.level() <= 3 { 4 } else { *pick(rng, &[3usize, 4, 6, 8]) };
    let answer = AnswerValue::fraction(1, sectors as i64);
    draft(
        "Probability:Spinner",
        "What is the probability of spinning Red?".to_string(),
        with_candidates(
            rng,
            answer.clone(),
            fractions(&[(1, 2), (1, 3), (1, 4), (1, 6), (1, 8)]),
            NoiseMode::Symbolic,
            None,
        ),
        format!("There are {sectors} equal sections and Red is 1 of them, so the probability is {answer}."),
        Some(Visual::Spinner {
            sectors: SPINNER_COLORS[..sectors].iter().map(|c| c.to_string()).collect(),
        }),
    )
}

struct DiceEvent {
    prompt: &'static str,
    winners: &'static str,
    count: i64,
    others: [(i64, i64); 3],
}

static DICE_EVENTS: [DiceEvent; 3] = [
    DiceEvent {
        prompt: "What is the probability of rolling an even number on a die?",
        winners: "2, 4 and 6",
        count: 3,
        others: [(1, 3), (1, 6), (5, 6)],
    },
    DiceEvent {
        prompt: "What is the probability of rolling a number greater than 4 on a die?",
        winners: "5 and 6",
        count: 2,
        others: [(1, 2), (1, 6), (2, 3)],
    },
    DiceEvent {
        prompt: "What is the probability of rolling a 1 or a 6 on a die?",
        winners: "1 and 6",
        count: 2,
        others: [(1, 6), (1, 2), (1, 4)],
    },
];

fn dice<R: Rng>(rng: &mut R) -> ItemDraft {
    let event = pick(rng, &DICE_EVENTS);
    let answer = AnswerValue::Fraction(Fraction::new(event.count, 6).reduced());
    draft(
        "Probability:Dice",
        event.prompt.to_string(),
        with_candidates(rng, answer.clone(), fractions(&event.others), NoiseMode::Symbolic, None),
        format!(
            "The winning numbers are {}. That is {} out of 6, and {}/6 = {answer}.",
            event.winners, event.count, event.count
        ),
        None,
    )
}

/// Probability of drawing red from the bag, left unreduced over the total.
pub fn marble_draw<R: Rng>(rng: &mut R, red: u32, blue: u32, green: u32) -> ItemDraft {
    let total = (red + blue + green) as i64;
    let (r, b, g) = (red as i64, blue as i64, green as i64);
    let answer = AnswerValue::fraction(r, total);
    let candidates = fractions(&[(b, total), (g, total), (r, total + 1), (1, total), (1, 2)]);
    draft(
        "Probability:Marbles",
        "A marble is picked at random. What is the probability of picking a red marble?".to_string(),
        with_candidates(rng, answer.clone(), candidates, NoiseMode::Symbolic, None),
        format!("There are {red} red marbles out of {total} marbles in total, so the probability is {answer}."),
        Some(Visual::Marbles { red, blue, green }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn marble_answer_stays_unreduced_and_alone() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let d = marble_draw(&mut rng, 2, 1, 3);
            assert_eq!(d.choice.correct(), &AnswerValue::Fraction(Fraction { num: 2, den: 6 }));
            assert_eq!(d.choice.correct().to_string(), "2/6");
            let labels: Vec<String> = d.choice.options.iter().map(|o| o.to_string()).collect();
            assert!(!labels.contains(&"1/3".to_string()), "{labels:?}");
            let equivalent = d
                .choice
                .options
                .iter()
                .filter(|o| o.equivalent(&AnswerValue::fraction(1, 3)))
                .count();
            assert_eq!(equivalent, 1);
        }
    }

    #[test]
    fn equal_counts_still_give_four_options() {
        let mut rng = StdRng::seed_from_u64(9);
        let d = marble_draw(&mut rng, 1, 1, 1);
        assert_eq!(d.choice.options.len(), 4);
        assert_eq!(d.choice.correct().to_string(), "1/3");
    }

    #[test]
    fn two_coins_only_at_higher_difficulty() {
        let mut rng = StdRng::seed_from_u64(12);
        let grade = Grade::new(8).unwrap();
        for _ in 0..20 {
            let easy = coins(&mut rng, grade, Difficulty::new(2));
            assert_eq!(easy.visual, Some(Visual::Coins { count: 1 }));
            let hard = coins(&mut rng, grade, Difficulty::new(6));
            assert_eq!(hard.visual, Some(Visual::Coins { count: 2 }));
        }
    }

    #[test]
    fn spinner_payload_matches_denominator() {
        let mut rng = StdRng::seed_from_u64(5);
        for level in [1, 5, 6] {
            let d = spinner(&mut rng, Difficulty::new(level));
            let sectors = match &d.visual {
                Some(Visual::Spinner { sectors }) => sectors.len() as i64,
                other => panic!("unexpected visual {other:?}"),
            };
            assert_eq!(d.choice.correct(), &AnswerValue::fraction(1, sectors));
        }
    }

    #[test]
    fn dice_answers_are_reduced() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let d = dice(&mut rng);
            match d.choice.correct() {
                AnswerValue::Fraction(f) => assert_eq!(*f, f.reduced()),
                other => panic!("expected a fraction, got {other}"),
            }
        }
    }
}
