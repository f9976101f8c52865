use rand::Rng;

use crate::question_engine::{
    diversity::DiversityTracker,
    helpers::{self, shuffle, OPTION_COUNT},
    models::{Answer, Category, DisplayKind, Level, Question},
};

const PICK_ATTEMPTS: usize = 5;

const NUMBER_WORDS: [&str; 21] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty",
];

/// English word for 0..=20, decimal digits beyond that.
pub fn number_to_word(n: i64) -> String {
    if (0..=20).contains(&n) {
        NUMBER_WORDS[n as usize].to_string()
    } else {
        n.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentationKind {
    Digit,
    Word,
    Objects,
    Tally,
}

/// One way of writing a number.
#[derive(Debug, Clone)]
pub struct Representation {
    pub kind: RepresentationKind,
    pub display: String,
    pub value: i64,
}

/// Tally marks in groups of five: `|||||` per full group, `|` per leftover.
fn tally_marks(n: i64) -> String {
    let groups = n / 5;
    let remainder = (n % 5) as usize;
    let mut tally = "||||| ".repeat(groups as usize);
    tally.push_str(&"|".repeat(remainder));
    tally.trim_end().to_string()
}

/// The representations a level unlocks for `number`: digits always, words
/// from Intermediate (up to twenty), object markers for nonzero counts, and
/// tally marks at Advanced (up to ten).
pub fn representations(number: i64, level: Level) -> Vec<Representation> {
    let mut reps = vec![Representation {
        kind: RepresentationKind::Digit,
        display: number.to_string(),
        value: number,
    }];

    if level >= Level::Intermediate && number <= 20 {
        reps.push(Representation {
            kind: RepresentationKind::Word,
            display: number_to_word(number),
            value: number,
        });
    }

    if number >= 1 {
        reps.push(Representation {
            kind: RepresentationKind::Objects,
            display: "🔵".repeat(number as usize),
            value: number,
        });
    }

    if level >= Level::Advanced && (1..=10).contains(&number) {
        reps.push(Representation {
            kind: RepresentationKind::Tally,
            display: tally_marks(number),
            value: number,
        });
    }

    reps
}

/// Distinct random options drawn uniformly from a window around `target`.
fn window_options<R: Rng>(rng: &mut R, target: i64, range: i64, min: i64) -> Vec<Answer> {
    let mut values = vec![target];
    let low = (target - range).max(min);
    let high = target + range;

    while values.len() < OPTION_COUNT {
        let candidate = rng.gen_range(low..=high);
        if !values.contains(&candidate) {
            values.push(candidate);
        }
    }

    shuffle(rng, &mut values);
    values.into_iter().map(Answer::Number).collect()
}

pub fn generate<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    if rng.gen_bool(0.5) {
        identify(rng, level, question_id, tracker)
    } else {
        match_representation(rng, level, question_id, tracker)
    }
}

/// "What number is this?" — the display is a random representation.
fn identify<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let (min, max) = match level {
        Level::Beginner     => (0, 10),
        Level::Intermediate => (0, 20),
        Level::Advanced     => (10, 100),
    };

    let mut target = rng.gen_range(min..=max);
    for _ in 0..PICK_ATTEMPTS {
        if !tracker.was_recently_asked(Category::Numbers, &format!("num:{}", target)) {
            break;
        }
        target = rng.gen_range(min..=max);
    }
    tracker.track(Category::Numbers, format!("num:{}", target));

    let reps = representations(target, level);
    let rep = &reps[rng.gen_range(0..reps.len())];
    let display_kind = match rep.kind {
        RepresentationKind::Objects => DisplayKind::Objects,
        _                           => DisplayKind::Prompt,
    };

    let range = match level {
        Level::Beginner     => 5,
        Level::Intermediate => 10,
        Level::Advanced     => 20,
    };
    let options = window_options(rng, target, range, 0);

    helpers::question(
        question_id,
        Category::Numbers,
        "Identify",
        "What number is this?".to_string(),
        rep.display.clone(),
        display_kind,
        Answer::Number(target),
        options,
    )
}

/// "Find the number N" — the options carry the work.
fn match_representation<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let max = match level {
        Level::Beginner     => 10,
        Level::Intermediate => 20,
        Level::Advanced     => 50,
    };

    let mut target = rng.gen_range(1..=max);
    for _ in 0..PICK_ATTEMPTS {
        if !tracker.was_recently_asked(Category::Numbers, &format!("num:{}", target)) {
            break;
        }
        target = rng.gen_range(1..=max);
    }
    tracker.track(Category::Numbers, format!("num:{}", target));

    let range = match level {
        Level::Beginner     => 3,
        Level::Intermediate => 5,
        Level::Advanced     => 10,
    };
    let options = window_options(rng, target, range, 1);

    helpers::question(
        question_id,
        Category::Numbers,
        "Match",
        format!("Find the number {}", target),
        target.to_string(),
        DisplayKind::Prompt,
        Answer::Number(target),
        options,
    )
}
