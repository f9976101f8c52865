use rand::Rng;

use crate::question_engine::{
    arithmetic as safe_math,
    diversity::{pick_template, DiversityTracker},
    helpers::{self, number_options},
    models::{Answer, Category, DisplayKind, Level, Question},
};

const PICK_ATTEMPTS: usize = 5;

/// Word-problem props for Advanced phrasing.
const OBJECTS: [&str; 6] = ["books", "apples", "toys", "cards", "points", "stickers"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Addition,
    Subtraction,
}

/// Addition dominates early levels; subtraction grows with difficulty.
fn select_operation<R: Rng>(rng: &mut R, level: Level) -> Operation {
    let addition_chance = match level {
        Level::Beginner     => 0.7,
        Level::Intermediate => 0.5,
        Level::Advanced     => 0.4,
    };
    if rng.gen_bool(addition_chance) {
        Operation::Addition
    } else {
        Operation::Subtraction
    }
}

/// Operands appropriate to the level. Subtraction always yields a
/// non-negative difference: the subtrahend is drawn below the minuend.
fn operands<R: Rng>(rng: &mut R, op: Operation, level: Level) -> (i64, i64) {
    match op {
        Operation::Addition => {
            let max = match level {
                Level::Beginner     => 9,
                Level::Intermediate => 19,
                Level::Advanced     => 49,
            };
            (rng.gen_range(0..=max), rng.gen_range(0..=max))
        }
        Operation::Subtraction => {
            let (low, high) = match level {
                Level::Beginner     => (5, 14),
                Level::Intermediate => (10, 29),
                Level::Advanced     => (20, 69),
            };
            let minuend = rng.gen_range(low..=high);
            (minuend, rng.gen_range(0..minuend))
        }
    }
}

fn phrasing<R: Rng>(rng: &mut R, op: Operation, level: Level, a: i64, b: i64) -> String {
    let mut templates: Vec<String> = match op {
        Operation::Addition => vec![
            format!("What is {} + {}?", a, b),
            format!("Find the sum of {} and {}.", a, b),
            format!("Calculate {} + {}:", a, b),
            format!("{} plus {} equals?", a, b),
            format!("Add {} and {}:", a, b),
        ],
        Operation::Subtraction => vec![
            format!("What is {} - {}?", a, b),
            format!("Find the difference of {} and {}.", a, b),
            format!("Calculate {} - {}:", a, b),
            format!("{} minus {} equals?", a, b),
            format!("Subtract {} from {}:", b, a),
        ],
    };

    if level == Level::Advanced {
        let object = OBJECTS[rng.gen_range(0..OBJECTS.len())];
        match op {
            Operation::Addition => {
                templates.push(format!(
                    "Sam has {} {} and gets {} more. How many {} does Sam have now?",
                    a, object, b, object
                ));
                templates.push(format!(
                    "If you have {} {} and find {} more, how many do you have in total?",
                    a, object, b
                ));
            }
            Operation::Subtraction => {
                templates.push(format!(
                    "Sam has {} {} and gives away {}. How many {} does Sam have left?",
                    a, object, b, object
                ));
                templates.push(format!(
                    "If you have {} {} and use {}, how many remain?",
                    a, object, b
                ));
            }
        }
    }

    let refs: Vec<&str> = templates.iter().map(String::as_str).collect();
    pick_template(rng, &refs)
}

pub fn generate<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let op = select_operation(rng, level);

    // Generate candidate → check history → retry or accept → record. A
    // checked-math failure counts as a rejected candidate too, though the
    // level ranges cannot actually overflow.
    let mut accepted: Option<(i64, i64, i64)> = None;
    for attempt in 0..=PICK_ATTEMPTS {
        let (a, b) = operands(rng, op, level);
        let result = match op {
            Operation::Addition    => safe_math::add(&[a, b]),
            Operation::Subtraction => safe_math::subtract(&[a, b]),
        };
        let answer = match result {
            Ok(answer) => answer,
            Err(_) => continue,
        };

        let key = problem_key(op, a, b);
        if attempt < PICK_ATTEMPTS && tracker.was_recently_asked(Category::Arithmetic, &key) {
            continue;
        }
        accepted = Some((a, b, answer));
        break;
    }

    // Exhausted retries: fixed safe default.
    let (a, b, answer) = accepted.unwrap_or((2, 2, 4));
    tracker.track(Category::Arithmetic, problem_key(op, a, b));

    let symbol = match op {
        Operation::Addition    => "+",
        Operation::Subtraction => "-",
    };
    let text = phrasing(rng, op, level, a, b);
    let max_offset = answer.clamp(5, 10);
    let options = number_options(rng, answer, max_offset, level != Level::Beginner);

    helpers::question(
        question_id,
        Category::Arithmetic,
        match op {
            Operation::Addition    => "Addition",
            Operation::Subtraction => "Subtraction",
        },
        text,
        format!("{} {} {}", a, symbol, b),
        DisplayKind::Expression,
        Answer::Number(answer),
        options,
    )
}

fn problem_key(op: Operation, a: i64, b: i64) -> String {
    let name = match op {
        Operation::Addition    => "addition",
        Operation::Subtraction => "subtraction",
    };
    format!("{}-{}-{}", name, a, b)
}
