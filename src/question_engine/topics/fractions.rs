use rand::Rng;

use crate::question_engine::{
    diversity::DiversityTracker,
    fraction::Fraction,
    helpers::{self, fraction_options, plain_fraction},
    models::{Answer, Category, DisplayKind, Level, Question},
};

const PICK_ATTEMPTS: usize = 8;

pub fn generate<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    match level {
        Level::Beginner => identify(rng, question_id, tracker),
        Level::Intermediate => {
            if rng.gen_bool(0.5) {
                addition(rng, level, question_id, tracker)
            } else {
                subtraction(rng, level, question_id, tracker)
            }
        }
        Level::Advanced => multiplication(rng, question_id, tracker),
    }
}

/// Read a fraction off a filled/empty square bar (e.g. "■■■□□" for 3/5).
fn identify<R: Rng>(
    rng: &mut R,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let mut denominator = rng.gen_range(2..=9i64);
    let mut numerator = rng.gen_range(1..=denominator);
    for _ in 0..PICK_ATTEMPTS {
        let key = format!("identify:{}/{}", numerator, denominator);
        if !tracker.was_recently_asked(Category::Fractions, &key) {
            break;
        }
        denominator = rng.gen_range(2..=9);
        numerator = rng.gen_range(1..=denominator);
    }
    tracker.track(
        Category::Fractions,
        format!("identify:{}/{}", numerator, denominator),
    );

    let display = format!(
        "{}{}",
        "■".repeat(numerator as usize),
        "□".repeat((denominator - numerator) as usize)
    );

    // The answer mirrors the visual, so the raw pair is kept unsimplified.
    let options = fraction_options(rng, numerator, denominator);

    helpers::question(
        question_id,
        Category::Fractions,
        "Identify",
        "What fraction is represented by the filled squares?".to_string(),
        display,
        DisplayKind::FractionBar,
        Answer::Text(plain_fraction(numerator, denominator)),
        options,
    )
}

/// Denominator ceiling for the arithmetic modes.
fn max_denominator(level: Level) -> i64 {
    if level == Level::Intermediate {
        8
    } else {
        12
    }
}

/// Random proper fraction with denominator 2..=max.
fn proper_fraction<R: Rng>(rng: &mut R, max_den: i64) -> (i64, i64) {
    let den = rng.gen_range(2..=max_den);
    let num = rng.gen_range(1..den);
    (num, den)
}

fn addition<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let max_den = max_denominator(level);

    let mut accepted: Option<(i64, i64, i64, i64, Fraction)> = None;
    for attempt in 0..=PICK_ATTEMPTS {
        let (n1, d1) = proper_fraction(rng, max_den);
        let (n2, d2) = proper_fraction(rng, max_den);

        let sum = Fraction::new(n1, d1)
            .and_then(|f1| Fraction::new(n2, d2).and_then(|f2| f1.add(f2)));
        let sum = match sum {
            Ok(sum) => sum,
            Err(_) => continue,
        };

        let key = format!("add:{}/{}+{}/{}", n1, d1, n2, d2);
        if attempt < PICK_ATTEMPTS && tracker.was_recently_asked(Category::Fractions, &key) {
            continue;
        }
        accepted = Some((n1, d1, n2, d2, sum));
        break;
    }

    // Exhausted retries: fixed safe default, 1/2 + 1/2.
    let (n1, d1, n2, d2, sum) = accepted.unwrap_or_else(|| {
        let half = Fraction::new(1, 2).expect("1/2 is well-formed");
        (1, 2, 1, 2, half.add(half).expect("1/2 + 1/2 is in range"))
    });
    tracker.track(
        Category::Fractions,
        format!("add:{}/{}+{}/{}", n1, d1, n2, d2),
    );

    build_arithmetic_question(rng, question_id, "Add", "+", n1, d1, n2, d2, sum)
}

fn subtraction<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let max_den = max_denominator(level);

    let mut accepted: Option<(i64, i64, i64, i64, Fraction)> = None;
    for attempt in 0..=PICK_ATTEMPTS {
        let (n1, d1) = proper_fraction(rng, max_den);

        // Pick the second operand at or below the first so the difference
        // stays non-negative.
        let d2 = rng.gen_range(2..=max_den);
        let max_n2 = n1 * d2 / d1;
        let n2 = if max_n2 >= 1 {
            rng.gen_range(1..=max_n2)
        } else {
            1
        };

        let diff = Fraction::new(n1, d1)
            .and_then(|f1| Fraction::new(n2, d2).and_then(|f2| f1.sub(f2)));
        let diff = match diff {
            Ok(diff) if diff.numerator >= 0 => diff,
            _ => continue,
        };

        let key = format!("sub:{}/{}-{}/{}", n1, d1, n2, d2);
        if attempt < PICK_ATTEMPTS && tracker.was_recently_asked(Category::Fractions, &key) {
            continue;
        }
        accepted = Some((n1, d1, n2, d2, diff));
        break;
    }

    // Exhausted retries: fixed safe default, 1/2 - 1/4.
    let (n1, d1, n2, d2, diff) = accepted.unwrap_or_else(|| {
        let diff = Fraction::new(1, 2)
            .and_then(|h| Fraction::new(1, 4).and_then(|q| h.sub(q)))
            .expect("1/2 - 1/4 is in range");
        (1, 2, 1, 4, diff)
    });
    tracker.track(
        Category::Fractions,
        format!("sub:{}/{}-{}/{}", n1, d1, n2, d2),
    );

    build_arithmetic_question(rng, question_id, "Subtract", "-", n1, d1, n2, d2, diff)
}

fn multiplication<R: Rng>(
    rng: &mut R,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let max_den = 6i64;

    let mut accepted: Option<(i64, i64, i64, i64, Fraction)> = None;
    for attempt in 0..=PICK_ATTEMPTS {
        // Improper fractions allowed: numerators run to 2·den − 1.
        let d1 = rng.gen_range(2..=max_den);
        let n1 = rng.gen_range(1..=d1 * 2 - 1);
        let d2 = rng.gen_range(2..=max_den);
        let n2 = rng.gen_range(1..=d2 * 2 - 1);

        let product = Fraction::new(n1, d1)
            .and_then(|f1| Fraction::new(n2, d2).and_then(|f2| f1.mul(f2)));
        let product = match product {
            Ok(product) => product,
            Err(_) => continue,
        };

        let key = format!("mul:{}/{}x{}/{}", n1, d1, n2, d2);
        if attempt < PICK_ATTEMPTS && tracker.was_recently_asked(Category::Fractions, &key) {
            continue;
        }
        accepted = Some((n1, d1, n2, d2, product));
        break;
    }

    // Exhausted retries: fixed safe default, 1/2 × 1/2.
    let (n1, d1, n2, d2, product) = accepted.unwrap_or_else(|| {
        let half = Fraction::new(1, 2).expect("1/2 is well-formed");
        (1, 2, 1, 2, half.mul(half).expect("1/2 × 1/2 is in range"))
    });
    tracker.track(
        Category::Fractions,
        format!("mul:{}/{}x{}/{}", n1, d1, n2, d2),
    );

    build_arithmetic_question(rng, question_id, "Multiply", "×", n1, d1, n2, d2, product)
}

/// Shared tail: format the expression and wrap the simplified result.
#[allow(clippy::too_many_arguments)]
fn build_arithmetic_question<R: Rng>(
    rng: &mut R,
    question_id: String,
    variant: &str,
    symbol: &str,
    n1: i64,
    d1: i64,
    n2: i64,
    d2: i64,
    result: Fraction,
) -> Question {
    let expression = format!("{}/{} {} {}/{}", n1, d1, symbol, n2, d2);
    let options = fraction_options(rng, result.numerator, result.denominator);

    helpers::question(
        question_id,
        Category::Fractions,
        variant,
        format!("What is {}?", expression),
        expression,
        DisplayKind::Expression,
        Answer::Text(plain_fraction(result.numerator, result.denominator)),
        options,
    )
}
