//! Shared builder functions that eliminate boilerplate across topic generators.
//!
//! Every topic assembles the same pieces: pick a target, build 4 answer
//! options (the correct one plus 3 distractors), shuffle, and construct the
//! final question. These helpers centralise that work so topic files focus on
//! their teaching logic only.

use rand::Rng;

use crate::question_engine::models::{Answer, Category, DisplayKind, Level, Question};

/// How many answer choices every question carries.
pub const OPTION_COUNT: usize = 4;

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Distractor offset bound for counting-style questions.
pub fn offset_range(level: Level) -> i64 {
    match level {
        Level::Beginner     => 3,
        Level::Intermediate => 5,
        Level::Advanced     => 10,
    }
}

/// Build 4 shuffled numeric options around `correct`.
///
/// Distractors apply a random positive or negative offset of at most
/// `max_offset`; duplicates are rejected, and negative values are rejected
/// when `allow_negative` is false (Beginner questions never show them).
pub fn number_options<R: Rng>(
    rng: &mut R,
    correct: i64,
    max_offset: i64,
    allow_negative: bool,
) -> Vec<Answer> {
    let mut values = vec![correct];

    while values.len() < OPTION_COUNT {
        let offset = rng.gen_range(1..=max_offset.max(1));
        let sign = if rng.gen_bool(0.5) { 1 } else { -1 };
        let candidate = correct + offset * sign;
        if !values.contains(&candidate) && (allow_negative || candidate >= 0) {
            values.push(candidate);
        }
    }

    shuffle(rng, &mut values);
    values.into_iter().map(Answer::Number).collect()
}

/// Format a fraction pair the way answer options are compared: plain "N/D".
pub fn plain_fraction(numerator: i64, denominator: i64) -> String {
    format!("{}/{}", numerator, denominator)
}

/// Build 4 shuffled fraction-string options around `numerator/denominator`.
///
/// Each distractor perturbs either the numerator (kept positive) or the
/// denominator (kept above 1) by a small random offset.
pub fn fraction_options<R: Rng>(rng: &mut R, numerator: i64, denominator: i64) -> Vec<Answer> {
    let mut values = vec![plain_fraction(numerator, denominator)];

    while values.len() < OPTION_COUNT {
        let offset = rng.gen_range(1..=5i64);
        let sign = if rng.gen_bool(0.5) { 1 } else { -1 };

        let candidate = if rng.gen_bool(0.5) {
            let new_numerator = numerator + offset * sign;
            (new_numerator > 0).then(|| plain_fraction(new_numerator, denominator))
        } else {
            let new_denominator = denominator + offset * sign;
            (new_denominator > 1).then(|| plain_fraction(numerator, new_denominator))
        };

        if let Some(candidate) = candidate {
            if !values.contains(&candidate) {
                values.push(candidate);
            }
        }
    }

    shuffle(rng, &mut values);
    values.into_iter().map(Answer::Text).collect()
}

/// Assemble the final [`Question`] from all its parts.
///
/// This is the last call in every topic generator.
#[allow(clippy::too_many_arguments)]
pub fn question(
    question_id: String,
    category: Category,
    variant_key: impl Into<String>,
    text: String,
    display: String,
    display_kind: DisplayKind,
    correct_answer: Answer,
    options: Vec<Answer>,
) -> Question {
    Question {
        question_id,
        category,
        variant_key: variant_key.into(),
        text,
        display,
        display_kind,
        correct_answer,
        options,
    }
}
