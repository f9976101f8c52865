use rand::Rng;

use crate::question_engine::{
    diversity::{pick_weighted, DiversityTracker, Weighted},
    helpers::{self, number_options, offset_range},
    models::{Answer, Category, DisplayKind, Level, Question},
};

/// How many fresh target values we try before accepting a repeat.
const PICK_ATTEMPTS: usize = 5;

/// Object markers the counting display cycles through.
const OBJECTS: [&str; 12] = [
    "🍎", "🌟", "🎈", "🐶", "🚂", "🍦", "🌼", "🦋", "🐱", "🐢", "🦁", "🐘",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountingVariant {
    Basic,
    Skip,
    Backwards,
}

/// Which variants a level mixes in. Beginners only count objects; skip
/// counting arrives at Intermediate and counting backwards at Advanced.
fn select_variant<R: Rng>(rng: &mut R, level: Level) -> CountingVariant {
    let pool = match level {
        Level::Beginner => vec![Weighted::new(CountingVariant::Basic)],
        Level::Intermediate => vec![
            Weighted::new(CountingVariant::Basic),
            Weighted::new(CountingVariant::Skip),
        ],
        Level::Advanced => vec![
            Weighted::new(CountingVariant::Basic),
            Weighted::new(CountingVariant::Skip),
            Weighted::new(CountingVariant::Backwards),
        ],
    };
    pick_weighted(rng, &pool).copied().unwrap_or(CountingVariant::Basic)
}

/// Lay out `count` markers. Advanced counts above 20 come pre-grouped in
/// tens so the player can practice the grouping strategy.
fn object_display<R: Rng>(rng: &mut R, count: i64, level: Level) -> (String, DisplayKind) {
    let marker = OBJECTS[rng.gen_range(0..OBJECTS.len())];

    if level == Level::Advanced && count > 20 {
        let groups = count / 10;
        let remainder = (count % 10) as usize;
        let mut display = "🔟 ".repeat(groups as usize);
        display.push_str(&marker.repeat(remainder));
        return (display.trim_end().to_string(), DisplayKind::Grouped);
    }

    (marker.repeat(count as usize), DisplayKind::Objects)
}

pub fn generate<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    match select_variant(rng, level) {
        CountingVariant::Basic => basic(rng, level, question_id, tracker),
        CountingVariant::Skip => skip(rng, level, question_id, tracker),
        CountingVariant::Backwards => backwards(rng, level, question_id, tracker),
    }
}

/// "How many objects do you see?" over a row of emoji markers.
fn basic<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let (min, max) = match level {
        Level::Beginner     => (1, 10),
        Level::Intermediate => (5, 20),
        Level::Advanced     => (10, 50),
    };

    let mut count = rng.gen_range(min..=max);
    for _ in 0..PICK_ATTEMPTS {
        if !tracker.was_recently_asked(Category::Counting, &format!("basic:{}", count)) {
            break;
        }
        count = rng.gen_range(min..=max);
    }
    tracker.track(Category::Counting, format!("basic:{}", count));

    let (display, display_kind) = object_display(rng, count, level);
    let options = number_options(rng, count, offset_range(level), level != Level::Beginner);

    helpers::question(
        question_id,
        Category::Counting,
        "Basic",
        "How many objects do you see?".to_string(),
        display,
        display_kind,
        Answer::Number(count),
        options,
    )
}

/// "What comes next?" over an ascending skip-counting sequence.
fn skip<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let (increments, sequence_len): (&[i64], i64) = match level {
        Level::Beginner     => (&[2, 5], 4),
        Level::Intermediate => (&[2, 3, 5, 10], 5),
        Level::Advanced     => (&[2, 3, 5, 10], 6),
    };

    let mut increment = increments[rng.gen_range(0..increments.len())];
    let mut start = if level == Level::Beginner {
        0
    } else {
        rng.gen_range(0..=increment * 2)
    };
    for _ in 0..PICK_ATTEMPTS {
        let key = format!("skip:{}:{}", increment, start);
        if !tracker.was_recently_asked(Category::Counting, &key) {
            break;
        }
        increment = increments[rng.gen_range(0..increments.len())];
        start = if level == Level::Beginner {
            0
        } else {
            rng.gen_range(0..=increment * 2)
        };
    }
    tracker.track(Category::Counting, format!("skip:{}:{}", increment, start));

    let sequence: Vec<i64> = (0..sequence_len).map(|i| start + increment * i).collect();
    let answer = start + increment * sequence_len;

    let display = format!(
        "{}, ...",
        sequence
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let text = format!(
        "What comes next in this sequence? (counting by {}s)",
        increment
    );
    let options = number_options(rng, answer, offset_range(level), level != Level::Beginner);

    helpers::question(
        question_id,
        Category::Counting,
        format!("Skip:{}", increment),
        text,
        display,
        DisplayKind::Sequence,
        Answer::Number(answer),
        options,
    )
}

/// "What comes next?" over a descending sequence.
fn backwards<R: Rng>(
    rng: &mut R,
    level: Level,
    question_id: String,
    tracker: &mut DiversityTracker,
) -> Question {
    let (max, sequence_len): (i64, i64) = match level {
        Level::Beginner     => (10, 3),
        Level::Intermediate => (20, 4),
        Level::Advanced     => (50, 5),
    };

    let mut start = rng.gen_range(sequence_len + 2..=max);
    for _ in 0..PICK_ATTEMPTS {
        if !tracker.was_recently_asked(Category::Counting, &format!("back:{}", start)) {
            break;
        }
        start = rng.gen_range(sequence_len + 2..=max);
    }
    tracker.track(Category::Counting, format!("back:{}", start));

    let sequence: Vec<i64> = (0..sequence_len).map(|i| start - i).collect();
    let answer = start - sequence_len;

    let display = format!(
        "{}, ...",
        sequence
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let options = number_options(rng, answer, offset_range(level), level != Level::Beginner);

    helpers::question(
        question_id,
        Category::Counting,
        "Backwards",
        "What comes next in this sequence counting backwards?".to_string(),
        display,
        DisplayKind::Sequence,
        Answer::Number(answer),
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gen(seed: u64, level: Level) -> Question {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tracker = DiversityTracker::new();
        generate(&mut rng, level, "CT-TEST".into(), &mut tracker)
    }

    #[test]
    fn beginner_is_always_basic_counting() {
        for seed in 0..20 {
            let q = gen(seed, Level::Beginner);
            assert_eq!(q.variant_key, "Basic");
            match q.correct_answer {
                Answer::Number(n) => assert!((1..=10).contains(&n)),
                Answer::Text(_) => panic!("counting answers are numeric"),
            }
        }
    }

    #[test]
    fn advanced_mixes_all_three_variants() {
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            let q = gen(seed, Level::Advanced);
            let variant = q.variant_key.split(':').next().unwrap().to_string();
            seen.insert(variant);
        }
        for expected in ["Basic", "Skip", "Backwards"] {
            assert!(seen.contains(expected), "variant {} never appeared", expected);
        }
    }

    #[test]
    fn skip_sequences_are_arithmetic() {
        for seed in 0..100 {
            let q = gen(seed, Level::Intermediate);
            if !q.variant_key.starts_with("Skip") {
                continue;
            }
            let increment: i64 = q.variant_key.split(':').nth(1).unwrap().parse().unwrap();
            let numbers: Vec<i64> = q
                .display
                .trim_end_matches(", ...")
                .split(", ")
                .map(|n| n.parse().unwrap())
                .collect();
            for pair in numbers.windows(2) {
                assert_eq!(pair[1] - pair[0], increment);
            }
            let expected = numbers.last().unwrap() + increment;
            assert_eq!(q.correct_answer, Answer::Number(expected));
        }
    }

    #[test]
    fn backwards_answer_continues_the_descent() {
        let mut checked = 0;
        for seed in 0..300 {
            let q = gen(seed, Level::Advanced);
            if q.variant_key != "Backwards" {
                continue;
            }
            checked += 1;
            let numbers: Vec<i64> = q
                .display
                .trim_end_matches(", ...")
                .split(", ")
                .map(|n| n.parse().unwrap())
                .collect();
            assert_eq!(
                q.correct_answer,
                Answer::Number(numbers.last().unwrap() - 1)
            );
            assert!(numbers.windows(2).all(|p| p[0] - p[1] == 1));
        }
        assert!(checked > 0, "no backwards questions across seeds");
    }

    #[test]
    fn grouped_display_appears_for_large_advanced_counts() {
        let mut grouped = 0;
        for seed in 0..300 {
            let q = gen(seed, Level::Advanced);
            if q.variant_key == "Basic" && q.display_kind == DisplayKind::Grouped {
                grouped += 1;
                assert!(q.display.contains("🔟"));
            }
        }
        assert!(grouped > 0, "grouped display never appeared");
    }

    #[test]
    fn repeated_generation_avoids_recent_targets() {
        // With a shared tracker the same basic count should not come up twice
        // within a short run while alternatives remain.
        let mut rng = StdRng::seed_from_u64(17);
        let mut tracker = DiversityTracker::new();
        let mut answers = Vec::new();
        for _ in 0..4 {
            let q = generate(&mut rng, Level::Beginner, "CT-TEST".into(), &mut tracker);
            if let Answer::Number(n) = q.correct_answer {
                answers.push(n);
            }
        }
        for pair in answers.windows(2) {
            assert_ne!(pair[0], pair[1], "immediate repeat in {:?}", answers);
        }
    }
}
