//! Repetition avoidance and phrasing variety.
//!
//! One `DiversityTracker` serves a whole play session: it remembers the last
//! few question keys per category and is consulted before a candidate
//! question is accepted. The call order is always generate candidate → check
//! history → retry or accept → record. The tracker is an explicit value (not
//! a global), so tests build as many independent instances as they like.

use std::collections::{HashMap, VecDeque};

use rand::Rng;

use crate::question_engine::models::Category;

/// History window per category. A key older than this many questions is fair
/// game again.
pub const MAX_RECENT_QUESTIONS: usize = 10;

#[derive(Debug, Default)]
pub struct DiversityTracker {
    recent: HashMap<Category, VecDeque<String>>,
}

impl DiversityTracker {
    pub fn new() -> Self {
        DiversityTracker::default()
    }

    /// Record an asked question. The history is a bounded FIFO queue, not a
    /// set: duplicate keys each take a slot.
    pub fn track(&mut self, category: Category, key: impl Into<String>) {
        let history = self.recent.entry(category).or_default();
        history.push_back(key.into());
        if history.len() > MAX_RECENT_QUESTIONS {
            history.pop_front();
        }
    }

    pub fn was_recently_asked(&self, category: Category, key: &str) -> bool {
        self.recent
            .get(&category)
            .map_or(false, |history| history.iter().any(|k| k == key))
    }

    /// Uniform pick from the items whose key is not in the recent window.
    /// When every item was recently used the full list is the pool again.
    /// The chosen key is tracked before returning. `None` only for an empty
    /// `items`.
    pub fn pick_non_repeating<'a, T, R, K>(
        &mut self,
        rng: &mut R,
        items: &'a [T],
        category: Category,
        key_fn: K,
    ) -> Option<&'a T>
    where
        R: Rng,
        K: Fn(&T) -> String,
    {
        if items.is_empty() {
            return None;
        }

        let available: Vec<&T> = items
            .iter()
            .filter(|item| !self.was_recently_asked(category, &key_fn(item)))
            .collect();

        let chosen = if available.is_empty() {
            &items[rng.gen_range(0..items.len())]
        } else {
            available[rng.gen_range(0..available.len())]
        };

        self.track(category, key_fn(chosen));
        Some(chosen)
    }
}

/// A selection candidate with a relative weight.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> Weighted<T> {
    /// Default weight of 1.
    pub fn new(value: T) -> Self {
        Weighted { value, weight: 1.0 }
    }

    pub fn with_weight(value: T, weight: f64) -> Self {
        Weighted { value, weight }
    }
}

/// Weighted random selection: draw a cursor in [0, total) and subtract
/// weights until it goes non-positive. Rounding can leave the cursor
/// positive after the scan; the first item catches that.
pub fn pick_weighted<'a, R: Rng, T>(rng: &mut R, items: &'a [Weighted<T>]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }

    let total: f64 = items.iter().map(|item| item.weight).sum();
    let mut cursor = rng.gen::<f64>() * total;

    for item in items {
        cursor -= item.weight;
        if cursor <= 0.0 {
            return Some(&item.value);
        }
    }
    Some(&items[0].value)
}

/// Uniform template pick with a fixed fallback for an empty pool.
pub fn pick_template<R: Rng>(rng: &mut R, templates: &[&str]) -> String {
    if templates.is_empty() {
        return "What is the answer?".to_string();
    }
    templates[rng.gen_range(0..templates.len())].to_string()
}

const POSITIVE_FEEDBACK: [&str; 12] = [
    "Excellent work!",
    "Great job!",
    "Perfect!",
    "That's correct!",
    "Wonderful!",
    "Outstanding!",
    "You got it right!",
    "Well done!",
    "Amazing work!",
    "Spot on!",
    "Fantastic!",
    "Brilliant!",
];

/// A random encouragement phrase for a correct answer.
pub fn positive_feedback<R: Rng>(rng: &mut R) -> &'static str {
    POSITIVE_FEEDBACK[rng.gen_range(0..POSITIVE_FEEDBACK.len())]
}
