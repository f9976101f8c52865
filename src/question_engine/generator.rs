use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::question_engine::{
    diversity::DiversityTracker,
    models::{Category, Question, QuestionRequest},
    topics,
};

/// Generate a unique question ID from category + RNG state.
fn make_question_id(category: Category, rng: &mut impl RngCore) -> String {
    let prefix = match category {
        Category::Shapes     => "SH",
        Category::Counting   => "CT",
        Category::Numbers    => "NR",
        Category::Arithmetic => "AR",
        Category::Fractions  => "FR",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Core dispatch: routes to the correct topic module.
///
/// `rng_seed: Some(seed)` reproduces the exact same question given the same
/// tracker state; `None` draws from entropy. The tracker is shared across
/// calls so the session's recent-question history spans categories.
pub fn generate_question(request: QuestionRequest, tracker: &mut DiversityTracker) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let question_id = make_question_id(request.category, &mut rng);

    match request.category {
        Category::Counting =>
            topics::counting::generate(&mut rng, request.level, question_id, tracker),

        Category::Numbers =>
            topics::numbers::generate(&mut rng, request.level, question_id, tracker),

        Category::Arithmetic =>
            topics::arithmetic::generate(&mut rng, request.level, question_id, tracker),

        Category::Fractions =>
            topics::fractions::generate(&mut rng, request.level, question_id, tracker),

        Category::Shapes =>
            topics::shapes::generate(&mut rng, request.level, question_id, tracker),
    }
}
