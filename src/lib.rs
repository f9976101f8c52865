//! # brainsprout_gen
//!
//! A fully offline, deterministic question generator for the BrainSprout
//! children's math games.
//!
//! This library generates randomised multiple-choice questions across five
//! categories (counting, number recognition, arithmetic, fractions, shapes).
//! Each question includes phrasing, a display payload for the client to
//! render, the correct answer, and three plausible distractors.
//!
//! ## How it works
//!
//! 1. Create a [`DiversityTracker`] for the play session — it remembers the
//!    last few questions per category so players don't see immediate repeats.
//! 2. Build a [`QuestionRequest`] with a category, level, and optional RNG
//!    seed, then call [`generate_question`] — the engine picks a question
//!    variant, computes the correct answer with checked arithmetic, builds
//!    distractors around it, and shuffles the four options.
//! 3. The returned [`Question`] carries everything the UI needs; on each
//!    answer the UI drives its own [`GameRound`] for score/lives/level
//!    progression and asks for the next question.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same question from the same tracker state — useful for tests.
//! - **Checked math**: every arithmetic and fraction operation returns a
//!   tagged [`MathResult`] instead of panicking or silently wrapping, and
//!   generators regenerate rather than surface degenerate problems.
//! - **Variant keys**: each question carries a `variant_key` identifying its
//!   logical variant (e.g. `"Skip:5"`) — stable across seeds, useful for
//!   tracking which question types a player has mastered.
//!
//! ## Quick start
//!
//! ```rust
//! use brainsprout_gen::{
//!     generate_question, Category, DiversityTracker, Level, QuestionRequest,
//! };
//!
//! let mut tracker = DiversityTracker::new();
//!
//! // Minimal — only the category is required (defaults: Beginner, entropy):
//! let question = generate_question(QuestionRequest::new(Category::Counting), &mut tracker);
//! println!("Q: {}", question.text);
//!
//! // Full control — set every field:
//! let question = generate_question(
//!     QuestionRequest {
//!         category: Category::Fractions,
//!         level: Level::Intermediate,
//!         rng_seed: Some(42),
//!     },
//!     &mut tracker,
//! );
//!
//! println!("Question: {}", question.question_id);
//! for option in &question.options {
//!     let mark = if *option == question.correct_answer { "+" } else { " " };
//!     println!("[{mark}] {option}");
//! }
//! ```

pub mod question_engine;
pub mod ui_adapter;

// Convenience re-exports so callers can use `brainsprout_gen::generate_question`
// directly without reaching into `question_engine::`.
pub use question_engine::{
    generate_question, Answer, Category, DisplayKind, DiversityTracker, Fraction,
    GameRound, Level, MathError, MathResult, MixedNumber, Question, QuestionRequest,
    RoundPhase, Weighted, MAX_RECENT_QUESTIONS, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER,
    POINTS_PER_CORRECT, QUESTIONS_PER_LEVEL,
};
pub use ui_adapter::to_client_question;
