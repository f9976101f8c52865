//! Core question engine — checked math, fraction arithmetic, and question
//! generation for the BrainSprout mini-games.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | All shared types: categories, levels, answers, request/question structs |
//! | `arithmetic` | Overflow-checked integer math over the safe range, gcd/lcm |
//! | `fraction`   | Immutable `Fraction` value type with validated exact arithmetic |
//! | `geometry`   | Validated area/perimeter/volume helpers for the shape game |
//! | `diversity`  | Bounded recent-question history, weighted/non-repeating picks, feedback text |
//! | `helpers`    | Shared builders: Fisher-Yates shuffle, distractor options, question assembly |
//! | `generator`  | Single entry point `generate_question()` — dispatches to topics |
//! | `topics`     | 5 category generators (counting, numbers, arithmetic, fractions, shapes) |
//! | `round`      | Score/lives/level state machine for one mini-game round |

pub mod arithmetic;
pub mod diversity;
pub mod fraction;
pub mod generator;
pub mod geometry;
pub mod helpers;
pub mod models;
pub mod round;
pub mod topics;

// Re-export the public API surface so callers can use
// `question_engine::generate_question` without reaching into sub-modules.
pub use arithmetic::{MathError, MathResult, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use diversity::{
    pick_template, pick_weighted, positive_feedback, DiversityTracker, Weighted,
    MAX_RECENT_QUESTIONS,
};
pub use fraction::{Fraction, MixedNumber};
pub use generator::generate_question;
pub use models::{
    Answer, Category, DisplayKind, Level, Question, QuestionRequest,
};
pub use round::{GameRound, RoundPhase, POINTS_PER_CORRECT, QUESTIONS_PER_LEVEL};
