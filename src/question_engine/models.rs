use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Game categories and difficulty
// ---------------------------------------------------------------------------

/// The five mini-game categories. Each owns its own recent-question history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Shapes,
    Counting,
    Numbers,
    Arithmetic,
    Fractions,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Shapes     => "shapes",
            Category::Counting   => "counting",
            Category::Numbers    => "numbers",
            Category::Arithmetic => "arithmetic",
            Category::Fractions  => "fractions",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Map the client's numeric level (1/2/3) onto a difficulty.
    /// Anything above 3 clamps to `Advanced`.
    pub fn from_number(n: u8) -> Level {
        match n {
            0 | 1 => Level::Beginner,
            2     => Level::Intermediate,
            _     => Level::Advanced,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Level::Beginner     => 1,
            Level::Intermediate => 2,
            Level::Advanced     => 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner     => write!(f, "Beginner"),
            Level::Intermediate => write!(f, "Intermediate"),
            Level::Advanced     => write!(f, "Advanced"),
        }
    }
}

// ---------------------------------------------------------------------------
// Question payload
// ---------------------------------------------------------------------------

/// Tells the client how to render the `display` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayKind {
    /// A row of countable object markers (emoji).
    Objects,
    /// Object markers organised in groups of ten.
    Grouped,
    /// A comma-separated number sequence ending in ", ...".
    Sequence,
    /// A filled/empty square bar representing a fraction.
    FractionBar,
    /// A bare arithmetic expression such as "7 + 5".
    Expression,
    /// A prompt value the player must locate among the options.
    Prompt,
    /// A shape slug the client maps to its own artwork.
    Shape,
}

/// A multiple-choice answer value.
///
/// Counting and number questions answer in integers; fraction questions in
/// formatted fraction strings; shape questions in shape names. Callers must
/// compare with the same representation the generator returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s)   => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub category: Category,
    pub level: Level,
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    /// Minimal constructor: Beginner difficulty, entropy-seeded RNG.
    pub fn new(category: Category) -> Self {
        QuestionRequest {
            category,
            level: Level::Beginner,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub category: Category,
    /// Identifies the logical question variant within this category.
    /// Stable across seeds — use for per-variant progress tracking.
    /// Examples: "Basic", "Skip:5", "Subtract", "Shape:Circle"
    pub variant_key: String,
    pub text: String,
    pub display: String,
    pub display_kind: DisplayKind,
    pub correct_answer: Answer,
    pub options: Vec<Answer>,
}
