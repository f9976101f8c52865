use serde_json::{json, Value};

use crate::question_engine::models::{Answer, DisplayKind, Question};

/// The `displayType` strings the web client switches its renderers on.
fn display_type_str(kind: DisplayKind) -> &'static str {
    match kind {
        DisplayKind::Objects     => "standard",
        DisplayKind::Grouped     => "grouped",
        DisplayKind::Sequence    => "sequence",
        DisplayKind::FractionBar => "visualization",
        DisplayKind::Expression  => "expression",
        DisplayKind::Prompt      => "prompt",
        DisplayKind::Shape       => "shape",
    }
}

/// Answers cross the boundary as plain JSON scalars: numbers for counting
/// and number games, strings for fractions and shapes. The client compares
/// them with strict equality, so the representation must not change shape
/// between `correctAnswer` and `options`.
fn answer_value(answer: &Answer) -> Value {
    match answer {
        Answer::Number(n) => json!(n),
        Answer::Text(s)   => json!(s),
    }
}

/// Map a [`Question`] to the JSON object the web client consumes.
pub fn to_client_question(question: &Question) -> Value {
    json!({
        "questionId": question.question_id,
        "category": question.category.to_string(),
        "variantKey": question.variant_key,
        "text": question.text,
        "display": question.display,
        "displayType": display_type_str(question.display_kind),
        "correctAnswer": answer_value(&question.correct_answer),
        "options": question.options.iter().map(answer_value).collect::<Vec<_>>(),
    })
}
