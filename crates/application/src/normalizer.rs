//! Response normalizer - validates and repairs parsed model replies
//!
//! Parses the raw reply text as a JSON object, then shapes it into the
//! typed result for its use case. Only the summarize use case repairs
//! missing keys; a missing quiz is a failure and a missing fact answer
//! degrades to a fixed fallback.

use domain::{FALLBACK_SUMMARY, FactAnswer, Quiz, StudyNotes};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::error::PipelineError;

/// Extract JSON from a potentially markdown-wrapped reply
///
/// The service is asked for a bare JSON object, but replies occasionally
/// arrive fenced or with surrounding prose.
pub(crate) fn extract_json(response: &str) -> &str {
    let response = response.trim();

    // Handle ```json ... ``` blocks
    if let Some(start) = response.find("```json") {
        if let Some(end) = response[start + 7..].find("```") {
            return response[start + 7..start + 7 + end].trim();
        }
    }

    // Handle ``` ... ``` blocks
    if let Some(start) = response.find("```") {
        if let Some(end) = response[start + 3..].find("```") {
            return response[start + 3..start + 3 + end].trim();
        }
    }

    // Handle { ... } directly
    // Ensure start < end to avoid panics with malformed input like "} {"
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if start <= end {
                return &response[start..=end];
            }
        }
    }

    response
}

/// Parse the reply into a JSON object map
fn parse_object(raw: &str) -> Result<Map<String, Value>, PipelineError> {
    let value: Value = serde_json::from_str(extract_json(raw))
        .map_err(|e| PipelineError::MalformedUpstreamResponse(format!("JSON parse error: {e}")))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(PipelineError::MalformedUpstreamResponse(format!(
            "expected a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Normalize a summarize reply into [`StudyNotes`]
///
/// Missing keys are repaired with safe defaults and the repair is logged;
/// the call still succeeds. Defaulting is a completeness guarantee, not a
/// failure state.
pub fn study_notes(raw: &str) -> Result<StudyNotes, PipelineError> {
    let mut map = parse_object(raw)?;

    let mut injected: Vec<&str> = Vec::new();
    if !map.contains_key("summary") {
        map.insert("summary".to_string(), json!(FALLBACK_SUMMARY));
        injected.push("summary");
    }
    if !map.contains_key("keyPoints") {
        map.insert("keyPoints".to_string(), json!([]));
        injected.push("keyPoints");
    }
    if !map.contains_key("flashcards") {
        map.insert("flashcards".to_string(), json!([]));
        injected.push("flashcards");
    }

    if injected.is_empty() {
        debug!("Summary reply complete, no repair needed");
    } else {
        warn!(keys = ?injected, "Summary reply missing keys, injected defaults");
    }

    serde_json::from_value(Value::Object(map))
        .map_err(|e| PipelineError::MalformedUpstreamResponse(e.to_string()))
}

/// Normalize a quiz reply into a [`Quiz`]
///
/// `quizQuestions` must be a non-empty array; no defaulting is applied
/// because an empty quiz is not safely fillable. Per-question shape beyond
/// field presence is accepted as delivered.
pub fn quiz(raw: &str) -> Result<Quiz, PipelineError> {
    let map = parse_object(raw)?;

    let has_questions = map
        .get("quizQuestions")
        .and_then(Value::as_array)
        .is_some_and(|questions| !questions.is_empty());
    if !has_questions {
        warn!("Quiz reply had no usable quizQuestions array");
        return Err(PipelineError::EmptyOrMalformedQuiz);
    }

    serde_json::from_value(Value::Object(map)).map_err(|e| {
        warn!(error = %e, "Quiz questions failed to deserialize");
        PipelineError::EmptyOrMalformedQuiz
    })
}

/// Normalize a fact-check reply into a [`FactAnswer`]
///
/// A missing or non-string `answer` degrades to the fixed fallback instead
/// of failing: fact-check is a lower-stakes, conversational feature.
pub fn fact_answer(raw: &str) -> Result<FactAnswer, PipelineError> {
    let map = parse_object(raw)?;

    Ok(map.get("answer").and_then(Value::as_str).map_or_else(
        || {
            warn!("Fact-check reply had no answer key, degrading");
            FactAnswer::unverified()
        },
        |answer| FactAnswer {
            answer: answer.to_string(),
        },
    ))
}
