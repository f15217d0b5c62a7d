//! Prompt compiler - builds the instruction text sent to the model
//!
//! Pure string construction: no network, no parsing, deterministic for a
//! given input. Each use case has its own template and its own transcript
//! budget; the compiled output always requests a machine-parseable JSON
//! object.

use domain::Difficulty;

/// Transcripts are cut to this many characters before embedding
pub const TRANSCRIPT_CHAR_LIMIT: usize = 12_000;

/// Fact-check uses a tighter excerpt: it answers a narrow question rather
/// than summarizing the whole session
pub const FACT_CHECK_CHAR_LIMIT: usize = 3_000;

/// Questions generated when the caller does not ask for a count
pub const DEFAULT_QUIZ_COUNT: u32 = 5;

/// System prompt shared by all three use cases
const EDUCATOR_SYSTEM_PROMPT: &str = "You are an expert educator and AI assistant that creates \
beautifully formatted, context-aware explanations. You adapt your formatting style to match the \
content type and always prioritize clarity and comprehension.";

/// The pipeline entry point a prompt (and later its reply) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    /// Full summary with key points and flashcards
    Summarize,
    /// Multiple-choice quiz generation
    Quiz,
    /// Narrow question answered from an excerpt
    FactCheck,
}

impl UseCase {
    /// Short label for tracing fields
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::Quiz => "quiz",
            Self::FactCheck => "fact_check",
        }
    }
}

/// A compiled instruction, ready for the completion client
///
/// Built fresh per call; it embeds caller content and is never reused.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    /// Which entry point compiled this prompt
    pub use_case: UseCase,
    /// System-role framing
    pub system: &'static str,
    /// User-role instruction with the embedded transcript
    pub user: String,
    /// The model must reply with a single JSON object
    pub expects_json: bool,
}

/// Hard character cut with no word-boundary care; a trailing partial word
/// is silently dropped with the rest
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Compile the summarize prompt
pub fn summary_prompt(text: &str) -> PromptSpec {
    let excerpt = truncate_chars(text, TRANSCRIPT_CHAR_LIMIT);
    let user = format!(
        r#"Analyze this lecture transcript and explain it to a student in the best way possible.

INSTRUCTIONS:

1. Use an active, observational voice: "The speaker introduces...", "The session explores...".
2. Adapt your format to the content: tables for comparisons, numbered steps for processes, headers with paragraphs for concepts.
3. Use markdown naturally: ## headers, **bold** key terms, bullet lists, tables where they help.
4. Write clearly and conversationally; make it easy to skim and study from.
5. Do not mention timestamps or describe the recording format itself.

TRANSCRIPT:
---
{excerpt}
---

OUTPUT FORMAT (JSON):
{{
  "summary": "Your formatted markdown explanation here",
  "keyPoints": [
    "Concise takeaway 1",
    "Concise takeaway 2"
  ],
  "flashcards": [
    {{
      "front": "Concept or question",
      "back": "Clear, simple explanation"
    }}
  ]
}}

Return ONLY the JSON object, nothing else."#
    );

    PromptSpec {
        use_case: UseCase::Summarize,
        system: EDUCATOR_SYSTEM_PROMPT,
        user,
        expects_json: true,
    }
}

/// Compile the quiz prompt
///
/// `difficulty` falls back to medium when absent or unrecognized; `count`
/// falls back to [`DEFAULT_QUIZ_COUNT`] when absent or zero.
pub fn quiz_prompt(transcript: &str, difficulty: Option<&str>, count: Option<u32>) -> PromptSpec {
    let difficulty = difficulty.map_or_else(Difficulty::default, Difficulty::parse_lenient);
    let count = count.filter(|c| *c > 0).unwrap_or(DEFAULT_QUIZ_COUNT);
    let excerpt = truncate_chars(transcript, TRANSCRIPT_CHAR_LIMIT);

    let user = format!(
        r#"Generate exactly {count} multiple-choice quiz questions based on this lecture transcript.

Difficulty Level: {label}

IMPORTANT RULES:
1. Return ONLY valid JSON (no markdown, no extra text)
2. Use this EXACT structure:
{{
  "quizQuestions": [
    {{
      "question": "What is the main concept discussed?",
      "options": [
        "A) First option",
        "B) Second option",
        "C) Third option",
        "D) Fourth option"
      ],
      "answer": "A) First option"
    }}
  ]
}}

3. Make questions relevant to the lecture content
4. For {difficulty} difficulty:
   - easy: Focus on basic facts and definitions
   - medium: Focus on understanding and application
   - hard: Focus on analysis and critical thinking

5. Each question must have exactly 4 options (A, B, C, D)
6. The answer must match one of the options exactly (including the letter)

Lecture Transcript:
{excerpt}

Remember: Return ONLY the JSON object, nothing else."#,
        label = difficulty.prompt_label(),
    );

    PromptSpec {
        use_case: UseCase::Quiz,
        system: EDUCATOR_SYSTEM_PROMPT,
        user,
        expects_json: true,
    }
}

/// Compile the fact-check prompt
pub fn fact_check_prompt(transcript: &str, query: &str) -> PromptSpec {
    let excerpt = truncate_chars(transcript, FACT_CHECK_CHAR_LIMIT);
    let user = format!(
        r#"Answer the student's question based ONLY on the transcript excerpt provided.
Question: {query}
Transcript: {excerpt}
Return JSON: {{"answer": "your response here"}}"#
    );

    PromptSpec {
        use_case: UseCase::FactCheck,
        system: EDUCATOR_SYSTEM_PROMPT,
        user,
        expects_json: true,
    }
}
