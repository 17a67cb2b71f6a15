//! Model selection from (input type, task type) criteria
//!
//! The criteria table is fixed at process start; unmatched pairs resolve
//! to the default text model.

/// Model used when no criteria pair matches.
pub const DEFAULT_MODEL: &str = "models/gemini-pro";

/// Multimodal variant for image-bearing requests.
pub const VISION_MODEL: &str = "models/gemini-pro-vision";

/// Static (input_type, task_type) -> model id table.
static MODEL_CRITERIA: &[((&str, &str), &str)] = &[
    (("text", "content_generation"), DEFAULT_MODEL),
    (("multimodal", "content_generation"), VISION_MODEL),
];

/// Resolve a model id from the criteria table.
///
/// Pure lookup, no side effects. Unknown pairs fall back to [`DEFAULT_MODEL`].
pub fn select_model(input_type: &str, task_type: &str) -> &'static str {
    MODEL_CRITERIA
        .iter()
        .find(|entry| entry.0 .0 == input_type && entry.0 .1 == task_type)
        .map(|entry| entry.1)
        .unwrap_or(DEFAULT_MODEL)
}
