//! JSON extraction from raw model output.
//!
//! The model is asked to return only JSON, but responses routinely wrap
//! the object in prose or markdown code fences. The extractor finds the
//! first well-formed JSON object in the text and parses it.

use crate::error::AdvisorError;

/// Extract the first well-formed JSON object from raw model text.
///
/// Code fences are stripped, then every `{` is tried as a candidate start:
/// a string-aware brace scan finds the matching close, and the first slice
/// that parses as JSON wins.
pub fn extract_json_object(text: &str) -> Result<serde_json::Value, AdvisorError> {
    let cleaned = strip_code_fences(text);

    let bytes = cleaned.as_bytes();
    for (start, _) in cleaned.char_indices().filter(|&(_, c)| c == '{') {
        if let Some(end) = find_matching_brace(bytes, start) {
            let candidate = &cleaned[start..=end];
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(candidate) {
                return Ok(value);
            }
        }
    }

    Err(AdvisorError::MalformedOutput(
        "No JSON object found in model response".to_string(),
    ))
}

/// Remove markdown code-fence markers, keeping the fenced content.
fn strip_code_fences(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Index of the `}` closing the object opened at `start`, skipping braces
/// inside string literals. Returns `None` when the object never closes.
fn find_matching_brace(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}
