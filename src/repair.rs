//! Best-effort repair of model output into JSON
//!
//! Models asked for "ONLY a JSON object" still wrap it in markdown fences,
//! answer with Python dict literals, or add chatter around it. The repair pass
//! strips fences, rewrites Python literals, cuts out the first balanced
//! `{...}` block and hands the result to `serde_json`.

use crate::error::{RelayError, RelayResult};
use crate::logging::log_debug;

use serde_json::Value;

/// Detail for an empty reply handed to [`ResponseRepair::extract_json_text`]
pub const EMPTY_MODEL_TEXT_MESSAGE: &str = "Empty text from model.";

/// Repair pipeline for chat completion replies
pub struct ResponseRepair;

impl ResponseRepair {
    /// Repair `raw` and parse it as JSON.
    ///
    /// Any failure, including an empty reply, is reported as
    /// [`RelayError::RepairParseError`] carrying `raw` verbatim.
    pub fn parse_model_output(raw: &str) -> RelayResult<Value> {
        log_debug!(
            content_length = raw.len(),
            content_preview = raw.chars().take(200).collect::<String>(),
            "Repairing model output into JSON"
        );

        let candidate = match Self::extract_json_text(raw) {
            Ok(candidate) => candidate,
            Err(_) => return Err(RelayError::repair_parse_error(raw)),
        };

        serde_json::from_str::<Value>(&candidate).map_err(|e| {
            log_debug!(
                error = %e,
                candidate = %candidate,
                "Repaired candidate is not valid JSON"
            );
            RelayError::repair_parse_error(raw)
        })
    }

    /// Normalize `text` into a string a strict JSON parser should accept.
    ///
    /// 1. Reject empty input
    /// 2. Strip ```` ```json ```` and ```` ``` ```` markers, trim
    /// 3. Rewrite Python literals ([`Self::normalize_python_literals`])
    /// 4. Return the first balanced `{...}` block, or the whole trimmed text
    ///    when there is no `{` or the braces never balance
    pub fn extract_json_text(text: &str) -> RelayResult<String> {
        if text.is_empty() {
            // Not an inbound rejection; parse_model_output logs the repair failure
            return Err(RelayError::ValidationError {
                message: EMPTY_MODEL_TEXT_MESSAGE.to_string(),
            });
        }

        let stripped = Self::strip_code_fences(text);
        let normalized = Self::normalize_python_literals(&stripped);

        let Some(start) = normalized.find('{') else {
            return Ok(normalized.trim().to_string());
        };

        match Self::find_balanced_end(&normalized[start..]) {
            Some(end) => Ok(normalized[start..=start + end].trim().to_string()),
            None => {
                log_debug!(
                    content_length = normalized.len(),
                    "Unbalanced braces in model output, returning full text"
                );
                Ok(normalized.trim().to_string())
            }
        }
    }

    /// Rewrite Python dict literals as JSON: `None` -> `null`, `'` -> `"`.
    ///
    /// Plain global substitution. It does not track string boundaries, so an
    /// apostrophe inside a value (`"O'Brien"`) or the word `None` inside a
    /// value is rewritten too and the result may no longer parse.
    pub fn normalize_python_literals(text: &str) -> String {
        text.replace("None", "null").replace('\'', "\"")
    }

    fn strip_code_fences(text: &str) -> String {
        text.replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string()
    }

    /// Byte offset of the `}` that closes the `{` at the start of `text`
    fn find_balanced_end(text: &str) -> Option<usize> {
        let mut brace_count: usize = 0;

        for (idx, byte) in text.bytes().enumerate() {
            match byte {
                b'{' => brace_count += 1,
                b'}' => {
                    brace_count = brace_count.saturating_sub(1);
                    if brace_count == 0 {
                        return Some(idx);
                    }
                }
                _ => {}
            }
        }

        None
    }
}
