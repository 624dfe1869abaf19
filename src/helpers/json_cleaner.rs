const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Removes every markdown code fence marker and trims the rest. Models add
/// fences even when told not to.
pub fn strip_code_fences(text: &str) -> String {
    text.replace(JSON_FENCE, "").replace(FENCE, "").trim().to_string()
}
