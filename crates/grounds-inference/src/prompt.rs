//! The fixed instruction sent to the model for note analysis.

/// Build the analysis prompt with the note embedded verbatim in a `"""` block.
pub fn build_analysis_prompt(text: &str) -> String {
    format!(
        r#"
You are analyzing notes about coffee shops.

Return STRICT JSON ONLY.
Do not include any markdown, code fences, backticks, or explanation text.
Return exactly this structure and nothing else:

{{
  "summary": "1-2 sentence summary",
  "sentiment": "positive | neutral | negative",
  "tags": ["short", "kebab-case", "tags"]
}}

Note:
"""{}"""
"#,
        text
    )
}
