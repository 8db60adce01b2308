//! Review rendering.

use anyhow::Result;
use critiq_core::ReviewResponse;

/// Renders the review as human-readable text.
///
/// Lists the reviewed files first, then the review itself.
pub fn render_text(response: &ReviewResponse) -> String {
    let mut out = String::new();
    out.push_str("Files reviewed:\n");
    for name in &response.files {
        out.push_str(&format!("  - {name}\n"));
    }
    out.push('\n');
    out.push_str(&response.review);
    out
}

/// Renders the review as JSON for scripting.
pub fn render_json(response: &ReviewResponse, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    Ok(json)
}

// ============================================================================
// Tests
// ============================================================================
