//! Shared formatting helpers for CLI output

use chrono::{DateTime, Utc};

/// Render a timestamp for table output
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Truncate long text for table cells
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Dash placeholder for absent optional fields
pub fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}
