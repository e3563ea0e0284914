//! Serialization utilities for WASM/JavaScript compatibility

use serde::Serialize;

/// Format bytes with human-readable units
pub fn format_bytes_human(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: u64 = 1024;

    if bytes < THRESHOLD {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD as f64 && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD as f64;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}

/// Safe JSON serialization for JavaScript-compatible types
pub fn serialize_js_safe<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize,
{
    serde_json::to_string(value)
}

/// Shortens a `data:` URL for log lines; the payload can be megabytes long.
pub fn abbreviate_data_url(url: &str) -> String {
    const KEEP: usize = 48;

    match url.char_indices().nth(KEEP) {
        Some((cut, _)) => format!("{}... ({} chars)", &url[..cut], url.len()),
        None => url.to_string(),
    }
}
