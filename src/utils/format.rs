//! Formatting utilities for file sizes and timestamps.

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) if bytes >= 1_000_000_000 => {
            format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
        }
        Some(bytes) if bytes >= 1_000_000 => format!("{:.1}M", bytes as f64 / 1_000_000.0),
        Some(bytes) if bytes >= 1_000 => format!("{:.1}K", bytes as f64 / 1_000.0),
        Some(bytes) => format!("{}B", bytes),
    }
}

/// Date part of an ISO-8601 timestamp ("2023-01-02T10:00:00Z" -> "2023-01-02").
///
/// Timestamps come from the server as opaque strings; anything that is not
/// ISO-shaped is shown unchanged.
pub fn format_timestamp(timestamp: &str) -> &str {
    match timestamp.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => timestamp,
    }
}
