//! Small formatting helpers shared by info retrieval and merging.

use std::path::Path;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Format a byte count as megabytes with one decimal place, e.g. `"1.0 MB"`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / BYTES_PER_MEGABYTE)
}

/// Final component of `path`, or an empty string when there is none.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Percentage of `processed` out of `total`, rounded half up.
///
/// `total` must be non-zero; merge rejects empty input lists long before
/// progress is computed.
pub fn percent_complete(processed: usize, total: usize) -> u8 {
    debug_assert!(total > 0);
    debug_assert!(processed <= total);

    let scaled = (processed as u64 * 200 + total as u64) / (total as u64 * 2);
    scaled.min(100) as u8
}
