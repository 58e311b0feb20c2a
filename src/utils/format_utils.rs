//! Formatting helpers for result summaries

/// Bytes per megabyte used in summaries
const MEGABYTE: f64 = 1024.0 * 1024.0;

/// Size in megabytes with one decimal, e.g. `1.5 MB`
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / MEGABYTE)
}

/// Ratio with one decimal, e.g. `42.0%`
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.1}%", ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0), "0.0 MB");
        assert_eq!(format_megabytes(1024 * 1024 * 3 / 2), "1.5 MB");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(42.04), "42.0%");
    }
}
