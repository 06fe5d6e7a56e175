//! Human-readable formatting for log output.

const UNITS: [(u64, &str); 2] = [(1_000_000, "M"), (1_000, "K")];

/// Compact byte count, e.g. "912B", "1.5K", "3.4M".
pub fn format_size(bytes: u64) -> String {
    UNITS
        .iter()
        .find(|(scale, _)| bytes >= *scale)
        .map(|(scale, unit)| format!("{:.1}{}", bytes as f64 / *scale as f64, unit))
        .unwrap_or_else(|| format!("{}B", bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(999), "999B");
        assert_eq!(format_size(1_000), "1.0K");
        assert_eq!(format_size(1_500), "1.5K");
        assert_eq!(format_size(2_345_678), "2.3M");
    }
}
