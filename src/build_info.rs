//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// "2026-10-16 (abc1234)" style version line.
pub fn version_line() -> String {
    format!("{} ({})", BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_version_line_contains_both_parts() {
        let line = version_line();
        assert!(line.contains(BUILD_DATE));
        assert!(line.ends_with(&format!("({})", BUILD_COMMIT)));
    }
}
