//! Commit hash and build date, generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner, e.g. `metin 0.1.0 (abc1234, 2026-01-31)`.
pub fn version_line() -> String {
    format!(
        "{} {} ({}, {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_date_is_iso_day() {
        assert!(BUILD_DATE == "unknown" || BUILD_DATE.len() == 10);
    }

    #[test]
    fn test_version_line_names_crate() {
        assert!(version_line().starts_with("metin "));
    }
}
