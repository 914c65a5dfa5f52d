use chrono::{DateTime, Datelike};

/// Timestamp stamped by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Calendar year the site was built in.
pub fn build_year() -> Option<i32> {
    year_of(BUILD_TIME)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}
