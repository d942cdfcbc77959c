use chrono::{DateTime, Utc};

pub const MISSING: &str = "N/A";

fn parse(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Short date such as `1/2/2025`. Unparseable input is shown as-is.
pub fn format_date(value: Option<&str>) -> String {
    match value.filter(|v| !v.trim().is_empty()) {
        None => MISSING.to_string(),
        Some(raw) => parse(raw)
            .map(|dt| dt.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Long date with time such as `January 2, 2025, 10:00 AM`.
pub fn format_date_time(value: Option<&str>) -> String {
    match value.filter(|v| !v.trim().is_empty()) {
        None => MISSING.to_string(),
        Some(raw) => parse(raw)
            .map(|dt| dt.format("%B %-d, %Y, %I:%M %p").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_renders_short_form() {
        assert_eq!(format_date(Some("2025-01-02T10:00:00.000Z")), "1/2/2025");
        assert_eq!(format_date(Some("2025-11-20T23:59:00+00:00")), "11/20/2025");
    }

    #[test]
    fn format_date_time_renders_long_form() {
        assert_eq!(
            format_date_time(Some("2025-01-02T15:04:00Z")),
            "January 2, 2025, 03:04 PM"
        );
    }

    #[test]
    fn missing_values_render_placeholder() {
        assert_eq!(format_date(None), MISSING);
        assert_eq!(format_date_time(Some("  ")), MISSING);
    }

    #[test]
    fn unparseable_values_fall_back_to_raw_text() {
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date_time(Some("2025-13-45")), "2025-13-45");
    }
}
