//! Post date display.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;
use time::macros::format_description;

/// Format a `YYYY-MM-DD` date (optionally followed by a time part) as
/// `Mon D, YYYY`. Anything else is returned unchanged.
pub fn format_post_date(raw: &str) -> String {
    let input = format_description!("[year]-[month]-[day]");
    let output = format_description!("[month repr:short] [day padding:none], [year]");

    let day_part = raw.trim().get(..10).unwrap_or(raw);
    Date::parse(day_part, input)
        .ok()
        .and_then(|date| date.format(output).ok())
        .unwrap_or_else(|| raw.to_owned())
}
