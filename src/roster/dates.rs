use crate::load::Cell;
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Day-before-month formats tried in order; the first successful parse wins.
/// Date-only forms come before datetime forms.
const DAYFIRST_DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%y",
    "%d-%m-%y",
    // %B accepts full and abbreviated month names when parsing
    "%d %B %Y",
    "%d-%B-%Y",
    "%d %B %y",
    "%Y-%m-%d",
    "%Y/%m/%d",
];

const DAYFIRST_DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Fallback token: a 1-2 digit day, a separator, and a month name.
/// "12-Jan", "3 / March", "5 Feb" all match.
static DAY_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\s*[-/ ]\s*([A-Za-z]{3,9})").expect("day-month pattern"));

/// Coerce one Date cell to a calendar date.
///
/// Already-typed datetime cells are truncated to date precision. Text goes
/// through two tiers: the day-first format list above, then the day-month
/// regex with `fallback_year` appended. Anything else is `None`, and the row
/// is dropped upstream rather than failing the run. A regex match naming an
/// impossible date like "32-Jan" is also `None`, never a panic.
pub fn coerce_date(cell: &Cell, fallback_year: i32) -> Option<NaiveDate> {
    if let Cell::DateTime(dt) = cell {
        return Some(dt.date());
    }
    if cell.is_blank() {
        return None;
    }
    let rendered = cell.text();
    let text = rendered.trim();

    if let Some(date) = parse_dayfirst(text) {
        return Some(date);
    }
    let caps = DAY_MONTH_RE.captures(text)?;
    let rebuilt = format!("{}-{} {}", &caps[1], &caps[2], fallback_year);
    NaiveDate::parse_from_str(&rebuilt, "%d-%B %Y").ok()
}

fn parse_dayfirst(text: &str) -> Option<NaiveDate> {
    for fmt in DAYFIRST_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Some(date);
        }
    }
    for fmt in DAYFIRST_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn day_month_token_uses_fallback_year() {
        assert_eq!(
            coerce_date(&text("12-Jan"), 2025),
            NaiveDate::from_ymd_opt(2025, 1, 12)
        );
        assert_eq!(
            coerce_date(&text("3 / March"), 2025),
            NaiveDate::from_ymd_opt(2025, 3, 3)
        );
        assert_eq!(
            coerce_date(&text("Tue 4 Feb"), 2025),
            NaiveDate::from_ymd_opt(2025, 2, 4)
        );
    }

    #[test]
    fn unparseable_text_is_unresolved() {
        assert_eq!(coerce_date(&text("Banana"), 2025), None);
        assert_eq!(coerce_date(&text(""), 2025), None);
        assert_eq!(coerce_date(&text("   "), 2025), None);
        assert_eq!(coerce_date(&Cell::Empty, 2025), None);
    }

    #[test]
    fn impossible_regex_match_is_unresolved_not_a_panic() {
        assert_eq!(coerce_date(&text("32-Jan"), 2025), None);
        assert_eq!(coerce_date(&text("31-Feb"), 2025), None);
    }

    #[test]
    fn dayfirst_numeric_forms() {
        // 02/04/2025 is the 2nd of April, not February 4th
        assert_eq!(
            coerce_date(&text("02/04/2025"), 2025),
            NaiveDate::from_ymd_opt(2025, 4, 2)
        );
        assert_eq!(
            coerce_date(&text("4-2-2025"), 2025),
            NaiveDate::from_ymd_opt(2025, 2, 4)
        );
    }

    #[test]
    fn full_month_names_parse() {
        assert_eq!(
            coerce_date(&text("12 January 2025"), 2024),
            NaiveDate::from_ymd_opt(2025, 1, 12)
        );
    }

    #[test]
    fn iso_forms_parse() {
        assert_eq!(
            coerce_date(&text("2025-02-04"), 2025),
            NaiveDate::from_ymd_opt(2025, 2, 4)
        );
        assert_eq!(
            coerce_date(&text("2025-02-04 13:45:00"), 2025),
            NaiveDate::from_ymd_opt(2025, 2, 4)
        );
    }

    #[test]
    fn datetime_cells_truncate_to_date() {
        let dt = NaiveDate::from_ymd_opt(2025, 2, 4)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(
            coerce_date(&Cell::DateTime(dt), 2025),
            NaiveDate::from_ymd_opt(2025, 2, 4)
        );
    }

    #[test]
    fn recoercion_is_stable() {
        let first = coerce_date(&text("12-Jan"), 2025).unwrap();
        let again = coerce_date(
            &Cell::DateTime(first.and_hms_opt(0, 0, 0).unwrap()),
            2025,
        );
        assert_eq!(again, Some(first));
    }

    #[test]
    fn bare_numbers_are_unresolved() {
        assert_eq!(coerce_date(&Cell::Number(45000.0), 2025), None);
    }
}
