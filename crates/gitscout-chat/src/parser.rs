//! Natural-language extraction over raw message text.
//!
//! Finds date mentions and commit-SHA tokens. Date-range extraction is a
//! total function: absence of a parseable date is not an error, it is the
//! default-window case.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;

use gitscout_core::DateRange;

/// Width of the trailing window used when no date is mentioned at all.
pub const DEFAULT_WINDOW_DAYS: u64 = 7;

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").expect("Invalid ISO date regex"));

static COMMIT_SHA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9a-f]{7,40}\b").expect("Invalid commit SHA regex"));

/// Whether the message contains a literal `YYYY-MM-DD` date pattern.
pub fn contains_iso_date(message: &str) -> bool {
    ISO_DATE_RE.is_match(message)
}

/// The first 7-40 character lowercase hex token in the message, if any.
pub fn find_commit_sha(message: &str) -> Option<String> {
    let lowered = message.to_lowercase();
    COMMIT_SHA_RE.find(&lowered).map(|m| m.as_str().to_string())
}

/// All valid calendar dates literally mentioned in the message.
fn mentioned_dates(lowered: &str) -> Vec<NaiveDate> {
    ISO_DATE_RE
        .captures_iter(lowered)
        .filter_map(|caps| {
            let year = caps.get(1)?.as_str().parse().ok()?;
            let month = caps.get(2)?.as_str().parse().ok()?;
            let day = caps.get(3)?.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        })
        .collect()
}

/// Extract a date range from free text relative to `today`.
///
/// Resolution order: year phrases ("last year"/"this year", anchored to the
/// mentioned year when an explicit date is present), literal dates (two or
/// more form a range, one forms a single-day range), relative day/week/month
/// mentions, and finally a trailing window of [`DEFAULT_WINDOW_DAYS`] days
/// ending today. Invalid date-shaped tokens are ignored.
pub fn extract_date_range(message: &str, today: NaiveDate) -> DateRange {
    let lowered = message.to_lowercase();
    let dates = mentioned_dates(&lowered);
    let anchor_year = dates.first().map_or(today.year(), |d| d.year());

    if lowered.contains("last year") {
        return DateRange::calendar_year(anchor_year - 1);
    }
    if lowered.contains("this year") {
        return DateRange::calendar_year(anchor_year);
    }

    match dates.as_slice() {
        [] => {}
        [single] => return DateRange::single_day(*single),
        many => {
            let min = many.iter().min().copied().unwrap_or(today);
            let max = many.iter().max().copied().unwrap_or(today);
            return DateRange::new(min, max);
        }
    }

    if lowered.contains("yesterday") {
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        return DateRange::single_day(yesterday);
    }
    if lowered.contains("today") {
        return DateRange::single_day(today);
    }
    if lowered.contains("last week") {
        return DateRange::trailing_days(today, 7);
    }
    if lowered.contains("last month") {
        return DateRange::trailing_days(today, 30);
    }

    DateRange::trailing_days(today, DEFAULT_WINDOW_DAYS)
}
