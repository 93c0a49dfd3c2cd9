//! Locale-aware date formatting and small text helpers.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use crate::i18n::LocaleCode;

const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn month_name(locale: LocaleCode, month0: u32) -> &'static str {
    let names = match locale {
        LocaleCode::Pt => &MONTHS_PT,
        LocaleCode::En => &MONTHS_EN,
    };
    names
        .get(usize::try_from(month0).unwrap_or(usize::MAX))
        .copied()
        .unwrap_or_default()
}

/// Month heading (1-12) with a capital initial: `Junho` / `June`.
#[must_use]
pub fn month_title(month: u32, locale: LocaleCode) -> String {
    let name = month_name(locale, month.saturating_sub(1));
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Long calendar date: `1 de março de 2025` / `March 1, 2025`.
#[must_use]
pub fn format_day(date: NaiveDate, locale: LocaleCode) -> String {
    let month = month_name(locale, date.month0());
    match locale {
        LocaleCode::Pt => format!("{} de {month} de {}", date.day(), date.year()),
        LocaleCode::En => format!("{month} {}, {}", date.day(), date.year()),
    }
}

/// Publication date of a timestamp.
#[must_use]
pub fn format_date(timestamp: DateTime<Utc>, locale: LocaleCode) -> String {
    format_day(timestamp.date_naive(), locale)
}

/// Date and time: `1 de março de 2025, 09:30` / `March 1, 2025, 09:30`.
#[must_use]
pub fn format_date_time(timestamp: DateTime<Utc>, locale: LocaleCode) -> String {
    format!(
        "{}, {:02}:{:02}",
        format_date(timestamp, locale),
        timestamp.hour(),
        timestamp.minute()
    )
}

/// Event schedule; a same-day end collapses to the time only.
#[must_use]
pub fn format_event_range(
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
    locale: LocaleCode,
) -> String {
    let start = format_date_time(starts_at, locale);
    match ends_at {
        Some(end) if end.date_naive() == starts_at.date_naive() => {
            format!("{start} - {:02}:{:02}", end.hour(), end.minute())
        }
        Some(end) => format!("{start} - {}", format_date_time(end, locale)),
        None => start,
    }
}

/// Shorten `text` to at most `max_chars` characters, breaking on a word
/// boundary and appending an ellipsis when cut.
#[must_use]
pub fn truncate_words(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    let shortened = cut
        .rfind(char::is_whitespace)
        .map_or(cut.as_str(), |index| &cut[..index]);
    format!("{}…", shortened.trim_end())
}
