//! Display filters: locale date formatting, reading-time estimation and
//! URL prefixing.
//!
//! Every filter is a pure function over its explicit arguments. Locale and
//! prefix are parameters, never process-wide state, so each function is
//! independently testable; [`crate::registry`] captures the configured
//! values when wiring filters for the host templating layer.

use crate::utils::date::DateTimeUtc;
use std::str::FromStr;
use thiserror::Error;

/// Average reading speed used by [`estimate_reading_time`]
const WORDS_PER_MINUTE: usize = 200;

/// Filter evaluation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The value passed to `date_display` is not a parseable calendar date.
    ///
    /// Surfaced to the caller, never replaced with a default date: a
    /// silently defaulted date would corrupt the displayed publish date
    /// without signal.
    #[error("malformed date value: `{0}`")]
    MalformedDate(String),

    #[error("unsupported locale tag: `{0}`")]
    UnsupportedLocale(String),

    #[error("unsupported reading-time language: `{0}`")]
    UnsupportedLanguage(String),
}

/// Locale for long-form date rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    RuRu,
    EnUs,
}

/// Genitive month names, as required after a day numeral in Russian
const RU_MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl FromStr for Locale {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru-RU" => Ok(Self::RuRu),
            "en-US" => Ok(Self::EnUs),
            other => Err(FilterError::UnsupportedLocale(other.to_string())),
        }
    }
}

/// Language for reading-time labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingLang {
    Ru,
    En,
}

impl ReadingLang {
    const fn unit(self) -> &'static str {
        match self {
            Self::Ru => "мин",
            Self::En => "min",
        }
    }
}

impl FromStr for ReadingLang {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(FilterError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Render a date value as a locale long-form date string.
///
/// Accepts "YYYY-MM-DD" or RFC3339 "YYYY-MM-DDTHH:MM:SSZ" values. The
/// output contains numeric day, full month name and numeric year per the
/// locale's conventions ("5 марта 2024 г." / "March 5, 2024").
///
/// Same input always yields same output; no dependency on the process
/// clock or locale environment.
pub fn format_date(value: &str, locale: Locale) -> Result<String, FilterError> {
    let date = DateTimeUtc::parse(value)
        .ok_or_else(|| FilterError::MalformedDate(value.to_string()))?;
    Ok(format_parsed_date(date, locale))
}

/// Long-form rendering of an already-validated date
pub fn format_parsed_date(date: DateTimeUtc, locale: Locale) -> String {
    let month = (date.month - 1) as usize;
    match locale {
        Locale::RuRu => format!("{} {} {} г.", date.day, RU_MONTHS[month], date.year),
        Locale::EnUs => format!("{} {}, {}", EN_MONTHS[month], date.day, date.year),
    }
}

/// Estimate reading time for a body of text, at 200 words per minute.
///
/// The token count mirrors splitting on whitespace runs where an empty or
/// whitespace-only body still counts as one token, so the minimum output
/// is always the one-minute label. Minutes are rounded up.
pub fn estimate_reading_time(body: &str, lang: ReadingLang) -> String {
    // An empty split still yields one (empty) token
    let words = body.split_whitespace().count().max(1);
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    format!("{} {}", minutes, lang.unit())
}

/// Prepend a URL path prefix, verbatim.
///
/// No slash normalization, no validation, no percent-encoding: callers are
/// responsible for well-formed inputs, and malformed input produces a
/// malformed but well-defined output.
pub fn prefix_url(path: &str, prefix: &str) -> String {
    format!("{prefix}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_ru_long_form() {
        assert_eq!(
            format_date("2024-03-05", Locale::RuRu).unwrap(),
            "5 марта 2024 г."
        );
        assert_eq!(
            format_date("2023-12-31", Locale::RuRu).unwrap(),
            "31 декабря 2023 г."
        );
    }

    #[test]
    fn test_format_date_en_long_form() {
        assert_eq!(
            format_date("2024-03-05", Locale::EnUs).unwrap(),
            "March 5, 2024"
        );
    }

    #[test]
    fn test_format_date_accepts_rfc3339() {
        assert_eq!(
            format_date("2024-03-05T14:30:45Z", Locale::RuRu).unwrap(),
            "5 марта 2024 г."
        );
    }

    #[test]
    fn test_format_date_malformed() {
        let err = format_date("not-a-date", Locale::RuRu).unwrap_err();
        assert_eq!(err, FilterError::MalformedDate("not-a-date".into()));

        assert!(format_date("", Locale::RuRu).is_err());
        assert!(format_date("2024-02-30", Locale::RuRu).is_err());
    }

    #[test]
    fn test_format_date_is_deterministic() {
        let a = format_date("2024-03-05", Locale::RuRu).unwrap();
        let b = format_date("2024-03-05", Locale::RuRu).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("ru-RU".parse::<Locale>().unwrap(), Locale::RuRu);
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!(matches!(
            "fr-FR".parse::<Locale>(),
            Err(FilterError::UnsupportedLocale(_))
        ));
    }

    #[test]
    fn test_reading_time_empty_body_is_one_minute() {
        assert_eq!(estimate_reading_time("", ReadingLang::Ru), "1 мин");
        assert_eq!(estimate_reading_time("   \n\t ", ReadingLang::Ru), "1 мин");
    }

    #[test]
    fn test_reading_time_boundaries() {
        let words = |n: usize| vec!["слово"; n].join(" ");

        assert_eq!(estimate_reading_time(&words(1), ReadingLang::Ru), "1 мин");
        assert_eq!(estimate_reading_time(&words(200), ReadingLang::Ru), "1 мин");
        assert_eq!(estimate_reading_time(&words(201), ReadingLang::Ru), "2 мин");
        assert_eq!(
            estimate_reading_time(&words(1000), ReadingLang::Ru),
            "5 мин"
        );
    }

    #[test]
    fn test_reading_time_splits_on_whitespace_runs() {
        assert_eq!(
            estimate_reading_time("one\t\ttwo\n\nthree    four", ReadingLang::En),
            "1 min"
        );
    }

    #[test]
    fn test_reading_time_english_labels() {
        assert_eq!(estimate_reading_time("", ReadingLang::En), "1 min");
        let body = vec!["word"; 401].join(" ");
        assert_eq!(estimate_reading_time(&body, ReadingLang::En), "3 min");
    }

    #[test]
    fn test_prefix_url_verbatim_concatenation() {
        assert_eq!(prefix_url("/posts/hello", "/signal"), "/signal/posts/hello");
    }

    #[test]
    fn test_prefix_url_no_normalization() {
        // Duplicate slashes and missing slashes pass through untouched
        assert_eq!(prefix_url("/posts/", "/signal/"), "/signal//posts/");
        assert_eq!(prefix_url("posts", "/signal"), "/signalposts");
        assert_eq!(prefix_url("", ""), "");
        assert_eq!(prefix_url("/a b", "/p"), "/p/a b");
    }
}
