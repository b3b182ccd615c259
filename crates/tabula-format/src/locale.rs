//! Locale registry
//!
//! A locale here is just the handful of conventions the formatters need:
//! separators, the percent suffix and the date/time patterns (chrono
//! strftime syntax). Only a small set of locales ships; unknown tags fall
//! back by language and finally to `en-US`.

use std::env;

/// Display conventions for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// BCP-47 tag
    pub id: &'static str,
    pub decimal_separator: char,
    /// Digit grouping separator (None = no grouping)
    pub group_separator: Option<char>,
    /// Appended to percent values
    pub percent_suffix: &'static str,
    /// Short date pattern
    pub short_date: &'static str,
    /// Long time-of-day pattern, without the zone name
    pub long_time: &'static str,
    /// Placed between date and time in datetime output
    pub datetime_separator: &'static str,
}

pub static EN_US: Locale = Locale {
    id: "en-US",
    decimal_separator: '.',
    group_separator: Some(','),
    percent_suffix: "%",
    short_date: "%-m/%-d/%y",
    long_time: "%-I:%M:%S %p",
    datetime_separator: ", ",
};

pub static EN_GB: Locale = Locale {
    id: "en-GB",
    decimal_separator: '.',
    group_separator: Some(','),
    percent_suffix: "%",
    short_date: "%d/%m/%Y",
    long_time: "%H:%M:%S",
    datetime_separator: ", ",
};

pub static DE_DE: Locale = Locale {
    id: "de-DE",
    decimal_separator: ',',
    group_separator: Some('.'),
    percent_suffix: "\u{a0}%",
    short_date: "%d.%m.%y",
    long_time: "%H:%M:%S",
    datetime_separator: ", ",
};

/// French (France) groups digits with U+202F NARROW NO-BREAK SPACE.
pub static FR_FR: Locale = Locale {
    id: "fr-FR",
    decimal_separator: ',',
    group_separator: Some('\u{202f}'),
    percent_suffix: "\u{a0}%",
    short_date: "%d/%m/%Y",
    long_time: "%H:%M:%S",
    datetime_separator: " ",
};

static REGISTRY: [&Locale; 4] = [&EN_US, &EN_GB, &DE_DE, &FR_FR];

/// Environment variables consulted for the process default, in priority order
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

impl Locale {
    /// Resolve a locale tag such as `de-DE`, `en_GB.UTF-8` or `fr`.
    ///
    /// Region variants we don't ship (`de-AT`, `en-AU`) resolve to the
    /// language's default entry.
    pub fn get(tag: &str) -> Option<&'static Locale> {
        let key = normalize_tag(tag)?;

        if let Some(locale) = REGISTRY
            .iter()
            .copied()
            .find(|l| l.id.eq_ignore_ascii_case(&key))
        {
            return Some(locale);
        }

        let lang = key.split('-').next().unwrap_or("");
        match lang {
            "en" => Some(&EN_US),
            "de" => Some(&DE_DE),
            "fr" => Some(&FR_FR),
            _ => None,
        }
    }

    /// The host default locale, read from the environment.
    ///
    /// Falls back to `en-US` when nothing usable is set (including the
    /// `C`/`POSIX` locales).
    pub fn from_env() -> &'static Locale {
        for var in LOCALE_ENV_VARS {
            if let Ok(value) = env::var(var) {
                if value.is_empty() {
                    continue;
                }
                if let Some(locale) = Locale::get(&value) {
                    return locale;
                }
                log::debug!("Unsupported locale {var}={value}, using en-US");
                return &EN_US;
            }
        }
        &EN_US
    }
}

/// Lowercase, `_` to `-`, and drop POSIX encoding/modifier suffixes and
/// BCP-47 extensions.
fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut key: String = trimmed
        .chars()
        .map(|ch| match ch {
            '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect();

    for marker in [".", "@", "-u-", "-x-"] {
        if let Some(idx) = key.find(marker) {
            key.truncate(idx);
        }
    }

    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}
