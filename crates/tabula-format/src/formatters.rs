//! Prebuilt formatters
//!
//! Formatter construction parses patterns and resolves locale data, so each
//! [`Formatters`] set is built once and shared. The process-wide default set
//! is created on first use from the host locale.

use once_cell::sync::Lazy;

use crate::date::DateTimeFormatter;
use crate::locale::Locale;
use crate::number::{NumberFormatter, NumberStyle};

static DEFAULT_FORMATTERS: Lazy<Formatters> = Lazy::new(|| {
    let locale = Locale::from_env();
    log::debug!("Building default formatters for locale {}", locale.id);
    Formatters::new(locale)
});

/// The formatters used by [`crate::apply_format`], built from
/// [`Locale::from_env`] on first use
pub fn default_formatters() -> &'static Formatters {
    &DEFAULT_FORMATTERS
}

/// Every formatter a format option can dispatch to, for one locale
#[derive(Debug, Clone)]
pub struct Formatters {
    pub(crate) auto: NumberFormatter,
    pub(crate) percent: NumberFormatter,
    pub(crate) scientific: NumberFormatter,
    pub(crate) engineering: NumberFormatter,
    pub(crate) integer: NumberFormatter,
    pub(crate) date: DateTimeFormatter,
    pub(crate) datetime: DateTimeFormatter,
    pub(crate) time: DateTimeFormatter,
}

impl Formatters {
    pub fn new(locale: &'static Locale) -> Self {
        Self {
            auto: NumberFormatter::new(NumberStyle::Auto, locale),
            percent: NumberFormatter::new(NumberStyle::Percent, locale),
            scientific: NumberFormatter::new(NumberStyle::Scientific, locale),
            engineering: NumberFormatter::new(NumberStyle::Engineering, locale),
            integer: NumberFormatter::new(NumberStyle::Integer, locale),
            date: DateTimeFormatter::new(&[locale.short_date], false),
            datetime: DateTimeFormatter::new(
                &[locale.short_date, locale.datetime_separator, locale.long_time],
                true,
            ),
            time: DateTimeFormatter::new(&[locale.long_time], true),
        }
    }
}
