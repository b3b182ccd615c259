//! Number rendering
//!
//! Rounding happens on the decimal value (half away from zero), so inputs
//! like `1234.565` round the way a reader expects instead of following the
//! binary representation. Values outside the `Decimal` range are expanded
//! from their shortest round-trip digits, and exponents are read from the same
//! digits so subnormal values keep their magnitude.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::locale::Locale;

/// Fraction digits kept by `Auto` for values of magnitude >= 1
const AUTO_FRACTION_DIGITS: u32 = 2;
/// Significant digits kept by `Auto` for values between 0 and 1
const AUTO_SMALL_SIGNIFICANT: i32 = 3;
/// Upper bound on fraction digits for small `Auto` values
const AUTO_MAX_FRACTION_DIGITS: u32 = 10;
/// Maximum fraction digits of percent values
const PERCENT_FRACTION_DIGITS: u32 = 2;
/// Power of ten percent values are scaled by
const PERCENT_SCALE: u32 = 2;
/// Maximum fraction digits of scientific/engineering mantissas
const MANTISSA_FRACTION_DIGITS: u32 = 2;

/// Numeric rendering strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// Grouped, with a precision suited to the magnitude
    Auto,
    /// Multiplied by 100, 0-2 fraction digits
    Percent,
    /// `1.23E10`
    Scientific,
    /// Like scientific, with the exponent a multiple of 3 (`12.35E9`)
    Engineering,
    /// Grouped, no fraction digits
    Integer,
}

/// A number formatter bound to one style and locale
#[derive(Debug, Clone, Copy)]
pub struct NumberFormatter {
    style: NumberStyle,
    locale: &'static Locale,
}

/// Sign, integer digits and fraction digits of a rounded number
#[derive(Debug, PartialEq)]
struct Digits {
    negative: bool,
    int: String,
    frac: String,
}

impl NumberFormatter {
    pub fn new(style: NumberStyle, locale: &'static Locale) -> Self {
        Self { style, locale }
    }

    /// Render `value` in this formatter's style
    pub fn format(&self, value: f64) -> String {
        let suffix = match self.style {
            NumberStyle::Percent => self.locale.percent_suffix,
            _ => "",
        };

        if value.is_nan() {
            return format!("NaN{suffix}");
        }
        let scaled = match self.style {
            NumberStyle::Percent => value * 10f64.powi(PERCENT_SCALE as i32),
            _ => value,
        };
        if scaled.is_infinite() {
            let sign = if scaled < 0.0 { "-" } else { "" };
            return format!("{sign}∞{suffix}");
        }

        match self.style {
            NumberStyle::Auto => {
                let digits = round_fixed(value, 0, auto_fraction_digits(value));
                self.render(&digits, true)
            }
            NumberStyle::Percent => {
                let digits = round_fixed(value, PERCENT_SCALE, PERCENT_FRACTION_DIGITS);
                format!("{}{}", self.render(&digits, true), suffix)
            }
            NumberStyle::Integer => {
                let digits = round_fixed(value, 0, 0);
                self.render(&digits, true)
            }
            NumberStyle::Scientific => self.exponential(value, 1),
            NumberStyle::Engineering => self.exponential(value, 3),
        }
    }

    /// Mantissa and exponent, with the exponent a multiple of `step`
    fn exponential(&self, value: f64, step: i32) -> String {
        if value == 0.0 {
            return "0E0".to_string();
        }

        let (mantissa, exponent) = decimal_exponent(value.abs());
        let mut shown_exponent = exponent.div_euclid(step) * step;
        let shift = Decimal::from(10i64.pow((exponent - shown_exponent) as u32));
        let mantissa = mantissa.parse::<Decimal>().unwrap_or_default() * shift;

        let limit = Decimal::from(10i64.pow(step as u32));
        let mut rounded = round_decimal(mantissa, MANTISSA_FRACTION_DIGITS);
        // Rounding can carry the mantissa past the next power (9.999 -> 10)
        if rounded >= limit {
            shown_exponent += step;
            rounded = round_decimal(rounded / limit, MANTISSA_FRACTION_DIGITS);
        }

        let digits = split_digits(value < 0.0, &rounded.to_string());
        format!("{}E{}", self.render(&digits, false), shown_exponent)
    }

    fn render(&self, digits: &Digits, grouped: bool) -> String {
        let mut out = String::with_capacity(digits.int.len() + digits.frac.len() + 4);
        if digits.negative {
            out.push('-');
        }
        if grouped {
            out.push_str(&group(&digits.int, self.locale.group_separator));
        } else {
            out.push_str(&digits.int);
        }
        if !digits.frac.is_empty() {
            out.push(self.locale.decimal_separator);
            out.push_str(&digits.frac);
        }
        out
    }
}

/// Fraction digits `Auto` uses for `value`
fn auto_fraction_digits(value: f64) -> u32 {
    let abs = value.abs();
    if abs == 0.0 || abs >= 1.0 {
        return AUTO_FRACTION_DIGITS;
    }
    let magnitude = abs.log10().floor() as i32;
    let wanted = AUTO_SMALL_SIGNIFICANT - 1 - magnitude;
    (wanted.max(0) as u32).clamp(AUTO_FRACTION_DIGITS, AUTO_MAX_FRACTION_DIGITS)
}

/// Round `value * 10^scale` to at most `max_frac` fraction digits,
/// dropping trailing zeros.
fn round_fixed(value: f64, scale: u32, max_frac: u32) -> Digits {
    let factor = Decimal::from(10i64.pow(scale));
    match Decimal::from_f64(value).and_then(|d| d.checked_mul(factor)) {
        Some(d) => split_digits(value < 0.0, &round_decimal(d, max_frac).to_string()),
        None => split_digits(value < 0.0, &expand_scaled(value.abs(), scale)),
    }
}

fn round_decimal(value: Decimal, max_frac: u32) -> Decimal {
    value
        .round_dp_with_strategy(max_frac, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Shortest round-trip mantissa digits of a positive finite `abs` and its
/// decimal exponent: `5e-324` gives `("5", -324)`.
fn decimal_exponent(abs: f64) -> (String, i32) {
    let text = format!("{abs:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_string(), exponent.parse().unwrap_or(0)),
        None => (text, 0),
    }
}

/// Plain decimal text of `abs * 10^scale`, built from the shortest
/// round-trip digits of `abs` so no binary noise shows up.
fn expand_scaled(abs: f64, scale: u32) -> String {
    let (mantissa, exponent) = decimal_exponent(abs);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    // Position of the decimal point within `digits`
    let point = exponent + scale as i32 + 1;

    if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else if point as usize >= digits.len() {
        format!("{}{}", digits, "0".repeat(point as usize - digits.len()))
    } else {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    }
}

/// Split unsigned or signed decimal text into [`Digits`].
fn split_digits(negative: bool, text: &str) -> Digits {
    let unsigned = text.trim_start_matches('-');
    let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let frac = frac.trim_end_matches('0');
    let is_zero = int.bytes().all(|b| b == b'0') && frac.is_empty();

    Digits {
        negative: negative && !is_zero,
        int: int.to_string(),
        frac: frac.to_string(),
    }
}

/// Insert `separator` between groups of three integer digits
fn group(int: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return int.to_string();
    };

    let len = int.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
