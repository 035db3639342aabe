//! Locale-aware rendering of date values through ICU-style patterns.
//!
//! Supports the token set the pattern tables emit. Anything outside it is
//! a hard error: a silently half-rendered bound would reach the widget.

use crate::consts::PATTERN_QUOTE;
use crate::locale::{self, Locale};
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt::Write;

/// Error raised when a date value cannot be rendered with a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The pattern contains a token this formatter cannot render.
    #[error("Unsupported pattern token \"{token}\" in \"{pattern}\"")]
    UnsupportedToken { token: String, pattern: String },

    /// A quoted literal is missing its closing quote.
    #[error("Unterminated quoted literal in \"{0}\"")]
    UnterminatedQuote(String),
}

/// Formats `value` according to an ICU-style `pattern`, using the month,
/// weekday and day-period names of `locale_tag` (with the usual fallback
/// chain down to `en`).
///
/// # Errors
/// `FormatError::UnsupportedToken` for a token outside the supported set,
/// `FormatError::UnterminatedQuote` for an unbalanced literal.
pub fn format_datetime(
    value: NaiveDateTime,
    pattern: &str,
    locale_tag: &str,
) -> Result<String, FormatError> {
    let locale = locale::resolve(locale_tag);
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == PATTERN_QUOTE {
            if chars.peek() == Some(&PATTERN_QUOTE) {
                chars.next();
                out.push(PATTERN_QUOTE);
                continue;
            }
            let mut closed = false;
            while let Some(ch) = chars.next() {
                if ch == PATTERN_QUOTE {
                    if chars.peek() == Some(&PATTERN_QUOTE) {
                        chars.next();
                        out.push(PATTERN_QUOTE);
                    } else {
                        closed = true;
                        break;
                    }
                } else {
                    out.push(ch);
                }
            }
            if !closed {
                return Err(FormatError::UnterminatedQuote(pattern.to_owned()));
            }
        } else if c.is_ascii_alphabetic() {
            let mut len = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                len += 1;
            }
            if !render_token(c, len, value, locale, &mut out) {
                return Err(FormatError::UnsupportedToken {
                    token: std::iter::repeat_n(c, len).collect(),
                    pattern: pattern.to_owned(),
                });
            }
        } else {
            out.push(c);
        }
    }

    Ok(out)
}

/// Renders one token run; returns false for tokens outside the set.
fn render_token(
    letter: char,
    len: usize,
    value: NaiveDateTime,
    locale: &Locale,
    out: &mut String,
) -> bool {
    match letter {
        'y' => {
            if len == 2 {
                let _ = write!(out, "{:02}", value.year().rem_euclid(100));
            } else {
                let _ = write!(out, "{:04}", value.year());
            }
        }
        'M' => match len {
            1 => {
                let _ = write!(out, "{}", value.month());
            }
            2 => {
                let _ = write!(out, "{:02}", value.month());
            }
            3 => out.push_str(locale.months_abbr[value.month0() as usize]),
            _ => out.push_str(locale.months_wide[value.month0() as usize]),
        },
        'd' => {
            if len >= 2 {
                let _ = write!(out, "{:02}", value.day());
            } else {
                let _ = write!(out, "{}", value.day());
            }
        }
        'E' => {
            let index = value.weekday().num_days_from_monday() as usize;
            if len >= 4 {
                out.push_str(locale.weekdays_wide[index]);
            } else {
                out.push_str(locale.weekdays_abbr[index]);
            }
        }
        'H' => {
            if len >= 2 {
                let _ = write!(out, "{:02}", value.hour());
            } else {
                let _ = write!(out, "{}", value.hour());
            }
        }
        'h' => {
            let (_, hour12) = value.hour12();
            if len >= 2 {
                let _ = write!(out, "{hour12:02}");
            } else {
                let _ = write!(out, "{hour12}");
            }
        }
        'm' => {
            if len >= 2 {
                let _ = write!(out, "{:02}", value.minute());
            } else {
                let _ = write!(out, "{}", value.minute());
            }
        }
        's' => {
            if len >= 2 {
                let _ = write!(out, "{:02}", value.second());
            } else {
                let _ = write!(out, "{}", value.second());
            }
        }
        'a' => {
            let (is_pm, _) = value.hour12();
            out.push_str(locale.day_periods[usize::from(is_pm)]);
        }
        _ => return false,
    }
    true
}
