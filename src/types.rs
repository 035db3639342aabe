use crate::ConfigError;
use crate::consts::{STYLE_FULL, STYLE_LONG, STYLE_MEDIUM, STYLE_NONE, STYLE_SHORT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Verbosity level used when generating a locale pattern, following the
/// ICU style codes (full=0, long=1, medium=2, short=3, none=-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatStyle {
    Full,
    Long,
    Medium,
    Short,
    None,
}

impl FormatStyle {
    /// Returns the ICU style code for this level
    pub const fn code(self) -> i64 {
        match self {
            Self::Full => STYLE_FULL,
            Self::Long => STYLE_LONG,
            Self::Medium => STYLE_MEDIUM,
            Self::Short => STYLE_SHORT,
            Self::None => STYLE_NONE,
        }
    }

    /// Index into the per-locale pattern tables; `None` carries no pattern.
    pub(crate) const fn table_index(self) -> Option<usize> {
        match self {
            Self::Full => Some(0),
            Self::Long => Some(1),
            Self::Medium => Some(2),
            Self::Short => Some(3),
            Self::None => Option::None,
        }
    }
}

impl TryFrom<i64> for FormatStyle {
    type Error = ConfigError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            STYLE_FULL => Ok(Self::Full),
            STYLE_LONG => Ok(Self::Long),
            STYLE_MEDIUM => Ok(Self::Medium),
            STYLE_SHORT => Ok(Self::Short),
            STYLE_NONE => Ok(Self::None),
            other => Err(ConfigError::UnknownStyle(other)),
        }
    }
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Full => "full",
            Self::Long => "long",
            Self::Medium => "medium",
            Self::Short => "short",
            Self::None => "none",
        };
        write!(f, "{name}")
    }
}

/// The `format` option before resolution: absent, an integer style code,
/// or an explicit pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOption {
    /// No format supplied; the style generator provides one
    Unset,
    /// Integer style code, resolved through the locale pattern tables
    Style(i64),
    /// Explicit ICU-style pattern, passed through verbatim
    Pattern(String),
}

impl FormatOption {
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

/// A picker bound (`dp_min_date` / `dp_max_date`): either absent, an
/// opaque string forwarded to the widget verbatim, or a concrete date
/// value formatted with the resolved pattern at view-finishing time.
#[derive(Debug, Clone, PartialEq)]
pub enum DateBound {
    Unset,
    Raw(String),
    Value(NaiveDateTime),
}

impl DateBound {
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the concrete date value, if this bound holds one
    pub const fn value(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Value(dt) => Some(*dt),
            Self::Unset | Self::Raw(_) => None,
        }
    }
}

impl From<NaiveDateTime> for DateBound {
    fn from(value: NaiveDateTime) -> Self {
        Self::Value(value)
    }
}

impl From<NaiveDate> for DateBound {
    fn from(value: NaiveDate) -> Self {
        Self::Value(value.and_time(NaiveTime::MIN))
    }
}

impl From<String> for DateBound {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<&str> for DateBound {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_code() {
        assert_eq!(FormatStyle::try_from(0).unwrap(), FormatStyle::Full);
        assert_eq!(FormatStyle::try_from(1).unwrap(), FormatStyle::Long);
        assert_eq!(FormatStyle::try_from(2).unwrap(), FormatStyle::Medium);
        assert_eq!(FormatStyle::try_from(3).unwrap(), FormatStyle::Short);
        assert_eq!(FormatStyle::try_from(-1).unwrap(), FormatStyle::None);
    }

    #[test]
    fn test_style_from_unknown_code() {
        let result = FormatStyle::try_from(7);
        assert!(matches!(result, Err(ConfigError::UnknownStyle(7))));
    }

    #[test]
    fn test_style_code_round_trip() {
        for style in [
            FormatStyle::Full,
            FormatStyle::Long,
            FormatStyle::Medium,
            FormatStyle::Short,
            FormatStyle::None,
        ] {
            assert_eq!(FormatStyle::try_from(style.code()).unwrap(), style);
        }
    }

    #[test]
    fn test_style_display() {
        assert_eq!(FormatStyle::Short.to_string(), "short");
        assert_eq!(FormatStyle::None.to_string(), "none");
    }

    #[test]
    fn test_bound_from_date() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let bound = DateBound::from(date);
        assert_eq!(
            bound.value(),
            Some(date.and_hms_opt(0, 0, 0).unwrap()),
            "date bounds are anchored at midnight"
        );
    }

    #[test]
    fn test_bound_from_string_stays_raw() {
        let bound = DateBound::from("1/1/1900");
        assert_eq!(bound, DateBound::Raw("1/1/1900".to_owned()));
        assert_eq!(bound.value(), None);
        assert!(!bound.is_unset());
    }

    #[test]
    fn test_bound_unset() {
        assert!(DateBound::Unset.is_unset());
        assert_eq!(DateBound::Unset.value(), None);
    }
}
