//! Dynamic option bag and its validated, strongly-typed form.
//!
//! Callers hand the configurator an [`OptionMap`] (name to value, the
//! shape a form framework passes around); [`FieldOptions::from_values`]
//! checks every entry against its declared type set once, up front, and
//! produces the typed struct the rest of the crate works with.

use crate::ConfigError;
use crate::consts::{
    DEFAULT_MIN_DATE, DEFAULT_VIEW_MODE, DEFAULT_WIDGET, is_declared_option,
};
use crate::types::{DateBound, FormatOption};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// A single configuration value.
///
/// Serializes untagged, so a view variable map feeds straight into any
/// JSON-consuming renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Date(NaiveDateTime),
    List(Vec<OptionValue>),
    Map(BTreeMap<String, OptionValue>),
}

impl OptionValue {
    /// Type name used in mismatch errors
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Str(_) => "string",
            Self::Date(_) => "date",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<NaiveDateTime> for OptionValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDate> for OptionValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value.and_time(NaiveTime::MIN))
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(value: Vec<OptionValue>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, OptionValue>> for OptionValue {
    fn from(value: BTreeMap<String, OptionValue>) -> Self {
        Self::Map(value)
    }
}

/// Ordered option bag keyed by option name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionMap(BTreeMap<String, OptionValue>);

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an option
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set)
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Overlays `overrides` on top of this map; overriding entries win.
    pub fn merge(&mut self, overrides: Self) {
        self.0.extend(overrides.0);
    }
}

impl FromIterator<(String, OptionValue)> for OptionMap {
    fn from_iter<T: IntoIterator<Item = (String, OptionValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, OptionValue>> for OptionMap {
    fn from(values: BTreeMap<String, OptionValue>) -> Self {
        Self(values)
    }
}

impl IntoIterator for OptionMap {
    type Item = (String, OptionValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Fully validated field configuration.
///
/// Every option of the bag appears here as a typed field; construction
/// through [`from_values`](Self::from_values) is the only validation
/// step, so downstream code never re-checks value shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOptions {
    pub format: FormatOption,
    pub date_format: Option<String>,
    pub widget: String,
    /// `Some(true)` only when the caller supplied boolean true
    pub datepicker_use_button: Option<bool>,
    pub pick_time: bool,
    pub pick_date: bool,
    pub use_current: bool,
    pub show_today: bool,
    pub use_strict: bool,
    pub side_by_side: bool,
    pub collapse: bool,
    pub calendar_weeks: bool,
    /// Accepted as input, but the view layer re-derives it from the
    /// resolved pattern; only the time-style pairing reads this value.
    pub use_seconds: bool,
    pub min_date: DateBound,
    pub max_date: DateBound,
    pub language: String,
    pub view_mode: String,
    pub min_view_mode: String,
    pub default_date: Option<String>,
    pub disabled_dates: Vec<OptionValue>,
    pub enabled_dates: Vec<OptionValue>,
    pub icons: BTreeMap<String, OptionValue>,
    pub days_of_week_disabled: Vec<OptionValue>,
}

impl FieldOptions {
    /// Validates an option bag into the typed form.
    ///
    /// # Errors
    /// `ConfigError::UnknownOption` for a name outside the declared set,
    /// `ConfigError::TypeMismatch` for a value outside its declared types.
    pub fn from_values(values: &OptionMap) -> Result<Self, ConfigError> {
        for (name, _) in values.iter() {
            if !is_declared_option(name) {
                return Err(ConfigError::UnknownOption(name.to_owned()));
            }
        }

        Ok(Self {
            format: expect_format(values)?,
            date_format: optional_string(values, "date_format"),
            widget: expect_string(values, "widget", DEFAULT_WIDGET)?,
            datepicker_use_button: expect_optional_bool(values, "datepicker_use_button")?,
            pick_time: expect_bool(values, "dp_pick_time", true)?,
            pick_date: expect_bool(values, "dp_pick_date", true)?,
            use_current: expect_bool(values, "dp_use_current", true)?,
            show_today: expect_bool(values, "dp_show_today", true)?,
            use_strict: expect_bool(values, "dp_use_strict", false)?,
            side_by_side: expect_bool(values, "dp_side_by_side", false)?,
            collapse: expect_bool(values, "dp_collapse", true)?,
            calendar_weeks: expect_bool(values, "dp_calendar_weeks", false)?,
            use_seconds: expect_bool(values, "dp_use_seconds", false)?,
            min_date: expect_bound(values, "dp_min_date", DateBound::Raw(DEFAULT_MIN_DATE.to_owned()))?,
            max_date: expect_bound(values, "dp_max_date", DateBound::Unset)?,
            language: expect_string(values, "dp_language", "en")?,
            view_mode: expect_string(values, "dp_view_mode", DEFAULT_VIEW_MODE)?,
            min_view_mode: expect_string(values, "dp_min_view_mode", DEFAULT_VIEW_MODE)?,
            default_date: expect_nullable_string(values, "dp_default_date")?,
            disabled_dates: expect_list(values, "dp_disabled_dates")?,
            enabled_dates: expect_list(values, "dp_enabled_dates")?,
            icons: expect_map(values, "dp_icons")?,
            days_of_week_disabled: expect_list(values, "dp_days_of_week_disabled")?,
        })
    }
}

fn mismatch(option: &'static str, expected: &'static str, found: &OptionValue) -> ConfigError {
    ConfigError::TypeMismatch {
        option,
        expected,
        found: found.type_name(),
    }
}

fn expect_format(values: &OptionMap) -> Result<FormatOption, ConfigError> {
    match values.get("format") {
        None | Some(OptionValue::Null) => Ok(FormatOption::Unset),
        Some(OptionValue::Int(code)) => Ok(FormatOption::Style(*code)),
        Some(OptionValue::Str(pattern)) => Ok(FormatOption::Pattern(pattern.clone())),
        Some(other) => Err(mismatch("format", "null, integer or string", other)),
    }
}

// `date_format` is not in the declared constraint set: a non-string value
// is not an error, it simply never overrides the resolution.
fn optional_string(values: &OptionMap, name: &str) -> Option<String> {
    match values.get(name) {
        Some(OptionValue::Str(s)) => Some(s.clone()),
        _ => None,
    }
}

fn expect_bool(values: &OptionMap, option: &'static str, default: bool) -> Result<bool, ConfigError> {
    match values.get(option) {
        None => Ok(default),
        Some(OptionValue::Bool(b)) => Ok(*b),
        Some(other) => Err(mismatch(option, "boolean", other)),
    }
}

fn expect_optional_bool(
    values: &OptionMap,
    option: &'static str,
) -> Result<Option<bool>, ConfigError> {
    match values.get(option) {
        None => Ok(None),
        Some(OptionValue::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(mismatch(option, "boolean", other)),
    }
}

fn expect_string(
    values: &OptionMap,
    option: &'static str,
    default: &str,
) -> Result<String, ConfigError> {
    match values.get(option) {
        None => Ok(default.to_owned()),
        Some(OptionValue::Str(s)) => Ok(s.clone()),
        Some(other) => Err(mismatch(option, "string", other)),
    }
}

fn expect_nullable_string(
    values: &OptionMap,
    option: &'static str,
) -> Result<Option<String>, ConfigError> {
    match values.get(option) {
        None | Some(OptionValue::Null) => Ok(None),
        Some(OptionValue::Str(s)) => Ok(Some(s.clone())),
        Some(other) => Err(mismatch(option, "null or string", other)),
    }
}

fn expect_bound(
    values: &OptionMap,
    option: &'static str,
    default: DateBound,
) -> Result<DateBound, ConfigError> {
    match values.get(option) {
        None => Ok(default),
        Some(OptionValue::Null) => Ok(DateBound::Unset),
        Some(OptionValue::Str(s)) => Ok(DateBound::Raw(s.clone())),
        Some(OptionValue::Date(dt)) => Ok(DateBound::Value(*dt)),
        Some(other) => Err(mismatch(option, "null, string or date", other)),
    }
}

fn expect_list(
    values: &OptionMap,
    option: &'static str,
) -> Result<Vec<OptionValue>, ConfigError> {
    match values.get(option) {
        None => Ok(Vec::new()),
        Some(OptionValue::List(items)) => Ok(items.clone()),
        Some(other) => Err(mismatch(option, "list", other)),
    }
}

fn expect_map(
    values: &OptionMap,
    option: &'static str,
) -> Result<BTreeMap<String, OptionValue>, ConfigError> {
    match values.get(option) {
        None => Ok(BTreeMap::new()),
        Some(OptionValue::Map(entries)) => Ok(entries.clone()),
        Some(other) => Err(mismatch(option, "map", other)),
    }
}
