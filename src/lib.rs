mod consts;
mod format;
mod locale;
mod moment;
mod options;
mod prelude;
mod types;
mod view;

pub use consts::*;
pub use format::{FormatError, format_datetime};
pub use moment::to_moment_format;
pub use options::{FieldOptions, OptionMap, OptionValue};
pub use types::{DateBound, FormatOption, FormatStyle};
pub use view::ViewVariables;

use crate::prelude::*;
use log::debug;
use std::collections::BTreeMap;

/// Errors raised while validating and normalizing field options.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    #[display(fmt = "Option \"{option}\" expects {expected}, got {found}")]
    TypeMismatch {
        option: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[display(fmt = "Unknown option \"{_0}\"")]
    UnknownOption(String),
    #[display(fmt = "Unknown format style code {_0} (expected -1, 0, 1, 2 or 3)")]
    UnknownStyle(i64),
}

impl std::error::Error for ConfigError {}

/// Builds date/time picker field configuration for a locale.
///
/// The configurator validates an option bag, resolves the date/time
/// pattern and hands back a [`ConfiguredField`] that can project itself
/// into render-time view variables.
#[derive(Debug, Clone)]
pub struct PickerFieldConfigurator {
    locale: String,
}

impl PickerFieldConfigurator {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// Returns the active locale tag
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Changes the active locale. Fields configured earlier keep the
    /// locale they captured; only later `configure` calls see the change.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Baseline option set seeded with the current locale. Caller
    /// overrides are merged on top before validation.
    pub fn default_options(&self) -> OptionMap {
        let mut icons = BTreeMap::new();
        icons.insert("time".to_owned(), OptionValue::Str(ICON_TIME.to_owned()));
        icons.insert("date".to_owned(), OptionValue::Str(ICON_DATE.to_owned()));
        icons.insert("up".to_owned(), OptionValue::Str(ICON_UP.to_owned()));
        icons.insert("down".to_owned(), OptionValue::Str(ICON_DOWN.to_owned()));

        OptionMap::new()
            .with("widget", DEFAULT_WIDGET)
            .with("datepicker_use_button", true)
            .with("dp_pick_time", true)
            .with("dp_pick_date", true)
            .with("dp_use_current", true)
            .with("dp_min_date", DEFAULT_MIN_DATE)
            .with("dp_max_date", OptionValue::Null)
            .with("dp_show_today", true)
            .with("dp_language", self.locale.as_str())
            .with("dp_default_date", "")
            .with("dp_disabled_dates", OptionValue::List(Vec::new()))
            .with("dp_enabled_dates", OptionValue::List(Vec::new()))
            .with("dp_icons", OptionValue::Map(icons))
            .with("dp_use_strict", false)
            .with("dp_side_by_side", false)
            .with("dp_days_of_week_disabled", OptionValue::List(Vec::new()))
            .with("dp_collapse", true)
            .with("dp_calendar_weeks", false)
            .with("dp_view_mode", DEFAULT_VIEW_MODE)
            .with("dp_min_view_mode", DEFAULT_VIEW_MODE)
    }

    /// Merges `overrides` onto the defaults, validates the result and
    /// resolves the date/time pattern.
    ///
    /// # Errors
    /// Returns `ConfigError` for unknown option names, type constraint
    /// violations or an unknown integer style code.
    pub fn configure(&self, overrides: OptionMap) -> Result<ConfiguredField, ConfigError> {
        let mut values = self.default_options();
        values.merge(overrides);

        let options = FieldOptions::from_values(&values)?;
        let format = resolve_format(&options, &self.locale)?;
        debug!("resolved picker format {format:?} for locale {:?}", self.locale);

        Ok(ConfiguredField {
            options,
            format,
            locale: self.locale.clone(),
        })
    }
}

impl Default for PickerFieldConfigurator {
    fn default() -> Self {
        Self::new("en")
    }
}

/// A field whose options passed validation and whose format is resolved.
///
/// Holds the locale captured at configuration time, so later
/// [`PickerFieldConfigurator::set_locale`] calls never touch it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguredField {
    options: FieldOptions,
    format: String,
    locale: String,
}

impl ConfiguredField {
    /// The validated options
    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    /// The resolved date/time pattern
    pub fn format(&self) -> &str {
        &self.format
    }

    /// The locale captured at configuration time
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Projects the configuration into render-time view variables.
    ///
    /// # Errors
    /// Returns `FormatError` if a concrete bound cannot be rendered with
    /// the resolved pattern.
    pub fn finish_view(&self) -> Result<ViewVariables, FormatError> {
        view::finish(&self.options, &self.format, &self.locale)
    }
}

/// Resolves the date/time pattern for a validated option set.
///
/// A string `date_format` overrides everything. An explicit pattern
/// passes through verbatim. A style code goes through the locale tables,
/// paired with a time style derived from the picker flags; an absent
/// format does the same with the short date style.
fn resolve_format(options: &FieldOptions, locale_tag: &str) -> Result<String, ConfigError> {
    if let Some(date_format) = &options.date_format {
        return Ok(date_format.clone());
    }

    let locale = locale::resolve(locale_tag);
    match &options.format {
        FormatOption::Pattern(pattern) => Ok(pattern.clone()),
        FormatOption::Style(code) => {
            let date_style = FormatStyle::try_from(*code)?;
            Ok(locale::pattern_for(locale, date_style, time_style(options)))
        }
        FormatOption::Unset => Ok(locale::pattern_for(
            locale,
            FormatStyle::Short,
            time_style(options),
        )),
    }
}

/// Time style paired with an integer date style: none without time
/// picking, long with seconds, short otherwise.
fn time_style(options: &FieldOptions) -> FormatStyle {
    if !options.pick_time {
        FormatStyle::None
    } else if options.use_seconds {
        FormatStyle::Long
    } else {
        FormatStyle::Short
    }
}
