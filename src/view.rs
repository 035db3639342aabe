//! Render-time view variables.
//!
//! The finishing step projects a validated configuration into the
//! mapping a template renderer merges into its own variables: the widget
//! pattern, the forced input type, the button flag and the camel-keyed
//! widget options.

use crate::consts::{INPUT_TYPE, client_key};
use crate::format::{FormatError, format_datetime};
use crate::moment::to_moment_format;
use crate::options::{FieldOptions, OptionValue};
use crate::types::DateBound;
use serde::Serialize;
use std::collections::BTreeMap;

/// Variables handed to the template renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewVariables {
    /// Resolved pattern translated into the widget's token syntax
    pub moment_format: String,
    /// Always `"text"`; the widget overlays its own UI
    #[serde(rename = "type")]
    pub input_type: &'static str,
    pub datepicker_use_button: bool,
    /// Widget options under their client-facing camelCase keys
    pub dp_options: BTreeMap<&'static str, OptionValue>,
}

/// Derives the view variables from a validated configuration and its
/// resolved format.
pub(crate) fn finish(
    options: &FieldOptions,
    format: &str,
    locale_tag: &str,
) -> Result<ViewVariables, FormatError> {
    // The supplied dp_use_seconds is dropped here: the resolved pattern
    // is authoritative for what the widget must expose.
    let use_seconds = format.contains('s');

    let min_date = bound_value(&options.min_date, format, locale_tag)?;
    let max_date = bound_value(&options.max_date, format, locale_tag)?;

    let mut dp = BTreeMap::new();
    let mut put = |name: &'static str, value: OptionValue| {
        dp.insert(client_key(name).unwrap_or(name), value);
    };
    put("dp_pick_time", OptionValue::Bool(options.pick_time));
    put("dp_pick_date", OptionValue::Bool(options.pick_date));
    put("dp_use_current", OptionValue::Bool(options.use_current));
    put("dp_min_date", min_date);
    put("dp_max_date", max_date);
    put("dp_show_today", OptionValue::Bool(options.show_today));
    put("dp_language", OptionValue::Str(options.language.clone()));
    put(
        "dp_default_date",
        options
            .default_date
            .clone()
            .map_or(OptionValue::Null, OptionValue::Str),
    );
    put(
        "dp_disabled_dates",
        OptionValue::List(options.disabled_dates.clone()),
    );
    put(
        "dp_enabled_dates",
        OptionValue::List(options.enabled_dates.clone()),
    );
    put("dp_icons", OptionValue::Map(options.icons.clone()));
    put("dp_use_strict", OptionValue::Bool(options.use_strict));
    put("dp_side_by_side", OptionValue::Bool(options.side_by_side));
    put(
        "dp_days_of_week_disabled",
        OptionValue::List(options.days_of_week_disabled.clone()),
    );
    put("dp_collapse", OptionValue::Bool(options.collapse));
    put("dp_calendar_weeks", OptionValue::Bool(options.calendar_weeks));
    put("dp_view_mode", OptionValue::Str(options.view_mode.clone()));
    put(
        "dp_min_view_mode",
        OptionValue::Str(options.min_view_mode.clone()),
    );
    put("dp_use_seconds", OptionValue::Bool(use_seconds));

    Ok(ViewVariables {
        moment_format: to_moment_format(format),
        input_type: INPUT_TYPE,
        datepicker_use_button: options.datepicker_use_button == Some(true),
        dp_options: dp,
    })
}

/// A concrete bound is formatted with the resolved pattern; raw strings
/// are forwarded verbatim.
fn bound_value(
    bound: &DateBound,
    pattern: &str,
    locale_tag: &str,
) -> Result<OptionValue, FormatError> {
    match bound {
        DateBound::Unset => Ok(OptionValue::Null),
        DateBound::Raw(s) => Ok(OptionValue::Str(s.clone())),
        DateBound::Value(dt) => Ok(OptionValue::Str(format_datetime(*dt, pattern, locale_tag)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CLIENT_KEYS;
    use crate::options::OptionMap;
    use chrono::NaiveDate;

    fn options(values: &OptionMap) -> FieldOptions {
        FieldOptions::from_values(values).unwrap()
    }

    #[test]
    fn test_one_entry_per_widget_option() {
        let view = finish(&options(&OptionMap::new()), "dd/MM/yyyy", "en").unwrap();
        assert_eq!(view.dp_options.len(), CLIENT_KEYS.len());
        for (_, camel) in CLIENT_KEYS {
            assert!(view.dp_options.contains_key(camel), "missing {camel}");
        }
    }

    #[test]
    fn test_input_type_is_text() {
        let view = finish(&options(&OptionMap::new()), "dd/MM/yyyy", "en").unwrap();
        assert_eq!(view.input_type, "text");
    }

    #[test]
    fn test_use_seconds_derived_from_pattern() {
        let values = OptionMap::new().with("dp_use_seconds", false);
        let view = finish(&options(&values), "HH:mm:ss", "en").unwrap();
        assert_eq!(view.dp_options.get("useSeconds"), Some(&OptionValue::Bool(true)));

        let values = OptionMap::new().with("dp_use_seconds", true);
        let view = finish(&options(&values), "HH:mm", "en").unwrap();
        assert_eq!(view.dp_options.get("useSeconds"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn test_concrete_bound_formatted_with_pattern() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let values = OptionMap::new().with("dp_min_date", date);
        let view = finish(&options(&values), "dd/MM/yyyy", "en").unwrap();
        assert_eq!(
            view.dp_options.get("minDate"),
            Some(&OptionValue::Str("01/01/1900".to_owned()))
        );
    }

    #[test]
    fn test_raw_bound_passes_through() {
        let view = finish(&options(&OptionMap::new()), "dd/MM/yyyy", "en").unwrap();
        assert_eq!(
            view.dp_options.get("minDate"),
            Some(&OptionValue::Str("1/1/1900".to_owned()))
        );
        assert_eq!(view.dp_options.get("maxDate"), Some(&OptionValue::Null));
    }

    #[test]
    fn test_bound_formatting_error_propagates() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let values = OptionMap::new().with("dp_max_date", date);
        let result = finish(&options(&values), "QQ-yyyy", "en");
        assert!(matches!(result, Err(FormatError::UnsupportedToken { .. })));
    }

    #[test]
    fn test_use_button_strictly_true() {
        let view = finish(&options(&OptionMap::new()), "dd/MM/yyyy", "en").unwrap();
        assert!(!view.datepicker_use_button, "absent option must read false");

        let values = OptionMap::new().with("datepicker_use_button", false);
        let view = finish(&options(&values), "dd/MM/yyyy", "en").unwrap();
        assert!(!view.datepicker_use_button);

        let values = OptionMap::new().with("datepicker_use_button", true);
        let view = finish(&options(&values), "dd/MM/yyyy", "en").unwrap();
        assert!(view.datepicker_use_button);
    }

    #[test]
    fn test_moment_format_translated() {
        let view = finish(&options(&OptionMap::new()), "M/d/yy, h:mm a", "en").unwrap();
        assert_eq!(view.moment_format, "M/D/YY, h:mm A");
    }

    #[test]
    fn test_values_forwarded_unchanged() {
        let values = OptionMap::new()
            .with("dp_language", "fr")
            .with(
                "dp_days_of_week_disabled",
                OptionValue::List(vec![OptionValue::Int(0), OptionValue::Int(6)]),
            );
        let view = finish(&options(&values), "dd/MM/yyyy", "fr").unwrap();
        assert_eq!(
            view.dp_options.get("language"),
            Some(&OptionValue::Str("fr".to_owned()))
        );
        assert_eq!(
            view.dp_options.get("daysOfWeekDisabled"),
            Some(&OptionValue::List(vec![OptionValue::Int(0), OptionValue::Int(6)]))
        );
    }

    #[test]
    fn test_serialized_shape() {
        let values = OptionMap::new().with("datepicker_use_button", true);
        let view = finish(&options(&values), "dd/MM/yyyy", "en").unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["moment_format"], "DD/MM/YYYY");
        assert_eq!(json["datepicker_use_button"], true);
        assert_eq!(json["dp_options"]["pickTime"], true);
        assert_eq!(json["dp_options"]["minDate"], "1/1/1900");
        assert_eq!(json["dp_options"]["viewMode"], "days");
    }
}
