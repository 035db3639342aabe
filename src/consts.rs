/// ICU style code for the "full" verbosity level
pub const STYLE_FULL: i64 = 0;

/// ICU style code for the "long" verbosity level
pub const STYLE_LONG: i64 = 1;

/// ICU style code for the "medium" verbosity level
pub const STYLE_MEDIUM: i64 = 2;

/// ICU style code for the "short" verbosity level
pub const STYLE_SHORT: i64 = 3;

/// ICU style code for "no component at all"
pub const STYLE_NONE: i64 = -1;

/// Widget variant rendering the whole value in one input
pub const DEFAULT_WIDGET: &str = "single_text";

/// Baseline lower bound handed to the widget, kept as an opaque string
pub const DEFAULT_MIN_DATE: &str = "1/1/1900";

/// Calendar view level the widget opens at
pub const DEFAULT_VIEW_MODE: &str = "days";

/// Glyph identifier for the time toggle
pub const ICON_TIME: &str = "fa fa-clock-o";
/// Glyph identifier for the date toggle
pub const ICON_DATE: &str = "fa fa-calendar";
/// Glyph identifier for the increment arrow
pub const ICON_UP: &str = "fa fa-chevron-up";
/// Glyph identifier for the decrement arrow
pub const ICON_DOWN: &str = "fa fa-chevron-down";

/// Value of the `type` view variable; the widget overlays its own UI,
/// so the underlying input always renders as plain text
pub const INPUT_TYPE: &str = "text";

/// ICU pattern literal delimiter
pub(crate) const PATTERN_QUOTE: char = '\'';

/// Widget-level option names mapped to the client-facing key, one row per
/// `dp_`-prefixed option. The client keys are the snake_case names with
/// the prefix stripped and each underscore boundary uppercased.
pub const CLIENT_KEYS: &[(&str, &str)] = &[
    ("dp_pick_time", "pickTime"),
    ("dp_pick_date", "pickDate"),
    ("dp_use_current", "useCurrent"),
    ("dp_min_date", "minDate"),
    ("dp_max_date", "maxDate"),
    ("dp_show_today", "showToday"),
    ("dp_language", "language"),
    ("dp_default_date", "defaultDate"),
    ("dp_disabled_dates", "disabledDates"),
    ("dp_enabled_dates", "enabledDates"),
    ("dp_icons", "icons"),
    ("dp_use_strict", "useStrict"),
    ("dp_side_by_side", "sideBySide"),
    ("dp_days_of_week_disabled", "daysOfWeekDisabled"),
    ("dp_collapse", "collapse"),
    ("dp_calendar_weeks", "calendarWeeks"),
    ("dp_view_mode", "viewMode"),
    ("dp_min_view_mode", "minViewMode"),
    ("dp_use_seconds", "useSeconds"),
];

/// Form-level option names that carry no `dp_` prefix
pub(crate) const FORM_LEVEL_OPTIONS: &[&str] =
    &["format", "date_format", "widget", "datepicker_use_button"];

/// Returns the client-facing key for a widget-level option name,
/// or `None` if the name is not a declared `dp_` option.
pub fn client_key(name: &str) -> Option<&'static str> {
    CLIENT_KEYS
        .iter()
        .find(|(snake, _)| *snake == name)
        .map(|(_, camel)| *camel)
}

/// Returns true if `name` is part of the declared option set.
pub(crate) fn is_declared_option(name: &str) -> bool {
    FORM_LEVEL_OPTIONS.contains(&name) || client_key(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_key_known() {
        assert_eq!(client_key("dp_pick_time"), Some("pickTime"));
        assert_eq!(client_key("dp_days_of_week_disabled"), Some("daysOfWeekDisabled"));
        assert_eq!(client_key("dp_icons"), Some("icons"));
    }

    #[test]
    fn test_client_key_unknown() {
        assert_eq!(client_key("widget"), None);
        assert_eq!(client_key("dp_unknown"), None);
    }

    #[test]
    fn test_client_keys_strip_prefix_and_camel_case() {
        // Every row must be the snake name with "dp_" stripped and each
        // underscore-letter boundary uppercased.
        for (snake, camel) in CLIENT_KEYS {
            let stripped = snake.strip_prefix("dp_").unwrap();
            let mut expected = String::new();
            let mut upper_next = false;
            for c in stripped.chars() {
                if c == '_' {
                    upper_next = true;
                } else if upper_next {
                    expected.extend(c.to_uppercase());
                    upper_next = false;
                } else {
                    expected.push(c);
                }
            }
            assert_eq!(*camel, expected, "bad client key for {snake}");
        }
    }

    #[test]
    fn test_declared_options() {
        assert!(is_declared_option("format"));
        assert!(is_declared_option("datepicker_use_button"));
        assert!(is_declared_option("dp_min_view_mode"));
        assert!(!is_declared_option("dp_bogus"));
        assert!(!is_declared_option("pickTime"));
    }
}
