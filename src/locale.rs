//! Locale pattern tables for style-based pattern generation.
//!
//! A small hand-maintained CLDR subset: per-locale date and time patterns
//! for the four verbosity levels, the glue pattern combining them
//! (`{1}` date, `{0}` time), and the month/weekday/day-period names the
//! formatter needs for textual tokens. Resolution falls back from the
//! exact tag through the base language down to `en`.
//!
//! Time patterns carry no zone-name tokens: picker values are zone-less.

use crate::types::FormatStyle;

/// Pattern and name data for one locale, Gregorian calendar.
///
/// Pattern arrays are indexed full, long, medium, short. Weekday arrays
/// are Monday-first.
#[derive(Debug)]
pub(crate) struct Locale {
    pub(crate) tag: &'static str,
    pub(crate) date_patterns: [&'static str; 4],
    pub(crate) time_patterns: [&'static str; 4],
    pub(crate) glue: [&'static str; 4],
    pub(crate) months_wide: [&'static str; 12],
    pub(crate) months_abbr: [&'static str; 12],
    pub(crate) weekdays_wide: [&'static str; 7],
    pub(crate) weekdays_abbr: [&'static str; 7],
    pub(crate) day_periods: [&'static str; 2],
}

const EN_MONTHS_WIDE: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const EN_MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_WEEKDAYS_WIDE: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
const EN_WEEKDAYS_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub(crate) static EN: Locale = Locale {
    tag: "en",
    date_patterns: ["EEEE, MMMM d, y", "MMMM d, y", "MMM d, y", "M/d/yy"],
    time_patterns: ["h:mm:ss a", "h:mm:ss a", "h:mm:ss a", "h:mm a"],
    glue: ["{1} 'at' {0}", "{1} 'at' {0}", "{1}, {0}", "{1}, {0}"],
    months_wide: EN_MONTHS_WIDE,
    months_abbr: EN_MONTHS_ABBR,
    weekdays_wide: EN_WEEKDAYS_WIDE,
    weekdays_abbr: EN_WEEKDAYS_ABBR,
    day_periods: ["AM", "PM"],
};

pub(crate) static EN_GB: Locale = Locale {
    tag: "en_GB",
    date_patterns: ["EEEE, d MMMM y", "d MMMM y", "d MMM y", "dd/MM/y"],
    time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm:ss", "HH:mm"],
    glue: ["{1} 'at' {0}", "{1} 'at' {0}", "{1}, {0}", "{1}, {0}"],
    months_wide: EN_MONTHS_WIDE,
    months_abbr: EN_MONTHS_ABBR,
    weekdays_wide: EN_WEEKDAYS_WIDE,
    weekdays_abbr: EN_WEEKDAYS_ABBR,
    day_periods: ["am", "pm"],
};

pub(crate) static DE: Locale = Locale {
    tag: "de",
    date_patterns: ["EEEE, d. MMMM y", "d. MMMM y", "dd.MM.y", "dd.MM.yy"],
    time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm:ss", "HH:mm"],
    glue: ["{1} 'um' {0}", "{1} 'um' {0}", "{1}, {0}", "{1}, {0}"],
    months_wide: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    months_abbr: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    weekdays_wide: [
        "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
    ],
    weekdays_abbr: ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
    day_periods: ["AM", "PM"],
};

pub(crate) static FR: Locale = Locale {
    tag: "fr",
    date_patterns: ["EEEE d MMMM y", "d MMMM y", "d MMM y", "dd/MM/y"],
    time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm:ss", "HH:mm"],
    glue: ["{1} 'à' {0}", "{1} 'à' {0}", "{1} {0}", "{1} {0}"],
    months_wide: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    months_abbr: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
        "nov.", "déc.",
    ],
    weekdays_wide: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    weekdays_abbr: ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."],
    day_periods: ["AM", "PM"],
};

pub(crate) static ES: Locale = Locale {
    tag: "es",
    date_patterns: [
        "EEEE, d 'de' MMMM 'de' y",
        "d 'de' MMMM 'de' y",
        "d MMM y",
        "d/M/yy",
    ],
    time_patterns: ["H:mm:ss", "H:mm:ss", "H:mm:ss", "H:mm"],
    glue: ["{1}, {0}", "{1}, {0}", "{1}, {0}", "{1}, {0}"],
    months_wide: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    months_abbr: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    weekdays_wide: [
        "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
    ],
    weekdays_abbr: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
    day_periods: ["a. m.", "p. m."],
};

pub(crate) static IT: Locale = Locale {
    tag: "it",
    date_patterns: ["EEEE d MMMM y", "d MMMM y", "d MMM y", "dd/MM/yy"],
    time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm:ss", "HH:mm"],
    glue: ["{1} {0}", "{1} {0}", "{1}, {0}", "{1}, {0}"],
    months_wide: [
        "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
        "settembre", "ottobre", "novembre", "dicembre",
    ],
    months_abbr: [
        "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
    ],
    weekdays_wide: [
        "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato", "domenica",
    ],
    weekdays_abbr: ["lun", "mar", "mer", "gio", "ven", "sab", "dom"],
    day_periods: ["AM", "PM"],
};

pub(crate) static PT: Locale = Locale {
    tag: "pt",
    date_patterns: [
        "EEEE, d 'de' MMMM 'de' y",
        "d 'de' MMMM 'de' y",
        "d 'de' MMM 'de' y",
        "dd/MM/y",
    ],
    time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm:ss", "HH:mm"],
    glue: ["{1} {0}", "{1} {0}", "{1} {0}", "{1} {0}"],
    months_wide: [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
        "setembro", "outubro", "novembro", "dezembro",
    ],
    months_abbr: [
        "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.",
        "dez.",
    ],
    weekdays_wide: [
        "segunda-feira", "terça-feira", "quarta-feira", "quinta-feira", "sexta-feira",
        "sábado", "domingo",
    ],
    weekdays_abbr: ["seg.", "ter.", "qua.", "qui.", "sex.", "sáb.", "dom."],
    day_periods: ["AM", "PM"],
};

pub(crate) static NL: Locale = Locale {
    tag: "nl",
    date_patterns: ["EEEE d MMMM y", "d MMMM y", "d MMM y", "dd-MM-y"],
    time_patterns: ["HH:mm:ss", "HH:mm:ss", "HH:mm:ss", "HH:mm"],
    glue: ["{1} 'om' {0}", "{1} 'om' {0}", "{1}, {0}", "{1}, {0}"],
    months_wide: [
        "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september",
        "oktober", "november", "december",
    ],
    months_abbr: [
        "jan.", "feb.", "mrt.", "apr.", "mei", "jun.", "jul.", "aug.", "sep.", "okt.", "nov.",
        "dec.",
    ],
    weekdays_wide: [
        "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag", "zondag",
    ],
    weekdays_abbr: ["ma", "di", "wo", "do", "vr", "za", "zo"],
    day_periods: ["a.m.", "p.m."],
};

static ALL: &[&Locale] = &[&EN, &EN_GB, &DE, &FR, &ES, &IT, &PT, &NL];

/// Resolves a locale tag to its table entry.
///
/// Tries the exact tag (with `-` normalized to `_`), then the base
/// language, then falls back to `en`.
pub(crate) fn resolve(tag: &str) -> &'static Locale {
    let normalized = tag.trim().replace('-', "_");

    if let Some(found) = ALL
        .iter()
        .copied()
        .find(|locale| locale.tag.eq_ignore_ascii_case(&normalized))
    {
        return found;
    }

    let base = normalized.split('_').next().unwrap_or_default();
    ALL.iter()
        .copied()
        .find(|locale| locale.tag.eq_ignore_ascii_case(base))
        .unwrap_or(&EN)
}

/// Generates the pattern for a (date style, time style) pairing.
///
/// `None` on both sides yields the empty pattern; a single `None` side
/// yields the other side's pattern alone, without glue.
pub(crate) fn pattern_for(
    locale: &Locale,
    date_style: FormatStyle,
    time_style: FormatStyle,
) -> String {
    match (date_style.table_index(), time_style.table_index()) {
        (Some(d), Some(t)) => locale.glue[d]
            .replace("{1}", locale.date_patterns[d])
            .replace("{0}", locale.time_patterns[t]),
        (Some(d), None) => locale.date_patterns[d].to_owned(),
        (None, Some(t)) => locale.time_patterns[t].to_owned(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_tag() {
        assert_eq!(resolve("en_GB").tag, "en_GB");
        assert_eq!(resolve("de").tag, "de");
    }

    #[test]
    fn test_resolve_normalizes_separator_and_case() {
        assert_eq!(resolve("en-gb").tag, "en_GB");
        assert_eq!(resolve("FR").tag, "fr");
    }

    #[test]
    fn test_resolve_base_language_fallback() {
        assert_eq!(resolve("fr_FR").tag, "fr");
        assert_eq!(resolve("de_AT").tag, "de");
        assert_eq!(resolve("en_US").tag, "en");
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_en() {
        assert_eq!(resolve("ja_JP").tag, "en");
        assert_eq!(resolve("").tag, "en");
    }

    #[test]
    fn test_pattern_date_only() {
        let pattern = pattern_for(&EN, FormatStyle::Short, FormatStyle::None);
        assert_eq!(pattern, "M/d/yy");
    }

    #[test]
    fn test_pattern_date_and_time() {
        let pattern = pattern_for(&EN, FormatStyle::Short, FormatStyle::Short);
        assert_eq!(pattern, "M/d/yy, h:mm a");

        let pattern = pattern_for(&DE, FormatStyle::Full, FormatStyle::Short);
        assert_eq!(pattern, "EEEE, d. MMMM y 'um' HH:mm");
    }

    #[test]
    fn test_pattern_time_only() {
        let pattern = pattern_for(&FR, FormatStyle::None, FormatStyle::Long);
        assert_eq!(pattern, "HH:mm:ss");
    }

    #[test]
    fn test_long_time_has_seconds_short_does_not() {
        for locale in super::ALL {
            let long = pattern_for(locale, FormatStyle::None, FormatStyle::Long);
            let short = pattern_for(locale, FormatStyle::None, FormatStyle::Short);
            assert!(long.contains('s'), "{} long time lacks seconds", locale.tag);
            assert!(!short.contains('s'), "{} short time has seconds", locale.tag);
        }
    }

    #[test]
    fn test_date_patterns_have_no_time_tokens() {
        for locale in super::ALL {
            for style in [
                FormatStyle::Full,
                FormatStyle::Long,
                FormatStyle::Medium,
                FormatStyle::Short,
            ] {
                let pattern = pattern_for(locale, style, FormatStyle::None);
                // Strip quoted literals before scanning for time letters.
                let mut bare = String::new();
                let mut in_quote = false;
                for c in pattern.chars() {
                    if c == '\'' {
                        in_quote = !in_quote;
                    } else if !in_quote {
                        bare.push(c);
                    }
                }
                for token in ['h', 'H', 'm', 's', 'a'] {
                    // 'm' only counts as a time token outside of 'M'
                    assert!(
                        !bare.contains(token),
                        "{} {style} date pattern contains time token {token}",
                        locale.tag
                    );
                }
            }
        }
    }
}
