//! ICU pattern to client widget token conversion.
//!
//! The widget consumes moment-style tokens. Year, day and weekday letters
//! differ between the two syntaxes; month, hour, minute and second
//! letters happen to coincide and pass through untouched.

use crate::consts::PATTERN_QUOTE;

/// Converts an ICU-style date/time pattern into the widget's token
/// syntax. Total and pure: tokens without a rewrite rule pass through
/// unchanged, quoted literals become bracketed widget literals.
pub fn to_moment_format(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == PATTERN_QUOTE {
            // '' is an escaped quote outside any literal
            if chars.peek() == Some(&PATTERN_QUOTE) {
                chars.next();
                out.push(PATTERN_QUOTE);
                continue;
            }
            let mut literal = String::new();
            loop {
                match chars.next() {
                    Some(PATTERN_QUOTE) => {
                        if chars.peek() == Some(&PATTERN_QUOTE) {
                            chars.next();
                            literal.push(PATTERN_QUOTE);
                        } else {
                            break;
                        }
                    }
                    Some(ch) => literal.push(ch),
                    None => break,
                }
            }
            // the widget treats a bare T specially, everything else is
            // bracketed literal text
            if literal == "T" {
                out.push('T');
            } else {
                out.push('[');
                out.push_str(&literal);
                out.push(']');
            }
        } else if c.is_ascii_alphabetic() {
            let mut len = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                len += 1;
            }
            push_token(c, len, &mut out);
        } else {
            out.push(c);
        }
    }

    out
}

fn push_token(letter: char, len: usize, out: &mut String) {
    match letter {
        'y' => out.push_str(if len == 2 { "YY" } else { "YYYY" }),
        'd' => out.push_str(if len >= 2 { "DD" } else { "D" }),
        'E' => out.push_str(match len {
            6.. => "dd",
            4 | 5 => "dddd",
            _ => "ddd",
        }),
        'a' => out.push('A'),
        'Z' => out.push_str(if len >= 5 { "Z" } else { "ZZ" }),
        // zone names and eras have no widget equivalent
        'z' | 'v' | 'G' => {}
        _ => {
            for _ in 0..len {
                out.push(letter);
            }
        }
    }
}
