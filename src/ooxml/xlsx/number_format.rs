//! Number format codes and date detection.
//!
//! A numeric cell is a date when the number format attached to its style
//! would render it as a calendar date, a time of day or an elapsed time.
//! Formats that open with an hour count (`[h]:mm:ss`) hold durations.

/// Get the format code for a built-in number format ID.
///
/// Only the locale-independent built-ins are known; other IDs below 164
/// render as `General`.
pub fn builtin_format_code(id: u32) -> Option<&'static str> {
    match id {
        0 => Some("General"),
        1 => Some("0"),
        2 => Some("0.00"),
        3 => Some("#,##0"),
        4 => Some("#,##0.00"),
        5 => Some("\"$\"#,##0_);(\"$\"#,##0)"),
        6 => Some("\"$\"#,##0_);[Red](\"$\"#,##0)"),
        7 => Some("\"$\"#,##0.00_);(\"$\"#,##0.00)"),
        8 => Some("\"$\"#,##0.00_);[Red](\"$\"#,##0.00)"),
        9 => Some("0%"),
        10 => Some("0.00%"),
        11 => Some("0.00E+00"),
        12 => Some("# ?/?"),
        13 => Some("# ??/??"),
        14 => Some("mm-dd-yy"),
        15 => Some("d-mmm-yy"),
        16 => Some("d-mmm"),
        17 => Some("mmm-yy"),
        18 => Some("h:mm AM/PM"),
        19 => Some("h:mm:ss AM/PM"),
        20 => Some("h:mm"),
        21 => Some("h:mm:ss"),
        22 => Some("m/d/yy h:mm"),
        37 => Some("#,##0_);(#,##0)"),
        38 => Some("#,##0_);[Red](#,##0)"),
        39 => Some("#,##0.00_);(#,##0.00)"),
        40 => Some("#,##0.00_);[Red](#,##0.00)"),
        45 => Some("mm:ss"),
        46 => Some("[h]:mm:ss"),
        47 => Some("mmss.0"),
        48 => Some("##0.0E+0"),
        49 => Some("@"),
        _ => None,
    }
}

/// Check if a format code renders numbers as a date, a time or an
/// elapsed time.
///
/// Only the first section (up to `;`) is considered. Quoted literals,
/// escaped characters (`\x`), padding (`_x`) and bracketed modifiers such
/// as colors or locales are skipped. The elapsed-time tokens `[h]`, `[hh]`,
/// `[m]`, `[mm]`, `[s]` and `[ss]` count as date codes.
pub fn is_date_format(format: &str) -> bool {
    let mut chars = format.chars();
    let mut escaped = false;
    let mut in_quote = false;
    let mut am_pm = false;

    while let Some(ch) = chars.next() {
        if escaped {
            escaped = false;
        } else if in_quote {
            in_quote = ch != '"';
        } else {
            match ch {
                '_' | '\\' => escaped = true,
                '"' => in_quote = true,
                ';' => return false,
                '[' => {
                    let token: String = chars.by_ref().take_while(|&c| c != ']').collect();
                    if is_elapsed_token(&token) {
                        return true;
                    }
                },
                'a' | 'A' if !am_pm => am_pm = true,
                'p' | 'm' | '/' | 'P' | 'M' if am_pm => return true,
                'd' | 'm' | 'h' | 'y' | 's' | 'D' | 'M' | 'H' | 'Y' | 'S' if !am_pm => {
                    return true;
                },
                _ => {},
            }
        }
    }
    false
}

/// Check if a format code renders numbers as a duration in hours.
///
/// True when the first section opens with `[h]` or `[hh]`, optionally
/// followed by minutes and seconds.
pub fn is_duration_format(format: &str) -> bool {
    let section = format.split(';').next().unwrap_or_default();
    let Some(rest) = section.strip_prefix('[') else {
        return false;
    };
    rest.split_once(']').is_some_and(|(token, _)| {
        matches!(token.len(), 1 | 2) && token.chars().all(|c| c.eq_ignore_ascii_case(&'h'))
    })
}

/// `h`, `hh`, `m`, `mm`, `s` or `ss` in either case.
fn is_elapsed_token(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), second, None) => {
            matches!(first.to_ascii_lowercase(), 'h' | 'm' | 's')
                && second.is_none_or(|c| c.eq_ignore_ascii_case(&first))
        },
        _ => false,
    }
}
