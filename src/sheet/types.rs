//! Common types for spreadsheet operations.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use std::fmt;

/// Result type for spreadsheet operations.
pub type Result<T> = crate::common::Result<T>;

/// Types of data that can be stored in a cell.
///
/// The [`Display`](fmt::Display) impl renders values the way a plain-text
/// dump shows them: booleans as `True`/`False`, floats always with a
/// fractional part or exponent, dates as `YYYY-MM-DD HH:MM:SS`, durations
/// as `[D day[s], ]H:MM:SS[.ffffff]`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
    /// Date and time value
    DateTime(NaiveDateTime),
    /// Calendar date without a time of day
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Elapsed time, from cells formatted like `[h]:mm:ss`
    Duration(TimeDelta),
    /// Error value such as `#N/A` or `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Check whether the cell holds no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => f.write_str(&format_float(*v)),
            CellValue::String(s) | CellValue::Error(s) => f.write_str(s),
            CellValue::DateTime(dt) => {
                write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))?;
                write_micros(f, dt.nanosecond())
            },
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Time(t) => {
                write!(f, "{}", t.format("%H:%M:%S"))?;
                write_micros(f, t.nanosecond())
            },
            CellValue::Duration(d) => write_duration(f, *d),
        }
    }
}

fn write_micros(f: &mut fmt::Formatter<'_>, nanos: u32) -> fmt::Result {
    let micros = (nanos % 1_000_000_000) / 1_000;
    if micros == 0 {
        Ok(())
    } else {
        write!(f, ".{:06}", micros)
    }
}

/// Days are split off with floor division, so the clock part is never
/// negative: minus six hours is `-1 day, 18:00:00`.
fn write_duration(f: &mut fmt::Formatter<'_>, delta: TimeDelta) -> fmt::Result {
    const MICROS_PER_DAY: i128 = 86_400_000_000;

    let total = delta.num_seconds() as i128 * 1_000_000 + (delta.subsec_nanos() / 1_000) as i128;
    let days = total.div_euclid(MICROS_PER_DAY);
    let rest = total.rem_euclid(MICROS_PER_DAY);
    let (seconds, micros) = (rest / 1_000_000, rest % 1_000_000);

    if days != 0 {
        let plural = if days.abs() == 1 { "" } else { "s" };
        write!(f, "{} day{}, ", days, plural)?;
    }
    write!(f, "{}:{:02}:{:02}", seconds / 3600, seconds / 60 % 60, seconds % 60)?;
    if micros != 0 {
        write!(f, ".{:06}", micros)?;
    }
    Ok(())
}

/// Format a float as its shortest round-trip representation.
///
/// Fixed notation is used for decimal exponents in `-4..16`, scientific
/// notation (`1e+16`, `1.5e-07`) outside of it. Integral values keep a
/// trailing `.0`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format_finite(value);
    let (negative, unsigned) = match shortest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, shortest),
    };

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // value = 0.DIGITS * 10^point
    let mut digits: String = format!("{}{}", int_part, frac_part);
    let mut point = int_part.len() as i32 + exponent;
    let leading = digits.len() - digits.trim_start_matches('0').len();
    digits.drain(..leading);
    point -= leading as i32;
    digits.truncate(digits.trim_end_matches('0').len());

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    if digits.is_empty() {
        out.push_str("0.0");
        return out;
    }

    let sci_exponent = point - 1;
    if (-4..16).contains(&sci_exponent) {
        if point <= 0 {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', (-point) as usize));
            out.push_str(&digits);
        } else if point as usize >= digits.len() {
            out.push_str(&digits);
            out.extend(std::iter::repeat_n('0', point as usize - digits.len()));
            out.push_str(".0");
        } else {
            let (whole, frac) = digits.split_at(point as usize);
            out.push_str(whole);
            out.push('.');
            out.push_str(frac);
        }
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if sci_exponent < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", sci_exponent.abs()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_formatting() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(-2.5), "-2.5");
        assert_eq!(format_float(1234.5678), "1234.5678");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1.25e-7), "1.25e-07");
        assert_eq!(format_float(1.5e300), "1.5e+300");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Bool(true).to_string(), "True");
        assert_eq!(CellValue::Bool(false).to_string(), "False");
        assert_eq!(CellValue::Int(-42).to_string(), "-42");
        assert_eq!(CellValue::Float(2.0).to_string(), "2.0");
        assert_eq!(CellValue::String("ABC-1".into()).to_string(), "ABC-1");
        assert_eq!(CellValue::Error("#N/A".into()).to_string(), "#N/A");
    }

    #[test]
    fn test_display_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let dt = date.and_hms_opt(8, 5, 0).unwrap();
        assert_eq!(CellValue::DateTime(dt).to_string(), "2024-03-09 08:05:00");
        assert_eq!(CellValue::Date(date).to_string(), "2024-03-09");

        let precise = date.and_hms_micro_opt(8, 5, 0, 250_000).unwrap();
        assert_eq!(CellValue::DateTime(precise).to_string(), "2024-03-09 08:05:00.250000");

        let time = NaiveTime::from_hms_opt(12, 30, 1).unwrap();
        assert_eq!(CellValue::Time(time).to_string(), "12:30:01");
    }

    #[test]
    fn test_display_durations() {
        let hours = |h: i64| CellValue::Duration(TimeDelta::try_hours(h).unwrap());
        assert_eq!(hours(30).to_string(), "1 day, 6:00:00");
        assert_eq!(hours(48).to_string(), "2 days, 0:00:00");
        assert_eq!(hours(5).to_string(), "5:00:00");
        assert_eq!(hours(-6).to_string(), "-1 day, 18:00:00");
        assert_eq!(hours(-54).to_string(), "-3 days, 18:00:00");
        assert_eq!(CellValue::Duration(TimeDelta::zero()).to_string(), "0:00:00");

        let precise = TimeDelta::try_milliseconds(61_500).unwrap();
        assert_eq!(CellValue::Duration(precise).to_string(), "0:01:01.500000");
    }

    #[test]
    fn test_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(!CellValue::String(String::new()).is_empty());
    }
}
