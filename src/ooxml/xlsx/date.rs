//! Spreadsheet serial dates.

use crate::sheet::CellValue;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const MICROS_PER_DAY: f64 = 86_400_000_000.0;
/// Largest day count an elapsed-time value may hold.
const MAX_DURATION_DAYS: i64 = 999_999_999;

/// The epoch a workbook counts serial dates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSystem {
    /// Day 1 is 1900-01-01, with the fictitious 1900-02-29 at serial 60.
    #[default]
    V1900,
    /// Day 0 is 1904-01-01.
    V1904,
}

impl DateSystem {
    fn epoch(self) -> Option<NaiveDateTime> {
        let date = match self {
            DateSystem::V1900 => NaiveDate::from_ymd_opt(1899, 12, 30),
            DateSystem::V1904 => NaiveDate::from_ymd_opt(1904, 1, 1),
        }?;
        date.and_hms_opt(0, 0, 0)
    }
}

/// Convert a serial date to a date-time value.
///
/// The fractional day is rounded to the millisecond. A serial in `[0, 1)`
/// is a bare time of day. In the 1900 system, serials below 60 are shifted
/// by one day to step over the 1900 leap-year bug.
///
/// Returns `None` when the serial lies outside the representable range.
pub fn from_excel(serial: f64, system: DateSystem) -> Option<CellValue> {
    if !serial.is_finite() {
        return None;
    }

    let mut day = serial.floor();
    let fraction = serial - day;
    let millis = (fraction * MILLIS_PER_DAY).round() as i64;
    let diff = TimeDelta::try_milliseconds(millis)?;

    if (0.0..1.0).contains(&serial) && millis < MILLIS_PER_DAY as i64 {
        let time = NaiveTime::MIN.overflowing_add_signed(diff).0;
        return Some(CellValue::Time(time));
    }

    if system == DateSystem::V1900 && serial > 0.0 && serial < 60.0 {
        day += 1.0;
    }

    if day.abs() > 3_000_000.0 {
        return None;
    }
    let days = TimeDelta::try_days(day as i64)?;
    let value = system
        .epoch()?
        .checked_add_signed(days)?
        .checked_add_signed(diff)?;
    Some(CellValue::DateTime(value))
}

/// Convert a serial number of days to an elapsed-time value.
///
/// The serial is taken to the nearest microsecond, then any sub-second part
/// is rounded to the millisecond (ties to even). The date system does not
/// matter here.
///
/// Returns `None` when the value is not finite or exceeds
/// 999,999,999 days either way.
pub fn from_excel_duration(serial: f64) -> Option<CellValue> {
    if !serial.is_finite() || serial.abs() > (MAX_DURATION_DAYS + 1) as f64 {
        return None;
    }

    let total = (serial * MICROS_PER_DAY).round_ties_even() as i128;
    let seconds = total.div_euclid(1_000_000);
    let micros = total.rem_euclid(1_000_000);
    let (millis, remainder) = (micros / 1_000, micros % 1_000);
    let millis = if remainder > 500 || (remainder == 500 && millis % 2 == 1) {
        millis + 1
    } else {
        millis
    };

    if seconds.div_euclid(86_400).abs() > MAX_DURATION_DAYS as i128 {
        return None;
    }
    let delta = TimeDelta::try_seconds(seconds as i64)?
        .checked_add(&TimeDelta::try_milliseconds(millis as i64)?)?;
    Some(CellValue::Duration(delta))
}

/// Parse an ISO 8601 value stored in a `t="d"` cell.
pub fn from_iso8601(text: &str) -> Option<CellValue> {
    let text = text.trim();
    let text = text.strip_suffix('Z').unwrap_or(text);

    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(CellValue::DateTime(dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M") {
        return Some(CellValue::DateTime(dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(CellValue::Date(date));
    }
    if let Ok(time) = NaiveTime::parse_from_str(text, "%H:%M:%S%.f") {
        return Some(CellValue::Time(time));
    }
    None
}
