//! Field formatters: normalize raw record fields for display.
//!
//! Both formatters are total. Input that does not match the expected shape
//! comes back unchanged so an operator still sees what the agent sent.

const KIB: u128 = 1024;
const MIB: u128 = KIB * 1024;
const GIB: u128 = MIB * 1024;

/// Convert an agent timestamp `MM/DD/YY HH:MM:SS` into `MM/DD/YYYY  hh:mm AM/PM`.
///
/// Two-digit years are widened with a `20` prefix; no other century
/// inference is done.
///
/// ```
/// use agentfmtlib::format_timestamp;
///
/// assert_eq!(format_timestamp("03/31/25 12:32:05"), "03/31/2025  12:32 PM");
/// assert_eq!(format_timestamp("not a date"), "not a date");
/// ```
pub fn format_timestamp(raw: &str) -> String {
    reformat_timestamp(raw).unwrap_or_else(|| raw.to_string())
}

fn reformat_timestamp(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.split(' ').collect();
    let [date, time] = parts.as_slice() else {
        return None;
    };

    let date_parts: Vec<&str> = date.split('/').collect();
    let [month, day, year] = date_parts.as_slice() else {
        return None;
    };

    let mut time_parts = time.split(':');
    let hour = time_parts.next()?;
    let minute = time_parts.next()?;

    let full_year = if year.len() == 2 {
        format!("20{}", year)
    } else {
        year.to_string()
    };

    let hour24: u32 = hour.parse().ok()?;
    let meridiem = if hour24 >= 12 { "PM" } else { "AM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };

    Some(format!(
        "{:0>2}/{:0>2}/{}  {:02}:{:0>2} {}",
        month, day, full_year, hour12, minute, meridiem
    ))
}

/// Humanize a byte count: `b` below 1 KiB, then `kb`, `mb`, `gb`.
///
/// Scaled values are rounded to the nearest integer, halves rounding up.
/// Non-numeric input is returned unchanged.
///
/// ```
/// use agentfmtlib::format_size;
///
/// assert_eq!(format_size("295000"), "288kb");
/// assert_eq!(format_size("abc"), "abc");
/// ```
pub fn format_size(raw: &str) -> String {
    let Ok(size) = raw.trim().parse::<u64>() else {
        return raw.to_string();
    };
    let size = u128::from(size);

    if size < KIB {
        format!("{}b", size)
    } else if size < MIB {
        format!("{}kb", round_div(size, KIB))
    } else if size < GIB {
        format!("{}mb", round_div(size, MIB))
    } else {
        format!("{}gb", round_div(size, GIB))
    }
}

fn round_div(value: u128, unit: u128) -> u128 {
    (value + unit / 2) / unit
}
