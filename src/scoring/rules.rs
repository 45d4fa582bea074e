use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ReceiptError, Result};

pub const ROUND_TOTAL_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const ITEM_PAIR_POINTS: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

// Seconds from midnight
const AFTERNOON_START: u32 = 14 * 3600;
const AFTERNOON_END: u32 = 16 * 3600;

/// Parse a non-negative currency amount such as "35.35".
///
/// Only ASCII digits with an optional `.` and fractional digits are accepted.
/// `field` names the field in the error for anything else.
pub fn parse_amount(value: &str, field: &str) -> Result<Decimal> {
    if !is_plain_decimal(value) {
        return Err(ReceiptError::invalid(field));
    }
    Decimal::from_str(value).map_err(|_| ReceiptError::invalid(field))
}

// `digits` or `digits.digits`; no sign, exponent or separators
fn is_plain_decimal(value: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match value.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(value),
    }
}

/// Parse `YYYY-MM-DD`. Two-digit month and day are required.
pub fn parse_purchase_date(value: &str) -> Result<NaiveDate> {
    if !has_shape(value, "dddd-dd-dd") {
        return Err(ReceiptError::invalid("purchaseDate"));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ReceiptError::invalid("purchaseDate"))
}

/// Parse 24-hour `HH:MM`.
pub fn parse_purchase_time(value: &str) -> Result<NaiveTime> {
    if !has_shape(value, "dd:dd") {
        return Err(ReceiptError::invalid("purchaseTime"));
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| ReceiptError::invalid("purchaseTime"))
}

// 'd' matches an ASCII digit, anything else must match literally
fn has_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'd' => v.is_ascii_digit(),
            _ => v == s,
        })
}

/// One point per Unicode letter or digit in the retailer name.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// 50 points when the last two characters of the total string are "00".
pub fn round_total_points(total: &str) -> u64 {
    let bytes = total.as_bytes();
    if bytes.len() >= 2 && bytes.ends_with(b"00") {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// 25 points when the total is a multiple of 0.25.
pub fn quarter_multiple_points(total: Decimal) -> u64 {
    let quarter = Decimal::new(25, 2);
    if (total % quarter).is_zero() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// 5 points for every two items.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// True when the description, trimmed of leading and trailing spaces, has a
/// UTF-8 byte length divisible by 3. An empty description counts.
pub fn description_length_matches(description: &str) -> bool {
    description.trim_matches(' ').len() % 3 == 0
}

/// `ceil(price * 0.2)` when the space-trimmed description length is a multiple of 3.
///
/// Saturates at `u64::MAX` for prices too large to represent.
pub fn item_description_points(description: &str, price: Decimal) -> u64 {
    if !description_length_matches(description) {
        return 0;
    }
    (price * Decimal::new(2, 1))
        .ceil()
        .to_u64()
        .unwrap_or(u64::MAX)
}

/// 6 points when the day of the month is odd.
pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 10 points when the purchase falls strictly between 14:00 and 16:00.
pub fn afternoon_points(time: NaiveTime) -> u64 {
    let seconds = time.num_seconds_from_midnight();
    if seconds > AFTERNOON_START && seconds < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}
