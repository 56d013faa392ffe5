//! 时间段解析: date + time → seating slot
//!
//! All user-supplied date/time strings are turned into a [`TimeSlot`] here;
//! the rest of the engine only sees validated slots.

use chrono::{Duration, NaiveDate, NaiveTime};
use shared::models::TimeSlot;

use super::{EngineError, EngineResult};

/// 解析日期字符串 (YYYY-MM-DD)
///
/// 只接受四位年份；chrono 本身还接受 `+262142-12-31` 这类带符号的扩展年份
pub fn parse_date(date: &str) -> EngineResult<NaiveDate> {
    let invalid = || EngineError::InvalidSlot(format!("Invalid date format: {}", date));
    let trimmed = date.trim();
    if trimmed.len() != 10 || !trimmed.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}

/// 解析时间字符串 (HH:MM, 24h, zero-padded)
pub fn parse_time(time: &str) -> EngineResult<NaiveTime> {
    let invalid = || EngineError::InvalidSlot(format!("Invalid time format: {}", time));
    let bytes = time.trim().as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    let hour = u32::from((digits[0] - b'0') * 10 + (digits[1] - b'0'));
    let minute = u32::from((digits[2] - b'0') * 10 + (digits[3] - b'0'));
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// date + time + seating duration → slot
pub fn parse_slot(date: &str, time: &str, duration: Duration) -> EngineResult<TimeSlot> {
    let start = parse_date(date)?.and_time(parse_time(time)?);
    TimeSlot::try_new(start, duration).ok_or_else(|| {
        EngineError::InvalidSlot(format!("Slot out of range: {} {}", date, time))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot_ok() {
        let slot = parse_slot("2026-03-01", "18:30", Duration::minutes(120)).unwrap();
        assert_eq!(slot.start.to_string(), "2026-03-01 18:30:00");
        assert_eq!(slot.end.to_string(), "2026-03-01 20:30:00");
    }

    #[test]
    fn test_parse_time_rejects_bad_shapes() {
        for bad in ["", "9:00", "18:0", "18.00", "24:00", "12:60", "ab:cd", "18:00:00"] {
            assert!(
                matches!(parse_time(bad), Err(EngineError::InvalidSlot(_))),
                "{bad} should be rejected"
            );
        }
        assert!(parse_time("00:00").is_ok());
        assert!(parse_time("23:59").is_ok());
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        assert!(parse_date("2026-02-30").is_err());
        assert!(parse_date("01/03/2026").is_err());
        assert!(parse_date("2028-02-29").is_ok());
    }

    #[test]
    fn test_out_of_range_dates_are_invalid_slots() {
        for date in ["+262142-12-31", "+99999-12-31", "-0001-01-01", "12026-03-01"] {
            assert!(
                matches!(
                    parse_slot(date, "23:00", Duration::minutes(120)),
                    Err(EngineError::InvalidSlot(_))
                ),
                "{date} should be rejected"
            );
        }
        // 最后一天也能解析，只要结束时间不溢出
        assert!(parse_slot("9999-12-31", "20:00", Duration::minutes(120)).is_ok());
        assert!(matches!(
            parse_slot("2026-03-01", "18:00", Duration::days(200_000 * 366)),
            Err(EngineError::InvalidSlot(_))
        ));
    }
}
