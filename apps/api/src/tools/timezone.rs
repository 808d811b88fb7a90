use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::errors::AppError;
use crate::tools::Meridiem;

#[derive(Debug, Serialize)]
pub struct TimezoneConversion {
    #[serde(rename = "originalTime")]
    pub original_time: String,
    #[serde(rename = "originalTimezone")]
    pub original_timezone: String,
    #[serde(rename = "convertedTime")]
    pub converted_time: String,
    #[serde(rename = "convertedTimezone")]
    pub converted_timezone: String,
}

/// Converts a 12-hour wall-clock time anchored to today's date in `from` into
/// the equivalent wall-clock time in `to`. Both outputs render as 12-hour
/// clock strings with an AM/PM suffix, e.g. `"02:30 PM"`.
pub fn convert(
    from: &str,
    to: &str,
    hour: u32,
    minute: u32,
    ampm: Meridiem,
) -> Result<TimezoneConversion, AppError> {
    let from_tz = parse_zone(from)?;
    let today = Utc::now().with_timezone(&from_tz).date_naive();
    convert_on(today, from, to, hour, minute, ampm)
}

/// Date-explicit core of `convert`, kept separate so conversions are testable
/// without depending on the current date.
fn convert_on(
    date: NaiveDate,
    from: &str,
    to: &str,
    hour: u32,
    minute: u32,
    ampm: Meridiem,
) -> Result<TimezoneConversion, AppError> {
    if !(1..=12).contains(&hour) {
        return Err(AppError::Validation(format!(
            "'hour' must be between 1 and 12, got {hour}"
        )));
    }
    if minute > 59 {
        return Err(AppError::Validation(format!(
            "'minute' must be between 0 and 59, got {minute}"
        )));
    }

    let from_tz = parse_zone(from)?;
    let to_tz = parse_zone(to)?;

    let hour24 = match (ampm, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };

    let naive = date
        .and_hms_opt(hour24, minute, 0)
        .ok_or_else(|| AppError::Validation("invalid wall-clock time".to_string()))?;

    // A DST spring-forward gap makes the wall-clock time non-existent in the
    // source zone; an ambiguous fall-back time resolves to its first
    // occurrence.
    let zoned = from_tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
        AppError::Validation(format!(
            "time {hour:02}:{minute:02} does not exist in timezone '{from}' today"
        ))
    })?;

    let converted = zoned.with_timezone(&to_tz);

    Ok(TimezoneConversion {
        original_time: zoned.format("%I:%M %p").to_string(),
        original_timezone: from.to_string(),
        converted_time: converted.format("%I:%M %p").to_string(),
        converted_timezone: to.to_string(),
    })
}

fn parse_zone(name: &str) -> Result<Tz, AppError> {
    name.parse::<Tz>()
        .map_err(|_| AppError::Validation(format!("unknown timezone '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mid-January: no DST transition in any zone used below.
    fn winter_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn utc_to_utc_noon_is_identity() {
        let result = convert_on(winter_day(), "UTC", "UTC", 12, 0, Meridiem::Pm).unwrap();
        assert_eq!(result.original_time, "12:00 PM");
        assert_eq!(result.converted_time, "12:00 PM");
        assert_eq!(result.original_timezone, "UTC");
        assert_eq!(result.converted_timezone, "UTC");
    }

    #[test]
    fn midnight_is_hour_zero() {
        let result = convert_on(winter_day(), "UTC", "UTC", 12, 0, Meridiem::Am).unwrap();
        assert_eq!(result.original_time, "12:00 AM");
    }

    #[test]
    fn new_york_winter_is_five_hours_behind_utc() {
        let result =
            convert_on(winter_day(), "America/New_York", "UTC", 2, 30, Meridiem::Pm).unwrap();
        assert_eq!(result.original_time, "02:30 PM");
        assert_eq!(result.converted_time, "07:30 PM");
    }

    #[test]
    fn round_trip_restores_original_time() {
        let forward =
            convert_on(winter_day(), "America/New_York", "Europe/London", 9, 45, Meridiem::Am)
                .unwrap();
        assert_eq!(forward.converted_time, "02:45 PM");

        let back =
            convert_on(winter_day(), "Europe/London", "America/New_York", 2, 45, Meridiem::Pm)
                .unwrap();
        assert_eq!(back.converted_time, "09:45 AM");
    }

    #[test]
    fn unknown_zone_is_validation_error() {
        let err = convert_on(winter_day(), "Mars/Olympus", "UTC", 1, 0, Meridiem::Am).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn hour_out_of_range_is_rejected() {
        let err = convert_on(winter_day(), "UTC", "UTC", 0, 0, Meridiem::Am).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = convert_on(winter_day(), "UTC", "UTC", 13, 0, Meridiem::Am).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn minute_out_of_range_is_rejected() {
        let err = convert_on(winter_day(), "UTC", "UTC", 1, 60, Meridiem::Am).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn spring_forward_gap_is_rejected() {
        // 2024-03-10 02:30 does not exist in America/New_York
        let gap_day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let err =
            convert_on(gap_day, "America/New_York", "UTC", 2, 30, Meridiem::Am).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
