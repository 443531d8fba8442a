//! Wall-clock to instant conversion for solar queries.
//!
//! Callers speak in local fractional hours ("10.5" means 10:30) on a calendar
//! date in an IANA time zone. This module turns that into a zone-aware
//! `DateTime`, estimates ΔT for it, and turns event timestamps back into
//! fractional hours.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use chrono_tz::Tz;
use solar_positioning::time::DeltaT;

use crate::math::{floor, fract, round};
use crate::{Error, Result};

/// ΔT in seconds used for sunrise/sunset queries.
///
/// Event times are reported to the minute, where the year-to-year drift of
/// ΔT is invisible, so a fixed value is used instead of an estimate.
pub const SUN_EVENT_DELTA_T: f64 = 68.0;

/// Minutes per hour
const MINUTES_PER_HOUR: f32 = 60.0;

/// Resolves an IANA time zone identifier such as `"Europe/Paris"`.
///
/// # Errors
/// Returns `UnknownTimeZone` if the identifier is not in the zone database.
///
/// # Example
/// ```
/// # use solar_sky::time::parse_time_zone;
/// assert_eq!(parse_time_zone("Europe/Paris").unwrap(), chrono_tz::Europe::Paris);
/// assert!(parse_time_zone("Nowhere/Special").is_err());
/// ```
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_| Error::UnknownTimeZone)
}

/// Splits a fractional hour into whole hours and minutes past the hour.
///
/// The hour is floored and the minute rounded, so `10.999` becomes
/// `(10, 60)`; callers add the minutes as a duration and let them carry.
#[must_use]
pub fn split_hour(hour: f32) -> (i64, i64) {
    let whole = floor(hour) as i64;
    let minutes = round(fract(hour) * MINUTES_PER_HOUR) as i64;
    (whole, minutes)
}

/// Converts a local timestamp back into a fractional hour (`hour + minute / 60`).
///
/// Seconds are dropped, matching the minute resolution of the input side.
#[must_use]
pub fn fractional_hour<Z: TimeZone>(datetime: &DateTime<Z>) -> f32 {
    datetime.hour() as f32 + datetime.minute() as f32 / MINUTES_PER_HOUR
}

/// Builds the instant at which a clock in `time_zone` shows `hour` on `date`.
///
/// Hours outside `[0, 24)` roll into neighbouring days. Local times that
/// occur twice (end of daylight saving) resolve to the earlier instant;
/// local times skipped by a daylight saving jump are moved forward by one
/// hour, the way a lenient calendar would.
///
/// # Errors
/// Returns `InvalidHour` for non-finite or out-of-calendar hours and
/// `NonexistentLocalTime` if the zone cannot place the time at all.
pub fn local_datetime(date: NaiveDate, hour: f32, time_zone: Tz) -> Result<DateTime<Tz>> {
    let hour = crate::error::check_hour(hour)?;
    let (whole, minutes) = split_hour(hour);

    let offset = whole
        .checked_mul(60)
        .and_then(|m| m.checked_add(minutes))
        .and_then(Duration::try_minutes)
        .ok_or(Error::invalid_hour(hour))?;
    let naive = date
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.checked_add_signed(offset))
        .ok_or(Error::invalid_hour(hour))?;

    resolve_local(naive, time_zone)
}

/// Local noon on `date`, the reference instant for whole-day event queries.
///
/// Noon keeps the UTC calendar day equal to the local one for every zone
/// offset below twelve hours.
///
/// # Errors
/// Returns `NonexistentLocalTime` if the zone cannot place noon on that date.
pub fn local_noon(date: NaiveDate, time_zone: Tz) -> Result<DateTime<Tz>> {
    let naive = date
        .and_hms_opt(12, 0, 0)
        .ok_or(Error::NonexistentLocalTime)?;
    resolve_local(naive, time_zone)
}

fn resolve_local(naive: NaiveDateTime, time_zone: Tz) -> Result<DateTime<Tz>> {
    if let Some(datetime) = time_zone.from_local_datetime(&naive).earliest() {
        return Ok(datetime);
    }

    // Inside a daylight saving gap: interpret with the pre-transition offset
    let shifted = naive
        .checked_add_signed(Duration::hours(1))
        .and_then(|later| time_zone.from_local_datetime(&later).earliest())
        .ok_or(Error::NonexistentLocalTime)?;
    log::debug!("local time {naive} does not exist in {time_zone}, using {shifted}");
    Ok(shifted)
}

/// Estimates ΔT (TT − UT1, seconds) for the month of `datetime`.
///
/// # Errors
/// Returns a wrapped solar error for years outside the estimator's range.
pub fn estimate_delta_t(datetime: &DateTime<Tz>) -> Result<f64> {
    Ok(DeltaT::estimate_from_date_like(datetime.date_naive())?)
}
