//! Sun direction and sunrise/sunset clock times.
//!
//! Positions come from NREL's Solar Position Algorithm (Reda & Andreas, 2003)
//! as implemented by the `solar-positioning` crate. This module adds the
//! wall-clock plumbing around it and converts angles into the Y-up direction
//! convention used by the atmosphere and by renderers.
//!
//! Reference: Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//! Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>

use chrono::NaiveDate;
use chrono_tz::Tz;
use solar_positioning::{Horizon, spa};

use crate::math::Vec3;
use crate::time::{SUN_EVENT_DELTA_T, estimate_delta_t, fractional_hour, local_datetime, local_noon};
use crate::{GeoLocation, ObservationMoment, Result, SunEvent, SunGeometry};

/// Computes the topocentric zenith and azimuth of the sun.
///
/// ΔT is estimated from the moment's year and month. No refraction correction
/// is applied: the atmosphere module models the sky, not the apparent
/// lifting of the sun disc near the horizon.
///
/// # Errors
/// Returns an error for non-finite hours, unplaceable local times, or
/// coordinates rejected by SPA (latitude outside ±90°, longitude outside ±180°).
pub fn sun_geometry(location: GeoLocation, moment: &ObservationMoment) -> Result<SunGeometry> {
    let datetime = local_datetime(moment.date(), moment.hour(), moment.time_zone())?;
    let delta_t = estimate_delta_t(&datetime)?;

    let position = spa::solar_position(
        datetime,
        location.latitude,
        location.longitude,
        location.elevation,
        delta_t,
        None,
    )?;

    log::trace!(
        "sun on {} at {}h: zenith {:.3}°, azimuth {:.3}°",
        moment.date(),
        moment.hour(),
        position.zenith_angle(),
        position.azimuth()
    );

    Ok(SunGeometry::new(position.zenith_angle(), position.azimuth()))
}

/// Computes the unit vector pointing from the observer towards the sun.
///
/// The frame is Y-up with +Z north and +X east, so `y` is the
/// sine of the sun's elevation.
///
/// # Errors
/// See [`sun_geometry`].
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use solar_sky::{GeoLocation, ObservationMoment, solar};
///
/// let paris = GeoLocation::new(48.85, 2.35, 30.0);
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// let noon = ObservationMoment::with_zone_name(date, 12.0, "Europe/Paris").unwrap();
///
/// let direction = solar::sun_direction(paris, &noon).unwrap();
/// assert!(direction.y > 0.5);
/// assert!((direction.length() - 1.0).abs() < 1e-4);
/// ```
pub fn sun_direction(location: GeoLocation, moment: &ObservationMoment) -> Result<Vec3> {
    Ok(sun_geometry(location, moment)?.direction())
}

/// Computes the local clock time of sunrise or sunset on `date`.
///
/// Uses the standard horizon (−0.83337°, upper limb with mean refraction) and
/// a fixed ΔT of [`SUN_EVENT_DELTA_T`]. The result is `hour + minute / 60` in
/// `time_zone`.
///
/// When the sun does not cross the horizon that day (polar day or polar
/// night) the event's [`SunEvent::fallback_hour`] is returned instead of an
/// error. That value is a UI placeholder, not an astronomical time.
///
/// # Errors
/// Returns an error if SPA rejects the coordinates or the date cannot be
/// placed in `time_zone`.
pub fn sun_event_time(
    location: GeoLocation,
    date: NaiveDate,
    time_zone: Tz,
    event: SunEvent,
) -> Result<f32> {
    let reference = local_noon(date, time_zone)?;
    let result = spa::sunrise_sunset_for_horizon(
        reference,
        location.latitude,
        location.longitude,
        SUN_EVENT_DELTA_T,
        Horizon::SunriseSunset,
    )?;

    let time = match event {
        SunEvent::Sunrise => result.sunrise(),
        SunEvent::Sunset => result.sunset(),
    };

    match time {
        Some(time) => Ok(fractional_hour(time)),
        None => {
            let fallback = event.fallback_hour();
            log::debug!(
                "no {event:?} at ({}, {}) on {date} (polar {}), using {fallback}h",
                location.latitude,
                location.longitude,
                if result.is_polar_day() { "day" } else { "night" },
            );
            Ok(fallback)
        }
    }
}

/// Local clock time of sunrise on `date`; see [`sun_event_time`].
///
/// # Errors
/// See [`sun_event_time`].
pub fn sunrise_time(location: GeoLocation, date: NaiveDate, time_zone: Tz) -> Result<f32> {
    sun_event_time(location, date, time_zone, SunEvent::Sunrise)
}

/// Local clock time of sunset on `date`; see [`sun_event_time`].
///
/// # Errors
/// See [`sun_event_time`].
pub fn sunset_time(location: GeoLocation, date: NaiveDate, time_zone: Tz) -> Result<f32> {
    sun_event_time(location, date, time_zone, SunEvent::Sunset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono_tz::{America, Arctic, Europe};

    const MOUNTAIN_VIEW: GeoLocation = GeoLocation::new(37.45, -122.18, 10.0);
    const PARIS: GeoLocation = GeoLocation::new(48.85, 2.35, 30.0);
    const LONGYEARBYEN: GeoLocation = GeoLocation::new(78.22, 15.65, 10.0);

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn paris_at(hour: f32) -> ObservationMoment {
        ObservationMoment::new(date(2024, 6, 21), hour, Europe::Paris).unwrap()
    }

    #[test]
    fn test_sun_direction_is_unit_length() {
        for hour in [0.0, 3.5, 6.0, 9.25, 12.0, 15.75, 18.0, 21.5, 23.99] {
            let dir = sun_direction(PARIS, &paris_at(hour)).unwrap();
            assert!(
                (dir.length() - 1.0).abs() < 1e-4,
                "hour {hour}: |dir| = {}",
                dir.length()
            );
        }
    }

    #[test]
    fn test_sun_is_highest_around_noon() {
        let morning = sun_direction(PARIS, &paris_at(7.0)).unwrap();
        let noon = sun_direction(PARIS, &paris_at(12.0)).unwrap();
        let evening = sun_direction(PARIS, &paris_at(19.0)).unwrap();

        assert!(noon.y > 0.0);
        assert!(noon.y > morning.y);
        assert!(noon.y > evening.y);
    }

    #[test]
    fn test_sun_rises_in_the_east() {
        let morning = sun_direction(PARIS, &paris_at(8.0)).unwrap();
        let evening = sun_direction(PARIS, &paris_at(20.0)).unwrap();
        assert!(morning.x > 0.0, "morning sun should be east: {morning:?}");
        assert!(evening.x < 0.0, "evening sun should be west: {evening:?}");
    }

    #[test]
    fn test_sun_geometry_matches_direction() {
        let geometry = sun_geometry(PARIS, &paris_at(14.0)).unwrap();
        let direction = geometry.direction();
        let elevation = geometry.elevation().to_radians() as f32;
        assert!((direction.y - elevation.sin()).abs() < 1e-4);
        assert!(geometry.azimuth() > 90.0 && geometry.azimuth() < 270.0);
    }

    #[test]
    fn test_sun_below_horizon_at_midnight() {
        let midnight = sun_direction(PARIS, &paris_at(0.5)).unwrap();
        assert!(midnight.y < 0.0);
    }

    #[test]
    fn test_invalid_latitude_is_reported() {
        let nowhere = GeoLocation::new(123.0, 0.0, 0.0);
        assert!(matches!(
            sun_direction(nowhere, &paris_at(12.0)),
            Err(Error::Solar(_))
        ));
        assert!(sunrise_time(nowhere, date(2024, 6, 21), chrono_tz::UTC).is_err());
    }

    #[test]
    fn test_sunrise_and_sunset_mid_latitude() {
        for (month, day) in [(1, 15), (3, 20), (6, 21), (9, 22), (12, 21)] {
            let d = date(2024, month, day);
            let sunrise = sunrise_time(MOUNTAIN_VIEW, d, America::Los_Angeles).unwrap();
            let sunset = sunset_time(MOUNTAIN_VIEW, d, America::Los_Angeles).unwrap();

            assert!(sunrise > 4.0 && sunrise < 9.0, "{d}: sunrise {sunrise}");
            assert!(sunset > 16.0 && sunset < 21.0, "{d}: sunset {sunset}");
        }
    }

    #[test]
    fn test_sun_event_polar_fallback() {
        for d in [date(2024, 6, 21), date(2024, 12, 21)] {
            let sunrise = sunrise_time(LONGYEARBYEN, d, Arctic::Longyearbyen).unwrap();
            let sunset = sunset_time(LONGYEARBYEN, d, Arctic::Longyearbyen).unwrap();
            assert_eq!(sunrise, 6.5, "{d}");
            assert_eq!(sunset, 18.5, "{d}");
        }
    }

    #[test]
    fn test_sun_event_time_agrees_with_direction() {
        let d = date(2024, 6, 21);
        let sunrise = sunrise_time(PARIS, d, Europe::Paris).unwrap();

        let before = ObservationMoment::new(d, sunrise - 0.5, Europe::Paris).unwrap();
        let after = ObservationMoment::new(d, sunrise + 0.5, Europe::Paris).unwrap();
        assert!(sun_direction(PARIS, &before).unwrap().y < 0.0);
        assert!(sun_direction(PARIS, &after).unwrap().y > 0.0);
    }
}
