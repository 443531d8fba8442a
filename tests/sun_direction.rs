//! Sun direction properties across locations, seasons, and clock edge cases.

use chrono::NaiveDate;
use chrono_tz::{America, Atlantic, Australia, Europe};
use solar_sky::{GeoLocation, ObservationMoment, sun_direction};

const MOUNTAIN_VIEW: GeoLocation = GeoLocation::new(37.45, -122.18, 10.0);
const PARIS: GeoLocation = GeoLocation::new(48.85, 2.35, 30.0);
const REYKJAVIK: GeoLocation = GeoLocation::new(64.15, -21.95, 60.0);
const SYDNEY: GeoLocation = GeoLocation::new(-33.87, 151.21, 40.0);

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn direction_is_unit_length_everywhere() {
    let cases = [
        (MOUNTAIN_VIEW, America::Los_Angeles),
        (PARIS, Europe::Paris),
        (REYKJAVIK, Atlantic::Reykjavik),
        (SYDNEY, Australia::Sydney),
    ];

    for (location, tz) in cases {
        for month in [1, 4, 7, 10] {
            for quarter in 0..96 {
                let hour = quarter as f32 * 0.25;
                let moment = ObservationMoment::new(date(2024, month, 10), hour, tz).unwrap();
                let dir = sun_direction(location, &moment).unwrap();
                assert!(
                    (dir.length() - 1.0).abs() < 1e-4,
                    "{location:?} month {month} hour {hour}: {dir:?}"
                );
            }
        }
    }
}

#[test]
fn noon_sun_faces_the_equator() {
    let paris = ObservationMoment::new(date(2024, 6, 21), 13.75, Europe::Paris).unwrap();
    let sydney = ObservationMoment::new(date(2024, 12, 21), 13.0, Australia::Sydney).unwrap();

    // +Z is north
    assert!(sun_direction(PARIS, &paris).unwrap().z < 0.0);
    assert!(sun_direction(SYDNEY, &sydney).unwrap().z > 0.0);
}

#[test]
fn summer_sun_climbs_higher_than_winter_sun() {
    let summer = ObservationMoment::new(date(2024, 6, 21), 13.0, America::Los_Angeles).unwrap();
    let winter = ObservationMoment::new(date(2024, 12, 21), 12.0, America::Los_Angeles).unwrap();

    let summer_y = sun_direction(MOUNTAIN_VIEW, &summer).unwrap().y;
    let winter_y = sun_direction(MOUNTAIN_VIEW, &winter).unwrap().y;
    assert!(summer_y > winter_y + 0.3, "summer {summer_y}, winter {winter_y}");
}

#[test]
fn reykjavik_winter_sun_stays_low() {
    for hour in [10.0, 12.0, 13.5, 15.0] {
        let moment = ObservationMoment::new(date(2024, 12, 21), hour, Atlantic::Reykjavik).unwrap();
        let y = sun_direction(REYKJAVIK, &moment).unwrap().y;
        assert!(y < 0.1, "hour {hour}: y = {y}");
    }
}

#[test]
fn hour_past_midnight_rolls_into_next_day() {
    let late = ObservationMoment::new(date(2024, 5, 14), 24.5, Europe::Paris).unwrap();
    let early = ObservationMoment::new(date(2024, 5, 15), 0.5, Europe::Paris).unwrap();

    let a = sun_direction(PARIS, &late).unwrap();
    let b = sun_direction(PARIS, &early).unwrap();
    assert!((a - b).length() < 1e-6, "{a:?} vs {b:?}");
}

#[test]
fn minutes_round_to_the_nearest_minute() {
    let exact = ObservationMoment::new(date(2024, 5, 14), 9.5, Europe::Paris).unwrap();
    let close = ObservationMoment::new(date(2024, 5, 14), 9.5 + 0.2 / 60.0, Europe::Paris).unwrap();

    let a = sun_direction(PARIS, &exact).unwrap();
    let b = sun_direction(PARIS, &close).unwrap();
    assert!((a - b).length() < 1e-6);
}

#[test]
fn clock_time_in_dst_gap_moves_forward() {
    // Clocks in Paris jump from 02:00 to 03:00 on 2024-03-31
    let gap = ObservationMoment::new(date(2024, 3, 31), 2.5, Europe::Paris).unwrap();
    let after = ObservationMoment::new(date(2024, 3, 31), 3.5, Europe::Paris).unwrap();

    let a = sun_direction(PARIS, &gap).unwrap();
    let b = sun_direction(PARIS, &after).unwrap();
    assert!((a - b).length() < 1e-6, "{a:?} vs {b:?}");
}

#[test]
fn moment_can_be_built_from_zone_name() {
    let by_name =
        ObservationMoment::with_zone_name(date(2024, 6, 21), 10.5, "America/Los_Angeles").unwrap();
    let by_value = ObservationMoment::new(date(2024, 6, 21), 10.5, America::Los_Angeles).unwrap();
    assert_eq!(by_name, by_value);

    assert!(ObservationMoment::with_zone_name(date(2024, 6, 21), 10.5, "Mars/Olympus_Mons").is_err());
}
