//! Sun direction and colors for a list of alarms around the world.
//!
//! Pass a date as the first argument (`YYYY-MM-DD`) to pick the day; run with
//! `RUST_LOG=debug` to see polar fallbacks and DST adjustments.

use chrono::NaiveDate;
use solar_sky::exposure::{CameraExposure, light_heading, sun_light_intensity};
use solar_sky::solar::{sunrise_time, sunset_time};
use solar_sky::time::parse_time_zone;
use solar_sky::{GeoLocation, ObservationMoment, sun_color, sun_direction, sun_ui_color};

struct WakeupCall {
    name: &'static str,
    location: GeoLocation,
    time_zone: &'static str,
    time: AlarmTime,
}

enum AlarmTime {
    At(f32),
    AfterSunrise(f32),
    BeforeSunset(f32),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let date = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<NaiveDate>()?,
        None => NaiveDate::from_ymd_opt(2024, 6, 21).ok_or("invalid default date")?,
    };

    let mountain_view = GeoLocation::new(37.45, -122.18, 10.0);
    let paris = GeoLocation::new(48.85, 2.35, 30.0);
    let reykjavik = GeoLocation::new(64.15, -21.95, 60.0);

    let calls = [
        WakeupCall {
            name: "Mountain View",
            location: mountain_view,
            time_zone: "America/Los_Angeles",
            time: AlarmTime::At(10.5),
        },
        WakeupCall {
            name: "Paris",
            location: paris,
            time_zone: "Europe/Paris",
            time: AlarmTime::BeforeSunset(0.3),
        },
        WakeupCall {
            name: "Paris",
            location: paris,
            time_zone: "Europe/Paris",
            time: AlarmTime::AfterSunrise(1.5),
        },
        WakeupCall {
            name: "Reykjavík",
            location: reykjavik,
            time_zone: "UTC",
            time: AlarmTime::At(5.84),
        },
        WakeupCall {
            name: "Mountain View",
            location: mountain_view,
            time_zone: "America/Los_Angeles",
            time: AlarmTime::At(15.75),
        },
    ];

    let camera = CameraExposure::default();
    println!("Wakeup calls on {date}");
    println!();

    for call in &calls {
        let tz = parse_time_zone(call.time_zone)?;
        let hour = match call.time {
            AlarmTime::At(hour) => hour,
            AlarmTime::AfterSunrise(offset) => sunrise_time(call.location, date, tz)? + offset,
            AlarmTime::BeforeSunset(offset) => sunset_time(call.location, date, tz)? - offset,
        };

        let moment = ObservationMoment::new(date, hour, tz)?;
        let direction = sun_direction(call.location, &moment)?;
        let color = sun_color(direction);
        let ui_color = sun_ui_color(direction, color);

        println!("=== {} at {} ({}) ===", call.name, format_hour(hour), call.time_zone);
        println!(
            "  Sun direction: ({:+.3}, {:+.3}, {:+.3})",
            direction.x, direction.y, direction.z
        );
        println!(
            "  Sun color:     ({:.3}, {:.3}, {:.3})",
            color.r, color.g, color.b
        );
        println!(
            "  UI color:      ({:.3}, {:.3}, {:.3})",
            ui_color.r, ui_color.g, ui_color.b
        );
        let heading = light_heading(direction);
        println!(
            "  Light:         heading ({:+.3}, {:+.3}), intensity {:.4}",
            heading.x,
            heading.z,
            sun_light_intensity(direction, &camera)
        );
        println!();
    }

    Ok(())
}

fn format_hour(hour: f32) -> String {
    let minutes = (hour * 60.0).round() as i64;
    format!("{:02}:{:02}", minutes.div_euclid(60), minutes.rem_euclid(60))
}
