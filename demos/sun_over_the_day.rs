//! Sun elevation and color every half hour, with sunrise and sunset, for one place.

use chrono::NaiveDate;
use chrono_tz::Europe;
use solar_sky::solar::{sun_geometry, sunrise_time, sunset_time};
use solar_sky::{GeoLocation, LinearColor, ObservationMoment, Sky};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let paris = GeoLocation::new(48.85, 2.35, 30.0);
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).ok_or("invalid date")?;
    let tz = Europe::Paris;
    let sky = Sky::default();

    println!("Paris, {date}");
    println!("Sunrise: {:.2}h", sunrise_time(paris, date, tz)?);
    println!("Sunset:  {:.2}h", sunset_time(paris, date, tz)?);
    println!();
    println!("{:>6} {:>10} {:>10}  {:<20} {}", "hour", "elevation", "azimuth", "color", "");

    for half_hour in 0..48 {
        let hour = half_hour as f32 * 0.5;
        let moment = ObservationMoment::new(date, hour, tz)?;
        let geometry = sun_geometry(paris, &moment)?;
        let direction = geometry.direction();
        let color = sky.sun_ui_color(direction, sky.sun_color(direction));

        println!(
            "{hour:>6.1} {:>9.2}° {:>9.2}°  ({:.2}, {:.2}, {:.2})  {}",
            geometry.elevation(),
            geometry.azimuth(),
            color.r,
            color.g,
            color.b,
            swatch(color)
        );
    }

    Ok(())
}

/// A crude brightness bar so the day is readable at a glance.
fn swatch(color: LinearColor) -> String {
    let width = (color.channel_sum() / 3.0 * 20.0).round() as usize;
    "#".repeat(width)
}
