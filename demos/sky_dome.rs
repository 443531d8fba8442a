//! Renders the sky hemisphere as a small ASCII PPM image on stdout.
//!
//! Usage: `cargo run --example sky_dome -- [sun elevation in degrees] > sky.ppm`

use solar_sky::math::{Vec3, radians};
use solar_sky::{ScatteringQuery, Sky};

const SIZE: usize = 64;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let sun_elevation: f32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 20.0,
    };
    let e = radians(sun_elevation);
    let sun = Vec3::new(0.0, e.sin(), e.cos());
    let sky = Sky::default();

    println!("P3");
    println!("{SIZE} {SIZE}");
    println!("255");

    // Angular fisheye: center is the zenith, the rim is the horizon
    for row in 0..SIZE {
        let mut line = Vec::with_capacity(SIZE);
        for col in 0..SIZE {
            let u = (col as f32 + 0.5) / SIZE as f32 * 2.0 - 1.0;
            let v = (row as f32 + 0.5) / SIZE as f32 * 2.0 - 1.0;
            let r = (u * u + v * v).sqrt();

            let rgb = if r > 1.0 {
                [0, 0, 0]
            } else {
                let elevation = (1.0 - r) * std::f32::consts::FRAC_PI_2;
                let azimuth = u.atan2(-v);
                let view = Vec3::new(
                    elevation.cos() * azimuth.sin(),
                    elevation.sin(),
                    elevation.cos() * azimuth.cos(),
                );
                let color = sky.scattering_color(&ScatteringQuery::new(view, sun));
                [to_srgb8(color.r), to_srgb8(color.g), to_srgb8(color.b)]
            };
            line.push(format!("{} {} {}", rgb[0], rgb[1], rgb[2]));
        }
        println!("{}", line.join(" "));
    }

    Ok(())
}

fn to_srgb8(linear: f32) -> u8 {
    let encoded = if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (encoded.clamp(0.0, 1.0) * 255.0).round() as u8
}
