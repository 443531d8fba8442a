//! Value types passed between the solar solver, the atmosphere, and callers.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::math::{HALF_PI, Vec3, Vec4, cos, radians, saturate3, sin};
use crate::Result;

/// Observer location on the Earth's surface.
///
/// No range validation happens here; out-of-range coordinates are reported by
/// the solar position algorithm when they are used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Elevation above sea level in meters.
    pub elevation: f64,
}

impl GeoLocation {
    /// Creates a location from latitude, longitude (degrees), and elevation (meters).
    ///
    /// # Example
    /// ```
    /// # use solar_sky::GeoLocation;
    /// let paris = GeoLocation::new(48.85, 2.35, 30.0);
    /// assert_eq!(paris.latitude, 48.85);
    /// ```
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }
}

/// A wall-clock moment at an observer: calendar date, fractional local hour,
/// and the time zone the clock is read in.
///
/// The calendar date is explicit so that results are reproducible; callers
/// that want "today" pass today's date themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationMoment {
    date: NaiveDate,
    hour: f32,
    time_zone: Tz,
}

impl ObservationMoment {
    /// Creates a moment from a date, a fractional hour (e.g. `10.5` for 10:30),
    /// and a time zone.
    ///
    /// # Errors
    /// Returns `InvalidHour` if `hour` is not finite.
    ///
    /// # Example
    /// ```
    /// # use solar_sky::ObservationMoment;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    /// let moment = ObservationMoment::new(date, 10.5, chrono_tz::Europe::Paris).unwrap();
    /// assert_eq!(moment.hour(), 10.5);
    /// ```
    pub fn new(date: NaiveDate, hour: f32, time_zone: Tz) -> Result<Self> {
        let hour = crate::error::check_hour(hour)?;
        Ok(Self {
            date,
            hour,
            time_zone,
        })
    }

    /// Creates a moment, resolving the time zone from an IANA identifier
    /// such as `"America/Los_Angeles"`.
    ///
    /// # Errors
    /// Returns `UnknownTimeZone` for identifiers missing from the zone
    /// database, or `InvalidHour` if `hour` is not finite.
    pub fn with_zone_name(date: NaiveDate, hour: f32, time_zone: &str) -> Result<Self> {
        Self::new(date, hour, crate::time::parse_time_zone(time_zone)?)
    }

    /// Gets the local calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets the fractional local hour of day.
    #[must_use]
    pub const fn hour(&self) -> f32 {
        self.hour
    }

    /// Gets the time zone.
    #[must_use]
    pub const fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Returns a copy of this moment at a different hour on the same date.
    ///
    /// # Errors
    /// Returns `InvalidHour` if `hour` is not finite.
    pub fn at_hour(&self, hour: f32) -> Result<Self> {
        Self::new(self.date, hour, self.time_zone)
    }
}

/// Solar event queried by [`crate::solar::sun_event_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunEvent {
    /// Upper limb of the sun crosses the horizon in the morning.
    Sunrise,
    /// Upper limb of the sun crosses the horizon in the evening.
    Sunset,
}

impl SunEvent {
    /// Clock time reported when the event does not happen on the requested
    /// day (polar day or polar night).
    ///
    /// This is a placeholder for UI purposes, not an astronomical value.
    #[must_use]
    pub const fn fallback_hour(self) -> f32 {
        match self {
            Self::Sunrise => 6.5,
            Self::Sunset => 18.5,
        }
    }
}

/// Sun position as reported by the solar algorithm.
///
/// - Zenith angle: 0° = overhead, 90° = horizon, 180° = nadir
/// - Azimuth: 0° = north, increasing clockwise (east = 90°)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunGeometry {
    zenith: f64,
    azimuth: f64,
}

impl SunGeometry {
    /// Creates a geometry from zenith and azimuth angles in degrees.
    #[must_use]
    pub const fn new(zenith: f64, azimuth: f64) -> Self {
        Self { zenith, azimuth }
    }

    /// Gets the zenith angle in degrees.
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        self.zenith
    }

    /// Gets the azimuth angle in degrees.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the elevation angle above the horizon in degrees.
    #[must_use]
    pub fn elevation(&self) -> f64 {
        90.0 - self.zenith
    }

    /// Converts to a unit direction pointing at the sun.
    ///
    /// The frame is Y-up, with +Z pointing north and +X east.
    ///
    /// # Example
    /// ```
    /// # use solar_sky::SunGeometry;
    /// let overhead = SunGeometry::new(0.0, 123.0).direction();
    /// assert!((overhead.y - 1.0).abs() < 1e-6);
    ///
    /// let east = SunGeometry::new(90.0, 90.0).direction();
    /// assert!((east.x - 1.0).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        let elevation = HALF_PI - radians(self.zenith as f32);
        let azimuth = radians(self.azimuth as f32);

        Vec3::new(
            cos(elevation) * sin(azimuth),
            sin(elevation),
            cos(elevation) * cos(azimuth),
        )
    }
}

/// An opaque color in the linear sRGB color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearColor {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha, 1 for every color this crate produces.
    pub a: f32,
}

impl LinearColor {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Deep night blue (sRGB `#0F1533`), shown in place of the sun color
    /// when the sun is below the horizon.
    pub const NIGHT_BLUE: Self = Self::new(0.004_76, 0.007_50, 0.033_1);

    /// Creates an opaque color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an opaque color from a linear RGB vector, clamping each
    /// channel to `[0, 1]`.
    #[must_use]
    pub fn from_rgb_saturated(rgb: Vec3) -> Self {
        let rgb = saturate3(rgb);
        Self::new(rgb.x, rgb.y, rgb.z)
    }

    /// RGB channels as a vector.
    #[must_use]
    pub const fn rgb(&self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// RGBA channels as a vector.
    #[must_use]
    pub const fn rgba(&self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    /// RGBA channels as an array, ready for a uniform buffer.
    #[must_use]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Sum of the RGB channels, a cheap brightness measure.
    #[must_use]
    pub fn channel_sum(&self) -> f32 {
        self.r + self.g + self.b
    }
}

impl Default for LinearColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<LinearColor> for [f32; 4] {
    fn from(color: LinearColor) -> Self {
        color.to_array()
    }
}
