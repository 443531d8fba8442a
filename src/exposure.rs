//! Photographic exposure and the parameters of a directional sun light.
//!
//! A renderer lighting a scene with the sun needs more than its color: the
//! illuminance has to be brought into display range with a camera exposure,
//! the light usually points along the horizontal heading of the sun, and the
//! visible disc is drawn by the sky shader from a few precomputed terms.

use crate::error::check_camera_setting;
use crate::math::{Vec3, Vec4, cos, pow, radians, saturate, sin};
use crate::Result;

/// Illuminance of direct sunlight with the sun at the zenith, in lux.
pub const SUN_LIGHT_INTENSITY: f32 = 100_000.0;

/// Lowest sun height used when attenuating intensity towards the horizon.
const MIN_SUN_HEIGHT: f32 = 1e-3;

/// Physical camera settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraExposure {
    aperture: f32,
    shutter_speed: f32,
    sensitivity: f32,
}

impl CameraExposure {
    /// f/16, 1/125 s, ISO 100: the "sunny 16" rule.
    pub const SUNNY_16: Self = Self {
        aperture: 16.0,
        shutter_speed: 1.0 / 125.0,
        sensitivity: 100.0,
    };

    /// Creates camera settings from an f-number, a shutter time in seconds,
    /// and an ISO sensitivity.
    ///
    /// # Errors
    /// Returns `InvalidCamera` if any setting is not finite or not positive.
    pub fn new(aperture: f32, shutter_speed: f32, sensitivity: f32) -> Result<Self> {
        Ok(Self {
            aperture: check_camera_setting("aperture", aperture)?,
            shutter_speed: check_camera_setting("shutter speed", shutter_speed)?,
            sensitivity: check_camera_setting("sensitivity", sensitivity)?,
        })
    }

    /// Aperture as an f-number.
    #[must_use]
    pub const fn aperture(&self) -> f32 {
        self.aperture
    }

    /// Shutter time in seconds.
    #[must_use]
    pub const fn shutter_speed(&self) -> f32 {
        self.shutter_speed
    }

    /// ISO sensitivity.
    #[must_use]
    pub const fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Scale from photometric units to display range; see [`exposure`].
    #[must_use]
    pub fn exposure(&self) -> f32 {
        exposure(self.aperture, self.shutter_speed, self.sensitivity)
    }
}

impl Default for CameraExposure {
    fn default() -> Self {
        Self::SUNNY_16
    }
}

/// Scale that maps luminance to normalized pixel values for a camera.
///
/// Computed as `1 / (1.2 · 2^EV100)` with the exposure value normalized to
/// ISO 100, `EV100 = log2(N² / t · 100 / S)`.
///
/// # Example
/// ```
/// let e = solar_sky::exposure::exposure(16.0, 1.0 / 125.0, 100.0);
/// assert!((e - 2.604e-5).abs() < 1e-8);
/// ```
#[must_use]
pub fn exposure(aperture: f32, shutter_speed: f32, sensitivity: f32) -> f32 {
    let e = (aperture * aperture) / shutter_speed * 100.0 / sensitivity;
    1.0 / (1.2 * e)
}

/// Exposed intensity of a sun light pointing from `direction`.
///
/// Full [`SUN_LIGHT_INTENSITY`] at the zenith, fading as the sun nears the
/// horizon; a sun below the horizon keeps a small residual intensity.
#[must_use]
pub fn sun_light_intensity(direction: Vec3, camera: &CameraExposure) -> f32 {
    let height = direction.y.max(MIN_SUN_HEIGHT);
    SUN_LIGHT_INTENSITY * saturate(pow(height, 0.6)) * camera.exposure()
}

/// Horizontal heading of the sun, as a unit vector with `y == 0`.
///
/// Falls back to −Z when the sun stands at the zenith or nadir.
#[must_use]
pub fn light_heading(direction: Vec3) -> Vec3 {
    Vec3::new(direction.x, 0.0, direction.z)
        .try_normalize()
        .unwrap_or(Vec3::NEG_Z)
}

/// Shape of the sun disc and its halo as drawn by a sky shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunDisc {
    /// Angular radius of the disc in degrees.
    pub angular_radius: f32,
    /// Halo radius as a multiple of the disc radius.
    pub halo_size: f32,
    /// Exponent of the halo falloff.
    pub halo_falloff: f32,
}

impl SunDisc {
    /// A stylized sun, larger than the real 0.27°.
    pub const DEFAULT: Self = Self::new(2.2, 2.0, 1.0);

    /// Creates a sun disc.
    #[must_use]
    pub const fn new(angular_radius: f32, halo_size: f32, halo_falloff: f32) -> Self {
        Self {
            angular_radius,
            halo_size,
            halo_falloff,
        }
    }

    /// Packs the disc for a shader as
    /// `(cos r, sin r, 1 / (cos(r · halo) − cos r), falloff)`.
    #[must_use]
    pub fn parameters(&self) -> Vec4 {
        let r = radians(self.angular_radius);
        let cos_r = cos(r);
        let halo = cos(r * self.halo_size);
        Vec4::new(cos_r, sin(r), 1.0 / (halo - cos_r), self.halo_falloff)
    }
}

impl Default for SunDisc {
    fn default() -> Self {
        Self::DEFAULT
    }
}
