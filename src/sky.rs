//! Tone-mapped sun and sky colors.
//!
//! [`Sky`] wraps an [`Atmosphere`] with the display-side settings needed to
//! turn raw inscattered radiance into a color that can drive a light or a
//! UI element: an exposure scale, max-channel normalization, and a fixed
//! color shown once the sun has set.

use crate::atmosphere::{Atmosphere, ScatteringQuery};
use crate::error::check_exposure;
use crate::math::{Vec3, max_component};
use crate::{LinearColor, Result};

/// Exposure applied to raw scattering before normalization.
pub const DEFAULT_EXPOSURE: f32 = 40.0;

/// Observer position used to decide whether the sun is below the horizon.
///
/// Slightly above the ground so that a sun exactly on the horizon still
/// counts as up.
const HORIZON_OBSERVER: Vec3 = Vec3::new(10.0, 10.0, 10.0);

/// Atmosphere plus tone-mapping settings.
///
/// # Example
/// ```
/// use solar_sky::Sky;
/// use solar_sky::math::Vec3;
///
/// let sky = Sky::default();
/// let noon = sky.sun_color(Vec3::Y);
/// let dusk = sky.sun_color(Vec3::new(1.0, 0.05, 0.0).normalize());
/// assert!(noon.channel_sum() > dusk.channel_sum());
/// assert!(dusk.r > dusk.b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sky {
    atmosphere: Atmosphere,
    exposure: f32,
    night_color: LinearColor,
}

impl Sky {
    /// Earth's atmosphere with the default exposure and night color.
    pub const EARTH: Self = Self {
        atmosphere: Atmosphere::EARTH,
        exposure: DEFAULT_EXPOSURE,
        night_color: LinearColor::NIGHT_BLUE,
    };

    /// Replaces the exposure scale.
    ///
    /// # Errors
    /// Returns `InvalidExposure` if `exposure` is not finite or not positive.
    pub fn with_exposure(self, exposure: f32) -> Result<Self> {
        Ok(Self {
            exposure: check_exposure(exposure)?,
            ..self
        })
    }

    /// Replaces the color reported while the sun is below the horizon.
    #[must_use]
    pub const fn with_night_color(mut self, night_color: LinearColor) -> Self {
        self.night_color = night_color;
        self
    }

    /// Replaces the atmosphere model.
    #[must_use]
    pub const fn with_atmosphere(mut self, atmosphere: Atmosphere) -> Self {
        self.atmosphere = atmosphere;
        self
    }

    /// The atmosphere model.
    #[must_use]
    pub const fn atmosphere(&self) -> &Atmosphere {
        &self.atmosphere
    }

    /// The exposure scale.
    #[must_use]
    pub const fn exposure(&self) -> f32 {
        self.exposure
    }

    /// The color reported while the sun is below the horizon.
    #[must_use]
    pub const fn night_color(&self) -> LinearColor {
        self.night_color
    }

    /// Color of sunlight arriving from `direction` after passing through the
    /// atmosphere.
    ///
    /// `direction` must be a unit vector pointing towards the sun.
    #[must_use]
    pub fn sun_color(&self, direction: Vec3) -> LinearColor {
        self.scattering_color(&ScatteringQuery::towards_light(direction))
    }

    /// Color to show in a UI for the sun at `direction`.
    ///
    /// Returns [`Sky::night_color`] when a ray from just above the ground
    /// towards the sun hits the planet, and `sun_color` otherwise.
    #[must_use]
    pub fn sun_ui_color(&self, direction: Vec3, sun_color: LinearColor) -> LinearColor {
        if self.is_below_horizon(direction) {
            self.night_color
        } else {
            sun_color
        }
    }

    /// Tone-mapped color of an arbitrary view ray, for sky pixels.
    ///
    /// The planet is not an occluder here: a ray pointing below the horizon
    /// marches through the ground. Callers rendering sky pixels clip the ray
    /// at the surface themselves, e.g. with
    /// [`ScatteringQuery::with_length`] set to the near hit of
    /// [`Atmosphere::planet_intersection`].
    #[must_use]
    pub fn scattering_color(&self, query: &ScatteringQuery) -> LinearColor {
        self.tone_map(self.atmosphere.integrate_scattering(query))
    }

    /// Scales raw radiance by the exposure, normalizes by the brightest
    /// channel when it exceeds 1, and clamps to `[0, 1]`.
    ///
    /// Hue is preserved for overexposed input; black stays black.
    #[must_use]
    pub fn tone_map(&self, radiance: Vec3) -> LinearColor {
        let mut color = radiance * self.exposure;
        let max = max_component(color);
        if max > 1.0 {
            color /= max;
        }
        LinearColor::from_rgb_saturated(color)
    }

    fn is_below_horizon(&self, direction: Vec3) -> bool {
        self.atmosphere
            .planet_intersection(HORIZON_OBSERVER, direction)
            .y
            > 0.0
    }
}

impl Default for Sky {
    fn default() -> Self {
        Self::EARTH
    }
}

/// Sun color for `direction` in Earth's atmosphere; see [`Sky::sun_color`].
#[must_use]
pub fn sun_color(direction: Vec3) -> LinearColor {
    Sky::EARTH.sun_color(direction)
}

/// UI sun color for `direction` in Earth's atmosphere; see [`Sky::sun_ui_color`].
#[must_use]
pub fn sun_ui_color(direction: Vec3, sun_color: LinearColor) -> LinearColor {
    Sky::EARTH.sun_ui_color(direction, sun_color)
}
