//! Single-scattering radiance along a view ray.

use super::{Atmosphere, phase_mie, phase_rayleigh};
use crate::math::{Vec3, pow, saturate};

/// Samples along a view ray.
pub const SCATTERING_SAMPLE_COUNT: u32 = 32;

/// Largest exponent of the sample distribution, reached at ground level.
const MAX_SAMPLE_DISTRIBUTION_EXPONENT: f32 = 8.0;

/// One view ray through the atmosphere, lit by a single directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatteringQuery {
    /// Ray origin in world space.
    pub origin: Vec3,
    /// Unit view direction.
    pub direction: Vec3,
    /// Distance to the first opaque occluder along the ray.
    pub length: f32,
    /// Unit direction towards the light.
    pub light_direction: Vec3,
    /// Linear light color.
    pub light_color: Vec3,
}

impl ScatteringQuery {
    /// A ray from the world origin with no occluder, lit by white light.
    #[must_use]
    pub const fn new(direction: Vec3, light_direction: Vec3) -> Self {
        Self {
            origin: Vec3::ZERO,
            direction,
            length: f32::INFINITY,
            light_direction,
            light_color: Vec3::ONE,
        }
    }

    /// A ray looking straight at the light, which yields the color of the light
    /// source as seen through the atmosphere.
    #[must_use]
    pub const fn towards_light(light_direction: Vec3) -> Self {
        Self::new(light_direction, light_direction)
    }

    /// Sets the ray origin.
    #[must_use]
    pub const fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the distance to the first occluder.
    #[must_use]
    pub const fn with_length(mut self, length: f32) -> Self {
        self.length = length;
        self
    }

    /// Sets the light color.
    #[must_use]
    pub const fn with_light_color(mut self, light_color: Vec3) -> Self {
        self.light_color = light_color;
        self
    }
}

impl Atmosphere {
    /// Integrates light scattered into a view ray, in linear units before
    /// exposure.
    ///
    /// The ray is clipped to the atmosphere shell and sampled
    /// [`SCATTERING_SAMPLE_COUNT`] times with spacing that grows with the
    /// distance from the origin; the closer the observer is to the ground,
    /// the more samples bunch up where the air is dense. At each sample the
    /// light reaching it is attenuated by the optical depth accumulated along
    /// both the view ray and the light ray, and weighted by the Rayleigh and
    /// Mie phase functions.
    ///
    /// Transmittance of the view ray itself is not applied to the result.
    /// Rays that never enter the atmosphere return black.
    #[must_use]
    pub fn integrate_scattering(&self, query: &ScatteringQuery) -> Vec3 {
        self.integrate_with_exponent(query, self.sample_distribution_exponent(query.origin))
    }

    /// Exponent of the sample spacing for a ray starting at `origin`.
    ///
    /// Sample `i` of `n` sits at `(i / n)^exponent` of the ray length. The
    /// exponent is 9 at ground level, where samples bunch up near the
    /// observer, and falls linearly to 1 (uniform spacing) at the top of the
    /// atmosphere and beyond.
    #[must_use]
    pub fn sample_distribution_exponent(&self, origin: Vec3) -> f32 {
        let ray_height = self.height_above_surface(origin);
        1.0 + saturate(1.0 - ray_height / self.atmosphere_height)
            * MAX_SAMPLE_DISTRIBUTION_EXPONENT
    }

    fn integrate_with_exponent(
        &self,
        query: &ScatteringQuery,
        sample_distribution_exponent: f32,
    ) -> Vec3 {
        let ray_dir = query.direction;
        let light_dir = query.light_direction;

        let intersection = self.atmosphere_intersection(query.origin, ray_dir);
        if intersection.y <= 0.0 {
            return Vec3::ZERO;
        }

        let mut start = query.origin;
        let mut length = query.length.min(intersection.y);
        if intersection.x > 0.0 {
            start += ray_dir * intersection.x;
            length -= intersection.x;
        }
        if length.is_nan() || length <= 0.0 {
            return Vec3::ZERO;
        }

        let cos_theta = ray_dir.dot(light_dir);
        let phase_r = phase_rayleigh(cos_theta);
        let phase_m = phase_mie(cos_theta, self.mie_asymmetry);

        let mut optical_depth = Vec3::ZERO;
        let mut rayleigh = Vec3::ZERO;
        let mut mie = Vec3::ZERO;

        let mut prev_ray_time = 0.0;

        for i in 0..SCATTERING_SAMPLE_COUNT {
            let ray_time = pow(
                i as f32 / SCATTERING_SAMPLE_COUNT as f32,
                sample_distribution_exponent,
            ) * length;
            let step_size = ray_time - prev_ray_time;

            let local_position = start + ray_dir * ray_time;
            let local_height = self.height_above_surface(local_position);
            let local_density = self.density_at(local_height) * step_size;

            optical_depth += local_density;

            let optical_depth_light = self.optical_depth(local_position, light_dir);
            let light_transmittance = self.absorb(optical_depth + optical_depth_light);

            rayleigh += light_transmittance * (phase_r * local_density.x);
            mie += light_transmittance * (phase_m * local_density.y);

            prev_ray_time = ray_time;
        }

        (rayleigh * self.rayleigh + mie * self.mie) * query.light_color
    }
}
