//! Optical depth from a point to the edge of the atmosphere.

use super::Atmosphere;
use crate::math::Vec3;

/// Samples along a light ray.
pub const OPTICAL_DEPTH_SAMPLE_COUNT: u32 = 8;

impl Atmosphere {
    /// Integrates relative density from `ray_start` along `ray_dir` to the
    /// outer atmosphere boundary.
    ///
    /// Returns one optical depth (in meters of sea-level-equivalent medium)
    /// per component: x Rayleigh, y Mie, z ozone. The path is split into
    /// [`OPTICAL_DEPTH_SAMPLE_COUNT`] equal steps sampled at their midpoints.
    /// A ray that never reaches the boundary contributes nothing.
    ///
    /// The planet is not treated as an occluder: rays are assumed to point
    /// towards a light above the local horizon.
    #[must_use]
    pub fn optical_depth(&self, ray_start: Vec3, ray_dir: Vec3) -> Vec3 {
        let intersection = self.atmosphere_intersection(ray_start, ray_dir);
        let ray_length = intersection.y.max(0.0);

        let step_size = ray_length / OPTICAL_DEPTH_SAMPLE_COUNT as f32;

        let mut optical_depth = Vec3::ZERO;

        for i in 0..OPTICAL_DEPTH_SAMPLE_COUNT {
            let local_position = ray_start + ray_dir * ((i as f32 + 0.5) * step_size);
            let local_height = self.height_above_surface(local_position);
            optical_depth += self.density_at(local_height) * step_size;
        }

        optical_depth
    }
}
