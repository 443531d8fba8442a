//! Layered planetary atmosphere: Rayleigh, Mie, and ozone.
//!
//! The observer stands at the world origin on the planet surface, so the
//! planet center sits at `(0, -planet_radius, 0)`. All distances are meters.
//!
//! Submodules integrate through this model:
//! - [`optical_depth`]: density integral from a point towards the light
//! - [`scattering`]: single-scattering inscattered radiance along a view ray
//!
//! The scattering formulation follows Felix Westin's MinimalAtmosphere.

pub mod optical_depth;
pub mod scattering;

pub use scattering::ScatteringQuery;

use crate::math::{FOUR_PI, PI, Vec2, Vec3, exp, exp_neg3, sqrt};

/// Physical description of a planet and its atmosphere shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Planet radius in meters.
    pub planet_radius: f32,
    /// Thickness of the atmosphere shell above the surface in meters.
    pub atmosphere_height: f32,
    /// Rayleigh scale height in meters.
    pub rayleigh_height: f32,
    /// Mie scale height in meters.
    pub mie_height: f32,
    /// Altitude of peak ozone density in meters.
    pub ozone_peak_height: f32,
    /// Half-width of the triangular ozone layer in meters.
    pub ozone_half_width: f32,
    /// Global density multiplier applied to extinction.
    pub density: f32,
    /// Rayleigh scattering coefficients per meter (RGB).
    pub rayleigh: Vec3,
    /// Mie scattering coefficients per meter (RGB).
    pub mie: Vec3,
    /// Ozone absorption coefficients per meter (RGB).
    pub ozone: Vec3,
    /// Mie extinction / scattering ratio (aerosols also absorb).
    pub mie_absorption: f32,
    /// Henyey-Greenstein asymmetry of aerosol scattering.
    pub mie_asymmetry: f32,
}

impl Atmosphere {
    /// Earth with a 100 km shell.
    pub const EARTH: Self = Self {
        planet_radius: 6_371_000.0,
        atmosphere_height: 100_000.0,
        rayleigh_height: 100_000.0 * 0.080,
        mie_height: 100_000.0 * 0.012,
        ozone_peak_height: 25_000.0,
        ozone_half_width: 15_000.0,
        density: 1.0,
        rayleigh: Vec3::new(5.802e-6, 13.558e-6, 33.100e-6),
        mie: Vec3::new(3.996e-6, 3.996e-6, 3.996e-6),
        ozone: Vec3::new(0.650e-6, 1.881e-6, 0.085e-6),
        mie_absorption: 1.1,
        mie_asymmetry: 0.85,
    };

    /// Center of the planet in world space.
    #[must_use]
    pub const fn planet_center(&self) -> Vec3 {
        Vec3::new(0.0, -self.planet_radius, 0.0)
    }

    /// Radius of the outer atmosphere boundary.
    #[must_use]
    pub fn atmosphere_radius(&self) -> f32 {
        self.planet_radius + self.atmosphere_height
    }

    /// Intersects a ray with the planet surface; see [`sphere_intersection`].
    #[must_use]
    pub fn planet_intersection(&self, ray_start: Vec3, ray_dir: Vec3) -> Vec2 {
        sphere_intersection(ray_start, ray_dir, self.planet_center(), self.planet_radius)
    }

    /// Intersects a ray with the outer atmosphere boundary; see [`sphere_intersection`].
    #[must_use]
    pub fn atmosphere_intersection(&self, ray_start: Vec3, ray_dir: Vec3) -> Vec2 {
        sphere_intersection(
            ray_start,
            ray_dir,
            self.planet_center(),
            self.atmosphere_radius(),
        )
    }

    /// Altitude of a world-space point above the planet surface.
    #[must_use]
    pub fn height_above_surface(&self, position: Vec3) -> f32 {
        position.distance(self.planet_center()) - self.planet_radius
    }

    /// Relative densities at altitude `height`: x Rayleigh, y Mie, z ozone.
    ///
    /// Rayleigh and Mie fall off exponentially and saturate at 1 below the
    /// surface; ozone is a triangular layer, zero outside its band.
    #[must_use]
    pub fn density_at(&self, height: f32) -> Vec3 {
        let rayleigh = exp(-(height / self.rayleigh_height).max(0.0));
        let mie = exp(-(height / self.mie_height).max(0.0));
        let ozone =
            (1.0 - (height - self.ozone_peak_height).abs() / self.ozone_half_width).max(0.0);
        Vec3::new(rayleigh, mie, ozone)
    }

    /// Transmittance for an accumulated optical depth (x Rayleigh, y Mie, z ozone).
    #[must_use]
    pub fn absorb(&self, optical_depth: Vec3) -> Vec3 {
        let extinction = optical_depth.x * self.rayleigh
            + optical_depth.y * self.mie * self.mie_absorption
            + optical_depth.z * self.ozone;
        exp_neg3(extinction * self.density)
    }
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self::EARTH
    }
}

/// Intersects a ray with a sphere.
///
/// Returns the ray parameters `(near, far)` of the two crossings, or the
/// sentinel `(-1, -1)` when the ray's line misses the sphere. A negative
/// `near` with a positive `far` means the ray starts inside the sphere; both
/// negative means the sphere is behind the ray.
///
/// # Example
/// ```
/// # use solar_sky::atmosphere::sphere_intersection;
/// # use solar_sky::math::Vec3;
/// let hit = sphere_intersection(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, Vec3::ZERO, 1.0);
/// assert!((hit.x - 4.0).abs() < 1e-5 && (hit.y - 6.0).abs() < 1e-5);
///
/// let miss = sphere_intersection(Vec3::new(0.0, 3.0, -5.0), Vec3::Z, Vec3::ZERO, 1.0);
/// assert_eq!(miss.x, -1.0);
/// ```
#[must_use]
pub fn sphere_intersection(
    ray_start: Vec3,
    ray_dir: Vec3,
    sphere_center: Vec3,
    sphere_radius: f32,
) -> Vec2 {
    let start = ray_start - sphere_center;
    let a = ray_dir.dot(ray_dir);
    let b = 2.0 * start.dot(ray_dir);
    let c = start.dot(start) - sphere_radius * sphere_radius;
    let d = b * b - 4.0 * a * c;

    if d < 0.0 {
        Vec2::splat(-1.0)
    } else {
        let e = sqrt(d);
        Vec2::new(-b - e, -b + e) / (2.0 * a)
    }
}

/// Rayleigh phase function for the cosine of the scattering angle.
#[must_use]
pub fn phase_rayleigh(cos_theta: f32) -> f32 {
    3.0 * (1.0 + cos_theta * cos_theta) / (16.0 * PI)
}

/// Mie phase function (Schlick's fit of Henyey-Greenstein).
///
/// The cubic term of the asymmetry is clamped at 0.9381, beyond which the
/// fit degenerates.
#[must_use]
pub fn phase_mie(cos_theta: f32, g: f32) -> f32 {
    let mg = g.min(0.9381);
    let k = 1.55 * g - 0.55 * mg * mg * mg;
    let k_cos_theta = k * cos_theta;
    (1.0 - k * k) / (FOUR_PI * (1.0 - k_cos_theta) * (1.0 - k_cos_theta))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH: Atmosphere = Atmosphere::EARTH;

    #[test]
    fn test_sphere_intersection_from_inside() {
        let hit = sphere_intersection(Vec3::ZERO, Vec3::X, Vec3::ZERO, 2.0);
        assert!((hit.x + 2.0).abs() < 1e-6);
        assert!((hit.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_intersection_behind() {
        let hit = sphere_intersection(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::ZERO, 1.0);
        assert!(hit.x < 0.0 && hit.y < 0.0);
    }

    #[test]
    fn test_sphere_intersection_miss_sentinel() {
        let hit = sphere_intersection(Vec3::new(0.0, 10.0, 0.0), Vec3::X, Vec3::ZERO, 1.0);
        assert_eq!(hit, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_sphere_intersection_unnormalized_direction() {
        let hit = sphere_intersection(Vec3::new(0.0, 0.0, -5.0), Vec3::Z * 2.0, Vec3::ZERO, 1.0);
        assert!((hit.x - 2.0).abs() < 1e-5);
        assert!((hit.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_atmosphere_exit_straight_up() {
        let hit = EARTH.atmosphere_intersection(Vec3::ZERO, Vec3::Y);
        assert!(hit.x < 0.0);
        assert!(
            (hit.y - EARTH.atmosphere_height).abs() < 100.0,
            "exit at {}",
            hit.y
        );
    }

    #[test]
    fn test_atmosphere_exit_longer_at_horizon() {
        let up = EARTH.atmosphere_intersection(Vec3::ZERO, Vec3::Y).y;
        let horizon = EARTH.atmosphere_intersection(Vec3::ZERO, Vec3::X).y;
        // sqrt((R + H)^2 - R^2) is about 1130 km
        assert!(horizon > 10.0 * up);
        assert!((horizon - 1_133_000.0).abs() < 10_000.0, "horizon {horizon}");
    }

    #[test]
    fn test_planet_intersection_above_and_below_horizon() {
        let observer = Vec3::splat(10.0);
        let down = Vec3::new(1.0, -0.2, 0.0).normalize();
        let up = Vec3::new(1.0, 0.4, 0.0).normalize();

        assert!(EARTH.planet_intersection(observer, down).y > 0.0);
        assert!(EARTH.planet_intersection(observer, up).y <= 0.0);
    }

    #[test]
    fn test_height_above_surface() {
        assert!(EARTH.height_above_surface(Vec3::ZERO).abs() < 1.0);
        assert!((EARTH.height_above_surface(Vec3::new(0.0, 1000.0, 0.0)) - 1000.0).abs() < 1.0);
    }

    #[test]
    fn test_density_profiles() {
        let ground = EARTH.density_at(0.0);
        assert_eq!(ground, Vec3::new(1.0, 1.0, 0.0));

        let scale = EARTH.density_at(EARTH.rayleigh_height);
        assert!((scale.x - exp(-1.0)).abs() < 1e-6);
        assert!(scale.y < scale.x);

        let ozone_peak = EARTH.density_at(25_000.0);
        assert!((ozone_peak.z - 1.0).abs() < 1e-6);
        assert!((EARTH.density_at(32_500.0).z - 0.5).abs() < 1e-6);
        assert_eq!(EARTH.density_at(45_000.0).z, 0.0);

        // Below the surface density saturates instead of growing
        assert_eq!(EARTH.density_at(-500.0), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_absorb() {
        assert_eq!(EARTH.absorb(Vec3::ZERO), Vec3::ONE);

        let t = EARTH.absorb(Vec3::new(8_000.0, 1_200.0, 15_000.0));
        assert!(t.x > t.y && t.y > t.z, "blue is extinguished most: {t:?}");
        assert!(t.max_element() <= 1.0 && t.min_element() > 0.0);

        let thicker = Atmosphere {
            density: 2.0,
            ..EARTH
        };
        let t2 = thicker.absorb(Vec3::new(8_000.0, 1_200.0, 15_000.0));
        assert!((t2.z - t.z * t.z).abs() < 1e-5);
    }

    fn integrate_phase(phase: impl Fn(f32) -> f32) -> f32 {
        let steps = 20_000;
        let dc = 2.0 / steps as f32;
        (0..steps)
            .map(|i| {
                let c = -1.0 + (i as f32 + 0.5) * dc;
                phase(c) * dc
            })
            .sum::<f32>()
            * 2.0
            * PI
    }

    #[test]
    fn test_phase_functions_are_normalized() {
        assert!((integrate_phase(phase_rayleigh) - 1.0).abs() < 1e-3);
        assert!((integrate_phase(|c| phase_mie(c, 0.5)) - 1.0).abs() < 1e-2);
        assert!((integrate_phase(|c| phase_mie(c, 0.85)) - 1.0).abs() < 2e-2);
    }

    #[test]
    fn test_phase_values() {
        assert!((phase_rayleigh(0.0) - 3.0 / (16.0 * PI)).abs() < 1e-7);
        assert!((phase_rayleigh(1.0) - phase_rayleigh(-1.0)).abs() < 1e-7);

        // Aerosols scatter strongly forward
        assert!(phase_mie(1.0, 0.85) > 100.0 * phase_mie(-1.0, 0.85));
        assert!((phase_mie(0.3, 0.0) - 1.0 / FOUR_PI).abs() < 1e-6);

        // Asymmetry above the clamp stays finite
        assert!(phase_mie(0.5, 0.99).is_finite());
    }
}
