//! Scalar and vector helpers shared by the solar and atmosphere modules.
//!
//! Vector types come from `glam`; this module adds the shader-style scalar
//! utilities the integrators are written in, and routes transcendental
//! functions through `std` or `libm` depending on the enabled features.

#![allow(clippy::many_single_char_names)]

pub use glam::{Vec2, Vec3, Vec4};

/// π as `f32`.
pub const PI: f32 = core::f32::consts::PI;
/// π / 2
pub const HALF_PI: f32 = PI * 0.5;
/// 4π
pub const FOUR_PI: f32 = PI * 4.0;
/// 1 / π
pub const INV_PI: f32 = 1.0 / PI;

/// Clamps `x` to `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics when `min > max`; it returns `min`
/// in that case, and NaN passes through unchanged.
#[inline]
#[must_use]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Clamps `x` to `[0, 1]`.
#[inline]
#[must_use]
pub fn saturate(x: f32) -> f32 {
    clamp(x, 0.0, 1.0)
}

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn mix(a: f32, b: f32, x: f32) -> f32 {
    a * (1.0 - x) + b * x
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn degrees(radians: f32) -> f32 {
    radians * (180.0 * INV_PI)
}

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Fractional part, always in `[0, 1)` for finite input (`x - floor(x)`).
#[inline]
#[must_use]
pub fn fract(x: f32) -> f32 {
    x - floor(x)
}

/// Largest of the three components.
#[inline]
#[must_use]
pub fn max_component(v: Vec3) -> f32 {
    v.x.max(v.y).max(v.z)
}

/// Component-wise [`saturate`].
#[inline]
#[must_use]
pub fn saturate3(v: Vec3) -> Vec3 {
    Vec3::new(saturate(v.x), saturate(v.y), saturate(v.z))
}

/// Component-wise `exp(-v)`.
#[inline]
#[must_use]
pub fn exp_neg3(v: Vec3) -> Vec3 {
    Vec3::new(exp(-v.x), exp(-v.y), exp(-v.z))
}

/// Computes e^x using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn exp(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.exp();

    #[cfg(not(feature = "std"))]
    return libm::expf(x);
}

/// Computes x^y using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn pow(x: f32, y: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.powf(y);

    #[cfg(not(feature = "std"))]
    return libm::powf(x, y);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn sqrt(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrtf(x);
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn sin(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sinf(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn cos(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cosf(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn floor(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floorf(x);
}

/// Computes round(x), half away from zero.
#[inline]
#[must_use]
pub fn round(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::roundf(x);
}
