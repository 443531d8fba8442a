//! # Solar Sky
//!
//! Sun direction, sun color, and sky tint for a place on Earth at a local
//! wall-clock time.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The crate chains three stages:
//! - **Solar position**: NREL's SPA (via `solar-positioning`) turns location, date,
//!   fractional hour, and IANA time zone into a unit vector towards the sun, and
//!   finds local sunrise/sunset clock times
//! - **Atmosphere**: a single-scattering integrator with Rayleigh, Mie, and ozone
//!   layers computes the light reaching the observer along any view ray
//! - **Sky**: exposure and max-channel normalization turn that radiance into a
//!   displayable linear sRGB color, with a night color once the sun has set
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use solar_sky::{GeoLocation, ObservationMoment, solar, sun_color, sun_ui_color};
//!
//! let mountain_view = GeoLocation::new(37.45, -122.18, 10.0);
//! let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
//! let moment = ObservationMoment::with_zone_name(date, 10.5, "America/Los_Angeles").unwrap();
//!
//! let direction = solar::sun_direction(mountain_view, &moment).unwrap();
//! let color = sun_color(direction);
//! let ui_color = sun_ui_color(direction, color);
//!
//! assert!(direction.y > 0.0);
//! assert_eq!(ui_color, color);
//! println!("sun at {direction:?}, color {:?}", color.to_array());
//! ```
//!
//! ### Sunrise and Sunset
//!
//! ```rust
//! use chrono::NaiveDate;
//! use solar_sky::{GeoLocation, solar};
//!
//! let paris = GeoLocation::new(48.85, 2.35, 30.0);
//! let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//! let tz = solar_sky::time::parse_time_zone("Europe/Paris").unwrap();
//!
//! let sunrise = solar::sunrise_time(paris, date, tz).unwrap();
//! let sunset = solar::sunset_time(paris, date, tz).unwrap();
//! assert!(sunrise < 12.0 && sunset > 12.0);
//! ```
//!
//! ## Coordinate System
//!
//! - Y-up: +Y is the local zenith, +Z north, +X east
//! - The observer stands at the world origin on the planet surface
//! - Distances in meters, angles in degrees unless a function says otherwise
//!
//! ## References
//!
//! - Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//!   Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>
//! - Westin, F. (2021). MinimalAtmosphere. <https://github.com/Fewes/MinimalAtmosphere>
//!   (MIT), the single-scattering formulation used by [`atmosphere`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::atmosphere::{Atmosphere, ScatteringQuery};
pub use crate::error::{Error, Result};
pub use crate::exposure::{CameraExposure, SunDisc};
pub use crate::sky::{Sky, sun_color, sun_ui_color};
pub use crate::solar::{sun_direction, sun_event_time};
pub use crate::types::{GeoLocation, LinearColor, ObservationMoment, SunEvent, SunGeometry};

// Sun and sky
pub mod atmosphere;
pub mod exposure;
pub mod sky;
pub mod solar;

// Core modules
pub mod error;
pub mod types;

// Public helpers
pub mod math;
pub mod time;
