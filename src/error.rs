//! Error types for sun and sky computations.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while computing sun positions and sky colors.
///
/// The numeric core (scattering, tone mapping, intersections) is total and
/// never fails; errors only arise at the boundary where calendar time,
/// time zones, and observer coordinates are turned into an instant.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The solar position algorithm rejected its input (e.g., latitude outside ±90°).
    Solar(solar_positioning::Error),
    /// The time zone identifier is not in the IANA database.
    UnknownTimeZone,
    /// Fractional hour of day is not a finite number.
    InvalidHour {
        /// The invalid hour value provided.
        value: f32,
    },
    /// The local wall-clock time cannot be mapped to an instant in its time zone.
    NonexistentLocalTime,
    /// Exposure scale must be finite and positive.
    InvalidExposure {
        /// The invalid exposure value provided.
        value: f32,
    },
    /// Camera settings must be finite and positive.
    InvalidCamera {
        /// Name of the offending setting.
        setting: &'static str,
        /// The invalid value provided.
        value: f32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solar(err) => write!(f, "solar position: {err}"),
            Self::UnknownTimeZone => write!(f, "unknown time zone identifier"),
            Self::InvalidHour { value } => {
                write!(f, "invalid hour of day {value} (must be finite)")
            }
            Self::NonexistentLocalTime => {
                write!(f, "local time does not exist in the requested time zone")
            }
            Self::InvalidExposure { value } => {
                write!(f, "invalid exposure {value} (must be finite and positive)")
            }
            Self::InvalidCamera { setting, value } => {
                write!(f, "invalid camera {setting} {value} (must be finite and positive)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Solar(err) => Some(err),
            _ => None,
        }
    }
}

impl From<solar_positioning::Error> for Error {
    fn from(err: solar_positioning::Error) -> Self {
        Self::Solar(err)
    }
}

impl Error {
    /// Creates an invalid hour error.
    #[must_use]
    pub const fn invalid_hour(value: f32) -> Self {
        Self::InvalidHour { value }
    }

    /// Creates an invalid exposure error.
    #[must_use]
    pub const fn invalid_exposure(value: f32) -> Self {
        Self::InvalidExposure { value }
    }

    /// Creates an invalid camera setting error.
    #[must_use]
    pub const fn invalid_camera(setting: &'static str, value: f32) -> Self {
        Self::InvalidCamera { setting, value }
    }
}

/// Validates a fractional hour of day.
///
/// Values outside `[0, 24)` are accepted and roll into adjacent days; only
/// NaN and infinities are rejected.
///
/// # Errors
/// Returns `InvalidHour` if the hour is not finite.
pub fn check_hour(hour: f32) -> Result<f32> {
    if !hour.is_finite() {
        return Err(Error::invalid_hour(hour));
    }
    Ok(hour)
}

/// Validates an exposure multiplier.
///
/// # Errors
/// Returns `InvalidExposure` if the value is not finite or not positive.
pub fn check_exposure(exposure: f32) -> Result<f32> {
    if !exposure.is_finite() || exposure <= 0.0 {
        return Err(Error::invalid_exposure(exposure));
    }
    Ok(exposure)
}

/// Validates one camera setting (aperture, shutter speed, or sensitivity).
///
/// # Errors
/// Returns `InvalidCamera` if the value is not finite or not positive.
pub fn check_camera_setting(setting: &'static str, value: f32) -> Result<f32> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid_camera(setting, value));
    }
    Ok(value)
}
