use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::constants::{
    DEFAULT_AIR_VELOCITY_FPS, DEFAULT_ALTITUDE_M, DEFAULT_DELTA_TEMP, DEFAULT_EMISSIVITY,
    DEFAULT_SUN_EFFECT,
};
use crate::error::{AmpacityError, RangeViolation, Result};
use crate::guard::guard;

/// Convective cooling formula
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Formula {
    /// Largest of natural and both forced convection terms
    #[default]
    Ieee,
    /// Forced convection term chosen by the Reynolds-like factor, switching at 12000
    Classic,
}

impl Formula {
    pub fn code(self) -> u8 {
        match self {
            Self::Ieee => 0,
            Self::Classic => 1,
        }
    }
}

impl TryFrom<u8> for Formula {
    type Error = AmpacityError;

    fn try_from(code: u8) -> Result<Self> {
        guard(code).is_in(&[Self::Ieee.code(), Self::Classic.code()])?;
        Ok(if code == Self::Ieee.code() {
            Self::Ieee
        } else {
            Self::Classic
        })
    }
}

/// Per-calculation environmental parameters.
///
/// Every field has a declared range; [`Environment::validate`] and the
/// setters on [`crate::AmpacityModel`] share the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Altitude above sea level (m), >= 0
    pub altitude_m: f64,

    /// Air velocity (ft/s), >= 0
    pub air_velocity_fps: f64,

    /// Sun effect factor, 0..=1
    pub sun_effect: f64,

    /// Emissivity, 0..=1
    pub emissivity: f64,

    pub formula: Formula,

    /// Bisection tolerance (°C), > 0
    pub delta_temp: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            altitude_m: DEFAULT_ALTITUDE_M,
            air_velocity_fps: DEFAULT_AIR_VELOCITY_FPS,
            sun_effect: DEFAULT_SUN_EFFECT,
            emissivity: DEFAULT_EMISSIVITY,
            formula: Formula::default(),
            delta_temp: DEFAULT_DELTA_TEMP,
        }
    }
}

impl Environment {
    pub fn validate(&self) -> Result<()> {
        check_altitude(self.altitude_m)?;
        check_air_velocity(self.air_velocity_fps)?;
        check_unit_fraction(self.sun_effect)?;
        check_unit_fraction(self.emissivity)?;
        check_delta_temp(self.delta_temp)?;
        Ok(())
    }
}

pub(crate) fn check_altitude(value: f64) -> std::result::Result<(), RangeViolation> {
    guard(value).finite()?.ge(0.0)?;
    Ok(())
}

pub(crate) fn check_air_velocity(value: f64) -> std::result::Result<(), RangeViolation> {
    guard(value).finite()?.ge(0.0)?;
    Ok(())
}

pub(crate) fn check_unit_fraction(value: f64) -> std::result::Result<(), RangeViolation> {
    guard(value).ge(0.0)?.le(1.0)?;
    Ok(())
}

pub(crate) fn check_delta_temp(value: f64) -> std::result::Result<(), RangeViolation> {
    guard(value).finite()?.gt(0.0)?;
    Ok(())
}
