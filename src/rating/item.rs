use crate::ampacity::AmpacityModel;
use crate::constants::{DEFAULT_MAX_OPERATING_TEMP, DEFAULT_SUB_CONDUCTORS, TC_MAX, TC_MIN};
use crate::error::Result;
use crate::guard::guard;

/// A conductor rated at its maximum operating temperature, bundled
/// `sub_conductors` per phase
#[derive(Debug, Clone, PartialEq)]
pub struct RatingItem {
    model: AmpacityModel,
    /// Maximum operating temperature (°C)
    max_operating_temp: f64,
    sub_conductors: u32,
}

impl RatingItem {
    pub fn new(model: AmpacityModel, max_operating_temp: f64, sub_conductors: u32) -> Result<Self> {
        guard(max_operating_temp).ge(TC_MIN)?.le(TC_MAX)?;
        guard(sub_conductors).ge(1)?;
        Ok(Self {
            model,
            max_operating_temp,
            sub_conductors,
        })
    }

    /// Single conductor rated at 50 °C
    pub fn with_defaults(model: AmpacityModel) -> Self {
        Self {
            model,
            max_operating_temp: DEFAULT_MAX_OPERATING_TEMP,
            sub_conductors: DEFAULT_SUB_CONDUCTORS,
        }
    }

    /// Current (A) for the whole bundle at ambient `ta` (°C)
    pub fn current_at(&self, ta: f64) -> Result<f64> {
        let per_conductor = self.model.current_at(ta, self.max_operating_temp)?;
        Ok(per_conductor * f64::from(self.sub_conductors))
    }

    pub fn model(&self) -> &AmpacityModel {
        &self.model
    }

    pub fn max_operating_temp(&self) -> f64 {
        self.max_operating_temp
    }

    pub fn sub_conductors(&self) -> u32 {
        self.sub_conductors
    }
}
