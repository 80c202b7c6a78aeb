use tracing::trace;

use super::environment::{
    check_air_velocity, check_altitude, check_delta_temp, check_unit_fraction, Environment,
    Formula,
};
use super::solver::bisect;
use crate::constants::{CLASSIC_SWITCH_FACTOR, ITER_MAX, TA_MAX, TA_MIN, TC_MAX, TC_MIN};
use crate::domain::Conductor;
use crate::error::{AmpacityError, Result};
use crate::guard::guard;

const MM_PER_INCH: f64 = 25.4;
const KM_PER_FT: f64 = 0.0003048;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Steady-state heat balance for one conductor.
///
/// The conductor parameters are copied at construction; later changes to the
/// source [`Conductor`] are not seen by the model. Environmental parameters
/// can be changed through the setters, each of which validates before
/// committing.
///
/// Units follow the classic formulation: the heat balance is evaluated in
/// W/ft with the diameter in inches, and the result is in amperes.
#[derive(Debug, Clone, PartialEq)]
pub struct AmpacityModel {
    /// Resistance at 25 °C (Ohm/km)
    r25: f64,
    /// Diameter (mm)
    diameter: f64,
    /// Temperature coefficient of resistance (1/°C)
    alpha: f64,
    environment: Environment,
}

impl AmpacityModel {
    /// Create a model with default environment.
    ///
    /// Requires `r25 > 0`, `diameter > 0` and `0 < alpha < 1`.
    pub fn new(r25: f64, diameter: f64, alpha: f64) -> Result<Self> {
        guard(r25)
            .finite()
            .and_then(|g| g.gt(0.0))
            .map_err(AmpacityError::invalid("r25"))?;
        guard(diameter)
            .finite()
            .and_then(|g| g.gt(0.0))
            .map_err(AmpacityError::invalid("diameter"))?;
        guard(alpha)
            .gt(0.0)
            .and_then(|g| g.lt(1.0))
            .map_err(AmpacityError::invalid("alpha"))?;

        Ok(Self {
            r25,
            diameter,
            alpha,
            environment: Environment::default(),
        })
    }

    /// Snapshot r25, diameter and category alpha from a conductor
    pub fn from_conductor(conductor: &Conductor) -> Result<Self> {
        Self::new(
            conductor.r25_ohm_per_km,
            conductor.diameter_mm,
            conductor.category.alpha,
        )
    }

    pub fn with_environment(mut self, environment: Environment) -> Result<Self> {
        self.set_environment(environment)?;
        Ok(self)
    }

    /// Resistance (Ohm/km) at conductor temperature `tc` (°C)
    pub fn resistance_at(&self, tc: f64) -> Result<f64> {
        guard(tc).ge(TC_MIN)?.le(TC_MAX)?;
        Ok(self.r25 * (1.0 + self.alpha * (tc - 25.0)))
    }

    /// Current (A) that holds the conductor at `tc` with ambient `ta` (°C).
    ///
    /// Returns 0 when `ta >= tc`, and when solar gain exceeds the cooling
    /// available at `tc` so no current can reach that temperature.
    pub fn current_at(&self, ta: f64, tc: f64) -> Result<f64> {
        guard(ta).ge(TA_MIN)?.le(TA_MAX)?;
        guard(tc).ge(TC_MIN)?.le(TC_MAX)?;
        if ta >= tc {
            return Ok(0.0);
        }

        let env = &self.environment;
        let d = self.diameter / MM_PER_INCH;
        let rc = self.resistance_at(tc)? * KM_PER_FT;
        guard(rc).gt(0.0)?;

        let qc = self.convective_loss(ta, tc, d);
        let qr = 0.138 * d * env.emissivity * (kelvin_hundredths(tc).powi(4) - kelvin_hundredths(ta).powi(4));
        let qs = 3.87 * d * env.sun_effect;

        if qc + qr < qs {
            Ok(0.0)
        } else {
            Ok(((qc + qr - qs) / rc).sqrt())
        }
    }

    /// Conductor temperature (°C) reached carrying `ic` (A) at ambient `ta`.
    ///
    /// `ic` must lie in `[0, current_at(ta, TC_MAX)]`.
    pub fn conductor_temp_for(&self, ta: f64, ic: f64) -> Result<f64> {
        guard(ta).ge(TA_MIN)?.le(TA_MAX)?;
        let ic_max = self.current_at(ta, TC_MAX)?;
        guard(ic).ge(0.0)?.le(ic_max)?;

        bisect(
            "conductor_temp_for",
            ta,
            TC_MAX,
            self.environment.delta_temp,
            ITER_MAX,
            |tc| Ok(self.current_at(ta, tc)? > ic),
        )
    }

    /// Ambient temperature (°C) at which carrying `ic` (A) holds the conductor at `tc`.
    ///
    /// `ic` must lie in `[current_at(TA_MAX, tc), current_at(TA_MIN, tc)]`.
    pub fn ambient_temp_for(&self, tc: f64, ic: f64) -> Result<f64> {
        guard(tc).ge(TC_MIN)?.le(TC_MAX)?;
        let ic_min = self.current_at(TA_MAX, tc)?;
        let ic_max = self.current_at(TA_MIN, tc)?;
        guard(ic).ge(ic_min)?.le(ic_max)?;

        let upper = TA_MAX.min(tc);
        if TA_MIN >= upper {
            return Ok(tc);
        }

        bisect(
            "ambient_temp_for",
            TA_MIN,
            upper,
            self.environment.delta_temp,
            ITER_MAX,
            |ta| Ok(self.current_at(ta, tc)? <= ic),
        )
    }

    /// Convective heat loss (W/ft) for diameter `d` in inches
    fn convective_loss(&self, ta: f64, tc: f64, d: f64) -> f64 {
        let env = &self.environment;
        let rise = tc - ta;
        let tm = 0.5 * (tc + ta);

        // Barometric pressure (cmHg), air density, viscosity and conductivity at film temperature
        let pb = 10f64.powf(1.880813592 - env.altitude_m / 18336.0);
        let rf = 0.2901577 * pb / (273.0 + tm);
        let uf = 0.04165 + 0.000111 * tm;
        let kf = 0.00739 + 0.0000227 * tm;

        let natural = 0.283 * rf.sqrt() * d.powf(0.75) * rise.powf(1.25);
        let v = env.air_velocity_fps * SECONDS_PER_HOUR;
        if v == 0.0 {
            return natural;
        }

        let factor = d * rf * v / uf;
        let forced_high = 0.1695 * kf * rise * factor.powf(0.6);
        let forced_low = kf * rise * (1.01 + 0.371 * factor.powf(0.52));

        match env.formula {
            Formula::Ieee => natural.max(forced_high).max(forced_low),
            Formula::Classic if factor < CLASSIC_SWITCH_FACTOR => forced_low,
            Formula::Classic => forced_high,
        }
    }

    pub fn r25(&self) -> f64 {
        self.r25
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn altitude(&self) -> f64 {
        self.environment.altitude_m
    }

    pub fn air_velocity(&self) -> f64 {
        self.environment.air_velocity_fps
    }

    pub fn sun_effect(&self) -> f64 {
        self.environment.sun_effect
    }

    pub fn emissivity(&self) -> f64 {
        self.environment.emissivity
    }

    pub fn formula(&self) -> Formula {
        self.environment.formula
    }

    pub fn delta_temp(&self) -> f64 {
        self.environment.delta_temp
    }

    /// Replace the whole environment; rejected values leave the model unchanged
    pub fn set_environment(&mut self, environment: Environment) -> Result<()> {
        environment.validate()?;
        trace!(?environment, "environment set");
        self.environment = environment;
        Ok(())
    }

    pub fn set_altitude(&mut self, altitude_m: f64) -> Result<()> {
        check_altitude(altitude_m)?;
        trace!(altitude_m, "altitude set");
        self.environment.altitude_m = altitude_m;
        Ok(())
    }

    pub fn set_air_velocity(&mut self, air_velocity_fps: f64) -> Result<()> {
        check_air_velocity(air_velocity_fps)?;
        trace!(air_velocity_fps, "air velocity set");
        self.environment.air_velocity_fps = air_velocity_fps;
        Ok(())
    }

    pub fn set_sun_effect(&mut self, sun_effect: f64) -> Result<()> {
        check_unit_fraction(sun_effect)?;
        trace!(sun_effect, "sun effect set");
        self.environment.sun_effect = sun_effect;
        Ok(())
    }

    pub fn set_emissivity(&mut self, emissivity: f64) -> Result<()> {
        check_unit_fraction(emissivity)?;
        trace!(emissivity, "emissivity set");
        self.environment.emissivity = emissivity;
        Ok(())
    }

    pub fn set_formula(&mut self, formula: Formula) {
        trace!(%formula, "formula set");
        self.environment.formula = formula;
    }

    /// Select the formula by numeric code (0 = IEEE, 1 = CLASSIC)
    pub fn set_formula_code(&mut self, code: u8) -> Result<()> {
        self.set_formula(Formula::try_from(code)?);
        Ok(())
    }

    pub fn set_delta_temp(&mut self, delta_temp: f64) -> Result<()> {
        check_delta_temp(delta_temp)?;
        trace!(delta_temp, "delta temp set");
        self.environment.delta_temp = delta_temp;
        Ok(())
    }
}

/// Absolute temperature over 100
fn kelvin_hundredths(t: f64) -> f64 {
    (t + 273.0) / 100.0
}
