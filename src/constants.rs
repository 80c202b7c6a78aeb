//! Numeric bounds shared by the thermal model and its callers.

// Ambient temperature [°C]
// World records: -82.2 (Vostok, 1983) and 58.2 (Libya, 1922)
pub const TA_MIN: f64 = -90.0;
pub const TA_MAX: f64 = 90.0;

// Conductor temperature [°C]
// Copper melts at 1083 °C
pub const TC_MIN: f64 = -90.0;
pub const TC_MAX: f64 = 2000.0;

/// Upper bound on bisection steps for the inverse solvers.
pub const ITER_MAX: usize = 20_000;

// Environment defaults
pub const DEFAULT_ALTITUDE_M: f64 = 300.0;
pub const DEFAULT_AIR_VELOCITY_FPS: f64 = 2.0;
pub const DEFAULT_SUN_EFFECT: f64 = 1.0;
pub const DEFAULT_EMISSIVITY: f64 = 0.5;
pub const DEFAULT_DELTA_TEMP: f64 = 0.01;

/// Reynolds-like factor at which the classic formula switches convection terms.
pub const CLASSIC_SWITCH_FACTOR: f64 = 12_000.0;

// Rating defaults
pub const DEFAULT_MAX_OPERATING_TEMP: f64 = 50.0;
pub const DEFAULT_SUB_CONDUCTORS: u32 = 1;
