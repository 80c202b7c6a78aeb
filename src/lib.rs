//! Steady-state ampacity of bare overhead conductors.
//!
//! The heat balance `Qc + Qr = Qs + I²R` is solved for the current given the
//! ambient and conductor temperatures, and inverted by bisection to recover
//! either temperature from a known current.

pub mod ampacity;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod guard;
pub mod rating;
pub mod telemetry;

pub use ampacity::{AmpacityModel, Environment, Formula};
pub use domain::{Category, Conductor, StandardCategory};
pub use error::{AmpacityError, RangeViolation, Result};
pub use guard::{guard, ValueGuard};
pub use rating::{RatingItem, RatingTable};
