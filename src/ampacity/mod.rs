//! Conductor Heat Balance
//!
//! Forward current calculation for a conductor at a given ambient and
//! conductor temperature, and the two bisection-based inverses
//! (conductor temperature from current, ambient temperature from current).

pub mod environment;
pub mod model;
mod solver;

pub use environment::{Environment, Formula};
pub use model::AmpacityModel;
