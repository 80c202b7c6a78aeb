//! Fluent value checks.
//!
//! ```
//! use line_ampacity::guard;
//!
//! assert!(guard(0.5).ge(0.0).and_then(|g| g.le(1.0)).is_ok());
//! assert!(guard(1.5).ge(0.0).and_then(|g| g.le(1.0)).is_err());
//! ```
//!
//! Inside functions returning [`crate::Result`] the chain reads
//! `guard(x).ge(0.0)?.le(1.0)?;`.

use itertools::Itertools;
use std::fmt::Display;

use crate::error::RangeViolation;

/// Wraps a value and checks it against limits, failing on the first violation.
#[derive(Debug, Clone, Copy)]
pub struct ValueGuard<T> {
    value: T,
}

pub fn guard<T>(value: T) -> ValueGuard<T> {
    ValueGuard { value }
}

impl<T> ValueGuard<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: PartialOrd + Display> ValueGuard<T> {
    pub fn lt(&self, limit: T) -> Result<&Self, RangeViolation> {
        self.compare(self.value < limit, "<", &limit)
    }

    pub fn le(&self, limit: T) -> Result<&Self, RangeViolation> {
        self.compare(self.value <= limit, "<=", &limit)
    }

    pub fn gt(&self, limit: T) -> Result<&Self, RangeViolation> {
        self.compare(self.value > limit, ">", &limit)
    }

    pub fn ge(&self, limit: T) -> Result<&Self, RangeViolation> {
        self.compare(self.value >= limit, ">=", &limit)
    }

    fn compare(&self, holds: bool, op: &'static str, limit: &T) -> Result<&Self, RangeViolation> {
        if holds {
            Ok(self)
        } else {
            Err(RangeViolation::Compare {
                op,
                limit: limit.to_string(),
                value: self.value.to_string(),
            })
        }
    }
}

impl<T: PartialEq + Display> ValueGuard<T> {
    pub fn is_in(&self, set: &[T]) -> Result<&Self, RangeViolation> {
        if set.contains(&self.value) {
            Ok(self)
        } else {
            Err(RangeViolation::Compare {
                op: "in",
                limit: format!("[{}]", set.iter().join(", ")),
                value: self.value.to_string(),
            })
        }
    }
}

impl ValueGuard<f64> {
    /// Rejects NaN and infinities
    pub fn finite(&self) -> Result<&Self, RangeViolation> {
        if self.value.is_finite() {
            Ok(self)
        } else {
            Err(RangeViolation::NotFinite {
                value: self.value.to_string(),
            })
        }
    }
}
