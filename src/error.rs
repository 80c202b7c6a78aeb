use thiserror::Error;

/// A value failed a `ValueGuard` predicate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeViolation {
    #[error("Required value {op} {limit} ({value} entered)")]
    Compare {
        op: &'static str,
        limit: String,
        value: String,
    },

    #[error("Number expected ({value} entered)")]
    NotFinite { value: String },
}

/// Errors surfaced by the ampacity model and rating tables
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmpacityError {
    /// Construction-time physical precondition violated
    #[error("Invalid parameter {name}: {source}")]
    InvalidParameter {
        name: &'static str,
        #[source]
        source: RangeViolation,
    },

    /// Argument or derived bound outside its domain
    #[error(transparent)]
    OutOfRange(#[from] RangeViolation),

    #[error("{solver}(): iterations > {max_iterations}")]
    IterationLimitExceeded {
        solver: &'static str,
        max_iterations: usize,
    },

    #[error("Rating table has no items")]
    EmptyCollection,
}

impl AmpacityError {
    pub(crate) fn invalid(name: &'static str) -> impl FnOnce(RangeViolation) -> Self {
        move |source| Self::InvalidParameter { name, source }
    }
}

pub type Result<T> = std::result::Result<T, AmpacityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_message_format() {
        let err = RangeViolation::Compare {
            op: ">=",
            limit: "-90".to_string(),
            value: "-90.001".to_string(),
        };
        assert_eq!(err.to_string(), "Required value >= -90 (-90.001 entered)");
    }

    #[test]
    fn test_out_of_range_is_transparent() {
        let err: AmpacityError = RangeViolation::NotFinite {
            value: "NaN".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Number expected (NaN entered)");
    }

    #[test]
    fn test_invalid_parameter_names_field() {
        let err = AmpacityError::invalid("r25")(RangeViolation::Compare {
            op: ">",
            limit: "0".to_string(),
            value: "0".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Invalid parameter r25: Required value > 0 (0 entered)"
        );
    }
}
