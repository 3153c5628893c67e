use thiserror::Error;

/// Errors raised by star parameter validation.
///
/// Every setter validates before touching state, so an error always means
/// "nothing changed".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StarError {
    #[error("invalid value {value} for {name}: {reason}")]
    InvalidParameter {
        /// Field name as exposed to control panels (e.g. `"pointCount"`).
        name: &'static str,
        /// The rejected value, formatted for display.
        value: String,
        reason: &'static str,
    },
}

impl StarError {
    pub(crate) fn invalid(
        name: &'static str,
        value: impl std::fmt::Display,
        reason: &'static str,
    ) -> Self {
        StarError::InvalidParameter { name, value: value.to_string(), reason }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            StarError::InvalidParameter { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_parameter_and_value() {
        let err = StarError::invalid("pointCount", 2, "must be at least 3");
        assert_eq!(err.to_string(), "invalid value 2 for pointCount: must be at least 3");
        assert_eq!(err.parameter(), "pointCount");
    }
}
