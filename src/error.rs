//! Error types for the workload metrics engine.
//!
//! The calculation engine itself is total and never fails; these errors cover
//! configuration loading and request validation at the edges of the crate.

use thiserror::Error;

/// The main error type for the workload metrics engine.
///
/// # Example
///
/// ```
/// use workload_metrics::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy value in the configuration is out of range.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A metrics request carried no usable attendance rows.
    #[error("No attendance rows: {message}")]
    NoAttendanceRows {
        /// A description of what was missing.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/engine.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/engine.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = EngineError::InvalidPolicy {
            field: "standard_workday_minutes".to_string(),
            message: "must be between 1 and 1440".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid policy field 'standard_workday_minutes': must be between 1 and 1440"
        );
    }

    #[test]
    fn test_no_attendance_rows_displays_message() {
        let error = EngineError::NoAttendanceRows {
            message: "rows array is empty".to_string(),
        };
        assert_eq!(error.to_string(), "No attendance rows: rows array is empty");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
