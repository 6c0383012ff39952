use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Cannot calculate square root of negative number")]
    NegativeSquareRoot,

    #[error("Factorial is not defined for negative numbers")]
    NegativeFactorial,

    #[error("Cannot {action} of empty list")]
    EmptyCollection { action: &'static str },

    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow { operation: &'static str },

    #[error("Number out of range: {value}")]
    NumberOutOfRange { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for the binary.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::DivisionByZero
            | ServiceError::NegativeSquareRoot
            | ServiceError::NegativeFactorial
            | ServiceError::EmptyCollection { .. }
            | ServiceError::ArithmeticOverflow { .. }
            | ServiceError::NumberOutOfRange { .. } => ErrorCategory::Domain,
            ServiceError::ConfigValidationError { .. }
            | ServiceError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ServiceError::IoError(_) | ServiceError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Domain => format!("Operation rejected: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System failure: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::DivisionByZero => "Use a non-zero divisor",
            ServiceError::NegativeSquareRoot | ServiceError::NegativeFactorial => {
                "Pass a number greater than or equal to zero"
            }
            ServiceError::EmptyCollection { .. } => "Provide at least one number",
            ServiceError::ArithmeticOverflow { .. } | ServiceError::NumberOutOfRange { .. } => {
                "Use smaller operands; results must fit in an unsigned 64-bit integer"
            }
            ServiceError::ConfigValidationError { .. }
            | ServiceError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command-line flags"
            }
            ServiceError::IoError(_) => "Check that the file exists and is readable",
            ServiceError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_exit_with_one() {
        let err = ServiceError::DivisionByZero;
        assert_eq!(err.category(), ErrorCategory::Domain);
        assert_eq!(err.severity().exit_code(), 1);
    }

    #[test]
    fn test_empty_collection_message() {
        let err = ServiceError::EmptyCollection {
            action: "find maximum",
        };
        assert_eq!(err.to_string(), "Cannot find maximum of empty list");
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: ServiceError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
    }
}
