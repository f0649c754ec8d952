use dailygram_domain::shared::{DomainError, ErrorCode, ErrorSeverity};
use serde::{Deserialize, Serialize};
use specta::Type;

/// Structured error returned by every command
///
/// Carries enough for a caller to decide how to surface it:
/// a numeric code, the message, a severity and whether a retry can help.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct CommandError {
    /// Numeric error code (2xxx-6xxx range)
    pub code: u16,

    pub message: String,

    pub severity: ErrorSeverity,

    /// Whether the operation can be retried
    pub recoverable: bool,
}

impl CommandError {
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InfrastructureError, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ValidationError, message)
    }

    pub fn group_not_found(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::GroupNotFound, message)
    }
}

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code().code(),
            message: err.message().to_string(),
            severity: err.severity(),
            recoverable: err.is_recoverable(),
        }
    }
}

impl From<String> for CommandError {
    fn from(message: String) -> Self {
        Self::infrastructure(message)
    }
}

impl From<&str> for CommandError {
    fn from(message: &str) -> Self {
        Self::infrastructure(message.to_string())
    }
}

impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<DomainError>() {
            Ok(domain) => domain.into(),
            Err(other) => Self::infrastructure(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::from_code(ErrorCode::SerializationError, err.to_string())
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_from_domain_error() {
        let cmd_err: CommandError = DomainError::GroupNotFound("Group 7 not found".to_string()).into();

        assert_eq!(cmd_err.code, 2001);
        assert_eq!(cmd_err.message, "Group 7 not found");
        assert_eq!(cmd_err.severity, ErrorSeverity::Info);
        assert!(!cmd_err.recoverable);
    }

    #[test]
    fn test_command_error_from_string() {
        let cmd_err: CommandError = "Something went wrong".into();

        assert_eq!(cmd_err.code, 5001);
        assert_eq!(cmd_err.severity, ErrorSeverity::Error);
        assert!(cmd_err.recoverable);
    }

    #[test]
    fn test_anyhow_keeps_domain_code() {
        let err = anyhow::Error::from(DomainError::Configuration("cap is zero".to_string()));
        let cmd_err: CommandError = err.into();
        assert_eq!(cmd_err.code, 5002);
        assert_eq!(cmd_err.message, "cap is zero");
    }

    #[test]
    fn test_command_error_helpers() {
        assert_eq!(CommandError::validation("Invalid input").code, 6001);
        assert_eq!(CommandError::group_not_found("missing").code, 2001);
        assert_eq!(CommandError::infrastructure("offline").to_string(), "[5001] offline");
    }
}
