//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ConsoleError`] via `#[from]`.

/// Top-level error for console operations.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("command rejected")]
    Command(#[from] CommandError),
}

/// A value failed a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("action name must not be empty")]
    EmptyAction,

    #[error("unknown field `{field}`")]
    UnknownField { field: String },

    #[error("value `{value}` for field `{field}` is not a valid {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },
}

/// A lookup found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The command endpoint refused a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("no 'action' provided")]
    MissingAction,

    #[error("the action '{action}' is not supported")]
    Unsupported { action: String },

    #[error("'{param}' is not a valid parameter for '{action}'")]
    InvalidParam { action: String, param: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_console_error() {
        let err: ConsoleError = ValidationError::EmptyAction.into();
        assert!(matches!(
            err,
            ConsoleError::Validation(ValidationError::EmptyAction)
        ));
    }

    #[test]
    fn should_describe_unsupported_action() {
        let err = CommandError::Unsupported {
            action: "launch".to_string(),
        };
        assert_eq!(err.to_string(), "the action 'launch' is not supported");
    }

    #[test]
    fn should_describe_missing_entry() {
        let err = NotFoundError {
            entity: "Table",
            id: "webserver".to_string(),
        };
        assert_eq!(err.to_string(), "Table `webserver` not found");
    }
}
