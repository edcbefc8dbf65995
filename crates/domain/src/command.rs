//! Command — an action sent to the backend command endpoint.
//!
//! A [`CommandRequest`] is the wire payload (`action` plus optional `param`).
//! A [`Command`] wraps it with the [`CommandKind`] describing what the console
//! does once the request succeeds, so a confirmation dialog can hold the
//! command as plain data instead of an opaque callback.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// One dispatched action: `GET <endpoint>?action=<action>[&param=<param>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRequest {
    action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    param: Option<String>,
}

impl CommandRequest {
    /// Create a request without a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAction`] when `action` is blank.
    pub fn new(action: impl Into<String>) -> Result<Self, ValidationError> {
        let action = action.into();
        if action.trim().is_empty() {
            return Err(ValidationError::EmptyAction);
        }
        Ok(Self {
            action,
            param: None,
        })
    }

    /// Attach a parameter. An empty string leaves the request without one.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        let param = param.into();
        self.param = (!param.is_empty()).then_some(param);
        self
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// Encode as a query string. The `param` term is omitted entirely when absent.
    #[must_use]
    pub fn query(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("action", &self.action);
        if let Some(param) = &self.param {
            query.append_pair("param", param);
        }
        query.finish()
    }

    /// Full request target against `endpoint` (e.g. `/api`).
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{endpoint}?{}", self.query())
    }
}

impl fmt::Display for CommandRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{}({param})", self.action),
            None => write!(f, "{}()", self.action),
        }
    }
}

/// What the console does after a command settles successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandKind {
    /// Fire without confirmation; nothing happens on success beyond logging.
    Direct,
    /// Confirmation-gated; on success the console navigates to `location`.
    Navigate { location: String },
    /// Confirmation-gated; on success the current view reloads in place.
    Reload,
}

/// A request tagged with its call shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    #[serde(flatten)]
    pub kind: CommandKind,
    pub request: CommandRequest,
}

impl Command {
    #[must_use]
    pub fn direct(request: CommandRequest) -> Self {
        Self {
            kind: CommandKind::Direct,
            request,
        }
    }

    #[must_use]
    pub fn navigate(request: CommandRequest, location: impl Into<String>) -> Self {
        Self {
            kind: CommandKind::Navigate {
                location: location.into(),
            },
            request,
        }
    }

    #[must_use]
    pub fn reload(request: CommandRequest) -> Self {
        Self {
            kind: CommandKind::Reload,
            request,
        }
    }

    /// Whether this command belongs to a confirmation flow, i.e. the modal
    /// must be closed once it settles.
    #[must_use]
    pub fn is_gated(&self) -> bool {
        !matches!(self.kind, CommandKind::Direct)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CommandKind::Direct => write!(f, "{}", self.request),
            CommandKind::Navigate { location } => write!(f, "{} -> {location}", self.request),
            CommandKind::Reload => write!(f, "{} -> reload", self.request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_blank_action() {
        assert_eq!(
            CommandRequest::new("  ").unwrap_err(),
            ValidationError::EmptyAction
        );
    }

    #[test]
    fn should_reject_empty_and_whitespace_actions() {
        for action in ["", "\t", "\n ", "\u{3000}"] {
            assert_eq!(
                CommandRequest::new(action).unwrap_err(),
                ValidationError::EmptyAction,
                "{action:?}"
            );
        }
    }

    #[test]
    fn should_omit_param_term_when_absent() {
        let req = CommandRequest::new("restartServer").unwrap();
        assert_eq!(req.query(), "action=restartServer");
        assert!(!req.url("/api").contains("param"));
    }

    #[test]
    fn should_include_param_term_when_present() {
        let req = CommandRequest::new("deleteImg").unwrap().with_param("42");
        assert_eq!(req.url("/api"), "/api?action=deleteImg&param=42");
    }

    #[test]
    fn should_drop_empty_param() {
        let req = CommandRequest::new("resetDB").unwrap().with_param("");
        assert_eq!(req.param(), None);
        assert_eq!(req.query(), "action=resetDB");
    }

    #[test]
    fn should_percent_encode_reserved_characters() {
        let req = CommandRequest::new("tag")
            .unwrap()
            .with_param("a&b=c d");
        assert_eq!(req.query(), "action=tag&param=a%26b%3Dc+d");
    }

    #[test]
    fn should_report_gated_only_for_confirmation_shapes() {
        let req = CommandRequest::new("updateQR").unwrap();
        assert!(!Command::direct(req.clone()).is_gated());
        assert!(Command::navigate(req.clone(), "/grid").is_gated());
        assert!(Command::reload(req).is_gated());
    }

    #[test]
    fn should_display_command_with_effect() {
        let req = CommandRequest::new("resetDB").unwrap().with_param("3");
        assert_eq!(Command::reload(req.clone()).to_string(), "resetDB(3) -> reload");
        assert_eq!(
            Command::navigate(req, "/grid").to_string(),
            "resetDB(3) -> /grid"
        );
    }

    #[test]
    fn should_serialize_kind_as_tag() {
        let req = CommandRequest::new("resetDB").unwrap();
        let json = serde_json::to_value(Command::navigate(req, "/grid")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "navigate",
                "location": "/grid",
                "request": { "action": "resetDB" }
            })
        );
    }
}
