//! Core domain types and service traits for errwatch
//!
//! This module defines the fundamental data structures and trait contracts
//! that govern component interactions throughout the crate.

use async_trait::async_trait;
use std::any::type_name;
use thiserror::Error;

/// The observable facets of a caught application error.
///
/// Host frameworks adapt their native error values to this capability set
/// at the boundary; everything downstream (phrasing, publishing) sees only
/// these three facets.
pub trait ErrorEvent: Send + Sync {
    /// The error class or kind name (e.g. "MyException").
    fn kind(&self) -> &str;

    /// Human-readable description of the failure.
    fn message(&self) -> String;

    /// Backtrace lines, outermost frame first. May be empty.
    fn backtrace(&self) -> &[String];
}

/// An owned error occurrence, and the boundary adapter for [`ErrorEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    kind: String,
    message: String,
    backtrace: Vec<String>,
}

impl CapturedError {
    /// Creates a captured error with an empty backtrace.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            backtrace: Vec::new(),
        }
    }

    /// Attaches backtrace lines, outermost frame first.
    pub fn with_backtrace(mut self, lines: Vec<String>) -> Self {
        self.backtrace = lines;
        self
    }

    /// Captures a standard error, deriving the kind from the unqualified
    /// Rust type name, with any generic parameters dropped.
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        let full = type_name::<E>();
        // Cut the generic-argument list first; its parameters carry their
        // own module paths and would hijack the last-segment split.
        let base = full.split('<').next().unwrap_or(full);
        let kind = base.rsplit("::").next().unwrap_or(base);
        Self::new(kind, err.to_string())
    }
}

impl ErrorEvent for CapturedError {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn backtrace(&self) -> &[String] {
        &self.backtrace
    }
}

/// HTTP request context accompanying an error, when there is one.
///
/// Every field is independently optional. Request-style phrasing needs
/// both `method` and `path`; the handler clause additionally needs both
/// `controller` and `action`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// HTTP method, e.g. "GET".
    pub method: Option<String>,
    /// Request path, e.g. "/examples".
    pub path: Option<String>,
    /// Name of the controller that was handling the request.
    pub controller: Option<String>,
    /// Name of the action within the controller.
    pub action: Option<String>,
}

impl RequestContext {
    /// Creates a context carrying a method and a path.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Attaches the controller/action handler identifier.
    pub fn processed_by(
        mut self,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.controller = Some(controller.into());
        self.action = Some(action.into());
        self
    }

    /// Returns `(method, path)` when both are present, the condition for
    /// request-style phrasing.
    pub fn request_line(&self) -> Option<(&str, &str)> {
        match (self.method.as_deref(), self.path.as_deref()) {
            (Some(method), Some(path)) => Some((method, path)),
            _ => None,
        }
    }

    /// Returns `(controller, action)` when both are present.
    pub fn handler(&self) -> Option<(&str, &str)> {
        match (self.controller.as_deref(), self.action.as_deref()) {
            (Some(controller), Some(action)) => Some((controller, action)),
            _ => None,
        }
    }
}

// =============================================================================
// Service Traits
// =============================================================================

/// Errors surfaced by a notifier while delivering one occurrence.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The OS reported no local host name.
    #[error("could not determine local hostname")]
    Hostname,

    /// The messaging collaborator rejected or failed the publish call.
    #[error("publish to {topic} failed")]
    Publish {
        /// Destination topic identifier.
        topic: String,
        /// The underlying client error, unmodified.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Delivers one error occurrence to a destination.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// A unique, descriptive name for the notifier (e.g. "sns", "log").
    /// Used for registration and logging.
    fn name(&self) -> &str;

    /// Formats and delivers a single occurrence.
    ///
    /// # Arguments
    /// * `error` - The caught error
    /// * `context` - HTTP request context, when the error happened in one
    /// * `accumulated_count` - How many times this kind has occurred so far
    ///   in the current process
    ///
    /// # Returns
    /// * `Ok(())` if the occurrence was handed to the destination
    /// * `Err` if delivery failed; the caller decides whether to log or
    ///   suppress
    async fn notify(
        &self,
        error: &dyn ErrorEvent,
        context: Option<&RequestContext>,
        accumulated_count: Option<usize>,
    ) -> Result<(), NotifyError>;
}
