//! Error types for navigation.
//!
//! The policy itself defines almost no failure modes: everything the router
//! collaborator reports (missing route, unrecognized URL, aborted transition)
//! travels back to the caller unchanged as a [`NavigationError`].
//!
//! A transition that fails *into the error route* is not an error here. It
//! resolves to a [`Transition`](crate::Transition) whose outcome is
//! [`TransitionOutcome::Failed`](crate::TransitionOutcome::Failed) and leaves a
//! retry handle in the navigation context.
//!
//! # Examples
//!
//! ```
//! use stream_navigator::NavigationError;
//!
//! let error = NavigationError::RouteNotFound { name: "games".into() };
//! assert_eq!(error.to_string(), "Route not found: games");
//! ```

use std::fmt;

/// Result alias used throughout the crate.
pub type NavResult<T> = Result<T, NavigationError>;

/// Detailed error variants that can occur during navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No route is registered under this name
    RouteNotFound { name: String },

    /// No route pattern matches this URL
    UrlNotRecognized { path: String },

    /// Route models or parameters do not fit the route pattern
    InvalidParams { message: String },

    /// The active route refused to be left
    TransitionAborted { route: String, reason: String },

    /// Redirects kept bouncing between routes
    RedirectLoop { path: String, depth: usize },

    /// A history delta that does not coerce to an integer
    InvalidHistoryDelta { value: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::RouteNotFound { name } => {
                write!(f, "Route not found: {}", name)
            }
            NavigationError::UrlNotRecognized { path } => {
                write!(f, "No route matches url: '{}'", path)
            }
            NavigationError::InvalidParams { message } => {
                write!(f, "Invalid parameters: {}", message)
            }
            NavigationError::TransitionAborted { route, reason } => {
                write!(f, "Transition aborted by '{}': {}", route, reason)
            }
            NavigationError::RedirectLoop { path, depth } => {
                write!(f, "Redirect loop detected (depth {}): target '{}'", depth, path)
            }
            NavigationError::InvalidHistoryDelta { value } => {
                write!(f, "Invalid history delta: '{}'", value)
            }
        }
    }
}

impl std::error::Error for NavigationError {}

impl NavigationError {
    /// Check if the error is caused by an unknown route name or URL
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NavigationError::RouteNotFound { .. } | NavigationError::UrlNotRecognized { .. }
        )
    }
}
