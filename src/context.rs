//! Navigation context and navigation requests.
//!
//! - [`NavigationContext`]: the router-owned state the policy reads and
//!   writes: current route and URL, plus the error-recovery pair
//!   (`last_route_name`, `error_transition`).
//! - [`NavigationRequest`]: what route lifecycle hooks see about the
//!   navigation being performed.
//!
//! The error-recovery fields are only meaningful while the current route is
//! the error route. [`enter_error`](NavigationContext::enter_error) sets them
//! together and [`complete`](NavigationContext::complete) clears them together.

use crate::params::{QueryParams, RouteParams};
use crate::transition::TransitionHandle;

/// Router-owned navigation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    current_route_name: String,
    current_url: String,
    last_route_name: Option<String>,
    error_transition: Option<TransitionHandle>,
}

impl NavigationContext {
    /// Context positioned on `route_name` at `url`, with nothing to recover.
    pub fn new(route_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            current_route_name: route_name.into(),
            current_url: url.into(),
            last_route_name: None,
            error_transition: None,
        }
    }

    /// Name of the active leaf route.
    pub fn current_route_name(&self) -> &str {
        &self.current_route_name
    }

    /// Canonical path of the active location, query string included.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Route that was active before the current error state.
    pub fn last_route_name(&self) -> Option<&str> {
        self.last_route_name.as_deref()
    }

    /// Pending retry handle of the transition that failed.
    pub fn error_transition(&self) -> Option<&TransitionHandle> {
        self.error_transition.as_ref()
    }

    /// Drop the pending retry handle.
    pub fn clear_error_transition(&mut self) {
        self.error_transition = None;
    }

    /// Remove and return the pending retry handle.
    ///
    /// The context no longer holds the handle once this returns, so a
    /// re-entrant refresh cannot retry it a second time.
    pub fn take_error_transition(&mut self) -> Option<TransitionHandle> {
        self.error_transition.take()
    }

    /// Record the route to fall back to when there is no handle to retry.
    pub fn set_last_route(&mut self, name: impl Into<String>) {
        self.last_route_name = Some(name.into());
    }

    /// Move onto the error route after a failed transition.
    ///
    /// The URL is left untouched: a failed transition never reached its
    /// destination. The last good route is only recorded when leaving a
    /// regular route, so repeated failures keep pointing at it.
    pub fn enter_error(&mut self, error_route: &str, handle: Option<TransitionHandle>) {
        if self.current_route_name != error_route {
            let previous = std::mem::replace(&mut self.current_route_name, error_route.to_string());
            if !previous.is_empty() {
                self.last_route_name = Some(previous);
            }
        }
        self.error_transition = handle;
    }

    /// Settle on `route_name` at `url` after a successful transition.
    pub fn complete(&mut self, route_name: impl Into<String>, url: impl Into<String>) {
        self.current_route_name = route_name.into();
        self.current_url = url.into();
        self.last_route_name = None;
        self.error_transition = None;
    }

    /// Check if the context sits on the given error route
    pub fn is_in_error(&self, error_route: &str) -> bool {
        self.current_route_name == error_route
    }
}

/// Navigation handed to route lifecycle hooks.
///
/// # Example
///
/// ```
/// use stream_navigator::NavigationRequest;
///
/// let request = NavigationRequest::new("channel", "/channel/xyz")
///     .with_from("/featured".to_string());
/// assert_eq!(request.route_name, "channel");
/// assert_eq!(request.from.as_deref(), Some("/featured"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// URL being left, if any
    pub from: Option<String>,

    /// URL being entered
    pub to: String,

    /// Route being entered
    pub route_name: String,

    /// Dynamic segment values of the entered route
    pub params: RouteParams,

    /// Query mapping of the entered URL
    pub query: QueryParams,
}

impl NavigationRequest {
    /// Create a new navigation request.
    pub fn new(route_name: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: None,
            to: to.into(),
            route_name: route_name.into(),
            params: RouteParams::new(),
            query: QueryParams::new(),
        }
    }

    /// Set the URL being left.
    pub fn with_from(mut self, from: String) -> Self {
        self.from = Some(from);
        self
    }

    /// Set route parameters.
    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = params;
        self
    }

    /// Set the query mapping.
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }
}
