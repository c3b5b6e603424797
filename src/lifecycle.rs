//! Route lifecycle hooks and navigation action types.
//!
//! - [`NavigationAction`]: what a hook tells the router to do next, such as
//!   redirect elsewhere.
//! - [`RouteLifecycle`]: hooks a [`MemoryRouter`](crate::MemoryRouter) runs
//!   around every transition.
//!
//! # Transition pipeline
//!
//! 1. **`can_deactivate`** on the active route: a deny aborts the transition
//! 2. **`on_enter`** (or **`on_refresh`**) on the target route: the model
//!    step. A deny sends the router to its error route with a retry handle.
//! 3. **commit**: history and navigation context are updated
//! 4. **`on_exit`** on the route that was left

use crate::NavigationRequest;

/// What a lifecycle hook wants the router to do with a transition.
///
/// ```
/// use stream_navigator::NavigationAction;
///
/// assert!(NavigationAction::deny("Stream is offline").is_deny());
/// assert_eq!(
///     NavigationAction::redirect("/featured").redirect_path(),
///     Some("/featured")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Carry on with the transition
    Continue,
    /// Stop the transition. `reason` ends up in logs and in the failed outcome.
    Deny { reason: String },
    /// Start over with the URL `to`
    Redirect { to: String, reason: Option<String> },
}

impl NavigationAction {
    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny {
            reason: reason.into(),
        }
    }

    pub fn redirect(to: impl Into<String>) -> Self {
        Self::Redirect {
            to: to.into(),
            reason: None,
        }
    }

    /// [`redirect`](Self::redirect) with an explanation attached.
    pub fn redirect_with_reason(to: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Redirect {
            to: to.into(),
            reason: Some(reason.into()),
        }
    }

    pub fn is_continue(&self) -> bool {
        *self == Self::Continue
    }

    pub fn is_deny(&self) -> bool {
        matches!(self, Self::Deny { .. })
    }

    /// Target URL of a redirect.
    pub fn redirect_path(&self) -> Option<&str> {
        if let Self::Redirect { to, .. } = self {
            Some(to)
        } else {
            None
        }
    }
}

/// Route lifecycle hooks.
///
/// All hooks are synchronous; the router runs them to completion before
/// committing a transition.
///
/// # Example
///
/// ```
/// use stream_navigator::{NavigationAction, NavigationRequest, RouteLifecycle};
///
/// struct ChannelRoute;
///
/// impl RouteLifecycle for ChannelRoute {
///     fn on_enter(&self, request: &NavigationRequest) -> NavigationAction {
///         match request.params.get("channel") {
///             Some(_) => NavigationAction::Continue,
///             None => NavigationAction::redirect("/featured"),
///         }
///     }
/// }
/// ```
pub trait RouteLifecycle: Send + Sync + 'static {
    /// Model step, run when the route is entered.
    fn on_enter(&self, request: &NavigationRequest) -> NavigationAction;

    /// Model step re-run by a refresh. Defaults to [`on_enter`](Self::on_enter).
    fn on_refresh(&self, request: &NavigationRequest) -> NavigationAction {
        self.on_enter(request)
    }

    /// Called after the route has been left.
    fn on_exit(&self) {}

    /// Check if the route may be left for `request`.
    fn can_deactivate(&self, _request: &NavigationRequest) -> NavigationAction {
        NavigationAction::Continue
    }
}

/// Create a lifecycle whose model step is a closure.
///
/// # Example
///
/// ```
/// use stream_navigator::{lifecycle_fn, NavigationAction};
///
/// let offline = lifecycle_fn(|_request| NavigationAction::deny("offline"));
/// ```
pub const fn lifecycle_fn<F>(f: F) -> FnLifecycle<F>
where
    F: Fn(&NavigationRequest) -> NavigationAction + Send + Sync + 'static,
{
    FnLifecycle { f }
}

/// Lifecycle created from a closure.
pub struct FnLifecycle<F> {
    f: F,
}

impl<F> RouteLifecycle for FnLifecycle<F>
where
    F: Fn(&NavigationRequest) -> NavigationAction + Send + Sync + 'static,
{
    fn on_enter(&self, request: &NavigationRequest) -> NavigationAction {
        (self.f)(request)
    }
}
