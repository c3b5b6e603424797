//! Transitions and transition handles.
//!
//! A [`Transition`] is the record a router hands back for every navigation it
//! performs: where it went, how history was updated, and whether it landed on
//! the requested route or fell into the error route.
//!
//! A [`TransitionHandle`] is the retryable part of a transition. The router
//! creates one when a transition fails into the error route and parks it in
//! the [`NavigationContext`](crate::NavigationContext). Nothing outside the
//! router constructs handles; the policy only forwards or clears them.

use crate::params::{QueryParams, RouteModel};
use crate::router::Router;
use crate::NavResult;
use std::fmt;

/// How a transition updates history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMethod {
    /// Add a new history entry
    #[default]
    Push,
    /// Overwrite the current history entry
    Replace,
}

impl TransitionMethod {
    /// Pick [`Replace`](Self::Replace) when `replace` is set.
    pub fn from_replace(replace: bool) -> Self {
        if replace {
            Self::Replace
        } else {
            Self::Push
        }
    }
}

/// Why a transition was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Navigation to a route name or URL
    Navigate,
    /// Re-run of the current route's model step
    Refresh,
    /// Re-issue of a transition that failed into the error route
    Retry,
    /// Move through history to an existing entry
    Traverse,
}

/// Where a transition is headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionTarget {
    /// Named route with its models and query mapping
    Route {
        name: String,
        models: Vec<RouteModel>,
        query_params: QueryParams,
    },
    /// Literal URL path, resolved by the router's URL matcher
    Url(String),
}

impl TransitionTarget {
    /// Named route target without models or query parameters.
    pub fn route(name: impl Into<String>) -> Self {
        Self::Route {
            name: name.into(),
            models: Vec::new(),
            query_params: QueryParams::new(),
        }
    }

    /// URL target.
    pub fn url(path: impl Into<String>) -> Self {
        Self::Url(path.into())
    }
}

impl fmt::Display for TransitionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Route { name, models, .. } if models.is_empty() => write!(f, "route '{}'", name),
            Self::Route { name, models, .. } => {
                let ids: Vec<&str> = models.iter().map(RouteModel::id).collect();
                write!(f, "route '{}' ({})", name, ids.join(", "))
            }
            Self::Url(path) => write!(f, "url '{}'", path),
        }
    }
}

/// How a transition ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The target route is now active at `url`
    Completed { route_name: String, url: String },
    /// The target refused to load; the router is now on its error route
    Failed { route_name: String, reason: String },
}

/// Record of a navigation performed by a router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    id: usize,
    kind: TransitionKind,
    method: TransitionMethod,
    target: TransitionTarget,
    outcome: TransitionOutcome,
}

impl Transition {
    /// Assemble a transition record. Called by router implementations.
    pub fn new(
        id: usize,
        kind: TransitionKind,
        method: TransitionMethod,
        target: TransitionTarget,
        outcome: TransitionOutcome,
    ) -> Self {
        Self {
            id,
            kind,
            method,
            target,
            outcome,
        }
    }

    /// Router-assigned sequence number.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn method(&self) -> TransitionMethod {
        self.method
    }

    pub fn target(&self) -> &TransitionTarget {
        &self.target
    }

    pub fn outcome(&self) -> &TransitionOutcome {
        &self.outcome
    }

    /// Check if the target route became active
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, TransitionOutcome::Completed { .. })
    }

    /// Check if the transition fell into the error route
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, TransitionOutcome::Failed { .. })
    }

    /// URL the router settled on, if the transition completed.
    pub fn url(&self) -> Option<&str> {
        match &self.outcome {
            TransitionOutcome::Completed { url, .. } => Some(url),
            TransitionOutcome::Failed { .. } => None,
        }
    }

    /// Chain follow-up logic once the transition has settled.
    ///
    /// ```
    /// # use stream_navigator::*;
    /// let transition = Transition::new(
    ///     1,
    ///     TransitionKind::Navigate,
    ///     TransitionMethod::Push,
    ///     TransitionTarget::url("/featured"),
    ///     TransitionOutcome::Completed { route_name: "featured".into(), url: "/featured".into() },
    /// );
    /// let mut seen = None;
    /// let transition = transition.then(|t| seen = t.url().map(String::from));
    /// assert_eq!(seen.as_deref(), Some("/featured"));
    /// assert!(transition.is_completed());
    /// ```
    pub fn then<F>(self, f: F) -> Self
    where
        F: FnOnce(&Transition),
    {
        f(&self);
        self
    }
}

/// Retryable handle for a transition that failed into the error route.
///
/// Consumed by [`retry`](Self::retry), so a handle can be re-issued at most
/// once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionHandle {
    id: usize,
    target: TransitionTarget,
    method: TransitionMethod,
}

impl TransitionHandle {
    /// Create a handle. Called by router implementations only.
    pub fn new(id: usize, target: TransitionTarget, method: TransitionMethod) -> Self {
        Self { id, target, method }
    }

    /// Id of the transition that failed.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn target(&self) -> &TransitionTarget {
        &self.target
    }

    pub fn method(&self) -> TransitionMethod {
        self.method
    }

    /// Re-issue the failed transition through `router`.
    pub fn retry<R>(self, router: &mut R) -> NavResult<Transition>
    where
        R: Router + ?Sized,
    {
        router.retry_transition(self)
    }
}
