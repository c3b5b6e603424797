//! Router collaborator traits and the in-memory reference router.
//!
//! The navigation policy never matches routes or touches history itself. It
//! talks to a [`Router`] (route and URL transitions, route refresh, retry of
//! failed transitions, the [`NavigationContext`]) and to its [`History`].
//!
//! [`MemoryRouter`] is a complete implementation backed by a route table, a
//! [`HistoryStack`] and the [`RouteLifecycle`] pipeline. Applications embed
//! it directly; tests use it to drive the policy end to end.
//!
//! ```
//! use stream_navigator::{MemoryRouter, RouteDefinition, Router, TransitionMethod};
//!
//! let mut router = MemoryRouter::new();
//! router.add_route(RouteDefinition::new("featured", "/featured"));
//! router.add_route(RouteDefinition::new("channel", "/channel/:channel"));
//!
//! router.do_url_transition(TransitionMethod::Push, "/channel/xyz").unwrap();
//! assert_eq!(router.context().current_route_name(), "channel");
//! assert_eq!(router.context().current_url(), "/channel/xyz");
//! ```

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, ResolutionCache};
use crate::config::DEFAULT_ERROR_ROUTE;
use crate::lifecycle::{NavigationAction, RouteLifecycle};
use crate::matching::{build_path, join_url, match_path, normalize_path, split_url, ResolvedUrl};
use crate::params::{QueryParams, RouteModel, RouteParams};
use crate::state::HistoryStack;
use crate::transition::{
    Transition, TransitionHandle, TransitionKind, TransitionMethod, TransitionOutcome,
    TransitionTarget,
};
use crate::{
    debug_log, error_log, info_log, trace_log, warn_log, NavResult, NavigationContext,
    NavigationError, NavigationRequest,
};
use std::collections::VecDeque;
use std::sync::Arc;

/// Maximum redirect depth to prevent infinite redirect loops.
const MAX_REDIRECT_DEPTH: usize = 5;

/// Transitions kept by [`MemoryRouter::transitions`] unless configured otherwise.
const DEFAULT_TRANSITION_LOG_LIMIT: usize = 64;

// ============================================================================
// Collaborator traits
// ============================================================================

/// Browser history navigation.
pub trait History {
    /// Move `delta` entries through history; negative goes back.
    fn go(&mut self, delta: i32);
}

/// Router engine the navigation policy delegates to.
///
/// The router owns the [`NavigationContext`]. Every failure it reports is
/// passed through the policy to the caller unchanged.
pub trait Router: History {
    /// Current navigation state.
    fn context(&self) -> &NavigationContext;

    /// Mutable navigation state, used by error recovery.
    fn context_mut(&mut self) -> &mut NavigationContext;

    /// Transition to a named route with its models and query mapping.
    fn do_transition(
        &mut self,
        route_name: &str,
        models: Vec<RouteModel>,
        query_params: QueryParams,
        method: TransitionMethod,
    ) -> NavResult<Transition>;

    /// Transition to a literal URL, bypassing named-route resolution.
    fn do_url_transition(&mut self, method: TransitionMethod, path: &str) -> NavResult<Transition>;

    /// Look up the route called `route_name` and re-run its model step.
    fn refresh_route(&mut self, route_name: &str) -> NavResult<Transition>;

    /// Re-issue a transition that failed into the error route.
    fn retry_transition(&mut self, handle: TransitionHandle) -> NavResult<Transition>;
}

// ============================================================================
// RouteDefinition
// ============================================================================

/// A named route of a [`MemoryRouter`].
#[derive(Clone)]
pub struct RouteDefinition {
    name: String,
    path: String,
    lifecycle: Option<Arc<dyn RouteLifecycle>>,
}

impl RouteDefinition {
    /// Create a route called `name` matching the pattern `path`.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: normalize_path(&path.into()).into_owned(),
            lifecycle: None,
        }
    }

    /// Attach lifecycle hooks.
    pub fn lifecycle(mut self, lifecycle: impl RouteLifecycle) -> Self {
        self.lifecycle = Some(Arc::new(lifecycle));
        self
    }

    /// Attach shared lifecycle hooks.
    pub fn shared_lifecycle(mut self, lifecycle: Arc<dyn RouteLifecycle>) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route pattern, normalized.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl std::fmt::Debug for RouteDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("has_lifecycle", &self.lifecycle.is_some())
            .finish()
    }
}

/// Target of a transition after resolution against the route table.
struct Located {
    route: Arc<RouteDefinition>,
    url: String,
    params: RouteParams,
    query: QueryParams,
}

// ============================================================================
// MemoryRouter
// ============================================================================

/// In-memory router with a route table, history and lifecycle pipeline.
///
/// Transitions run in this order:
/// 1. resolve the target to a route and canonical URL
/// 2. `can_deactivate` on the active route (deny aborts with an error)
/// 3. `on_enter` / `on_refresh` on the target route
///    - deny: move onto the error route, park a retry handle
///    - redirect: start over with the redirect URL
/// 4. commit history and context, then `on_exit` on the route that was left
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    routes: Vec<Arc<RouteDefinition>>,
    context: NavigationContext,
    history: HistoryStack,
    error_route: String,
    next_id: usize,
    transitions: VecDeque<Transition>,
    transition_log_limit: usize,
    #[cfg(feature = "cache")]
    cache: ResolutionCache,
}

impl MemoryRouter {
    /// Create a router at `/` with no registered routes.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            context: NavigationContext::new("", "/"),
            history: HistoryStack::default(),
            error_route: DEFAULT_ERROR_ROUTE.to_string(),
            next_id: 0,
            transitions: VecDeque::new(),
            transition_log_limit: DEFAULT_TRANSITION_LOG_LIMIT,
            #[cfg(feature = "cache")]
            cache: ResolutionCache::new(),
        }
    }

    /// Use another name for the error route.
    pub fn with_error_route(mut self, name: impl Into<String>) -> Self {
        self.error_route = name.into();
        self
    }

    /// Keep at most `limit` transitions in the log; older ones are dropped.
    pub fn with_transition_log_limit(mut self, limit: usize) -> Self {
        self.transition_log_limit = limit;
        self.trim_transition_log();
        self
    }

    /// Register a route.
    pub fn add_route(&mut self, route: RouteDefinition) {
        info_log!("Registered route '{}' ({})", route.name, route.path);
        self.routes.push(Arc::new(route));
        #[cfg(feature = "cache")]
        self.cache.clear();
    }

    /// Enter the application at `url` without adding a history entry.
    pub fn start(&mut self, url: &str) -> NavResult<Transition> {
        let id = self.next_transition_id();
        self.execute(
            id,
            TransitionKind::Navigate,
            TransitionMethod::Replace,
            TransitionTarget::url(url),
            0,
        )
    }

    /// Look up a registered route by name.
    pub fn route(&self, name: &str) -> Option<&Arc<RouteDefinition>> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn routes(&self) -> &[Arc<RouteDefinition>] {
        &self.routes
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn error_route(&self) -> &str {
        &self.error_route
    }

    /// Most recent transitions, oldest first.
    pub fn transitions(&self) -> impl DoubleEndedIterator<Item = &Transition> + '_ {
        self.transitions.iter()
    }

    fn trim_transition_log(&mut self) {
        while self.transitions.len() > self.transition_log_limit {
            self.transitions.pop_front();
        }
    }

    /// URL resolution cache statistics.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }

    fn next_transition_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    fn find_route(&self, name: &str) -> NavResult<Arc<RouteDefinition>> {
        self.route(name)
            .cloned()
            .ok_or_else(|| NavigationError::RouteNotFound {
                name: name.to_string(),
            })
    }

    /// Resolve a normalized URL path to a route, first registered match wins.
    fn resolve_path(&mut self, path: &str) -> NavResult<ResolvedUrl> {
        #[cfg(feature = "cache")]
        if let Some(resolved) = self.cache.get(path) {
            return Ok(resolved);
        }

        let resolved = self
            .routes
            .iter()
            .find_map(|route| {
                match_path(path, &route.path).map(|params| ResolvedUrl::new(&route.name, params))
            })
            .ok_or_else(|| NavigationError::UrlNotRecognized {
                path: path.to_string(),
            })?;
        trace_log!("Resolved '{}' to route '{}'", path, resolved.route_name);

        #[cfg(feature = "cache")]
        self.cache.insert(path.to_string(), resolved.clone());

        Ok(resolved)
    }

    fn locate(&mut self, target: &TransitionTarget) -> NavResult<Located> {
        match target {
            TransitionTarget::Route {
                name,
                models,
                query_params,
            } => {
                let route = self.find_route(name)?;
                let path = build_path(&route.path, models)?;
                let params = match_path(&path, &route.path).ok_or_else(|| {
                    NavigationError::InvalidParams {
                        message: format!(
                            "url '{}' built for route '{}' does not match '{}'",
                            path, route.name, route.path
                        ),
                    }
                })?;
                Ok(Located {
                    url: join_url(&path, query_params),
                    route,
                    params,
                    query: query_params.clone(),
                })
            }
            TransitionTarget::Url(url) => {
                let (path, query_string) = split_url(url);
                let path = normalize_path(path);
                let resolved = self.resolve_path(&path)?;
                let route = self.find_route(&resolved.route_name)?;
                let query = QueryParams::from_query_string(query_string);
                Ok(Located {
                    url: join_url(&path, &query),
                    route,
                    params: resolved.params,
                    query,
                })
            }
        }
    }

    fn execute(
        &mut self,
        id: usize,
        kind: TransitionKind,
        method: TransitionMethod,
        target: TransitionTarget,
        redirect_depth: usize,
    ) -> NavResult<Transition> {
        if redirect_depth >= MAX_REDIRECT_DEPTH {
            error_log!(
                "Redirect loop detected (depth {}) navigating to {}",
                redirect_depth,
                target
            );
            return Err(NavigationError::RedirectLoop {
                path: target.to_string(),
                depth: redirect_depth,
            });
        }

        let located = self.locate(&target)?;
        let from = self.context.current_url().to_string();
        debug_log!("Transition #{} {:?}: '{}' → '{}'", id, kind, from, located.url);

        let request = NavigationRequest::new(located.route.name.clone(), located.url.clone())
            .with_from(from)
            .with_params(located.params)
            .with_query(located.query);

        if kind != TransitionKind::Refresh {
            let active = self.route(self.context.current_route_name()).cloned();
            if let Some(lifecycle) = active.as_ref().and_then(|route| route.lifecycle.as_ref()) {
                if let NavigationAction::Deny { reason } = lifecycle.can_deactivate(&request) {
                    warn_log!(
                        "Transition #{} to '{}' aborted: {}",
                        id,
                        request.to,
                        reason
                    );
                    return Err(NavigationError::TransitionAborted {
                        route: self.context.current_route_name().to_string(),
                        reason,
                    });
                }
            }
        }

        let action = match &located.route.lifecycle {
            Some(lifecycle) if kind == TransitionKind::Refresh => lifecycle.on_refresh(&request),
            Some(lifecycle) => lifecycle.on_enter(&request),
            None => NavigationAction::Continue,
        };

        let outcome = match action {
            NavigationAction::Continue => self.commit(kind, method, &request),
            NavigationAction::Deny { reason } => {
                warn_log!(
                    "Transition #{} to '{}' failed, entering '{}': {}",
                    id,
                    request.route_name,
                    self.error_route,
                    reason
                );
                let handle = TransitionHandle::new(id, target.clone(), method);
                let error_route = self.error_route.clone();
                self.context.enter_error(&error_route, Some(handle));
                TransitionOutcome::Failed {
                    route_name: request.route_name,
                    reason,
                }
            }
            NavigationAction::Redirect { to, reason } => {
                debug_log!(
                    "Route '{}' redirecting to '{}': {:?}",
                    request.route_name,
                    to,
                    reason
                );
                return self.execute(
                    id,
                    kind,
                    method,
                    TransitionTarget::Url(to),
                    redirect_depth + 1,
                );
            }
        };

        let transition = Transition::new(id, kind, method, target, outcome);
        self.transitions.push_back(transition.clone());
        self.trim_transition_log();
        Ok(transition)
    }

    fn commit(
        &mut self,
        kind: TransitionKind,
        method: TransitionMethod,
        request: &NavigationRequest,
    ) -> TransitionOutcome {
        match (kind, method) {
            (TransitionKind::Refresh | TransitionKind::Traverse, _) => {}
            (_, TransitionMethod::Push) if self.history.current() != request.to => {
                self.history.push(request.to.clone());
            }
            _ => self.history.replace(request.to.clone()),
        }

        let previous = self.route(self.context.current_route_name()).cloned();
        self.context.complete(&request.route_name, &request.to);

        if let Some(previous) = previous.filter(|route| route.name != request.route_name) {
            if let Some(lifecycle) = &previous.lifecycle {
                lifecycle.on_exit();
            }
        }

        info_log!(
            "Transition committed: route '{}' at '{}' ({:?})",
            request.route_name,
            request.to,
            method
        );
        TransitionOutcome::Completed {
            route_name: request.route_name.clone(),
            url: request.to.clone(),
        }
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryRouter {
    fn go(&mut self, delta: i32) {
        let Some(url) = self.history.peek(delta).map(String::from) else {
            debug_log!("History go({}) is out of range, staying put", delta);
            return;
        };

        let id = self.next_transition_id();
        match self.execute(
            id,
            TransitionKind::Traverse,
            TransitionMethod::Replace,
            TransitionTarget::Url(url),
            0,
        ) {
            Ok(transition) if transition.is_completed() => {
                self.history.go(delta);
                // A redirect may have landed somewhere else
                if self.history.current() != self.context.current_url() {
                    self.history.replace(self.context.current_url().to_string());
                }
            }
            Ok(_) => {
                debug_log!("History go({}) failed into the error route, staying put", delta);
            }
            Err(error) => {
                warn_log!("History go({}) could not be resolved: {}", delta, error);
            }
        }
    }
}

impl Router for MemoryRouter {
    fn context(&self) -> &NavigationContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut NavigationContext {
        &mut self.context
    }

    fn do_transition(
        &mut self,
        route_name: &str,
        models: Vec<RouteModel>,
        query_params: QueryParams,
        method: TransitionMethod,
    ) -> NavResult<Transition> {
        let id = self.next_transition_id();
        let target = TransitionTarget::Route {
            name: route_name.to_string(),
            models,
            query_params,
        };
        self.execute(id, TransitionKind::Navigate, method, target, 0)
    }

    fn do_url_transition(&mut self, method: TransitionMethod, path: &str) -> NavResult<Transition> {
        let id = self.next_transition_id();
        self.execute(
            id,
            TransitionKind::Navigate,
            method,
            TransitionTarget::url(path),
            0,
        )
    }

    fn refresh_route(&mut self, route_name: &str) -> NavResult<Transition> {
        let route = self.find_route(route_name)?;
        let target = if route.name == self.context.current_route_name() {
            TransitionTarget::url(self.context.current_url())
        } else {
            TransitionTarget::route(route_name)
        };

        let id = self.next_transition_id();
        self.execute(
            id,
            TransitionKind::Refresh,
            TransitionMethod::Replace,
            target,
            0,
        )
    }

    fn retry_transition(&mut self, handle: TransitionHandle) -> NavResult<Transition> {
        debug_log!("Retrying transition #{} to {}", handle.id(), handle.target());
        let id = self.next_transition_id();
        let method = handle.method();
        self.execute(
            id,
            TransitionKind::Retry,
            method,
            handle.target().clone(),
            0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::lifecycle_fn;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn router() -> MemoryRouter {
        let mut router = MemoryRouter::new();
        router.add_route(RouteDefinition::new("featured", "/featured"));
        router.add_route(RouteDefinition::new("games", "/games"));
        router.add_route(RouteDefinition::new("channel", "/channel/:channel"));
        router.start("/featured").unwrap();
        router
    }

    #[test]
    fn test_start_replaces_initial_entry() {
        let router = router();
        assert_eq!(router.history().len(), 1);
        assert_eq!(router.history().current(), "/featured");
        assert_eq!(router.context().current_route_name(), "featured");
    }

    #[test]
    fn test_named_transition_builds_url() {
        let mut router = router();
        let transition = router
            .do_transition(
                "channel",
                vec![RouteModel::from("xyz")],
                QueryParams::new(),
                TransitionMethod::Push,
            )
            .unwrap();

        assert_eq!(transition.url(), Some("/channel/xyz"));
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let mut router = router();
        router
            .do_url_transition(TransitionMethod::Replace, "/games")
            .unwrap();

        assert_eq!(router.history().len(), 1);
        assert_eq!(router.context().current_url(), "/games");
    }

    #[test]
    fn test_query_string_is_canonical() {
        let mut router = router();
        router
            .do_url_transition(TransitionMethod::Push, "/games/?sort=name&page=2")
            .unwrap();

        assert_eq!(router.context().current_url(), "/games?page=2&sort=name");
    }

    #[test]
    fn test_unknown_route_and_url() {
        let mut router = router();
        let error = router
            .do_transition("nope", Vec::new(), QueryParams::new(), TransitionMethod::Push)
            .unwrap_err();
        assert_eq!(
            error,
            NavigationError::RouteNotFound {
                name: "nope".to_string()
            }
        );

        let error = router
            .do_url_transition(TransitionMethod::Push, "/nope")
            .unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(router.context().current_route_name(), "featured");
    }

    #[test]
    fn test_denied_enter_parks_retry_handle() {
        let mut router = router();
        router.add_route(
            RouteDefinition::new("offline", "/offline")
                .lifecycle(lifecycle_fn(|_| NavigationAction::deny("offline"))),
        );

        let transition = router
            .do_url_transition(TransitionMethod::Push, "/offline")
            .unwrap();

        assert!(transition.is_failed());
        let context = router.context();
        assert_eq!(context.current_route_name(), "error");
        assert_eq!(context.current_url(), "/featured");
        assert_eq!(context.last_route_name(), Some("featured"));
        assert_eq!(
            context.error_transition().map(TransitionHandle::id),
            Some(transition.id())
        );
    }

    #[test]
    fn test_retry_reissues_target() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);

        let mut router = router();
        router.add_route(RouteDefinition::new("flaky", "/flaky").lifecycle(lifecycle_fn(
            move |_| {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    NavigationAction::deny("timeout")
                } else {
                    NavigationAction::Continue
                }
            },
        )));

        router
            .do_url_transition(TransitionMethod::Push, "/flaky")
            .unwrap();
        let handle = router.context_mut().take_error_transition().unwrap();
        let transition = handle.retry(&mut router).unwrap();

        assert_eq!(transition.kind(), TransitionKind::Retry);
        assert!(transition.is_completed());
        assert_eq!(router.context().current_route_name(), "flaky");
        assert!(router.context().last_route_name().is_none());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_refresh_reruns_model_without_history_entry() {
        let refreshes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&refreshes);

        let mut router = MemoryRouter::new();
        router.add_route(RouteDefinition::new("games", "/games").lifecycle(lifecycle_fn(
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                NavigationAction::Continue
            },
        )));
        router.start("/games").unwrap();

        let transition = router.refresh_route("games").unwrap();

        assert_eq!(transition.kind(), TransitionKind::Refresh);
        assert_eq!(refreshes.load(Ordering::SeqCst), 2);
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_refresh_unknown_route_propagates() {
        let mut router = router();
        let error = router.refresh_route("missing").unwrap_err();
        assert!(matches!(error, NavigationError::RouteNotFound { .. }));
    }

    #[test]
    fn test_redirect_loop_is_reported() {
        let mut router = MemoryRouter::new();
        router.add_route(
            RouteDefinition::new("a", "/a")
                .lifecycle(lifecycle_fn(|_| NavigationAction::redirect("/b"))),
        );
        router.add_route(
            RouteDefinition::new("b", "/b")
                .lifecycle(lifecycle_fn(|_| NavigationAction::redirect("/a"))),
        );

        let error = router
            .do_url_transition(TransitionMethod::Push, "/a")
            .unwrap_err();
        assert!(matches!(error, NavigationError::RedirectLoop { depth: 5, .. }));
    }

    #[test]
    fn test_history_go_traverses_without_rewriting() {
        let mut router = router();
        router
            .do_url_transition(TransitionMethod::Push, "/games")
            .unwrap();

        router.go(-1);
        assert_eq!(router.context().current_route_name(), "featured");
        assert_eq!(router.history().len(), 2);

        router.go(1);
        assert_eq!(router.context().current_url(), "/games");

        router.go(7);
        assert_eq!(router.context().current_url(), "/games");
    }

    #[test]
    fn test_history_go_denied_by_can_deactivate_keeps_cursor() {
        struct UnsavedEditor;

        impl RouteLifecycle for UnsavedEditor {
            fn on_enter(&self, _request: &NavigationRequest) -> NavigationAction {
                NavigationAction::Continue
            }

            fn can_deactivate(&self, _request: &NavigationRequest) -> NavigationAction {
                NavigationAction::deny("unsaved changes")
            }
        }

        let mut router = router();
        router.add_route(RouteDefinition::new("editor", "/editor").lifecycle(UnsavedEditor));
        router
            .do_url_transition(TransitionMethod::Push, "/editor")
            .unwrap();

        router.go(-1);

        assert_eq!(router.history().current(), "/editor");
        assert_eq!(router.history().position(), 1);
        assert_eq!(router.context().current_url(), "/editor");
    }

    #[test]
    fn test_history_go_to_unresolvable_entry_keeps_cursor() {
        let mut router = MemoryRouter::new();
        router.add_route(RouteDefinition::new("games", "/games"));
        router.history = HistoryStack::new("/gone");
        router
            .do_url_transition(TransitionMethod::Push, "/games")
            .unwrap();

        router.go(-1);

        assert_eq!(router.history().current(), "/games");
        assert_eq!(router.context().current_url(), "/games");
    }

    #[test]
    fn test_history_go_follows_redirect() {
        let mut router = router();
        router
            .do_url_transition(TransitionMethod::Push, "/games")
            .unwrap();
        router.add_route(
            RouteDefinition::new("moved", "/moved")
                .lifecycle(lifecycle_fn(|_| NavigationAction::redirect("/featured"))),
        );
        router.history.replace("/moved".to_string());
        router.go(0);

        assert_eq!(router.context().current_url(), "/featured");
        assert_eq!(router.history().current(), "/featured");
    }

    #[test]
    fn test_model_with_reserved_characters_round_trips() {
        let mut router = router();
        let transition = router
            .do_transition(
                "channel",
                vec![RouteModel::from("a/b")],
                QueryParams::new(),
                TransitionMethod::Push,
            )
            .unwrap();

        assert_eq!(transition.url(), Some("/channel/a%2Fb"));
        assert_eq!(router.context().current_route_name(), "channel");

        let refreshed = router.refresh_route("channel").unwrap();
        assert!(refreshed.is_completed());

        router
            .do_url_transition(TransitionMethod::Push, "/games")
            .unwrap();
        router.go(-1);
        assert_eq!(router.context().current_url(), "/channel/a%2Fb");
    }

    #[test]
    fn test_transition_log_is_bounded() {
        let mut router = router().with_transition_log_limit(3);
        for _ in 0..5 {
            router
                .do_url_transition(TransitionMethod::Push, "/games")
                .unwrap();
        }

        let ids: Vec<usize> = router.transitions().map(Transition::id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids.last().copied(), Some(router.next_id));
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[cfg(feature = "cache")]
    #[test]
    fn test_url_resolution_is_cached() {
        let mut router = router();
        router
            .do_url_transition(TransitionMethod::Push, "/games")
            .unwrap();
        router
            .do_url_transition(TransitionMethod::Push, "/featured")
            .unwrap();
        router
            .do_url_transition(TransitionMethod::Push, "/games")
            .unwrap();

        assert!(router.cache_stats().hits >= 2);
    }
}
