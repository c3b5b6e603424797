//! Test utilities for navigation policy tests
//!
//! Provides fake collaborators, a recording router and a preconfigured
//! in-memory router.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use stream_navigator::*;

/// Initialize test logging once; repeated calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Browser
// ============================================================================

/// External browser that records every URL it is asked to open.
#[derive(Debug, Clone, Default)]
pub struct RecordingBrowser {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ExternalBrowser for RecordingBrowser {
    fn open(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

// ============================================================================
// ProbeRouter
// ============================================================================

/// A call received by [`ProbeRouter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterCall {
    Transition {
        route_name: String,
        models: Vec<RouteModel>,
        query_params: QueryParams,
        method: TransitionMethod,
    },
    UrlTransition {
        method: TransitionMethod,
        path: String,
    },
    RefreshRoute(String),
    /// Retry of the handle with this id; the flag tells whether the context
    /// still held an error handle at the time.
    Retry { id: usize, handle_in_context: bool },
    Go(i32),
}

/// Router that records calls and otherwise leaves the context alone.
#[derive(Debug, Clone, Default)]
pub struct ProbeRouter {
    context: NavigationContext,
    calls: Vec<RouterCall>,
    next_id: usize,
}

impl ProbeRouter {
    pub fn new(context: NavigationContext) -> Self {
        Self {
            context,
            calls: Vec::new(),
            next_id: 100,
        }
    }

    /// Router at `route_name`/`url` that is not in error.
    pub fn at(route_name: &str, url: &str) -> Self {
        Self::new(NavigationContext::new(route_name, url))
    }

    /// Router that failed out of `route_name`/`url` into the error route.
    pub fn in_error(route_name: &str, url: &str, handle: Option<TransitionHandle>) -> Self {
        let mut context = NavigationContext::new(route_name, url);
        context.enter_error("error", handle);
        Self::new(context)
    }

    pub fn calls(&self) -> &[RouterCall] {
        &self.calls
    }

    fn completed(&mut self, kind: TransitionKind, method: TransitionMethod, target: TransitionTarget) -> Transition {
        self.next_id += 1;
        let outcome = TransitionOutcome::Completed {
            route_name: target.to_string(),
            url: target.to_string(),
        };
        Transition::new(self.next_id, kind, method, target, outcome)
    }
}

impl History for ProbeRouter {
    fn go(&mut self, delta: i32) {
        self.calls.push(RouterCall::Go(delta));
    }
}

impl Router for ProbeRouter {
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
        if route_name == "missing" {
            return Err(NavigationError::RouteNotFound {
                name: route_name.to_string(),
            });
        }
        self.calls.push(RouterCall::Transition {
            route_name: route_name.to_string(),
            models: models.clone(),
            query_params: query_params.clone(),
            method,
        });
        let target = TransitionTarget::Route {
            name: route_name.to_string(),
            models,
            query_params,
        };
        Ok(self.completed(TransitionKind::Navigate, method, target))
    }

    fn do_url_transition(&mut self, method: TransitionMethod, path: &str) -> NavResult<Transition> {
        self.calls.push(RouterCall::UrlTransition {
            method,
            path: path.to_string(),
        });
        Ok(self.completed(TransitionKind::Navigate, method, TransitionTarget::url(path)))
    }

    fn refresh_route(&mut self, route_name: &str) -> NavResult<Transition> {
        if route_name == "missing" {
            return Err(NavigationError::RouteNotFound {
                name: route_name.to_string(),
            });
        }
        self.calls.push(RouterCall::RefreshRoute(route_name.to_string()));
        Ok(self.completed(
            TransitionKind::Refresh,
            TransitionMethod::Replace,
            TransitionTarget::route(route_name),
        ))
    }

    fn retry_transition(&mut self, handle: TransitionHandle) -> NavResult<Transition> {
        self.calls.push(RouterCall::Retry {
            id: handle.id(),
            handle_in_context: self.context.error_transition().is_some(),
        });
        Ok(self.completed(TransitionKind::Retry, handle.method(), handle.target().clone()))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Handle for a failed push to the `games` route.
pub fn games_handle(id: usize) -> TransitionHandle {
    TransitionHandle::new(id, TransitionTarget::route("games"), TransitionMethod::Push)
}

/// Policy over `router` with empty settings and the Twitch resolver.
pub fn policy<R: Router>(router: R) -> (NavigationPolicy<R>, RecordingBrowser) {
    policy_with_settings(router, MapSettings::new())
}

/// Policy over `router` with the given settings and the Twitch resolver.
pub fn policy_with_settings<R: Router>(
    router: R,
    settings: MapSettings,
) -> (NavigationPolicy<R>, RecordingBrowser) {
    init_logging();
    let browser = RecordingBrowser::new();
    let policy = NavigationPolicy::new(
        router,
        settings,
        ChannelUrlResolver::twitch(),
        browser.clone(),
    );
    (policy, browser)
}

/// In-memory router with the streaming app's routes, started at `/featured`.
pub fn streaming_router() -> MemoryRouter {
    let mut router = MemoryRouter::new();
    router.add_route(RouteDefinition::new("featured", "/featured"));
    router.add_route(RouteDefinition::new("games", "/games"));
    router.add_route(RouteDefinition::new("game", "/game/:game"));
    router.add_route(RouteDefinition::new("channel", "/channel/:channel"));
    router.add_route(RouteDefinition::new("settings", "/settings"));
    router.add_route(RouteDefinition::new("error", "/error"));
    router.start("/featured").unwrap();
    router
}
