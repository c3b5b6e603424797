//! Navigation policy.
//!
//! [`NavigationPolicy`] sits between UI callers and a [`Router`]. It decides
//! what a navigation request means before anything is delegated:
//!
//! | Request | Current state | Result |
//! |---------|---------------|--------|
//! | bare URL-like target (`""` or `/...`) | equals current URL | refresh |
//! | bare URL-like target | differs | URL transition with the literal path |
//! | bare route name | equals current route | refresh |
//! | anything else | any | named transition (push, or replace if asked) |
//!
//! A request is *bare* when it carries nothing but its target: no models,
//! no query parameters, no replace flag. Only bare requests can turn into a
//! refresh, and the URL check always runs before the route-name check.
//!
//! Refreshing while the router sits on its error route recovers instead:
//! the pending retry handle is taken out of the context and retried, or,
//! without a handle, the last good route is navigated to again.
//!
//! # Example
//!
//! ```
//! use stream_navigator::*;
//!
//! let mut router = MemoryRouter::new();
//! router.add_route(RouteDefinition::new("featured", "/featured"));
//! router.add_route(RouteDefinition::new("channel", "/channel/:channel"));
//! router.start("/featured").unwrap();
//!
//! let mut policy = NavigationPolicy::new(
//!     router,
//!     MapSettings::new(),
//!     ChannelUrlResolver::twitch(),
//!     browser_fn(|_url| {}),
//! );
//!
//! // Same location again: refresh instead of a no-op transition.
//! let transition = policy.transition_to("/featured").unwrap().unwrap();
//! assert_eq!(transition.kind(), TransitionKind::Refresh);
//!
//! // Deep link to a stream opens it in the app.
//! policy
//!     .open_browser_or_transition_to_channel(Some("https://www.twitch.tv/xyz"))
//!     .unwrap();
//! assert_eq!(policy.context().current_url(), "/channel/xyz");
//! ```

use crate::collaborators::{ExternalBrowser, SettingsStore};
use crate::config::PolicyConfig;
use crate::deeplink::StreamResolver;
use crate::params::{QueryParams, QueryParamsInput, RouteModel};
use crate::router::Router;
use crate::transition::{Transition, TransitionMethod};
use crate::{debug_log, info_log, warn_log, NavResult, NavigationContext, NavigationError};
use std::sync::Arc;

// ============================================================================
// TransitionRequest
// ============================================================================

/// A navigation request as issued by the UI.
///
/// ```
/// use stream_navigator::{QueryParams, TransitionRequest};
///
/// let bare = TransitionRequest::new("games");
/// assert!(bare.is_bare());
///
/// let full = TransitionRequest::new("settings")
///     .query_params(QueryParams::new().with("tab", "x"))
///     .replace(true);
/// assert!(!full.is_bare());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    target: String,
    models: Option<Vec<RouteModel>>,
    query_params: Option<QueryParamsInput>,
    replace: Option<bool>,
}

impl TransitionRequest {
    /// Request for a route name or URL path, with nothing else attached.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            models: None,
            query_params: None,
            replace: None,
        }
    }

    /// Set the route models.
    pub fn models<I, M>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<RouteModel>,
    {
        self.models = Some(models.into_iter().map(Into::into).collect());
        self
    }

    /// Append a single route model.
    pub fn model(mut self, model: impl Into<RouteModel>) -> Self {
        self.models.get_or_insert_with(Vec::new).push(model.into());
        self
    }

    /// Set the query parameters, plain or wrapped.
    pub fn query_params(mut self, query_params: impl Into<QueryParamsInput>) -> Self {
        self.query_params = Some(query_params.into());
        self
    }

    /// Ask for replace-history semantics.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Check if the request carries nothing but its target
    pub fn is_bare(&self) -> bool {
        self.models.is_none() && self.query_params.is_none() && self.replace.is_none()
    }
}

impl From<&str> for TransitionRequest {
    fn from(target: &str) -> Self {
        Self::new(target)
    }
}

impl From<String> for TransitionRequest {
    fn from(target: String) -> Self {
        Self::new(target)
    }
}

// ============================================================================
// Decision
// ============================================================================

/// What a [`TransitionRequest`] resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Re-assert the current location
    Refresh,
    /// Navigate to a literal URL path
    UrlTransition { path: String },
    /// Navigate to a named route
    RouteTransition {
        route_name: String,
        models: Vec<RouteModel>,
        query_params: QueryParams,
        method: TransitionMethod,
    },
}

/// Check if `target` looks like a URL path rather than a route name.
///
/// The empty string counts as a URL path.
pub fn resembles_url(target: &str) -> bool {
    target.is_empty() || target.starts_with('/')
}

/// Classify a request against the current navigation state.
///
/// ```
/// use stream_navigator::{decide, NavigationContext, NavigationDecision, TransitionRequest};
///
/// let context = NavigationContext::new("games", "/games");
///
/// assert_eq!(decide(&context, TransitionRequest::new("games")), NavigationDecision::Refresh);
/// assert_eq!(decide(&context, TransitionRequest::new("/games")), NavigationDecision::Refresh);
/// assert_eq!(
///     decide(&context, TransitionRequest::new("")),
///     NavigationDecision::UrlTransition { path: String::new() },
/// );
/// ```
pub fn decide(context: &NavigationContext, request: TransitionRequest) -> NavigationDecision {
    if request.is_bare() {
        if resembles_url(&request.target) {
            if request.target == context.current_url() {
                return NavigationDecision::Refresh;
            }
            return NavigationDecision::UrlTransition {
                path: request.target,
            };
        }
        if request.target == context.current_route_name() {
            return NavigationDecision::Refresh;
        }
    }

    NavigationDecision::RouteTransition {
        route_name: request.target,
        models: request.models.unwrap_or_default(),
        query_params: request
            .query_params
            .map(QueryParamsInput::into_query_params)
            .unwrap_or_default(),
        method: TransitionMethod::from_replace(request.replace.unwrap_or(false)),
    }
}

/// Coerce an integer-like history action to a signed delta.
///
/// Surrounding whitespace is ignored, an empty action is zero and a leading
/// sign is kept. Fractional values such as `"1.5"` are rejected instead of
/// being truncated toward zero.
///
/// ```
/// use stream_navigator::parse_history_delta;
///
/// assert_eq!(parse_history_delta("-1").unwrap(), -1);
/// assert_eq!(parse_history_delta(" +2 ").unwrap(), 2);
/// assert_eq!(parse_history_delta("").unwrap(), 0);
/// assert!(parse_history_delta("back").is_err());
/// ```
pub fn parse_history_delta(action: &str) -> NavResult<i32> {
    let trimmed = action.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| NavigationError::InvalidHistoryDelta {
            value: action.to_string(),
        })
}

// ============================================================================
// NavigationPolicy
// ============================================================================

/// Navigation policy over a router and its collaborators.
///
/// Constructed once at application start; callers hold it explicitly.
pub struct NavigationPolicy<R: Router> {
    router: R,
    settings: Arc<dyn SettingsStore>,
    resolver: Arc<dyn StreamResolver>,
    browser: Arc<dyn ExternalBrowser>,
    config: PolicyConfig,
}

impl<R: Router> NavigationPolicy<R> {
    /// Create a policy with the default [`PolicyConfig`].
    pub fn new(
        router: R,
        settings: impl SettingsStore,
        resolver: impl StreamResolver,
        browser: impl ExternalBrowser,
    ) -> Self {
        Self {
            router,
            settings: Arc::new(settings),
            resolver: Arc::new(resolver),
            browser: Arc::new(browser),
            config: PolicyConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: PolicyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    /// Give the router back.
    pub fn into_router(self) -> R {
        self.router
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Navigation state of the underlying router.
    pub fn context(&self) -> &NavigationContext {
        self.router.context()
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Navigate to a route name or URL path.
    ///
    /// Returns `Ok(None)` only when the request resolves to a refresh that
    /// has nothing to do.
    pub fn transition_to(
        &mut self,
        request: impl Into<TransitionRequest>,
    ) -> NavResult<Option<Transition>> {
        let decision = decide(self.router.context(), request.into());
        self.dispatch(decision)
    }

    fn dispatch(&mut self, decision: NavigationDecision) -> NavResult<Option<Transition>> {
        match decision {
            NavigationDecision::Refresh => {
                debug_log!(
                    "Request re-asserts the current location '{}'",
                    self.router.context().current_url()
                );
                self.refresh()
            }
            NavigationDecision::UrlTransition { path } => {
                debug_log!("Request for '{}' is a url transition", path);
                self.router
                    .do_url_transition(TransitionMethod::Push, &path)
                    .map(Some)
            }
            NavigationDecision::RouteTransition {
                route_name,
                models,
                query_params,
                method,
            } => {
                debug_log!(
                    "Request for '{}' is a named transition ({} model(s), {:?})",
                    route_name,
                    models.len(),
                    method
                );
                self.router
                    .do_transition(&route_name, models, query_params, method)
                    .map(Some)
            }
        }
    }

    /// Named transition, never turned into a refresh.
    pub fn transition_to_route<I, M>(
        &mut self,
        route_name: &str,
        models: I,
        query_params: impl Into<QueryParamsInput>,
    ) -> NavResult<Transition>
    where
        I: IntoIterator<Item = M>,
        M: Into<RouteModel>,
    {
        let models = models.into_iter().map(Into::into).collect();
        let query_params = query_params.into().into_query_params();
        self.router
            .do_transition(route_name, models, query_params, TransitionMethod::Push)
    }

    /// URL transition with the literal path, never turned into a refresh.
    pub fn transition_to_url(&mut self, path: &str) -> NavResult<Transition> {
        self.router.do_url_transition(TransitionMethod::Push, path)
    }

    /// Re-assert the current location. Same as [`refresh`](Self::refresh).
    pub fn revisit(&mut self) -> NavResult<Option<Transition>> {
        self.refresh()
    }

    /// Refresh the current route, or recover from the error route.
    ///
    /// On the error route the pending retry handle is removed from the
    /// context before it is retried. Without a handle the last good route is
    /// navigated to; without either, nothing happens.
    pub fn refresh(&mut self) -> NavResult<Option<Transition>> {
        let context = self.router.context();
        if !context.is_in_error(&self.config.error_route) {
            let route_name = context.current_route_name().to_string();
            debug_log!("Refreshing route '{}'", route_name);
            return self.router.refresh_route(&route_name).map(Some);
        }

        if let Some(handle) = self.router.context_mut().take_error_transition() {
            info_log!("Retrying failed transition #{} to {}", handle.id(), handle.target());
            return handle.retry(&mut self.router).map(Some);
        }

        match self.router.context().last_route_name().map(String::from) {
            Some(last) if last == self.config.error_route => {
                warn_log!("Last route is the error route itself, nothing to recover");
                Ok(None)
            }
            Some(last) => {
                debug_log!("No transition to retry, returning to '{}'", last);
                match decide(self.router.context(), TransitionRequest::new(last.clone())) {
                    // A url-like route name equal to the current url would
                    // only come back here
                    NavigationDecision::Refresh => self
                        .router
                        .do_transition(&last, Vec::new(), QueryParams::new(), TransitionMethod::Push)
                        .map(Some),
                    decision => self.dispatch(decision),
                }
            }
            None => {
                debug_log!("Error route has nothing to recover");
                Ok(None)
            }
        }
    }

    // ========================================================================
    // History and homepage
    // ========================================================================

    /// Move `delta` entries through history.
    pub fn history(&mut self, delta: i32) {
        debug_log!("History go({})", delta);
        self.router.go(delta);
    }

    /// [`history`](Self::history) with an integer-like string.
    pub fn history_action(&mut self, action: &str) -> NavResult<()> {
        let delta = parse_history_delta(action)?;
        self.history(delta);
        Ok(())
    }

    /// Navigate to the configured homepage.
    ///
    /// With `no_history_entry` the current history entry is replaced.
    /// Homepage values are URL paths and go straight to the router.
    pub fn homepage(&mut self, no_history_entry: bool) -> NavResult<Transition> {
        let homepage = self
            .settings
            .get(&self.config.homepage_key)
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| self.config.default_homepage.clone());
        let method = TransitionMethod::from_replace(no_history_entry);

        debug_log!("Homepage '{}' ({:?})", homepage, method);
        self.router.do_url_transition(method, &homepage)
    }

    // ========================================================================
    // Deep links
    // ========================================================================

    /// Open a stream link in the app, or any other link in the browser.
    ///
    /// Missing or empty URLs are ignored.
    pub fn open_browser_or_transition_to_channel(
        &mut self,
        url: Option<&str>,
    ) -> NavResult<Option<Transition>> {
        let Some(url) = url.filter(|url| !url.is_empty()) else {
            return Ok(None);
        };

        match self.resolver.stream_from_url(url) {
            Some(stream) => {
                debug_log!("'{}' resolves to stream '{}'", url, stream);
                let request = TransitionRequest::new(self.config.channel_route.clone()).model(stream);
                self.transition_to(request)
            }
            None => {
                info_log!("Opening '{}' in the external browser", url);
                self.browser.open(url);
                Ok(None)
            }
        }
    }
}

impl<R: Router + std::fmt::Debug> std::fmt::Debug for NavigationPolicy<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationPolicy")
            .field("router", &self.router)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
