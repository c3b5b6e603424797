//! # stream-navigator
//!
//! Navigation policy for streaming-client UIs.
//!
//! The crate decides what a navigation request means before handing it to a
//! router: revisiting the current location refreshes it, URL-looking targets
//! become URL transitions, refreshing the error route retries whatever failed,
//! and links to a stream open the stream in the app instead of the browser.
//!
//! ## Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`policy`] | [`NavigationPolicy`], [`TransitionRequest`], [`decide`] |
//! | [`router`] | [`Router`] / [`History`] traits, [`MemoryRouter`] |
//! | [`context`] | [`NavigationContext`], [`NavigationRequest`] |
//! | [`transition`] | [`Transition`], [`TransitionHandle`] |
//! | [`lifecycle`] | [`RouteLifecycle`] hooks |
//! | [`deeplink`] | [`StreamResolver`], [`ChannelUrlResolver`] |
//! | [`collaborators`] | [`SettingsStore`], [`ExternalBrowser`] |
//! | [`submenu`] | settings submenu routes |
//!
//! ## Quick start
//!
//! ```
//! use stream_navigator::*;
//!
//! let mut router = MemoryRouter::new();
//! router.add_route(RouteDefinition::new("featured", "/featured"));
//! router.add_route(RouteDefinition::new("games", "/games"));
//! router.start("/featured").unwrap();
//!
//! let settings = MapSettings::new().with("gui_homepage", "/games");
//! let mut policy = NavigationPolicy::new(
//!     router,
//!     settings,
//!     ChannelUrlResolver::twitch(),
//!     browser_fn(|_url| {}),
//! );
//!
//! policy.homepage(false).unwrap();
//! assert_eq!(policy.context().current_url(), "/games");
//!
//! policy.history(-1);
//! assert_eq!(policy.context().current_url(), "/featured");
//! ```
//!
//! ## Features
//!
//! - `log` (default): logging through the `log` crate
//! - `tracing`: logging through `tracing` instead
//! - `cache` (default): LRU cache for URL resolution in [`MemoryRouter`]

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
pub mod logging;

#[cfg(feature = "cache")]
pub mod cache;
pub mod collaborators;
pub mod config;
pub mod context;
pub mod deeplink;
pub mod error;
pub mod lifecycle;
pub mod matching;
pub mod params;
pub mod policy;
pub mod router;
pub mod state;
pub mod submenu;
pub mod transition;

pub use collaborators::{browser_fn, ExternalBrowser, FnBrowser, MapSettings, SettingsStore};
pub use config::PolicyConfig;
pub use context::{NavigationContext, NavigationRequest};
pub use deeplink::{resolver_fn, ChannelUrlResolver, FnResolver, StreamResolver};
pub use error::{NavResult, NavigationError};
pub use lifecycle::{lifecycle_fn, FnLifecycle, NavigationAction, RouteLifecycle};
pub use params::{QueryParams, QueryParamsInput, RouteModel, RouteParams};
pub use policy::{
    decide, parse_history_delta, resembles_url, NavigationDecision, NavigationPolicy,
    TransitionRequest,
};
pub use router::{History, MemoryRouter, RouteDefinition, Router};
pub use state::HistoryStack;
pub use submenu::{SettingsMenuState, SettingsSubmenu};
pub use transition::{
    Transition, TransitionHandle, TransitionKind, TransitionMethod, TransitionOutcome,
    TransitionTarget,
};
