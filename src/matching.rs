//! Segment-based URL matching and URL generation.
//!
//! Route patterns are plain paths whose `:name` segments are dynamic:
//!
//! ```text
//! /featured
//! /channel/:channel
//! /settings/:submenu
//! ```
//!
//! - [`match_path`] decides whether a URL path matches a pattern exactly and
//!   extracts the dynamic segment values.
//! - [`build_path`] goes the other way, filling the dynamic segments with
//!   route models in order.
//!
//! Paths are compared after [`normalize_path`]: leading slash ensured,
//! trailing and doubled slashes removed, empty path is root.

use crate::params::{QueryParams, RouteModel, RouteParams};
use crate::{NavResult, NavigationError};
use std::borrow::Cow;
use urlencoding::{decode, encode};

/// Route a URL path resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    /// Name of the matched route
    pub route_name: String,
    /// Dynamic segment values
    pub params: RouteParams,
}

impl ResolvedUrl {
    pub fn new(route_name: impl Into<String>, params: RouteParams) -> Self {
        Self {
            route_name: route_name.into(),
            params,
        }
    }
}

/// Normalize a path for consistent comparison
///
/// # Examples
///
/// ```
/// use stream_navigator::matching::normalize_path;
///
/// assert_eq!(normalize_path("/games"), "/games");
/// assert_eq!(normalize_path("games"), "/games");
/// assert_eq!(normalize_path("/games/"), "/games");
/// assert_eq!(normalize_path("//games"), "/games");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let already_normal = path.starts_with('/')
        && (path == "/" || !path.ends_with('/'))
        && !path.contains("//");
    if already_normal {
        return Cow::Borrowed(path);
    }

    let segments = split_path(path);
    if segments.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", segments.join("/")))
    }
}

/// Split a URL into its path and its query string (without the `?`).
///
/// ```
/// use stream_navigator::matching::split_url;
///
/// assert_eq!(split_url("/settings?tab=x"), ("/settings", "tab=x"));
/// assert_eq!(split_url("/settings"), ("/settings", ""));
/// ```
pub fn split_url(url: &str) -> (&str, &str) {
    url.split_once('?').unwrap_or((url, ""))
}

/// Join a path and a query mapping into a URL.
///
/// ```
/// use stream_navigator::matching::join_url;
/// use stream_navigator::QueryParams;
///
/// assert_eq!(join_url("/settings", &QueryParams::new()), "/settings");
/// assert_eq!(join_url("/settings", &QueryParams::new().with("tab", "x")), "/settings?tab=x");
/// ```
pub fn join_url(path: &str, query: &QueryParams) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.to_query_string())
    }
}

/// Split a path into segments, filtering empty segments
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Extract parameter name from a route segment
pub fn extract_param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(':')
}

/// Number of dynamic segments in a pattern.
pub fn dynamic_segment_count(pattern: &str) -> usize {
    split_path(pattern)
        .into_iter()
        .filter(|segment| extract_param_name(segment).is_some())
        .count()
}

/// Match a full path against a route pattern, extracting parameters
///
/// Unlike prefix matching, every segment must be consumed on both sides.
///
/// ```
/// use stream_navigator::matching::match_path;
///
/// let params = match_path("/channel/xyz", "/channel/:channel").unwrap();
/// assert_eq!(params.get("channel"), Some(&"xyz".to_string()));
///
/// assert!(match_path("/channel/xyz/videos", "/channel/:channel").is_none());
/// ```
pub fn match_path(path: &str, pattern: &str) -> Option<RouteParams> {
    let path_segments = split_path(path);
    let pattern_segments = split_path(pattern);

    if path_segments.len() != pattern_segments.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (pattern_seg, path_seg) in pattern_segments.iter().zip(path_segments.iter()) {
        if let Some(name) = extract_param_name(pattern_seg) {
            params.insert(name.to_string(), decode_segment(path_seg));
        } else if pattern_seg != path_seg {
            return None;
        }
    }

    Some(params)
}

/// Build a URL path from a pattern, filling dynamic segments with `models`.
///
/// The number of models must equal the number of dynamic segments. Model
/// identifiers are percent-encoded, so `a/b` fills one segment as `a%2Fb`.
///
/// ```
/// use stream_navigator::matching::build_path;
/// use stream_navigator::RouteModel;
///
/// let path = build_path("/channel/:channel", &[RouteModel::from("xyz")]).unwrap();
/// assert_eq!(path, "/channel/xyz");
/// ```
pub fn build_path(pattern: &str, models: &[RouteModel]) -> NavResult<String> {
    let expected = dynamic_segment_count(pattern);
    if expected != models.len() {
        return Err(NavigationError::InvalidParams {
            message: format!(
                "pattern '{}' takes {} model(s), {} given",
                pattern,
                expected,
                models.len()
            ),
        });
    }

    let mut models = models.iter();
    let segments: Vec<Cow<'_, str>> = split_path(pattern)
        .into_iter()
        .map(|segment| match extract_param_name(segment) {
            Some(_) => models
                .next()
                .map_or(Cow::Borrowed(segment), |model| encode(model.id())),
            None => Cow::Borrowed(segment),
        })
        .collect();

    Ok(format!("/{}", segments.join("/")))
}

/// Percent-decode a path segment. Invalid UTF-8 keeps the segment as is.
fn decode_segment(segment: &str) -> String {
    decode(segment).map_or_else(|_| segment.to_string(), Cow::into_owned)
}
