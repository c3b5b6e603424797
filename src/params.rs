//! Route parameters, query parameters and route models.
//!
//! - [`RouteParams`]: values captured from dynamic segments (`:channel` in
//!   `/channel/:channel`).
//! - [`QueryParams`]: the `?key=value&...` part of a URL. Keys are kept
//!   sorted so that serializing the same mapping always yields the same URL.
//! - [`QueryParamsInput`]: what callers hand to a named transition: either a
//!   plain mapping or a wrapper carrying a `query_params` field. Both
//!   normalize to the same [`QueryParams`].
//! - [`RouteModel`]: a model object for a route, carried by its identifier.
//!   Models fill a route's dynamic segments in order.
//!
//! # Example
//!
//! ```
//! use stream_navigator::{QueryParams, QueryParamsInput};
//!
//! let plain = QueryParams::new().with("tab", "x");
//! let wrapped = QueryParamsInput::wrapped(plain.clone());
//!
//! assert_eq!(wrapped.into_query_params(), plain);
//! assert_eq!(plain.to_query_string(), "tab=x");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Values captured by a route pattern's dynamic segments.
///
/// ```
/// use stream_navigator::RouteParams;
///
/// // `/channel/foo` against `/channel/:channel`
/// let mut params = RouteParams::new();
/// params.insert("channel".to_string(), "foo".to_string());
///
/// assert_eq!(params.get("channel"), Some(&"foo".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Parsed value of `key`; `None` when absent or unparsable.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Set `key`, replacing an earlier capture.
    pub fn insert(&mut self, key: String, value: String) {
        self.params.insert(key, value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.params.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }
}

// ============================================================================
// Route models
// ============================================================================

/// A route model, identified by the value it contributes to the URL.
///
/// Named transitions take an ordered sequence of models; the router fills
/// the route's dynamic segments with them, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteModel(String);

impl RouteModel {
    /// Create a model from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier used to fill a dynamic segment.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteModel {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RouteModel {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Query mapping
// ============================================================================

/// Query mapping of a URL, multi-valued and ordered by key.
///
/// ```
/// use stream_navigator::QueryParams;
///
/// let query = QueryParams::from_query_string("page=1&sort=name&tag=rust&tag=video");
///
/// assert_eq!(query.get("page"), Some(&"1".to_string()));
/// assert_eq!(query.get_as::<i32>("page"), Some(1));
/// assert_eq!(query.get_all("tag").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `a=1&b=2`, with or without the leading `?`.
    ///
    /// Pairs without `=` are skipped.
    pub fn from_query_string(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(key, value)| (decode_uri_component(key), decode_uri_component(value)))
            .collect()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)?.first()
    }

    pub fn get_all(&self, key: &str) -> Option<&Vec<String>> {
        self.params.get(key)
    }

    /// First value of `key`, parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.get(key)?.parse().ok()
    }

    /// Add a value under `key`, after any values already there.
    pub fn insert(&mut self, key: String, value: String) {
        self.params.entry(key).or_default().push(value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Canonical query string: keys sorted, values in insertion order.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in &self.params {
            let key = encode_uri_component(key);
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&key);
                query.push('=');
                query.push_str(&encode_uri_component(value));
            }
        }
        query
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |query, (key, value)| query.with(key, value))
    }
}

/// Query parameters as supplied by a caller.
///
/// Callers pass either the mapping itself or an options object that wraps
/// it in a `query_params` field. A wrapper is unwrapped, a plain mapping is
/// used as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParamsInput {
    /// The mapping itself
    Plain(QueryParams),
    /// An options wrapper exposing the mapping as `query_params`
    Wrapped { query_params: QueryParams },
}

impl QueryParamsInput {
    /// Wrap a mapping in an options object.
    pub fn wrapped(query_params: QueryParams) -> Self {
        Self::Wrapped { query_params }
    }

    /// Normalize to the mapping that is handed to the router.
    pub fn into_query_params(self) -> QueryParams {
        match self {
            Self::Plain(query_params) | Self::Wrapped { query_params } => query_params,
        }
    }
}

impl From<QueryParams> for QueryParamsInput {
    fn from(query_params: QueryParams) -> Self {
        Self::Plain(query_params)
    }
}

/// Percent-encode everything outside the unreserved set.
fn encode_uri_component(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Decode `%XX` sequences and `+`; malformed escapes are kept verbatim.
fn decode_uri_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
