//! Deep-link resolution.
//!
//! Decides whether an external URL points at something the app can show
//! itself. [`ChannelUrlResolver`] recognizes channel pages on Twitch:
//!
//! ```text
//! https://www.twitch.tv/somechannel          → Some("somechannel")
//! https://twitch.tv/SomeChannel/profile      → Some("somechannel")
//! https://www.twitch.tv/directory/game/Foo   → None (site page)
//! https://example.com/somechannel            → None (foreign host)
//! ```

use url::Url;

/// Maps a URL to the stream it refers to.
pub trait StreamResolver: Send + Sync + 'static {
    /// Stream identifier for `url`, or `None` when the URL is not ours.
    fn stream_from_url(&self, url: &str) -> Option<String>;
}

/// Create a stream resolver from a closure.
///
/// ```
/// use stream_navigator::{resolver_fn, StreamResolver};
///
/// let resolver = resolver_fn(|url| url.strip_prefix("stream:").map(String::from));
/// assert_eq!(resolver.stream_from_url("stream:xyz").as_deref(), Some("xyz"));
/// ```
pub const fn resolver_fn<F>(f: F) -> FnResolver<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync + 'static,
{
    FnResolver { f }
}

/// Stream resolver created from a closure.
pub struct FnResolver<F> {
    f: F,
}

impl<F> StreamResolver for FnResolver<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync + 'static,
{
    fn stream_from_url(&self, url: &str) -> Option<String> {
        (self.f)(url)
    }
}

const TWITCH_HOSTS: &[&str] = &["twitch.tv", "www.twitch.tv", "go.twitch.tv", "m.twitch.tv"];

/// First path segments that are site pages, not channels.
const RESERVED_PATHS: &[&str] = &[
    "directory",
    "downloads",
    "inventory",
    "jobs",
    "login",
    "p",
    "search",
    "settings",
    "signup",
    "subscriptions",
    "turbo",
    "videos",
];

/// Resolves channel page URLs to channel names.
#[derive(Debug, Clone)]
pub struct ChannelUrlResolver {
    hosts: Vec<String>,
}

impl ChannelUrlResolver {
    /// Resolver for the Twitch channel URL hosts.
    pub fn twitch() -> Self {
        Self::with_hosts(TWITCH_HOSTS.iter().copied())
    }

    /// Resolver accepting channel URLs on the given hosts.
    pub fn with_hosts<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|host| host.into().to_ascii_lowercase())
                .collect(),
        }
    }

    fn is_channel_name(segment: &str) -> bool {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl Default for ChannelUrlResolver {
    fn default() -> Self {
        Self::twitch()
    }
}

impl StreamResolver for ChannelUrlResolver {
    fn stream_from_url(&self, url: &str) -> Option<String> {
        let url = Url::parse(url).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }

        let host = url.host_str()?.to_ascii_lowercase();
        if !self.hosts.iter().any(|known| *known == host) {
            return None;
        }

        let segments: Vec<&str> = url
            .path_segments()?
            .filter(|segment| !segment.is_empty())
            .collect();
        let channel = match segments.as_slice() {
            [channel] | [channel, "profile"] => channel.to_ascii_lowercase(),
            _ => return None,
        };

        if !Self::is_channel_name(&channel) || RESERVED_PATHS.contains(&channel.as_str()) {
            return None;
        }
        Some(channel)
    }
}
