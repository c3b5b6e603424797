//! Policy configuration.
//!
//! The sentinel route names and the homepage lookup are configurable so the
//! policy can sit on top of route tables that use other names. Defaults
//! match the streaming UI this crate was written for.
//!
//! ```
//! use stream_navigator::PolicyConfig;
//!
//! let config = PolicyConfig::new().default_homepage("/games");
//! assert_eq!(config.error_route, "error");
//! assert_eq!(config.default_homepage, "/games");
//! ```

/// Route name of the error substate.
pub const DEFAULT_ERROR_ROUTE: &str = "error";

/// Route name deep links to streams resolve to.
pub const DEFAULT_CHANNEL_ROUTE: &str = "channel";

/// Settings key holding the user's homepage.
pub const DEFAULT_HOMEPAGE_KEY: &str = "gui_homepage";

/// Homepage used when the settings hold none.
pub const DEFAULT_HOMEPAGE: &str = "/featured";

/// Names and fallbacks the navigation policy works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Sentinel route a failed transition lands on
    pub error_route: String,

    /// Route deep-linked streams are opened in
    pub channel_route: String,

    /// Settings key of the configured homepage
    pub homepage_key: String,

    /// Homepage path when none is configured
    pub default_homepage: String,
}

impl PolicyConfig {
    /// Create a config with the default names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error route name.
    pub fn error_route(mut self, name: impl Into<String>) -> Self {
        self.error_route = name.into();
        self
    }

    /// Set the channel route name.
    pub fn channel_route(mut self, name: impl Into<String>) -> Self {
        self.channel_route = name.into();
        self
    }

    /// Set the settings key read by `homepage`.
    pub fn homepage_key(mut self, key: impl Into<String>) -> Self {
        self.homepage_key = key.into();
        self
    }

    /// Set the fallback homepage path.
    pub fn default_homepage(mut self, path: impl Into<String>) -> Self {
        self.default_homepage = path.into();
        self
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            error_route: DEFAULT_ERROR_ROUTE.to_string(),
            channel_route: DEFAULT_CHANNEL_ROUTE.to_string(),
            homepage_key: DEFAULT_HOMEPAGE_KEY.to_string(),
            default_homepage: DEFAULT_HOMEPAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PolicyConfig::default();
        assert_eq!(config.error_route, "error");
        assert_eq!(config.channel_route, "channel");
        assert_eq!(config.homepage_key, "gui_homepage");
        assert_eq!(config.default_homepage, "/featured");
    }

    #[test]
    fn test_builder_overrides() {
        let config = PolicyConfig::new()
            .error_route("oops")
            .channel_route("stream")
            .homepage_key("start_page");

        assert_eq!(config.error_route, "oops");
        assert_eq!(config.channel_route, "stream");
        assert_eq!(config.homepage_key, "start_page");
        assert_eq!(config.default_homepage, "/featured");
    }
}
