//! Settings and external-browser collaborators.
//!
//! Both are reached through small traits so the policy can be wired to
//! whatever the application uses for persistence and for launching URLs
//! outside the app.
//!
//! | Trait | Contract | Provided |
//! |-------|----------|----------|
//! | [`SettingsStore`] | read-only key lookup | [`MapSettings`] |
//! | [`ExternalBrowser`] | fire-and-forget `open(url)` | [`browser_fn`] |

use std::collections::HashMap;

/// Read-only settings lookup.
pub trait SettingsStore: Send + Sync + 'static {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// Settings held in a map.
///
/// ```
/// use stream_navigator::{MapSettings, SettingsStore};
///
/// let settings = MapSettings::new().with("gui_homepage", "/games");
/// assert_eq!(settings.get("gui_homepage").as_deref(), Some("/games"));
/// assert_eq!(settings.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    values: HashMap<String, String>,
}

impl MapSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Store `value` under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove the value under `key`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl SettingsStore for MapSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Opens URLs outside the application.
pub trait ExternalBrowser: Send + Sync + 'static {
    /// Hand `url` to the external browser. No result is reported back.
    fn open(&self, url: &str);
}

/// Create an external browser from a closure.
///
/// ```
/// use stream_navigator::{browser_fn, ExternalBrowser};
///
/// let browser = browser_fn(|url| println!("opening {url}"));
/// browser.open("https://example.com");
/// ```
pub const fn browser_fn<F>(f: F) -> FnBrowser<F>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    FnBrowser { f }
}

/// External browser created from a closure.
pub struct FnBrowser<F> {
    f: F,
}

impl<F> ExternalBrowser for FnBrowser<F>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    fn open(&self, url: &str) {
        (self.f)(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_map_settings_set_and_remove() {
        let mut settings = MapSettings::new();
        settings.set("gui_homepage", "/games");
        assert_eq!(settings.get("gui_homepage").as_deref(), Some("/games"));

        assert_eq!(settings.remove("gui_homepage").as_deref(), Some("/games"));
        assert_eq!(settings.get("gui_homepage"), None);
    }

    #[test]
    fn test_browser_fn_forwards_url() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&opened);
        let browser = browser_fn(move |url| sink.lock().unwrap().push(url.to_string()));

        browser.open("https://example.com/a");

        assert_eq!(*opened.lock().unwrap(), vec!["https://example.com/a"]);
    }
}
