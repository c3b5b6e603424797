//! History stack state

/// Browser-style history of URLs.
///
/// Pushing truncates forward entries; replacing overwrites the current
/// entry; [`go`](Self::go) moves the cursor by a signed delta and refuses
/// to leave the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<String>,
    current: usize,
}

impl HistoryStack {
    /// Create a history holding a single entry.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            current: 0,
        }
    }

    /// URL of the current entry.
    pub fn current(&self) -> &str {
        &self.entries[self.current]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current entry.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Add a new entry after the current one, dropping forward history.
    pub fn push(&mut self, url: String) {
        self.entries.truncate(self.current + 1);
        self.entries.push(url);
        self.current += 1;
    }

    /// Overwrite the current entry.
    pub fn replace(&mut self, url: String) {
        self.entries[self.current] = url;
    }

    /// URL `delta` entries away, without moving.
    pub fn peek(&self, delta: i32) -> Option<&str> {
        let target = self.offset(delta)?;
        self.entries.get(target).map(String::as_str)
    }

    /// Move by `delta` entries and return the new current URL.
    ///
    /// Returns `None` and stays put when the move would leave the stack.
    /// A delta of zero re-selects the current entry.
    pub fn go(&mut self, delta: i32) -> Option<&str> {
        let target = self.offset(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.current = target;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    fn offset(&self, delta: i32) -> Option<usize> {
        let step = usize::try_from(delta.unsigned_abs()).ok()?;
        if delta < 0 {
            self.current.checked_sub(step)
        } else {
            self.current.checked_add(step)
        }
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new("/")
    }
}
