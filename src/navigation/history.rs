/// Session history the router records navigation into.
pub trait History {
    /// Adds a new entry for `path` and makes it current.
    fn push(&mut self, path: &str);

    /// Path of the current entry, if any.
    fn current(&self) -> Option<String>;
}

/// In-process history with back and forward, used natively and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `path` as the only entry, like a fresh page load.
    pub fn starting_at(path: &str) -> Self {
        Self {
            entries: vec![path.to_string()],
            index: 0,
        }
    }

    /// Moves one entry back. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }

        self.index -= 1;
        true
    }

    /// Moves one entry forward. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }

        self.index += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn push(&mut self, path: &str) {
        // A new entry discards everything after the current one
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }

        self.entries.push(path.to_string());
        self.index = self.entries.len() - 1;
    }

    fn current(&self) -> Option<String> {
        self.entries.get(self.index).cloned()
    }
}

/// Browser session history, storing the path in the URL fragment (`#/offers`).
#[cfg(feature = "web")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

#[cfg(feature = "web")]
impl History for BrowserHistory {
    fn push(&mut self, path: &str) {
        use dioxus_logger::tracing;
        use web_sys::wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return;
        };

        let url = format!("#{}", path);
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));

        if let Err(e) = pushed {
            tracing::warn!("Failed to push history entry {}: {:?}", url, e);
        }
    }

    fn current(&self) -> Option<String> {
        let hash = web_sys::window()?.location().hash().ok()?;
        let path = hash.trim_start_matches('#');

        Some(if path.is_empty() { "/" } else { path }.to_string())
    }
}
