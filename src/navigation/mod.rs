//! Hash-based single-page navigation.
//!
//! A [`Router`] resolves paths through a static [`RouteTable`], records them in a
//! [`History`] and asks a [`ViewHost`] to swap the mounted view. It never touches entity
//! data: views load their own data when mounted.

pub mod history;
pub mod host;
pub mod route;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;

#[cfg(feature = "web")]
pub use self::history::BrowserHistory;
pub use self::{
    history::{History, MemoryHistory},
    host::ViewHost,
    route::{normalize, RouteParams, RouteTable},
};

pub struct Router<V, H> {
    table: RouteTable<V>,
    history: H,
    current_path: String,
    current_view: Option<V>,
}

impl<V, H> Router<V, H>
where
    V: Clone + std::fmt::Debug,
    H: History,
{
    pub fn new(table: RouteTable<V>, history: H) -> Self {
        Self {
            table,
            history,
            current_path: "/".to_string(),
            current_view: None,
        }
    }

    /// Shows the view for the history entry the page was loaded with.
    pub fn start(&mut self, host: &mut impl ViewHost<V>) -> V {
        let path = self.history.current().unwrap_or_else(|| "/".to_string());

        self.show(&path, host)
    }

    /// Navigates to `path`.
    ///
    /// Unknown paths render the default view. With `record_history` the path is pushed as a
    /// new history entry.
    pub fn navigate(
        &mut self,
        path: &str,
        record_history: bool,
        host: &mut impl ViewHost<V>,
    ) -> V {
        let path = normalize(path);

        if record_history {
            self.history.push(&path);
        }

        self.show(&path, host)
    }

    /// Handles a native back or forward step by re-resolving the current history entry.
    ///
    /// Never adds a history entry.
    pub fn pop_state(&mut self, host: &mut impl ViewHost<V>) -> V {
        let path = self.history.current().unwrap_or_else(|| "/".to_string());

        self.show(&path, host)
    }

    /// Whether the navigation item bound to `nav_path` is highlighted.
    ///
    /// The item whose path is the longest segment-wise prefix of the current path wins, so
    /// `/offers/3/edit` highlights `/offers` and unknown paths highlight `/`.
    pub fn is_active<'a>(
        &self,
        nav_path: &str,
        nav_paths: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        active_nav(&self.current_path, nav_paths)
            .is_some_and(|active| active == normalize(nav_path))
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn current_view(&self) -> Option<&V> {
        self.current_view.as_ref()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    fn show(&mut self, path: &str, host: &mut impl ViewHost<V>) -> V {
        let path = normalize(path);
        let view = match self.table.try_resolve(&path) {
            Some(view) => view,
            None => {
                tracing::debug!("No route for {}, showing the default view", path);
                self.table.fallback().clone()
            }
        };

        tracing::debug!("Navigating to {} ({:?})", path, view);

        if self.current_view.is_some() {
            host.unmount();
        }
        host.mount(&view);
        host.scroll_to_top();

        self.current_path = path;
        self.current_view = Some(view.clone());

        view
    }
}

/// Picks the navigation item to highlight for `current_path`.
pub fn active_nav<'a>(
    current_path: &str,
    nav_paths: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    let current = normalize(current_path);
    let current: Vec<&str> = current.split('/').filter(|s| !s.is_empty()).collect();

    nav_paths
        .into_iter()
        .map(normalize)
        .filter(|nav| {
            let nav_segments: Vec<&str> = nav.split('/').filter(|s| !s.is_empty()).collect();
            current.starts_with(&nav_segments)
        })
        .max_by_key(|nav| nav.split('/').filter(|s| !s.is_empty()).count())
}
