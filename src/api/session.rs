use std::{cell::RefCell, rc::Rc};

/// Stored credentials of the signed-in user.
pub trait Session {
    /// Bearer token sent with each request, if one is stored.
    fn token(&self) -> Option<String>;

    /// Clears the stored credentials and leaves for the login page.
    fn end(&self);
}

#[derive(Debug, Default)]
struct MemorySessionState {
    token: Option<String>,
    ended: bool,
}

/// Session kept in memory. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    state: Rc<RefCell<MemorySessionState>>,
}

impl MemorySession {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemorySessionState {
                token: token.map(str::to_string),
                ended: false,
            })),
        }
    }

    /// Whether [`Session::end`] has been called.
    pub fn ended(&self) -> bool {
        self.state.borrow().ended
    }
}

impl Session for MemorySession {
    fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    fn end(&self) {
        let mut state = self.state.borrow_mut();
        state.token = None;
        state.ended = true;
    }
}

/// Session backed by `localStorage`, as written by the login page.
///
/// Keys are `<prefix>_auth_token` and `<prefix>_user_data`.
#[cfg(feature = "web")]
#[derive(Debug, Clone)]
pub struct BrowserSession {
    prefix: &'static str,
    login_path: String,
}

#[cfg(feature = "web")]
impl BrowserSession {
    pub fn new(prefix: &'static str, login_path: impl Into<String>) -> Self {
        Self {
            prefix,
            login_path: login_path.into(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn token_key(&self) -> String {
        format!("{}_auth_token", self.prefix)
    }

    fn user_key(&self) -> String {
        format!("{}_user_data", self.prefix)
    }
}

#[cfg(feature = "web")]
impl Session for BrowserSession {
    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(&self.token_key()).ok()?
    }

    fn end(&self) {
        use dioxus_logger::tracing;

        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.token_key());
            let _ = storage.remove_item(&self.user_key());
        }

        tracing::info!("Session ended, redirecting to {}", self.login_path);

        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&self.login_path) {
                tracing::error!("Failed to redirect to the login page: {:?}", e);
            }
        }
    }
}
