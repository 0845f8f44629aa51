use std::future::Future;

use futures::channel::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfirmId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmKind {
    Info,
    #[default]
    Warning,
    Danger,
}

impl ConfirmKind {
    pub fn button_class(&self) -> &'static str {
        match self {
            Self::Info => "btn-info",
            Self::Warning => "btn-warning",
            Self::Danger => "btn-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub kind: ConfirmKind,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            title: "Are you sure?".to_string(),
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
            kind: ConfirmKind::Warning,
        }
    }
}

impl ConfirmOptions {
    pub fn danger(title: impl Into<String>, confirm_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            confirm_text: confirm_text.into(),
            kind: ConfirmKind::Danger,
            ..Self::default()
        }
    }

    pub fn info(title: impl Into<String>, confirm_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            confirm_text: confirm_text.into(),
            kind: ConfirmKind::Info,
            ..Self::default()
        }
    }
}

/// How the user left a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
    /// Backdrop click or escape key.
    Dismissed,
}

/// A confirmation waiting for the user, as rendered by the dialog host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub id: ConfirmId,
    pub message: String,
    pub options: ConfirmOptions,
}

#[derive(Debug)]
struct Pending {
    request: ConfirmRequest,
    resolver: oneshot::Sender<bool>,
}

/// Open confirmation dialogs, each holding its own resolver.
#[derive(Debug, Default)]
pub struct ConfirmState {
    pending: Vec<Pending>,
    next_id: u64,
}

impl ConfirmState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a confirmation and returns its id with the future that yields the answer.
    ///
    /// The future resolves `true` only when [`ConfirmState::resolve`] is called with
    /// [`ConfirmOutcome::Confirmed`]. It resolves `false` on cancel, on dismiss, or when the
    /// dialog is dropped without an answer.
    pub fn request(
        &mut self,
        message: impl Into<String>,
        options: ConfirmOptions,
    ) -> (ConfirmId, impl Future<Output = bool> + 'static) {
        self.next_id += 1;
        let id = ConfirmId(self.next_id);
        let (resolver, answer) = oneshot::channel();

        self.pending.push(Pending {
            request: ConfirmRequest {
                id,
                message: message.into(),
                options,
            },
            resolver,
        });

        (id, async move { answer.await.unwrap_or(false) })
    }

    pub fn confirm(
        &mut self,
        message: impl Into<String>,
        options: ConfirmOptions,
    ) -> impl Future<Output = bool> + 'static {
        self.request(message, options).1
    }

    /// Resolves the confirmation with `id`. Returns `false` if it was not pending.
    pub fn resolve(&mut self, id: ConfirmId, outcome: ConfirmOutcome) -> bool {
        let Some(index) = self.pending.iter().position(|p| p.request.id == id) else {
            return false;
        };

        let pending = self.pending.remove(index);
        // The receiver may already be gone if the awaiting task was dropped
        let _ = pending
            .resolver
            .send(outcome == ConfirmOutcome::Confirmed);

        true
    }

    /// The dialog shown on top, which is the most recent request.
    pub fn current(&self) -> Option<&ConfirmRequest> {
        self.pending.last().map(|p| &p.request)
    }

    pub fn pending(&self) -> impl Iterator<Item = &ConfirmRequest> {
        self.pending.iter().map(|p| &p.request)
    }
}
