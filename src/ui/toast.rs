use std::time::Duration;

/// How long a toast stays on screen unless a duration is given.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    pub fn alert_class(&self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Warning => "alert-warning",
            Self::Info => "alert-info",
        }
    }
}

/// A message ready to be shown, before it is queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: ToastLevel,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub level: ToastLevel,
    pub duration: Duration,
}

/// Stack of visible toasts, oldest first.
///
/// Every toast gets its own id, so expiring or dismissing one toast never touches the others.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a toast and returns the id its expiry timer must dismiss.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        level: ToastLevel,
        duration: Option<Duration>,
    ) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);

        self.toasts.push(Toast {
            id,
            message: message.into(),
            level,
            duration: duration.unwrap_or(DEFAULT_TOAST_DURATION),
        });

        id
    }

    pub fn push(&mut self, notification: Notification) -> ToastId {
        self.notify(notification.message, notification.level, None)
    }

    /// Removes the toast with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);

        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
