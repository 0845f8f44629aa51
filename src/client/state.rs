//! Shared UI service handle.

use std::future::Future;

use dioxus::{core::spawn_forever, prelude::*};
use dioxus_logger::tracing;

use crate::{
    error::Error,
    ui::{ConfirmOptions, ConfirmState, InFlight, Loader, ToastLevel, ToastQueue},
    util::time::sleep,
};

/// Toasts, confirmations, the loader and in-flight guards for the whole panel.
///
/// Created once in `App` and read anywhere with [`use_ui`]. The handle is `Copy`; all state
/// lives in signals.
#[derive(Clone, Copy)]
pub struct Ui {
    pub toasts: Signal<ToastQueue>,
    pub confirm: Signal<ConfirmState>,
    pub loader: Signal<Loader>,
    pub in_flight: Signal<InFlight>,
}

impl Ui {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(ToastQueue::new()),
            confirm: Signal::new(ConfirmState::new()),
            loader: Signal::new(Loader::default()),
            in_flight: Signal::new(InFlight::default()),
        }
    }

    /// Shows a toast and schedules its removal.
    ///
    /// The timer runs at the root scope so the toast still expires after the view that raised
    /// it unmounts.
    pub fn toast(&self, message: impl Into<String>, level: ToastLevel) {
        let mut toasts = self.toasts;
        let id = toasts.write().notify(message, level, None);
        let duration = toasts
            .peek()
            .toasts()
            .iter()
            .find(|toast| toast.id == id)
            .map(|toast| toast.duration)
            .unwrap_or_default();

        spawn_forever(async move {
            sleep(duration).await;
            toasts.write().dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.toast(message, ToastLevel::Success);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.toast(message, ToastLevel::Warning);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.toast(message, ToastLevel::Info);
    }

    /// Logs `err` and shows its single toast.
    pub fn report(&self, err: &Error) {
        let notification = err.to_notification();

        self.toast(notification.message, notification.level);
    }

    /// Asks the user and resolves `true` only if they confirm.
    pub async fn confirm(&self, message: impl Into<String>, options: ConfirmOptions) -> bool {
        let mut confirm = self.confirm;
        let answer = confirm.write().confirm(message, options);

        answer.await
    }

    pub fn show_loader(&self, visible: bool) {
        let mut loader = self.loader;
        loader.write().show(visible);
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.in_flight.read().is_pending(key)
    }

    /// Runs `action` behind the loader, reporting its error if it fails.
    pub async fn run<T>(&self, action: impl Future<Output = Result<T, Error>>) -> Option<T> {
        self.show_loader(true);
        let _loader = LoaderGuard(self.loader);
        let result = action.await;

        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    /// Like [`Ui::run`], but skipped while another action with the same `key` is running.
    pub async fn run_once<T>(
        &self,
        key: &str,
        action: impl Future<Output = Result<T, Error>>,
    ) -> Option<T> {
        let _in_flight = self.begin(key)?;

        self.run(action).await
    }

    /// Asks first, then runs `action` like [`Ui::run_once`].
    ///
    /// `key` is held from the moment the dialog opens, so a second click neither stacks another
    /// dialog nor submits twice. A declined dialog drops `action` without polling it.
    pub async fn confirm_once<T>(
        &self,
        key: &str,
        message: impl Into<String>,
        options: ConfirmOptions,
        action: impl Future<Output = Result<T, Error>>,
    ) -> Option<T> {
        let _in_flight = self.begin(key)?;
        if !self.confirm(message, options).await {
            return None;
        }

        self.run(action).await
    }

    fn begin(&self, key: &str) -> Option<InFlightGuard> {
        let mut in_flight = self.in_flight;
        if !in_flight.write().try_begin(key) {
            tracing::debug!("Skipped {}, already running", key);
            return None;
        }

        Some(InFlightGuard {
            in_flight,
            key: key.to_string(),
        })
    }
}

/// Hides the loader again when the action ends, including when its task is dropped because
/// the view unmounted.
struct LoaderGuard(Signal<Loader>);

impl Drop for LoaderGuard {
    fn drop(&mut self) {
        self.0.write().show(false);
    }
}

struct InFlightGuard {
    in_flight: Signal<InFlight>,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.write().finish(&self.key);
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_ui() -> Ui {
    use_context::<Ui>()
}
