//! UI service state: toasts, modals, confirmations and the busy indicators.
//!
//! The types here hold no DOM handles. The client wraps them in signals and renders them,
//! which keeps the queueing and resolver bookkeeping testable off the browser.

pub mod confirm;
pub mod loader;
pub mod modal;
pub mod toast;

pub use confirm::{
    ConfirmId, ConfirmKind, ConfirmOptions, ConfirmOutcome, ConfirmRequest, ConfirmState,
};
pub use loader::{InFlight, Loader};
pub use modal::{Modal, ModalId, ModalOptions, ModalState};
pub use toast::{Notification, Toast, ToastId, ToastLevel, ToastQueue};
