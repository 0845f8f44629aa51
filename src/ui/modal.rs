#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(pub u64);

pub struct ModalOptions<C> {
    pub title: String,
    pub content: C,
    /// Runs once, right after the modal becomes current.
    pub on_open: Option<Box<dyn FnOnce()>>,
}

impl<C> ModalOptions<C> {
    pub fn new(title: impl Into<String>, content: C) -> Self {
        Self {
            title: title.into(),
            content,
            on_open: None,
        }
    }

    pub fn on_open(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_open = Some(Box::new(callback));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Modal<C> {
    pub id: ModalId,
    pub title: String,
    pub content: C,
}

/// Tracks the single modal currently on screen.
///
/// `C` is the panel's description of what the modal body renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState<C> {
    current: Option<Modal<C>>,
    next_id: u64,
}

impl<C> Default for ModalState<C> {
    fn default() -> Self {
        Self {
            current: None,
            next_id: 0,
        }
    }
}

impl<C> ModalState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a modal, closing the current one first.
    ///
    /// Returns the new modal's id and the modal it replaced, if any.
    pub fn show_modal(&mut self, options: ModalOptions<C>) -> (ModalId, Option<Modal<C>>) {
        let previous = self.close_current();

        self.next_id += 1;
        let id = ModalId(self.next_id);
        self.current = Some(Modal {
            id,
            title: options.title,
            content: options.content,
        });

        if let Some(on_open) = options.on_open {
            on_open();
        }

        (id, previous)
    }

    pub fn close_current(&mut self) -> Option<Modal<C>> {
        self.current.take()
    }

    /// Closes the modal only if `id` is still the current one.
    pub fn close(&mut self, id: ModalId) -> Option<Modal<C>> {
        if self.current.as_ref().is_some_and(|modal| modal.id == id) {
            self.current.take()
        } else {
            None
        }
    }

    pub fn current(&self) -> Option<&Modal<C>> {
        self.current.as_ref()
    }
}
