//! Modal capability
//!
//! Dialogs are opaque to the catalog: it only opens them, closes them and
//! asks whether they are showing. Transitions and animation belong to the
//! rendering layer.

/// A dialog the catalog can show and hide.
pub trait Modal {
    /// Show the dialog.
    fn open(&mut self);

    /// Hide the dialog.
    fn close(&mut self);

    /// Whether the dialog is showing.
    fn is_open(&self) -> bool;
}

/// Plain open/closed flag, used when no rendering layer is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl Modal for ModalState {
    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
