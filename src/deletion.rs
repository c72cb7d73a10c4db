//! Delete confirmation

use tracing::debug;

use crate::{ids::ProductId, products::Product};

/// The product awaiting delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    /// Id of the product to remove
    pub id: ProductId,

    /// Title shown in the confirmation prompt
    pub title: String,
}

/// Confirmation prompt for deleting a product.
///
/// Runs alongside the form session and never touches the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePrompt {
    pending: Option<PendingDelete>,
}

impl DeletePrompt {
    /// Ask for confirmation before removing `product`. Replaces any earlier request.
    pub fn request(&mut self, product: &Product) {
        debug!(product_id = %product.id, "requesting delete confirmation");

        self.pending = Some(PendingDelete {
            id: product.id.clone(),
            title: product.title.clone(),
        });
    }

    /// The product awaiting confirmation.
    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    /// Whether a confirmation is outstanding.
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Confirm, closing the prompt and returning the id to remove.
    pub fn confirm(&mut self) -> Option<ProductId> {
        self.pending.take().map(|pending| pending.id)
    }

    /// Close the prompt without removing anything. Returns `false` if nothing was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
