//! Catalog
//!
//! The session controller. `Catalog` owns the product store, the form
//! session, the delete prompt and the collaborators, and is the only place
//! that mutates the store. Rendering code reads through its accessors and
//! dispatches the action methods.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    categories::Category,
    colors::{Color, Palette},
    deletion::{DeletePrompt, PendingDelete},
    ids::{IdGenerator, ProductId},
    modal::{Modal, ModalState},
    notifications::{Notification, Notifier, TracingNotifier},
    presentation::{ProductCard, cards},
    products::Product,
    session::{FormSession, SessionError, Submission},
    store::{ProductStore, StoreError},
    validation::{ErrorReport, Field},
};

/// Errors raised by catalog actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Invalid form session transition.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Store mutation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No product at the requested position.
    #[error("no product at index {0}")]
    NoProductAt(usize),

    /// No product with the requested id.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// The color is not part of the palette.
    #[error("color is not in the palette: {0}")]
    UnknownColor(Color),

    /// The category is not part of the reference data.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// There are no categories to select from.
    #[error("no categories are available")]
    NoCategories,
}

/// Read-only reference data offered by the forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    categories: Vec<Category>,
    palette: Palette,
}

impl ReferenceData {
    /// Create reference data from categories and a palette.
    pub fn new(categories: Vec<Category>, palette: Palette) -> Self {
        Self {
            categories,
            palette,
        }
    }

    /// Available categories, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category with the given name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Category preselected by the "new product" form.
    pub fn default_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    /// Available colors.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

/// Outcome of a submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the form stays open showing the report.
    Rejected(ErrorReport),

    /// A product was created at the front of the list.
    Created(Product),

    /// The product at `index` was replaced.
    Updated {
        /// Position of the updated product
        index: usize,
        /// The product as stored
        product: Product,
    },
}

/// Dialogs bound to the catalog flows.
#[derive(Debug, Clone, Default)]
pub struct Modals<M> {
    /// "New product" dialog
    pub create: M,

    /// "Edit product" dialog
    pub edit: M,

    /// Delete confirmation dialog
    pub delete: M,
}

/// Catalog session controller.
pub struct Catalog<M: Modal = ModalState> {
    store: ProductStore,
    form: FormSession,
    delete_prompt: DeletePrompt,
    reference: ReferenceData,
    modals: Modals<M>,
    notifier: Box<dyn Notifier>,
}

impl Catalog<ModalState> {
    /// Create a catalog over an existing store, with plain modal state and
    /// log notifications.
    pub fn new(reference: ReferenceData, store: ProductStore) -> Self {
        Self::with_modals(reference, store, Modals::default())
    }

    /// Create a catalog seeded with products.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if a product is invalid or ids are duplicated.
    pub fn with_products(
        reference: ReferenceData,
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, StoreError> {
        Ok(Self::new(reference, ProductStore::with_products(products)?))
    }
}

impl<M: Modal> Catalog<M> {
    /// Create a catalog whose flows drive the given dialogs.
    pub fn with_modals(reference: ReferenceData, store: ProductStore, modals: Modals<M>) -> Self {
        Self {
            store,
            form: FormSession::Closed,
            delete_prompt: DeletePrompt::default(),
            reference,
            modals,
            notifier: Box::new(TracingNotifier),
        }
    }

    /// Replace the notification collaborator.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Replace the identifier generator used for new products.
    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.store = self.store.with_id_generator(ids);
        self
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        self.store.list()
    }

    /// Renderable cards in display order.
    pub fn cards(&self) -> Vec<ProductCard> {
        cards(self.store.iter())
    }

    /// The product store.
    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    /// The form session.
    pub fn form(&self) -> &FormSession {
        &self.form
    }

    /// The error report of the open form.
    pub fn errors(&self) -> &ErrorReport {
        self.form.errors()
    }

    /// The product awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.delete_prompt.pending()
    }

    /// Reference data offered by the forms.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// The dialogs bound to the catalog flows.
    pub fn modals(&self) -> &Modals<M> {
        &self.modals
    }

    /// Open the "new product" form.
    ///
    /// # Errors
    ///
    /// Returns an error if a form is already open or there are no categories.
    pub fn open_create(&mut self) -> Result<(), CatalogError> {
        let category = self
            .reference
            .default_category()
            .cloned()
            .ok_or(CatalogError::NoCategories)?;

        self.form.open_create(category)?;
        self.modals.create.open();

        Ok(())
    }

    /// Open the "edit product" form for the product at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if a form is already open or there is no product at `index`.
    pub fn open_edit(&mut self, index: usize) -> Result<(), CatalogError> {
        let product = self.store.get(index).ok_or(CatalogError::NoProductAt(index))?;

        self.form.open_edit(index, product)?;
        self.modals.edit.open();

        Ok(())
    }

    /// Write a field in the open form.
    ///
    /// # Errors
    ///
    /// Returns an error if no form is open.
    pub fn edit_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), CatalogError> {
        Ok(self.form.edit_field(field, value)?)
    }

    /// Flip a palette color in the open form. Returns `true` if it is now selected.
    ///
    /// # Errors
    ///
    /// Returns an error if no form is open or the color is not in the palette.
    pub fn toggle_color(&mut self, color: impl Into<Color>) -> Result<bool, CatalogError> {
        let color = color.into();

        if !self.reference.palette().contains(&color) {
            return Err(CatalogError::UnknownColor(color));
        }

        Ok(self.form.toggle_color(color)?)
    }

    /// Select a category by name in the open form.
    ///
    /// # Errors
    ///
    /// Returns an error if no form is open or the category is unknown.
    pub fn select_category(&mut self, name: &str) -> Result<(), CatalogError> {
        let category = self
            .reference
            .category(name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownCategory(name.to_string()))?;

        Ok(self.form.select_category(category)?)
    }

    /// Close the open form without touching the store. Returns `false` if
    /// nothing was open.
    pub fn cancel(&mut self) -> bool {
        self.close_form_modals();

        self.form.cancel()
    }

    /// Submit the open form.
    ///
    /// An edit is written back to the current position of the product it
    /// was opened for, which may have moved if other products were deleted
    /// in the meantime.
    ///
    /// # Errors
    ///
    /// Returns an error if no form is open, the edited product no longer
    /// exists, or the store refuses the mutation. The form stays open with
    /// its draft in every error case. Validation failures are reported
    /// through [`SubmitOutcome::Rejected`].
    pub fn submit(&mut self) -> Result<SubmitOutcome, CatalogError> {
        let outcome = match self.form.submit()? {
            Submission::Rejected(report) => return Ok(SubmitOutcome::Rejected(report)),
            Submission::Create(new) => {
                let product = self.store.create(new)?;

                info!(product_id = %product.id, "created product");

                self.notify(&Notification::Created {
                    id: product.id.clone(),
                    title: product.title.clone(),
                });

                SubmitOutcome::Created(product)
            }
            Submission::Update {
                index: opened_at,
                product,
            } => {
                let index = self
                    .store
                    .position(&product.id)
                    .ok_or_else(|| CatalogError::ProductNotFound(product.id.clone()))?;

                if index != opened_at {
                    debug!(product_id = %product.id, opened_at, index, "edited product moved");
                }

                self.store.update(index, product.clone())?;

                info!(product_id = %product.id, index, "updated product");

                self.notify(&Notification::Updated {
                    id: product.id.clone(),
                    title: product.title.clone(),
                });

                SubmitOutcome::Updated { index, product }
            }
        };

        self.form.finish();
        self.close_form_modals();

        Ok(outcome)
    }

    /// Ask for confirmation before deleting the product with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no product has that id.
    pub fn request_delete(&mut self, id: &ProductId) -> Result<(), CatalogError> {
        let product = self
            .store
            .find(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))?;

        self.delete_prompt.request(product);
        self.modals.delete.open();

        Ok(())
    }

    /// Confirm the pending delete. Returns the removed product, or `None`
    /// when nothing was pending or the product was already gone.
    pub fn confirm_delete(&mut self) -> Option<Product> {
        self.modals.delete.close();

        let id = self.delete_prompt.confirm()?;

        let Some(removed) = self.store.remove(&id) else {
            debug!(product_id = %id, "product already removed");

            return None;
        };

        info!(product_id = %removed.id, "deleted product");

        self.notify(&Notification::Deleted {
            id: removed.id.clone(),
            title: removed.title.clone(),
        });

        Some(removed)
    }

    /// Dismiss the pending delete. Returns `false` if nothing was pending.
    pub fn cancel_delete(&mut self) -> bool {
        self.modals.delete.close();

        self.delete_prompt.cancel()
    }

    fn close_form_modals(&mut self) {
        self.modals.create.close();
        self.modals.edit.close();
    }

    fn notify(&self, notification: &Notification) {
        if let Err(error) = self.notifier.notify(notification) {
            warn!(product_id = %notification.id(), %error, "notification was not delivered");
        }
    }
}

impl<M: Modal + fmt::Debug> fmt::Debug for Catalog<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("store", &self.store)
            .field("form", &self.form)
            .field("delete_prompt", &self.delete_prompt)
            .field("reference", &self.reference)
            .field("modals", &self.modals)
            .finish_non_exhaustive()
    }
}
