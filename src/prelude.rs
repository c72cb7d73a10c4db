//! Catalog prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError, Modals, ReferenceData, SubmitOutcome},
    categories::Category,
    colors::{Color, ColorSet, Palette},
    deletion::{DeletePrompt, PendingDelete},
    fixtures::{Fixture, FixtureError},
    ids::{IdGenerator, ProductId, UuidV7Ids},
    modal::{Modal, ModalState},
    notifications::{Notification, Notifier, NotifyError, TracingNotifier},
    presentation::{PresentationError, ProductCard, cards, text_slice, write_errors, write_table},
    products::{NewProduct, Product},
    session::{Draft, FormSession, SessionError, Submission},
    store::{ProductStore, StoreError},
    validation::{ErrorReport, Field, ProductFields, validate},
};
