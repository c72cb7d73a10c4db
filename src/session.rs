//! Form Session
//!
//! Editing state for the "new product" and "edit product" flows. A session
//! owns the draft fields, the single current color selection, the selected
//! category and the error report shown next to the form.
//!
//! ```text
//! Closed ──open_create──▶ Create ──submit (clear), finish──▶ Closed
//!   │                       │ ▲
//!   │                       └─┘ submit (errors)
//!   └────open_edit────▶ Edit ──submit (clear), finish──▶ Closed
//! ```
//!
//! A clear submit only hands back the mutation; the session closes on
//! `finish`, once the caller has applied it. Cancelling any open session
//! returns to `Closed` without side effects.

use thiserror::Error;
use tracing::debug;

use crate::{
    categories::Category,
    colors::{Color, ColorSet},
    ids::ProductId,
    products::{NewProduct, Product},
    validation::{ErrorReport, Field, ProductFields, validate},
};

/// Errors raised by invalid session transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A session is already open.
    #[error("a product form is already open")]
    AlreadyOpen,

    /// No session is open.
    #[error("no product form is open")]
    NotOpen,
}

/// Draft state bound to an open form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Editable text fields
    pub fields: ProductFields,

    /// Current color selection
    pub colors: ColorSet,

    /// Selected category
    pub category: Category,

    /// Messages shown next to each field
    pub errors: ErrorReport,
}

static NO_ERRORS: ErrorReport = ErrorReport::new();

/// The form session state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormSession {
    /// No form is open.
    #[default]
    Closed,

    /// The "new product" form is open.
    Create(Draft),

    /// The "edit product" form is open for the product at `index`.
    Edit {
        /// Store position captured when the form was opened
        index: usize,

        /// Id of the product being edited
        id: ProductId,

        /// Draft seeded from the product
        draft: Draft,
    },
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Validation failed; the session stays open with the report applied.
    Rejected(ErrorReport),

    /// A new product should be created.
    Create(NewProduct),

    /// The product at `index` should be replaced.
    Update {
        /// Store position captured when the form was opened
        index: usize,

        /// Replacement product
        product: Product,
    },
}

impl FormSession {
    /// Whether any form is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, FormSession::Closed)
    }

    /// The open draft, if any.
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            FormSession::Closed => None,
            FormSession::Create(draft) | FormSession::Edit { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Result<&mut Draft, SessionError> {
        match self {
            FormSession::Closed => Err(SessionError::NotOpen),
            FormSession::Create(draft) | FormSession::Edit { draft, .. } => Ok(draft),
        }
    }

    /// The current error report. Empty when no form is open.
    pub fn errors(&self) -> &ErrorReport {
        self.draft().map_or(&NO_ERRORS, |draft| &draft.errors)
    }

    /// Colors shown in the open form.
    pub fn colors(&self) -> Option<&ColorSet> {
        self.draft().map(|draft| &draft.colors)
    }

    /// Open an empty "new product" form with `category` selected.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyOpen` if a form is already open.
    pub fn open_create(&mut self, category: Category) -> Result<(), SessionError> {
        if self.is_open() {
            return Err(SessionError::AlreadyOpen);
        }

        debug!(category = %category.name, "opening create form");

        *self = FormSession::Create(Draft {
            category,
            ..Draft::default()
        });

        Ok(())
    }

    /// Open an "edit product" form seeded with a copy of `product`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyOpen` if a form is already open.
    pub fn open_edit(&mut self, index: usize, product: &Product) -> Result<(), SessionError> {
        if self.is_open() {
            return Err(SessionError::AlreadyOpen);
        }

        debug!(product_id = %product.id, index, "opening edit form");

        *self = FormSession::Edit {
            index,
            id: product.id.clone(),
            draft: Draft {
                fields: product.fields(),
                colors: product.colors.clone(),
                category: product.category.clone(),
                errors: ErrorReport::default(),
            },
        };

        Ok(())
    }

    /// Write a field value and clear that field's message.
    ///
    /// The validator is not re-run; the field is only known to be valid
    /// after the next submit.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotOpen` if no form is open.
    pub fn edit_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        let draft = self.draft_mut()?;

        draft.fields.set(field, value);
        draft.errors.clear(field);

        Ok(())
    }

    /// Flip a color in the current selection. Returns `true` if it is now selected.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotOpen` if no form is open.
    pub fn toggle_color(&mut self, color: Color) -> Result<bool, SessionError> {
        let draft = self.draft_mut()?;

        Ok(draft.colors.toggle(color))
    }

    /// Change the selected category.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotOpen` if no form is open.
    pub fn select_category(&mut self, category: Category) -> Result<(), SessionError> {
        self.draft_mut()?.category = category;

        Ok(())
    }

    /// Discard the open form. Returns `false` if nothing was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();

        if was_open {
            debug!("discarding product form");
        }

        *self = FormSession::Closed;

        was_open
    }

    /// Validate the draft and, on success, hand back the mutation to apply.
    ///
    /// The form stays open either way. Call [`FormSession::finish`] once the
    /// mutation has been applied, so a refused mutation keeps the draft.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotOpen` if no form is open.
    pub fn submit(&mut self) -> Result<Submission, SessionError> {
        let draft = self.draft_mut()?;
        let report = validate(&draft.fields);

        if !report.is_clear() {
            debug!(%report, "rejecting product form");

            draft.errors = report.clone();

            return Ok(Submission::Rejected(report));
        }

        let new = NewProduct {
            fields: draft.fields.clone(),
            colors: draft.colors.clone(),
            category: draft.category.clone(),
        };

        match self {
            FormSession::Closed => Err(SessionError::NotOpen),
            FormSession::Create(_) => Ok(Submission::Create(new)),
            FormSession::Edit { index, id, .. } => Ok(Submission::Update {
                index: *index,
                product: Product::from_new(id.clone(), new),
            }),
        }
    }

    /// Close the form after its submission was applied.
    pub fn finish(&mut self) {
        if self.is_open() {
            debug!("closing product form");
        }

        *self = FormSession::Closed;
    }
}
