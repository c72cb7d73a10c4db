//! Notifications
//!
//! Fire-and-forget success signals emitted after a committed mutation. A
//! failed delivery is logged and dropped; it never undoes the mutation.

use std::fmt;

use thiserror::Error;
use tracing::info;

#[cfg(test)]
use mockall::automock;

use crate::ids::ProductId;

/// A committed catalog mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A product was created.
    Created {
        /// New product id
        id: ProductId,
        /// Product title
        title: String,
    },

    /// A product was updated.
    Updated {
        /// Updated product id
        id: ProductId,
        /// Product title after the update
        title: String,
    },

    /// A product was deleted.
    Deleted {
        /// Removed product id
        id: ProductId,
        /// Title of the removed product
        title: String,
    },
}

impl Notification {
    /// Id of the affected product.
    pub fn id(&self) -> &ProductId {
        match self {
            Notification::Created { id, .. }
            | Notification::Updated { id, .. }
            | Notification::Deleted { id, .. } => id,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Created { title, .. } => {
                write!(f, "Product \"{title}\" added successfully")
            }
            Notification::Updated { title, .. } => {
                write!(f, "Product \"{title}\" updated successfully")
            }
            Notification::Deleted { title, .. } => {
                write!(f, "Product \"{title}\" deleted successfully")
            }
        }
    }
}

/// Delivery failure reported by a notifier.
#[derive(Debug, Error)]
#[error("failed to deliver notification: {0}")]
pub struct NotifyError(pub String);

/// Receives success signals (toasts, logs).
#[cfg_attr(test, automock)]
pub trait Notifier {
    /// Deliver a notification.
    ///
    /// # Errors
    ///
    /// Returns a `NotifyError` if delivery failed. Callers log and ignore it.
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Writes notifications to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        info!(product_id = %notification.id(), "{notification}");

        Ok(())
    }
}
