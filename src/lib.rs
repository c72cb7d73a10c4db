//! Catalog
//!
//! Catalog is the state and validation core of a product catalog manager: an
//! ordered in-memory product list, modal create/edit forms with field
//! validation, and a confirmed delete flow.

pub mod catalog;
pub mod categories;
pub mod colors;
pub mod deletion;
pub mod fixtures;
pub mod ids;
pub mod modal;
pub mod notifications;
pub mod prelude;
pub mod presentation;
pub mod products;
pub mod session;
pub mod store;
pub mod validation;
