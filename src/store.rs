//! Product Store
//!
//! The authoritative, ordered, in-memory collection of committed products.
//! Every product held by the store passes validation; drafts never enter it.

use std::fmt;

use thiserror::Error;
use tracing::{debug, error};

use crate::{
    ids::{IdGenerator, ProductId, UuidV7Ids},
    products::{NewProduct, Product},
    validation::ErrorReport,
};

/// Errors raised by store mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The product failed validation and was not stored.
    #[error("product failed validation: {0}")]
    Invalid(ErrorReport),

    /// The id is already used by another product.
    #[error("product id already exists: {0}")]
    DuplicateId(ProductId),

    /// An update targeted a position outside the collection.
    #[error("product index {index} out of bounds for {len} products")]
    IndexOutOfBounds {
        /// Requested position
        index: usize,
        /// Number of stored products
        len: usize,
    },

    /// An update tried to change the id of a stored product.
    #[error("product at index {index} has id {expected}, update carried {found}")]
    IdMismatch {
        /// Position of the update
        index: usize,
        /// Id of the stored product
        expected: ProductId,
        /// Id carried by the update
        found: ProductId,
    },
}

/// Ordered product collection. Products created at runtime are placed first.
pub struct ProductStore {
    products: Vec<Product>,
    ids: Box<dyn IdGenerator>,
}

impl ProductStore {
    /// Create an empty store using `UUIDv7` identifiers.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            ids: Box::new(UuidV7Ids),
        }
    }

    /// Create a store seeded with existing products, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if a product fails validation or two products
    /// share an id.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Result<Self, StoreError> {
        let mut store = Self::new();

        for product in products {
            check_valid(&product)?;

            if store.find(&product.id).is_some() {
                return Err(StoreError::DuplicateId(product.id));
            }

            store.products.push(product);
        }

        Ok(store)
    }

    /// Replace the identifier generator.
    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Products in display order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Product at a position.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Product with the given id.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Position of the product with the given id.
    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|product| &product.id == id)
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Assign a fresh id to a new product and place it first.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the product fails validation or the id
    /// generator returned an id that is already in use.
    pub fn create(&mut self, product: NewProduct) -> Result<Product, StoreError> {
        let id = self.ids.next_id();

        if self.find(&id).is_some() {
            return Err(StoreError::DuplicateId(id));
        }

        let product = Product::from_new(id, product);

        check_valid(&product)?;

        debug!(product_id = %product.id, "inserting product at front of store");

        self.products.insert(0, product.clone());

        Ok(product)
    }

    /// Replace the product at `index` wholesale.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if `index` is out of bounds, the update carries
    /// a different id, or the product fails validation. An out-of-bounds
    /// index means the caller's bookkeeping is wrong.
    pub fn update(&mut self, index: usize, product: Product) -> Result<(), StoreError> {
        let len = self.products.len();

        let Some(slot) = self.products.get_mut(index) else {
            error!(index, len, "product update targeted a missing position");

            return Err(StoreError::IndexOutOfBounds { index, len });
        };

        if slot.id != product.id {
            return Err(StoreError::IdMismatch {
                index,
                expected: slot.id.clone(),
                found: product.id,
            });
        }

        check_valid(&product)?;

        debug!(product_id = %product.id, index, "replacing product");

        *slot = product;

        Ok(())
    }

    /// Remove the product with the given id. Missing ids are ignored.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.position(id)?;

        debug!(product_id = %id, index, "removing product");

        Some(self.products.remove(index))
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ProductStore {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

impl fmt::Debug for ProductStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductStore")
            .field("products", &self.products)
            .finish_non_exhaustive()
    }
}

fn check_valid(product: &Product) -> Result<(), StoreError> {
    let report = product.validate();

    if report.is_clear() {
        Ok(())
    } else {
        Err(StoreError::Invalid(report))
    }
}
