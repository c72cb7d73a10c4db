//! Products

use crate::{
    categories::Category,
    colors::ColorSet,
    ids::ProductId,
    validation::{ErrorReport, ProductFields, validate},
};

/// A committed catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product identifier, never reassigned
    pub id: ProductId,

    /// Product title
    pub title: String,

    /// Product description
    pub description: String,

    /// Product image URL
    pub image_url: String,

    /// Product price, kept as text
    pub price: String,

    /// Product colors
    pub colors: ColorSet,

    /// Product category, held by value
    pub category: Category,
}

impl Product {
    /// Assemble a product from an id and new product data.
    pub fn from_new(id: ProductId, product: NewProduct) -> Self {
        let NewProduct {
            fields,
            colors,
            category,
        } = product;

        Self {
            id,
            title: fields.title,
            description: fields.description,
            image_url: fields.image_url,
            price: fields.price,
            colors,
            category,
        }
    }

    /// Copy out the editable text fields.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            price: self.price.clone(),
        }
    }

    /// Validate the product's editable fields.
    pub fn validate(&self) -> ErrorReport {
        validate(&self.fields())
    }
}

/// Data for a product that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProduct {
    /// Editable text fields
    pub fields: ProductFields,

    /// Selected colors
    pub colors: ColorSet,

    /// Selected category
    pub category: Category,
}
