//! List presentation
//!
//! Pure derivation of renderable product cards from the store, plus a
//! terminal table renderer for the cards.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color as CellColor, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{ids::ProductId, products::Product, validation::ErrorReport};

/// Title length shown on a card before truncation.
pub const CARD_TITLE_LEN: usize = 25;

/// Description length shown on a card before truncation.
pub const CARD_DESCRIPTION_LEN: usize = 50;

/// Errors that can occur while writing presentation output.
#[derive(Debug, Error)]
pub enum PresentationError {
    /// Writing to the output failed.
    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Display model for a single product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Product id
    pub id: ProductId,

    /// Truncated title
    pub title: String,

    /// Truncated description
    pub description: String,

    /// Image URL
    pub image_url: String,

    /// Price with currency symbol
    pub price: String,

    /// Color values
    pub colors: Vec<String>,

    /// Category name
    pub category_name: String,

    /// Category image URL
    pub category_image_url: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: text_slice(&product.title, CARD_TITLE_LEN),
            description: text_slice(&product.description, CARD_DESCRIPTION_LEN),
            image_url: product.image_url.clone(),
            price: format!("${}", product.price.trim()),
            colors: product.colors.to_strs(),
            category_name: product.category.name.clone(),
            category_image_url: product.category.image_url.clone(),
        }
    }
}

/// Derive cards for every product, in store order.
pub fn cards<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<ProductCard> {
    products.into_iter().map(ProductCard::from).collect()
}

/// Shorten `text` to `max` characters, appending an ellipsis when the text
/// is at least `max` characters long.
pub fn text_slice(text: &str, max: usize) -> String {
    if text.chars().count() >= max {
        let mut sliced: String = text.chars().take(max).collect();
        sliced.push_str("...");

        return sliced;
    }

    text.to_string()
}

/// Render cards as a table.
///
/// # Errors
///
/// Returns a `PresentationError` if writing to `out` fails.
pub fn write_table(
    mut out: impl io::Write,
    cards: &[ProductCard],
) -> Result<(), PresentationError> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Title", "Description", "Price", "Colors", "Category", "Id"]);

    for (index, card) in cards.iter().enumerate() {
        builder.push_record([
            index.to_string(),
            card.title.clone(),
            card.description.clone(),
            card.price.clone(),
            card.colors.join(", "),
            card.category_name.clone(),
            card.id.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), CellColor::BOLD);
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "{} product(s)", cards.len())?;

    Ok(())
}

/// Render the failing fields of a report, one per line.
///
/// # Errors
///
/// Returns a `PresentationError` if writing to `out` fails.
pub fn write_errors(
    mut out: impl io::Write,
    report: &ErrorReport,
) -> Result<(), PresentationError> {
    for field in report.failing_fields() {
        writeln!(out, "{field}: {}", report.get(field))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        categories::Category,
        colors::ColorSet,
        validation::{Field, ProductFields, validate},
    };

    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new("c-1"),
            title: "An exceptionally long product title".to_string(),
            description: "Short description".to_string(),
            image_url: "https://img.example/c.png".to_string(),
            price: "120".to_string(),
            colors: ColorSet::from_strs(&["#FF0000", "#00FF00"]),
            category: Category::new("Cars", "https://img.example/cars.png"),
        }
    }

    #[test]
    fn text_slice_truncates_at_limit() {
        assert_eq!(text_slice("abcdef", 3), "abc...");
        assert_eq!(text_slice("abc", 3), "abc...");
        assert_eq!(text_slice("ab", 3), "ab");
    }

    #[test]
    fn text_slice_respects_character_boundaries() {
        assert_eq!(text_slice("ääää", 2), "ää...");
    }

    #[test]
    fn card_derives_display_fields() {
        let card = ProductCard::from(&product());

        assert_eq!(card.title, "An exceptionally long pro...");
        assert_eq!(card.description, "Short description");
        assert_eq!(card.price, "$120");
        assert_eq!(card.colors, ["#FF0000", "#00FF00"]);
        assert_eq!(card.category_name, "Cars");
    }

    #[test]
    fn cards_keep_store_order() {
        let mut second = product();
        second.id = ProductId::new("c-2");

        let products = [product(), second];
        let derived = cards(&products);

        assert_eq!(
            derived.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            ["c-1", "c-2"]
        );
    }

    #[test]
    fn write_table_lists_every_card() -> TestResult {
        let mut out = Vec::new();

        write_table(&mut out, &cards(&[product()]))?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("An exceptionally long pro..."));
        assert!(rendered.contains("$120"));
        assert!(rendered.contains("1 product(s)"));

        Ok(())
    }

    #[test]
    fn write_errors_skips_passing_fields() -> TestResult {
        let report = validate(&ProductFields {
            title: "Fine title".to_string(),
            description: "Fine description".to_string(),
            image_url: "https://img.example/ok.png".to_string(),
            price: "abc".to_string(),
        });
        let mut out = Vec::new();

        write_errors(&mut out, &report)?;

        let rendered = String::from_utf8(out)?;

        assert_eq!(rendered, format!("price: {}\n", report.get(Field::Price)));

        Ok(())
    }
}
