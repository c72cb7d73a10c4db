//! Fixtures
//!
//! Reference data (categories and the color palette) and the seed product
//! list, loaded from YAML.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::ReferenceData,
    categories::Category,
    colors::{Color, ColorSet, Palette},
    ids::ProductId,
    products::Product,
    validation::ErrorReport,
};

/// Default directory holding fixture sets.
pub const DEFAULT_FIXTURE_DIR: &str = "./fixtures";

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// No categories defined
    #[error("Fixture defines no categories")]
    NoCategories,

    /// Product references a category that is not defined
    #[error("Product {product} references unknown category: {category}")]
    UnknownCategory {
        /// Product id
        product: String,
        /// Category name
        category: String,
    },

    /// Product uses a color outside the palette
    #[error("Product {product} uses color outside the palette: {color}")]
    UnknownColor {
        /// Product id
        product: String,
        /// Color value
        color: String,
    },

    /// Two products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Seed product fails validation
    #[error("Product {product} is invalid: {report}")]
    InvalidProduct {
        /// Product id
        product: String,
        /// Validation report
        report: ErrorReport,
    },
}

/// Wrapper for a catalog fixture in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Available categories
    pub categories: Vec<Category>,

    /// Color palette
    #[serde(default)]
    pub colors: Vec<Color>,

    /// Seed products
    #[serde(default)]
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: String,

    /// Product title
    pub title: String,

    /// Product description
    pub description: String,

    /// Product image URL
    pub image_url: String,

    /// Product price, e.g. "4999"
    pub price: String,

    /// Product colors
    #[serde(default)]
    pub colors: Vec<Color>,

    /// Category name
    pub category: String,
}

/// Loaded fixture: reference data plus seed products in file order.
#[derive(Debug)]
pub struct Fixture {
    reference: ReferenceData,
    products: Vec<Product>,
}

impl Fixture {
    /// Load a named fixture set from the default fixture directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_path(Path::new(DEFAULT_FIXTURE_DIR).join(format!("{name}.yml")))
    }

    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&contents)
    }

    /// Load a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, no categories are defined,
    /// or a seed product is invalid, duplicated, or references unknown
    /// reference data.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

        if fixture.categories.is_empty() {
            return Err(FixtureError::NoCategories);
        }

        let palette = Palette::new(fixture.colors);

        let categories_by_name: FxHashMap<&str, &Category> = fixture
            .categories
            .iter()
            .map(|category| (category.name.as_str(), category))
            .collect();

        let mut products: Vec<Product> = Vec::with_capacity(fixture.products.len());

        for product_fixture in fixture.products {
            if products
                .iter()
                .any(|existing| existing.id.as_str() == product_fixture.id)
            {
                return Err(FixtureError::DuplicateProduct(product_fixture.id));
            }

            let product = build_product(product_fixture, &categories_by_name, &palette)?;

            products.push(product);
        }

        Ok(Self {
            reference: ReferenceData::new(fixture.categories, palette),
            products,
        })
    }

    /// Reference data defined by the fixture.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Seed products in file order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Split into reference data and seed products.
    pub fn into_parts(self) -> (ReferenceData, Vec<Product>) {
        (self.reference, self.products)
    }
}

fn build_product(
    fixture: ProductFixture,
    categories: &FxHashMap<&str, &Category>,
    palette: &Palette,
) -> Result<Product, FixtureError> {
    let category = categories
        .get(fixture.category.as_str())
        .map(|category| (*category).clone())
        .ok_or_else(|| FixtureError::UnknownCategory {
            product: fixture.id.clone(),
            category: fixture.category.clone(),
        })?;

    if let Some(color) = fixture.colors.iter().find(|color| !palette.contains(color)) {
        return Err(FixtureError::UnknownColor {
            product: fixture.id,
            color: color.to_string(),
        });
    }

    let product = Product {
        id: ProductId::new(fixture.id),
        title: fixture.title,
        description: fixture.description,
        image_url: fixture.image_url,
        price: fixture.price,
        colors: fixture.colors.into_iter().collect::<ColorSet>(),
        category,
    };

    let report = product.validate();

    if !report.is_clear() {
        return Err(FixtureError::InvalidProduct {
            product: product.id.to_string(),
            report,
        });
    }

    Ok(product)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::*;

    const YAML: &str = r##"
categories:
  - name: Cars
    image_url: https://img.example/cars.png
  - name: Clothes
    image_url: https://img.example/clothes.png
colors:
  - "#A31ACB"
  - "#FF6E31"
products:
  - id: car-1
    title: 2022 Genesis GV70
    description: A luxury compact SUV with a spacious cabin.
    image_url: https://img.example/gv70.png
    price: "500000"
    colors: ["#A31ACB"]
    category: Cars
  - id: shirt-1
    title: Plain shirt
    description: Cotton shirt in a regular fit.
    image_url: https://img.example/shirt.png
    price: "25"
    category: Clothes
"##;

    #[test]
    fn from_yaml_loads_reference_data_and_products() -> TestResult {
        let fixture = Fixture::from_yaml(YAML)?;

        assert_eq!(fixture.reference().categories().len(), 2);
        assert_eq!(fixture.reference().palette().len(), 2);
        assert_eq!(fixture.products().len(), 2);

        let first = fixture.products().first().ok_or("missing product")?;

        assert_eq!(first.id.as_str(), "car-1");
        assert_eq!(first.category.name, "Cars");
        assert_eq!(first.colors.to_strs(), ["#A31ACB"]);

        Ok(())
    }

    #[test]
    fn unknown_category_is_rejected() {
        let yaml = YAML.replace("category: Clothes", "category: Toys");

        let result = Fixture::from_yaml(&yaml);

        assert!(
            matches!(
                &result,
                Err(FixtureError::UnknownCategory { category, .. }) if category == "Toys"
            ),
            "expected UnknownCategory, got {result:?}"
        );
    }

    #[test]
    fn color_outside_palette_is_rejected() {
        let yaml = YAML.replace(r##"colors: ["#A31ACB"]"##, r##"colors: ["#000000"]"##);

        let result = Fixture::from_yaml(&yaml);

        assert!(matches!(result, Err(FixtureError::UnknownColor { .. })));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let yaml = YAML.replace("id: shirt-1", "id: car-1");

        let result = Fixture::from_yaml(&yaml);

        assert!(matches!(result, Err(FixtureError::DuplicateProduct(id)) if id == "car-1"));
    }

    #[test]
    fn invalid_seed_product_is_rejected() {
        let yaml = YAML.replace("price: \"25\"", "price: \"cheap\"");

        let result = Fixture::from_yaml(&yaml);

        assert!(matches!(
            result,
            Err(FixtureError::InvalidProduct { product, .. }) if product == "shirt-1"
        ));
    }

    #[test]
    fn empty_categories_are_rejected() {
        let result = Fixture::from_yaml("categories: []\n");

        assert!(matches!(result, Err(FixtureError::NoCategories)));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let result = Fixture::from_yaml("categories: [");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn from_path_reads_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(YAML.as_bytes())?;

        let fixture = Fixture::from_path(file.path())?;

        assert_eq!(fixture.products().len(), 2);

        Ok(())
    }

    #[test]
    fn from_path_reports_missing_file() {
        let result = Fixture::from_path("/definitely/not/here.yml");

        assert!(matches!(result, Err(FixtureError::Io { .. })));
    }
}
