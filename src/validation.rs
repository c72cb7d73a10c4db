//! Validation
//!
//! Field-level validation of the editable product fields. The validator is a
//! pure function: it never mutates its input and always produces a complete
//! [`ErrorReport`], with an empty message for every passing field.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

/// Minimum title length (characters, after trimming).
pub const TITLE_MIN_LEN: usize = 3;

/// Maximum title length (characters, after trimming).
pub const TITLE_MAX_LEN: usize = 80;

/// Minimum description length (characters, after trimming).
pub const DESCRIPTION_MIN_LEN: usize = 10;

/// Maximum description length (characters, after trimming).
pub const DESCRIPTION_MAX_LEN: usize = 900;

/// Message reported for an out-of-range title.
pub const TITLE_MESSAGE: &str = "Product title must be between 3 and 80 characters!";

/// Message reported for an out-of-range description.
pub const DESCRIPTION_MESSAGE: &str =
    "Product description must be between 10 and 900 characters!";

/// Message reported for a missing or malformed image URL.
pub const IMAGE_URL_MESSAGE: &str = "Valid image URL is required";

/// Message reported for a missing or non-numeric price.
pub const PRICE_MESSAGE: &str = "Valid price is required!";

static IMAGE_URL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#));

/// An editable, validated product field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Product title
    Title,

    /// Product description
    Description,

    /// Product image URL
    ImageUrl,

    /// Product price
    Price,
}

impl Field {
    /// All validated fields, in display order.
    pub const ALL: [Field; 4] = [
        Field::Title,
        Field::Description,
        Field::ImageUrl,
        Field::Price,
    ];

    /// The field name used by form bindings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::ImageUrl => "imageURL",
            Field::Price => "price",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a form binding names a field that does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown product field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Field::Title),
            "description" => Ok(Field::Description),
            "imageURL" | "image_url" => Ok(Field::ImageUrl),
            "price" => Ok(Field::Price),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// The editable text fields of a product, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFields {
    /// Product title
    pub title: String,

    /// Product description
    pub description: String,

    /// Product image URL
    pub image_url: String,

    /// Product price, kept as text
    pub price: String,
}

impl ProductFields {
    /// Read a field value.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::ImageUrl => &self.image_url,
            Field::Price => &self.price,
        }
    }

    /// Overwrite a field value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::ImageUrl => &mut self.image_url,
            Field::Price => &mut self.price,
        };

        *slot = value.into();
    }
}

/// Per-field validation messages. An empty message means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    title: String,
    description: String,
    image_url: String,
    price: String,
}

impl ErrorReport {
    /// An empty report.
    pub const fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            price: String::new(),
        }
    }

    /// The message for a field, empty when the field has no error.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::ImageUrl => &self.image_url,
            Field::Price => &self.price,
        }
    }

    /// Record a message for a field.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot_mut(field) = message.into();
    }

    /// Clear a single field's message.
    pub fn clear(&mut self, field: Field) {
        self.slot_mut(field).clear();
    }

    /// Whether the field currently carries a message.
    pub fn has_error(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    /// Submission may proceed only when every field message is empty.
    ///
    /// The requirement "some message is empty and every message is empty"
    /// reduces to the second clause for a fixed, non-empty set of fields.
    pub fn is_clear(&self) -> bool {
        Field::ALL.iter().all(|field| !self.has_error(*field))
    }

    /// Fields that currently carry a message.
    pub fn failing_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(|field| self.has_error(*field))
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::ImageUrl => &mut self.image_url,
            Field::Price => &mut self.price,
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for field in self.failing_fields() {
            if !first {
                f.write_str("; ")?;
            }

            write!(f, "{field}: {}", self.get(field))?;
            first = false;
        }

        Ok(())
    }
}

/// Validate the editable fields of a product.
pub fn validate(fields: &ProductFields) -> ErrorReport {
    let mut report = ErrorReport::default();

    if !length_within(&fields.title, TITLE_MIN_LEN, TITLE_MAX_LEN) {
        report.set(Field::Title, TITLE_MESSAGE);
    }

    if !length_within(&fields.description, DESCRIPTION_MIN_LEN, DESCRIPTION_MAX_LEN) {
        report.set(Field::Description, DESCRIPTION_MESSAGE);
    }

    if fields.image_url.trim().is_empty() || !is_image_url(&fields.image_url) {
        report.set(Field::ImageUrl, IMAGE_URL_MESSAGE);
    }

    if !is_price(&fields.price) {
        report.set(Field::Price, PRICE_MESSAGE);
    }

    report
}

fn length_within(value: &str, min: usize, max: usize) -> bool {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return false;
    }

    let len = trimmed.chars().count();

    (min..=max).contains(&len)
}

fn is_image_url(value: &str) -> bool {
    IMAGE_URL_PATTERN
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(value))
}

fn is_price(value: &str) -> bool {
    let trimmed = value.trim();

    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}
