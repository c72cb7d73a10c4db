//! Catalog command line entry point

use std::io::{self, Write};

use anyhow::{Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::{
    catalog::{Catalog, SubmitOutcome},
    colors::Color,
    fixtures::Fixture,
    ids::ProductId,
    presentation::{write_errors, write_table},
    validation::{Field, ProductFields, validate},
};

use crate::config::{CatalogConfig, Command, FieldArgs};

mod config;

fn main() -> Result<()> {
    let config = CatalogConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    info!(fixture = %config.fixture.display(), "loading catalog");

    let (reference, products) = Fixture::from_path(&config.fixture)?.into_parts();
    let mut catalog = Catalog::with_products(reference, products)?;

    let mut out = io::stdout().lock();

    match config.command {
        Command::List => {}
        Command::Add {
            fields,
            colors,
            category,
        } => {
            catalog.open_create()?;
            apply_form(&mut catalog, fields, &colors, category.as_deref())?;
            submit(&mut catalog, &mut out)?;
        }
        Command::Edit {
            index,
            fields,
            colors,
            category,
        } => {
            catalog.open_edit(index)?;
            apply_form(&mut catalog, fields, &colors, category.as_deref())?;
            submit(&mut catalog, &mut out)?;
        }
        Command::Delete { id } => {
            catalog.request_delete(&ProductId::new(id))?;
            catalog.confirm_delete();
        }
        Command::Validate { fields } => {
            let report = validate(&ProductFields {
                title: fields.title.unwrap_or_default(),
                description: fields.description.unwrap_or_default(),
                image_url: fields.image_url.unwrap_or_default(),
                price: fields.price.unwrap_or_default(),
            });

            if report.is_clear() {
                writeln!(out, "valid")?;

                return Ok(());
            }

            write_errors(&mut out, &report)?;

            bail!("validation failed");
        }
    }

    write_table(&mut out, &catalog.cards())?;

    Ok(())
}

fn apply_form(
    catalog: &mut Catalog,
    fields: FieldArgs,
    colors: &[String],
    category: Option<&str>,
) -> Result<()> {
    let values = [
        (Field::Title, fields.title),
        (Field::Description, fields.description),
        (Field::ImageUrl, fields.image_url),
        (Field::Price, fields.price),
    ];

    for (field, value) in values {
        if let Some(value) = value {
            catalog.edit_field(field, value)?;
        }
    }

    for color in colors {
        catalog.toggle_color(Color::new(color.as_str()))?;
    }

    if let Some(name) = category {
        catalog.select_category(name)?;
    }

    Ok(())
}

fn submit(catalog: &mut Catalog, out: &mut impl Write) -> Result<()> {
    match catalog.submit()? {
        SubmitOutcome::Rejected(report) => {
            write_errors(&mut *out, &report)?;

            bail!("product was rejected");
        }
        SubmitOutcome::Created(product) => writeln!(out, "created {}", product.id)?,
        SubmitOutcome::Updated { index, product } => {
            writeln!(out, "updated #{index} ({})", product.id)?;
        }
    }

    Ok(())
}
