//! Integration tests for the catalog session controller.
//!
//! Drives the public `Catalog` API through complete create, edit, cancel and
//! delete flows against the demo fixture set.

use std::collections::HashSet;

use testresult::TestResult;

use catalog::prelude::*;

fn demo_catalog() -> Result<Catalog, Box<dyn std::error::Error>> {
    let (reference, products) = Fixture::from_set("demo")?.into_parts();

    Ok(Catalog::with_products(reference, products)?)
}

fn fill_valid(catalog: &mut Catalog) -> Result<(), CatalogError> {
    catalog.edit_field(Field::Title, "Mechanical Keyboard")?;
    catalog.edit_field(Field::Description, "Hot-swappable switches and a solid aluminium case")?;
    catalog.edit_field(Field::ImageUrl, "https://img.example/keyboard.png")?;
    catalog.edit_field(Field::Price, "149")?;

    Ok(())
}

#[test]
fn demo_fixture_seeds_the_store() -> TestResult {
    let catalog = demo_catalog()?;

    assert_eq!(catalog.products().len(), 4);
    assert_eq!(catalog.reference().categories().len(), 5);
    assert!(catalog.products().iter().all(|p| p.validate().is_clear()));

    Ok(())
}

#[test]
fn valid_create_adds_exactly_one_product_at_front() -> TestResult {
    let mut catalog = demo_catalog()?;
    let before: Vec<Product> = catalog.products().to_vec();

    catalog.open_create()?;
    fill_valid(&mut catalog)?;

    let outcome = catalog.submit()?;

    let SubmitOutcome::Created(created) = outcome else {
        return Err(format!("expected Created, got {outcome:?}").into());
    };

    assert_eq!(catalog.products().len(), before.len() + 1);
    assert_eq!(catalog.products().first(), Some(&created));
    assert!(!created.id.as_str().is_empty());
    assert!(before.iter().all(|p| p.id != created.id));
    assert_eq!(catalog.products().get(1..), Some(before.as_slice()));

    Ok(())
}

#[test]
fn created_ids_are_unique() -> TestResult {
    let mut catalog = demo_catalog()?;

    for _ in 0..3 {
        catalog.open_create()?;
        fill_valid(&mut catalog)?;
        catalog.submit()?;
    }

    let ids: HashSet<&ProductId> = catalog.products().iter().map(|p| &p.id).collect();

    assert_eq!(ids.len(), catalog.products().len());

    Ok(())
}

#[test]
fn invalid_create_leaves_store_unchanged_and_reports_failures() -> TestResult {
    let mut catalog = demo_catalog()?;
    let before: Vec<Product> = catalog.products().to_vec();

    catalog.open_create()?;
    fill_valid(&mut catalog)?;
    catalog.edit_field(Field::Title, "ab")?;
    catalog.edit_field(Field::Price, "abc")?;

    let outcome = catalog.submit()?;

    let SubmitOutcome::Rejected(report) = outcome else {
        return Err(format!("expected Rejected, got {outcome:?}").into());
    };

    assert_eq!(
        report.failing_fields().collect::<Vec<_>>(),
        [Field::Title, Field::Price]
    );
    assert_eq!(catalog.errors(), &report);
    assert!(catalog.form().is_open());
    assert_eq!(catalog.products(), before.as_slice());

    Ok(())
}

#[test]
fn corrected_form_can_be_resubmitted() -> TestResult {
    let mut catalog = demo_catalog()?;

    catalog.open_create()?;
    fill_valid(&mut catalog)?;
    catalog.edit_field(Field::Price, "")?;

    assert!(matches!(catalog.submit()?, SubmitOutcome::Rejected(_)));

    catalog.edit_field(Field::Price, "99")?;

    assert!(!catalog.errors().has_error(Field::Price));
    assert!(matches!(catalog.submit()?, SubmitOutcome::Created(_)));

    Ok(())
}

#[test]
fn edit_replaces_product_in_place() -> TestResult {
    let mut catalog = demo_catalog()?;
    let before: Vec<Product> = catalog.products().to_vec();
    let original = before.get(1).ok_or("missing product")?.clone();

    catalog.open_edit(1)?;
    catalog.edit_field(Field::Price, "99")?;

    let first_original = original.colors.iter().next().ok_or("missing color")?.clone();
    catalog.toggle_color(first_original.clone())?;
    catalog.toggle_color("#84D2C5")?;

    let outcome = catalog.submit()?;

    assert!(matches!(outcome, SubmitOutcome::Updated { index: 1, .. }));

    let updated = catalog.products().get(1).ok_or("missing updated product")?;

    assert_eq!(catalog.products().len(), before.len());
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.price, "99");
    assert_eq!(updated.title, original.title);
    assert!(!updated.colors.contains(&first_original));
    assert!(updated.colors.contains(&Color::from("#84D2C5")));

    let kept: Vec<&Color> = original
        .colors
        .iter()
        .filter(|color| **color != first_original)
        .collect();

    assert!(kept.iter().all(|color| updated.colors.contains(color)));
    assert_eq!(catalog.products().first(), before.first());

    Ok(())
}

#[test]
fn invalid_edit_keeps_original_product() -> TestResult {
    let mut catalog = demo_catalog()?;
    let before: Vec<Product> = catalog.products().to_vec();

    catalog.open_edit(0)?;
    catalog.edit_field(Field::ImageUrl, "not a url")?;

    let outcome = catalog.submit()?;

    assert!(
        matches!(outcome, SubmitOutcome::Rejected(report) if report.has_error(Field::ImageUrl)),
        "expected an image URL error"
    );
    assert!(catalog.form().is_open());
    assert_eq!(catalog.products(), before.as_slice());

    Ok(())
}

#[test]
fn cancelling_any_session_leaves_store_identical() -> TestResult {
    let mut catalog = demo_catalog()?;
    let before: Vec<Product> = catalog.products().to_vec();

    catalog.open_create()?;
    fill_valid(&mut catalog)?;
    catalog.toggle_color("#A31ACB")?;

    assert!(catalog.cancel());
    assert_eq!(catalog.products(), before.as_slice());
    assert!(!catalog.modals().create.is_open());

    catalog.open_edit(2)?;
    catalog.edit_field(Field::Title, "Something else entirely")?;
    catalog.toggle_color("#13005A")?;

    assert!(catalog.cancel());
    assert_eq!(catalog.products(), before.as_slice());
    assert!(!catalog.modals().edit.is_open());
    assert!(!catalog.cancel());

    Ok(())
}

#[test]
fn reopening_create_starts_from_a_clean_draft() -> TestResult {
    let mut catalog = demo_catalog()?;

    catalog.open_create()?;
    catalog.edit_field(Field::Title, "x")?;
    catalog.toggle_color("#A31ACB")?;
    catalog.submit()?;
    catalog.cancel();

    catalog.open_create()?;

    let draft = catalog.form().draft().ok_or("missing draft")?;

    assert_eq!(draft.fields, ProductFields::default());
    assert!(draft.colors.is_empty());
    assert!(draft.errors.is_clear());

    Ok(())
}

#[test]
fn toggle_pair_restores_selection() -> TestResult {
    let mut catalog = demo_catalog()?;

    catalog.open_create()?;

    assert!(catalog.toggle_color("#1F8A70")?);
    assert!(!catalog.toggle_color("#1F8A70")?);
    assert_eq!(catalog.form().colors(), Some(&ColorSet::new()));

    Ok(())
}

#[test]
fn delete_then_delete_again_is_a_noop() -> TestResult {
    let mut catalog = demo_catalog()?;
    let target = catalog.products().first().ok_or("missing product")?.id.clone();

    catalog.request_delete(&target)?;

    let removed = catalog.confirm_delete();

    assert_eq!(removed.map(|p| p.id), Some(target.clone()));
    assert_eq!(catalog.products().len(), 3);
    assert!(catalog.products().iter().all(|p| p.id != target));

    assert!(matches!(
        catalog.request_delete(&target),
        Err(CatalogError::ProductNotFound(_))
    ));
    assert_eq!(catalog.confirm_delete(), None);
    assert_eq!(catalog.products().len(), 3);

    Ok(())
}

#[test]
fn delete_runs_alongside_an_open_form() -> TestResult {
    let mut catalog = demo_catalog()?;
    let target = catalog.products().get(3).ok_or("missing product")?.id.clone();

    catalog.open_create()?;
    catalog.edit_field(Field::Title, "Draft in progress")?;
    catalog.request_delete(&target)?;
    catalog.confirm_delete();

    let draft = catalog.form().draft().ok_or("missing draft")?;

    assert_eq!(draft.fields.title, "Draft in progress");
    assert_eq!(catalog.products().len(), 3);

    Ok(())
}

#[test]
fn edit_survives_delete_of_an_earlier_product() -> TestResult {
    let mut catalog = demo_catalog()?;
    let edited = catalog.products().get(1).ok_or("missing product")?.id.clone();
    let earlier = catalog.products().first().ok_or("missing product")?.id.clone();

    catalog.open_edit(1)?;
    catalog.edit_field(Field::Price, "77")?;
    catalog.request_delete(&earlier)?;
    catalog.confirm_delete();

    let outcome = catalog.submit()?;

    assert!(matches!(outcome, SubmitOutcome::Updated { index: 0, .. }));

    let updated = catalog.store().find(&edited).ok_or("missing edited product")?;

    assert_eq!(updated.price, "77");
    assert_eq!(catalog.products().len(), 3);
    assert!(!catalog.form().is_open());

    Ok(())
}

#[test]
fn cards_follow_store_order() -> TestResult {
    let mut catalog = demo_catalog()?;

    catalog.open_create()?;
    fill_valid(&mut catalog)?;
    catalog.submit()?;

    let cards = catalog.cards();

    assert_eq!(cards.len(), catalog.products().len());
    assert_eq!(cards.first().map(|c| c.title.as_str()), Some("Mechanical Keyboard"));
    assert_eq!(cards.first().map(|c| c.price.as_str()), Some("$149"));

    Ok(())
}

#[test]
fn store_remove_of_missing_id_is_silent() -> TestResult {
    let (_, products) = Fixture::from_set("demo")?.into_parts();
    let mut store = ProductStore::with_products(products)?;
    let before: Vec<Product> = store.list().to_vec();

    assert!(store.remove(&ProductId::new("does-not-exist")).is_none());
    assert_eq!(store.list(), before.as_slice());

    Ok(())
}
