//! Tests for field enumeration and embedding promotion.

use super::{Describe, Field, FieldShape, TypeDescriptor, visible_fields};

#[derive(Default)]
struct Backoff {
    min_period: u64,
    max_retries: u32,
}

impl Describe for Backoff {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::leaf("min_period", "min_period", &self.min_period),
            Field::leaf("max_retries", "max_retries", &self.max_retries),
        ]
    }
}

#[derive(Default)]
struct Client {
    backoff: Backoff,
    max_retries: u32,
    address: String,
}

impl Describe for Client {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::embedded("backoff", ",inline", &self.backoff),
            Field::leaf("max_retries", "max_retries", &self.max_retries),
            Field::leaf("address", "address", &self.address),
        ]
    }
}

fn idents(value: &dyn Describe) -> Vec<&'static str> {
    visible_fields(value)
        .into_iter()
        .map(|vf| vf.field.ident)
        .collect()
}

#[test]
fn declaration_order_without_embedding() {
    assert_eq!(idents(&Backoff::default()), ["min_period", "max_retries"]);
}

#[test]
fn promoted_fields_follow_their_embedding_field() {
    assert_eq!(
        idents(&Client::default()),
        ["backoff", "min_period", "max_retries", "address"]
    );
}

#[test]
fn shallower_field_wins_collision() {
    let client = Client::default();
    let fields = visible_fields(&client);
    let retries = fields
        .iter()
        .find(|vf| vf.field.ident == "max_retries")
        .unwrap();

    assert_eq!(retries.depth, 0);
    assert_eq!(retries.path, ["max_retries"]);
}

#[test]
fn promoted_field_path_includes_embedding_field() {
    let client = Client::default();
    let fields = visible_fields(&client);
    let min_period = fields
        .iter()
        .find(|vf| vf.field.ident == "min_period")
        .unwrap();

    assert_eq!(min_period.depth, 1);
    assert_eq!(min_period.path, ["backoff", "min_period"]);
}

#[test]
fn field_constructors_set_shape_and_type() {
    let client = Client::default();
    let fields = client.fields();

    assert!(matches!(fields[0].shape, FieldShape::Embedded(_)));
    assert_eq!(fields[0].ty, TypeDescriptor::structure::<Backoff>());
    assert!(matches!(fields[1].shape, FieldShape::Leaf));
    assert_eq!(fields[1].ty, TypeDescriptor::Int);
    assert_eq!(fields[2].ty, TypeDescriptor::Other("string"));
}
