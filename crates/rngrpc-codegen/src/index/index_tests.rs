#![allow(non_snake_case)]

use super::*;
use crate::model::{FieldKind, FieldModel};

fn shapes_file() -> FileModel {
    FileModel::new("geo/shapes.proto", "geo").with_message(
        MessageModel::new("Polygon")
            .with_field(FieldModel::new("name", FieldKind::String))
            .with_nested(
                MessageModel::new("Point").with_nested(MessageModel::new("Label")),
            ),
    )
}

fn common_file() -> FileModel {
    let mut file =
        FileModel::new("common/meta.proto", "common").with_message(MessageModel::new("Meta"));
    file.java_package = Some("com.example.common".into());
    file
}

// ============================================================================
// build / resolve
// ============================================================================

#[test]
fn SchemaIndex___build___indexes_nested_messages() {
    let file = shapes_file();

    let index = SchemaIndex::build([&file]);

    let names: Vec<&str> = index.names().collect();
    assert_eq!(
        names,
        vec![".geo.Polygon", ".geo.Polygon.Point", ".geo.Polygon.Point.Label"]
    );
    assert_eq!(index.len(), 3);
}

#[test]
fn SchemaIndex___resolve___finds_model_and_path() {
    let file = shapes_file();
    let index = SchemaIndex::build([&file]);

    let resolved = index.resolve(".geo.Polygon.Point").unwrap();

    assert_eq!(resolved.model.name, "Point");
    assert_eq!(resolved.path(), &["Polygon", "Point"]);
    assert_eq!(resolved.file.name, "geo/shapes.proto");
}

#[test]
fn SchemaIndex___resolve___leading_dot_is_optional() {
    let file = shapes_file();
    let index = SchemaIndex::build([&file]);

    assert!(index.resolve("geo.Polygon").is_some());
}

#[test]
fn SchemaIndex___resolve___unknown_name___is_none() {
    let file = shapes_file();
    let index = SchemaIndex::build([&file]);

    assert!(index.resolve(".geo.Circle").is_none());
    assert!(index.resolve(".other.Polygon").is_none());
}

#[test]
fn SchemaIndex___build___file_without_package() {
    let file = FileModel::new("bare.proto", "").with_message(MessageModel::new("Ping"));

    let index = SchemaIndex::build([&file]);

    assert!(index.resolve(".Ping").is_some());
}

#[test]
fn SchemaIndex___build___spans_several_files() {
    let shapes = shapes_file();
    let common = common_file();

    let index = SchemaIndex::build([&shapes, &common]);

    assert_eq!(index.resolve(".common.Meta").unwrap().file.name, "common/meta.proto");
    assert_eq!(index.resolve(".geo.Polygon").unwrap().file.name, "geo/shapes.proto");
}

#[test]
fn SchemaIndex___build___duplicate_name_keeps_first() {
    let first = FileModel::new("a.proto", "dup").with_message(MessageModel::new("Same"));
    let second = FileModel::new("b.proto", "dup").with_message(MessageModel::new("Same"));

    let index = SchemaIndex::build([&first, &second]);

    assert_eq!(index.resolve(".dup.Same").unwrap().file.name, "a.proto");
}

#[test]
fn SchemaIndex___default___is_empty() {
    let index = SchemaIndex::default();

    assert!(index.is_empty());
}

// ============================================================================
// Java references
// ============================================================================

#[test]
fn ResolvedMessage___java_type_from___same_file_is_relative() {
    let file = shapes_file();
    let index = SchemaIndex::build([&file]);

    let resolved = index.resolve(".geo.Polygon.Point.Label").unwrap();

    assert_eq!(resolved.java_type_from(&file), "Polygon.Point.Label");
}

#[test]
fn ResolvedMessage___java_type_from___other_file_is_qualified() {
    let shapes = shapes_file();
    let common = common_file();
    let index = SchemaIndex::build([&shapes, &common]);

    let resolved = index.resolve(".common.Meta").unwrap();

    assert_eq!(
        resolved.java_type_from(&shapes),
        "com.example.common.MetaOuterClass.Meta"
    );
}

#[test]
fn ResolvedMessage___qualified_java_type___multiple_files_skips_outer_class() {
    let mut common = common_file();
    common.java_multiple_files = true;
    let index = SchemaIndex::build([&common]);

    let resolved = index.resolve(".common.Meta").unwrap();

    assert_eq!(resolved.qualified_java_type(), "com.example.common.Meta");
}

#[test]
fn ResolvedMessage___qualified_java_type___without_package() {
    let file = FileModel::new("bare.proto", "").with_message(MessageModel::new("Ping"));
    let index = SchemaIndex::build([&file]);

    let resolved = index.resolve(".Ping").unwrap();

    assert_eq!(resolved.qualified_java_type(), "Bare.Ping");
}

#[test]
fn ResolvedMessage___transformer_name___joins_path() {
    let file = shapes_file();
    let index = SchemaIndex::build([&file]);

    let resolved = index.resolve(".geo.Polygon.Point").unwrap();

    assert_eq!(resolved.transformer_name(), "PolygonPointTransformer");
}

fn clashing_file() -> FileModel {
    FileModel::new("clash.proto", "clash")
        .with_message(MessageModel::new("Outer").with_nested(MessageModel::new("Inner")))
        .with_message(MessageModel::new("OuterInner"))
}

#[test]
fn SchemaIndex___build___clashing_transformers___get_suffix() {
    let file = clashing_file();
    let index = SchemaIndex::build([&file]);

    let top = index.resolve(".clash.OuterInner").unwrap();
    let nested = index.resolve(".clash.Outer.Inner").unwrap();

    assert_eq!(top.transformer_name(), "OuterInnerTransformer");
    assert_eq!(nested.transformer_name(), "OuterInner2Transformer");
}

#[test]
fn SchemaIndex___transformer_for___matches_resolved_name() {
    let file = clashing_file();
    let index = SchemaIndex::build([&file]);

    assert_eq!(
        index.transformer_for(&file, &["Outer", "Inner"]),
        "OuterInner2Transformer"
    );
    assert_eq!(index.transformer_for(&file, &["Outer"]), "OuterTransformer");
}

#[test]
fn SchemaIndex___transformer_for___other_file___plain_name() {
    let first = FileModel::new("a.proto", "dup").with_message(MessageModel::new("Twin"));
    let second = FileModel::new("b.proto", "dup").with_message(MessageModel::new("Twin"));
    let index = SchemaIndex::build([&first, &second]);

    assert_eq!(index.transformer_for(&second, &["Twin"]), "TwinTransformer");
    assert_eq!(index.resolve(".dup.Twin").unwrap().file.name, "a.proto");
}

// ============================================================================
// helpers
// ============================================================================

#[test]
fn transformer_name___single_segment() {
    assert_eq!(transformer_name(&["HelloRequest"]), "HelloRequestTransformer");
}

#[test]
fn transformer_name___upper_leads_segments() {
    assert_eq!(transformer_name(&["outer", "inner"]), "OuterInnerTransformer");
}

#[test]
fn fallback_java_type___strips_own_package() {
    assert_eq!(
        fallback_java_type(".helloworld.helloRequest", "helloworld"),
        "HelloRequest"
    );
}

#[test]
fn fallback_java_type___keeps_foreign_qualifier() {
    assert_eq!(
        fallback_java_type(".google.protobuf.Empty", "helloworld"),
        "google.protobuf.Empty"
    );
}

#[test]
fn fallback_java_type___package_prefix_must_end_at_dot() {
    assert_eq!(fallback_java_type(".geometry.Shape", "geo"), "geometry.Shape");
}

#[test]
fn fallback_java_type___without_package() {
    assert_eq!(fallback_java_type(".ping", ""), "Ping");
}
