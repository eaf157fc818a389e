//! Tests for naming tag parsing.

use super::Tag;

#[test]
fn plain_name_has_no_modifiers() {
    let tag = Tag::parse("name1");

    assert_eq!(tag.name, "name1");
    assert!(tag.modifiers.is_empty());
    assert!(!tag.is_excluded());
}

#[test]
fn modifiers_follow_the_name() {
    let tag = Tag::parse("name2,omitempty");

    assert_eq!(tag.name, "name2");
    assert_eq!(tag.modifiers, vec!["omitempty".to_string()]);
}

#[test]
fn several_modifiers_keep_their_order() {
    let tag = Tag::parse("limits,inline,omitempty");

    assert_eq!(tag.modifiers, vec!["inline", "omitempty"]);
}

#[test]
fn empty_tag_is_excluded() {
    let tag = Tag::parse("");

    assert_eq!(tag, Tag::default());
    assert!(tag.is_excluded());
}

#[test]
fn dash_is_excluded() {
    assert!(Tag::parse("-").is_excluded());
}

#[test]
fn inline_only_tag_is_excluded() {
    let tag = Tag::parse(",inline");

    assert!(tag.is_excluded());
    assert_eq!(tag.modifiers, vec!["inline"]);
}
