//! Tests for tree construction.

use crate::schema::TypeDescriptor;
use crate::test_fixtures::{EmptyConfig, ServerConfig, TestConfig};

use super::{ConfigNode, ROOT_NAME, StorageKey, build_tree};

fn names(node: &ConfigNode) -> Vec<&str> {
    node.children().iter().map(|c| c.name.as_str()).collect()
}

mod shape {
    use super::*;

    #[test]
    fn root_is_named_and_untyped() {
        let tree = build_tree(&TestConfig::default());

        assert_eq!(tree.name, ROOT_NAME);
        assert!(tree.declared_type.is_none());
        assert!(!tree.is_leaf());
    }

    #[test]
    fn children_follow_declaration_order() {
        let tree = build_tree(&TestConfig::default());

        assert_eq!(
            names(&tree),
            ["name1", "name2", "server", "limits", "empty", "legacy", "old_mode"]
        );
        assert_eq!(
            names(tree.child("server").unwrap()),
            ["port", "timeout", "tls"]
        );
    }

    #[test]
    fn node_count_covers_documentable_fields() {
        let tree = build_tree(&TestConfig::default());

        assert_eq!(tree.node_count(), 14);
    }

    #[test]
    fn modifiers_come_from_tag() {
        let tree = build_tree(&TestConfig::default());

        assert!(tree.child("name1").unwrap().modifiers.is_empty());
        assert_eq!(tree.child("name2").unwrap().modifiers, ["omitempty"]);
    }

    #[test]
    fn nested_struct_is_branch_with_struct_type() {
        let tree = build_tree(&TestConfig::default());
        let server = tree.child("server").unwrap();

        assert!(!server.is_leaf());
        assert_eq!(
            server.declared_type,
            Some(TypeDescriptor::structure::<ServerConfig>())
        );
        assert!(server.storage_key().is_none());
    }

    #[test]
    fn struct_without_fields_is_empty_branch() {
        let tree = build_tree(&TestConfig::default());
        let empty = tree.child("empty").unwrap();

        assert!(!empty.is_leaf());
        assert!(empty.children().is_empty());
        assert_eq!(
            empty.declared_type,
            Some(TypeDescriptor::structure::<EmptyConfig>())
        );
    }

    #[test]
    fn fresh_tree_has_no_annotations() {
        let tree = build_tree(&TestConfig::default());

        assert!(tree.lookup("server.port").unwrap().bound_flag.is_none());
        assert!(!tree.child("server").unwrap().is_root_block());
        assert!(tree.child("name1").unwrap().description.is_empty());
    }
}

mod exclusion {
    use super::*;

    #[test]
    fn dash_tagged_struct_is_skipped_with_descendants() {
        let tree = build_tree(&TestConfig::default());

        assert!(tree.child("skipped").is_none());
        assert_eq!(
            tree.children()
                .iter()
                .filter(|c| c.name == "server")
                .count(),
            1
        );
    }

    #[test]
    fn dash_and_empty_tagged_leaves_are_skipped() {
        let tree = build_tree(&TestConfig::default());

        assert_eq!(names(tree.child("limits").unwrap()), ["max_size", "ratios"]);
    }
}

mod storage_keys {
    use super::*;

    #[test]
    fn leaf_keys_are_identifier_paths() {
        let tree = build_tree(&TestConfig::default());

        assert_eq!(
            tree.lookup("server.tls.cert_path").unwrap().storage_key(),
            Some(&StorageKey::from_path(&["server", "tls", "cert_path"]))
        );
        assert_eq!(
            tree.child("name1").unwrap().storage_key().map(StorageKey::as_str),
            Some("name1")
        );
    }

    #[test]
    fn leaf_keys_are_distinct() {
        let tree = build_tree(&TestConfig::default());
        let mut keys = Vec::new();
        collect_keys(&tree, &mut keys);
        let count = keys.len();
        keys.sort();
        keys.dedup();

        assert_eq!(keys.len(), count);
    }

    fn collect_keys<'a>(node: &'a ConfigNode, out: &mut Vec<&'a StorageKey>) {
        out.extend(node.storage_key());
        for child in node.children() {
            collect_keys(child, out);
        }
    }
}

mod embedding {
    use crate::schema::{Describe, Field};
    use crate::tree::build_tree;

    #[derive(Default)]
    struct Backoff {
        max_retries: u32,
    }

    impl Describe for Backoff {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::leaf("max_retries", "max_retries", &self.max_retries)]
        }
    }

    #[derive(Default)]
    struct Client {
        backoff: Backoff,
        address: String,
    }

    impl Describe for Client {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::embedded("backoff", ",inline", &self.backoff),
                Field::leaf("address", "address", &self.address),
            ]
        }
    }

    #[test]
    fn promoted_fields_appear_at_parent_level() {
        let tree = build_tree(&Client::default());
        let names: Vec<_> = tree.children().iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, ["max_retries", "address"]);
        assert_eq!(
            tree.child("max_retries")
                .unwrap()
                .storage_key()
                .unwrap()
                .as_str(),
            "backoff.max_retries"
        );
    }
}
