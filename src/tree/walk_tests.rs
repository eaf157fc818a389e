//! Tests for bottom-up transforms.

use crate::test_fixtures::TestConfig;

use super::{ConfigNode, build_tree, fold, walk};

fn sample() -> ConfigNode {
    build_tree(&TestConfig::default())
}

mod walking {
    use super::*;

    #[test]
    fn identity_walk_preserves_tree() {
        let tree = sample();

        assert_eq!(walk(tree.clone(), &mut |node: ConfigNode| node), tree);
    }

    #[test]
    fn children_are_visited_before_parent() {
        let mut order = Vec::new();
        let _ = walk(sample(), &mut |node: ConfigNode| {
            order.push(node.name.clone());
            node
        });

        let position = |name: &str| order.iter().position(|n| n == name).unwrap();
        assert!(position("cert_path") < position("tls"));
        assert!(position("tls") < position("server"));
        assert_eq!(order.last().map(String::as_str), Some("root"));
    }

    #[test]
    fn parent_sees_rewritten_children() {
        let tree = walk(sample(), &mut |mut node: ConfigNode| {
            if node.is_leaf() {
                node.description = "leaf".to_string();
            } else {
                let described = node
                    .children()
                    .iter()
                    .filter(|c| !c.description.is_empty())
                    .count();
                node.description = format!("{described} described");
            }
            node
        });

        assert_eq!(tree.child("limits").unwrap().description, "2 described");
        assert_eq!(tree.child("empty").unwrap().description, "0 described");
        assert_eq!(tree.description, "7 described");
    }

    #[test]
    fn sibling_order_is_preserved() {
        let before: Vec<_> = sample()
            .children()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        let after = walk(sample(), &mut |mut node: ConfigNode| {
            node.name = node.name.to_uppercase();
            node
        });
        let after: Vec<_> = after
            .children()
            .iter()
            .map(|c| c.name.to_lowercase())
            .collect();

        assert_eq!(before, after);
    }
}

mod folding {
    use super::*;

    #[test]
    fn fold_counts_nodes() {
        let tree = sample();
        let count = fold(&tree, &mut |_: &ConfigNode, children: Vec<usize>| {
            1 + children.iter().sum::<usize>()
        });

        assert_eq!(count, tree.node_count());
    }

    #[test]
    fn fold_receives_children_in_order() {
        let tree = sample();
        let rendered = fold(&tree, &mut |node: &ConfigNode, children: Vec<String>| {
            if children.is_empty() {
                node.name.clone()
            } else {
                format!("{}({})", node.name, children.join(","))
            }
        });

        assert_eq!(
            rendered,
            "root(name1,name2,server(port,timeout,tls(cert_path)),limits(max_size,ratios),empty,legacy,old_mode)"
        );
    }
}
