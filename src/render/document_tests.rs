//! Tests for the structured document.

use tempfile::NamedTempFile;

use crate::blocks::{Block, BlockRegistry, mark_root_blocks};
use crate::flags::{FlagIndex, attach_flags};
use crate::test_fixtures::{ServerConfig, registered_config};
use crate::tree::build_tree;

use super::{ConfigBlock, DocumentFormat, to_document};

fn document() -> ConfigBlock {
    let (config, flags) = registered_config();
    let registry = BlockRegistry::new([Block::of::<ServerConfig>(
        "server_config",
        "Configures the server.",
    )])
    .unwrap();

    let tree = attach_flags(build_tree(&config), &FlagIndex::from_flag_set(&flags));
    to_document(&mark_root_blocks(tree, &registry))
}

fn field<'a>(block: &'a ConfigBlock, name: &str) -> &'a ConfigBlock {
    block.fields.iter().find(|f| f.name == name).unwrap()
}

mod folding {
    use super::*;

    #[test]
    fn root_document_is_untyped() {
        let doc = document();

        assert_eq!(doc.name, "root");
        assert_eq!(doc.type_label, "-");
        assert!(!doc.root);
    }

    #[test]
    fn fields_keep_declaration_order() {
        let doc = document();
        let names: Vec<_> = doc.fields.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(
            names,
            ["name1", "name2", "server", "limits", "empty", "legacy", "old_mode"]
        );
    }

    #[test]
    fn bound_leaf_carries_flag_and_default() {
        let doc = document();
        let port = field(field(&doc, "server"), "port");

        assert_eq!(port.flag_name, "server.port");
        assert_eq!(port.value.as_deref(), Some("80"));
        assert_eq!(port.type_label, "int");
        assert_eq!(port.description, "Listen port.");
    }

    #[test]
    fn unbound_leaf_has_no_flag() {
        let doc = document();
        let name2 = field(&doc, "name2");

        assert!(name2.flag_name.is_empty());
        assert_eq!(name2.value, None);
    }

    #[test]
    fn root_block_carries_prefix_and_description() {
        let doc = document();
        let server = field(&doc, "server");

        assert!(server.root);
        assert_eq!(server.flag_prefix, ["server."]);
        assert_eq!(server.description, "Configures the server.");
        assert!(server.type_label.ends_with("::ServerConfig"));
    }

    #[test]
    fn non_block_branch_has_no_prefix() {
        let doc = document();

        assert!(field(&doc, "limits").flag_prefix.is_empty());
        assert!(!field(&doc, "limits").root);
    }
}

mod encoding {
    use super::*;

    #[test]
    fn json_round_trips() {
        let doc = document();
        let json = doc.encode(DocumentFormat::Json).unwrap();
        let decoded: ConfigBlock = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, doc);
    }

    #[test]
    fn json_uses_document_keys() {
        let json = document().encode(DocumentFormat::Json).unwrap();

        assert!(json.contains("\"type\": \"int\""));
        assert!(json.contains("\"flag\": \"server.port\""));
        assert!(json.contains("\"flag_prefix\""));
        assert!(json.contains("\"root\": true"));
    }

    #[test]
    fn leaf_records_have_the_full_key_set() {
        let json = document().encode(DocumentFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let name2 = value["fields"]
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["name"] == "name2")
            .unwrap();

        let mut keys: Vec<_> = name2.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        assert_eq!(
            keys,
            ["description", "fields", "flag", "name", "root", "type", "value"]
        );
        assert_eq!(name2["flag"], "");
        assert!(name2["value"].is_null());
        assert_eq!(name2["fields"], serde_json::json!([]));
    }

    #[test]
    fn yaml_unbound_leaf_keeps_flag_and_value_keys() {
        let yaml = document().encode(DocumentFormat::Yaml).unwrap();

        assert!(yaml.contains("flag: ''"));
        assert!(yaml.contains("value: null"));
        assert!(yaml.contains("fields: []"));
    }

    #[test]
    fn yaml_keeps_field_order() {
        let yaml = document().encode(DocumentFormat::Yaml).unwrap();
        let description = yaml.find("description:").unwrap();
        let ty = yaml.find("type:").unwrap();
        let fields = yaml.find("fields:").unwrap();

        assert!(yaml.starts_with("name: root\n"));
        assert!(description < ty);
        assert!(ty < fields);
    }

    #[test]
    fn yaml_round_trips() {
        let doc = document();
        let yaml = doc.encode(DocumentFormat::Yaml).unwrap();
        let decoded: ConfigBlock = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(decoded, doc);
    }

    #[test]
    fn toml_encodes_nested_fields() {
        let doc = document();
        let encoded = doc.encode(DocumentFormat::Toml).unwrap();
        let decoded: ConfigBlock = toml::from_str(&encoded).unwrap();

        assert_eq!(decoded, doc);
    }

    #[test]
    fn write_to_file() {
        let doc = document();
        let file = NamedTempFile::new().unwrap();

        doc.write_to(DocumentFormat::Json, file.as_file()).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, doc.encode(DocumentFormat::Json).unwrap());
    }

    #[test]
    fn format_display() {
        assert_eq!(DocumentFormat::default().to_string(), "yaml");
        assert_eq!(DocumentFormat::Toml.to_string(), "toml");
    }
}
