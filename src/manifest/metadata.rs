//! Metadata extraction from the manifest.
//!
//! Plucks the fixed set of fields the generator feeds to the model:
//! extension identifier, activation events, commands, menu contributions,
//! and the configuration schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::logging::Logger;

/// Generator-relevant metadata extracted from the extension manifest.
///
/// Absent manifest sections stay at their empty defaults; extraction never
/// fails. Wire names keep the manifest's camelCase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestMetadata {
    /// `"{publisher}.{name}"`, the marketplace identifier.
    pub extension_id: String,
    pub activation_events: Vec<String>,
    pub commands: Vec<Value>,
    pub menus: Map<String, Value>,
    pub submenus: Map<String, Value>,
    pub views_welcome: Vec<Value>,
    /// Settings schema from `contributes.configuration.properties`.
    pub config_properties: Map<String, Value>,
}

/// Extracts the generator-relevant parts of a manifest JSON string.
///
/// Input that does not parse as a JSON object yields the all-empty default
/// rather than an error.
pub fn extract_manifest_metadata(manifest_json: &str, logger: &Logger) -> ManifestMetadata {
    let log = logger.with_scope("manifest/extract_manifest_metadata");

    let parsed: Value = match serde_json::from_str(manifest_json) {
        Ok(value) => value,
        Err(_) => return ManifestMetadata::default(),
    };
    let Some(root) = parsed.as_object() else {
        return ManifestMetadata::default();
    };

    let publisher = root
        .get("publisher")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let name = root.get("name").and_then(Value::as_str).unwrap_or_default();
    let contributes = root.get("contributes").and_then(Value::as_object);

    let metadata = ManifestMetadata {
        extension_id: format!("{}.{}", publisher, name),
        activation_events: string_array(root.get("activationEvents")),
        commands: value_array(contributes.and_then(|c| c.get("commands"))),
        menus: value_object(contributes.and_then(|c| c.get("menus"))),
        submenus: value_object(contributes.and_then(|c| c.get("submenus"))),
        views_welcome: value_array(contributes.and_then(|c| c.get("viewsWelcome"))),
        config_properties: value_object(
            contributes
                .and_then(|c| c.get("configuration"))
                .and_then(|c| c.get("properties")),
        ),
    };

    log.info(&format!(
        "Manifest data prepared for analysis: {}",
        serde_json::to_string_pretty(&metadata).unwrap_or_default()
    ));

    metadata
}

fn string_array(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn value_array(value: Option<&Value>) -> Vec<Value> {
    value.and_then(Value::as_array).cloned().unwrap_or_default()
}

fn value_object(value: Option<&Value>) -> Map<String, Value> {
    value.and_then(Value::as_object).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::logging::NoopSink;

    fn quiet_logger() -> Logger {
        Logger::new(Arc::new(NoopSink))
    }

    #[test]
    fn test_extracts_known_fields() {
        let manifest = json!({
            "publisher": "acme",
            "name": "tool",
            "activationEvents": ["onCommand:tool.run"],
            "contributes": {
                "commands": [
                    {"command": "tool.run", "title": "Run Tool"}
                ],
                "configuration": {
                    "properties": {
                        "tool.enable": {"type": "boolean", "default": true}
                    }
                }
            }
        });

        let metadata = extract_manifest_metadata(&manifest.to_string(), &quiet_logger());
        assert_eq!(metadata.extension_id, "acme.tool");
        assert_eq!(metadata.activation_events, vec!["onCommand:tool.run"]);
        assert_eq!(metadata.commands.len(), 1);
        assert_eq!(metadata.config_properties.len(), 1);
        assert!(metadata.menus.is_empty());
        assert!(metadata.submenus.is_empty());
        assert!(metadata.views_welcome.is_empty());
    }

    #[test]
    fn test_non_object_input_yields_default() {
        let logger = quiet_logger();
        assert_eq!(
            extract_manifest_metadata("not json", &logger),
            ManifestMetadata::default()
        );
        assert_eq!(
            extract_manifest_metadata("[1, 2]", &logger),
            ManifestMetadata::default()
        );
        assert_eq!(
            extract_manifest_metadata("42", &logger),
            ManifestMetadata::default()
        );
    }

    #[test]
    fn test_missing_identity_fields_default_to_empty() {
        let metadata = extract_manifest_metadata(r#"{"name": "tool"}"#, &quiet_logger());
        assert_eq!(metadata.extension_id, ".tool");
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let metadata = extract_manifest_metadata(
            r#"{"publisher": "acme", "name": "tool"}"#,
            &quiet_logger(),
        );
        let rendered = serde_json::to_value(&metadata).unwrap();
        assert_eq!(rendered["extensionId"], "acme.tool");
        assert!(rendered.get("viewsWelcome").is_some());
        assert!(rendered.get("configProperties").is_some());
    }
}
