//! Names and input schemas of the exposed tools.

use serde::Serialize;
use serde_json::{json, Value};

pub const CREATE_TOOL: &str = "sbom_create";
pub const MERGE_TOOL: &str = "sbom_merge";
pub const DIFF_TOOL: &str = "sbom_diff";

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

fn format_schema() -> Value {
    json!({ "type": "string", "enum": ["cyclonedx", "spdx"] })
}

pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: CREATE_TOOL,
            description: "Create a CycloneDX or SPDX SBOM from a list of dependencies",
            input_schema: json!({
                "type": "object",
                "required": ["deps", "format"],
                "properties": {
                    "deps": {
                        "type": "array",
                        "minItems": 1,
                        "items": {
                            "type": "object",
                            "required": ["ecosystem", "name", "version"],
                            "properties": {
                                "ecosystem": { "type": "string", "minLength": 1 },
                                "name": { "type": "string", "minLength": 1 },
                                "version": { "type": "string", "minLength": 1 },
                                "license": { "type": "string", "minLength": 1 }
                            }
                        }
                    },
                    "format": format_schema()
                }
            }),
        },
        ToolDefinition {
            name: MERGE_TOOL,
            description: "Merge CycloneDX and/or SPDX SBOMs into one deduplicated document",
            input_schema: json!({
                "type": "object",
                "required": ["sboms", "format"],
                "properties": {
                    "sboms": { "type": "array", "minItems": 1, "items": { "type": "object" } },
                    "format": format_schema()
                }
            }),
        },
        ToolDefinition {
            name: DIFF_TOOL,
            description: "Report components added, removed, or version-changed between two SBOMs",
            input_schema: json!({
                "type": "object",
                "required": ["old_sbom", "new_sbom"],
                "properties": {
                    "old_sbom": { "type": "object" },
                    "new_sbom": { "type": "object" }
                }
            }),
        },
    ]
}

/// Input schema of the named tool, as published by `tools/list`
pub fn input_schema(tool: &str) -> Option<Value> {
    tool_definitions()
        .into_iter()
        .find(|definition| definition.name == tool)
        .map(|definition| definition.input_schema)
}
