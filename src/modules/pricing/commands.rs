use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::modules::pricing::application::dto::{GetSkuRequest, SearchNameRequest};
use crate::modules::pricing::application::PricingService;
use crate::modules::pricing::config::PricingConfig;
use crate::modules::pricing::infrastructure::CatalogClient;
use crate::shared::errors::{AppError, AppResult};

pub const TOOL_GET_SKU: &str = "pricing_get_sku";
pub const TOOL_SEARCH_NAME: &str = "pricing_search_name";
pub const TOOL_PING: &str = "ping";

/// Descriptor advertised to the agent host for one tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The pricing tool set: thin wrappers that parse arguments, run one
/// operation against a call-scoped client, and return plain JSON.
pub struct PricingTools {
    config: PricingConfig,
}

impl PricingTools {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn descriptors() -> Vec<ToolDescriptor> {
        vec![
            ToolDescriptor {
                name: TOOL_GET_SKU.to_string(),
                description: "Look up the list price for a specific SKU (part number). \
                              Falls back to a fuzzy name search when the SKU misses. \
                              Currency is an ISO 4217 code, case-insensitive."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "part_number": {"type": "string", "description": "SKU, e.g. \"B88298\""},
                        "currency": {"type": "string", "description": "ISO 4217 code, e.g. \"USD\" or \"jpy\""},
                        "max_pages": {"type": "integer", "minimum": 1, "maximum": 10}
                    },
                    "required": ["part_number"]
                }),
            },
            ToolDescriptor {
                name: TOOL_SEARCH_NAME.to_string(),
                description: "Search the price list by product keywords or abbreviations \
                              (e.g. \"Autonomous Database\", \"ADB\", \"object storage\"). \
                              Short queries match whole words; longer ones match fuzzily."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "query": {"type": "string", "description": "product keywords or alias"},
                        "currency": {"type": "string", "description": "ISO 4217 code"},
                        "limit": {"type": "integer", "minimum": 1, "maximum": 20},
                        "max_pages": {"type": "integer", "minimum": 1, "maximum": 10},
                        "require_priced": {"type": "boolean", "description": "drop items without a positive price"}
                    },
                    "required": ["query"]
                }),
            },
            ToolDescriptor {
                name: TOOL_PING.to_string(),
                description: "Health check; returns \"ok\".".to_string(),
                input_schema: json!({"type": "object", "properties": {}}),
            },
        ]
    }

    /// Dispatch one tool call. Unknown names and malformed arguments are
    /// protocol-level errors; operation-level failures come back as shaped
    /// `kind:"error"` results inside a successful call.
    pub async fn call(&self, name: &str, arguments: Value) -> AppResult<Value> {
        match name {
            TOOL_GET_SKU => {
                let request: GetSkuRequest = serde_json::from_value(arguments)?;
                info!(part_number = %request.part_number, "pricing_get_sku");
                let outcome = self.service()?.get_sku(request).await;
                Ok(serde_json::to_value(outcome)?)
            }
            TOOL_SEARCH_NAME => {
                let request: SearchNameRequest = serde_json::from_value(arguments)?;
                info!(query = %request.query, "pricing_search_name");
                let outcome = self.service()?.search_name(request).await;
                Ok(serde_json::to_value(outcome)?)
            }
            TOOL_PING => Ok(json!("ok")),
            other => Err(AppError::NotFound(format!("unknown tool: {}", other))),
        }
    }

    /// A fresh client per invocation: no HTTP session outlives the call.
    fn service(&self) -> AppResult<PricingService> {
        let client = CatalogClient::new(&self.config)?;
        Ok(PricingService::new(Arc::new(client), self.config.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advertises_three_tools() {
        let descriptors = PricingTools::descriptors();
        let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, [TOOL_GET_SKU, TOOL_SEARCH_NAME, TOOL_PING]);
    }

    #[test]
    fn descriptors_serialize_with_input_schema_key() {
        let rendered = serde_json::to_value(PricingTools::descriptors()).unwrap();
        assert!(rendered[0].get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn ping_answers_without_touching_the_network() {
        let tools = PricingTools::new(PricingConfig::default());
        let result = tools.call(TOOL_PING, json!({})).await.unwrap();
        assert_eq!(result, json!("ok"));
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected() {
        let tools = PricingTools::new(PricingConfig::default());
        assert!(tools.call("no_such_tool", json!({})).await.is_err());
    }

    #[tokio::test]
    async fn malformed_arguments_are_rejected() {
        let tools = PricingTools::new(PricingConfig::default());
        let result = tools.call(TOOL_GET_SKU, json!({"limit": 3})).await;
        assert!(matches!(result, Err(AppError::SerializationError(_))));
    }
}
