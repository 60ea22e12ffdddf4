//! Thin stdio tool surface.
//!
//! Line-delimited JSON requests on stdin, one JSON response per line on
//! stdout. No sessions, no state: every call is independent.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::modules::pricing::PricingTools;
use crate::shared::errors::AppError;

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// An incoming request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub method: Method,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum Method {
    #[serde(rename = "tools/list")]
    ToolsList,
    #[serde(rename = "tools/call")]
    ToolsCall(ToolCallParams),
    #[serde(rename = "ping")]
    Ping,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// An outgoing response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProtocolError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProtocolError {
    pub code: i32,
    pub message: String,
}

impl Response {
    fn ok(id: Option<Value>, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    fn fail(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(ProtocolError {
                code,
                message: message.into(),
            }),
        }
    }
}

pub struct ToolServer {
    tools: PricingTools,
}

impl ToolServer {
    pub fn new(tools: PricingTools) -> Self {
        Self { tools }
    }

    /// Serve requests from stdin until it closes.
    pub async fn run_stdio(&self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!("tool server listening on stdio");
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line).await;
            let mut rendered = serde_json::to_string(&response).unwrap_or_else(|err| {
                error!(%err, "failed to serialize response");
                r#"{"error":{"code":-32603,"message":"serialization failure"}}"#.to_string()
            });
            rendered.push('\n');
            stdout.write_all(rendered.as_bytes()).await?;
            stdout.flush().await?;
        }
        info!("stdin closed, shutting down");
        Ok(())
    }

    pub async fn handle_line(&self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(err) => {
                debug!(%err, "unparseable request line");
                Response::fail(None, PARSE_ERROR, format!("parse error: {}", err))
            }
        }
    }

    pub async fn handle_request(&self, request: Request) -> Response {
        let id = request.id;
        match request.method {
            Method::ToolsList => Response::ok(
                id,
                json!({"tools": PricingTools::descriptors()}),
            ),
            Method::Ping => Response::ok(id, json!("ok")),
            Method::ToolsCall(params) => {
                match self.tools.call(&params.name, params.arguments).await {
                    Ok(result) => Response::ok(id, result),
                    Err(AppError::NotFound(message)) => {
                        Response::fail(id, METHOD_NOT_FOUND, message)
                    }
                    Err(AppError::SerializationError(message)) => {
                        Response::fail(id, INVALID_PARAMS, message)
                    }
                    Err(err) => Response::fail(id, INTERNAL_ERROR, err.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::pricing::PricingConfig;

    fn server() -> ToolServer {
        ToolServer::new(PricingTools::new(PricingConfig::default()))
    }

    #[tokio::test]
    async fn lists_the_pricing_tools() {
        let response = server()
            .handle_line(r#"{"id": 1, "method": "tools/list"}"#)
            .await;
        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0]["name"], "pricing_get_sku");
    }

    #[tokio::test]
    async fn ping_round_trips() {
        let response = server().handle_line(r#"{"method": "ping"}"#).await;
        assert_eq!(response.result.unwrap(), json!("ok"));
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn unknown_tool_is_a_protocol_error() {
        let response = server()
            .handle_line(r#"{"id": 2, "method": "tools/call", "params": {"name": "nope"}}"#)
            .await;
        let error = response.error.unwrap();
        assert_eq!(error.code, METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let response = server().handle_line("{not json").await;
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
    }

    #[tokio::test]
    async fn bad_arguments_are_invalid_params() {
        let response = server()
            .handle_line(
                r#"{"id": 3, "method": "tools/call", "params": {"name": "pricing_get_sku", "arguments": {}}}"#,
            )
            .await;
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }
}
