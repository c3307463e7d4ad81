//! Line-delimited JSON-RPC 2.0 transport over stdin/stdout.
//!
//! One request per line, one response per line. Requests without an `id`
//! are notifications and get no response.

use crate::application::tool_catalog::{tool_definitions, CREATE_TOOL, DIFF_TOOL, MERGE_TOOL};
use crate::ports::inbound::SbomToolPort;
use crate::shared::Result;
use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::io::{BufRead, Write};

const JSONRPC_VERSION: &str = "2.0";

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;
const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Deserialize)]
struct RpcRequest {
    /// `None` only when the key is absent; `"id": null` is still a request
    #[serde(default, deserialize_with = "present_id")]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

fn present_id<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Serialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Serialize)]
struct RpcResponse {
    jsonrpc: &'static str,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
}

impl RpcResponse {
    fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// StdioServer adapter dispatching JSON-RPC calls to an `SbomToolPort`
pub struct StdioServer<P> {
    port: P,
}

impl<P: SbomToolPort> StdioServer<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Serves requests until the reader reaches EOF
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        for line in reader.lines() {
            let line = line.context("Failed to read request from input")?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line) {
                serde_json::to_writer(&mut writer, &response)
                    .context("Failed to serialize response")?;
                writer
                    .write_all(b"\n")
                    .and_then(|_| writer.flush())
                    .context("Failed to write response")?;
            }
        }
        tracing::info!("input closed, shutting down");
        Ok(())
    }

    /// Handles a single request line; `None` for notifications
    pub fn handle_line(&self, line: &str) -> Option<Value> {
        let raw: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable request");
                return to_value(RpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        let request: RpcRequest = match RpcRequest::deserialize(&raw) {
            Ok(request) => request,
            Err(e) => {
                let id = raw.get("id").cloned().unwrap_or(Value::Null);
                return to_value(RpcResponse::error(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                ));
            }
        };

        let Some(id) = request.id.clone() else {
            tracing::debug!(method = %request.method, "ignoring notification");
            return None;
        };

        tracing::debug!(method = %request.method, "handling request");
        to_value(self.dispatch(id, request))
    }

    fn dispatch(&self, id: Value, request: RpcRequest) -> RpcResponse {
        match request.method.as_str() {
            "health" => RpcResponse::result(
                id,
                json!({
                    "status": "ok",
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                }),
            ),
            "tools/list" => RpcResponse::result(id, json!({ "tools": tool_definitions() })),
            "tools/call" => self.call_tool(id, request.params),
            other => RpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        }
    }

    fn call_tool(&self, id: Value, params: Value) -> RpcResponse {
        let params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return RpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", e))
            }
        };
        let arguments = params.arguments.unwrap_or_else(|| json!({}));

        let response = match params.name.as_str() {
            CREATE_TOOL => self.port.create_sbom(&arguments),
            MERGE_TOOL => self.port.merge_sboms(&arguments),
            DIFF_TOOL => self.port.diff_sboms(&arguments),
            other => {
                return RpcResponse::error(id, INVALID_PARAMS, format!("Unknown tool: {}", other))
            }
        };

        match serde_json::to_value(&response) {
            Ok(envelope) => RpcResponse::result(id, envelope),
            Err(e) => RpcResponse::error(
                id,
                INTERNAL_ERROR,
                format!("Failed to serialize result: {}", e),
            ),
        }
    }
}

fn to_value(response: RpcResponse) -> Option<Value> {
    serde_json::to_value(response).ok()
}
