// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! JSON-RPC 2.0 frames and MCP tool payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use rampart::{ResponseEnvelope, ToolDefinition};

/// Protocol version answered when the client does not request one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// Frame is not valid JSON.
pub const PARSE_ERROR: i64 = -32700;
/// Frame is JSON but not a request object.
pub const INVALID_REQUEST: i64 = -32600;
/// No handler for the method.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Method parameters have the wrong shape.
pub const INVALID_PARAMS: i64 = -32602;

const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Deserialize)]
pub(crate) struct RpcRequest {
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InitializeParams {
    #[serde(default)]
    pub protocol_version: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CallToolParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RpcResponse {
    jsonrpc: &'static str,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<RpcResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
}

impl RpcResponse {
    pub fn result(id: Value, result: RpcResult) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
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

#[derive(Debug, Serialize)]
pub(crate) struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum RpcResult {
    Initialize(InitializeResult),
    ToolList(ToolListResult),
    ToolCall(CallToolResult),
    Empty(EmptyResult),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InitializeResult {
    protocol_version: String,
    capabilities: ServerCapabilities,
    server_info: ServerInfo,
}

impl InitializeResult {
    pub fn new(protocol_version: String) -> Self {
        Self {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: EmptyResult {},
            },
            server_info: ServerInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    tools: EmptyResult,
}

#[derive(Debug, Serialize)]
struct ServerInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ToolListResult {
    pub tools: Vec<ToolDefinition>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CallToolResult {
    content: Vec<TextContent>,
    is_error: bool,
}

impl From<ResponseEnvelope> for CallToolResult {
    fn from(envelope: ResponseEnvelope) -> Self {
        Self {
            is_error: envelope.is_error(),
            content: vec![TextContent {
                kind: "text",
                text: envelope.text(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct TextContent {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmptyResult {}
