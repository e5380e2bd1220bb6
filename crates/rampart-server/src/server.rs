// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{BufRead, Write};

use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use rampart::{EntropySource, RandomTools};

use crate::error::ServerError;
use crate::protocol::{
    CallToolParams, CallToolResult, DEFAULT_PROTOCOL_VERSION, EmptyResult, INVALID_PARAMS,
    INVALID_REQUEST, InitializeParams, InitializeResult, METHOD_NOT_FOUND, PARSE_ERROR,
    RpcRequest, RpcResponse, RpcResult, ToolListResult,
};

/// Line-oriented JSON-RPC server over a [`RandomTools`] dispatcher.
pub struct Server<E: EntropySource> {
    tools: RandomTools<E>,
}

impl<E: EntropySource> Server<E> {
    /// Creates a server answering with `tools`.
    pub fn new(tools: RandomTools<E>) -> Self {
        Self { tools }
    }

    /// Reads frames from `reader` until EOF, writing one response line per request.
    ///
    /// Blank lines are skipped and notifications get no response.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Io`] if the transport fails. Malformed frames
    /// and failed tool calls are answered in-band and never end the session.
    pub fn serve<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<(), ServerError> {
        info!(
            "serving random tools (max {} bytes per call)",
            self.tools.config().max_byte_size()
        );

        let mut raw = Vec::new();
        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }

            if let Some(response) = self.handle_raw_frame(&raw) {
                let frame = encode_frame(&response)?;
                writer.write_all(frame.as_bytes())?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }
        }

        debug!("input closed, stopping");
        Ok(())
    }

    /// Decodes one raw line; invalid UTF-8 is a parse error, not a transport fault.
    pub(crate) fn handle_raw_frame(&self, raw: &[u8]) -> Option<RpcResponse> {
        let line = match core::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!("dropping non UTF-8 frame: {e}");
                return Some(RpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        if line.trim().is_empty() {
            return None;
        }

        self.handle_frame(line)
    }

    pub(crate) fn handle_frame(&self, line: &str) -> Option<RpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("dropping malformed frame: {e}");
                return Some(RpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let request: RpcRequest = match serde_json::from_value(value.clone()) {
            Ok(request) => request,
            Err(e) => {
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                return Some(RpcResponse::error(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                ));
            }
        };

        debug!("<-- {}", request.method);

        let Some(id) = request.id else {
            // Notifications (including notifications/initialized) need no answer.
            return None;
        };

        Some(match self.dispatch(&request.method, request.params) {
            Ok(result) => RpcResponse::result(id, result),
            Err((code, message)) => RpcResponse::error(id, code, message),
        })
    }

    fn dispatch(&self, method: &str, params: Option<Value>) -> Result<RpcResult, (i64, String)> {
        match method {
            "initialize" => {
                let params: InitializeParams = parse_params(params)?;
                let version = params
                    .protocol_version
                    .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string());

                Ok(RpcResult::Initialize(InitializeResult::new(version)))
            }
            "ping" => Ok(RpcResult::Empty(EmptyResult {})),
            "tools/list" => Ok(RpcResult::ToolList(ToolListResult {
                tools: self.tools.definitions(),
            })),
            "tools/call" => {
                let params: CallToolParams = parse_params(params)?;
                let arguments = params
                    .arguments
                    .unwrap_or_else(|| Value::Object(Default::default()));
                let envelope = self.tools.call(&params.name, arguments);

                Ok(RpcResult::ToolCall(CallToolResult::from(envelope)))
            }
            other => Err((METHOD_NOT_FOUND, format!("Method not found: {other}"))),
        }
    }
}

/// Absent params are read as an empty object.
fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, (i64, String)> {
    let value = match params {
        None | Some(Value::Null) => Value::Object(Default::default()),
        Some(value) => value,
    };

    serde_json::from_value(value).map_err(|e| (INVALID_PARAMS, format!("Invalid params: {e}")))
}

fn encode_frame(response: &RpcResponse) -> Result<String, ServerError> {
    serde_json::to_string(response).map_err(|e| {
        error!("failed to encode response: {e}");
        ServerError::Encode(e)
    })
}
