// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use log::{debug, error, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use rampart_rand::{EntropySource, draw_bytes, draw_int};

use crate::bounds::{check_byte_size, check_int_range};
use crate::config::GeneratorConfig;
use crate::encoding::encode;
use crate::envelope::ResponseEnvelope;
use crate::error::ToolError;
use crate::requests::{ByteRequest, IntRequest};

/// Tool name of the byte generator.
pub const GENERATE_BYTES: &str = "random_generate_bytes";
/// Tool name of the integer generator.
pub const GENERATE_INT: &str = "random_generate_int";

/// Name, description and JSON input schema of one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Name the tool is called by.
    pub name: &'static str,
    /// Human-readable summary.
    pub description: String,
    /// JSON Schema of the `arguments` object.
    pub input_schema: Value,
}

/// Dispatcher for the random generation tools.
///
/// Holds the immutable [`GeneratorConfig`] and the entropy source. Every
/// operation takes `&self`, so one instance can serve concurrent requests
/// whenever `E` is `Sync`.
#[derive(Debug)]
pub struct RandomTools<E: EntropySource> {
    config: GeneratorConfig,
    entropy: E,
}

impl<E: EntropySource> RandomTools<E> {
    /// Creates a dispatcher over `entropy` with the given limits.
    pub fn new(config: GeneratorConfig, entropy: E) -> Self {
        Self { config, entropy }
    }

    /// The configuration this dispatcher enforces.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Describes both tools for discovery.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: GENERATE_BYTES,
                description: format!(
                    "Generate cryptographically secure random bytes (at most {} per call)",
                    self.config.max_byte_size()
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "size": {
                            "type": "integer",
                            "minimum": 1,
                            "maximum": self.config.max_byte_size(),
                            "description": "Number of random bytes to generate"
                        },
                        "encoding": {
                            "type": "string",
                            "enum": ["hex", "base64", "binary"],
                            "default": "hex",
                            "description": "Output encoding"
                        }
                    },
                    "required": ["size"]
                }),
            },
            ToolDefinition {
                name: GENERATE_INT,
                description: String::from(
                    "Generate a cryptographically secure random integer between min and max (inclusive)",
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "min": {
                            "type": "integer",
                            "description": "Minimum value (inclusive)"
                        },
                        "max": {
                            "type": "integer",
                            "description": "Maximum value (inclusive)"
                        }
                    },
                    "required": ["min", "max"]
                }),
            },
        ]
    }

    /// Generates `request.size` random bytes and renders them.
    ///
    /// # Errors
    ///
    /// - [`ToolError::Bounds`] if the size is invalid or above the ceiling.
    /// - [`ToolError::Generation`] if the entropy source fails.
    pub fn generate_bytes(&self, request: &ByteRequest) -> Result<String, ToolError> {
        let size = check_byte_size(&request.size, self.config.max_byte_size())?;
        debug!("drawing {size} bytes ({} encoded)", request.encoding);

        let bytes = draw_bytes(&self.entropy, size)?;
        let encoded = encode(&bytes, request.encoding);

        Ok(format!(
            "Random bytes ({size} bytes, {} encoded):\n{encoded}",
            request.encoding
        ))
    }

    /// Generates an integer in `request.min..=request.max`.
    ///
    /// # Errors
    ///
    /// - [`ToolError::Bounds`] if a bound is not an `i64` or `min >= max`.
    /// - [`ToolError::Generation`] if the entropy source fails.
    pub fn generate_int(&self, request: &IntRequest) -> Result<String, ToolError> {
        let range = check_int_range(&request.min, &request.max)?;
        debug!("drawing integer in {}..={}", range.min(), range.max());

        let value = draw_int(&self.entropy, range.min(), range.max())?;

        Ok(format!(
            "Random integer between {} and {}: {value}",
            range.min(),
            range.max()
        ))
    }

    /// Runs the tool `name` with raw JSON `arguments`.
    ///
    /// Never fails: rejections and internal errors become
    /// [`ResponseEnvelope::Failure`] and are logged at error level.
    pub fn call(&self, name: &str, arguments: Value) -> ResponseEnvelope {
        info!("tool call: {name}");

        match self.dispatch(name, arguments) {
            Ok(text) => ResponseEnvelope::Success(text),
            Err(e) => {
                error!("{name} failed: {e}");
                ResponseEnvelope::failure(e)
            }
        }
    }

    fn dispatch(&self, name: &str, arguments: Value) -> Result<String, ToolError> {
        match name {
            GENERATE_BYTES => self.generate_bytes(&parse_arguments(GENERATE_BYTES, arguments)?),
            GENERATE_INT => self.generate_int(&parse_arguments(GENERATE_INT, arguments)?),
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}

fn parse_arguments<T: DeserializeOwned>(
    tool: &'static str,
    arguments: Value,
) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
        tool,
        reason: e.to_string(),
    })
}
