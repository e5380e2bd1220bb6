// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serde_json::{Value, json};

use rampart::{GeneratorConfig, RandomTools};
use rampart_rand::SystemEntropySource;
use rampart_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

use crate::protocol::{INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
use crate::server::Server;

fn system_server() -> Server<SystemEntropySource> {
    Server::new(RandomTools::new(
        GeneratorConfig::default(),
        SystemEntropySource {},
    ))
}

fn respond<E: rampart::EntropySource>(server: &Server<E>, frame: Value) -> Value {
    let response = server
        .handle_frame(&frame.to_string())
        .expect("Expected a response");

    serde_json::to_value(response).expect("Failed to serialize response")
}

fn call_tool(server: &Server<SystemEntropySource>, name: &str, arguments: Value) -> Value {
    respond(
        server,
        json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        }),
    )
}

#[test]
fn test_initialize_echoes_protocol_version() {
    let server = system_server();
    let response = respond(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": { "protocolVersion": "2025-03-26", "capabilities": {} }
        }),
    );

    assert_eq!(response["jsonrpc"], "2.0");
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(response["result"]["capabilities"]["tools"], json!({}));
    assert_eq!(response["result"]["serverInfo"]["name"], "rampart-server");
    assert!(response.get("error").is_none());
}

#[test]
fn test_initialize_without_params_uses_default_version() {
    let server = system_server();
    let response = respond(&server, json!({ "jsonrpc": "2.0", "id": "init", "method": "initialize" }));

    assert_eq!(response["id"], "init");
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
}

#[test]
fn test_ping() {
    let server = system_server();
    let response = respond(&server, json!({ "jsonrpc": "2.0", "id": 2, "method": "ping" }));

    assert_eq!(response["result"], json!({}));
}

#[test]
fn test_notifications_get_no_response() {
    let server = system_server();
    let frame = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });

    assert!(server.handle_frame(&frame.to_string()).is_none());
}

#[test]
fn test_tools_list() {
    let server = system_server();
    let response = respond(&server, json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/list" }));

    let tools = response["result"]["tools"]
        .as_array()
        .expect("tools is not an array");
    let names: Vec<&str> = tools
        .iter()
        .map(|t| t["name"].as_str().expect("name is not a string"))
        .collect();

    assert_eq!(names, vec!["random_generate_bytes", "random_generate_int"]);
    assert_eq!(tools[0]["inputSchema"]["type"], "object");
}

#[test]
fn test_tools_call_success() {
    let server = system_server();
    let response = call_tool(&server, "random_generate_bytes", json!({ "size": 4 }));

    let result = &response["result"];
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"][0]["type"], "text");

    let text = result["content"][0]["text"].as_str().expect("text is not a string");
    assert!(text.starts_with("Random bytes (4 bytes, hex encoded):\n"));
}

#[test]
fn test_tools_call_rejection_is_in_band() {
    let server = system_server();
    let response = call_tool(&server, "random_generate_int", json!({ "min": 10, "max": 10 }));

    assert_eq!(response["result"]["isError"], true);
    assert_eq!(
        response["result"]["content"][0]["text"],
        "Error: Min must be less than max"
    );
    assert!(response.get("error").is_none());
}

#[test]
fn test_tools_call_entropy_failure_is_in_band() {
    let server = Server::new(RandomTools::new(
        GeneratorConfig::default(),
        MockEntropySource::new(MockEntropySourceBehaviour::FailAlways),
    ));
    let response = respond(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 9,
            "method": "tools/call",
            "params": { "name": "random_generate_bytes", "arguments": { "size": 8 } }
        }),
    );

    assert_eq!(response["result"]["isError"], true);
    assert_eq!(
        response["result"]["content"][0]["text"],
        "Error: Random generation failed: entropy source unavailable"
    );
}

#[test]
fn test_tools_call_without_arguments() {
    let server = system_server();
    let response = respond(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": { "name": "random_generate_int" }
        }),
    );

    assert_eq!(response["result"]["isError"], true);
    let text = response["result"]["content"][0]["text"]
        .as_str()
        .expect("text is not a string");
    assert!(text.starts_with("Error: Invalid arguments for random_generate_int: "));
}

#[test]
fn test_tools_call_missing_name_is_invalid_params() {
    let server = system_server();
    let response = respond(
        &server,
        json!({ "jsonrpc": "2.0", "id": 5, "method": "tools/call", "params": {} }),
    );

    assert_eq!(response["error"]["code"], INVALID_PARAMS);
    assert!(response.get("result").is_none());
}

#[test]
fn test_unknown_method() {
    let server = system_server();
    let response = respond(&server, json!({ "jsonrpc": "2.0", "id": 6, "method": "resources/list" }));

    assert_eq!(response["id"], 6);
    assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let server = system_server();
    let response = server.handle_frame("{not json").expect("Expected a response");
    let response = serde_json::to_value(response).expect("Failed to serialize response");

    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["error"]["code"], PARSE_ERROR);
}

#[test]
fn test_non_request_json_is_invalid_request() {
    let server = system_server();
    let response = respond(&server, json!({ "jsonrpc": "2.0", "id": 8 }));

    assert_eq!(response["id"], 8);
    assert_eq!(response["error"]["code"], INVALID_REQUEST);
}

#[test]
fn test_non_utf8_frame_is_parse_error() {
    let server = system_server();
    let response = server
        .handle_raw_frame(b"\xff\xfe")
        .expect("Expected a response");
    let response = serde_json::to_value(response).expect("Failed to serialize response");

    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["error"]["code"], PARSE_ERROR);
}

#[test]
fn test_blank_raw_frame_gets_no_response() {
    let server = system_server();

    assert!(server.handle_raw_frame(b"\r\n").is_none());
    assert!(server.handle_raw_frame(b"   \n").is_none());
}
