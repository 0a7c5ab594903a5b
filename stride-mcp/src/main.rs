//! Stride MCP Server
//!
//! MCP Server implementing spec 2025-11-25
//!
//! Tools:
//! - generate: Generate an arithmetic sequence and render the full report
//! - nth_term: Compute a single term by the closed formula
//! - summarize: Statistics over a caller-provided list of terms
//! - describe: Input parameters, defaults, and background notes
//!
//! Resources:
//! - stride://guide - Background notes on arithmetic sequences

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::io::{self, BufRead, IsTerminal, Write};
use stride::{ParamMeta, Sequence, MAX_TERMS, PARAMS};
use stride_core::{Number, StrideError};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "stride";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

/// Logs go to stderr, stdout carries the protocol
fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stride=info,stride_mcp=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn main() {
    init_logger();

    info!("Stride MCP Server v{} started", SERVER_VERSION);
    info!("Protocol: {}", PROTOCOL_VERSION);
    info!("stdin is_terminal: {}", io::stdin().is_terminal());
    info!("stdout is_terminal: {}", io::stdout().is_terminal());

    // Use BufReader for stdin (line-based protocol)
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    info!("Server ready, waiting for requests...");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                // EOF - client disconnected
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                info!("Received: {} bytes", line.len());

                let request: McpRequest = match serde_json::from_str(line) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!("Error parsing request: {}", e);
                        let response = McpResponse {
                            jsonrpc: "2.0".to_string(),
                            id: None,
                            result: None,
                            error: Some(McpError {
                                code: -32700,
                                message: format!("Parse error: {}", e),
                                data: None,
                            }),
                        };
                        if !send_response(&response) {
                            break;
                        }
                        continue;
                    }
                };

                info!("Processing: {}", request.method);

                let response = handle_request(&request);

                // Notifications (no id) do NOT receive a response
                if request.id.is_none() {
                    continue;
                }

                if !send_response(&response) {
                    break;
                }

                info!("Sent response for: {}", request.method);
            }
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        }
    }

    info!("Server shutting down");
}

/// Write one response line to stdout; false means the pipe is gone
fn send_response(response: &McpResponse) -> bool {
    let payload = match serde_json::to_string(response) {
        Ok(p) => p,
        Err(e) => {
            error!("Error serializing response: {}", e);
            return false;
        }
    };
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", payload) {
        error!("Error writing response: {}", e);
        return false;
    }
    if let Err(e) = stdout.flush() {
        error!("Error flushing stdout: {}", e);
        return false;
    }
    true
}

fn handle_request(request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(&request.params),

        // Resources
        "resources/list" => handle_resources_list(),
        "resources/read" => handle_resources_read(&request.params),

        // Prompts
        "prompts/list" => handle_prompts_list(),
        "prompts/get" => handle_prompts_get(&request.params),

        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!("Client connected: {} (protocol: {})", client_info, client_protocol);

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Arithmetic sequence engine with markdown reports"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            },
            "resources": {
                "subscribe": false,
                "listChanged": false
            },
            "prompts": {
                "listChanged": false
            }
        },
        "instructions": "Stride generates arithmetic sequences with arbitrary precision arithmetic. Call 'generate' and show the returned markdown report to the user as is. Every parameter has a default, so 'generate' with no arguments works. Use 'describe' to list the accepted parameters."
    }))
}

/// JSON Schema property for one input parameter
fn param_schema(param: &ParamMeta) -> JsonValue {
    let mut schema = serde_json::Map::new();
    if param.typ == "integer" {
        schema.insert("type".to_string(), json!("integer"));
    } else {
        // Numbers travel as JSON numbers or strings ("1/2", "2.5e3")
        schema.insert("type".to_string(), json!(["number", "string"]));
    }
    schema.insert("description".to_string(), json!(param.description));
    if let Some(minimum) = param.minimum {
        schema.insert("minimum".to_string(), json!(minimum));
    }
    if let Some(maximum) = param.maximum {
        schema.insert("maximum".to_string(), json!(maximum));
    }
    match param.default.parse::<i64>() {
        Ok(i) => schema.insert("default".to_string(), json!(i)),
        Err(_) => schema.insert("default".to_string(), json!(param.default)),
    };
    JsonValue::Object(schema)
}

fn generate_input_schema() -> JsonValue {
    let mut properties = serde_json::Map::new();
    for param in &PARAMS {
        properties.insert(param.name.to_string(), param_schema(param));
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": []
    })
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "generate",
                "description": "Generate an arithmetic sequence and return a markdown report with the formula, the terms, and both sums. All parameters default to the standard form values.",
                "inputSchema": generate_input_schema()
            },
            {
                "name": "nth_term",
                "description": "Compute a single term by the closed formula a(n) = a1 + (n-1)*d without generating the whole sequence.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "first_term": {
                            "type": ["number", "string"],
                            "description": "The first term of the arithmetic sequence",
                            "default": "1.0"
                        },
                        "common_difference": {
                            "type": ["number", "string"],
                            "description": "The constant difference between consecutive terms",
                            "default": "1.0"
                        },
                        "n": {
                            "type": "integer",
                            "description": "Term position, 1-based",
                            "minimum": 1,
                            "default": 1
                        }
                    },
                    "required": []
                }
            },
            {
                "name": "summarize",
                "description": "Compute first, last, and both sums for a provided list of terms.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "terms": {
                            "type": "array",
                            "items": { "type": ["number", "string"] },
                            "description": "Terms to summarize, in order"
                        }
                    },
                    "required": ["terms"]
                }
            },
            {
                "name": "describe",
                "description": "List the input parameters with defaults and bounds, plus background notes on arithmetic sequences.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            }
        ]
    }))
}

fn handle_resources_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "resources": [{
            "uri": "stride://guide",
            "name": "guide",
            "description": "Background notes on arithmetic sequences",
            "mimeType": "text/markdown"
        }]
    }))
}

fn handle_resources_read(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let uri = params
        .as_ref()
        .and_then(|p| p.get("uri"))
        .and_then(|u| u.as_str())
        .ok_or_else(|| McpError {
            code: -32602,
            message: "Missing uri parameter".to_string(),
            data: None,
        })?;

    if uri != "stride://guide" {
        return Err(McpError {
            code: -32602,
            message: format!("Invalid URI: {}. Expected stride://guide", uri),
            data: None,
        });
    }

    Ok(json!({
        "contents": [{
            "uri": uri,
            "mimeType": "text/markdown",
            "text": stride::guide()
        }]
    }))
}

fn handle_prompts_list() -> Result<JsonValue, McpError> {
    let arguments: Vec<JsonValue> = PARAMS
        .iter()
        .map(|p| {
            json!({
                "name": p.name,
                "description": p.description,
                "required": false
            })
        })
        .collect();

    Ok(json!({
        "prompts": [{
            "name": "arithmetic_sequence",
            "description": "Generate an arithmetic sequence report",
            "arguments": arguments
        }]
    }))
}

fn handle_prompts_get(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError {
        code: -32602,
        message: "Missing params".to_string(),
        data: None,
    })?;

    let name = params
        .get("name")
        .and_then(|n| n.as_str())
        .ok_or_else(|| McpError {
            code: -32602,
            message: "Missing name parameter".to_string(),
            data: None,
        })?;

    if name != "arithmetic_sequence" {
        return Err(McpError {
            code: -32602,
            message: format!("Unknown prompt: {}", name),
            data: Some(json!({ "available_prompts": ["arithmetic_sequence"] })),
        });
    }

    // Collect overrides for the form defaults
    let mut overrides = String::new();
    if let Some(obj) = params.get("arguments").and_then(|a| a.as_object()) {
        for param in &PARAMS {
            if let Some(value) = obj.get(param.name) {
                if let Some(text) = value.as_str() {
                    overrides.push_str(&format!("- {}: {}\n", param.label, text));
                }
            }
        }
    }

    let prompt_text = if overrides.is_empty() {
        "Please call the 'generate' tool with its default parameters and show me the resulting markdown report.".to_string()
    } else {
        format!(
            "Please call the 'generate' tool with these parameters and show me the resulting markdown report:\n\n{}",
            overrides
        )
    };

    Ok(json!({
        "description": format!("Stride prompt: {}", name),
        "messages": [{
            "role": "user",
            "content": {
                "type": "text",
                "text": prompt_text
            }
        }]
    }))
}

fn handle_tool_call(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or(McpError {
        code: -32602,
        message: "Missing params".to_string(),
        data: None,
    })?;

    let name = params.get("name").and_then(|v| v.as_str()).ok_or(McpError {
        code: -32602,
        message: "Missing tool name".to_string(),
        data: None,
    })?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "generate" => tool_generate(args),
        "nth_term" => tool_nth_term(args),
        "summarize" => tool_summarize(args),
        "describe" => tool_describe(args),
        _ => Err(McpError {
            code: -32602,
            message: format!("Unknown tool: {}", name),
            data: None,
        }),
    }
}

// ========== Argument plumbing ==========

/// Parse one JSON argument into a Number
fn json_number(value: &JsonValue) -> Result<Number, StrideError> {
    match value {
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Number::from_i64(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Number::from_f64(f))
            } else {
                Err(StrideError::parse_error(n.to_string()))
            }
        }
        JsonValue::String(s) => {
            Number::from_str(s).map_err(|e| StrideError::from(e).with_value(s.clone()))
        }
        other => Err(StrideError::parse_error(other.to_string())),
    }
}

/// Fetch a Number argument, falling back to the parameter's form default
fn number_arg(args: &JsonValue, param: &ParamMeta) -> Result<Number, StrideError> {
    match args.get(param.name) {
        None | Some(JsonValue::Null) => Number::from_str(param.default).map_err(StrideError::from),
        Some(value) => json_number(value).map_err(|e| e.for_parameter(param.name)),
    }
}

/// Fetch and validate the term count, applying the host cap
fn terms_arg(args: &JsonValue) -> Result<usize, StrideError> {
    let n = number_arg(args, &PARAMS[2])?;
    let count = stride::require_terms(&n)?;
    if count > MAX_TERMS {
        return Err(StrideError::limit_exceeded(MAX_TERMS)
            .for_parameter("num_terms")
            .with_value(count.to_string()));
    }
    Ok(count)
}

static POSITION_PARAM: ParamMeta = ParamMeta {
    name: "n",
    label: "Term Position (n)",
    typ: "integer",
    description: "Term position, 1-based",
    minimum: Some(1),
    maximum: None,
    default: "1",
};

fn position_arg(args: &JsonValue) -> Result<usize, StrideError> {
    let n = number_arg(args, &POSITION_PARAM)?;
    if !n.is_integer() || n.is_negative() || n.is_zero() {
        return Err(
            StrideError::invalid_input("Term position must be a positive integer")
                .for_parameter("n")
                .with_value(n.as_compact()),
        );
    }
    Ok(n.to_i64().unwrap_or(0) as usize)
}

/// Render a domain error as a tool result rather than a protocol error
fn error_result(err: &StrideError) -> JsonValue {
    let text = match &err.suggestion {
        Some(suggestion) => format!("{} ({})", err.message, suggestion),
        None => err.message.clone(),
    };
    json!({
        "content": [{ "type": "text", "text": text }],
        "error": err,
        "isError": true
    })
}

// ========== Tools ==========

fn tool_generate(args: JsonValue) -> Result<JsonValue, McpError> {
    let first = match number_arg(&args, &PARAMS[0]) {
        Ok(n) => n,
        Err(e) => return Ok(error_result(&e)),
    };
    let diff = match number_arg(&args, &PARAMS[1]) {
        Ok(n) => n,
        Err(e) => return Ok(error_result(&e)),
    };
    let count = match terms_arg(&args) {
        Ok(c) => c,
        Err(e) => {
            warn!("Rejected generate request: {}", e);
            return Ok(error_result(&e));
        }
    };

    let report = match stride::report(&first, &diff, count) {
        Ok(r) => r,
        Err(e) => return Ok(error_result(&e)),
    };

    let terms: Vec<String> = report.sequence.iter().map(|t| t.as_compact()).collect();

    Ok(json!({
        "content": [{ "type": "text", "text": report.markdown }],
        "values": {
            "formula": stride::formula(&first, &diff),
            "terms": terms,
            "first_term": report.statistics.first.as_compact(),
            "last_term": report.statistics.last.as_compact(),
            "sum": report.statistics.sum_direct.as_compact(),
            "sum_formula": report.statistics.sum_formula.as_compact()
        },
        "isError": false
    }))
}

fn tool_nth_term(args: JsonValue) -> Result<JsonValue, McpError> {
    let first = match number_arg(&args, &PARAMS[0]) {
        Ok(n) => n,
        Err(e) => return Ok(error_result(&e)),
    };
    let diff = match number_arg(&args, &PARAMS[1]) {
        Ok(n) => n,
        Err(e) => return Ok(error_result(&e)),
    };
    let n = match position_arg(&args) {
        Ok(n) => n,
        Err(e) => return Ok(error_result(&e)),
    };

    let term = match stride::nth_term(&first, &diff, n) {
        Ok(t) => t,
        Err(e) => return Ok(error_result(&e)),
    };

    Ok(json!({
        "content": [{ "type": "text", "text": format!("a({}) = {}", n, term.as_compact()) }],
        "values": {
            "n": n,
            "term": term.as_compact(),
            "formula": stride::formula(&first, &diff)
        },
        "isError": false
    }))
}

fn tool_summarize(args: JsonValue) -> Result<JsonValue, McpError> {
    let items = args.get("terms").and_then(|v| v.as_array()).ok_or(McpError {
        code: -32602,
        message: "Missing terms argument".to_string(),
        data: None,
    })?;

    if items.len() > MAX_TERMS {
        let err = StrideError::limit_exceeded(MAX_TERMS)
            .for_parameter("terms")
            .with_value(items.len().to_string());
        warn!("Rejected summarize request: {}", err);
        return Ok(error_result(&err));
    }

    let mut terms = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match json_number(item) {
            Ok(n) => terms.push(n),
            Err(e) => {
                return Ok(error_result(
                    &e.for_parameter("terms").with_note(format!("terms[{}]", i)),
                ))
            }
        }
    }

    let statistics = match stride::statistics(&Sequence::from_terms(terms)) {
        Ok(s) => s,
        Err(e) => return Ok(error_result(&e)),
    };

    Ok(json!({
        "content": [{
            "type": "text",
            "text": format!(
                "{} terms: first {}, last {}, sum {}",
                items.len(),
                statistics.first.as_compact(),
                statistics.last.as_compact(),
                statistics.sum_direct.as_compact()
            )
        }],
        "values": {
            "count": items.len(),
            "first": statistics.first.as_compact(),
            "last": statistics.last.as_compact(),
            "sum": statistics.sum_direct.as_compact(),
            "sum_formula": statistics.sum_formula.as_compact()
        },
        "isError": false
    }))
}

fn tool_describe(_args: JsonValue) -> Result<JsonValue, McpError> {
    let mut text = String::new();
    text.push_str("## Parameters\n\n");
    text.push_str("| Name | Label | Type | Default | Description |\n");
    text.push_str("|------|-------|------|---------|-------------|\n");
    for param in &PARAMS {
        text.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            param.name, param.label, param.typ, param.default, param.description
        ));
    }
    text.push('\n');
    text.push_str(stride::guide());

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "data": {
            "parameters": PARAMS,
            "max_terms": MAX_TERMS
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::codes;

    #[test]
    fn test_terms_arg_bounds() {
        assert_eq!(terms_arg(&json!({"num_terms": 1000})).unwrap(), 1000);

        let err = terms_arg(&json!({"num_terms": 0})).unwrap_err();
        assert_eq!(err.code, codes::INVALID_INPUT);

        let err = terms_arg(&json!({"num_terms": 1001})).unwrap_err();
        assert_eq!(err.code, codes::LIMIT_EXCEEDED);
        assert_eq!(err.severity, stride_core::Severity::Warning);
    }

    #[test]
    fn test_terms_arg_rejects_fractional() {
        let err = terms_arg(&json!({"num_terms": 10.5})).unwrap_err();
        assert_eq!(err.code, codes::INVALID_INPUT);
    }

    #[test]
    fn test_json_number_accepts_numbers_and_strings() {
        assert_eq!(json_number(&json!(7)).unwrap(), Number::from_i64(7));
        assert_eq!(json_number(&json!(2.5)).unwrap(), Number::from_str("2.5").unwrap());
        assert_eq!(json_number(&json!("1/2")).unwrap(), Number::from_ratio(1, 2));

        let err = json_number(&json!(true)).unwrap_err();
        assert_eq!(err.code, codes::PARSE_ERROR);
    }

    #[test]
    fn test_number_arg_falls_back_to_default() {
        let args = json!({});
        assert_eq!(number_arg(&args, &PARAMS[0]).unwrap(), Number::from_i64(1));
        assert_eq!(terms_arg(&args).unwrap(), 10);
    }

    #[test]
    fn test_tool_generate_defaults() {
        let v = tool_generate(json!({})).unwrap();
        assert_eq!(v["isError"], false);
        let text = v["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("## Formula"));
        assert!(text.contains("**Sequence:** 1, 2, 3, 4, 5, 6, 7, 8, 9, 10"));
        assert_eq!(v["values"]["sum"], "55");
    }

    #[test]
    fn test_tool_generate_rejects_zero_terms() {
        let v = tool_generate(json!({"num_terms": 0})).unwrap();
        assert_eq!(v["isError"], true);
        assert_eq!(v["error"]["code"], codes::INVALID_INPUT);
        assert_eq!(
            v["error"]["message"],
            "Number of terms must be a positive integer"
        );
    }

    #[test]
    fn test_tool_generate_rejects_oversized_request() {
        let v = tool_generate(json!({"num_terms": 1001})).unwrap();
        assert_eq!(v["isError"], true);
        assert_eq!(v["error"]["code"], codes::LIMIT_EXCEEDED);
        assert_eq!(v["error"]["severity"], "warning");
    }

    #[test]
    fn test_tool_nth_term() {
        let v = tool_nth_term(json!({"first_term": 5, "common_difference": 3, "n": 6})).unwrap();
        assert_eq!(v["isError"], false);
        assert_eq!(v["values"]["term"], "20");
        assert_eq!(v["content"][0]["text"], "a(6) = 20");
    }

    #[test]
    fn test_tool_summarize() {
        let v = tool_summarize(json!({"terms": [1, "2.5", 4]})).unwrap();
        assert_eq!(v["isError"], false);
        assert_eq!(v["values"]["sum"], "7.5");
        assert_eq!(v["values"]["count"], 3);
    }

    #[test]
    fn test_tool_summarize_empty_list() {
        let v = tool_summarize(json!({"terms": []})).unwrap();
        assert_eq!(v["isError"], true);
        assert_eq!(v["error"]["code"], codes::EMPTY_SEQUENCE);
    }

    #[test]
    fn test_tool_summarize_bad_item() {
        let v = tool_summarize(json!({"terms": [1, "abc"]})).unwrap();
        assert_eq!(v["isError"], true);
        assert_eq!(v["error"]["code"], codes::PARSE_ERROR);
    }

    #[test]
    fn test_generate_schema_covers_params() {
        let schema = generate_input_schema();
        for param in &PARAMS {
            assert!(schema["properties"].get(param.name).is_some());
        }
        assert_eq!(schema["properties"]["num_terms"]["maximum"], 1000);
        assert_eq!(schema["properties"]["num_terms"]["default"], 10);
    }

    #[test]
    fn test_initialize_echoes_client_protocol() {
        let params = json!({"protocolVersion": "2024-11-05", "clientInfo": {"name": "test"}});
        let v = handle_initialize(&Some(params)).unwrap();
        assert_eq!(v["protocolVersion"], "2024-11-05");
        assert_eq!(v["serverInfo"]["name"], "stride");
    }

    #[test]
    fn test_resources_read_guide() {
        let v = handle_resources_read(&Some(json!({"uri": "stride://guide"}))).unwrap();
        let text = v["contents"][0]["text"].as_str().unwrap();
        assert!(text.contains("**General Formula:** aₙ = a₁ + (n-1)d"));

        assert!(handle_resources_read(&Some(json!({"uri": "stride://nope"}))).is_err());
    }
}
