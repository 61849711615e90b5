//! HTTP transport implementation.
//!
//! JSON-RPC over POST requests, so plain HTTP clients (curl, browsers) can
//! list and read documentation resources. If a client disconnects mid-read,
//! axum drops the handler and any pending fetch retries with it.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::resources::ResourceError;

const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    pub fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    pub fn internal_error(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }

    /// MCP's code for an unknown resource URI.
    pub fn resource_not_found(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32002, msg)
    }
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the router serving `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .with_state(server);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    (StatusCode::OK, Json(process_request(&server, request).await))
}

/// Dispatch one JSON-RPC request.
pub async fn process_request(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => JsonRpcResponse::success(
            request.id,
            serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "resources": {} },
                "serverInfo": {
                    "name": server.name(),
                    "version": server.version()
                },
                "instructions": server.instructions()
            }),
        ),

        "resources/list" => {
            let resources = server.list_resources().await;
            JsonRpcResponse::success(request.id, serde_json::json!({ "resources": resources }))
        }

        "resources/templates/list" => {
            JsonRpcResponse::success(request.id, serde_json::json!({ "resourceTemplates": [] }))
        }

        "resources/read" => handle_resources_read(server, request).await,

        // Stateless: notifications are acknowledged and otherwise ignored.
        method if method.starts_with("notifications/") => {
            info!("Received notification: {}", method);
            JsonRpcResponse::success(request.id, Value::Null)
        }

        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

async fn handle_resources_read(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    let Some(uri) = request
        .params
        .as_ref()
        .and_then(|p| p.get("uri"))
        .and_then(Value::as_str)
    else {
        return JsonRpcResponse::invalid_params(request.id, "Missing resource URI");
    };

    match server.read_resource(uri).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e @ ResourceError::NotFound(_)) => {
            JsonRpcResponse::resource_not_found(request.id, e.to_string())
        }
        Err(e) => JsonRpcResponse::internal_error(request.id, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(serde_json::json!(1)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize_advertises_resources() {
        let response = process_request(&server(), request("initialize", None)).await;
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert!(result["capabilities"]["resources"].is_object());
        assert!(result["capabilities"].get("tools").is_none());
    }

    #[tokio::test]
    async fn test_resources_list() {
        let response = process_request(&server(), request("resources/list", None)).await;
        let resources = response.result.unwrap()["resources"].as_array().unwrap().clone();
        assert_eq!(resources.len(), 24);
    }

    #[tokio::test]
    async fn test_resources_read_static() {
        let params = serde_json::json!({ "uri": "effect://example/atom-react/basic" });
        let response = process_request(&server(), request("resources/read", Some(params))).await;

        let result = response.result.unwrap();
        let text = result["contents"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("# Basic atom-react Example"));
    }

    #[tokio::test]
    async fn test_resources_read_errors() {
        let response = process_request(&server(), request("resources/read", None)).await;
        assert_eq!(response.error.unwrap().code, -32602);

        let params = serde_json::json!({ "uri": "effect://api/unknown" });
        let response = process_request(&server(), request("resources/read", Some(params))).await;
        assert_eq!(response.error.unwrap().code, -32002);
    }

    #[tokio::test]
    async fn test_rejects_bad_version_and_unknown_methods() {
        let mut bad = request("resources/list", None);
        bad.jsonrpc = "1.0".to_string();
        assert_eq!(
            process_request(&server(), bad).await.error.unwrap().code,
            -32600
        );

        let response = process_request(&server(), request("tools/list", None)).await;
        assert_eq!(response.error.unwrap().code, -32601);
    }
}
