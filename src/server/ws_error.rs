/// Helpers for WebSocket error frames.
///
/// Every error frame has the same shape so the browser can show it uniformly.

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "NOT_YOUR_TURN").
/// - `message`: Human-readable error message.
/// - `context`: Optional context (e.g. the game id).
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    serde_json::json!({
        "action": "Error",
        "data": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    })
    .to_string()
}
