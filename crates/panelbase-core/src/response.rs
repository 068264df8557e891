//! The `{success, message}` response shape returned by handler functions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub message: String,
}

impl Response {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Minimal handler showing the response convention. `input` is not inspected.
pub fn example_function(_input: &str, happy_path: bool) -> Response {
    if happy_path {
        Response::ok("Hello, how are you?")
    } else {
        Response::failure("An error occurred")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let resp = example_function("anything", true);
        assert!(resp.success);
        assert_eq!(resp.message, "Hello, how are you?");
    }

    #[test]
    fn error_path() {
        let resp = example_function("anything", false);
        assert_eq!(resp, Response::failure("An error occurred"));
    }

    #[test]
    fn serializes_flat() {
        let json = serde_json::to_string(&Response::ok("hi")).unwrap();
        assert_eq!(json, r#"{"success":true,"message":"hi"}"#);
    }
}
