//! Request and response models for the posts resource

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A post in its nominal shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Owning user
    pub user_id: i64,
    /// Server-assigned identifier
    pub id: i64,
    /// Post title
    pub title: String,
    /// Post body text
    pub body: String,
}

/// Body attached to an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body
    Empty,
    /// JSON-encoded value, sent with `Content-Type: application/json`
    Json(Value),
    /// Raw text sent as-is; headers decide the content type
    Text(String),
}

/// A request against the posts resource
///
/// The id is kept as text so malformed ids (`abc`, `!@#`) can be sent
/// exactly like numeric ones.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRequest {
    pub method: Method,
    pub id: Option<String>,
    pub body: RequestBody,
    pub headers: Vec<(String, String)>,
}

impl PostRequest {
    fn new(method: Method, id: Option<String>, body: RequestBody) -> Self {
        Self {
            method,
            id,
            body,
            headers: Vec::new(),
        }
    }

    /// `GET /posts`
    pub fn list() -> Self {
        Self::new(Method::GET, None, RequestBody::Empty)
    }

    /// `GET /posts/{id}`
    pub fn get(id: impl ToString) -> Self {
        Self::new(Method::GET, Some(id.to_string()), RequestBody::Empty)
    }

    /// `POST /posts` with a JSON body
    pub fn create(payload: Value) -> Self {
        Self::new(Method::POST, None, RequestBody::Json(payload))
    }

    /// `PUT /posts/{id}` with a JSON body
    pub fn update(id: impl ToString, payload: Value) -> Self {
        Self::new(Method::PUT, Some(id.to_string()), RequestBody::Json(payload))
    }

    /// `POST /posts` with a raw text body
    pub fn create_raw(text: impl Into<String>) -> Self {
        Self::new(Method::POST, None, RequestBody::Text(text.into()))
    }

    /// `PUT /posts/{id}` with a raw text body
    pub fn update_raw(id: impl ToString, text: impl Into<String>) -> Self {
        Self::new(Method::PUT, Some(id.to_string()), RequestBody::Text(text.into()))
    }

    /// `DELETE /posts/{id}`
    pub fn delete(id: impl ToString) -> Self {
        Self::new(Method::DELETE, Some(id.to_string()), RequestBody::Empty)
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add several request headers
    pub fn with_headers<'a>(
        mut self,
        headers: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        for (name, value) in headers {
            self.headers.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// JSON payload carried by this request, if any
    pub fn json_payload(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// A decoded response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded JSON body; `{}` when the body was empty or not JSON
    pub body: Value,
    /// Raw body text as received
    pub raw: String,
}

impl ApiResponse {
    /// Build a response from its status and raw body text
    pub fn from_parts(status: u16, raw: String) -> Self {
        Self {
            status,
            body: decode_body(&raw),
            raw,
        }
    }

    /// Body as a JSON object, if it is one
    pub fn object(&self) -> Option<&Map<String, Value>> {
        self.body.as_object()
    }

    /// Whether the body decoded to `{}`
    pub fn is_empty_object(&self) -> bool {
        self.object().map_or(false, Map::is_empty)
    }
}

/// Decode a response body, treating empty or non-JSON text as `{}`
pub fn decode_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::Object(Map::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_uses_camel_case_fields() {
        let post = Post {
            user_id: 1,
            id: 7,
            title: "t".to_string(),
            body: "b".to_string(),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value, json!({"userId": 1, "id": 7, "title": "t", "body": "b"}));
    }

    #[test]
    fn test_decode_empty_body_is_empty_object() {
        assert_eq!(decode_body(""), json!({}));
        assert_eq!(decode_body("  \n"), json!({}));
    }

    #[test]
    fn test_decode_non_json_body_is_empty_object() {
        assert_eq!(decode_body("TypeError: boom"), json!({}));
        assert_eq!(decode_body("<html></html>"), json!({}));
    }

    #[test]
    fn test_decode_json_array_kept() {
        assert_eq!(decode_body("[1, 2]"), json!([1, 2]));
    }

    #[test]
    fn test_response_empty_object() {
        let response = ApiResponse::from_parts(404, "{}".to_string());
        assert!(response.is_empty_object());

        let response = ApiResponse::from_parts(200, r#"{"id": 1}"#.to_string());
        assert!(!response.is_empty_object());

        let response = ApiResponse::from_parts(200, "[]".to_string());
        assert!(!response.is_empty_object());
    }

    #[test]
    fn test_request_builders() {
        let request = PostRequest::get("abc");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.id.as_deref(), Some("abc"));

        let request = PostRequest::create(json!({"title": "x"}));
        assert_eq!(request.json_payload(), Some(&json!({"title": "x"})));

        let request = PostRequest::create_raw("plain").with_header("Content-Type", "text/plain");
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.id, None);
        assert_eq!(request.body, RequestBody::Text("plain".to_string()));
        assert!(request.json_payload().is_none());
        assert_eq!(
            request.headers,
            vec![("Content-Type".to_string(), "text/plain".to_string())]
        );
    }

    #[test]
    fn test_raw_update_carries_only_text() {
        let request = PostRequest::update_raw(1, "plain");
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.id.as_deref(), Some("1"));
        assert_eq!(request.body, RequestBody::Text("plain".to_string()));
        assert!(request.json_payload().is_none());
        assert!(request.headers.is_empty());
    }
}
