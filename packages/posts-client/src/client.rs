//! Posts API client implementation

use std::fmt;
use std::time::Duration;

use postcheck_shared_config::ApiConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{ClientError, ClientResult};
use crate::models::{ApiResponse, PostRequest, RequestBody};

/// Client for the posts resource of the API under test
///
/// Every call is a single request: no retries, no status interpretation.
/// Status codes and bodies are handed back untouched for the caller to assert on.
#[derive(Clone)]
pub struct PostsClient {
    http_client: Client,
    config: ApiConfig,
}

impl fmt::Debug for PostsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostsClient")
            .field("base_url", &self.config.base_url)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}

impl PostsClient {
    /// Create a new client for the configured API
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Create a client targeting `base_url` with default timeouts
    pub fn with_url(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(ApiConfig::with_url(base_url))
    }

    /// Configuration this client was built from
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build the target URL of a request
    fn url_for(&self, request: &PostRequest) -> ClientResult<Url> {
        let url = match &request.id {
            Some(id) => self.config.post_url(id),
            None => self.config.posts_url(),
        };
        Url::parse(&url).map_err(|e| ClientError::InvalidUrl {
            url,
            message: e.to_string(),
        })
    }

    /// Send a request and decode the response
    #[instrument(skip(self, request), fields(method = %request.method, id = ?request.id))]
    pub async fn send(&self, request: PostRequest) -> ClientResult<ApiResponse> {
        let url = self.url_for(&request)?;
        let url_text = url.to_string();

        let mut builder = self.http_client.request(request.method.clone(), url);

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Text(text) => builder.body(text),
        };

        // Caller headers replace the ones implied by the body (e.g. Content-Type)
        builder = builder.headers(header_map(&request.headers)?);

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(&url_text, e))?;

        let status = response.status().as_u16();
        let raw = response
            .text()
            .await
            .map_err(|e| transport_error(&url_text, e))?;

        debug!(url = %url_text, status, bytes = raw.len(), "Received response");

        Ok(ApiResponse::from_parts(status, raw))
    }

    /// `GET /posts`
    pub async fn list_posts(&self) -> ClientResult<ApiResponse> {
        self.send(PostRequest::list()).await
    }

    /// `GET /posts/{id}`
    pub async fn get_post(&self, id: impl fmt::Display) -> ClientResult<ApiResponse> {
        self.send(PostRequest::get(id)).await
    }

    /// `POST /posts` with a JSON body
    pub async fn create_post(&self, payload: &Value) -> ClientResult<ApiResponse> {
        self.send(PostRequest::create(payload.clone())).await
    }

    /// `PUT /posts/{id}` with a JSON body
    pub async fn update_post(
        &self,
        id: impl fmt::Display,
        payload: &Value,
    ) -> ClientResult<ApiResponse> {
        self.send(PostRequest::update(id, payload.clone())).await
    }

    /// `DELETE /posts/{id}`
    pub async fn delete_post(&self, id: impl fmt::Display) -> ClientResult<ApiResponse> {
        self.send(PostRequest::delete(id)).await
    }
}

fn header_map(headers: &[(String, String)]) -> ClientResult<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ClientError::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader(name.clone()))?;
        map.append(header_name, header_value);
    }
    Ok(map)
}

fn transport_error(url: &str, error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(url.to_string())
    } else {
        ClientError::Http(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_with_timeout(base_url: String, timeout_secs: u64) -> PostsClient {
        PostsClient::new(ApiConfig {
            timeout_secs,
            ..ApiConfig::with_url(base_url)
        })
        .unwrap()
    }

    #[test]
    fn test_client_debug_shows_base_url() {
        let client = PostsClient::with_url("http://localhost:4000").unwrap();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("http://localhost:4000"));
    }

    #[test]
    fn test_url_for_collection_and_item() {
        let client = PostsClient::with_url("http://localhost:4000/").unwrap();

        let url = client.url_for(&PostRequest::list()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/posts");

        let url = client.url_for(&PostRequest::get(-5)).unwrap();
        assert_eq!(url.path(), "/posts/-5");
    }

    #[test]
    fn test_url_for_treats_hash_as_fragment() {
        let client = PostsClient::with_url("http://localhost:4000").unwrap();
        let url = client.url_for(&PostRequest::get("!@#")).unwrap();
        assert_eq!(url.path(), "/posts/!@");
    }

    #[test]
    fn test_url_for_invalid_base() {
        let client = PostsClient::with_url("not a url").unwrap();
        assert_matches!(
            client.url_for(&PostRequest::list()),
            Err(ClientError::InvalidUrl { .. })
        );
    }

    #[tokio::test]
    async fn test_get_post_decodes_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "userId": 1, "id": 1, "title": "t", "body": "b"
            })))
            .mount(&server)
            .await;

        let client = PostsClient::with_url(server.uri()).unwrap();
        let response = client.get_post(1).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body["id"], 1);
    }

    #[tokio::test]
    async fn test_non_json_error_body_decodes_to_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/posts/998"))
            .respond_with(ResponseTemplate::new(500).set_body_string("TypeError: oops"))
            .mount(&server)
            .await;

        let client = PostsClient::with_url(server.uri()).unwrap();
        let response = client.update_post(998, &json!({"title": "x"})).await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, json!({}));
        assert_eq!(response.raw, "TypeError: oops");
    }

    #[tokio::test]
    async fn test_create_post_sends_json_body() {
        let server = MockServer::start().await;
        let payload = json!({"userId": 11, "title": "New Post", "body": "b"});
        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 101})))
            .expect(1)
            .mount(&server)
            .await;

        let client = PostsClient::with_url(server.uri()).unwrap();
        let response = client.create_post(&payload).await.unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.body["id"], 101);
    }

    #[tokio::test]
    async fn test_send_text_body_with_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(header("Content-Type", "text/plain"))
            .and(body_string("This is not JSON"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 101})))
            .expect(1)
            .mount(&server)
            .await;

        let client = PostsClient::with_url(server.uri()).unwrap();
        let request = PostRequest::create_raw("This is not JSON")
            .with_header("Content-Type", "text/plain");
        let response = client.send(request).await.unwrap();

        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_delete_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/posts/5"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = PostsClient::with_url(server.uri()).unwrap();
        let response = client.delete_post(5).await.unwrap();

        assert_eq!(response.status, 200);
        assert!(response.is_empty_object());
    }

    #[tokio::test]
    async fn test_invalid_header_rejected_before_sending() {
        let client = PostsClient::with_url("http://localhost:1").unwrap();
        let request = PostRequest::list().with_header("bad header", "x");
        assert_matches!(
            client.send(request).await,
            Err(ClientError::InvalidHeader(name)) if name == "bad header"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let client = PostsClient::with_url("http://127.0.0.1:9").unwrap();
        assert_matches!(client.list_posts().await, Err(ClientError::Http(_)));
    }

    #[tokio::test]
    async fn test_caller_content_type_replaces_json_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 101})))
            .mount(&server)
            .await;

        let client = PostsClient::with_url(server.uri()).unwrap();
        let request =
            PostRequest::create(json!({"a": 1})).with_header("Content-Type", "text/plain");
        let response = client.send(request).await.unwrap();
        assert_eq!(response.status, 201);

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        let content_types: Vec<_> = received[0]
            .headers
            .iter()
            .filter(|(name, _)| name.as_str().eq_ignore_ascii_case("content-type"))
            .flat_map(|(_, values)| values.iter().map(|v| v.as_str().to_string()))
            .collect();
        assert_eq!(content_types, vec!["text/plain".to_string()]);
    }

    #[tokio::test]
    async fn test_slow_response_is_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(3))
                    .set_body_json(json!({"id": 1})),
            )
            .mount(&server)
            .await;

        let client = client_with_timeout(server.uri(), 1);
        assert_matches!(
            client.get_post(1).await,
            Err(ClientError::Timeout(url)) if url.ends_with("/posts/1")
        );
    }

    #[tokio::test]
    async fn test_stalled_body_is_timeout() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        // Headers arrive promptly, the promised body never does
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{")
                .await;
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = client_with_timeout(format!("http://{}", addr), 1);
        assert_matches!(client.get_post(1).await, Err(ClientError::Timeout(_)));
    }
}
