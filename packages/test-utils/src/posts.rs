//! Mock posts server for running the suite offline
//!
//! Provides a [`MockPostsServer`] that answers `/posts` requests the way the
//! public JSONPlaceholder service does, including its permissive quirks:
//! creates echo anything, updates of unknown ids fail with 500, and deletes
//! always succeed.

use serde_json::{json, Map, Value};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use postcheck_client::Post;

/// Number of posts the server is seeded with (ids `1..=100`)
pub const SEEDED_POST_COUNT: i64 = 100;

/// Id assigned to every created post
pub const CREATED_POST_ID: i64 = SEEDED_POST_COUNT + 1;

const ITEM_PATH: &str = r"^/posts/[^/]+$";

/// Body sent with a 500, mirroring the service's unhandled server error
const SERVER_ERROR_BODY: &str = "TypeError: Cannot read properties of undefined (reading 'id')";

/// Mock posts server
///
/// This struct wraps a [`wiremock::MockServer`] with every posts route
/// already mounted.
///
/// # Example
///
/// ```rust,ignore
/// use postcheck_test_utils::MockPostsServer;
///
/// #[tokio::test]
/// async fn test_get_post() {
///     let server = MockPostsServer::start().await;
///     let url = format!("{}/posts/1", server.url());
///     // ... send the request and assert on it
/// }
/// ```
pub struct MockPostsServer {
    server: MockServer,
}

impl MockPostsServer {
    /// Start a new mock server with all posts routes mounted
    pub async fn start() -> Self {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(seeded_posts()))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path_regex(ITEM_PATH))
            .respond_with(ShowPost)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/posts"))
            .respond_with(CreatePost)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path_regex(ITEM_PATH))
            .respond_with(UpdatePost)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path_regex(ITEM_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        Self { server }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Number of requests received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}

/// The seeded post with the given id
///
/// Ten posts per user, so ids `1..=10` belong to user 1.
pub fn seeded_post(id: i64) -> Post {
    Post {
        user_id: (id - 1) / 10 + 1,
        id,
        title: format!("seeded post {}", id),
        body: format!("body of seeded post {}", id),
    }
}

fn seeded_posts() -> Vec<Post> {
    (1..=SEEDED_POST_COUNT).map(seeded_post).collect()
}

/// Id in the request path if it names a seeded post
fn seeded_id(request: &Request) -> Option<i64> {
    let segment = request.url.path().rsplit('/').next()?;
    let id = segment.parse::<i64>().ok()?;
    (1..=SEEDED_POST_COUNT).contains(&id).then_some(id)
}

/// Request body if it is a JSON object
fn json_object(request: &Request) -> Option<Map<String, Value>> {
    match serde_json::from_slice(&request.body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

struct ShowPost;

impl Respond for ShowPost {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match seeded_id(request) {
            Some(id) => ResponseTemplate::new(200).set_body_json(seeded_post(id)),
            None => ResponseTemplate::new(404).set_body_json(json!({})),
        }
    }
}

struct CreatePost;

impl Respond for CreatePost {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut created = json_object(request).unwrap_or_default();
        created.insert("id".to_string(), json!(CREATED_POST_ID));
        ResponseTemplate::new(201).set_body_json(Value::Object(created))
    }
}

struct UpdatePost;

impl Respond for UpdatePost {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match (seeded_id(request), json_object(request)) {
            (Some(id), Some(mut updated)) => {
                updated.insert("id".to_string(), json!(id));
                ResponseTemplate::new(200).set_body_json(Value::Object(updated))
            }
            _ => ResponseTemplate::new(500).set_body_string(SERVER_ERROR_BODY),
        }
    }
}
