//! Fixture catalog
//!
//! Named inputs shared by every case: identifier sets and request payloads,
//! valid ones as well as deliberately malformed ones. Everything here is
//! built once and never mutated.

use std::fmt;

use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// A post identifier as it appears in a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostId {
    /// Integer id, possibly out of range
    Numeric(i64),
    /// Adversarial non-numeric id, inserted verbatim
    Raw(&'static str),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{}", id),
            Self::Raw(id) => f.write_str(id),
        }
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

/// An id known to resolve
pub const EXISTING_ID: i64 = 3;

/// An id known not to resolve
pub const NON_EXISTING_ID: i64 = 666;

/// Ids expected to resolve with 200
pub const EXISTING_IDS: [i64; 5] = [1, 2, 3, 50, 100];

/// Ids expected to 404 on read, including non-numeric ones
pub const NON_EXISTING_IDS: [PostId; 6] = [
    PostId::Numeric(-5),
    PostId::Numeric(0),
    PostId::Numeric(101),
    PostId::Numeric(999),
    PostId::Raw("abc"),
    PostId::Raw("!@#"),
];

/// Target of the valid update
pub const UPDATE_ID_VALID: i64 = 1;

/// Target of the update that the service rejects with 500
pub const UPDATE_ID_INVALID: i64 = 998;

/// Target of the delete of an existing post
pub const DELETE_ID: i64 = 5;

/// Headers declaring a non-JSON body
pub const INVALID_CONTENT_TYPE_HEADERS: [(&str, &str); 1] = [("Content-Type", "text/plain")];

/// Body that is not JSON
pub const INVALID_NON_JSON_BODY: &str = "This is not JSON";

pub static VALID_NEW_POST: Lazy<Value> = Lazy::new(|| {
    json!({
        "userId": 11,
        "title": "New Post",
        "body": "This is a new post."
    })
});

pub static UPDATED_POST: Lazy<Value> = Lazy::new(|| {
    json!({
        "userId": 1,
        "title": "Updated Title",
        "body": "This is the updated body."
    })
});

pub static UPDATE_INVALID_POST: Lazy<Value> = Lazy::new(|| {
    json!({
        "userId": 1,
        "title": "Attempt to update invalid ID",
        "body": "This should fail on a real API"
    })
});

/// Posts with one or more fields set to null
pub static POSTS_WITH_NONE_FIELDS: Lazy<Vec<Value>> = Lazy::new(|| {
    vec![
        json!({"userId": null, "title": "Title", "body": "Body"}),
        json!({"userId": 1, "title": null, "body": "Body"}),
        json!({"userId": 1, "title": "Title", "body": null}),
        json!({"userId": null, "title": null, "body": null}),
    ]
});

/// Posts missing some or all fields
pub static POSTS_WITH_MISSING_FIELDS: Lazy<Vec<Value>> = Lazy::new(|| {
    vec![
        json!({"userId": 1, "body": "Body without title"}),
        json!({"title": "Title without userId", "body": "Body"}),
        json!({"userId": 1, "title": "Title without body"}),
        json!({}),
    ]
});

/// Posts with a field of the wrong type
pub static POSTS_WITH_WRONG_TYPES: Lazy<Vec<Value>> = Lazy::new(|| {
    vec![
        json!({"userId": "string_instead_of_int", "title": "Title", "body": "Body"}),
        json!({"userId": 1, "title": 12345, "body": "Body"}),
        json!({"userId": 1, "title": "Title", "body": 67890}),
    ]
});

/// 1000-character title, 10000-character body
pub static LARGE_POST: Lazy<Value> = Lazy::new(|| {
    json!({
        "userId": 1,
        "title": "A".repeat(1000),
        "body": "B".repeat(10_000)
    })
});

pub static POST_WITH_ONE_EXTRA_FIELD: Lazy<Value> = Lazy::new(|| {
    json!({
        "userId": 1,
        "title": "Post with Extra Field",
        "body": "This post includes an extra field.",
        "extraField": "unexpected"
    })
});
