//! Declared test cases
//!
//! Each [`Scenario`] pairs one request built from the fixture catalog with
//! the outcome the service is known to produce for it. Parametrized cases
//! expand to one scenario per fixture entry.

use postcheck_client::{ApiResponse, PostRequest};
use serde_json::{json, Value};

use crate::assertions::{
    assert_empty_object, assert_field_types, assert_has_id, assert_id_equals,
    assert_matches_input, assert_post_list, assert_required_fields_present, assert_status,
    assert_subset_matches, AssertionResult,
};
use crate::fixtures::{
    PostId, DELETE_ID, EXISTING_IDS, INVALID_CONTENT_TYPE_HEADERS, INVALID_NON_JSON_BODY,
    LARGE_POST, NON_EXISTING_ID, NON_EXISTING_IDS, POSTS_WITH_MISSING_FIELDS,
    POSTS_WITH_NONE_FIELDS, POSTS_WITH_WRONG_TYPES, POST_WITH_ONE_EXTRA_FIELD,
    UPDATED_POST, UPDATE_ID_INVALID, UPDATE_ID_VALID, UPDATE_INVALID_POST, VALID_NEW_POST,
};

/// A body check applied after the status code matched
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    RequiredFields,
    FieldTypes,
    /// Echoed `userId`/`title`/`body` equal the request payload
    MatchesInput,
    /// Every key of the request payload is echoed with the same value
    SubsetMatches,
    HasId,
    IdEquals(i64),
    EmptyObject,
    PostList,
}

impl Check {
    fn apply(&self, input: &Value, body: &Value) -> AssertionResult {
        match self {
            Self::RequiredFields => assert_required_fields_present(body),
            Self::FieldTypes => assert_field_types(body),
            Self::MatchesInput => assert_matches_input(input, body),
            Self::SubsetMatches => assert_subset_matches(input, body),
            Self::HasId => assert_has_id(body),
            Self::IdEquals(id) => assert_id_equals(body, *id),
            Self::EmptyObject => assert_empty_object(body),
            Self::PostList => assert_post_list(body),
        }
    }
}

/// One declared case: a request and its expected outcome
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub request: PostRequest,
    pub expected_status: u16,
    pub checks: Vec<Check>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, request: PostRequest, expected_status: u16) -> Self {
        Self {
            name: name.into(),
            request,
            expected_status,
            checks: Vec::new(),
        }
    }

    pub fn check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Assert the response against this scenario
    ///
    /// The status code is checked first; body checks run in declaration
    /// order and stop at the first failure.
    pub fn verify(&self, response: &ApiResponse) -> AssertionResult {
        assert_status(response.status, self.expected_status)?;

        let empty = json!({});
        let input = self.request.json_payload().unwrap_or(&empty);
        for check in &self.checks {
            check.apply(input, &response.body)?;
        }
        Ok(())
    }
}

/// Every declared case, in execution order
pub fn all() -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    scenarios.extend(read_scenarios());
    scenarios.extend(create_scenarios());
    scenarios.extend(update_scenarios());
    scenarios.extend(delete_scenarios());
    scenarios
}

fn read_scenarios() -> Vec<Scenario> {
    let mut scenarios = vec![Scenario::new("get_all_posts", PostRequest::list(), 200)
        .check(Check::PostList)];

    for id in EXISTING_IDS {
        scenarios.push(
            Scenario::new(format!("get_post_by_valid_id[{}]", id), PostRequest::get(id), 200)
                .check(Check::IdEquals(id))
                .check(Check::RequiredFields)
                .check(Check::FieldTypes),
        );
    }

    for id in NON_EXISTING_IDS {
        scenarios.push(
            Scenario::new(format!("get_post_by_invalid_id[{}]", id), PostRequest::get(id), 404)
                .check(Check::EmptyObject),
        );
    }

    scenarios
}

/// Cases sending a malformed payload, labelled by table and index
fn malformed_payloads() -> Vec<(String, Value)> {
    let tables: [(&str, &[Value]); 3] = [
        ("none_fields", POSTS_WITH_NONE_FIELDS.as_slice()),
        ("missing_fields", POSTS_WITH_MISSING_FIELDS.as_slice()),
        ("wrong_types", POSTS_WITH_WRONG_TYPES.as_slice()),
    ];

    tables
        .into_iter()
        .flat_map(|(label, payloads)| {
            payloads
                .iter()
                .enumerate()
                .map(move |(index, payload)| (format!("{}[{}]", label, index), payload.clone()))
        })
        .collect()
}

fn create_scenarios() -> Vec<Scenario> {
    let mut scenarios = vec![Scenario::new(
        "create_new_post",
        PostRequest::create(VALID_NEW_POST.clone()),
        201,
    )
    .check(Check::MatchesInput)
    .check(Check::FieldTypes)];

    for (label, payload) in malformed_payloads() {
        scenarios.push(
            Scenario::new(
                format!("create_post_with_{}", label),
                PostRequest::create(payload),
                201,
            )
            .check(Check::SubsetMatches)
            .check(Check::HasId),
        );
    }

    scenarios.push(
        Scenario::new(
            "create_large_post",
            PostRequest::create(LARGE_POST.clone()),
            201,
        )
        .check(Check::RequiredFields)
        .check(Check::FieldTypes)
        .check(Check::MatchesInput),
    );

    scenarios.push(
        Scenario::new(
            "create_post_with_extra_field",
            PostRequest::create(POST_WITH_ONE_EXTRA_FIELD.clone()),
            201,
        )
        .check(Check::MatchesInput)
        .check(Check::SubsetMatches),
    );

    scenarios.push(
        Scenario::new(
            "create_post_with_non_json_body",
            PostRequest::create_raw(INVALID_NON_JSON_BODY)
                .with_headers(INVALID_CONTENT_TYPE_HEADERS),
            201,
        )
        .check(Check::HasId),
    );

    scenarios
}

fn update_scenarios() -> Vec<Scenario> {
    let mut scenarios = vec![
        Scenario::new(
            "update_post",
            PostRequest::update(UPDATE_ID_VALID, UPDATED_POST.clone()),
            200,
        )
        .check(Check::IdEquals(UPDATE_ID_VALID))
        .check(Check::MatchesInput)
        .check(Check::FieldTypes),
        Scenario::new(
            "update_non_existing_post_id",
            PostRequest::update(UPDATE_ID_INVALID, UPDATE_INVALID_POST.clone()),
            500,
        ),
    ];

    for (label, payload) in malformed_payloads() {
        scenarios.push(
            Scenario::new(
                format!("update_post_with_{}", label),
                PostRequest::update(UPDATE_ID_VALID, payload),
                200,
            )
            .check(Check::IdEquals(UPDATE_ID_VALID))
            .check(Check::SubsetMatches),
        );
    }

    scenarios.push(Scenario::new(
        "update_post_with_non_json_body",
        PostRequest::update_raw(UPDATE_ID_VALID, INVALID_NON_JSON_BODY)
            .with_headers(INVALID_CONTENT_TYPE_HEADERS),
        500,
    ));

    scenarios
}

fn delete_scenarios() -> Vec<Scenario> {
    let ids = [
        ("delete_existing_post", PostId::Numeric(DELETE_ID)),
        ("delete_non_existing_post", PostId::Numeric(NON_EXISTING_ID)),
        ("delete_non_existing_post_again", PostId::Numeric(NON_EXISTING_ID)),
        ("delete_malformed_id", PostId::Raw("abc")),
    ];

    ids.into_iter()
        .map(|(name, id)| {
            Scenario::new(name, PostRequest::delete(id), 200).check(Check::EmptyObject)
        })
        .collect()
}
