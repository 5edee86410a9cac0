use axum::http::{HeaderMap, HeaderValue};

use folio::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_incoming_request_id_when_extracting_then_reuses_it() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));

    assert_eq!(RequestId::from_headers(&headers).0, "abc-123");
}

#[test]
fn given_missing_or_blank_header_when_extracting_then_generates_uuid() {
    let mut blank = HeaderMap::new();
    blank.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));

    for headers in [HeaderMap::new(), blank] {
        let id = RequestId::from_headers(&headers);
        assert!(uuid::Uuid::parse_str(&id.0).is_ok());
    }
}
