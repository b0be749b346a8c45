use super::*;

use axum::http::HeaderValue;

#[test]
fn upstream_url_joins_without_double_slashes() {
    assert_eq!(
        upstream_url("https://api.example/", "/study-session/", None),
        "https://api.example/study-session/"
    );
    assert_eq!(
        upstream_url("https://api.example", "registration/users/3/2025/03/14", None),
        "https://api.example/registration/users/3/2025/03/14"
    );
}

#[test]
fn upstream_url_keeps_raw_query() {
    assert_eq!(upstream_url("http://up", "issue/", Some("a=1&b=%20")), "http://up/issue/?a=1&b=%20");
    assert_eq!(upstream_url("http://up", "issue/", Some("")), "http://up/issue/");
}

#[test]
fn hop_headers_are_not_forwarded() {
    assert!(!forwardable_header(&HeaderName::from_static("host")));
    assert!(!forwardable_header(&HeaderName::from_static("transfer-encoding")));
    assert!(forwardable_header(&HeaderName::from_static("authorization")));
    assert!(forwardable_header(&HeaderName::from_static("content-type")));
}

#[test]
fn relayed_headers_keep_bearer_token() {
    let mut headers = HeaderMap::new();
    headers.insert("authorization", HeaderValue::from_static("Bearer abc"));
    headers.insert("connection", HeaderValue::from_static("keep-alive"));
    let relayed = relayed_headers(&headers);
    assert_eq!(relayed.len(), 1);
    assert_eq!(relayed.get("authorization").unwrap(), "Bearer abc");
}

#[test]
fn upstream_failure_maps_to_bad_gateway() {
    let response = ProxyError::Upstream("refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let response = ProxyError::RequestBody("too large".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn proxy_builds_with_trimmed_base() {
    let proxy = ApiProxy::new("https://api.example///", Duration::from_secs(5)).unwrap();
    assert_eq!(&*proxy.base, "https://api.example");
}
