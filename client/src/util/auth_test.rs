use super::*;

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def").as_deref(), Some("Bearer abc.def"));
}

#[test]
fn bearer_header_skips_blank_token() {
    assert_eq!(bearer_header(""), None);
    assert_eq!(bearer_header("   "), None);
}

#[test]
fn only_auth_failures_trigger_redirect() {
    assert!(handle_unauthorized(&ApiError::from_status(401, "")));
    assert!(handle_unauthorized(&ApiError::from_status(403, "")));
    assert!(!handle_unauthorized(&ApiError::from_status(500, "")));
    assert!(!handle_unauthorized(&ApiError::Network("down".to_owned())));
}

#[test]
fn no_token_outside_browser() {
    assert_eq!(load_token(), None);
    assert_eq!(bearer_value(), None);
}
