use super::*;

#[test]
fn endpoints_match_server_routes() {
    assert_eq!(REGISTER_ENDPOINT, "/api/auths/register");
    assert_eq!(LOGIN_ENDPOINT, "/api/auths/login");
    assert_eq!(LOGOUT_ENDPOINT, "/api/auths/logout");
    assert_eq!(PIZZAS_ENDPOINT, "/api/pizzas");
    assert_eq!(DRINKS_ENDPOINT, "/api/drinks");
}

#[test]
fn http_error_message_carries_status_and_text() {
    let err = http_error(409, "Conflict");
    assert_eq!(err.to_string(), "fetch error : 409 : Conflict");
    assert_eq!(err, ApiError::Http { status: 409, status_text: "Conflict".to_owned() });
}

#[test]
fn only_2xx_counts_as_success() {
    assert!(is_success(200));
    assert!(is_success(201));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(401));
    assert!(!is_success(500));
}

#[test]
fn unavailable_error_message() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
