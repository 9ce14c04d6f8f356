use super::*;
use crate::net::types::AuthenticatedUser;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = UserState { authenticated_user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&UserState::pending()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = UserState { authenticated_user: Some(AuthenticatedUser::public("bob")), loading: false };
    assert!(!should_redirect_unauth(&state));
}
