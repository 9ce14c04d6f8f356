use super::*;

// =============================================================================
// PotentialUser
// =============================================================================

#[test]
fn potential_user_accepts_non_blank_fields() {
    assert_eq!(PotentialUser::new("bob", "pw").validate(), Ok(()));
}

#[test]
fn potential_user_rejects_empty_username() {
    assert_eq!(PotentialUser::new("", "x").validate(), Err(ValidationError::Blank("username")));
}

#[test]
fn potential_user_rejects_whitespace_password() {
    assert_eq!(PotentialUser::new("bob", " \t\n").validate(), Err(ValidationError::Blank("password")));
}

#[test]
fn potential_user_validation_does_not_trim_values() {
    let user = PotentialUser::new("  bob ", "pw");
    assert_eq!(user.validate(), Ok(()));
    assert_eq!(user.username, "  bob ");
}

#[test]
fn potential_user_missing_fields_deserialize_as_empty() {
    let user: PotentialUser = serde_json::from_str(r#"{"username":"bob"}"#).expect("parse");
    assert_eq!(user.password, "");
    assert_eq!(user.validate(), Err(ValidationError::Blank("password")));
}

// =============================================================================
// AuthenticatedUser
// =============================================================================

#[test]
fn public_user_serializes_without_token() {
    let json = serde_json::to_value(AuthenticatedUser::public("bob")).expect("serialize");
    assert_eq!(json, serde_json::json!({ "username": "bob" }));
}

#[test]
fn authenticated_user_parses_username_only_body() {
    let user: AuthenticatedUser = serde_json::from_str(r#"{"username":"bob"}"#).expect("parse");
    assert_eq!(user, AuthenticatedUser::public("bob"));
}

#[test]
fn authenticated_user_keeps_token_when_present() {
    let user: AuthenticatedUser = serde_json::from_str(r#"{"username":"bob","token":"t1"}"#).expect("parse");
    assert_eq!(user.token.as_deref(), Some("t1"));
}

// =============================================================================
// NewPizza
// =============================================================================

#[test]
fn new_pizza_requires_title_and_content() {
    let blank_title = NewPizza { title: " ".into(), content: "tomate".into() };
    assert_eq!(blank_title.validate(), Err(ValidationError::Blank("title")));

    let blank_content = NewPizza { title: "Margherita".into(), content: String::new() };
    assert_eq!(blank_content.validate(), Err(ValidationError::Blank("content")));

    let ok = NewPizza { title: "Margherita".into(), content: "tomate, mozzarella".into() };
    assert_eq!(ok.validate(), Ok(()));
}

#[test]
fn validation_error_names_field() {
    assert_eq!(ValidationError::Blank("title").to_string(), "field `title` must not be blank");
}
