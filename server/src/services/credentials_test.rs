use super::*;

// =============================================================================
// hash_password / verify_password
// =============================================================================

#[test]
fn stored_hash_verifies_and_wrong_password_does_not() {
    let digest = hash_password("pw").expect("hash");
    assert!(digest.starts_with("$argon2id$"), "{digest}");
    assert!(verify_password(&digest, "pw").expect("readable"));
    assert!(!verify_password(&digest, "pW").expect("readable"));
    assert!(!verify_password(&digest, "").expect("readable"));
}

#[test]
fn same_password_hashes_differently() {
    let a = hash_password("pw").expect("hash");
    let b = hash_password("pw").expect("hash");
    assert_ne!(a, b);
    assert!(verify_password(&b, "pw").expect("readable"));
}

#[test]
fn unreadable_stored_hash_is_an_error() {
    assert!(matches!(verify_password("not-a-phc-string", "pw"), Err(CredentialError::Hash(_))));
}

// =============================================================================
// InMemoryCredentials
// =============================================================================

#[tokio::test]
async fn register_returns_user_with_token() {
    let creds = InMemoryCredentials::new();
    let user = creds.register("bob", "pw").await.expect("store").expect("new user");
    assert_eq!(user.username, "bob");
    assert_eq!(user.token.len(), 64);
}

#[tokio::test]
async fn register_duplicate_returns_none() {
    let creds = InMemoryCredentials::new();
    assert!(creds.register("bob", "pw").await.expect("store").is_some());
    assert!(creds.register("bob", "other").await.expect("store").is_none());
}

#[tokio::test]
async fn login_accepts_registered_password() {
    let creds = InMemoryCredentials::new();
    creds.register("bob", "pw").await.expect("store");
    let user = creds.login("bob", "pw").await.expect("store").expect("authenticated");
    assert_eq!(user.username, "bob");
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let creds = InMemoryCredentials::new();
    creds.register("bob", "pw").await.expect("store");
    assert!(creds.login("bob", "nope").await.expect("store").is_none());
}

#[tokio::test]
async fn login_rejects_unknown_user() {
    let creds = InMemoryCredentials::new();
    assert!(creds.login("ghost", "pw").await.expect("store").is_none());
}

#[tokio::test]
async fn each_login_issues_a_fresh_token() {
    let creds = InMemoryCredentials::new();
    creds.register("bob", "pw").await.expect("store");
    let a = creds.login("bob", "pw").await.expect("store").expect("user");
    let b = creds.login("bob", "pw").await.expect("store").expect("user");
    assert_ne!(a.token, b.token);
}

#[tokio::test]
async fn usernames_are_case_sensitive() {
    let creds = InMemoryCredentials::new();
    creds.register("bob", "pw").await.expect("store");
    assert!(creds.register("Bob", "pw").await.expect("store").is_some());
}

#[tokio::test]
async fn stored_value_is_a_phc_string_not_the_password() {
    let creds = InMemoryCredentials::new();
    creds.register("bob", "pw").await.expect("store");
    let stored = creds.users.read().await.get("bob").cloned().expect("stored");
    assert_ne!(stored, "pw");
    assert!(verify_password(&stored, "pw").expect("readable"));
    assert!(!verify_password(&stored, "nope").expect("readable"));
}
