#[test]
fn validate_invite_email_rules() {
    use snapwise_backend::validation::employee::validate_invite_email;
    assert!(validate_invite_email("worker@site.com").is_ok());
    assert!(validate_invite_email("").is_err());
    assert!(validate_invite_email("   ").is_err());
    assert!(validate_invite_email("no-at.com").is_err());
    assert!(validate_invite_email("no-dot@com").is_err());
}
