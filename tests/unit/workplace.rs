use snapwise_backend::validation::rules::validate_slug_format;

#[test]
fn validate_workplace_slug_rules() {
    assert!(validate_slug_format("acme-builders").is_ok());
    assert!(validate_slug_format("site42").is_ok());
    assert!(validate_slug_format("").is_err());
    assert!(validate_slug_format("Acme").is_err());
    assert!(validate_slug_format("-acme").is_err());
    assert!(validate_slug_format("acme-").is_err());
    assert!(validate_slug_format("ac me").is_err());
}
