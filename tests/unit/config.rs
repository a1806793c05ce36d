use snapwise_backend::config::Config;

fn minimal_env() -> Vec<(String, String)> {
    vec![(
        "DATABASE_URL".to_string(),
        "postgres://localhost/snapwise".to_string(),
    )]
}

#[test]
fn config_defaults_apply_when_env_is_minimal() {
    let config = envy::from_iter::<_, Config>(minimal_env()).unwrap();

    assert_eq!(config.server_host, "127.0.0.1");
    assert_eq!(config.server_port, 8000);
    assert_eq!(config.database_max_connections, 20);
    assert_eq!(config.jwt_access_token_expires_in, 3600);
    assert_eq!(config.jwt_refresh_token_expires_in, 604800);
    assert_eq!(config.log_format, "json");
    assert_eq!(config.server_address(), "127.0.0.1:8000");
}

#[test]
fn join_link_carries_the_invite_token() {
    let config = envy::from_iter::<_, Config>(minimal_env()).unwrap();
    let token = uuid::Uuid::nil();

    let link = config.join_link(token);
    assert_eq!(
        link,
        format!("http://localhost:3000/join-workplace?token={}", token)
    );
}

#[test]
fn password_strength_rules() {
    use snapwise_backend::validation::rules::validate_password_strength;

    assert!(validate_password_strength("StrongP4ss!").is_ok());
    assert!(validate_password_strength("Abcdefg1").is_ok());
    assert!(validate_password_strength("weak").is_err());
    assert!(validate_password_strength("alllowercase").is_err());
}
