use super::*;

#[test]
fn client_configuration() {
    let config = EmbeddingConfig {
        protocol: "http".to_string(),
        host: "test-host".to_string(),
        port: 1234,
        model: "test-model".to_string(),
        batch_size: 128,
    };
    let client = OllamaClient::new(&config).expect("Failed to create client");

    assert_eq!(client.model, "test-model");
    assert_eq!(client.batch_size, 128);
    assert_eq!(client.base_url.host_str(), Some("test-host"));
    assert_eq!(client.base_url.port(), Some(1234));
    assert_eq!(client.retry_attempts, DEFAULT_RETRY_ATTEMPTS);
}

#[test]
fn client_builder_methods() {
    let config = EmbeddingConfig::default();
    let client = OllamaClient::new(&config)
        .expect("Failed to create client")
        .with_timeout(Duration::from_secs(60))
        .with_retry_attempts(5);

    assert_eq!(client.retry_attempts, 5);
}

#[test]
fn invalid_endpoint_is_rejected() {
    let config = EmbeddingConfig {
        protocol: "gopher".to_string(),
        ..EmbeddingConfig::default()
    };
    assert!(OllamaClient::new(&config).is_err());
}

#[test]
fn embed_request_serializes_inputs() {
    let inputs = vec!["first".to_string(), "second".to_string()];
    let request = EmbedRequest {
        model: "test-model",
        input: &inputs,
    };

    let json = serde_json::to_value(&request).expect("Failed to serialize request");
    assert_eq!(json["model"], "test-model");
    assert_eq!(json["input"][0], "first");
    assert_eq!(json["input"][1], "second");
}

#[test]
fn status_code_retryability() {
    assert!(retryable(&ureq::Error::StatusCode(500)));
    assert!(retryable(&ureq::Error::StatusCode(503)));
    assert!(!retryable(&ureq::Error::StatusCode(400)));
    assert!(!retryable(&ureq::Error::StatusCode(404)));
    assert!(retryable(&ureq::Error::ConnectionFailed));
}
