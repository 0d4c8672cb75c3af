use super::*;

#[test]
fn client_configuration() {
    let config = GenerationConfig {
        protocol: "http".to_string(),
        host: "gen-host".to_string(),
        port: 8080,
        model: "test-model".to_string(),
        max_tokens: 512,
    };
    let client = OpenAiClient::new(&config).expect("Failed to create client");

    assert_eq!(client.model, "test-model");
    assert_eq!(client.max_tokens, 512);
    assert_eq!(client.base_url.host_str(), Some("gen-host"));
    assert_eq!(client.base_url.port(), Some(8080));
    assert_eq!(client.retry_attempts, DEFAULT_RETRY_ATTEMPTS);
}

#[test]
fn client_builder_methods() {
    let config = GenerationConfig::default();
    let client = OpenAiClient::new(&config)
        .expect("Failed to create client")
        .with_timeout(Duration::from_secs(120))
        .with_retry_attempts(1);

    assert_eq!(client.retry_attempts, 1);
}

#[test]
fn request_pins_temperature_to_zero() {
    let messages = vec![ChatMessage::user("hello")];
    let request = ChatCompletionRequest {
        model: "test-model",
        temperature: TEMPERATURE,
        max_tokens: 64,
        messages: &messages,
    };

    let json = serde_json::to_value(&request).expect("Failed to serialize request");
    assert_eq!(json["temperature"], 0.0);
    assert_eq!(json["model"], "test-model");
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"], "hello");
}

#[test]
fn response_content_deserializes() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"pong"}}]}"#;
    let response: ChatCompletionResponse =
        serde_json::from_str(body).expect("Failed to parse response");

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content);
    assert_eq!(content.as_deref(), Some("pong"));
}

#[test]
fn missing_content_deserializes_to_none() {
    let body = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
    let response: ChatCompletionResponse =
        serde_json::from_str(body).expect("Failed to parse response");

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content);
    assert_eq!(content, None);
}

#[test]
fn chat_message_roles_serialize_lowercase() {
    let json = serde_json::to_value(ChatMessage::system("s")).expect("serialize");
    assert_eq!(json["role"], "system");
    let json = serde_json::to_value(ChatMessage::assistant("a")).expect("serialize");
    assert_eq!(json["role"], "assistant");
}
