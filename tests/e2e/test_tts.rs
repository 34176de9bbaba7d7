use crate::e2e::helpers;

use helpers::mock_speechkit::MockBehavior;
use helpers::{spawn_app, TestContext, FAKE_MP3};
use hyper::StatusCode;
use serde_json::{json, Value};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_text_to_speech(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Hello, this is a test message for text to speech."
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header("x-audio-codec", "mp3")
        .assert_header("x-language", "en-US")
        .assert_header("x-tts-provider", "YandexTTS")
        .assert_header_exists("x-request-id");
    assert_eq!(response.body_bytes, FAKE_MP3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_language_override_to_speechkit(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Это тестовое сообщение.",
                "language": "ru-RU"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-language", "ru-RU");

    let requests = ctx.speechkit.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["lang"], "ru-RU");
    assert_eq!(requests[0]["text"], "Это тестовое сообщение.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": "" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Text cannot be empty");
    assert!(ctx.speechkit.requests().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unsupported_language(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Bonjour",
                "language": "fr-FR"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("unsupported language: fr-FR");
    assert!(ctx.speechkit.requests().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_languages(ctx: &TestContext) {
    let response = ctx.client.get("/api/tts/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body: Value = response.json().unwrap();
    assert_eq!(body["default_language"], "en-US");
    assert_eq!(
        body["supported_languages"],
        json!(["ru-RU", "en-US", "tr-TR", "uk-UK"])
    );
}

#[tokio::test]
async fn it_should_return_bad_gateway_when_speechkit_refuses() {
    let app = spawn_app(MockBehavior::Status(403)).await.unwrap();

    let response = app
        .client
        .post("/api/tts/synthesize", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("YandexTTS produced no audio");
    assert_eq!(app.speechkit.requests().len(), 1);
    assert_eq!(app.speechkit.requests()[0]["key"], app.config.provider.api_key);
}

#[tokio::test]
async fn it_should_serve_configured_codec_content_type() {
    let app = spawn_app(MockBehavior::Audio(vec![1, 2, 3])).await.unwrap();

    let response = app
        .client
        .post(
            "/api/tts/synthesize",
            &json!({ "text": "Merhaba", "language": "tr-TR" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header("x-language", "tr-TR");
    assert_eq!(response.body_bytes, vec![1, 2, 3]);
}
