use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_emotion_presets(ctx: &TestContext) {
    let response = ctx.client.get("/api/tts/emotions").await.unwrap();

    response.assert_status(StatusCode::OK);

    let emotions = response.body.as_ref().unwrap().as_array().unwrap();
    assert_eq!(emotions.len(), 12);

    let whisper = emotions
        .iter()
        .find(|e| e.get("id").and_then(|v| v.as_str()) == Some("whisper"))
        .expect("whisper preset missing");
    assert_eq!(whisper.get("pitch").and_then(|v| v.as_f64()), Some(1.5));
    assert_eq!(whisper.get("speaking_rate").and_then(|v| v.as_f64()), Some(0.7));
    assert!(whisper.get("name").is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_voices_per_provider(ctx: &TestContext) {
    let response = ctx.client.get("/api/tts/voices").await.unwrap();

    response.assert_status(StatusCode::OK);

    let providers = response.body.as_ref().unwrap().as_array().unwrap();
    assert_eq!(providers.len(), 2);

    let google = &providers[0];
    assert_eq!(google.get("provider").and_then(|v| v.as_str()), Some("google"));
    assert_eq!(google.get("supports_emotion").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(
        google.get("genders"),
        Some(&serde_json::json!(["FEMALE", "MALE", "NEUTRAL"]))
    );

    let openai = &providers[1];
    assert_eq!(openai.get("provider").and_then(|v| v.as_str()), Some("openai"));
    assert_eq!(openai.get("supports_emotion").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        openai.get("voices").and_then(|v| v.as_array()).map(|v| v.len()),
        Some(6)
    );
    assert!(openai.get("note").is_some());
}
