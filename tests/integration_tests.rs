use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::{Duration, Instant},
};

use actix_web::{http::StatusCode, test, web, App};
use advice_server::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    handlers::configure,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
    models::domain::Role,
    services::completion::{CompletionProvider, CompletionRequest},
};
use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::{json, Value};

/// Replies with a fixed text and records every request it sees.
struct RecordingProvider {
    reply: String,
    delay: Duration,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl RecordingProvider {
    fn new(reply: &str) -> Arc<Self> {
        Self::with_delay(reply, Duration::ZERO)
    }

    fn with_delay(reply: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            delay,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> CompletionRequest {
        self.last_request
            .lock()
            .unwrap()
            .clone()
            .expect("provider should have been called")
    }
}

#[async_trait]
impl CompletionProvider for RecordingProvider {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.reply.clone())
    }
}

fn test_config() -> Config {
    Config {
        llm_api_key: SecretString::from("integration-key".to_string()),
        llm_api_base: "http://127.0.0.1:9/v1".to_string(),
        llm_model: "llama-3.1-8b-instant".to_string(),
        llm_timeout_secs: 5,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 5001,
    }
}

fn state(provider: Arc<RecordingProvider>) -> web::Data<AppState> {
    web::Data::new(AppState::with_provider(test_config(), provider))
}

#[actix_web::test]
async fn farming_missing_location_never_reaches_provider() {
    let provider = RecordingProvider::new("unused");
    let app = test::init_service(
        App::new()
            .app_data(state(provider.clone()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/farming/advisory")
        .set_json(json!({ "cropType": "Sugarcane" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(provider.calls(), 0);
}

#[actix_web::test]
async fn every_route_rejects_an_empty_body_except_sos() {
    let provider = RecordingProvider::new("unused");
    let app = test::init_service(
        App::new()
            .app_data(state(provider.clone()))
            .configure(configure),
    )
    .await;

    let expectations = [
        ("/api/learning-planner/generate", "Topic and level are required."),
        ("/api/quiz/generate", "Topic is required."),
        ("/api/farming/advisory", "Crop type and location are required."),
        ("/api/safety/legal-advice", "Legal issue is required."),
        ("/api/safety/schemes", "Category and state are required."),
        ("/api/safety/alerts", "Location is required."),
        ("/api/finance/banking-literacy", "Topic is required."),
        ("/api/finance/planning-tools", "Tool type is required."),
        ("/api/finance/digital-services", "Service type is required."),
        ("/api/career/pathfinder", "Interests are required."),
        ("/api/education/doubt-solver", "Question is required."),
    ];

    for (uri, message) in expectations {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], message, "{}", uri);
    }

    let req = test::TestRequest::post()
        .uri("/api/safety/sos-log")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(provider.calls(), 0);
}

#[actix_web::test]
async fn hindi_learning_plan_sends_two_messages_with_language_instruction() {
    let provider = RecordingProvider::new("**Din 1**\n* Padhai");
    let app = test::init_service(
        App::new()
            .app_data(state(provider.clone()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/learning-planner/generate")
        .set_json(json!({ "topic": "Computers", "level": "Beginner", "language": "Hindi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true, "learningPath": "Din 1\n• Padhai" }));

    let request = provider.last_request();
    assert_eq!(provider.calls(), 1);
    assert_eq!(request.model, "llama-3.1-8b-instant");
    assert_eq!(request.temperature, 0.7);
    assert_eq!(request.max_tokens, 2000);
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[1].role, Role::User);
    assert!(request.messages[1].content.contains("Respond ENTIRELY in Hindi."));
}

#[actix_web::test]
async fn budget_analysis_prompt_lists_allocations() {
    let provider = RecordingProvider::new("Your budget looks *healthy*.");
    let app = test::init_service(
        App::new()
            .app_data(state(provider.clone()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/finance/planning-tools")
        .set_json(json!({
            "toolType": "Budget Analysis",
            "budgetData": {
                "income": 12000,
                "allocations": [
                    { "category": "Housing & Rent", "amount": 3600, "percentage": 30 },
                    { "category": "Savings", "amount": 1800, "percentage": 15 }
                ],
                "totalAllocated": 5400,
                "remaining": 6600
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["calculation"], "Your budget looks healthy.");

    let request = provider.last_request();
    assert_eq!(request.max_tokens, 1500);
    assert!(request.messages[1]
        .content
        .contains("Allocations: Housing & Rent: ₹3600 (30%), Savings: ₹1800 (15%)"));
}

#[actix_web::test]
async fn non_json_quiz_output_is_a_server_error_envelope() {
    let provider = RecordingProvider::new("Sure! Question 1: What is rain?");
    let app = test::init_service(
        App::new()
            .app_data(state(provider.clone()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/quiz/generate")
        .set_json(json!({ "topic": "Weather", "language": "Marathi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Server Error: "));
    assert_eq!(provider.calls(), 1);
}

#[actix_web::test]
async fn concurrent_requests_do_not_serialize_on_the_provider() {
    let delay = Duration::from_millis(300);
    let provider = RecordingProvider::with_delay("Stay indoors.", delay);
    let app = test::init_service(
        App::new()
            .app_data(state(provider.clone()))
            .configure(configure),
    )
    .await;

    let started = Instant::now();
    let calls = (0..5).map(|i| {
        let req = test::TestRequest::post()
            .uri("/api/safety/alerts")
            .set_json(json!({ "location": format!("District {}", i) }))
            .to_request();
        test::call_service(&app, req)
    });
    let responses = futures::future::join_all(calls).await;

    assert!(responses.iter().all(|r| r.status() == StatusCode::OK));
    assert_eq!(provider.calls(), 5);
    assert!(
        started.elapsed() < delay * 4,
        "requests took {:?}",
        started.elapsed()
    );
}

#[actix_web::test]
async fn responses_carry_a_request_id() {
    let provider = RecordingProvider::new("Answer");
    let app = test::init_service(
        App::new()
            .app_data(state(provider))
            .wrap(RequestIdMiddleware)
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/education/doubt-solver")
        .set_json(json!({ "question": "What is 2*3?", "subject": "Maths" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
}

#[actix_web::test]
async fn wrongly_typed_quiz_json_is_returned_as_is() {
    let provider = RecordingProvider::new(
        r#"```json
{"questions":[{"question":"Q?","options":["a","b","c","d"],"correctAnswer":"1"}]}
```"#,
    );
    let app = test::init_service(
        App::new()
            .app_data(state(provider.clone()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/quiz/generate")
        .set_json(json!({ "topic": "Soil" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["quiz"]["questions"][0]["correctAnswer"], "1");
}

#[actix_web::test]
async fn null_budget_figures_and_numeric_fields_reach_the_prompt() {
    let provider = RecordingProvider::new("Advice");
    let app = test::init_service(
        App::new()
            .app_data(state(provider.clone()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/finance/planning-tools")
        .set_json(json!({
            "toolType": "Budget Analysis",
            "budgetData": {
                "income": "0",
                "allocations": [{ "category": "Food", "amount": 0, "percentage": null }],
                "totalAllocated": 0,
                "remaining": null
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let prompt = provider.last_request().messages[1].content.clone();
    assert!(prompt.contains("Remaining: ₹null"));
    assert!(prompt.contains("Food: ₹0 (null%)"));

    let req = test::TestRequest::post()
        .uri("/api/education/doubt-solver")
        .set_json(json!({ "question": "Why is the sky blue?", "grade": 8 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(provider.last_request().messages[1].content.contains("(Grade: 8)"));
    assert_eq!(provider.calls(), 2);
}
