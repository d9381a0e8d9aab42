use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use classifier_rs::api::ApiServer;
use classifier_rs::config::ModelConfig;
use classifier_rs::spam::SpamManager;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn seeded_router() -> Router {
    let manager = SpamManager::new(ModelConfig::default());
    manager.seed().await.expect("seed training should succeed");
    ApiServer::new(manager, "127.0.0.1:0".to_string()).router()
}

fn untrained_router() -> Router {
    let manager = SpamManager::new(ModelConfig::default());
    ApiServer::new(manager, "127.0.0.1:0".to_string()).router()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn training_payload(count: usize) -> Value {
    let texts: Vec<String> = (0..count)
        .map(|i| {
            if i % 2 == 0 {
                format!("WIN a FREE lottery jackpot prize now {}", i)
            } else {
                format!("Lunch meeting with the team tomorrow {}", i)
            }
        })
        .collect();
    let labels: Vec<i64> = (0..count).map(|i| if i % 2 == 0 { 1 } else { 0 }).collect();
    json!({ "texts": texts, "labels": labels })
}

#[tokio::test]
async fn test_classify_spam() {
    let (status, body) = post_json(
        seeded_router().await,
        "/classify",
        json!({ "text": "URGENT! You have WON a FREE prize, call now!" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["text"], "URGENT! You have WON a FREE prize, call now!");
    assert_eq!(body["result"]["status"], "classified");
    assert_eq!(body["result"]["prediction"], "Spam");
    assert!(body["result"]["spam_probability"].as_f64().unwrap() > 50.0);
}

#[tokio::test]
async fn test_classify_ham() {
    let (status, body) = post_json(
        seeded_router().await,
        "/classify",
        json!({ "text": "Hi there, how are you?" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["prediction"], "Not Spam");
    assert!(body["result"]["ham_probability"].as_f64().unwrap() > 50.0);
}

#[tokio::test]
async fn test_classify_blank_text() {
    let (status, body) = post_json(seeded_router().await, "/classify", json!({ "text": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please provide some text to classify");

    let (status, _) = post_json(seeded_router().await, "/classify", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_classify_untrained() {
    let (status, body) = post_json(untrained_router(), "/classify", json!({ "text": "hello" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["status"], "untrained");
    assert_eq!(body["result"]["message"], "Model not trained");
}

#[tokio::test]
async fn test_train() {
    let (status, body) = post_json(seeded_router().await, "/train", training_payload(12)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["accuracy"].as_f64().unwrap() > 0.5);
    assert_eq!(
        body["message"],
        "Model trained successfully with 12 samples (training-set accuracy)"
    );
}

#[tokio::test]
async fn test_train_too_few_samples() {
    let (status, body) = post_json(seeded_router().await, "/train", training_payload(9)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please provide at least 10 samples for training");
}

#[tokio::test]
async fn test_train_mismatched_lengths() {
    let mut payload = training_payload(10);
    payload["labels"] = json!([1, 0, 1]);

    let (status, body) = post_json(seeded_router().await, "/train", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Number of texts and labels must match");
}

#[tokio::test]
async fn test_rejected_training_keeps_model() {
    let router = seeded_router().await;
    let text = json!({ "text": "URGENT! You have WON a FREE prize, call now!" });

    let (_, before) = post_json(router.clone(), "/classify", text.clone()).await;
    let (status, _) = post_json(router.clone(), "/train", training_payload(9)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, after) = post_json(router, "/classify", text).await;

    assert_eq!(before["result"], after["result"]);
}

#[tokio::test]
async fn test_stats() {
    let (status, body) = get(seeded_router().await, "/stats").await;
    assert_eq!(status, StatusCode::OK);

    let stats: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(stats["is_trained"], true);
    assert_eq!(stats["model_type"], "Multinomial Naive Bayes");
    assert_eq!(stats["vectorizer"], "TF-IDF");
    assert_eq!(stats["features"], 5000);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(untrained_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_index_page() {
    let (status, body) = get(seeded_router().await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Spam Classifier"));
    assert!(body.contains("model trained"));
}
