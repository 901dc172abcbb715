use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use via_screen::services::http_transport::ReqwestTransport;
use via_screen::{AnalysisRequest, ClassifierGateway, SuspicionLevel};
use wiremock::matchers::{body_bytes, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IMAGE: &str = "data:image/jpeg;base64,/9j/4A==";
const IMAGE_BYTES: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

fn gateway_for(server: &MockServer, token: Option<&str>) -> ClassifierGateway {
    ClassifierGateway::new(token.map(str::to_string), Arc::new(ReqwestTransport::new()))
        .with_model_url(format!("{}/models/via-classifier", server.uri()))
        .with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn posts_binary_image_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/via-classifier"))
        .and(header("authorization", "Bearer hf_test"))
        .and(header("content-type", "application/octet-stream"))
        .and(body_bytes(IMAGE_BYTES.to_vec()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"label": "High Grade Lesion (CIN2+)", "score": 0.942},
            {"label": "Negative", "score": 0.058}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let result = gateway_for(&server, Some("hf_test"))
        .classify(AnalysisRequest::from_data_uri(IMAGE))
        .await;

    assert_eq!(result.label, "High Grade Lesion (CIN2+)");
    assert_eq!(result.confidence, 94.2);
    assert_eq!(result.suspicion_level, SuspicionLevel::High);
    assert!(result.recommendation.starts_with("Refer for colposcopy and biopsy immediately"));
    assert_eq!(result.image_ref, IMAGE);
}

#[tokio::test]
async fn missing_credential_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let result = gateway_for(&server, None)
        .classify(AnalysisRequest::from_data_uri(IMAGE))
        .await;

    assert_eq!(result.label, "Configuration Error");
    assert_eq!(result.confidence, 0.0);
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn service_unavailable_is_reported_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Model is overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let result = gateway_for(&server, Some("hf_test"))
        .classify(AnalysisRequest::from_data_uri(IMAGE))
        .await;

    assert_eq!(result.label, "Service Error");
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.suspicion_level, SuspicionLevel::Low);
    assert!(result.error_detail.as_deref().unwrap_or_default().contains("503"));
}

#[tokio::test]
async fn loading_model_error_object_is_unknown_format() {
    let server = MockServer::start().await;
    let body = json!({"error": "Model KhanyiTapiwa00/medsiglip-diagnosis is currently loading", "estimated_time": 20.0});
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let result = gateway_for(&server, Some("hf_test"))
        .classify(AnalysisRequest::from_data_uri(IMAGE))
        .await;

    assert_eq!(result.label, "Unknown Format");
    assert_eq!(result.raw_output, Some(body));
    assert!(result.is_degraded());
}

#[tokio::test]
async fn slow_upstream_hits_the_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"label": "Negative", "score": 0.9}]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let result = gateway_for(&server, Some("hf_test"))
        .with_timeout(Duration::from_millis(200))
        .classify(AnalysisRequest::from_data_uri(IMAGE))
        .await;

    assert_eq!(result.label, "Network Error");
    assert_eq!(result.suspicion_level, SuspicionLevel::Low);
    assert!(result.error_detail.as_deref().unwrap_or_default().contains("timed out"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let gateway = ClassifierGateway::new(Some("hf_test".to_string()), Arc::new(ReqwestTransport::new()))
        .with_model_url("http://127.0.0.1:9/models/via".to_string())
        .with_timeout(Duration::from_secs(2));

    let result = gateway.classify(AnalysisRequest::from_bytes("capture-1.jpg", IMAGE_BYTES.to_vec())).await;

    assert_eq!(result.label, "Network Error");
    assert_eq!(result.image_ref, "capture-1.jpg");
    assert_eq!(result.confidence, 0.0);
}

#[tokio::test]
async fn concurrent_classifications_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"label": "Negative", "score": 0.88},
            {"label": "Suspicious", "score": 0.12}
        ])))
        .expect(4)
        .mount(&server)
        .await;

    let gateway = Arc::new(gateway_for(&server, Some("hf_test")));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let gateway = Arc::clone(&gateway);
            tokio::spawn(async move {
                gateway
                    .classify(AnalysisRequest::from_bytes(&format!("capture-{}.jpg", i), IMAGE_BYTES.to_vec()))
                    .await
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap();
        assert_eq!(result.image_ref, format!("capture-{}.jpg", i));
        assert_eq!(result.label, "Negative");
        assert_eq!(result.confidence, 88.0);
        assert_eq!(result.suspicion_level, SuspicionLevel::Low);
    }
}
