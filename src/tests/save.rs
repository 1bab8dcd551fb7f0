#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{HeaderMap, Request},
    };
    use reqwest::Url;
    use serde_json::{Value, json};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    use crate::{
        common::app_state::AppState,
        tests::{TestResponse, offline_state, send, setup_logging, test_config},
    };

    fn full_payload() -> Value {
        json!({
            "playerName": "mina",
            "category": "fruits",
            "totalTimeMs": 53210,
            "perQuestionTimes": [4100, 5230, 3900],
            "perQuestionCorrect": [true, false, true],
            "questionWords": ["apple", "pear", "kiwi"],
            "questionShown": ["_pple", "_ear", "_iwi"],
            "correctCount": 2,
            "wrongCount": 1,
            "accuracy": 0.6667
        })
    }

    fn scoring_state(server: &MockServer) -> Arc<AppState> {
        let endpoint = format!("{}/exec", server.uri());
        AppState::from_config(&test_config("http://127.0.0.1:1", None, Some(endpoint)))
    }

    async fn mount_scoring(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/exec"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    async fn request(state: Arc<AppState>, verb: &str, body: impl Into<Body>) -> TestResponse {
        let request = Request::builder()
            .method(verb)
            .uri("/api/save")
            .header("content-type", "application/json")
            .body(body.into())
            .expect("Failed to build request");

        send(state, request).await
    }

    fn assert_cors(headers: &HeaderMap) {
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    }

    #[tokio::test]
    async fn preflight_is_empty_with_cors_headers() {
        let response = request(offline_state(), "OPTIONS", Body::empty()).await;
        assert_eq!(response.status, 200);
        assert!(response.body.is_empty());
        assert_cors(&response.headers);
    }

    #[tokio::test]
    async fn other_methods_are_rejected() {
        for verb in ["GET", "PUT", "DELETE"] {
            let response = request(offline_state(), verb, Body::empty()).await;
            assert_eq!(response.status, 405);
            assert_eq!(response.json()["error"], "METHOD_NOT_ALLOWED");
            assert_cors(&response.headers);
        }
    }

    #[tokio::test]
    async fn missing_endpoint_is_reported_before_parsing() {
        let response = request(offline_state(), "POST", "not json").await;
        assert_eq!(response.status, 500);
        assert_eq!(response.json()["error"], "GS_ENDPOINT_MISSING");
        assert_cors(&response.headers);
    }

    #[tokio::test]
    async fn unparsable_body_is_rejected() {
        let server = MockServer::start().await;
        let response = request(scoring_state(&server), "POST", "{ playerName: ").await;
        assert_eq!(response.status, 400);

        let body = response.json();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "BAD_JSON_BODY");
        assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));
        assert_eq!(server.received_requests().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn missing_accuracy_is_rejected() {
        let server = MockServer::start().await;
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("accuracy");

        let response = request(scoring_state(&server), "POST", payload.to_string()).await;
        assert_eq!(response.status, 400);
        assert_eq!(response.json()["error"], "MISSING_accuracy");
        assert_eq!(server.received_requests().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn first_missing_field_is_reported() {
        let server = MockServer::start().await;
        let response = request(scoring_state(&server), "POST", "{}").await;
        assert_eq!(response.json()["error"], "MISSING_playerName");

        let response = request(scoring_state(&server), "POST", "[1, 2]").await;
        assert_eq!(response.status, 400);
        assert_eq!(response.json()["error"], "MISSING_playerName");
    }

    #[tokio::test]
    async fn null_fields_count_as_present() {
        let server = MockServer::start().await;
        mount_scoring(&server, ResponseTemplate::new(200).set_body_string("ok")).await;

        let mut payload = full_payload();
        payload["accuracy"] = Value::Null;
        let response = request(scoring_state(&server), "POST", payload.to_string()).await;
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn valid_payload_is_forwarded_as_a_single_form_field() {
        setup_logging();
        let server = MockServer::start().await;
        mount_scoring(
            &server,
            ResponseTemplate::new(200).set_body_string(r#"{"result":"saved"}"#),
        )
        .await;

        let payload = full_payload();
        let response = request(scoring_state(&server), "POST", payload.to_string()).await;
        assert_eq!(response.status, 200);
        assert_cors(&response.headers);

        let body = response.json();
        assert_eq!(body["ok"], true);
        assert_eq!(body["gsStatus"], 200);
        assert_eq!(body["gsRaw"], r#"{"result":"saved"}"#);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);

        let form = String::from_utf8(requests[0].body.clone()).unwrap();
        let parsed = Url::parse(&format!("http://form.test/?{}", form)).unwrap();
        let fields: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "payload");

        let forwarded: Value = serde_json::from_str(&fields[0].1).unwrap();
        assert_eq!(forwarded, payload);
    }

    #[tokio::test]
    async fn scoring_failure_status_is_relayed() {
        let server = MockServer::start().await;
        mount_scoring(&server, ResponseTemplate::new(502).set_body_string("bad gateway")).await;

        let response = request(scoring_state(&server), "POST", full_payload().to_string()).await;
        assert_eq!(response.status, 200);

        let body = response.json();
        assert_eq!(body["ok"], true);
        assert_eq!(body["gsStatus"], 502);
        assert_eq!(body["gsRaw"], "bad gateway");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_internal_error() {
        let state = AppState::from_config(&test_config(
            "http://127.0.0.1:1",
            None,
            Some("http://127.0.0.1:1/exec".into()),
        ));

        let response = request(state, "POST", full_payload().to_string()).await;
        assert_eq!(response.status, 500);

        let body = response.json();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "SAVE_HANDLER_ERROR");
        assert!(body["detail"].is_string());
        assert_cors(&response.headers);
    }
}
