pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::job_descriptions::handlers as jd_handlers;
use crate::optimization::handlers as opt_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

/// Headroom on top of the file limit for multipart framing.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless optimization
        .route("/api/v1/optimize", post(opt_handlers::handle_optimize))
        .route("/api/v1/keywords", get(opt_handlers::handle_vocabulary))
        .route(
            "/api/v1/keywords/extract",
            post(opt_handlers::handle_extract_keywords),
        )
        // Resumes
        .route(
            "/api/v1/resumes",
            get(resume_handlers::handle_list).post(resume_handlers::handle_create),
        )
        .route(
            "/api/v1/resumes/upload",
            post(resume_handlers::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get)
                .patch(resume_handlers::handle_update)
                .delete(resume_handlers::handle_delete),
        )
        .route(
            "/api/v1/resumes/:id/optimize",
            post(resume_handlers::handle_optimize_resume),
        )
        .route(
            "/api/v1/resumes/:id/export",
            get(resume_handlers::handle_export),
        )
        // Job descriptions
        .route(
            "/api/v1/job-descriptions",
            get(jd_handlers::handle_list).post(jd_handlers::handle_create),
        )
        .route(
            "/api/v1/job-descriptions/:id",
            get(jd_handlers::handle_get)
                .patch(jd_handlers::handle_update)
                .delete(jd_handlers::handle_delete),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::optimization::defaults::JOB_POSTING_VOCABULARY;
    use crate::optimization::engine::Optimizer;
    use crate::optimization::vocabulary::Vocabulary;
    use crate::storage::InMemoryStore;

    const BOUNDARY: &str = "tuner-test-boundary";

    fn test_state() -> AppState {
        let store = Arc::new(InMemoryStore::new());
        AppState {
            config: Config::default(),
            optimizer: Arc::new(Optimizer::default_profile().unwrap()),
            job_vocabulary: Arc::new(Vocabulary::from_static(JOB_POSTING_VOCABULARY)),
            resumes: store.clone(),
            job_descriptions: store,
        }
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn upload_request(file_name: &str, content_type: &str, contents: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {contents}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["vocabulary_size"], 44);
        assert_eq!(body["storage"], "memory");
    }

    #[tokio::test]
    async fn test_optimize_reference_scenario() {
        let app = build_router(test_state());
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/optimize",
                json!({
                    "resume_text": "React, Node.js",
                    "job_description": "React, TypeScript, Testing, Agile"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["atsScore"], 40);
        assert_eq!(body["rawScore"], 25);
        assert_eq!(body["matchingKeywords"], json!(["React"]));
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_optimize_rejects_blank_job_description() {
        let app = build_router(test_state());
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/optimize",
                json!({"resume_text": "React", "job_description": "   "}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_extract_keywords() {
        let app = build_router(test_state());
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/keywords/extract",
                json!({"text": "docker and KUBERNETES"}),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["keywords"], json!(["Docker", "Kubernetes"]));
    }

    #[tokio::test]
    async fn test_vocabulary_listing() {
        let app = build_router(test_state());
        let response = app.oneshot(get_request("/api/v1/keywords")).await.unwrap();
        let body = body_json(response).await;
        let keywords = body["keywords"].as_array().unwrap();
        assert_eq!(keywords.len(), 44);
        assert_eq!(keywords[0], "JavaScript");
    }

    #[tokio::test]
    async fn test_unknown_resume_is_404() {
        let app = build_router(test_state());
        let uri = format!("/api/v1/resumes/{}", uuid::Uuid::new_v4());
        let response = app.oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_stored_resume_optimize_and_export() {
        let app = build_router(test_state());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/resumes",
                json!({
                    "original_text": "JavaScript developer\n• Built web applications",
                    "file_name": "cv.txt"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let resume_id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/job-descriptions",
                json!({"text": "Senior TypeScript engineer. Must have React/Jest"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let jd = body_json(response).await;
        assert_eq!(jd["keywords"], json!(["TypeScript", "React", "Jest"]));
        assert_eq!(jd["required_skills"], json!(["React", "Jest"]));
        let jd_id = jd["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/resumes/{resume_id}/optimize"),
                json!({"job_description_id": jd_id}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let optimized = body["result"]["optimizedText"].as_str().unwrap().to_string();
        assert!(optimized.contains("JavaScript/TypeScript"));
        assert!(optimized.contains("responsive web applications"));
        assert_eq!(body["resume"]["optimized_text"], optimized.as_str());
        assert_eq!(body["resume"]["ats_score"], body["result"]["atsScore"]);

        let response = app
            .oneshot(get_request(&format!("/api/v1/resumes/{resume_id}/export")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"optimized_resume_"));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(String::from_utf8(bytes.to_vec()).unwrap(), optimized);
    }

    #[tokio::test]
    async fn test_optimize_resume_requires_job_description() {
        let app = build_router(test_state());
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/resumes",
                json!({"original_text": "React"}),
            ))
            .await
            .unwrap();
        let resume_id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/resumes/{resume_id}/optimize"),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_plain_text() {
        let app = build_router(test_state());
        let response = app
            .oneshot(upload_request("cv.txt", "text/plain", "Jane Doe\r\nReact, Docker"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["original_text"], "Jane Doe\nReact, Docker");
        assert_eq!(body["file_name"], "cv.txt");
        assert_eq!(body["ats_score"], 0);
    }

    #[tokio::test]
    async fn test_upload_docx_unsupported() {
        let app = build_router(test_state());
        let response = app
            .oneshot(upload_request(
                "cv.docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "PK...",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_upload_too_large() {
        let mut state = test_state();
        state.config.max_upload_bytes = 8;
        let app = build_router(state);
        let response = app
            .oneshot(upload_request("cv.txt", "text/plain", "this is more than eight bytes"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_job_description_blank_text_rejected_on_update() {
        let app = build_router(test_state());
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/job-descriptions",
                json!({"text": "Docker role"}),
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();
        let uri = format!("/api/v1/job-descriptions/{id}");

        let response = app
            .clone()
            .oneshot(json_request("PATCH", &uri, json!({"text": "   "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(app.oneshot(get_request(&uri)).await.unwrap()).await;
        assert_eq!(body["keywords"], json!(["Docker"]));
    }

    #[tokio::test]
    async fn test_job_description_update_and_delete() {
        let app = build_router(test_state());
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/job-descriptions",
                json!({"text": "Vue role"}),
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();
        let uri = format!("/api/v1/job-descriptions/{id}");

        let response = app
            .clone()
            .oneshot(json_request("PATCH", &uri, json!({"text": "Angular and Docker role"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["keywords"], json!(["Angular", "Docker"]));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(&uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
