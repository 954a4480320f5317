use crate::error::ApiError;
use api_shared::{ErrorRes, HealthRes, HealthService, NotePageRes, NoteReq, NoteRes, NoteSummaryRes};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use notes_core::{parse_tag_filter, NoteError, NoteService, PageRequest, Tag, WordStatistics};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteService,
    pub default_page_size: u32,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        version = "1.0",
        description = "REST API for managing user notes"
    ),
    paths(
        health,
        create_note,
        list_notes,
        get_note,
        get_note_statistics,
        update_note,
        delete_note,
    ),
    components(schemas(
        HealthRes,
        NoteReq,
        NoteRes,
        NoteSummaryRes,
        NotePageRes,
        ErrorRes,
        Tag,
    ))
)]
pub struct ApiDoc;

/// Query parameters of the note listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNotesQuery {
    /// Zero-based page number (default 0)
    page: Option<u32>,
    /// Page size (server default when omitted)
    size: Option<u32>,
    /// Comma-separated tag names, e.g. `personal,business`. If any name is unknown the whole
    /// filter is ignored.
    tags: Option<String>,
}

/// Builds the REST router, including Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/api/notes/:id/statistics", get(get_note_statistics))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Malformed JSON, missing fields and unknown tag labels are all client errors.
fn json_body(payload: Result<Json<NoteReq>, JsonRejection>) -> Result<NoteReq, ApiError> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| ApiError(NoteError::InvalidInput(rejection.body_text())))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = NoteReq,
    responses(
        (status = 201, description = "Note created", body = NoteRes),
        (status = 400, description = "Blank title or text, or malformed body", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NoteReq>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteRes>), ApiError> {
    let req = json_body(payload)?;
    let note = state.notes.create_note(req.into())?;
    Ok((StatusCode::CREATED, Json(note.into())))
}

#[utoipa::path(
    get,
    path = "/api/notes",
    params(ListNotesQuery),
    responses(
        (status = 200, description = "One page of notes, newest first", body = NotePageRes),
        (status = 400, description = "Invalid page size", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<ListNotesQuery>,
) -> Result<Json<NotePageRes>, ApiError> {
    let request = PageRequest::new(
        query.page.unwrap_or(0),
        query.size.unwrap_or(state.default_page_size),
    )?;
    let tags = parse_tag_filter(query.tags.as_deref());

    let page = state.notes.list_notes(request, &tags)?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note found", body = NoteRes),
        (status = 404, description = "No note with this id")
    )
)]
#[axum::debug_handler]
async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteRes>, ApiError> {
    let detail = state.notes.get_note(&id)?;
    Ok(Json(detail.into()))
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}/statistics",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Word counts ordered by count descending", body = HashMap<String, u64>),
        (status = 404, description = "No note with this id")
    )
)]
#[axum::debug_handler]
async fn get_note_statistics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WordStatistics>, ApiError> {
    Ok(Json(state.notes.word_statistics(&id)?))
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(("id" = String, Path, description = "Note id")),
    request_body = NoteReq,
    responses(
        (status = 200, description = "Note replaced", body = NoteRes),
        (status = 400, description = "Blank title or text, or malformed body", body = ErrorRes),
        (status = 404, description = "No note with this id")
    )
)]
#[axum::debug_handler]
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NoteReq>, JsonRejection>,
) -> Result<Json<NoteRes>, ApiError> {
    let req = json_body(payload)?;
    let note = state.notes.update_note(&id, req.into())?;
    Ok(Json(note.into()))
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted"),
        (status = 404, description = "No note with this id")
    )
)]
#[axum::debug_handler]
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.notes.delete_note(&id)?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use axum::response::Response;
    use notes_core::{MemoryNoteStore, NoteStore};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup() -> (Arc<MemoryNoteStore>, Router) {
        let store = Arc::new(MemoryNoteStore::new());
        let state = AppState {
            notes: NoteService::new(store.clone()),
            default_page_size: 10,
        };
        (store, router(state))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        app.clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .expect("router should respond")
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(app: &Router, title: &str, text: &str, tags: Value) -> Value {
        let response = send(
            app,
            Method::POST,
            "/api/notes",
            Some(json!({"title": title, "text": text, "tags": tags})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_health() {
        let (_store, app) = setup();
        let response = send(&app, Method::GET, "/health", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["ok"], true);
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (_store, app) = setup();
        let created = create(&app, "My first note", "Hello there", json!(["PERSONAL"])).await;

        assert_eq!(created["title"], "My first note");
        assert_eq!(created["tags"], json!(["PERSONAL"]));
        let id = created["id"].as_str().unwrap().to_string();

        let response = send(&app, Method::GET, &format!("/api/notes/{}", id), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_without_tags_defaults_to_empty() {
        let (_store, app) = setup();
        let response = send(
            &app,
            Method::POST,
            "/api/notes",
            Some(json!({"title": "t", "text": "x"})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["tags"], json!([]));
    }

    #[tokio::test]
    async fn test_create_blank_title_is_bad_request() {
        let (store, app) = setup();
        let response = send(
            &app,
            Method::POST,
            "/api/notes",
            Some(json!({"title": "   ", "text": "x"})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"]
            .as_str()
            .unwrap()
            .contains("Title"));
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_create_unknown_tag_is_bad_request() {
        let (_store, app) = setup();
        let response = send(
            &app,
            Method::POST,
            "/api/notes",
            Some(json!({"title": "t", "text": "x", "tags": ["HOLIDAY"]})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let (store, app) = setup();
        store.set_simulate_write_error(true);

        let response = send(
            &app,
            Method::POST,
            "/api/notes",
            Some(json!({"title": "t", "text": "x"})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Internal error");
    }

    #[tokio::test]
    async fn test_list_shape_and_paging() {
        let (store, app) = setup();
        for i in 0..3 {
            create(&app, &format!("note {}", i), "text", json!([])).await;
        }
        // Backdate one note so it is last regardless of clock resolution.
        let mut oldest = store
            .page(PageRequest::new(0, 10).unwrap())
            .unwrap()
            .content
            .into_iter()
            .find(|n| n.title.as_str() == "note 1")
            .unwrap();
        oldest.created_date = oldest.created_date - chrono::Duration::minutes(5);
        store.save(oldest).unwrap();

        let response = send(&app, Method::GET, "/api/notes?page=1&size=2", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let page = body_json(response).await;

        assert_eq!(page["page"], 1);
        assert_eq!(page["size"], 2);
        assert_eq!(page["totalElements"], 3);
        assert_eq!(page["totalPages"], 2);
        assert_eq!(page["content"].as_array().unwrap().len(), 1);
        assert_eq!(page["content"][0]["title"], "note 1");
        assert!(page["content"][0].get("text").is_none());
    }

    #[tokio::test]
    async fn test_list_defaults_and_rejects_zero_size() {
        let (_store, app) = setup();

        let page = body_json(send(&app, Method::GET, "/api/notes", None).await).await;
        assert_eq!(page["page"], 0);
        assert_eq!(page["size"], 10);
        assert_eq!(page["totalElements"], 0);

        let response = send(&app, Method::GET, "/api/notes?size=0", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_filters_by_tags_and_falls_back_on_unknown() {
        let (_store, app) = setup();
        create(&app, "personal", "x", json!(["PERSONAL"])).await;
        create(&app, "business", "x", json!(["BUSINESS"])).await;
        create(&app, "none", "x", json!([])).await;

        let filtered =
            body_json(send(&app, Method::GET, "/api/notes?tags=personal,%20important", None).await)
                .await;
        assert_eq!(filtered["totalElements"], 1);
        assert_eq!(filtered["content"][0]["title"], "personal");

        let fallback =
            body_json(send(&app, Method::GET, "/api/notes?tags=personal,holiday", None).await)
                .await;
        assert_eq!(fallback["totalElements"], 3);
    }

    #[tokio::test]
    async fn test_update_replaces_note() {
        let (_store, app) = setup();
        let created = create(&app, "old", "old text", json!(["PERSONAL"])).await;
        let id = created["id"].as_str().unwrap();

        let response = send(
            &app,
            Method::PUT,
            &format!("/api/notes/{}", id),
            Some(json!({"title": "new", "text": "new text"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;

        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["createdDate"], created["createdDate"]);
        assert_eq!(updated["title"], "new");
        assert_eq!(updated["tags"], json!([]));
    }

    #[tokio::test]
    async fn test_missing_note_is_not_found_everywhere() {
        let (store, app) = setup();
        let missing = "550e8400e29b41d4a716446655440000";

        for (method, uri, body) in [
            (Method::GET, format!("/api/notes/{}", missing), None),
            (Method::GET, format!("/api/notes/{}/statistics", missing), None),
            (
                Method::PUT,
                format!("/api/notes/{}", missing),
                Some(json!({"title": "t", "text": "x"})),
            ),
            (Method::DELETE, format!("/api/notes/{}", missing), None),
            (Method::GET, "/api/notes/not-an-id".to_string(), None),
        ] {
            let response = send(&app, method.clone(), &uri, body).await;
            assert_eq!(
                response.status(),
                StatusCode::NOT_FOUND,
                "{} {} should be 404",
                method,
                uri
            );
        }
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (_store, app) = setup();
        let created = create(&app, "t", "x", json!([])).await;
        let uri = format!("/api/notes/{}", created["id"].as_str().unwrap());

        let response = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());

        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_statistics_ordered_and_empty_is_ok() {
        let (_store, app) = setup();
        let created = create(&app, "t", "a note is just a note", json!([])).await;
        let uri = format!("/api/notes/{}/statistics", created["id"].as_str().unwrap());

        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"a":2,"note":2,"is":1,"just":1}"#
        );

        let punctuation = create(&app, "t", "?!", json!([])).await;
        let uri = format!("/api/notes/{}/statistics", punctuation["id"].as_str().unwrap());
        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({}));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (_store, app) = setup();
        let response = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        assert_eq!(doc["info"]["title"], "Notes API");
        assert!(doc["paths"].get("/api/notes/{id}/statistics").is_some());
    }
}
