use std::any::Any;

use axum::{
    extract::{rejection::JsonRejection, State},
    handler::HandlerWithoutStateExt,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::audio::STATIC_URL_PREFIX;
use crate::error::{internal_server_error, not_found, ApiError};
use crate::gateway::{EMPTY_BATCH_MESSAGE, EMPTY_TEXT_MESSAGE};
use crate::state::AppState;

/// Full application: routes, fallback and middleware
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(state.clone()))
        .fallback(page_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub fn create_routes(state: AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // Main page
        .route_service("/", ServeFile::new(&system_config.index_page))

        // Health check
        .route("/api/health", get(health_check))

        // Translation API
        .route("/api/translate", post(translate_text))
        .route("/api/translate-batch", post(translate_batch))
        .route("/api/voice-translate", post(voice_translate))

        // Generated audio
        .nest_service(
            STATIC_URL_PREFIX,
            ServeDir::new(&system_config.static_dir)
                .not_found_service(page_not_found.into_service()),
        )
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn translate_text(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let payload = json_object(payload)?;
    let text = text_field(&payload)?;

    let result = state
        .gateway
        .translate_single(&text)
        .await
        .map_err(|e| ApiError::from_gateway(e, "Translation failed"))?;

    Ok(Json(json!({
        "success": true,
        "english": result.translation.english,
        "kannada": result.translation.kannada,
        "audio_url": result.audio.url()
    })))
}

async fn translate_batch(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let payload = json_object(payload)?;
    let texts = texts_field(&payload)?;

    let translations = state
        .gateway
        .translate_batch(&texts)
        .await
        .map_err(|e| ApiError::from_gateway(e, "Batch translation failed"))?;

    Ok(Json(json!({
        "success": true,
        "translations": translations
    })))
}

async fn voice_translate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let payload = json_object(payload)?;
    let text = text_field(&payload)?;

    let result = state
        .gateway
        .translate_with_voice(&text)
        .await
        .map_err(|e| ApiError::from_gateway(e, "Voice translation failed"))?;

    Ok(Json(json!({
        "success": true,
        "english": result.translation.english,
        "kannada": result.translation.kannada,
        "english_audio_url": result.english_audio.url(),
        "kannada_audio_url": result.kannada_audio.url()
    })))
}

async fn page_not_found() -> Response {
    not_found()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Unhandled error in request handler: {}", detail);
    internal_server_error()
}

fn json_object(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match payload {
        Ok(Json(value)) if value.is_object() => Ok(value),
        Ok(_) => Err(ApiError::bad_request("Request body must be a JSON object")),
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection);
            Err(ApiError::bad_request(format!("Invalid JSON body: {}", rejection.body_text())))
        }
    }
}

/// `text` as a string; missing or null counts as empty
fn text_field(payload: &Value) -> Result<String, ApiError> {
    match payload.get("text") {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ApiError::bad_request(EMPTY_TEXT_MESSAGE)),
    }
}

fn texts_field(payload: &Value) -> Result<Vec<String>, ApiError> {
    let entries = payload
        .get("texts")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ApiError::bad_request(EMPTY_BATCH_MESSAGE))?;

    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| ApiError::bad_request("Each entry in texts must be a string"))
        })
        .collect()
}
