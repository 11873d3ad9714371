//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    domain::UserId,
    infrastructure::dto::{
        conversion::history_to_dto,
        http::{ConnectionDto, ErrorDto, UsernameDto, UsernameQuery},
    },
    ui::state::AppState,
    usecase::LookupUsernameError,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Chat history, oldest first
pub async fn load_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, (StatusCode, Json<ErrorDto>)> {
    match state.load_history_usecase.execute().await {
        Ok(lines) => Ok(Json(history_to_dto(lines))),
        Err(e) => {
            tracing::warn!("Failed to load history: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto::new(e.to_string())),
            ))
        }
    }
}

/// Resolve the display name of `?userID=<id>`
pub async fn get_username(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<UsernameDto>, (StatusCode, Json<ErrorDto>)> {
    let Some(user_id) = query.user_id.filter(|id| !id.is_empty()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorDto::new("Missing userID parameter")),
        ));
    };

    match state
        .lookup_username_usecase
        .execute(&UserId::new(user_id))
        .await
    {
        Ok(display_name) => Ok(Json(display_name.into())),
        Err(e @ LookupUsernameError::NotFound(_)) => {
            Err((StatusCode::NOT_FOUND, Json(ErrorDto::new(e.to_string()))))
        }
        Err(e @ LookupUsernameError::ProviderUnavailable(_)) => {
            tracing::warn!("Failed to look up username: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto::new(e.to_string())),
            ))
        }
    }
}

/// Debug endpoint listing the registry (for testing purposes)
pub async fn get_connections(State(state): State<Arc<AppState>>) -> Json<Vec<ConnectionDto>> {
    let connections = state.get_connections_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(connections.into_iter().map(ConnectionDto::from).collect())
}
