use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::models::{NewShow, ShowFields};
use crate::services::{CrudService, ShowCrudService};
use crate::utils::ApiResponse;

const NO_SUCH_SHOW: &str = "No show with this id exists";
const INVALID_ID: &str = "Show id must be an integer";

pub async fn hello_world() -> ApiResponse {
    ApiResponse::data(json!({ "content": "hello world!" }))
}

pub async fn mirror(Path(name): Path<String>) -> ApiResponse {
    ApiResponse::data(json!({ "name": name }))
}

pub async fn get_shows(
    State(show_service): State<Arc<ShowCrudService>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResponse {
    let min_episodes = match params.get("minEpisodes") {
        Some(raw) => match raw.parse::<i64>() {
            Ok(min) => Some(min),
            Err(_) => {
                return ApiResponse::message(
                    StatusCode::BAD_REQUEST,
                    "minEpisodes must be an integer",
                )
            }
        },
        None => None,
    };

    let result = match min_episodes {
        Some(min) => show_service.find_min_episodes(min).await,
        None => show_service.read_many().await,
    };

    match result {
        Ok(shows) => {
            // An empty unfiltered list is still a 200; only a filter that
            // matches nothing answers 404
            if min_episodes.is_some() && shows.is_empty() {
                ApiResponse::message(
                    StatusCode::NOT_FOUND,
                    "No shows with at least this many episodes seen exist",
                )
            } else {
                ApiResponse::data(json!({ "shows": shows }))
            }
        }
        Err(e) => ApiResponse::message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

pub async fn get_show(
    State(show_service): State<Arc<ShowCrudService>>,
    Path(id): Path<String>,
) -> ApiResponse {
    match id.parse::<u64>() {
        Ok(id) => match show_service.read_by_id(id).await {
            Ok(Some(show)) => ApiResponse::data(json!(show)),
            Ok(None) => ApiResponse::message(StatusCode::NOT_FOUND, NO_SUCH_SHOW),
            Err(e) => ApiResponse::message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        },
        Err(_) => ApiResponse::message(StatusCode::BAD_REQUEST, INVALID_ID),
    }
}

pub async fn create_show(
    State(show_service): State<Arc<ShowCrudService>>,
    Json(body): Json<ShowFields>,
) -> ApiResponse {
    // Report missing fields with the combined message first, then name,
    // then episodes_seen
    let fields = match (body.name, body.episodes_seen) {
        (None, None) => {
            return ApiResponse::message(
                StatusCode::UNPROCESSABLE_ENTITY,
                "name and episodes_seen parameter missing",
            )
        }
        (None, Some(_)) => {
            return ApiResponse::message(StatusCode::UNPROCESSABLE_ENTITY, "name parameter missing")
        }
        (Some(_), None) => {
            return ApiResponse::message(
                StatusCode::UNPROCESSABLE_ENTITY,
                "episodes_seen parameter missing",
            )
        }
        (Some(name), Some(episodes_seen)) => NewShow {
            name,
            episodes_seen,
        },
    };

    match show_service.create(fields).await {
        Ok(show) => ApiResponse::with_status(json!(show), StatusCode::CREATED),
        Err(e) => ApiResponse::message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

pub async fn update_show(
    State(show_service): State<Arc<ShowCrudService>>,
    Path(id): Path<String>,
    Json(patch): Json<ShowFields>,
) -> ApiResponse {
    match id.parse::<u64>() {
        Ok(id) => match show_service.update(id, &patch).await {
            Ok(Some(show)) => ApiResponse::data(json!(show)),
            Ok(None) => ApiResponse::message(StatusCode::NOT_FOUND, NO_SUCH_SHOW),
            Err(e) => ApiResponse::message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        },
        Err(_) => ApiResponse::message(StatusCode::BAD_REQUEST, INVALID_ID),
    }
}

pub async fn delete_show(
    State(show_service): State<Arc<ShowCrudService>>,
    Path(id): Path<String>,
) -> ApiResponse {
    match id.parse::<u64>() {
        Ok(id) => match show_service.delete(id).await {
            Ok(true) => ApiResponse::message(StatusCode::OK, "Show deleted"),
            Ok(false) => ApiResponse::message(StatusCode::NOT_FOUND, NO_SUCH_SHOW),
            Err(e) => ApiResponse::message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        },
        Err(_) => ApiResponse::message(StatusCode::BAD_REQUEST, INVALID_ID),
    }
}

// Create API router
pub fn api_router(show_service: Arc<ShowCrudService>) -> Router {
    Router::new()
        .route("/", get(hello_world))
        .route("/mirror/:name", get(mirror))
        .route("/shows", get(get_shows))
        .route("/shows", post(create_show))
        .route("/shows/:id", get(get_show))
        .route("/shows/:id", put(update_show))
        .route("/shows/:id", delete(delete_show))
        .with_state(show_service)
}
