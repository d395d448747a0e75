//! `/counters` route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use tally_core::hal::{CollectionModel, EntityModel};
use tally_core::Counter;

use crate::app_state::AppState;
use crate::service::DecreaseOutcome;

use super::{ApiError, Hal};

type ApiResult<T> = std::result::Result<T, ApiError>;

/// `GET /counters`
pub async fn list_counters(
    State(state): State<AppState>,
) -> ApiResult<Hal<CollectionModel<EntityModel<Counter>>>> {
    let all = state.service().list_all().await?;
    Ok(Hal(state.presenter().to_collection(all)))
}

/// `POST /counters`. Plain JSON echo of the stored value, no links.
pub async fn create_counter(
    State(state): State<AppState>,
    Json(counter): Json<Counter>,
) -> ApiResult<Json<Counter>> {
    let saved = state.service().create(counter).await?;
    Ok(Json(saved))
}

/// `GET /counters/:name`
pub async fn get_counter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Hal<EntityModel<Counter>>> {
    let counter = state.service().get_by_name(&name).await?;
    Ok(Hal(state.presenter().to_model(counter)))
}

/// `PUT /counters/:name`: increment by one.
pub async fn increase_counter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    state.service().increase(&name).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /counters/:name`: decrement by one, removing the counter at zero.
pub async fn decrease_counter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    if state.service().decrease_or_delete(&name).await? == DecreaseOutcome::Deleted {
        state.metrics().counters_deleted.inc(&[]);
    }
    Ok(StatusCode::OK)
}
