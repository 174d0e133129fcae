use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::AppState;
use crate::directory::{Directory, DirectoryError};

#[derive(Debug, Deserialize)]
pub(crate) struct EmailQuery {
    email: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct DetailBody {
    detail: String,
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("Field required: email")]
    MissingEmail,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Directory(DirectoryError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Directory(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = DetailBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub(crate) async fn list_activities(State(state): State<AppState>) -> Json<Directory> {
    let snapshot = state.directory().clone();
    Json(snapshot)
}

pub(crate) async fn sign_up(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageBody>, ApiError> {
    let email = query.email.ok_or(ApiError::MissingEmail)?;
    let result = state.directory().sign_up(&activity_name, &email);
    if let Err(e) = result {
        warn!("Signup of {:?} for {:?} rejected: {}", email, activity_name, e);
        return Err(e.into());
    }
    info!("Signed up {} for {}", email, activity_name);
    Ok(Json(MessageBody {
        message: format!("Signed up {email} for {activity_name}"),
    }))
}

pub(crate) async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageBody>, ApiError> {
    let email = query.email.ok_or(ApiError::MissingEmail)?;
    let result = state.directory().unregister(&activity_name, &email);
    if let Err(e) = result {
        warn!("Unregister of {:?} from {:?} rejected: {}", email, activity_name, e);
        return Err(e.into());
    }
    info!("Unregistered {} from {}", email, activity_name);
    Ok(Json(MessageBody {
        message: format!("Unregistered {email} from {activity_name}"),
    }))
}
