//! API handlers
//!
//! Each handler runs exactly one statement against the store. Storage
//! failures are logged here and never echoed to the caller.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::AppState;
use crate::types::{User, UserId};

type HandlerError = (StatusCode, String);

/// List all users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, HandlerError> {
    let users = state.store.list().await.map_err(|e| {
        tracing::error!(error = %e, "failed to list users");
        (StatusCode::INTERNAL_SERVER_ERROR, String::new())
    })?;

    Ok(Json(users))
}

/// Create a user and return it with the id assigned by storage
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<User>, HandlerError> {
    let payload = decode_user(&body)?;
    let fields = payload.fields();

    let id = state.store.insert(&fields).await.map_err(|e| {
        tracing::error!(error = %e, "failed to insert user");
        (StatusCode::INTERNAL_SERVER_ERROR, String::new())
    })?;

    tracing::debug!(id, "created user");
    Ok(Json(fields.with_id(id)))
}

/// Fetch a single user
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, HandlerError> {
    let id = parse_id(&id)?;

    match state.store.get(id).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err((StatusCode::NOT_FOUND, String::new())),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to fetch user");
            Err((StatusCode::INTERNAL_SERVER_ERROR, String::new()))
        }
    }
}

/// Overwrite name and email of a user
///
/// Updating an id with no row still answers 200.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<User>, HandlerError> {
    let id = parse_id(&id)?;
    let fields = decode_user(&body)?.fields();

    let touched = state.store.update(id, &fields).await.map_err(|e| {
        tracing::error!(error = %e, id, "failed to update user");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to update user".to_string(),
        )
    })?;

    if touched == 0 {
        tracing::debug!(id, "update matched no rows");
    }

    Ok(Json(fields.with_id(id)))
}

/// Fallback for unknown paths and unregistered methods
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

fn decode_user(body: &[u8]) -> Result<User, HandlerError> {
    User::from_json(body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

fn parse_id(raw: &str) -> Result<UserId, HandlerError> {
    raw.parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, "invalid user id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("abc").unwrap_err().0, StatusCode::BAD_REQUEST);
        assert_eq!(parse_id("").unwrap_err().0, StatusCode::BAD_REQUEST);
        assert_eq!(parse_id("99999999999").unwrap_err().0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_decode_user_reports_decoder_message() {
        let (status, message) = decode_user(b"{not json").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!message.is_empty());

        let user = decode_user(br#"{"id":9,"name":"Alice","email":"a@x.com"}"#).unwrap();
        assert_eq!(user, User::new(9, "Alice", "a@x.com"));
    }
}
