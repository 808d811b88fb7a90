use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::contact::ContactRow;
use crate::models::profile::Profile;
use crate::models::project::ProjectRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// POST /api/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactRow>), AppError> {
    let Json(request) = body?;
    validate_contact(&request)?;

    let row: ContactRow = sqlx::query_as(
        "INSERT INTO contacts (name, email, message) VALUES ($1, $2, $3) \
         RETURNING id, name, email, message, created_at",
    )
    .bind(request.name.trim())
    .bind(request.email.trim())
    .bind(request.message.trim())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

fn validate_contact(request: &ContactRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("'name' must not be empty".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("'message' must not be empty".to_string()));
    }
    let email = request.email.trim();
    // Deliberately shallow: the store is write-only, so a full RFC check
    // buys nothing.
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation(format!("'{email}' is not a valid email")));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub featured: Option<bool>,
    pub limit: Option<i64>,
}

/// GET /api/projects
pub async fn handle_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectsQuery>,
) -> Result<Json<Vec<ProjectRow>>, AppError> {
    let limit = params.limit.unwrap_or(50).clamp(1, 100);

    let rows: Vec<ProjectRow> = match params.featured {
        Some(featured) => {
            sqlx::query_as(
                "SELECT id, title, description, technologies, created_at, featured \
                 FROM projects WHERE featured = $1 ORDER BY created_at DESC LIMIT $2",
            )
            .bind(featured)
            .bind(limit)
            .fetch_all(&state.db)
            .await?
        }
        None => {
            sqlx::query_as(
                "SELECT id, title, description, technologies, created_at, featured \
                 FROM projects ORDER BY created_at DESC LIMIT $1",
            )
            .bind(limit)
            .fetch_all(&state.db)
            .await?
        }
    };

    Ok(Json(rows))
}

/// POST /api/visits
///
/// Increments the singleton counter row atomically in the database, so
/// concurrent requests never lose an increment (a read-then-write sequence
/// here would have a race window).
pub async fn handle_visits(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let count: i64 = sqlx::query_scalar(
        "INSERT INTO api_visits (id, count) VALUES (1, 1) \
         ON CONFLICT (id) DO UPDATE SET count = api_visits.count + 1 \
         RETURNING count",
    )
    .fetch_one(&state.db)
    .await?;

    Ok(Json(json!({ "count": count })))
}

/// GET /api/profile
pub async fn handle_profile(State(state): State<AppState>) -> Json<Profile> {
    Json((*state.profile).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_contact_passes() {
        assert!(validate_contact(&contact("Ada", "ada@example.com", "hello")).is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = validate_contact(&contact("  ", "ada@example.com", "hello")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let err = validate_contact(&contact("Ada", "not-an-email", "hello")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn blank_message_is_rejected() {
        let err = validate_contact(&contact("Ada", "ada@example.com", "\n\t")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
