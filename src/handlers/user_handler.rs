//! User resource handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};
use serde::Deserialize;

use crate::constants::HEALTH_MESSAGE;
use crate::errors::ApiError;
use crate::models::User;
use crate::services::UserService;

/// Query parameters for listing users
#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    /// Only return the first user with exactly this username
    pub username: Option<String>,
}

/// List all users, or look one up by username
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("username" = Option<String>, Query, description = "Return at most the first user with this username")
    ),
    responses(
        (status = 200, description = "Users in store-defined order", body = [User])
    )
)]
pub async fn get_users(
    user_service: web::Data<UserService>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse, ApiError> {
    let users: Vec<User> = match query.username.as_deref() {
        Some(username) => user_service
            .find_by_username(username)
            .await?
            .into_iter()
            .collect(),
        None => user_service.find_all_users().await?,
    };

    debug!("Returning {} user(s)", users.len());
    Ok(HttpResponse::Ok().json(users))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| {
            warn!("User not found with id: {}", user_id);
            ApiError::NotFound
        })?;

    Ok(HttpResponse::Ok().json(user))
}

/// Create a user
///
/// Any `id` in the body is ignored; the store assigns one.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = User)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<User>,
) -> Result<HttpResponse, ApiError> {
    let created = user_service.create_user(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Replace a user
///
/// The identifier is always taken from the path; an `id` in the body is overwritten.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
    body: web::Json<User>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    if user_service.find_user_by_id(user_id).await?.is_none() {
        warn!("Update failed: User not found with id: {}", user_id);
        return Err(ApiError::NotFound);
    }

    // The row can vanish between the check and the write; the store reports
    // that as None rather than inserting a new row.
    let updated = user_service
        .update_user(body.into_inner().with_id(user_id))
        .await?
        .ok_or_else(|| {
            warn!("User {} was removed before it could be updated", user_id);
            ApiError::NotFound
        })?;

    info!("Successfully updated user: {}", user_id);
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    if user_service.find_user_by_id(user_id).await?.is_none() {
        warn!("Delete failed: User not found with id: {}", user_id);
        return Err(ApiError::NotFound);
    }

    user_service.delete_user(user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Liveness check; does not touch the store
#[utoipa::path(
    get,
    path = "/users/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(HEALTH_MESSAGE)
}
