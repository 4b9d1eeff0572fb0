use crate::extractors::{authenticated_user::AuthenticatedUser, todo_id::TodoId};
use crate::response::{Empty, Item, UploadUrl};
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::todo as TodoApi;

use log::*;

/// POST request a presigned URL to upload the todo's attachment image to
#[utoipa::path(
    post,
    path = "/todos/{todo_id}/attachment",
    params(
        ("todo_id" = String, Path, description = "Id of the todo the image belongs to")
    ),
    responses(
        (status = 200, description = "Presigned upload URL, in `uploadUrl`", body = String),
        (status = 400, description = "Invalid todoId param"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Todo not found"),
        (status = 500, description = "Internal Server Error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_upload_url(
    AuthenticatedUser(user_id): AuthenticatedUser,
    TodoId(todo_id): TodoId,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST upload url for todo {todo_id}");

    let upload_url = TodoApi::create_upload_url(
        app_state.db_conn_ref(),
        &app_state.attachments,
        todo_id,
        &user_id,
    )
    .await?;

    Ok(Json(UploadUrl { upload_url }))
}

/// GET a presigned URL to download the todo's attachment image from
#[utoipa::path(
    get,
    path = "/todos/{todo_id}/attachment",
    params(
        ("todo_id" = String, Path, description = "Id of the todo the image belongs to")
    ),
    responses(
        (status = 200, description = "Presigned download URL, in `item`", body = String),
        (status = 400, description = "Invalid todoId param"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Todo not found"),
        (status = 500, description = "Internal Server Error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn read(
    AuthenticatedUser(user_id): AuthenticatedUser,
    TodoId(todo_id): TodoId,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET download url for todo {todo_id}");

    let download_url = TodoApi::download_url(
        app_state.db_conn_ref(),
        &app_state.attachments,
        todo_id,
        &user_id,
    )
    .await?;

    Ok(Json(Item { item: download_url }))
}

/// DELETE the todo's attachment image
#[utoipa::path(
    delete,
    path = "/todos/{todo_id}/attachment",
    params(
        ("todo_id" = String, Path, description = "Id of the todo the image belongs to")
    ),
    responses(
        (status = 200, description = "Successfully deleted the image"),
        (status = 400, description = "Invalid todoId param"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Todo or image not found"),
        (status = 502, description = "Object store unreachable")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete(
    AuthenticatedUser(user_id): AuthenticatedUser,
    TodoId(todo_id): TodoId,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE attachment of todo {todo_id}");

    TodoApi::delete_attachment(
        app_state.db_conn_ref(),
        &app_state.attachments,
        todo_id,
        &user_id,
    )
    .await?;

    Ok(Json(Empty::default()))
}
