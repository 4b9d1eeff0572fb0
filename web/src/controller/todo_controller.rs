use crate::extractors::{authenticated_user::AuthenticatedUser, todo_id::TodoId};
use crate::params::todo::CreateParams;
use crate::response::{Empty, Item, Items};
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::todo as TodoApi;
use domain::todos::TodoUpdate;

use log::*;

/// GET all todos of the caller, oldest first
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "Successfully retrieved all todos of the caller", body = [entity::todos::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal Server Error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn index(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all todos for user {user_id}");

    let todos = TodoApi::find_by_user(app_state.db_conn_ref(), &user_id).await?;

    Ok(Json(Items { items: todos }))
}

/// POST create a new todo owned by the caller
#[utoipa::path(
    post,
    path = "/todos",
    request_body = crate::params::todo::CreateParams,
    responses(
        (status = 201, description = "Successfully created a new todo", body = entity::todos::Model),
        (status = 400, description = "Invalid todo name"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal Server Error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(app_state): State<AppState>,
    Json(params): Json<CreateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST create a new todo from: {params:?}");

    let todo = TodoApi::create(
        app_state.db_conn_ref(),
        &app_state.attachments,
        &user_id,
        params.into(),
    )
    .await?;

    debug!("New todo: {todo:?}");

    Ok((StatusCode::CREATED, Json(Item { item: todo })))
}

/// PATCH the name, due date and completion of a todo
#[utoipa::path(
    patch,
    path = "/todos/{todo_id}",
    params(
        ("todo_id" = String, Path, description = "Id of the todo to update")
    ),
    request_body = entity::todos::TodoUpdate,
    responses(
        (status = 200, description = "Successfully updated the todo"),
        (status = 400, description = "Invalid todoId param or todo name"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Todo not found"),
        (status = 500, description = "Internal Server Error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update(
    AuthenticatedUser(user_id): AuthenticatedUser,
    TodoId(todo_id): TodoId,
    State(app_state): State<AppState>,
    Json(todo_update): Json<TodoUpdate>,
) -> Result<impl IntoResponse, Error> {
    debug!("PATCH todo {todo_id} with: {todo_update:?}");

    let updated = TodoApi::update(app_state.db_conn_ref(), todo_id, &user_id, todo_update).await?;

    debug!("Updated todo {todo_id}: {updated:?}");

    Ok(Json(Empty::default()))
}

/// DELETE a todo and its attachment
#[utoipa::path(
    delete,
    path = "/todos/{todo_id}",
    params(
        ("todo_id" = String, Path, description = "Id of the todo to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted the todo"),
        (status = 400, description = "Invalid todoId param"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Todo not found"),
        (status = 500, description = "Internal Server Error")
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
    debug!("DELETE todo {todo_id}");

    TodoApi::delete(
        app_state.db_conn_ref(),
        &app_state.attachments,
        todo_id,
        &user_id,
    )
    .await?;

    Ok(Json(Empty::default()))
}
