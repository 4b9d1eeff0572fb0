use crate::error::{DomainErrorKind, Error, ExternalErrorKind};
use crate::gateway::s3::{strip_query, AttachmentStore};
use crate::todos::{Model, TodoUpdate};
use crate::Id;
use chrono::{NaiveDate, Utc};
use entity_api::todo;
use log::*;
use sea_orm::DatabaseConnection;

pub const INVALID_TODO_NAME: &str = "Invalid todo name";

/// Client-supplied fields of a new item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
}

fn validate_name(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::invalid(INVALID_TODO_NAME));
    }
    Ok(())
}

pub async fn find_by_user(db: &DatabaseConnection, user_id: &str) -> Result<Vec<Model>, Error> {
    info!("Getting todos for user {user_id}");
    Ok(todo::find_by_user_id(db, user_id).await?)
}

/// Creates an item owned by `user_id`. The id, creation time and the
/// attachment's public URL are assigned here; `done` starts out false.
pub async fn create(
    db: &DatabaseConnection,
    attachments: &AttachmentStore,
    user_id: &str,
    new_todo: NewTodo,
) -> Result<Model, Error> {
    validate_name(&new_todo.name)?;

    let todo_id = Id::new_v4();
    info!("Creating todo {todo_id} for user {user_id}");

    let model = Model {
        user_id: user_id.to_string(),
        todo_id,
        created_at: Utc::now().into(),
        name: new_todo.name,
        description: new_todo.description,
        due_date: new_todo.due_date,
        done: false,
        attachment_url: Some(attachments.public_url(todo_id)),
    };

    Ok(todo::create(db, model).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    todo_id: Id,
    user_id: &str,
    todo_update: TodoUpdate,
) -> Result<TodoUpdate, Error> {
    validate_name(&todo_update.name)?;

    info!("Updating todo {todo_id} for user {user_id}");
    Ok(todo::update(db, todo_id, user_id, todo_update).await?)
}

/// Deletes the item, then its attachment object if there is one. A failure
/// to remove the attachment is logged and does not fail the delete.
pub async fn delete(
    db: &DatabaseConnection,
    attachments: &AttachmentStore,
    todo_id: Id,
    user_id: &str,
) -> Result<(), Error> {
    info!("Deleting todo {todo_id} for user {user_id}");
    todo::delete(db, todo_id, user_id).await?;

    match attachments.delete(todo_id).await {
        Ok(()) => {}
        Err(e) if e.error_kind == DomainErrorKind::External(ExternalErrorKind::NotFound) => {
            debug!("Todo {todo_id} had no attachment");
        }
        Err(e) => warn!("Failed to delete attachment of todo {todo_id}: {e}"),
    }
    Ok(())
}

/// Returns a presigned upload URL for the item's attachment and records the
/// attachment's URL (the upload URL without its signature) on the item.
pub async fn create_upload_url(
    db: &DatabaseConnection,
    attachments: &AttachmentStore,
    todo_id: Id,
    user_id: &str,
) -> Result<String, Error> {
    todo::find_by_user_and_id(db, user_id, todo_id).await?;

    let upload_url = attachments.upload_url(todo_id)?;
    todo::update_attachment_url(db, todo_id, user_id, strip_query(&upload_url)).await?;

    info!("Created upload url for todo {todo_id}");
    Ok(upload_url)
}

pub async fn download_url(
    db: &DatabaseConnection,
    attachments: &AttachmentStore,
    todo_id: Id,
    user_id: &str,
) -> Result<String, Error> {
    todo::find_by_user_and_id(db, user_id, todo_id).await?;
    attachments.download_url(todo_id)
}

pub async fn delete_attachment(
    db: &DatabaseConnection,
    attachments: &AttachmentStore,
    todo_id: Id,
    user_id: &str,
) -> Result<(), Error> {
    todo::find_by_user_and_id(db, user_id, todo_id).await?;

    info!("Deleting attachment of todo {todo_id}");
    attachments.delete(todo_id).await
}
