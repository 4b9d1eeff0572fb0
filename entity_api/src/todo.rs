use super::error::{not_found, Error};
use entity::todos::{ActiveModel, Column, Entity, Model, TodoUpdate};
use entity::Id;
use log::*;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    DatabaseConnection, IntoActiveModel, QueryOrder,
};

/// Stores a new item exactly as given. The caller assigns `todo_id`.
pub async fn create(db: &DatabaseConnection, model: Model) -> Result<Model, Error> {
    debug!(
        "Creating todo {} for user_id: {}",
        model.todo_id, model.user_id
    );

    Ok(model.into_active_model().insert(db).await?)
}

/// All items owned by `user_id`, oldest first.
pub async fn find_by_user_id(db: &DatabaseConnection, user_id: &str) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}

/// Looks an item up by its id alone, regardless of owner.
pub async fn find_by_id(db: &DatabaseConnection, todo_id: Id) -> Result<Model, Error> {
    Entity::find()
        .filter(Column::TodoId.eq(todo_id))
        .one(db)
        .await?
        .ok_or_else(not_found)
}

pub async fn find_by_user_and_id(
    db: &DatabaseConnection,
    user_id: &str,
    todo_id: Id,
) -> Result<Model, Error> {
    Entity::find_by_id((user_id.to_owned(), todo_id))
        .one(db)
        .await?
        .ok_or_else(not_found)
}

/// Overwrites `name`, `due_date` and `done` and returns the stored values.
pub async fn update(
    db: &DatabaseConnection,
    todo_id: Id,
    user_id: &str,
    todo_update: TodoUpdate,
) -> Result<TodoUpdate, Error> {
    let existing = find_by_user_and_id(db, user_id, todo_id).await?;

    debug!("Updating todo {todo_id} for user_id: {user_id}");

    let active_model = ActiveModel {
        user_id: Unchanged(existing.user_id),
        todo_id: Unchanged(existing.todo_id),
        created_at: Unchanged(existing.created_at),
        name: Set(todo_update.name),
        description: Unchanged(existing.description),
        due_date: Set(todo_update.due_date),
        done: Set(todo_update.done),
        attachment_url: Unchanged(existing.attachment_url),
    };

    Ok(active_model.update(db).await?.into())
}

pub async fn update_attachment_url(
    db: &DatabaseConnection,
    todo_id: Id,
    user_id: &str,
    attachment_url: String,
) -> Result<Model, Error> {
    let existing = find_by_user_and_id(db, user_id, todo_id).await?;

    debug!("Setting attachment url of todo {todo_id}: {attachment_url}");

    let mut active_model = existing.into_active_model();
    active_model.attachment_url = Set(Some(attachment_url));

    Ok(active_model.update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, todo_id: Id, user_id: &str) -> Result<(), Error> {
    let result = Entity::delete_by_id((user_id.to_owned(), todo_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(not_found());
    }

    debug!("Deleted todo {todo_id} for user_id: {user_id}");
    Ok(())
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::error::EntityApiErrorKind;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    const USER_ID: &str = "auth0|123";

    fn test_model() -> Model {
        Model {
            user_id: USER_ID.to_string(),
            todo_id: Id::new_v4(),
            created_at: chrono::Utc::now().into(),
            name: "Buy milk".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            done: false,
            attachment_url: None,
        }
    }

    #[tokio::test]
    async fn create_returns_the_stored_todo() -> Result<(), Error> {
        let model = test_model();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let created = create(&db, model.clone()).await?;

        assert_eq!(created, model);
        Ok(())
    }

    #[tokio::test]
    async fn find_by_user_id_filters_by_owner_and_orders_by_creation() -> Result<(), Error> {
        let first = test_model();
        let second = test_model();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first.clone(), second.clone()]])
            .into_connection();

        let todos = find_by_user_id(&db, USER_ID).await?;

        assert_eq!(todos, vec![first, second]);
        let log = db.into_transaction_log();
        let sql = &log[0].statements()[0].sql;
        assert!(sql.contains(r#"FROM "todo_platform"."todos""#));
        assert!(sql.contains(r#"ORDER BY "todos"."created_at" ASC"#));
        Ok(())
    }

    #[tokio::test]
    async fn find_by_user_and_id_returns_not_found_for_other_owners() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results::<Model, Vec<Model>, _>(vec![vec![]])
            .into_connection();

        let result = find_by_user_and_id(&db, "auth0|someone-else", Id::new_v4()).await;

        assert_eq!(result.unwrap_err().error_kind, EntityApiErrorKind::RecordNotFound);
    }

    #[tokio::test]
    async fn find_by_id_returns_the_todo() -> Result<(), Error> {
        let model = test_model();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        assert_eq!(find_by_id(&db, model.todo_id).await?, model);
        Ok(())
    }

    #[tokio::test]
    async fn update_returns_the_new_values() -> Result<(), Error> {
        let model = test_model();
        let todo_update = TodoUpdate {
            name: "Buy oat milk".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            done: true,
        };
        let updated = Model {
            name: todo_update.name.clone(),
            due_date: todo_update.due_date,
            done: true,
            ..model.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // First query: find_by_user_and_id
            .append_query_results(vec![vec![model.clone()]])
            // Second query: update result
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let result = update(&db, model.todo_id, USER_ID, todo_update.clone()).await?;

        assert_eq!(result, todo_update);
        Ok(())
    }

    #[tokio::test]
    async fn update_returns_not_found_for_missing_todo() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results::<Model, Vec<Model>, _>(vec![vec![]])
            .into_connection();

        let result = update(
            &db,
            Id::new_v4(),
            USER_ID,
            TodoUpdate {
                name: "x".to_string(),
                due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                done: false,
            },
        )
        .await;

        assert_eq!(result.unwrap_err().error_kind, EntityApiErrorKind::RecordNotFound);
    }

    #[tokio::test]
    async fn update_attachment_url_sets_the_url() -> Result<(), Error> {
        let model = test_model();
        let url = format!("https://todos.s3.amazonaws.com/{}", model.todo_id);
        let updated = Model {
            attachment_url: Some(url.clone()),
            ..model.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let result = update_attachment_url(&db, model.todo_id, USER_ID, url.clone()).await?;

        assert_eq!(result.attachment_url, Some(url));
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_an_existing_todo() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        delete(&db, Id::new_v4(), USER_ID).await
    }

    #[tokio::test]
    async fn delete_returns_not_found_when_nothing_was_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = delete(&db, Id::new_v4(), USER_ID).await;

        assert_eq!(result.unwrap_err().error_kind, EntityApiErrorKind::RecordNotFound);
    }
}
