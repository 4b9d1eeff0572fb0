//! SeaORM Entity for the `todos` table.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single to-do item. Items are keyed by their owner and their own id;
/// `todo_id` is also unique on its own.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = entity::todos::Model)]
#[sea_orm(schema_name = "todo_platform", table_name = "todos")]
pub struct Model {
    /// The identity provider's subject for the owner.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    #[schema(value_type = String, format = Uuid)]
    pub todo_id: Id,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schema(value_type = String, format = Date)]
    pub due_date: Date,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The fields a client may change on an existing item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = entity::todos::TodoUpdate)]
pub struct TodoUpdate {
    pub name: String,
    #[schema(value_type = String, format = Date)]
    pub due_date: Date,
    pub done: bool,
}

impl From<Model> for TodoUpdate {
    fn from(model: Model) -> Self {
        Self {
            name: model.name,
            due_date: model.due_date,
            done: model.done,
        }
    }
}
