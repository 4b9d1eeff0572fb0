use chrono::NaiveDate;
use domain::todo::NewTodo;
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /todos`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = params::todo::CreateParams)]
pub struct CreateParams {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
}

impl From<CreateParams> for NewTodo {
    fn from(params: CreateParams) -> Self {
        NewTodo {
            name: params.name,
            description: params.description,
            due_date: params.due_date,
        }
    }
}
