use chrono::{Days, Utc};
use log::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub use entity::{todos, Id};

pub mod error;
pub mod todo;

/// Inserts a handful of sample items owned by `user_id` for local development.
pub async fn seed_database(db: &DatabaseConnection, user_id: &str) -> Result<(), error::Error> {
    let now = Utc::now();
    let today = now.date_naive();

    let samples = [
        ("Buy milk", Some("Two litres, semi-skimmed"), 1, false),
        ("Book dentist appointment", None, 7, false),
        ("Renew passport", Some("Photos are in the drawer"), 30, false),
        ("Water the plants", None, 0, true),
    ];

    for (name, description, due_in_days, done) in samples {
        let todo = todos::ActiveModel {
            user_id: Set(user_id.to_owned()),
            todo_id: Set(Id::new_v4()),
            created_at: Set(now.into()),
            name: Set(name.to_owned()),
            description: Set(description.map(str::to_owned)),
            due_date: Set(today
                .checked_add_days(Days::new(due_in_days))
                .unwrap_or(today)),
            done: Set(done),
            attachment_url: Set(None),
        }
        .insert(db)
        .await?;

        info!("Seeded todo {} ({})", todo.todo_id, todo.name);
    }

    Ok(())
}
