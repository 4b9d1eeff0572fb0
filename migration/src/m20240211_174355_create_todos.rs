use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Items are keyed by owner and id. The id alone is also unique so an
        // item can be looked up without knowing its owner.
        let create_table_sql = r#"
            CREATE TABLE IF NOT EXISTS todo_platform.todos (
                user_id VARCHAR(255) NOT NULL,
                todo_id UUID NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

                name TEXT NOT NULL CHECK (name <> ''),
                description TEXT,
                due_date DATE NOT NULL,
                done BOOLEAN NOT NULL DEFAULT FALSE,
                attachment_url TEXT,

                PRIMARY KEY (user_id, todo_id),
                UNIQUE (todo_id)
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_table_sql)
            .await?;

        manager
            .get_connection()
            .execute_unprepared("ALTER TABLE todo_platform.todos OWNER TO todo")
            .await?;

        // Listing an owner's items walks them in creation order
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_todos_user_created_at
                 ON todo_platform.todos(user_id, created_at)",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS todo_platform.idx_todos_user_created_at")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS todo_platform.todos")
            .await?;

        Ok(())
    }
}
