use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("CREATE SCHEMA IF NOT EXISTS todo_platform;")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("SET search_path TO todo_platform, public;")
            .await?;

        // The application connects as `todo`
        manager
            .get_connection()
            .execute_unprepared(r#"
                DO $$ BEGIN
                    GRANT ALL ON SCHEMA todo_platform TO todo;
                    ALTER DEFAULT PRIVILEGES IN SCHEMA todo_platform GRANT ALL ON TABLES TO todo;
                END $$;
            "#)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(r#"
                DO $$ BEGIN
                    ALTER DEFAULT PRIVILEGES IN SCHEMA todo_platform REVOKE ALL ON TABLES FROM todo;
                    REVOKE ALL ON SCHEMA todo_platform FROM todo;
                END $$;
            "#)
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP SCHEMA IF EXISTS todo_platform CASCADE;")
            .await?;

        Ok(())
    }
}
