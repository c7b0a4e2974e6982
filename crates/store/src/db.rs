use crate::entities::document;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Creates a database connection from `DATABASE_URL`
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    let url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
    Database::connect(url).await
}

/// Creates the documents table if it does not already exist. The store has a
/// single table, so the schema is derived from the entity instead of carrying
/// a migration crate.
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(document::Entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;

    Ok(())
}
