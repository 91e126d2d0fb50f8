use sqlx::SqliteConnection;

use crate::db_types::User;

/// Returns the user with the given id, if any.
pub async fn fetch_user_by_id(user_id: &str, conn: &mut SqliteConnection) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as("SELECT * FROM users WHERE id = $1").bind(user_id).fetch_optional(conn).await?;
    Ok(user)
}

/// Inserts the user, or updates the email and name if the id already exists.
pub async fn upsert_user(user: User, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
            INSERT INTO users (id, email, name, created_at) VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET email = excluded.email, name = excluded.name;
        "#,
    )
    .bind(user.id)
    .bind(user.email)
    .bind(user.name)
    .bind(user.created_at)
    .execute(conn)
    .await?;
    Ok(())
}
