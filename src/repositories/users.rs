use crate::{
    state::AppStateV2,
    structs::users::{DbUser, NewUser, UpdateUser, User},
};
use sqlx::Error;

const USER_COLUMNS: &str = "id, email, first_name, last_name, created_at, updated_at";

pub async fn get_users(state: &AppStateV2) -> Result<Vec<User>, Error> {
    sqlx::query_as(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))
        .fetch_all(state.get_pool())
        .await
}

pub async fn check_email_exists(state: &AppStateV2, email: &str) -> Result<DbUser, Error> {
    sqlx::query_as(
        r#"
            SELECT
                id,
                email,
                password
            FROM
                users
            WHERE
                LOWER(email) = LOWER($1)
            LIMIT
                1;
        "#,
    )
    .bind(email)
    .fetch_one(state.get_pool())
    .await
}

pub async fn get_user_by_id(state: &AppStateV2, id: i32) -> Result<Option<User>, Error> {
    sqlx::query_as(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
        .bind(id)
        .fetch_optional(state.get_pool())
        .await
}

pub async fn create_user(
    state: &AppStateV2,
    new_user: &NewUser,
    password_hash: &str,
) -> Result<User, Error> {
    sqlx::query_as(&format!(
        r#"
            INSERT INTO users (email, password, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            RETURNING {};
        "#,
        USER_COLUMNS
    ))
    .bind(new_user.email.to_lowercase())
    .bind(password_hash)
    .bind(&new_user.first_name)
    .bind(&new_user.last_name)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_user(
    state: &AppStateV2,
    id: i32,
    update: &UpdateUser,
    password_hash: Option<String>,
) -> Result<Option<User>, Error> {
    sqlx::query_as(&format!(
        r#"
            UPDATE users SET
                email = COALESCE($2, email),
                password = COALESCE($3, password),
                first_name = COALESCE($4, first_name),
                last_name = COALESCE($5, last_name),
                updated_at = now()
            WHERE id = $1
            RETURNING {};
        "#,
        USER_COLUMNS
    ))
    .bind(id)
    .bind(update.email.as_ref().map(|email| email.to_lowercase()))
    .bind(password_hash)
    .bind(&update.first_name)
    .bind(&update.last_name)
    .fetch_optional(state.get_pool())
    .await
}

pub async fn delete_user(state: &AppStateV2, id: i32) -> Result<bool, Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(result.rows_affected() > 0)
}
