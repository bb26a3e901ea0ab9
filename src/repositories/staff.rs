use crate::{
    state::AppStateV2,
    structs::staff::{NewStaff, Staff, UpdateStaff},
};
use sqlx::{Error, QueryBuilder};

pub async fn get_all_staff(state: &AppStateV2) -> Result<Vec<Staff>, Error> {
    sqlx::query_as("SELECT * FROM staff ORDER BY created_at DESC")
        .fetch_all(state.get_pool())
        .await
}

pub async fn get_staff_by_role(state: &AppStateV2, role: &str) -> Result<Vec<Staff>, Error> {
    sqlx::query_as("SELECT * FROM staff WHERE role = $1 ORDER BY name")
        .bind(role)
        .fetch_all(state.get_pool())
        .await
}

pub async fn get_on_duty_staff(state: &AppStateV2) -> Result<Vec<Staff>, Error> {
    sqlx::query_as("SELECT * FROM staff WHERE is_on_duty = TRUE ORDER BY name")
        .fetch_all(state.get_pool())
        .await
}

pub async fn get_staff_by_id(state: &AppStateV2, id: i32) -> Result<Option<Staff>, Error> {
    sqlx::query_as("SELECT * FROM staff WHERE id = $1")
        .bind(id)
        .fetch_optional(state.get_pool())
        .await
}

pub async fn get_staff_by_email(state: &AppStateV2, email: &str) -> Result<Option<Staff>, Error> {
    sqlx::query_as("SELECT * FROM staff WHERE LOWER(email) = LOWER($1)")
        .bind(email)
        .fetch_optional(state.get_pool())
        .await
}

pub async fn create_staff(state: &AppStateV2, new_staff: &NewStaff) -> Result<Staff, Error> {
    sqlx::query_as(
        r#"
            INSERT INTO staff (name, role, email, phone, is_on_duty, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *;
        "#,
    )
    .bind(&new_staff.name)
    .bind(&new_staff.role)
    .bind(new_staff.email.to_lowercase())
    .bind(&new_staff.phone)
    .bind(new_staff.is_on_duty.unwrap_or(true))
    .bind(&new_staff.photo_url)
    .fetch_one(state.get_pool())
    .await
}

// 只更新有帶值的欄位
pub async fn update_staff(
    state: &AppStateV2,
    id: i32,
    update: &UpdateStaff,
) -> Result<Option<Staff>, Error> {
    let mut query_builder = QueryBuilder::new("UPDATE staff SET updated_at = now()");

    if let Some(name) = &update.name {
        query_builder.push(", name = ").push_bind(name);
    }
    if let Some(role) = &update.role {
        query_builder.push(", role = ").push_bind(role);
    }
    if let Some(email) = &update.email {
        query_builder
            .push(", email = ")
            .push_bind(email.to_lowercase());
    }
    if let Some(phone) = &update.phone {
        query_builder.push(", phone = ").push_bind(phone);
    }
    if let Some(is_on_duty) = update.is_on_duty {
        query_builder.push(", is_on_duty = ").push_bind(is_on_duty);
    }
    if let Some(photo_url) = &update.photo_url {
        query_builder.push(", photo_url = ").push_bind(photo_url);
    }

    query_builder.push(" WHERE id = ").push_bind(id);
    query_builder.build().execute(state.get_pool()).await?;

    get_staff_by_id(state, id).await
}

pub async fn delete_staff(state: &AppStateV2, id: i32) -> Result<bool, Error> {
    let result = sqlx::query("DELETE FROM staff WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(result.rows_affected() > 0)
}
