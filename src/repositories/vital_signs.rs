use crate::{
    state::AppStateV2,
    structs::vital_signs::{NewVitalSign, UpdateVitalSign, VitalSign},
};
use chrono::NaiveDate;
use sqlx::Error;

pub async fn get_vital_signs_by_patient(
    state: &AppStateV2,
    patient_id: i32,
    date: Option<NaiveDate>,
) -> Result<Vec<VitalSign>, Error> {
    match date {
        Some(date) => {
            sqlx::query_as(
                r#"
                    SELECT * FROM vital_signs
                    WHERE patient_id = $1 AND date = $2
                    ORDER BY time DESC;
                "#,
            )
            .bind(patient_id)
            .bind(date)
            .fetch_all(state.get_pool())
            .await
        }
        None => {
            sqlx::query_as(
                r#"
                    SELECT * FROM vital_signs
                    WHERE patient_id = $1
                    ORDER BY date DESC, time DESC;
                "#,
            )
            .bind(patient_id)
            .fetch_all(state.get_pool())
            .await
        }
    }
}

pub async fn get_vital_sign_by_id(state: &AppStateV2, id: i32) -> Result<Option<VitalSign>, Error> {
    sqlx::query_as("SELECT * FROM vital_signs WHERE id = $1")
        .bind(id)
        .fetch_optional(state.get_pool())
        .await
}

pub async fn create_vital_sign(
    state: &AppStateV2,
    new_vital_sign: &NewVitalSign,
) -> Result<VitalSign, Error> {
    sqlx::query_as(
        r#"
            INSERT INTO vital_signs (
                patient_id, date, time, blood_pressure, heart_rate, temperature,
                oxygen_saturation, respiratory_rate, notes, recorded_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *;
        "#,
    )
    .bind(new_vital_sign.patient_id)
    .bind(new_vital_sign.date)
    .bind(&new_vital_sign.time)
    .bind(&new_vital_sign.blood_pressure)
    .bind(&new_vital_sign.heart_rate)
    .bind(&new_vital_sign.temperature)
    .bind(&new_vital_sign.oxygen_saturation)
    .bind(&new_vital_sign.respiratory_rate)
    .bind(&new_vital_sign.notes)
    .bind(&new_vital_sign.recorded_by)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_vital_sign(
    state: &AppStateV2,
    id: i32,
    update: &UpdateVitalSign,
) -> Result<Option<VitalSign>, Error> {
    sqlx::query_as(
        r#"
            UPDATE vital_signs SET
                date = COALESCE($2, date),
                time = COALESCE($3, time),
                blood_pressure = COALESCE($4, blood_pressure),
                heart_rate = COALESCE($5, heart_rate),
                temperature = COALESCE($6, temperature),
                oxygen_saturation = COALESCE($7, oxygen_saturation),
                respiratory_rate = COALESCE($8, respiratory_rate),
                notes = COALESCE($9, notes),
                updated_at = now()
            WHERE id = $1
            RETURNING *;
        "#,
    )
    .bind(id)
    .bind(update.date)
    .bind(&update.time)
    .bind(&update.blood_pressure)
    .bind(&update.heart_rate)
    .bind(&update.temperature)
    .bind(&update.oxygen_saturation)
    .bind(&update.respiratory_rate)
    .bind(&update.notes)
    .fetch_optional(state.get_pool())
    .await
}

pub async fn delete_vital_sign(state: &AppStateV2, id: i32) -> Result<bool, Error> {
    let result = sqlx::query("DELETE FROM vital_signs WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(result.rows_affected() > 0)
}
