use crate::{
    state::AppStateV2,
    structs::medications::{Medication, NewMedication, UpdateMedication},
};
use sqlx::Error;

pub async fn get_medications_by_patient(
    state: &AppStateV2,
    patient_id: i32,
) -> Result<Vec<Medication>, Error> {
    sqlx::query_as(
        r#"
            SELECT * FROM medications
            WHERE patient_id = $1
            ORDER BY start_date DESC;
        "#,
    )
    .bind(patient_id)
    .fetch_all(state.get_pool())
    .await
}

pub async fn get_medication_by_id(
    state: &AppStateV2,
    id: i32,
) -> Result<Option<Medication>, Error> {
    sqlx::query_as("SELECT * FROM medications WHERE id = $1")
        .bind(id)
        .fetch_optional(state.get_pool())
        .await
}

pub async fn create_medication(
    state: &AppStateV2,
    new_medication: &NewMedication,
) -> Result<Medication, Error> {
    sqlx::query_as(
        r#"
            INSERT INTO medications (
                patient_id, prescribed_by, medication_name, dosage,
                frequency, start_date, end_date, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *;
        "#,
    )
    .bind(new_medication.patient_id)
    .bind(&new_medication.prescribed_by)
    .bind(&new_medication.medication_name)
    .bind(&new_medication.dosage)
    .bind(&new_medication.frequency)
    .bind(new_medication.start_date)
    .bind(new_medication.end_date)
    .bind(&new_medication.notes)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_medication(
    state: &AppStateV2,
    id: i32,
    update: &UpdateMedication,
) -> Result<Option<Medication>, Error> {
    sqlx::query_as(
        r#"
            UPDATE medications SET
                prescribed_by = COALESCE($2, prescribed_by),
                medication_name = COALESCE($3, medication_name),
                dosage = COALESCE($4, dosage),
                frequency = COALESCE($5, frequency),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                notes = COALESCE($8, notes),
                updated_at = now()
            WHERE id = $1
            RETURNING *;
        "#,
    )
    .bind(id)
    .bind(&update.prescribed_by)
    .bind(&update.medication_name)
    .bind(&update.dosage)
    .bind(&update.frequency)
    .bind(update.start_date)
    .bind(update.end_date)
    .bind(&update.notes)
    .fetch_optional(state.get_pool())
    .await
}

pub async fn delete_medication(state: &AppStateV2, id: i32) -> Result<bool, Error> {
    let result = sqlx::query("DELETE FROM medications WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(result.rows_affected() > 0)
}
