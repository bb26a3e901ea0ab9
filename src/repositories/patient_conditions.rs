use crate::{
    state::AppStateV2,
    structs::patient_conditions::{NewPatientCondition, PatientCondition, UpdatePatientCondition},
};
use sqlx::Error;

pub async fn get_conditions_by_patient(
    state: &AppStateV2,
    patient_id: i32,
) -> Result<Vec<PatientCondition>, Error> {
    sqlx::query_as(
        r#"
            SELECT * FROM patient_conditions
            WHERE patient_id = $1
            ORDER BY date DESC;
        "#,
    )
    .bind(patient_id)
    .fetch_all(state.get_pool())
    .await
}

pub async fn get_condition_by_id(
    state: &AppStateV2,
    id: i32,
) -> Result<Option<PatientCondition>, Error> {
    sqlx::query_as("SELECT * FROM patient_conditions WHERE id = $1")
        .bind(id)
        .fetch_optional(state.get_pool())
        .await
}

pub async fn create_condition(
    state: &AppStateV2,
    new_condition: &NewPatientCondition,
) -> Result<PatientCondition, Error> {
    sqlx::query_as(
        r#"
            INSERT INTO patient_conditions (
                patient_id, assessed_by, date, condition, notes,
                medications, vitals, discharge_recommendation, discharge_notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *;
        "#,
    )
    .bind(new_condition.patient_id)
    .bind(&new_condition.assessed_by)
    .bind(new_condition.date)
    .bind(&new_condition.condition)
    .bind(&new_condition.notes)
    .bind(&new_condition.medications)
    .bind(&new_condition.vitals)
    .bind(
        new_condition
            .discharge_recommendation
            .as_deref()
            .unwrap_or("continue"),
    )
    .bind(&new_condition.discharge_notes)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_condition(
    state: &AppStateV2,
    id: i32,
    update: &UpdatePatientCondition,
) -> Result<Option<PatientCondition>, Error> {
    sqlx::query_as(
        r#"
            UPDATE patient_conditions SET
                condition = COALESCE($2, condition),
                notes = COALESCE($3, notes),
                medications = COALESCE($4, medications),
                vitals = COALESCE($5, vitals),
                discharge_recommendation = COALESCE($6, discharge_recommendation),
                discharge_notes = COALESCE($7, discharge_notes),
                updated_at = now()
            WHERE id = $1
            RETURNING *;
        "#,
    )
    .bind(id)
    .bind(&update.condition)
    .bind(&update.notes)
    .bind(&update.medications)
    .bind(&update.vitals)
    .bind(&update.discharge_recommendation)
    .bind(&update.discharge_notes)
    .fetch_optional(state.get_pool())
    .await
}

pub async fn delete_condition(state: &AppStateV2, id: i32) -> Result<bool, Error> {
    let result = sqlx::query("DELETE FROM patient_conditions WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(result.rows_affected() > 0)
}
