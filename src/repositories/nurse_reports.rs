use crate::{
    state::AppStateV2,
    structs::nurse_reports::{NewNurseReport, NurseReport, UpdateNurseReport},
};
use sqlx::Error;

pub async fn get_nurse_reports_by_patient(
    state: &AppStateV2,
    patient_id: i32,
) -> Result<Vec<NurseReport>, Error> {
    sqlx::query_as(
        r#"
            SELECT * FROM nurse_reports
            WHERE patient_id = $1
            ORDER BY date DESC, time DESC;
        "#,
    )
    .bind(patient_id)
    .fetch_all(state.get_pool())
    .await
}

pub async fn get_nurse_report_by_id(
    state: &AppStateV2,
    id: i32,
) -> Result<Option<NurseReport>, Error> {
    sqlx::query_as("SELECT * FROM nurse_reports WHERE id = $1")
        .bind(id)
        .fetch_optional(state.get_pool())
        .await
}

pub async fn create_nurse_report(
    state: &AppStateV2,
    new_report: &NewNurseReport,
) -> Result<NurseReport, Error> {
    sqlx::query_as(
        r#"
            INSERT INTO nurse_reports (
                patient_id, reported_by, date, time, condition_update,
                symptoms, pain_level, notes, urgency
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *;
        "#,
    )
    .bind(new_report.patient_id)
    .bind(&new_report.reported_by)
    .bind(new_report.date)
    .bind(&new_report.time)
    .bind(&new_report.condition_update)
    .bind(&new_report.symptoms)
    .bind(new_report.pain_level)
    .bind(&new_report.notes)
    .bind(&new_report.urgency)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_nurse_report(
    state: &AppStateV2,
    id: i32,
    update: &UpdateNurseReport,
) -> Result<Option<NurseReport>, Error> {
    sqlx::query_as(
        r#"
            UPDATE nurse_reports SET
                condition_update = COALESCE($2, condition_update),
                symptoms = COALESCE($3, symptoms),
                pain_level = COALESCE($4, pain_level),
                notes = COALESCE($5, notes),
                urgency = COALESCE($6, urgency),
                updated_at = now()
            WHERE id = $1
            RETURNING *;
        "#,
    )
    .bind(id)
    .bind(&update.condition_update)
    .bind(&update.symptoms)
    .bind(update.pain_level)
    .bind(&update.notes)
    .bind(&update.urgency)
    .fetch_optional(state.get_pool())
    .await
}

pub async fn delete_nurse_report(state: &AppStateV2, id: i32) -> Result<bool, Error> {
    let result = sqlx::query("DELETE FROM nurse_reports WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(result.rows_affected() > 0)
}
