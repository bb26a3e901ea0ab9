use crate::{
    state::AppStateV2,
    structs::patients::{DischargePatient, NewPatient, Patient, UpdatePatient},
};
use chrono::NaiveDate;
use sqlx::{Error, QueryBuilder};
use uuid::Uuid;

pub async fn get_all_patients(state: &AppStateV2) -> Result<Vec<Patient>, Error> {
    sqlx::query_as("SELECT * FROM patients ORDER BY created_at DESC")
        .fetch_all(state.get_pool())
        .await
}

pub async fn get_patients_by_status(state: &AppStateV2, status: &str) -> Result<Vec<Patient>, Error> {
    sqlx::query_as("SELECT * FROM patients WHERE status = $1 ORDER BY created_at DESC")
        .bind(status)
        .fetch_all(state.get_pool())
        .await
}

pub async fn get_patients_by_doctor(
    state: &AppStateV2,
    doctor_id: i32,
) -> Result<Vec<Patient>, Error> {
    sqlx::query_as("SELECT * FROM patients WHERE assigned_doctor_id = $1 ORDER BY created_at DESC")
        .bind(doctor_id)
        .fetch_all(state.get_pool())
        .await
}

pub async fn get_patient_by_id(state: &AppStateV2, id: i32) -> Result<Option<Patient>, Error> {
    sqlx::query_as("SELECT * FROM patients WHERE id = $1")
        .bind(id)
        .fetch_optional(state.get_pool())
        .await
}

pub async fn get_patient_by_email(
    state: &AppStateV2,
    email: &str,
) -> Result<Option<Patient>, Error> {
    sqlx::query_as("SELECT * FROM patients WHERE LOWER(email) = LOWER($1)")
        .bind(email)
        .fetch_optional(state.get_pool())
        .await
}

pub async fn create_patient(state: &AppStateV2, new_patient: &NewPatient) -> Result<Patient, Error> {
    sqlx::query_as(
        r#"
            INSERT INTO patients (
                mrn, name, email, phone, date_of_birth, medical_condition,
                assigned_doctor_id, status, age, gender, address, emergency_contact,
                diseases, assigned_nurses, initial_deposit, room_type, room_number,
                admission_date, current_medications, last_assessment_date, discharge_status
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                $13, $14, $15, $16, $17, $18, $19, $20, $21
            )
            RETURNING *;
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_patient.name)
    .bind(new_patient.email.to_lowercase())
    .bind(&new_patient.phone)
    .bind(new_patient.date_of_birth)
    .bind(&new_patient.medical_condition)
    .bind(new_patient.assigned_doctor_id)
    .bind(new_patient.status.as_deref().unwrap_or("active"))
    .bind(new_patient.age)
    .bind(&new_patient.gender)
    .bind(&new_patient.address)
    .bind(&new_patient.emergency_contact)
    .bind(&new_patient.diseases)
    .bind(&new_patient.assigned_nurses)
    .bind(new_patient.initial_deposit)
    .bind(&new_patient.room_type)
    .bind(new_patient.room_number)
    .bind(new_patient.admission_date)
    .bind(&new_patient.current_medications)
    .bind(new_patient.last_assessment_date)
    .bind(&new_patient.discharge_status)
    .fetch_one(state.get_pool())
    .await
}

// 只更新有帶值的欄位
pub async fn update_patient(
    state: &AppStateV2,
    id: i32,
    update: &UpdatePatient,
) -> Result<Option<Patient>, Error> {
    let mut query_builder = QueryBuilder::new("UPDATE patients SET updated_at = now()");

    if let Some(name) = &update.name {
        query_builder.push(", name = ").push_bind(name);
    }
    if let Some(email) = &update.email {
        query_builder
            .push(", email = ")
            .push_bind(email.to_lowercase());
    }
    if let Some(phone) = &update.phone {
        query_builder.push(", phone = ").push_bind(phone);
    }
    if let Some(date_of_birth) = update.date_of_birth {
        query_builder
            .push(", date_of_birth = ")
            .push_bind(date_of_birth);
    }
    if let Some(medical_condition) = &update.medical_condition {
        query_builder
            .push(", medical_condition = ")
            .push_bind(medical_condition);
    }
    if let Some(assigned_doctor_id) = update.assigned_doctor_id {
        query_builder
            .push(", assigned_doctor_id = ")
            .push_bind(assigned_doctor_id);
    }
    if let Some(status) = &update.status {
        query_builder.push(", status = ").push_bind(status);
    }
    if let Some(age) = update.age {
        query_builder.push(", age = ").push_bind(age);
    }
    if let Some(gender) = &update.gender {
        query_builder.push(", gender = ").push_bind(gender);
    }
    if let Some(address) = &update.address {
        query_builder.push(", address = ").push_bind(address);
    }
    if let Some(emergency_contact) = &update.emergency_contact {
        query_builder
            .push(", emergency_contact = ")
            .push_bind(emergency_contact);
    }
    if let Some(diseases) = &update.diseases {
        query_builder.push(", diseases = ").push_bind(diseases);
    }
    if let Some(assigned_nurses) = &update.assigned_nurses {
        query_builder
            .push(", assigned_nurses = ")
            .push_bind(assigned_nurses);
    }
    if let Some(initial_deposit) = update.initial_deposit {
        query_builder
            .push(", initial_deposit = ")
            .push_bind(initial_deposit);
    }
    if let Some(room_type) = &update.room_type {
        query_builder.push(", room_type = ").push_bind(room_type);
    }
    if let Some(room_number) = update.room_number {
        query_builder.push(", room_number = ").push_bind(room_number);
    }
    if let Some(admission_date) = update.admission_date {
        query_builder
            .push(", admission_date = ")
            .push_bind(admission_date);
    }
    if let Some(current_medications) = &update.current_medications {
        query_builder
            .push(", current_medications = ")
            .push_bind(current_medications);
    }
    if let Some(last_assessment_date) = update.last_assessment_date {
        query_builder
            .push(", last_assessment_date = ")
            .push_bind(last_assessment_date);
    }
    if let Some(discharge_status) = &update.discharge_status {
        query_builder
            .push(", discharge_status = ")
            .push_bind(discharge_status);
    }

    query_builder.push(" WHERE id = ").push_bind(id);
    query_builder.build().execute(state.get_pool()).await?;

    get_patient_by_id(state, id).await
}

pub async fn discharge_patient(
    state: &AppStateV2,
    id: i32,
    discharge: &DischargePatient,
    discharge_date: NaiveDate,
) -> Result<Option<Patient>, Error> {
    sqlx::query_as(
        r#"
            UPDATE patients SET
                status = 'discharged',
                discharge_status = 'ready',
                discharge_notes = COALESCE($2, discharge_notes),
                final_bill_amount = COALESCE($3, final_bill_amount),
                discharge_date = $4,
                discharged_by = COALESCE($5, discharged_by),
                updated_at = now()
            WHERE id = $1
            RETURNING *;
        "#,
    )
    .bind(id)
    .bind(&discharge.discharge_notes)
    .bind(discharge.final_bill_amount)
    .bind(discharge_date)
    .bind(&discharge.discharged_by)
    .fetch_optional(state.get_pool())
    .await
}

pub async fn delete_patient(state: &AppStateV2, id: i32) -> Result<bool, Error> {
    let result = sqlx::query("DELETE FROM patients WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(result.rows_affected() > 0)
}
