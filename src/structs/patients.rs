use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const PATIENT_STATUSES: [&str; 3] = ["active", "inactive", "discharged"];

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i32,
    pub mrn: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub medical_condition: Option<String>,
    pub assigned_doctor_id: Option<i32>,
    pub status: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub diseases: Option<Vec<String>>,
    pub assigned_nurses: Option<Vec<String>>,
    pub initial_deposit: Option<Decimal>,
    pub room_type: Option<String>,
    pub room_number: Option<i32>,
    pub admission_date: Option<NaiveDate>,
    pub current_medications: Option<Vec<String>>,
    pub last_assessment_date: Option<NaiveDate>,
    pub discharge_status: Option<String>,
    pub discharge_notes: Option<String>,
    pub final_bill_amount: Option<Decimal>,
    pub discharge_date: Option<NaiveDate>,
    pub discharged_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub medical_condition: Option<String>,
    pub assigned_doctor_id: Option<i32>,
    pub status: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub diseases: Option<Vec<String>>,
    pub assigned_nurses: Option<Vec<String>>,
    pub initial_deposit: Option<Decimal>,
    pub room_type: Option<String>,
    pub room_number: Option<i32>,
    pub admission_date: Option<NaiveDate>,
    pub current_medications: Option<Vec<String>>,
    pub last_assessment_date: Option<NaiveDate>,
    pub discharge_status: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub medical_condition: Option<String>,
    pub assigned_doctor_id: Option<i32>,
    pub status: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub diseases: Option<Vec<String>>,
    pub assigned_nurses: Option<Vec<String>>,
    pub initial_deposit: Option<Decimal>,
    pub room_type: Option<String>,
    pub room_number: Option<i32>,
    pub admission_date: Option<NaiveDate>,
    pub current_medications: Option<Vec<String>>,
    pub last_assessment_date: Option<NaiveDate>,
    pub discharge_status: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DischargePatient {
    pub discharge_notes: Option<String>,
    pub final_bill_amount: Option<Decimal>,
    pub discharged_by: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientQuery {
    pub status: Option<String>,
    pub doctor_id: Option<i32>,
}
