use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 每日照護分配，(staff_id, patient_id, date) 為唯一鍵
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StaffAssignment {
    pub id: i32,
    pub staff_id: i32,
    pub patient_id: i32,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 主治醫師與病患的永久綁定，不參與每日輪替
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPatientAssignment {
    pub id: i32,
    pub doctor_id: i32,
    pub patient_id: i32,
    pub assigned_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct GenerateAssignmentsRequest {
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDoctorRequest {
    pub doctor_id: Option<i32>,
    pub patient_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}
