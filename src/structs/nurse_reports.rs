use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NurseReport {
    pub id: i32,
    pub patient_id: i32,
    pub reported_by: String,
    pub date: NaiveDate,
    pub time: String,
    pub condition_update: String,
    pub symptoms: Option<Vec<String>>,
    pub pain_level: Option<i32>,
    pub notes: Option<String>,
    pub urgency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNurseReport {
    pub patient_id: i32,
    pub reported_by: String,
    pub date: NaiveDate,
    pub time: String,
    pub condition_update: String,
    pub symptoms: Option<Vec<String>>,
    pub pain_level: Option<i32>,
    pub notes: Option<String>,
    pub urgency: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNurseReport {
    pub condition_update: Option<String>,
    pub symptoms: Option<Vec<String>>,
    pub pain_level: Option<i32>,
    pub notes: Option<String>,
    pub urgency: Option<String>,
}
