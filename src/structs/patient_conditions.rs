use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PatientCondition {
    pub id: i32,
    pub patient_id: i32,
    pub assessed_by: String,
    pub date: NaiveDate,
    pub condition: String,
    pub notes: Option<String>,
    pub medications: Option<Vec<String>>,
    /// 評估當下的生命徵象快照，原樣保存
    pub vitals: Option<serde_json::Value>,
    pub discharge_recommendation: String,
    pub discharge_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatientCondition {
    pub patient_id: i32,
    pub assessed_by: String,
    pub date: NaiveDate,
    pub condition: String,
    pub notes: Option<String>,
    pub medications: Option<Vec<String>>,
    pub vitals: Option<serde_json::Value>,
    pub discharge_recommendation: Option<String>,
    pub discharge_notes: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientCondition {
    pub condition: Option<String>,
    pub notes: Option<String>,
    pub medications: Option<Vec<String>>,
    pub vitals: Option<serde_json::Value>,
    pub discharge_recommendation: Option<String>,
    pub discharge_notes: Option<String>,
}
