use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// time 欄位保留 HH:MM:SS 字串，與前端輸入格式一致
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VitalSign {
    pub id: i32,
    pub patient_id: i32,
    pub date: NaiveDate,
    pub time: String,
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
    pub oxygen_saturation: Option<String>,
    pub respiratory_rate: Option<String>,
    pub notes: Option<String>,
    pub recorded_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVitalSign {
    pub patient_id: i32,
    pub date: NaiveDate,
    pub time: String,
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
    pub oxygen_saturation: Option<String>,
    pub respiratory_rate: Option<String>,
    pub notes: Option<String>,
    pub recorded_by: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVitalSign {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub blood_pressure: Option<String>,
    pub heart_rate: Option<String>,
    pub temperature: Option<String>,
    pub oxygen_saturation: Option<String>,
    pub respiratory_rate: Option<String>,
    pub notes: Option<String>,
}
