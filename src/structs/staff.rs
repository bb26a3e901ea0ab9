use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STAFF_ROLES: [&str; 4] = ["nurse", "caretaker", "therapist", "doctor"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub is_on_duty: bool,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Staff {
    pub fn is_doctor(&self) -> bool {
        self.role == "doctor"
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStaff {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub is_on_duty: Option<bool>,
    pub photo_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaff {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_on_duty: Option<bool>,
    pub photo_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffQuery {
    pub role: Option<String>,
    pub on_duty: Option<bool>,
}
