pub mod api;
pub mod assignments;
pub mod auth;
pub mod jobs;
pub mod medications;
pub mod nurse_reports;
pub mod patient_conditions;
pub mod patients;
pub mod staff;
pub mod users;
pub mod vital_signs;
