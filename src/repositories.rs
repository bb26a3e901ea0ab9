pub mod assignments;
pub mod medications;
pub mod nurse_reports;
pub mod patient_conditions;
pub mod patients;
pub mod redis;
pub mod staff;
pub mod users;
pub mod vital_signs;
