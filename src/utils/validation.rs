use crate::{
    errors::RequestError,
    structs::{
        patients::{NewPatient, PATIENT_STATUSES},
        staff::STAFF_ROLES,
    },
};
use regex::Regex;
use rust_decimal::Decimal;

const PHONE_PATTERN: &str = r"^(\+92|0)?[0-9]{3}-?[0-9]{7}$|^(\+92|0)?[0-9]{10}$";

/// 手機格式檢查，+92 或 0 開頭皆可，空白忽略
pub fn validate_phone(phone: &str) -> Result<(), RequestError> {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let re = Regex::new(PHONE_PATTERN).expect("phone pattern is valid");

    if re.is_match(&compact) {
        Ok(())
    } else {
        Err(RequestError::Validation(
            "Please enter a valid phone number (e.g., +92-300-1234567 or 0300-1234567)"
                .to_string(),
        ))
    }
}

pub fn validate_staff_role(role: &str) -> Result<(), RequestError> {
    if STAFF_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(RequestError::Validation(format!(
            "Role must be one of: {}",
            STAFF_ROLES.join(", ")
        )))
    }
}

pub fn validate_patient_status(status: &str) -> Result<(), RequestError> {
    if PATIENT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(RequestError::Validation(format!(
            "Status must be one of: {}",
            PATIENT_STATUSES.join(", ")
        )))
    }
}

pub fn validate_new_patient(new_patient: &NewPatient) -> Result<(), RequestError> {
    validate_phone(&new_patient.phone)?;

    if let Some(status) = &new_patient.status {
        validate_patient_status(status)?;
    }

    if let Some(diseases) = &new_patient.diseases {
        if diseases.is_empty() {
            return Err(RequestError::Validation(
                "At least one disease must be selected".to_string(),
            ));
        }
    }

    // 照護規則：固定雙護理師
    if let Some(assigned_nurses) = &new_patient.assigned_nurses {
        if assigned_nurses.len() != 2 {
            return Err(RequestError::Validation(
                "Exactly 2 nurses must be assigned to each patient".to_string(),
            ));
        }
    }

    if let Some(initial_deposit) = new_patient.initial_deposit {
        if initial_deposit <= Decimal::ZERO {
            return Err(RequestError::Validation(
                "Initial deposit must be greater than 0".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_patient() -> NewPatient {
        NewPatient {
            name: "Test Patient".to_string(),
            email: "patient@example.com".to_string(),
            phone: "0300-1234567".to_string(),
            date_of_birth: None,
            medical_condition: None,
            assigned_doctor_id: None,
            status: None,
            age: Some(42),
            gender: Some("female".to_string()),
            address: None,
            emergency_contact: None,
            diseases: None,
            assigned_nurses: None,
            initial_deposit: None,
            room_type: None,
            room_number: None,
            admission_date: None,
            current_medications: None,
            last_assessment_date: None,
            discharge_status: None,
        }
    }

    #[test]
    fn phone_accepts_local_and_international_formats() {
        assert!(validate_phone("0300-1234567").is_ok());
        assert!(validate_phone("+92-300-1234567").is_err()); // 多一個 dash
        assert!(validate_phone("+923001234567").is_ok());
        assert!(validate_phone("0300 1234567").is_ok());
    }

    #[test]
    fn phone_rejects_garbage() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("abc-defghij").is_err());
    }

    #[test]
    fn staff_role_must_be_known() {
        assert!(validate_staff_role("nurse").is_ok());
        assert!(validate_staff_role("doctor").is_ok());
        assert!(validate_staff_role("janitor").is_err());
    }

    #[test]
    fn patient_requires_exactly_two_nurses_when_given() {
        let mut patient = base_patient();
        patient.assigned_nurses = Some(vec!["n1".to_string()]);
        assert!(validate_new_patient(&patient).is_err());

        patient.assigned_nurses = Some(vec!["n1".to_string(), "n2".to_string()]);
        assert!(validate_new_patient(&patient).is_ok());
    }

    #[test]
    fn patient_deposit_must_be_positive() {
        let mut patient = base_patient();
        patient.initial_deposit = Some(Decimal::ZERO);
        assert!(validate_new_patient(&patient).is_err());

        patient.initial_deposit = Some(Decimal::new(5000, 0));
        assert!(validate_new_patient(&patient).is_ok());
    }

    #[test]
    fn patient_diseases_cannot_be_empty_list() {
        let mut patient = base_patient();
        patient.diseases = Some(Vec::new());
        assert!(validate_new_patient(&patient).is_err());
    }
}
