//! Local form validation
//!
//! Runs before any request is issued; failures block submission and never
//! touch a cache's error field.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{LoginCredentials, NewDepartment, NewTraining, ProfileUpdate, RegisterData};

/// Per-field validation errors, keyed by the wire field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: &str) {
        self.errors.push((field.to_string(), message.to_string()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

pub fn validate_login(credentials: &LoginCredentials) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if credentials.email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !is_valid_email(&credentials.email) {
        errors.push("email", "Please enter a valid email address");
    }

    if credentials.password.is_empty() {
        errors.push("password", "Password is required");
    }

    errors
}

pub fn validate_registration(data: &RegisterData, confirm_password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if data.emp_no.trim().is_empty() {
        errors.push("empNo", "Employee number is required");
    }

    if data.full_name.trim().is_empty() {
        errors.push("fullName", "Full name is required");
    }

    if data.email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !is_valid_email(&data.email) {
        errors.push("email", "Please enter a valid email address");
    }

    if data.password.is_empty() {
        errors.push("password", "Password is required");
    } else if data.password.len() < 6 {
        errors.push("password", "Password must be at least 6 characters long");
    }

    if confirm_password.is_empty() {
        errors.push("confirmPassword", "Please confirm your password");
    } else if data.password != confirm_password {
        errors.push("confirmPassword", "Passwords do not match");
    }

    if data.phone.trim().is_empty() {
        errors.push("phone", "Phone number is required");
    }

    if data.address.trim().is_empty() {
        errors.push("address", "Address is required");
    }

    if data.date_of_birth.is_empty() {
        errors.push("dateOfBirth", "Date of birth is required");
    }

    errors
}

pub fn validate_department(body: &NewDepartment) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if body.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }

    if body.description.trim().is_empty() {
        errors.push("description", "Description is required");
    }

    errors
}

/// Validate a training form. The deadline must be strictly in the future;
/// a deadline of today is rejected.
pub fn validate_training(body: &NewTraining, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if body.training_name.trim().is_empty() {
        errors.push("trainingName", "Training name is required");
    }

    if body.department.trim().is_empty() {
        errors.push("department", "Department is required");
    }

    if body.content.trim().is_empty() {
        errors.push("content", "Content description is required");
    }

    if body.last_date.is_empty() {
        errors.push("lastDate", "Valid until date is required");
    } else {
        match NaiveDate::parse_from_str(&body.last_date, "%Y-%m-%d") {
            Ok(date) if date <= today => {
                errors.push("lastDate", "Valid until date must be in the future");
            }
            Ok(_) => {}
            Err(_) => errors.push("lastDate", "Valid until date must be a valid date"),
        }
    }

    errors
}

pub fn validate_profile(update: &ProfileUpdate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if let Some(full_name) = &update.full_name
        && full_name.trim().is_empty()
    {
        errors.push("fullName", "Full name is required");
    }

    if let Some(email) = &update.email {
        if email.trim().is_empty() {
            errors.push("email", "Email is required");
        } else if !is_valid_email(email) {
            errors.push("email", "Please enter a valid email address");
        }
    }

    if let Some(phone) = &update.phone
        && phone.trim().is_empty()
    {
        errors.push("phone", "Phone number is required");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn register_data() -> RegisterData {
        RegisterData {
            emp_no: "EMP-1".to_string(),
            full_name: "Nina Halvorsen".to_string(),
            email: "nina@hospital.test".to_string(),
            password: "secret7".to_string(),
            role: "staff".to_string(),
            department_id: None,
            manager_id: None,
            address: "12 Ward Street".to_string(),
            phone: "555-0142".to_string(),
            date_of_birth: "1990-04-02".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        let errors = validate_registration(&register_data(), "secret7");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_registration_rejects_bad_email_and_short_password() {
        let mut data = register_data();
        data.email = "not-an-email".to_string();
        data.password = "abc".to_string();

        let errors = validate_registration(&data, "abc");
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters long")
        );
    }

    #[test]
    fn test_registration_rejects_mismatched_confirmation() {
        let errors = validate_registration(&register_data(), "different");
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
    }

    #[test]
    fn test_training_deadline_today_is_rejected() {
        let body = NewTraining {
            training_name: "Hand Hygiene".to_string(),
            department: "d1".to_string(),
            content: "Refresher".to_string(),
            last_date: "2026-03-15".to_string(),
            users: vec![],
        };

        let errors = validate_training(&body, today());
        assert_eq!(
            errors.get("lastDate"),
            Some("Valid until date must be in the future")
        );
    }

    #[test]
    fn test_training_future_deadline_passes() {
        let body = NewTraining {
            training_name: "Hand Hygiene".to_string(),
            department: "d1".to_string(),
            content: "Refresher".to_string(),
            last_date: "2026-03-16".to_string(),
            users: vec![],
        };

        assert!(validate_training(&body, today()).is_empty());
    }

    #[test]
    fn test_training_requires_all_fields() {
        let body = NewTraining {
            training_name: " ".to_string(),
            department: String::new(),
            content: String::new(),
            last_date: String::new(),
            users: vec![],
        };

        let errors = validate_training(&body, today());
        assert_eq!(errors.get("trainingName"), Some("Training name is required"));
        assert_eq!(errors.get("department"), Some("Department is required"));
        assert_eq!(errors.get("content"), Some("Content description is required"));
        assert_eq!(errors.get("lastDate"), Some("Valid until date is required"));
    }

    #[test]
    fn test_department_validation() {
        let body = NewDepartment {
            name: String::new(),
            description: "x".to_string(),
        };
        let errors = validate_department(&body);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert!(errors.get("description").is_none());
    }

    #[test]
    fn test_profile_partial_validation() {
        let update = ProfileUpdate {
            email: Some("broken".to_string()),
            ..Default::default()
        };
        let errors = validate_profile(&update);
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));

        // Unset fields are not validated
        assert!(validate_profile(&ProfileUpdate::default()).is_empty());
    }
}
