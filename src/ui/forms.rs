//! Form overlays for create/edit flows
//!
//! A form is a flat list of text fields cycled with Tab/arrows; submission
//! runs local validation and only dispatches when the field error map is
//! empty.

use crate::models::{Department, NewDepartment, NewTraining, ProfileUpdate, RegisterData, Training, User};
use crate::validate::FieldErrors;

/// One editable text field, keyed by its wire field name
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Masked on screen (passwords)
    pub secret: bool,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            label,
            value: value.into(),
            secret: false,
        }
    }

    fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            secret: true,
        }
    }
}

/// What a submitted form turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    NewDepartment,
    EditDepartment,
    NewTraining,
    EditTraining,
    NewUser,
    EditProfile,
}

#[derive(Debug, Clone)]
pub struct Form {
    pub kind: FormKind,
    pub title: &'static str,
    /// Id of the entity being edited, if any
    pub target_id: Option<String>,
    pub fields: Vec<FormField>,
    pub active: usize,
    pub errors: FieldErrors,
}

impl Form {
    pub fn new_department() -> Self {
        Self {
            kind: FormKind::NewDepartment,
            title: " New Department ",
            target_id: None,
            fields: vec![
                FormField::new("name", "Name", ""),
                FormField::new("description", "Description", ""),
            ],
            active: 0,
            errors: FieldErrors::default(),
        }
    }

    pub fn edit_department(department: &Department) -> Self {
        Self {
            kind: FormKind::EditDepartment,
            title: " Edit Department ",
            target_id: Some(department.id.clone()),
            fields: vec![
                FormField::new("name", "Name", &department.name),
                FormField::new("description", "Description", &department.description),
            ],
            active: 0,
            errors: FieldErrors::default(),
        }
    }

    pub fn new_training() -> Self {
        Self {
            kind: FormKind::NewTraining,
            title: " New Training ",
            target_id: None,
            fields: vec![
                FormField::new("trainingName", "Training name", ""),
                FormField::new("department", "Department id", ""),
                FormField::new("content", "Content", ""),
                FormField::new("lastDate", "Valid until (YYYY-MM-DD)", ""),
            ],
            active: 0,
            errors: FieldErrors::default(),
        }
    }

    pub fn edit_training(training: &Training) -> Self {
        Self {
            kind: FormKind::EditTraining,
            title: " Edit Training ",
            target_id: Some(training.id.clone()),
            fields: vec![
                FormField::new("trainingName", "Training name", &training.training_name),
                FormField::new("department", "Department id", training.department.id()),
                FormField::new("content", "Content", &training.content),
                FormField::new("lastDate", "Valid until (YYYY-MM-DD)", &training.last_date),
            ],
            active: 0,
            errors: FieldErrors::default(),
        }
    }

    pub fn new_user() -> Self {
        Self {
            kind: FormKind::NewUser,
            title: " New User ",
            target_id: None,
            fields: vec![
                FormField::new("empNo", "Employee number", ""),
                FormField::new("fullName", "Full name", ""),
                FormField::new("email", "Email", ""),
                FormField::secret("password", "Password"),
                FormField::secret("confirmPassword", "Confirm password"),
                FormField::new("role", "Role (staff/manager/admin)", "staff"),
                FormField::new("departmentId", "Department id (optional)", ""),
                FormField::new("managerId", "Manager id (optional)", ""),
                FormField::new("phone", "Phone", ""),
                FormField::new("address", "Address", ""),
                FormField::new("dateOfBirth", "Date of birth (YYYY-MM-DD)", ""),
            ],
            active: 0,
            errors: FieldErrors::default(),
        }
    }

    pub fn edit_profile(user: &User) -> Self {
        Self {
            kind: FormKind::EditProfile,
            title: " Edit Profile ",
            target_id: Some(user.id.clone()),
            fields: vec![
                FormField::new("fullName", "Full name", &user.full_name),
                FormField::new("email", "Email", &user.email),
                FormField::new("phone", "Phone", user.phone.as_deref().unwrap_or_default()),
                FormField::new("address", "Address", user.address.as_deref().unwrap_or_default()),
                FormField::new(
                    "dateOfBirth",
                    "Date of birth (YYYY-MM-DD)",
                    user.date_of_birth.as_deref().unwrap_or_default(),
                ),
            ],
            active: 0,
            errors: FieldErrors::default(),
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    fn optional_value(&self, name: &str) -> Option<String> {
        let value = self.value(name).trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn input(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.active) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active) {
            field.value.pop();
        }
    }

    /// Assemble a department payload from the field values
    pub fn to_department(&self) -> NewDepartment {
        NewDepartment {
            name: self.value("name").trim().to_string(),
            description: self.value("description").trim().to_string(),
        }
    }

    /// Assemble a training payload; assignments are managed from the
    /// detail view, so an edit keeps the ids passed in by the caller
    pub fn to_training(&self, users: Vec<String>) -> NewTraining {
        NewTraining {
            training_name: self.value("trainingName").trim().to_string(),
            department: self.value("department").trim().to_string(),
            content: self.value("content").trim().to_string(),
            last_date: self.value("lastDate").trim().to_string(),
            users,
        }
    }

    /// Assemble a registration payload
    pub fn to_registration(&self) -> RegisterData {
        RegisterData {
            emp_no: self.value("empNo").trim().to_string(),
            full_name: self.value("fullName").trim().to_string(),
            email: self.value("email").trim().to_string(),
            password: self.value("password").to_string(),
            role: self.value("role").trim().to_string(),
            department_id: self.optional_value("departmentId"),
            manager_id: self.optional_value("managerId"),
            address: self.value("address").trim().to_string(),
            phone: self.value("phone").trim().to_string(),
            date_of_birth: self.value("dateOfBirth").trim().to_string(),
        }
    }

    /// Assemble a profile update; every field is sent since the form is
    /// prefilled from the current profile
    pub fn to_profile_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            full_name: Some(self.value("fullName").trim().to_string()),
            email: Some(self.value("email").trim().to_string()),
            phone: Some(self.value("phone").trim().to_string()),
            address: Some(self.value("address").trim().to_string()),
            date_of_birth: self.optional_value("dateOfBirth"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycling_wraps() {
        let mut form = Form::new_department();
        assert_eq!(form.active, 0);
        form.next_field();
        assert_eq!(form.active, 1);
        form.next_field();
        assert_eq!(form.active, 0);
        form.prev_field();
        assert_eq!(form.active, 1);
    }

    #[test]
    fn test_training_payload_assembly() {
        let mut form = Form::new_training();
        for c in "Fire Safety".chars() {
            form.input(c);
        }
        form.next_field();
        for c in "d1".chars() {
            form.input(c);
        }

        let body = form.to_training(vec!["u1".to_string()]);
        assert_eq!(body.training_name, "Fire Safety");
        assert_eq!(body.department, "d1");
        assert_eq!(body.users, vec!["u1".to_string()]);
    }

    #[test]
    fn test_optional_fields_drop_when_blank() {
        let form = Form::new_user();
        let data = form.to_registration();
        assert_eq!(data.department_id, None);
        assert_eq!(data.manager_id, None);
        assert_eq!(data.role, "staff");
    }
}
