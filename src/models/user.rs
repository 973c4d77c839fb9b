//! Staff user models and admin list query parameters

use serde::{Deserialize, Serialize};

/// A portal user (staff member)
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(rename = "id", alias = "_id")]
    pub id: String,

    #[serde(rename = "empNo")]
    pub emp_no: String,

    #[serde(rename = "fullName")]
    pub full_name: String,

    #[serde(rename = "email")]
    pub email: String,

    #[serde(rename = "phone")]
    pub phone: Option<String>,

    #[serde(rename = "address")]
    pub address: Option<String>,

    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,

    /// Wire role value; classified by the rules layer
    #[serde(rename = "role")]
    pub role: String,

    #[serde(rename = "departmentId")]
    pub department_id: Option<String>,

    #[serde(rename = "managerId")]
    pub manager_id: Option<String>,

    /// Wire status value; classified by the rules layer
    #[serde(rename = "status")]
    pub status: String,

    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,

    #[serde(rename = "lastLogin")]
    pub last_login: Option<String>,
}

impl User {
    pub fn get_display_name(&self) -> String {
        if self.full_name.trim().is_empty() {
            self.emp_no.clone()
        } else {
            self.full_name.clone()
        }
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Registration request body (admin-created users and self-registration)
#[derive(Debug, Clone, Serialize)]
pub struct RegisterData {
    #[serde(rename = "empNo")]
    pub emp_no: String,

    #[serde(rename = "fullName")]
    pub full_name: String,

    #[serde(rename = "email")]
    pub email: String,

    #[serde(rename = "password")]
    pub password: String,

    #[serde(rename = "role")]
    pub role: String,

    #[serde(rename = "departmentId", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,

    #[serde(rename = "managerId", skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,

    #[serde(rename = "address")]
    pub address: String,

    #[serde(rename = "phone")]
    pub phone: String,

    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
}

/// Profile update body; only set fields are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(rename = "email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(rename = "address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(rename = "dateOfBirth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

/// Query parameters for the paginated admin user list
#[derive(Debug, Clone)]
pub struct UserQuery {
    pub page: u32,
    pub limit: u32,
    pub status: Option<String>,
    pub role: Option<String>,
    pub search: Option<String>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            status: None,
            role: None,
            search: None,
        }
    }
}

impl UserQuery {
    /// Build the query string; empty-string filters are treated as unset
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
        ];

        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("status={}", urlencoding::encode(status)));
        }
        if let Some(role) = self.role.as_deref().filter(|r| !r.is_empty()) {
            parts.push(format!("role={}", urlencoding::encode(role)));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("search={}", urlencoding::encode(search)));
        }

        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization() {
        let json = r#"
        {
            "id": "u1",
            "empNo": "EMP-0042",
            "fullName": "Nina Halvorsen",
            "email": "nina@hospital.test",
            "phone": "555-0142",
            "address": "12 Ward Street",
            "dateOfBirth": "1990-04-02",
            "role": "manager",
            "departmentId": "d1",
            "status": "active",
            "createdAt": "2024-01-01T09:00:00Z",
            "updatedAt": "2024-02-01T09:00:00Z"
        }
        "#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.emp_no, "EMP-0042");
        assert_eq!(user.role, "manager");
        assert_eq!(user.manager_id, None);
        assert_eq!(user.get_display_name(), "Nina Halvorsen");
    }

    #[test]
    fn test_user_accepts_legacy_id_field() {
        let json = r#"
        {
            "_id": "u2",
            "empNo": "EMP-0001",
            "fullName": "",
            "email": "x@hospital.test",
            "role": "staff",
            "status": "active"
        }
        "#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u2");
        // Empty full name falls back to the employee number
        assert_eq!(user.get_display_name(), "EMP-0001");
    }

    #[test]
    fn test_user_query_string() {
        let query = UserQuery {
            page: 2,
            limit: 25,
            status: Some("locked".to_string()),
            role: Some(String::new()),
            search: Some("nina h".to_string()),
        };
        assert_eq!(
            query.to_query_string(),
            "page=2&limit=25&status=locked&search=nina%20h"
        );
    }

    #[test]
    fn test_default_query_has_no_filters() {
        assert_eq!(UserQuery::default().to_query_string(), "page=1&limit=10");
    }
}
