//! Department models

use serde::{Deserialize, Serialize};

/// A hospital department
#[derive(Debug, Clone, Deserialize)]
pub struct Department {
    #[serde(rename = "id", alias = "_id")]
    pub id: String,

    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "description")]
    pub description: String,

    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Create/update request body for a department
#[derive(Debug, Clone, Serialize)]
pub struct NewDepartment {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_deserialization() {
        let json = r#"
        {
            "id": "d1",
            "name": "Cardiology",
            "description": "Heart and vascular care",
            "createdAt": "2024-01-01T09:00:00Z",
            "updatedAt": "2024-01-01T09:00:00Z"
        }
        "#;

        let dept: Department = serde_json::from_str(json).unwrap();
        assert_eq!(dept.id, "d1");
        assert_eq!(dept.name, "Cardiology");
    }
}
