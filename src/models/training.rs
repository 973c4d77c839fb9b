//! Training models

use serde::{Deserialize, Serialize};

use super::Department;

/// A training course with a validity deadline and assigned users
#[derive(Debug, Clone, Deserialize)]
pub struct Training {
    #[serde(rename = "id", alias = "_id")]
    pub id: String,

    #[serde(rename = "trainingName")]
    pub training_name: String,

    #[serde(rename = "department")]
    pub department: DepartmentRef,

    #[serde(rename = "content")]
    pub content: String,

    /// Validity deadline, date string as sent by the server
    #[serde(rename = "lastDate")]
    pub last_date: String,

    /// Ids of assigned users
    #[serde(rename = "users", default)]
    pub users: Vec<String>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// The `department` field arrives either expanded or as a bare id.
/// Consumers must match both shapes; resolution lives in the rules layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DepartmentRef {
    Embedded(Department),
    Id(String),
}

impl DepartmentRef {
    /// The department id regardless of shape
    pub fn id(&self) -> &str {
        match self {
            Self::Embedded(dept) => &dept.id,
            Self::Id(id) => id,
        }
    }
}

/// Create/update request body for a training
#[derive(Debug, Clone, Serialize)]
pub struct NewTraining {
    #[serde(rename = "trainingName")]
    pub training_name: String,

    /// Department id; the server expands it on read
    #[serde(rename = "department")]
    pub department: String,

    #[serde(rename = "content")]
    pub content: String,

    #[serde(rename = "lastDate")]
    pub last_date: String,

    #[serde(rename = "users")]
    pub users: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_with_bare_department_id() {
        let json = r#"
        {
            "id": "t1",
            "trainingName": "Hand Hygiene",
            "department": "d9",
            "content": "Annual hand hygiene refresher",
            "lastDate": "2026-12-01",
            "users": ["u1", "u2"]
        }
        "#;

        let training: Training = serde_json::from_str(json).unwrap();
        assert!(matches!(training.department, DepartmentRef::Id(ref id) if id == "d9"));
        assert_eq!(training.department.id(), "d9");
        assert_eq!(training.users.len(), 2);
    }

    #[test]
    fn test_training_with_embedded_department() {
        let json = r#"
        {
            "id": "t2",
            "trainingName": "Fire Safety",
            "department": {
                "id": "d1",
                "name": "Cardiology",
                "description": "Heart and vascular care"
            },
            "content": "Evacuation routes and extinguisher use",
            "lastDate": "2026-06-30"
        }
        "#;

        let training: Training = serde_json::from_str(json).unwrap();
        match &training.department {
            DepartmentRef::Embedded(dept) => assert_eq!(dept.name, "Cardiology"),
            DepartmentRef::Id(_) => panic!("expected embedded department"),
        }
        // Missing users array defaults to empty
        assert!(training.users.is_empty());
    }
}
