//! Assignment/progress records linking users to trainings

use serde::Deserialize;

/// One user's progress on one training.
///
/// The `status` here is the assignment's own progress state and is not
/// reconciled with the training's date-derived compliance status.
#[derive(Debug, Clone, Deserialize)]
pub struct UserTraining {
    #[serde(rename = "id", alias = "_id")]
    pub id: String,

    #[serde(rename = "userId")]
    pub user_id: String,

    #[serde(rename = "trainingId")]
    pub training_id: String,

    #[serde(rename = "content")]
    pub content: Option<String>,

    /// Wire progress value; classified by the rules layer
    #[serde(rename = "status")]
    pub status: String,

    #[serde(rename = "retrainingDate")]
    pub retraining_date: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Aggregate compliance figures for the dashboard view
#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceDashboard {
    #[serde(rename = "totalUsers")]
    pub total_users: u64,

    #[serde(rename = "compliantUsers")]
    pub compliant_users: u64,

    #[serde(rename = "pendingTrainings")]
    pub pending_trainings: u64,

    #[serde(rename = "expiredCertifications")]
    pub expired_certifications: u64,

    #[serde(rename = "upcomingDeadlines", default)]
    pub upcoming_deadlines: Vec<UserTraining>,

    #[serde(rename = "departmentCompliance", default)]
    pub department_compliance: Vec<DepartmentCompliance>,
}

/// Per-department compliance row
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentCompliance {
    #[serde(rename = "department")]
    pub department: String,

    #[serde(rename = "total")]
    pub total: u64,

    #[serde(rename = "compliant")]
    pub compliant: u64,

    #[serde(rename = "percentage")]
    pub percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_training_deserialization() {
        let json = r#"
        {
            "id": "ut1",
            "userId": "u1",
            "trainingId": "t1",
            "status": "inprogress",
            "retrainingDate": "2026-09-01"
        }
        "#;

        let record: UserTraining = serde_json::from_str(json).unwrap();
        assert_eq!(record.user_id, "u1");
        assert_eq!(record.status, "inprogress");
        assert_eq!(record.content, None);
    }

    #[test]
    fn test_dashboard_deserialization() {
        let json = r#"
        {
            "totalUsers": 40,
            "compliantUsers": 31,
            "pendingTrainings": 12,
            "expiredCertifications": 3,
            "departmentCompliance": [
                {"department": "Cardiology", "total": 10, "compliant": 9, "percentage": 90.0}
            ]
        }
        "#;

        let dashboard: ComplianceDashboard = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.total_users, 40);
        assert!(dashboard.upcoming_deadlines.is_empty());
        assert_eq!(dashboard.department_compliance[0].compliant, 9);
    }
}
