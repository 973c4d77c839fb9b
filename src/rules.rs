//! Derived view rules: compliance status, badges, department resolution,
//! and the role gate
//!
//! Everything here is a pure function of cached entities and the clock;
//! nothing is stored, everything is recomputed on read.

use chrono::{DateTime, NaiveDate};
use ratatui::style::Color;

use crate::models::{Department, DepartmentRef};

/// Roles allowed into the admin-only views (users, departments)
pub const ADMIN_ROLES: &[&str] = &["admin"];

/// Roles allowed into the training-management views
pub const MANAGER_ROLES: &[&str] = &["admin", "manager"];

/// Views without a role constraint
pub const ANY_ROLE: &[&str] = &[];

/// Role gate used identically for tab visibility and view switching.
/// An empty allowed set permits any authenticated role.
pub fn can_access(role: &str, allowed: &[&str]) -> bool {
    allowed.is_empty() || allowed.contains(&role)
}

/// Parse a wire date: bare `YYYY-MM-DD` or an RFC 3339 timestamp
fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Calendar days until the deadline. A deadline later today is 0, not -1;
/// unparseable dates yield None.
pub fn days_remaining(deadline: &str, today: NaiveDate) -> Option<i64> {
    parse_date(deadline).map(|date| (date - today).num_days())
}

/// A training's date-derived validity classification.
///
/// Independent of any assignment's own progress status; the two are not
/// reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compliance {
    Active,
    ExpiringSoon,
    Expired,
    Unknown,
}

impl Compliance {
    /// Classify a deadline: expired below 0 days remaining, expiring soon
    /// through day 30, active from day 31.
    pub fn classify(deadline: &str, today: NaiveDate) -> Self {
        match days_remaining(deadline, today) {
            Some(days) if days < 0 => Self::Expired,
            Some(days) if days <= 30 => Self::ExpiringSoon,
            Some(_) => Self::Active,
            None => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::ExpiringSoon => "Expiring Soon",
            Self::Expired => "Expired",
            Self::Unknown => "Unknown",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Active => Color::Green,
            Self::ExpiringSoon => Color::Yellow,
            Self::Expired => Color::Red,
            Self::Unknown => Color::DarkGray,
        }
    }
}

/// Urgency color for a deadline, finer-grained than the three-way
/// classification: anything within a week renders hot.
pub fn deadline_color(deadline: &str, today: NaiveDate) -> Color {
    match days_remaining(deadline, today) {
        Some(days) if days < 0 => Color::Red,
        Some(days) if days <= 7 => Color::LightRed,
        Some(days) if days <= 30 => Color::Yellow,
        Some(_) => Color::Green,
        None => Color::DarkGray,
    }
}

/// A presentation category for an enum-like wire value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub color: Color,
}

const NEUTRAL_BADGE: Badge = Badge {
    label: "Unknown",
    color: Color::DarkGray,
};

/// Account status badge; unmapped wire values fall back to neutral
pub fn user_status_badge(status: &str) -> Badge {
    match status {
        "active" => Badge {
            label: "Active",
            color: Color::Green,
        },
        "locked" => Badge {
            label: "Locked",
            color: Color::Yellow,
        },
        "close" => Badge {
            label: "Closed",
            color: Color::Red,
        },
        _ => NEUTRAL_BADGE,
    }
}

/// Role badge; unmapped wire values fall back to neutral
pub fn role_badge(role: &str) -> Badge {
    match role {
        "admin" => Badge {
            label: "Admin",
            color: Color::Magenta,
        },
        "manager" => Badge {
            label: "Manager",
            color: Color::Cyan,
        },
        "staff" => Badge {
            label: "Staff",
            color: Color::White,
        },
        _ => NEUTRAL_BADGE,
    }
}

/// Assignment progress badge; unmapped wire values fall back to neutral
pub fn progress_badge(status: &str) -> Badge {
    match status {
        "pending" => Badge {
            label: "Pending",
            color: Color::Yellow,
        },
        "inprogress" => Badge {
            label: "In Progress",
            color: Color::Cyan,
        },
        "completed" => Badge {
            label: "Completed",
            color: Color::Green,
        },
        "expired" => Badge {
            label: "Expired",
            color: Color::Red,
        },
        _ => NEUTRAL_BADGE,
    }
}

/// Resolve a training's department name for display. An embedded object
/// wins outright; a bare id is looked up in the department cache, and a
/// miss resolves to a literal placeholder rather than an empty string.
pub fn resolve_department(reference: &DepartmentRef, departments: &[Department]) -> String {
    match reference {
        DepartmentRef::Embedded(department) => department.name.clone(),
        DepartmentRef::Id(id) => departments
            .iter()
            .find(|d| &d.id == id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| "Unknown Department".to_string()),
    }
}

/// Resolve a user's optional department id for display
pub fn department_name(id: Option<&str>, departments: &[Department]) -> String {
    let Some(id) = id else {
        return "Not assigned".to_string();
    };
    departments
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| "Unknown Department".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn days_out(days: i64) -> String {
        (today() + chrono::Duration::days(days))
            .format("%Y-%m-%d")
            .to_string()
    }

    #[test]
    fn test_deadline_today_is_zero_days() {
        assert_eq!(days_remaining(&days_out(0), today()), Some(0));
    }

    #[test]
    fn test_days_remaining_accepts_rfc3339() {
        assert_eq!(
            days_remaining("2026-03-17T08:30:00+00:00", today()),
            Some(2)
        );
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(Compliance::classify(&days_out(-1), today()), Compliance::Expired);
        // A deadline later today still counts as 0 days remaining
        assert_eq!(
            Compliance::classify(&days_out(0), today()),
            Compliance::ExpiringSoon
        );
        assert_eq!(
            Compliance::classify(&days_out(30), today()),
            Compliance::ExpiringSoon
        );
        assert_eq!(Compliance::classify(&days_out(31), today()), Compliance::Active);
    }

    #[test]
    fn test_unparseable_deadline_is_unknown() {
        assert_eq!(Compliance::classify("soon", today()), Compliance::Unknown);
        assert_eq!(days_remaining("not-a-date", today()), None);
    }

    #[test]
    fn test_deadline_color_bands() {
        assert_eq!(deadline_color(&days_out(-3), today()), Color::Red);
        assert_eq!(deadline_color(&days_out(7), today()), Color::LightRed);
        assert_eq!(deadline_color(&days_out(8), today()), Color::Yellow);
        assert_eq!(deadline_color(&days_out(90), today()), Color::Green);
    }

    #[test]
    fn test_role_gate() {
        assert!(can_access("staff", ANY_ROLE));
        assert!(can_access("manager", MANAGER_ROLES));
        assert!(can_access("admin", MANAGER_ROLES));
        assert!(!can_access("staff", ADMIN_ROLES));
        assert!(!can_access("staff", MANAGER_ROLES));
        // Unmapped roles pass only unconstrained gates
        assert!(can_access("auditor", ANY_ROLE));
        assert!(!can_access("auditor", MANAGER_ROLES));
    }

    #[test]
    fn test_badges_fall_back_to_neutral() {
        assert_eq!(user_status_badge("active").label, "Active");
        assert_eq!(user_status_badge("suspended").label, "Unknown");
        assert_eq!(role_badge("manager").label, "Manager");
        assert_eq!(role_badge("superuser").label, "Unknown");
        assert_eq!(progress_badge("inprogress").label, "In Progress");
        assert_eq!(progress_badge("paused").label, "Unknown");
    }

    #[test]
    fn test_resolve_department_shapes() {
        let departments = vec![Department {
            id: "d1".to_string(),
            name: "Cardiology".to_string(),
            description: String::new(),
            created_at: None,
            updated_at: None,
        }];

        let embedded = DepartmentRef::Embedded(departments[0].clone());
        assert_eq!(resolve_department(&embedded, &[]), "Cardiology");

        let by_id = DepartmentRef::Id("d1".to_string());
        assert_eq!(resolve_department(&by_id, &departments), "Cardiology");

        let missing = DepartmentRef::Id("d9".to_string());
        assert_eq!(resolve_department(&missing, &departments), "Unknown Department");
    }

    #[test]
    fn test_department_name_for_users() {
        let departments = vec![Department {
            id: "d1".to_string(),
            name: "Cardiology".to_string(),
            description: String::new(),
            created_at: None,
            updated_at: None,
        }];

        assert_eq!(department_name(None, &departments), "Not assigned");
        assert_eq!(department_name(Some("d1"), &departments), "Cardiology");
        assert_eq!(department_name(Some("d9"), &departments), "Unknown Department");
    }
}
