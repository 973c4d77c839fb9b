use crate::models::{Department, Training, User};
use crate::rules::{self, Compliance};
use anyhow::Result;
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export formats
pub enum ExportFormat {
    Csv,
    Json,
}

/// Export the cached user list to a file
pub fn export_users(users: &[User], format: ExportFormat, path: &Path) -> Result<String> {
    let columns = ["empNo", "fullName", "email", "role", "status", "departmentId"];
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| {
            vec![
                u.emp_no.clone(),
                u.full_name.clone(),
                u.email.clone(),
                u.role.clone(),
                u.status.clone(),
                u.department_id.clone().unwrap_or_default(),
            ]
        })
        .collect();

    write_rows(&columns, &rows, format, path)
}

/// Export the cached training list, with department names resolved and the
/// date-derived compliance status included
pub fn export_trainings(
    trainings: &[Training],
    departments: &[Department],
    today: NaiveDate,
    format: ExportFormat,
    path: &Path,
) -> Result<String> {
    let columns = ["trainingName", "department", "lastDate", "status", "assignedUsers"];
    let rows: Vec<Vec<String>> = trainings
        .iter()
        .map(|t| {
            vec![
                t.training_name.clone(),
                rules::resolve_department(&t.department, departments),
                t.last_date.clone(),
                Compliance::classify(&t.last_date, today).label().to_string(),
                t.users.len().to_string(),
            ]
        })
        .collect();

    write_rows(&columns, &rows, format, path)
}

fn write_rows(
    columns: &[&str],
    rows: &[Vec<String>],
    format: ExportFormat,
    path: &Path,
) -> Result<String> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match format {
        ExportFormat::Csv => export_to_csv(columns, rows, path),
        ExportFormat::Json => export_to_json(columns, rows, path),
    }
}

fn export_to_csv(columns: &[&str], rows: &[Vec<String>], path: &Path) -> Result<String> {
    let mut file = File::create(path)?;

    // Write header
    writeln!(file, "{}", columns.join(","))?;

    // Write rows
    for row in rows {
        writeln!(file, "{}", row.join(","))?;
    }

    Ok(path.to_string_lossy().to_string())
}

fn export_to_json(columns: &[&str], rows: &[Vec<String>], path: &Path) -> Result<String> {
    let mut file = File::create(path)?;

    let mut output = Vec::new();
    for row in rows {
        let mut map = serde_json::Map::new();
        for (i, col) in columns.iter().enumerate() {
            map.insert(col.to_string(), serde_json::Value::String(row[i].clone()));
        }
        output.push(serde_json::Value::Object(map));
    }

    let json = serde_json::to_string_pretty(&output)?;
    file.write_all(json.as_bytes())?;

    Ok(path.to_string_lossy().to_string())
}
