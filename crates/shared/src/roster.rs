use std::{fs, path::Path};

use thiserror::Error;

use crate::domain::Student;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("could not read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("roster contains duplicate student id {0}")]
    DuplicateId(i64),
}

/// Loads a roster from a JSON array of student records.
///
/// Records keep whatever ids the file assigns; duplicate ids are rejected so
/// the UI never shows two cards claiming the same student.
pub fn load_roster(path: &Path) -> Result<Vec<Student>, RosterError> {
    let text = fs::read_to_string(path)?;
    let students: Vec<Student> = serde_json::from_str(&text)?;
    let mut seen = std::collections::HashSet::new();
    for student in &students {
        if !seen.insert(student.student_id.0) {
            return Err(RosterError::DuplicateId(student.student_id.0));
        }
    }
    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write roster");
        file
    }

    #[test]
    fn loads_a_valid_roster() {
        let file = write_temp(
            r#"[{
                "student_id": 7,
                "name": "Ada Lovelace",
                "age": 17,
                "grade": "11th Grade",
                "email": "ada@example.com",
                "phone": "555-0199",
                "created_at": "2025-09-01T08:00:00Z"
            }]"#,
        );
        let roster = load_roster(file.path()).expect("roster loads");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Ada Lovelace");
        assert_eq!(roster[0].student_id.0, 7);
    }

    #[test]
    fn rejects_duplicate_student_ids() {
        let file = write_temp(
            r#"[
                {"student_id": 1, "name": "A", "age": 16, "grade": "10th Grade",
                 "email": "a@example.com", "phone": "555-0001",
                 "created_at": "2025-09-01T08:00:00Z"},
                {"student_id": 1, "name": "B", "age": 17, "grade": "11th Grade",
                 "email": "b@example.com", "phone": "555-0002",
                 "created_at": "2025-09-01T08:00:00Z"}
            ]"#,
        );
        assert!(matches!(
            load_roster(file.path()),
            Err(RosterError::DuplicateId(1))
        ));
    }

    #[test]
    fn surfaces_parse_errors() {
        let file = write_temp("not json");
        assert!(matches!(load_roster(file.path()), Err(RosterError::Parse(_))));
    }
}
