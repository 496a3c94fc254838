use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(StudentId);

/// UI color scheme. Anything unrecognized in the persisted preference
/// resolves to `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Grade levels offered by the enrollment form, in display order.
pub const GRADE_LEVELS: &[&str] = &["9th Grade", "10th Grade", "11th Grade", "12th Grade"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: StudentId,
    pub name: String,
    pub age: u32,
    pub grade: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// The built-in roster used when no `--roster` file is supplied.
pub fn sample_roster() -> Vec<Student> {
    let enrolled = Utc
        .with_ymd_and_hms(2025, 9, 1, 8, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    let entries: [(&str, u32, &str, &str, &str); 5] = [
        ("John Smith", 18, "12th Grade", "john@example.com", "555-0101"),
        ("Emma Johnson", 17, "11th Grade", "emma@example.com", "555-0102"),
        ("Michael Brown", 16, "10th Grade", "michael@example.com", "555-0103"),
        ("Sarah Davis", 18, "12th Grade", "sarah@example.com", "555-0104"),
        ("David Wilson", 17, "11th Grade", "david@example.com", "555-0105"),
    ];
    entries
        .iter()
        .enumerate()
        .map(|(index, (name, age, grade, email, phone))| Student {
            student_id: StudentId(index as i64 + 1),
            name: (*name).to_string(),
            age: *age,
            grade: (*grade).to_string(),
            email: (*email).to_string(),
            phone: (*phone).to_string(),
            created_at: enrolled,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parses_known_values_and_defaults_to_light() {
        assert_eq!(Theme::from_str_or_default("dark"), Theme::Dark);
        assert_eq!(Theme::from_str_or_default("light"), Theme::Light);
        assert_eq!(Theme::from_str_or_default("solarized"), Theme::Light);
        assert_eq!(Theme::from_str_or_default(""), Theme::Light);
    }

    #[test]
    fn theme_opposite_is_an_involution() {
        assert_eq!(Theme::Light.opposite(), Theme::Dark);
        assert_eq!(Theme::Dark.opposite().opposite(), Theme::Dark);
    }

    #[test]
    fn sample_roster_uses_known_grade_levels() {
        let roster = sample_roster();
        assert_eq!(roster.len(), 5);
        for student in &roster {
            assert!(GRADE_LEVELS.contains(&student.grade.as_str()));
            assert!(student.student_id.0 > 0);
        }
    }
}
