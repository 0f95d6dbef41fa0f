use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// Course record as served by the course service
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Course {
    pub teacher_id: i32,
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub time: Option<NaiveDateTime>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub structure: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

impl Course {
    /// Creation date as shown in the course table, empty when unknown
    pub fn date_label(&self) -> String {
        self.time
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Field values captured from the form at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseForm {
    pub name: String,
    pub description: String,
}

/// Where a form handler currently is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    /// Number of `add_course` calls still outstanding
    Submitting(usize),
}
