//! Configuration shared by the browser and terminal front-ends
//!
//! Both structs deserialize with defaults so a partial JSON object
//! (or none at all) yields a working setup.

use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TEACHER_ID: i32 = 1;

/// Where the course service lives and who we act as
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
    pub teacher_id: i32,
    pub greeting: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            teacher_id: DEFAULT_TEACHER_ID,
            greeting: "course form".to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration baked in at build time for the browser bundle
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("COURSE_API_URL") {
            config.api_url = url.to_string();
        }
        config
    }

    /// Join a path onto the API base, tolerating a trailing slash on either side
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Element ids the page is wired against
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormFields {
    pub form: String,
    pub name: String,
    pub description: String,
    pub course_table: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            form: "form".to_string(),
            name: "name".to_string(),
            description: "description".to_string(),
            course_table: "left-tbody".to_string(),
        }
    }
}
