#![allow(async_fn_in_trait)] // 只在单线程环境中使用, 不需要 Send

use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::dtos::CourseKey;
use crate::model::structs::Course;
use serde_json::Value;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new(config: ClientConfig) -> Result<Self>
    where
        Self: Sized;
}

/// Operations of the course module the page talks to
pub trait CourseApi {
    /// Startup greeting, called once before the form is wired
    fn greet(&self);

    /// Create a course for the configured teacher.
    /// The payload is whatever the service echoes back.
    async fn add_course(&self, name: &str, description: &str) -> Result<Value>;

    /// List all courses of a teacher
    async fn get_courses_for_teacher(&self, teacher_id: i32) -> Result<Vec<Course>>;

    /// Delete a single course
    async fn delete_course(&self, key: CourseKey) -> Result<Value>;
}

/// The page surface a form handler needs
pub trait Page {
    /// Current `value` of the field with this id
    fn field_value(&self, id: &str) -> Result<String>;

    /// Blocking notification to the user
    fn alert(&self, message: &str);

    /// Ask the user a yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// Reload the page, discarding in-page state
    async fn reload(&self) -> Result<()>;
}

/// A user-initiated submission whose default action can be suppressed
pub trait SubmitEvent {
    fn prevent_default(&self);
}
