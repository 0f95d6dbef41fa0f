use serde::Serialize;

/// Body of the create course request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateCourse<'a> {
    pub teacher_id: i32,
    pub name: &'a str,
    pub description: &'a str,
}

/// Identifies one course of one teacher
#[derive(Debug, Clone, Copy)]
pub struct CourseKey {
    pub teacher_id: i32,
    pub course_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_course_escapes_quotes() {
        let body = CreateCourse {
            teacher_id: 1,
            name: r#"The "Hard" Parts"#,
            description: "",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], r#"The "Hard" Parts"#);
        // an empty field is sent as an empty string, never null
        assert_eq!(json["description"], "");
        assert_eq!(json["teacher_id"], 1);
    }
}
