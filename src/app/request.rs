//! No-WASM application implementation
//!
//! Terminal stand-in for the browser page: field values come from the
//! command line, notifications go to stdout and a "reload" re-renders the
//! course list.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::client::request::NoWasmClient;
use crate::config::FormFields;
use crate::error::{ErrorKind, Result};
use crate::interface::{CourseApi, Page, SubmitEvent};
use crate::model::dtos::CourseKey;
use crate::model::structs::{Course, CourseForm};

use super::{FormSubmissionHandler, DELETED_MESSAGE};

/// `Page` for the terminal
#[derive(Debug, Clone)]
pub struct TerminalPage {
    values: HashMap<String, String>,
    client: NoWasmClient,
    assume_yes: bool,
}

impl TerminalPage {
    pub fn new(client: NoWasmClient) -> Self {
        Self {
            values: HashMap::new(),
            client,
            assume_yes: false,
        }
    }

    /// Pre-fill the form the way a user would type into it
    pub fn with_form(mut self, fields: &FormFields, form: CourseForm) -> Self {
        self.values.insert(fields.name.clone(), form.name);
        self.values.insert(fields.description.clone(), form.description);
        self
    }

    /// Answer every confirmation with yes
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }
}

impl Page for TerminalPage {
    fn field_value(&self, id: &str) -> Result<String> {
        self.values
            .get(id)
            .cloned()
            .ok_or_else(|| ErrorKind::ElementNotFound(id.to_string()).into())
    }

    fn alert(&self, message: &str) {
        println!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{message} [y/N] ");
        if std::io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(e) => {
                log::warn!("could not read confirmation: {e}");
                false
            }
        }
    }

    async fn reload(&self) -> Result<()> {
        let teacher_id = self.client.config().teacher_id;
        let courses = self.client.get_courses_for_teacher(teacher_id).await?;
        print_courses(&courses);
        Ok(())
    }
}

/// The command line has no native submit action to suppress
pub struct CliSubmit;

impl SubmitEvent for CliSubmit {
    fn prevent_default(&self) {}
}

/// Submit one course through the form handler, as if typed into the page
pub async fn add_course(client: NoWasmClient, fields: FormFields, form: CourseForm) -> Result<()> {
    let page = TerminalPage::new(client.clone()).with_form(&fields, form);
    let handler = FormSubmissionHandler::init(client, page, fields);

    handler.handle_submit(&CliSubmit)?.await
}

pub async fn list_courses(client: &NoWasmClient) -> Result<Vec<Course>> {
    let teacher_id = client.config().teacher_id;
    let courses = client.get_courses_for_teacher(teacher_id).await?;
    print_courses(&courses);
    Ok(courses)
}

/// Delete one course after confirmation. Returns false when the user declined.
pub async fn delete_course(client: NoWasmClient, course_id: i32, assume_yes: bool) -> Result<bool> {
    let page = TerminalPage::new(client.clone()).assume_yes(assume_yes);
    if !page.confirm(&format!("确认删除课程{course_id} 吗?")) {
        return Ok(false);
    }

    let key = CourseKey {
        teacher_id: client.config().teacher_id,
        course_id,
    };
    client.delete_course(key).await?;
    page.alert(DELETED_MESSAGE);
    page.reload().await?;
    Ok(true)
}

pub fn print_courses(courses: &[Course]) {
    println!("============================================");
    for course in courses {
        println!(
            "ID: {:<6}日期: {:<12}课程: {:<20}描述: {}",
            course.id,
            course.date_label(),
            course.name,
            course.description.as_deref().unwrap_or_default()
        );
    }
    println!("============================================");
}
