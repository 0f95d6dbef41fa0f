//! No-WASM course client implementation using reqwest
//!
//! This module talks to the course service from native builds
//! (the terminal front-end and integration tests).

use crate::config::ClientConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{CourseApi, HttpClient};
use crate::model::dtos::{CourseKey, CreateCourse};
use crate::model::structs::Course;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Response,
};
use serde_json::Value;

/// Course client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient for NoWasmClient {
    async fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, config })
    }
}

impl NoWasmClient {
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Handle JSON response with error checking
    async fn handle_json_response(resp: Response) -> Result<Value> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(ErrorKind::CourseError(format!("HTTP {}: {}", status.as_u16(), text)).into());
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(json) => {
                if let Some(error) = json.get("error") {
                    return Err(ErrorKind::CourseError(error.to_string()).into());
                }
                Ok(json)
            }
            Err(_) => Err(ErrorKind::ParseError(format!("Invalid JSON response: {text}")).into()),
        }
    }
}

impl CourseApi for NoWasmClient {
    fn greet(&self) {
        println!("Hello, {}!", self.config.greeting);
    }

    async fn add_course(&self, name: &str, description: &str) -> Result<Value> {
        let url = self.config.endpoint("courses/");
        let body = CreateCourse {
            teacher_id: self.config.teacher_id,
            name,
            description,
        };

        log::debug!("POST {url} name={name:?}");

        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        Self::handle_json_response(resp).await
    }

    async fn get_courses_for_teacher(&self, teacher_id: i32) -> Result<Vec<Course>> {
        let url = self.config.endpoint(&format!("courses/{teacher_id}"));
        let resp = self.client.get(&url).send().await?;
        let json = Self::handle_json_response(resp).await?;

        log::debug!("Loaded course list for teacher {teacher_id}");

        serde_json::from_value(json).map_err(Into::into)
    }

    async fn delete_course(&self, key: CourseKey) -> Result<Value> {
        let url = self
            .config
            .endpoint(&format!("courses/{}/{}", key.teacher_id, key.course_id));
        let resp = self.client.delete(&url).send().await?;

        Self::handle_json_response(resp).await
    }
}
