//! WASM course client implementation using gloo_net
//!
//! This module provides the course module for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::config::ClientConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{CourseApi, HttpClient};
use crate::model::dtos::{CourseKey, CreateCourse};
use crate::model::structs::Course;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use web_sys::{RequestCredentials, RequestMode};

/// Course client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    config: ClientConfig,
}

impl HttpClient for WasmClient {
    async fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_config(config))
    }
}

impl WasmClient {
    // gloo_net 直接使用浏览器的 fetch API, 没有需要初始化的连接
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Apply the headers and CORS settings every course request shares
    fn with_defaults(builder: RequestBuilder) -> RequestBuilder {
        builder
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json")
    }

    /// Handle JSON response with error checking
    async fn handle_json_response(resp: Response) -> Result<Value> {
        let status = resp.ok();
        let text = resp.text().await?;

        if !status {
            return Err(ErrorKind::CourseError(format!("HTTP {}: {}", resp.status(), text)).into());
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

impl CourseApi for WasmClient {
    fn greet(&self) {
        let message = format!("Hello, {}!", self.config.greeting);
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(&message) {
                    log::warn!("greeting alert failed: {e:?}");
                }
            }
            None => log::info!("{message}"),
        }
    }

    async fn add_course(&self, name: &str, description: &str) -> Result<Value> {
        let url = self.config.endpoint("courses/");
        let body = CreateCourse {
            teacher_id: self.config.teacher_id,
            name,
            description,
        };

        log::debug!("POST {url} name={name:?}");

        let resp = Self::with_defaults(Request::post(&url))
            .header("Content-Type", "application/json")
            .json(&body)?
            .send()
            .await?;

        Self::handle_json_response(resp).await
    }

    async fn get_courses_for_teacher(&self, teacher_id: i32) -> Result<Vec<Course>> {
        let url = self.config.endpoint(&format!("courses/{teacher_id}"));
        let resp = Self::with_defaults(Request::get(&url)).send().await?;
        let json = Self::handle_json_response(resp).await?;

        serde_json::from_value(json).map_err(Into::into)
    }

    async fn delete_course(&self, key: CourseKey) -> Result<Value> {
        let url = self
            .config
            .endpoint(&format!("courses/{}/{}", key.teacher_id, key.course_id));
        let resp = Self::with_defaults(Request::delete(&url)).send().await?;

        Self::handle_json_response(resp).await
    }
}
