//! WASM application implementation
//!
//! Browser bindings for the course form: a `Page` over the live DOM, the
//! submit listener wiring, the course table and the `#[wasm_bindgen]` entry
//! points.

use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement,
    MouseEvent, Window,
};

use super::{FormSubmissionHandler, DELETED_MESSAGE};
use crate::client::gloo::WasmClient;
use crate::config::{ClientConfig, FormFields};
use crate::error::{ErrorKind, Result};
use crate::interface::{CourseApi, HttpClient, Page, SubmitEvent};
use crate::model::dtos::CourseKey;
use crate::model::structs::Course;

impl SubmitEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// `Page` backed by the browser window
#[derive(Debug, Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ErrorKind::ParseError("no global window exists".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| ErrorKind::ParseError("no global document exists".to_string()))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ErrorKind::ElementNotFound(id.to_string()).into())
    }
}

impl Page for DomPage {
    fn field_value(&self, id: &str) -> Result<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Ok(input.value())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            Ok(area.value())
        } else {
            Err(ErrorKind::NotAField(id.to_string()).into())
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {e:?}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    async fn reload(&self) -> Result<()> {
        self.window.location().reload()?;
        Ok(())
    }
}

/// Register the submit listener on the form element.
///
/// The form is looked up once; a missing form is returned as an error.
/// Failures of individual submissions are logged and otherwise left alone.
pub fn mount<A>(handler: FormSubmissionHandler<A, DomPage>) -> Result<()>
where
    A: CourseApi + 'static,
{
    let form = handler.page().element(&handler.fields().form)?;

    let on_submit = Closure::<dyn Fn(Event)>::new(move |event: Event| {
        match handler.handle_submit(&event) {
            Ok(submission) => spawn_local(async move {
                if let Err(e) = submission.await {
                    log::error!("unhandled add_course failure: {e}");
                }
            }),
            Err(e) => log::error!("unhandled submit failure: {e}"),
        }
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // the listener lives as long as the page
    on_submit.forget();

    Ok(())
}

/// Fill the course table with one row per course, each with a delete button
pub async fn render_course_table<A>(
    api: Rc<A>,
    page: Rc<DomPage>,
    tbody_id: &str,
    teacher_id: i32,
) -> Result<()>
where
    A: CourseApi + 'static,
{
    let tbody = page.element(tbody_id)?;
    let courses = api.get_courses_for_teacher(teacher_id).await?;
    log::debug!("rendering {} courses", courses.len());

    for course in courses.iter() {
        let row = course_row(&api, &page, course)?;
        tbody.append_child(&row)?;
    }
    Ok(())
}

fn course_row<A>(api: &Rc<A>, page: &Rc<DomPage>, course: &Course) -> Result<Element>
where
    A: CourseApi + 'static,
{
    let document = page.document();

    let tr = document.create_element("tr")?;
    tr.set_attribute("id", &format!("tr-{}", course.id))?;

    let cells = [
        course.id.to_string(),
        course.date_label(),
        course.description.clone().unwrap_or_default(),
    ];
    for text in cells {
        let td = document.create_element("td")?;
        td.set_text_content(Some(&text));
        tr.append_child(&td)?;
    }

    let td = document.create_element("td")?;
    let btn = document
        .create_element("button")?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| ErrorKind::ParseError("button is not an HtmlButtonElement".to_string()))?;
    btn.set_attribute("class", "btn btn-danger btn-sm")?;
    btn.set_text_content(Some("Delete"));

    let key = CourseKey {
        teacher_id: course.teacher_id,
        course_id: course.id,
    };
    let api = Rc::clone(api);
    let page = Rc::clone(page);
    let on_click = Closure::<dyn Fn(MouseEvent)>::new(move |_event: MouseEvent| {
        if !page.confirm(&format!("确认删除课程{} 吗?", key.course_id)) {
            return;
        }
        let api = Rc::clone(&api);
        let page = Rc::clone(&page);
        spawn_local(async move {
            if let Err(e) = delete_and_reload(api.as_ref(), page.as_ref(), key).await {
                log::error!("unhandled delete_course failure: {e}");
            }
        });
    });

    btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    td.append_child(&btn)?;
    tr.append_child(&td)?;
    Ok(tr)
}

async fn delete_and_reload<A: CourseApi, P: Page>(
    api: &A,
    page: &P,
    key: CourseKey,
) -> Result<()> {
    api.delete_course(key).await?;
    page.alert(DELETED_MESSAGE);
    page.reload().await
}

/// Browser entry point: logging, greeting, form wiring, course table
#[wasm_bindgen(start)]
pub async fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    if let Err(e) = tracing_log::LogTracer::init() {
        web_sys::console::warn_1(&JsValue::from_str(&format!("log bridge not installed: {e}")));
    }

    let config = ClientConfig::from_build_env();
    let fields = FormFields::default();
    let teacher_id = config.teacher_id;

    let client = WasmClient::new(config).await?;
    let page = DomPage::new()?;
    let handler = FormSubmissionHandler::init(client, page, fields.clone());
    let api = Rc::clone(handler.api());
    let page = Rc::clone(handler.page());

    mount(handler)?;

    if page.document().get_element_by_id(&fields.course_table).is_some() {
        render_course_table(api, page, &fields.course_table, teacher_id).await?;
    } else {
        log::debug!("no #{} on this page, course table skipped", fields.course_table);
    }

    Ok(())
}

/// Greeting exported to JavaScript
#[wasm_bindgen]
pub fn greet() {
    let config = ClientConfig::from_build_env();
    WasmClient::from_config(config).greet();
}

/// `add_course` exported to JavaScript; resolves with the service payload
#[wasm_bindgen]
pub async fn add_course(
    name: String,
    description: String,
) -> std::result::Result<JsValue, JsValue> {
    let client = WasmClient::new(ClientConfig::from_build_env()).await?;
    let payload = client.add_course(&name, &description).await?;
    Ok(payload.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn add_input(page: &DomPage, tag: &str, id: &str, value: &str) {
        let element = page.document().create_element(tag).unwrap();
        element.set_id(id);
        page.document().body().unwrap().append_child(&element).unwrap();
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    #[wasm_bindgen_test]
    fn reads_input_and_textarea_values() {
        let page = DomPage::new().unwrap();
        add_input(&page, "input", "t-name", "Algebra");
        add_input(&page, "textarea", "t-description", "Intro to algebra");
        add_input(&page, "div", "t-div", "");

        assert_eq!(page.field_value("t-name").unwrap(), "Algebra");
        assert_eq!(page.field_value("t-description").unwrap(), "Intro to algebra");
        assert!(matches!(
            page.field_value("t-div").unwrap_err().kind(),
            ErrorKind::NotAField(_)
        ));
        assert!(matches!(
            page.field_value("t-missing").unwrap_err().kind(),
            ErrorKind::ElementNotFound(_)
        ));
    }

    #[derive(Default)]
    struct RecordingApi {
        calls: std::cell::RefCell<Vec<(String, String)>>,
    }

    impl CourseApi for RecordingApi {
        fn greet(&self) {}

        // rejects so the test page is never reloaded
        async fn add_course(&self, name: &str, description: &str) -> Result<serde_json::Value> {
            self.calls
                .borrow_mut()
                .push((name.to_string(), description.to_string()));
            Err(ErrorKind::CourseError("not stored".to_string()).into())
        }

        async fn get_courses_for_teacher(&self, _teacher_id: i32) -> Result<Vec<Course>> {
            Ok(Vec::new())
        }

        async fn delete_course(&self, _key: CourseKey) -> Result<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }
    }

    fn cancelable_submit() -> Event {
        let init = web_sys::EventInit::new();
        init.set_cancelable(true);
        Event::new_with_event_init_dict("submit", &init).unwrap()
    }

    /// Let tasks queued with `spawn_local` run
    async fn next_tick() {
        wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
            .await
            .unwrap();
    }

    #[wasm_bindgen_test]
    fn mount_without_form_is_element_not_found() {
        let handler = FormSubmissionHandler::init(
            RecordingApi::default(),
            DomPage::new().unwrap(),
            FormFields::default(),
        );

        let err = mount(handler).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ElementNotFound(id) if id == "form"));
    }

    #[wasm_bindgen_test]
    async fn mounted_form_submit_calls_add_course() {
        let page = DomPage::new().unwrap();
        add_input(&page, "form", "m-form", "");
        add_input(&page, "input", "m-name", "Algebra");
        add_input(&page, "textarea", "m-description", "Intro to algebra");

        let fields = FormFields {
            form: "m-form".to_string(),
            name: "m-name".to_string(),
            description: "m-description".to_string(),
            ..Default::default()
        };
        let handler = FormSubmissionHandler::init(RecordingApi::default(), page.clone(), fields);
        let api = Rc::clone(handler.api());
        mount(handler).unwrap();

        let event = cancelable_submit();
        let form = page.element("m-form").unwrap();
        form.dispatch_event(&event).unwrap();
        assert!(event.default_prevented());

        next_tick().await;
        assert_eq!(
            *api.calls.borrow(),
            vec![("Algebra".to_string(), "Intro to algebra".to_string())]
        );
    }

    #[wasm_bindgen_test]
    fn submit_event_default_is_suppressed() {
        let event = cancelable_submit();
        SubmitEvent::prevent_default(&event);
        assert!(event.default_prevented());
    }
}
