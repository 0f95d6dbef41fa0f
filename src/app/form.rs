//! Form submission handler
//!
//! Platform-independent core of the course form: greets once on start-up,
//! then turns every submit event into one `add_course` call. Success shows a
//! notification and reloads the page; failure is handed back untouched so
//! the caller can report it as unhandled. Nothing is retried or recovered.

use std::cell::Cell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::config::FormFields;
use crate::error::Result;
use crate::interface::{CourseApi, Page, SubmitEvent};
use crate::model::structs::{CourseForm, SubmitState};

/// Notification shown once a course has been added
pub const SUCCESS_MESSAGE: &str = "添加成功";

/// Outstanding part of one submission
pub type Submission = LocalBoxFuture<'static, Result<()>>;

pub struct FormSubmissionHandler<A, P> {
    api: Rc<A>,
    page: Rc<P>,
    fields: FormFields,
    in_flight: Rc<Cell<usize>>,
}

impl<A, P> Clone for FormSubmissionHandler<A, P> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            page: Rc::clone(&self.page),
            fields: self.fields.clone(),
            in_flight: Rc::clone(&self.in_flight),
        }
    }
}

impl<A, P> FormSubmissionHandler<A, P>
where
    A: CourseApi + 'static,
    P: Page + 'static,
{
    /// Start-up step: greets exactly once, then the handler is ready for events
    pub fn init(api: A, page: P, fields: FormFields) -> Self {
        api.greet();
        log::debug!("form handler ready on #{}", fields.form);

        Self {
            api: Rc::new(api),
            page: Rc::new(page),
            fields,
            in_flight: Rc::new(Cell::new(0)),
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn api(&self) -> &Rc<A> {
        &self.api
    }

    pub fn page(&self) -> &Rc<P> {
        &self.page
    }

    pub fn state(&self) -> SubmitState {
        match self.in_flight.get() {
            0 => SubmitState::Idle,
            n => SubmitState::Submitting(n),
        }
    }

    /// Read both fields as they are right now
    pub fn read_form(&self) -> Result<CourseForm> {
        Ok(CourseForm {
            name: self.page.field_value(&self.fields.name)?,
            description: self.page.field_value(&self.fields.description)?,
        })
    }

    /// React to one submit event.
    ///
    /// The default action is suppressed and the fields are read before this
    /// returns; the returned future performs the call and its follow-up.
    pub fn handle_submit<E: SubmitEvent>(&self, event: &E) -> Result<Submission> {
        event.prevent_default();
        let form = self.read_form()?;
        Ok(self.submit(form))
    }

    /// Send one captured form to the course module
    pub fn submit(&self, form: CourseForm) -> Submission {
        let api = Rc::clone(&self.api);
        let page = Rc::clone(&self.page);
        let guard = InFlight::enter(Rc::clone(&self.in_flight));

        async move {
            let result = api.add_course(&form.name, &form.description).await;
            drop(guard);

            let payload = result?;
            log::debug!("course {:?} added: {payload}", form.name);

            page.alert(SUCCESS_MESSAGE);
            page.reload().await
        }
        .boxed_local()
    }
}

/// Counts a submission as outstanding until dropped
struct InFlight(Rc<Cell<usize>>);

impl InFlight {
    fn enter(counter: Rc<Cell<usize>>) -> Self {
        counter.set(counter.get() + 1);
        InFlight(counter)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}
