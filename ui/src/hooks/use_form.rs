use std::rc::Rc;

use content::{FormBuffer, FormError, FormKind, FormStatus, SubmissionTicket};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub buffer: FormBuffer,
    /// Why the last submit was refused, cleared by the next good one.
    pub error: Option<FormError>,
}

pub enum FormAction {
    Set { field: String, value: String },
    Submit,
    Expire(SubmissionTicket),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            FormAction::Set { field, value } => {
                if let Err(e) = next.buffer.set(&field, value) {
                    tracing::warn!(error = %e, "dropping form input");
                }
            }
            FormAction::Submit => match next.buffer.submit() {
                Ok(_) => {
                    next.error = None;
                    log_submission(&next.buffer);
                }
                Err(e) => {
                    tracing::debug!(
                        form = ?next.buffer.kind(),
                        error = %e,
                        "form not submitted"
                    );
                    next.error = Some(e);
                }
            },
            FormAction::Expire(ticket) => {
                next.buffer.expire(ticket);
            }
        }

        Rc::new(next)
    }
}

/// Stand-in for delivery: the submission only goes to the console.
fn log_submission(buffer: &FormBuffer) {
    match serde_json::to_string(&buffer.submission()) {
        Ok(json) => {
            tracing::info!(form = ?buffer.kind(), %json, "form submitted")
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not encode form submission")
        }
    }
}

/// Name and value of the form control an input event came from.
fn changed_field<E: TargetCast>(e: &E) -> Option<(String, String)> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    e.target_dyn_into::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

#[derive(Clone)]
pub struct UseFormHandle {
    state: UseReducerHandle<FormState>,
}

impl UseFormHandle {
    pub fn value(&self, field: &str) -> AttrValue {
        AttrValue::from(self.state.buffer.get(field).to_string())
    }

    pub fn is_submitted(&self) -> bool {
        self.state.buffer.is_submitted()
    }

    pub fn error(&self) -> Option<&FormError> {
        self.state.error.as_ref()
    }

    /// For `<input>` and `<textarea>`; the control's `name` picks the field.
    pub fn oninput(&self) -> Callback<InputEvent> {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some((field, value)) = changed_field(&e) {
                dispatcher.dispatch(FormAction::Set { field, value });
            }
        })
    }

    /// For `<select>`.
    pub fn onchange(&self) -> Callback<Event> {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |e: Event| {
            if let Some((field, value)) = changed_field(&e) {
                dispatcher.dispatch(FormAction::Set { field, value });
            }
        })
    }

    pub fn onsubmit(&self) -> Callback<SubmitEvent> {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    }
}

/// Local form state. After a successful submit the success state is shown
/// for the form's reset delay, then every field is cleared. The pending
/// reset is cancelled if the component unmounts first.
#[hook]
pub fn use_form(kind: FormKind) -> UseFormHandle {
    let state = use_reducer(move || FormState {
        buffer: FormBuffer::new(kind),
        error: None,
    });

    {
        let dispatcher = state.dispatcher();
        let status = state.buffer.status();
        use_effect_with(status, move |status| {
            let pending = match *status {
                FormStatus::Submitted(ticket) => {
                    let delay = u32::try_from(kind.reset_delay().as_millis())
                        .unwrap_or(u32::MAX);
                    Some(Timeout::new(delay, move || {
                        dispatcher.dispatch(FormAction::Expire(ticket));
                    }))
                }
                FormStatus::Editing => None,
            };
            move || drop(pending)
        });
    }

    UseFormHandle { state }
}
