use log::warn;
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

use crate::lead::models::{service_option, LeadSubmission};

pub const LEAD_EVENT: &str = "Lead";

/// Best-effort conversion tracking. Implementations must never fail the caller.
pub trait AnalyticsSink {
    fn track(&self, event: &str, params: &Value);
}

/// Forwards events to the Meta pixel (`window.fbq`) when the page loaded it.
pub struct PixelSink;

impl AnalyticsSink for PixelSink {
    fn track(&self, event: &str, params: &Value) {
        let Some(window) = web_sys::window() else { return };
        let fbq = match Reflect::get(&window, &JsValue::from_str("fbq")) {
            Ok(value) => value,
            Err(_) => return,
        };
        let Ok(fbq) = fbq.dyn_into::<Function>() else { return };

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let params = match params.serialize(&serializer) {
            Ok(params) => params,
            Err(e) => {
                warn!("Could not convert analytics params: {}", e);
                return;
            }
        };
        if let Err(e) = fbq.call3(&JsValue::NULL, &"track".into(), &event.into(), &params) {
            warn!("fbq call failed: {:?}", e);
        }
    }
}

pub fn lead_params(submission: &LeadSubmission) -> Value {
    json!({
        "value": submission.form.estimated_price,
        "currency": "USD",
        "content_name": service_option(submission.form.service_detail).label,
    })
}

pub fn track_lead(sink: &dyn AnalyticsSink, submission: &LeadSubmission) {
    sink.track(LEAD_EVENT, &lead_params(submission));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::form_state::LeadState;
    use crate::lead::models::ServiceVariant;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        events: RefCell<Vec<(String, Value)>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn track(&self, event: &str, params: &Value) {
            self.events.borrow_mut().push((event.to_string(), params.clone()));
        }
    }

    fn ready_to_submit() -> LeadState {
        let mut state = LeadState::default();
        state.set_name("Mike Ross".into());
        state.set_email("mike@example.com".into());
        state.set_phone("8435550100");
        state.set_zip("29464");
        state.next_step().unwrap();
        state.next_step().unwrap();
        state.set_service(ServiceVariant::MoveInOut);
        state
    }

    #[test]
    fn one_lead_event_per_accepted_submit() {
        let sink = RecordingSink::default();
        let mut state = ready_to_submit();

        if let Some(submission) = state.begin_submission() {
            track_lead(&sink, &submission);
        }
        // still in flight, so this one is rejected
        if let Some(submission) = state.begin_submission() {
            track_lead(&sink, &submission);
        }

        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        let (name, params) = &events[0];
        assert_eq!(name, LEAD_EVENT);
        assert_eq!(params["value"], 255);
        assert_eq!(params["currency"], "USD");
        assert_eq!(params["content_name"], "Move-In / Move-Out");
    }
}
