use std::fmt::Debug;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::intent::{Intent, classify};
use super::picker::{FirstPicker, RandomPicker, TemplatePicker};
use super::templates::{WELCOME, render, templates_for};
use crate::message::ChatResponse;

/// Stateless message → reply mapper. Cloning shares the picker.
#[derive(Clone)]
pub struct Responder {
    picker: Arc<dyn TemplatePicker>,
}

impl Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder").finish_non_exhaustive()
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::random()
    }
}

impl Responder {
    pub fn new(picker: Arc<dyn TemplatePicker>) -> Self {
        Self { picker }
    }

    pub fn random() -> Self {
        Self::new(Arc::new(RandomPicker))
    }

    /// Always answers with the first template of each intent.
    pub fn deterministic() -> Self {
        Self::new(Arc::new(FirstPicker))
    }

    pub fn classify_and_respond(&self, message: &str, session_id: Option<&str>) -> ChatResponse {
        let (intent, response) = self.reply(message);

        ChatResponse {
            response,
            intent,
            session_id: resolve_session_id(session_id),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    fn reply(&self, message: &str) -> (Intent, String) {
        if message.trim().is_empty() {
            return (Intent::Greeting, WELCOME.to_string());
        }

        let intent = classify(message);
        let candidates = templates_for(intent);
        // Clamp so a misbehaving picker can't push us out of bounds.
        let index = self.picker.pick(candidates.len()).min(candidates.len() - 1);

        (intent, render(candidates[index], message))
    }
}

fn resolve_session_id(session_id: Option<&str>) -> String {
    match session_id {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPicker(usize);

    impl TemplatePicker for FixedPicker {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn out_of_range_pick_is_clamped() {
        let responder = Responder::new(Arc::new(FixedPicker(usize::MAX)));
        let resp = responder.classify_and_respond("thanks a lot", None);
        assert_eq!(resp.intent, Intent::Gratitude);
        let last = templates_for(Intent::Gratitude).last().unwrap();
        assert_eq!(resp.response, *last);
    }

    #[test]
    fn blank_session_id_is_replaced() {
        let responder = Responder::deterministic();
        let resp = responder.classify_and_respond("hello", Some("   "));
        assert!(!resp.session_id.trim().is_empty());
        assert_ne!(resp.session_id, "   ");
    }
}
