//! Chat assistant: single-flight conversation with a bounded FIFO history.
//!
//! A send is split in two halves so the event loop never holds the assistant
//! across an await: [`ChatAssistant::begin_send`] records the user message and
//! produces the prompt, and `complete_*` records the outcome. [`ChatAssistant::send`]
//! runs both halves against a [`ChatPort`] in one call.

use std::collections::VecDeque;

use trip_types::{TripError, message::ConversationMessage};

use crate::ports::ChatPort;

/// Shown in place of a reply when the backend fails
pub const CHAT_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't get a response. Please try again in a moment.";

const SYSTEM_INSTRUCTION: &str = "You are an expert travel assistant. The user has the \
following itinerary and might ask questions about it. Use this context to provide helpful answers.";

/// Read-only context handed to the assistant, derived from the itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatContext {
    pub itinerary: String,
    pub weather: String,
}

pub struct ChatAssistant {
    history: VecDeque<ConversationMessage>,
    max_memory: usize,
    in_flight: bool,
}

impl ChatAssistant {
    pub fn new(max_memory: usize) -> Self {
        Self {
            history: VecDeque::new(),
            max_memory: max_memory.max(1),
            in_flight: false,
        }
    }

    pub fn history(&self) -> &VecDeque<ConversationMessage> {
        &self.history
    }

    pub fn max_memory(&self) -> usize {
        self.max_memory
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight
    }

    /// Record the user's message and build the prompt for the backend.
    ///
    /// Returns `None` (and changes nothing) for blank input or while another
    /// request is outstanding.
    pub fn begin_send(&mut self, text: &str, context: &ChatContext) -> Option<String> {
        if text.trim().is_empty() || self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.push(ConversationMessage::user(text));
        Some(build_prompt(context, self.history.iter()))
    }

    pub fn complete_reply(&mut self, text: impl Into<String>) {
        if !self.take_in_flight() {
            return;
        }
        self.push(ConversationMessage::assistant(text));
    }

    pub fn complete_failure(&mut self, error: &TripError) {
        if !self.take_in_flight() {
            return;
        }
        log::error!("Chat assistant request failed: {}", error);
        self.push(ConversationMessage::assistant(CHAT_FAILURE_MESSAGE));
    }

    /// Full send against a backend. Returns `false` when the input was rejected.
    pub async fn send(&mut self, text: &str, context: &ChatContext, backend: &dyn ChatPort) -> bool {
        let Some(prompt) = self.begin_send(text, context) else {
            return false;
        };
        match backend.generate(&prompt).await {
            Ok(reply) => self.complete_reply(reply),
            Err(e) => self.complete_failure(&e),
        }
        true
    }

    fn take_in_flight(&mut self) -> bool {
        if !self.in_flight {
            log::debug!("Dropping chat completion with no request outstanding");
            return false;
        }
        self.in_flight = false;
        true
    }

    fn push(&mut self, message: ConversationMessage) {
        self.history.push_back(message);
        while self.history.len() > self.max_memory {
            self.history.pop_front();
        }
    }
}

/// System instruction with both context blocks, then the history as `role: content` lines.
pub fn build_prompt<'a, I>(context: &ChatContext, history: I) -> String
where
    I: IntoIterator<Item = &'a ConversationMessage>,
{
    let lines: Vec<String> = history.into_iter().map(|m| m.prompt_line()).collect();
    format!(
        "{}\n\n--- ITINERARY START ---\n{}\n--- ITINERARY END --- --- WEATHER START ---{}--- WEATHER END ---\n\n{}",
        SYSTEM_INSTRUCTION,
        context.itinerary,
        context.weather,
        lines.join("\n")
    )
}
