//! Chat transcript, session and the query controller.
//!
//! A submission is split around the network await so the state can live in
//! a reactive signal: [`ChatState::begin_query`] validates input, records the
//! user entry and builds the request; the caller sends it through an
//! [`AgentTransport`](crate::net::agent::AgentTransport); then
//! [`ChatState::finish_query`] applies whatever came back. Each non-empty
//! submission therefore adds exactly two entries.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use protocol::{AgentOutcome, AgentRequest, HealthResponse, Session};

use super::view::{MessageView, render_outcome};
use crate::config::MENU_CURRENCY_SYMBOL;
use crate::net::agent::TransportError;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "An error occurred while processing your request. Please try again.";
pub const HEALTHY_MESSAGE: &str = "Connected to POS system successfully! Agent mode is active.";
pub const UNHEALTHY_MESSAGE: &str = "Warning: Backend service may not be available.";
pub const UNREACHABLE_MESSAGE: &str = "Warning: Could not connect to the backend service.";

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub id: String,
    pub view: MessageView,
}

/// State for the chat page.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    pub session: Session,
    /// Set while a query is in flight; drives the loading overlay.
    pub busy: bool,
    /// Bumped on every append so the transcript can scroll to its end.
    pub scroll_seq: u64,
    pub currency_symbol: &'static str,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            session: Session::new(),
            busy: false,
            scroll_seq: 0,
            currency_symbol: MENU_CURRENCY_SYMBOL,
        }
    }
}

impl ChatState {
    pub fn push(&mut self, view: MessageView) {
        self.entries.push(ChatEntry {
            id: uuid::Uuid::new_v4().to_string(),
            view,
        });
        self.scroll_seq += 1;
    }

    pub fn push_system(&mut self, text: impl Into<String>) {
        self.push(MessageView::System { text: text.into() });
    }

    /// Start a submission.
    ///
    /// Returns `None` and leaves the state untouched when `text` is blank.
    /// Otherwise appends the user entry, marks the state busy and returns the
    /// request to send, carrying the session id once one is known.
    pub fn begin_query(&mut self, text: &str, merchant_id: &str) -> Option<AgentRequest> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }
        self.push(MessageView::User { text: query.to_owned() });
        self.busy = true;
        Some(self.session.request(query, merchant_id))
    }

    /// Complete a submission with the transport result.
    ///
    /// Adopts any session id the body carries (whatever the status), appends
    /// exactly one response entry and clears the busy flag.
    pub fn finish_query(&mut self, result: Result<AgentOutcome, TransportError>) {
        self.busy = false;
        let view = match result {
            Ok(outcome) => {
                self.session = std::mem::take(&mut self.session).absorb(&outcome.body);
                render_outcome(&outcome, self.currency_symbol)
            }
            Err(err) => {
                log::warn!("agent query failed: {err}");
                MessageView::System {
                    text: TRANSPORT_FAILURE_MESSAGE.to_owned(),
                }
            }
        };
        self.push(view);
    }

    /// Record the startup health probe result as a system line.
    pub fn apply_health(&mut self, result: Result<HealthResponse, TransportError>) {
        if let Err(err) = &result {
            log::warn!("health check failed: {err}");
        }
        self.push_system(health_message(&result));
    }
}

#[must_use]
pub fn health_message(result: &Result<HealthResponse, TransportError>) -> &'static str {
    match result {
        Ok(health) if health.is_healthy() => HEALTHY_MESSAGE,
        Ok(_) => UNHEALTHY_MESSAGE,
        Err(_) => UNREACHABLE_MESSAGE,
    }
}
