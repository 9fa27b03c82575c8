//! UI components for the chat page.

pub mod chart_actions;
pub mod chat_panel;
pub mod message_bubble;
