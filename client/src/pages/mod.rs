//! Top-level routed pages.

pub mod chat;
