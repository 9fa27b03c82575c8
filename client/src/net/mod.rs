//! Networking for the backend HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `agent` defines the transport seam used by the chat controller and its
//! browser implementation over `gloo-net`.

pub mod agent;
