//! Browser helpers kept apart from component logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! `download` turns chart images and tabular records into file downloads.
//! Off the browser every helper is a no-op that reports `false`.

pub mod download;
