//! Client-side chat state and the view layer it renders through.
//!
//! DESIGN
//! ======
//! `chat` owns the transcript, the session and the busy flag, and applies
//! transport results to them. `view` is pure: it maps classified replies to
//! message descriptions, so everything above the components is testable
//! without a DOM.

pub mod chat;
pub mod view;
