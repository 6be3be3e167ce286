//! Conversation domain.
//!
//! - [`entities::Conversation`] - the ordered message sequence for one session
//! - [`entities::Message`] - a single role-tagged message within it

pub mod entities;
