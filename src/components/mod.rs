//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render plain state handed to them by the roster page and raise
//! user intents through callbacks; none of them talk to the network.

pub mod activity_card;
pub mod message_banner;
