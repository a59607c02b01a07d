//! Networking modules for the activities REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the three REST calls and the backend seam used by the
//! controller; `types` defines the JSON wire schema.

pub mod api;
pub mod types;
