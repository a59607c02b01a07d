//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns orchestration (initial load, event wiring) and delegates
//! rendering details to `components`.

pub mod roster;
