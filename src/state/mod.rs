//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is split by concern (`roster`, `message`, `form`) into plain data
//! types so the controller logic can be exercised without a browser. The page
//! wraps each one in an `RwSignal`.

pub mod form;
pub mod message;
pub mod roster;
