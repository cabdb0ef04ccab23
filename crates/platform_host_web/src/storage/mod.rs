//! Browser client-state storage.

pub mod local_state;
