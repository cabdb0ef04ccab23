//! Client-persisted key/value state.

pub mod client_state;
