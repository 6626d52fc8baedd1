//! Observer hooks for hosts that want to follow a session's lifecycle.

pub mod plugins;

pub use plugins::{SessionContext, SessionEvent, SessionPlugin};
