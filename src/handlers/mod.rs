//! Event handlers and dispatching.

pub mod dispatcher;

pub use dispatcher::{dispatch_event, dispatch_events, Dispatch};
