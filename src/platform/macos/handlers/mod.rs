//! macOS event dispatch.

pub mod dispatcher;

pub use dispatcher::AppShell;
