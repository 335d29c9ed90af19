//! System notification observers.

pub mod observers;

pub use observers::{install_termination_observer, install_workspace_observers};
